mod command_type;
mod command_id;
mod segment;
mod projection;
mod command;

pub use self::command_type::*;
pub use self::command_id::*;
pub use self::segment::*;
pub use self::projection::*;
pub use self::command::*;
