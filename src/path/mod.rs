mod path;
mod path_string;
mod parse;
mod serialize;
mod geometry;
mod hit_test;

pub use self::path::*;
pub use self::path_string::*;
pub use self::geometry::*;
pub use self::hit_test::*;
