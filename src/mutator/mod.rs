mod path_edit;
mod path_mutator;
mod split;
mod contour;
mod convert;

pub use self::path_edit::*;
pub use self::path_mutator::*;
pub use self::split::{half_length_t};
pub use self::convert::{convert_segment};
