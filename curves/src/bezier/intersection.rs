//!
//! Intersections between bezier curves and lines
//!

mod curve_line;

pub use self::curve_line::*;
