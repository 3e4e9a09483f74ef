//!
//! # Straight lines
//!
//! Any pair of points can be treated as a line via the `Line` trait. This module
//! provides intersections between lines, the coefficients of the line equation and
//! nearest-point projection.
//!

mod line;
mod nearest;
mod to_curve;
mod intersection;
mod coefficients;

pub use self::line::*;
pub use self::nearest::*;
pub use self::to_curve::*;
pub use self::coefficients::*;
pub use self::intersection::*;

pub use super::geo::*;
