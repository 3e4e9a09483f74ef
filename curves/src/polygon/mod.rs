//!
//! # Polygons
//!
//! Routines for closed polygons described as a slice of points (the edge from the last point back
//! to the first is implied). These are used with polyline approximations of curved shapes.
//!

mod polygon;
mod pole;

pub use self::polygon::*;
pub use self::pole::*;
