//!
//! # Shared geometric definitions
//!
//! `Geo` names the coordinate type used by a curve, arc or line. `BoundingBox` describes
//! axis-aligned bounds: the kernel's bounding box routines are generic over it, with `Bounds`
//! as the default implementation.
//!

mod geo;
mod bounding_box;

pub use self::geo::*;
pub use self::bounding_box::*;
pub use super::coordinate::*;
