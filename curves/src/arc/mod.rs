//!
//! # Describing elliptical arcs
//!
//! The `arc` module describes elliptical arcs the way SVG paths do: by their end points, their
//! radii, the rotation of the ellipse and the large-arc and sweep flags. These can be converted
//! to a center parameterization, which is what the geometric routines here work with.
//!

mod elliptical_arc;
mod nearest;
mod intersection;

pub use self::elliptical_arc::*;
pub use self::nearest::*;
pub use self::intersection::*;
