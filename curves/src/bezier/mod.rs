//!
//! # Routines for describing, querying and manipulating Bezier curves
//!
//! ```
//! # use flo_morph_curves::*;
//! # use flo_morph_curves::bezier::*;
//! #
//! let curve           = Curve::from_points(Coord2(1.0, 2.0), (Coord2(2.0, 0.0), Coord2(3.0, 5.0)), Coord2(4.0, 2.0));
//!
//! let mid_point       = curve.point_at_pos(0.5);
//! let (t, nearest)    = curve.nearest_point(&Coord2(2.5, 4.0));
//! let bounds: Bounds<_> = curve.bounding_box();
//! ```
//!
//! Cubic curves are described by the `BezierCurve` trait, with `Curve` as the default
//! implementation. Quadratic curves are represented by `QuadraticCurve` and are generally
//! processed by raising them to cubics, which preserves their parameterization.
//!
//! The lower-level routines work on the weights directly (`de_casteljau4`, `subdivide4`,
//! `bounding_box4`) so they can be used without constructing a curve.
//!

mod basis;
mod subdivide;
mod derivative;
mod bounds;
mod curve;
mod quadratic;
mod length;
mod flatten;
mod nearest;
mod intersection;

pub use self::basis::*;
pub use self::subdivide::*;
pub use self::derivative::*;
pub use self::bounds::*;
pub use self::curve::*;
pub use self::quadratic::*;
pub use self::length::*;
pub use self::flatten::*;
pub use self::nearest::*;
pub use self::intersection::*;

pub use super::geo::*;
