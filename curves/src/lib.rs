//!
//! # flo_morph_curves
//!
//! The geometry kernel used by `flo_morph`. Everything here is a pure function of its inputs:
//! there is no shared state, so all of these routines can be called from any thread.
//!
//! * `bezier` describes cubic and quadratic curves: evaluation, subdivision, bounds, length,
//!   nearest points and intersections with lines
//! * `line` describes straight lines
//! * `arc` describes SVG-style elliptical arcs
//! * `polygon` provides fill-rule tests and the pole of inaccessibility search for polylines
//!
#![warn(bare_trait_objects)]

pub mod bezier;
pub mod line;
pub mod arc;
pub mod polygon;
pub mod consts;

pub mod coordinate;
pub use self::coordinate::*;

pub mod geo;
pub use self::geo::*;

pub use self::bezier::BezierCurve;
pub use self::line::Line;
