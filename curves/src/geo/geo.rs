use super::super::coordinate::*;

///
/// Implemented by geometric objects (curves, arcs, lines and bounding boxes) to name the
/// coordinate type their points are expressed in
///
pub trait Geo {
    type Point: Coordinate;
}
