use super::basis::*;
use super::super::coordinate::*;

///
/// Subdivides a cubic bezier curve at a particular point, returning the weights of
/// the two component curves
///
pub fn subdivide4<Point: Coordinate>(t: f64, w1: Point, w2: Point, w3: Point, w4: Point) ->
    ((Point, Point, Point, Point),
    (Point, Point, Point, Point)) {
    // Weights (from de casteljau)
    let wn1 = de_casteljau2(t, w1, w2);
    let wn2 = de_casteljau2(t, w2, w3);
    let wn3 = de_casteljau2(t, w3, w4);

    // Further refine the weights
    let wnn1 = de_casteljau2(t, wn1, wn2);
    let wnn2 = de_casteljau2(t, wn2, wn3);

    // Get the point at which the two curves join
    let p = de_casteljau2(t, wnn1, wnn2);

    // Curves are built from the weight calculations and the final points
    ((w1, wn1, wnn1, p), (p, wnn2, wn3, w4))
}

///
/// Subdivides a quadratic bezier curve at a particular point, returning the weights of
/// the two component curves
///
pub fn subdivide3<Point: Coordinate>(t: f64, w1: Point, w2: Point, w3: Point) ->
    ((Point, Point, Point),
    (Point, Point, Point)) {
    let wn1 = de_casteljau2(t, w1, w2);
    let wn2 = de_casteljau2(t, w2, w3);
    let p   = de_casteljau2(t, wn1, wn2);

    ((w1, wn1, p), (p, wn2, w3))
}

///
/// Returns the weights of the section of a cubic bezier curve between two t values
///
pub fn section4<Point: Coordinate>(t_min: f64, t_max: f64, w1: Point, w2: Point, w3: Point, w4: Point) -> (Point, Point, Point, Point) {
    if t_max <= 0.0 {
        return (w1, w1, w1, w1);
    }

    // Cut off everything after t_max, then everything before t_min (rescaled into the first section)
    let (first, _)  = subdivide4(t_max, w1, w2, w3, w4);
    let t_min       = t_min / t_max;

    if t_min <= 0.0 {
        first
    } else {
        let (_, section) = subdivide4(t_min, first.0, first.1, first.2, first.3);
        section
    }
}

///
/// Returns the weights of the section of a quadratic bezier curve between two t values
///
pub fn section3<Point: Coordinate>(t_min: f64, t_max: f64, w1: Point, w2: Point, w3: Point) -> (Point, Point, Point) {
    if t_max <= 0.0 {
        return (w1, w1, w1);
    }

    let (first, _)  = subdivide3(t_max, w1, w2, w3);
    let t_min       = t_min / t_max;

    if t_min <= 0.0 {
        first
    } else {
        let (_, section) = subdivide3(t_min, first.0, first.1, first.2);
        section
    }
}
