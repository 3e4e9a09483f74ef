use super::basis::*;
use super::super::coordinate::*;

///
/// Returns the weights of the 1st derivative of a cubic bezier curve (a quadratic curve)
///
pub fn derivative4<Point: Coordinate>(w1: Point, w2: Point, w3: Point, w4: Point) -> (Point, Point, Point) {
    ((w2-w1)*3.0, (w3-w2)*3.0, (w4-w3)*3.0)
}

///
/// Returns the weights of the 1st derivative of a quadratic bezier curve
///
/// Applied to the result of `derivative4`, this gives the 2nd derivative of a cubic curve.
///
pub fn derivative3<Point: Coordinate>(w1: Point, w2: Point, w3: Point) -> (Point, Point) {
    ((w2-w1)*2.0, (w3-w2)*2.0)
}

///
/// Evaluates the tangent of a cubic bezier curve at the specified t value
///
pub fn tangent_at4<Point: Coordinate>(t: f64, w1: Point, w2: Point, w3: Point, w4: Point) -> Point {
    let (d1, d2, d3) = derivative4(w1, w2, w3, w4);
    de_casteljau3(t, d1, d2, d3)
}
