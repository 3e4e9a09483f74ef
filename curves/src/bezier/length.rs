use super::curve::*;
use super::subdivide::*;

use super::super::coordinate::*;

/// Maximum number of times a curve is subdivided while measuring it
const MAX_LENGTH_DEPTH: usize = 16;

///
/// Computes the length of a bezier curve
///
/// The curve is subdivided until the length of its control polygon is within `max_error` of
/// its chord, at which point the average of the two is used as the length of that section.
///
pub fn curve_length<C: BezierCurve>(curve: &C, max_error: f64) -> f64 {
    let (cp1, cp2) = curve.control_points();
    section_length(curve.start_point(), cp1, cp2, curve.end_point(), max_error.max(1e-12), 0)
}

fn section_length<Point: Coordinate>(w1: Point, w2: Point, w3: Point, w4: Point, max_error: f64, depth: usize) -> f64 {
    let chord   = w1.distance_to(&w4);
    let polygon = w1.distance_to(&w2) + w2.distance_to(&w3) + w3.distance_to(&w4);

    if polygon - chord <= max_error || depth >= MAX_LENGTH_DEPTH {
        (chord + polygon) * 0.5
    } else {
        let (first, second) = subdivide4(0.5, w1, w2, w3, w4);

        section_length(first.0, first.1, first.2, first.3, max_error*0.5, depth+1)
            + section_length(second.0, second.1, second.2, second.3, max_error*0.5, depth+1)
    }
}
