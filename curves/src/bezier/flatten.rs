use super::curve::*;
use super::subdivide::*;

use super::super::coordinate::*;

/// Maximum number of times a curve is subdivided while flattening it
const MAX_FLATTEN_DEPTH: usize = 12;

///
/// Approximates a bezier curve with a polyline, returning the points along it (including the
/// start and end points)
///
/// Sections are subdivided until both control points are within `tolerance` of the chord.
///
pub fn flatten_curve<C: BezierCurve>(curve: &C, tolerance: f64) -> Vec<C::Point> {
    let (cp1, cp2)  = curve.control_points();
    let start       = curve.start_point();
    let mut points  = vec![start];

    flatten_section(start, cp1, cp2, curve.end_point(), tolerance.max(1e-9), 0, &mut points);

    points
}

fn flatten_section<Point: Coordinate>(w1: Point, w2: Point, w3: Point, w4: Point, tolerance: f64, depth: usize, points: &mut Vec<Point>) {
    if depth >= MAX_FLATTEN_DEPTH || (distance_from_chord(&w1, &w4, &w2) <= tolerance && distance_from_chord(&w1, &w4, &w3) <= tolerance) {
        points.push(w4);
    } else {
        let (first, second) = subdivide4(0.5, w1, w2, w3, w4);

        flatten_section(first.0, first.1, first.2, first.3, tolerance, depth+1, points);
        flatten_section(second.0, second.1, second.2, second.3, tolerance, depth+1, points);
    }
}

///
/// Distance from a point to the line segment between two other points
///
fn distance_from_chord<Point: Coordinate>(start: &Point, end: &Point, point: &Point) -> f64 {
    let chord           = *end - *start;
    let length_squared  = chord.dot(&chord);

    if length_squared <= 0.0 {
        point.distance_to(start)
    } else {
        let t       = ((*point - *start).dot(&chord) / length_squared).max(0.0).min(1.0);
        let nearest = *start + chord*t;

        point.distance_to(&nearest)
    }
}
