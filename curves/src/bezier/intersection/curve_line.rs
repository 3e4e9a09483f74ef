use super::super::curve::*;
use super::super::basis::*;
use super::super::quadratic::*;
use super::super::super::line::*;
use super::super::super::consts::*;
use super::super::super::coordinate::*;

use roots::{find_roots_cubic, find_roots_quadratic, Roots};

///
/// Returns true if every point of a curve lies on the line with the specified coefficients
///
#[inline]
fn points_are_collinear<Point: Coordinate2D>(points: &[Point], (a, b, c): (f64, f64, f64)) -> bool {
    points.iter().all(|point| (point.x()*a + point.y()*b + c).abs() < SMALL_T_DISTANCE)
}

///
/// Moves roots that are very slightly outside the range 0-1 onto the end of the curve
///
#[inline]
fn snap_root(t: f64) -> f64 {
    // Allow a small amount of 'slop' for items at the start/end as the root finding is not exact
    if t < 0.0 && t > -ROOT_SLOP { 0.0 }
    else if t > 1.0 && t < 1.0+ROOT_SLOP { 1.0 }
    else { t }
}

///
/// Converts a set of roots into a vector
///
#[inline]
fn roots_to_vec(roots: Roots<f64>) -> Vec<f64> {
    match roots {
        Roots::No(_)    => vec![],
        Roots::One(r)   => r.to_vec(),
        Roots::Two(r)   => r.to_vec(),
        Roots::Three(r) => r.to_vec(),
        Roots::Four(r)  => r.to_vec()
    }
}

///
/// Given the roots of a curve/line equation, finds the intersections that lie within both the curve and the line segment
///
fn intersections_for_roots<P: Coordinate+Coordinate2D, L: Line<Point=P>, PointAtFn: Fn(f64) -> P>(roots: Vec<f64>, line: &L, point_at_pos: PointAtFn) -> Vec<(f64, f64, P)> {
    let (p1, p2)        = line.points();
    let direction       = p2 - p1;
    let length_squared  = direction.dot(&direction);

    let mut result: Vec<(f64, f64, P)> = roots.into_iter()
        .map(snap_root)
        .filter(|t| *t >= 0.0 && *t <= 1.0)
        .map(|t| {
            // Solve for the position on the line
            let pos = point_at_pos(t);
            let s   = if length_squared > 0.0 { (pos - p1).dot(&direction) / length_squared } else { 0.0 };

            (t, snap_to_unit_range(s), pos)
        })
        .filter(|(_t, s, _pos)| *s >= 0.0 && *s <= 1.0)
        .collect();

    // Double roots can be reported twice
    result.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(std::cmp::Ordering::Equal));
    result.dedup_by(|a, b| (a.0-b.0).abs() < SMALL_T_DISTANCE);

    result
}

///
/// Find the t values where a curve intersects a line segment
///
/// Return value is a vector of (curve_t, line_t, intersection_point) values, ordered by curve_t.
/// A curve that lies entirely along the line is considered to have no intersections.
///
pub fn curve_intersects_line<C: BezierCurve, L: Line<Point=C::Point>>(curve: &C, line: &L) -> Vec<(f64, f64, C::Point)>
where C::Point: Coordinate2D {
    // Based upon https://www.particleincell.com/2013/cubic-line-intersection/
    let coefficients    = line_coefficients_2d(line);
    let (a, b, c)       = coefficients;

    // Bezier coefficients
    let (w2, w3)        = curve.control_points();
    let (w1, w4)        = (curve.start_point(), curve.end_point());

    if (a, b, c) == (0.0, 0.0, 0.0) || points_are_collinear(&[w1, w2, w3, w4], coefficients) {
        return vec![];
    }

    let bx              = bezier_coefficients(0, &w1, &w2, &w3, &w4);
    let by              = bezier_coefficients(1, &w1, &w2, &w3, &w4);

    let p               = (
        a*bx.0+b*by.0,
        a*bx.1+b*by.1,
        a*bx.2+b*by.2,
        a*bx.3+b*by.3+c
    );

    let roots           = roots_to_vec(find_roots_cubic(p.0, p.1, p.2, p.3));

    intersections_for_roots(roots, line, |t| de_casteljau4(t, w1, w2, w3, w4))
}

///
/// Find the t values where a quadratic curve intersects a line segment
///
/// Return value is a vector of (curve_t, line_t, intersection_point) values, ordered by curve_t
///
pub fn quadratic_intersects_line<P: Coordinate+Coordinate2D, L: Line<Point=P>>(curve: &QuadraticCurve<P>, line: &L) -> Vec<(f64, f64, P)> {
    let coefficients    = line_coefficients_2d(line);
    let (a, b, c)       = coefficients;
    let (q0, q1, q2)    = (curve.start_point, curve.control_point, curve.end_point);

    if (a, b, c) == (0.0, 0.0, 0.0) || points_are_collinear(&[q0, q1, q2], coefficients) {
        return vec![];
    }

    // Distance from the line for each control point: the curve's distance is the quadratic bezier of these
    let d0              = a*q0.x() + b*q0.y() + c;
    let d1              = a*q1.x() + b*q1.y() + c;
    let d2              = a*q2.x() + b*q2.y() + c;

    let roots           = roots_to_vec(find_roots_quadratic(d0 - 2.0*d1 + d2, 2.0*(d1 - d0), d0));

    intersections_for_roots(roots, line, |t| curve.point_at_pos(t))
}
