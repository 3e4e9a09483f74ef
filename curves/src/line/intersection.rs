use super::line::*;
use super::super::consts::*;
use super::super::coordinate::*;

///
/// Returns the point at which two lines intersect (if they intersect), along with the t values
/// on the first and second line respectively
///
/// Parallel and collinear lines are not considered to intersect. Only the 2-dimensional form is
/// supported (lines are much less likely to intersect in higher dimensions)
///
pub fn line_intersects_line<L1: Line, L2: Line<Point=L1::Point>>(line1: &L1, line2: &L2) -> Option<(f64, f64, L1::Point)>
where L1::Point: Coordinate2D {
    let line1_points = line1.points();
    let line2_points = line2.points();

    let ((x1, y1), (x2, y2)) = (line1_points.0.coords(), line1_points.1.coords());
    let ((x3, y3), (x4, y4)) = (line2_points.0.coords(), line2_points.1.coords());

    let denominator = (y4-y3)*(x2-x1) - (x4-x3)*(y2-y1);
    if denominator.abs() < 1e-12 {
        return None;
    }

    let ua = ((x4-x3)*(y1-y3) - (y4-y3)*(x1-x3)) / denominator;
    let ub = ((x2-x1)*(y1-y3) - (y2-y1)*(x1-x3)) / denominator;

    // Allow a little slop at the ends as the calculation is not exact
    let ua = snap_to_unit_range(ua);
    let ub = snap_to_unit_range(ub);

    if ua >= 0.0 && ua <= 1.0 && ub >= 0.0 && ub <= 1.0 {
        Some((ua, ub, L1::Point::from_components(&[
            x1+(ua*(x2-x1)),
            y1+(ua*(y2-y1))
        ])))
    } else {
        None
    }
}

///
/// Moves values that are very slightly outside of the range 0-1 onto the boundary
///
#[inline]
pub fn snap_to_unit_range(t: f64) -> f64 {
    if t < 0.0 && t > -SMALL_T_DISTANCE { 0.0 }
    else if t > 1.0 && t < 1.0+SMALL_T_DISTANCE { 1.0 }
    else { t }
}
