use super::line::*;
use super::super::coordinate::*;

///
/// Finds the point on a line segment that is nearest to the specified point
///
/// Returns the t value along the line and the nearest point. The t value is clamped to the
/// range 0-1, so points beyond the end of the line project onto its end points. A line with
/// no length projects everything onto its start point.
///
pub fn nearest_point_on_line<L: Line>(line: &L, point: &L::Point) -> (f64, L::Point) {
    let (start, end)    = line.points();
    let direction       = end - start;
    let length_squared  = direction.dot(&direction);

    if length_squared <= 0.0 {
        (0.0, start)
    } else {
        let t = (*point - start).dot(&direction) / length_squared;
        let t = t.max(0.0).min(1.0);

        (t, start + direction*t)
    }
}
