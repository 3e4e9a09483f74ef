use super::line::*;
use super::super::bezier::*;

///
/// Changes a line to a bezier curve
///
/// The control points are placed a third of the way along the line from each end, so the
/// resulting curve has the same parameterization as the line.
///
pub fn line_to_bezier<L: Line, Curve: BezierCurveFactory<Point=L::Point>>(line: &L) -> Curve {
    let points          = line.points();
    let point_distance  = points.1 - points.0;
    let (cp1, cp2)      = (points.0 + point_distance*(1.0/3.0), points.0 + point_distance*(2.0/3.0));

    Curve::from_points(points.0, (cp1, cp2), points.1)
}
