use super::elliptical_arc::*;
use super::super::line::*;
use super::super::consts::*;
use super::super::coordinate::*;

use roots::{find_roots_quadratic, Roots};

///
/// Find the t values where an elliptical arc intersects a line segment
///
/// Return value is a vector of (arc_t, line_t, intersection_point) values, ordered by arc_t.
/// The line is transformed into the space where the arc's ellipse is the unit circle, so the
/// intersections are the roots of a quadratic.
///
pub fn arc_intersects_line<L: Line<Point=Coord2>>(arc: &EllipticalArc, line: &L) -> Vec<(f64, f64, Coord2)> {
    let center_arc = match arc.center_parameterization() {
        ArcParameterization::CenterParameters(center_arc)   => center_arc,
        ArcParameterization::LineTo                         => return line_intersects_line(&(arc.from, arc.to), line).into_iter().collect(),
        ArcParameterization::Omit                           => return vec![]
    };

    // Map the line into the unit circle space
    let (rx, ry)            = center_arc.radii;
    let (sin_phi, cos_phi)  = center_arc.rotation.sin_cos();
    let to_unit_circle      = |point: Coord2| {
        let offset = point - center_arc.center;
        Coord2((cos_phi*offset.x() + sin_phi*offset.y())/rx, (-sin_phi*offset.x() + cos_phi*offset.y())/ry)
    };

    let (p1, p2)    = line.points();
    let u0          = to_unit_circle(p1);
    let u1          = to_unit_circle(p2);
    let direction   = u1 - u0;

    // |u0 + s*direction|^2 = 1
    let a           = direction.dot(&direction);
    let b           = 2.0 * u0.dot(&direction);
    let c           = u0.dot(&u0) - 1.0;

    if a <= 0.0 {
        return vec![];
    }

    let roots = match find_roots_quadratic(a, b, c) {
        Roots::No(_)    => vec![],
        Roots::One(r)   => r.to_vec(),
        Roots::Two(r)   => r.to_vec(),
        Roots::Three(r) => r.to_vec(),
        Roots::Four(r)  => r.to_vec()
    };

    let mut result: Vec<_> = roots.into_iter()
        .map(|s| {
            if s < 0.0 && s > -ROOT_SLOP { 0.0 }
            else if s > 1.0 && s < 1.0+ROOT_SLOP { 1.0 }
            else { s }
        })
        .filter(|s| *s >= 0.0 && *s <= 1.0)
        .filter_map(|s| {
            let unit_pos    = u0 + direction*s;
            let angle       = f64::atan2(unit_pos.y(), unit_pos.x());

            center_arc.t_for_angle(angle).map(|t| (t, s, center_arc.point_at_pos(t)))
        })
        .collect();

    result.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(std::cmp::Ordering::Equal));
    result.dedup_by(|a, b| (a.0-b.0).abs() < SMALL_T_DISTANCE);

    result
}
