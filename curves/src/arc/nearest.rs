use super::elliptical_arc::*;
use super::super::line::*;
use super::super::consts::*;
use super::super::coordinate::*;

/// Number of evenly spaced samples used to find the starting point for the search
const NEAREST_SAMPLES: usize = 32;

/// Maximum number of Newton-Raphson steps used to refine the nearest point
const NEWTON_ITERATIONS: usize = 12;

///
/// Finds the point on an elliptical arc that is nearest to the specified point
///
/// Returns the t value and the position of the nearest point. The search is clamped to the
/// angles swept by the arc.
///
pub fn nearest_point_on_arc(arc: &EllipticalArc, point: &Coord2) -> (f64, Coord2) {
    let center_arc = match arc.center_parameterization() {
        ArcParameterization::CenterParameters(center_arc)   => center_arc,
        ArcParameterization::LineTo                         => return nearest_point_on_line(&(arc.from, arc.to), point),
        ArcParameterization::Omit                           => return (0.0, arc.from)
    };

    // Find the nearest sample
    let mut best_t      = 0.0;
    let mut best_pos    = arc.from;
    let mut best_dist   = f64::MAX;

    for sample in 0..=NEAREST_SAMPLES {
        let t       = (sample as f64) / (NEAREST_SAMPLES as f64);
        let pos     = center_arc.point_at_pos(t);
        let dist    = pos.distance_to(point);

        if dist < best_dist {
            best_t      = t;
            best_pos    = pos;
            best_dist   = dist;
        }
    }

    // Refine with Newton-Raphson on the t value: the second derivative of an ellipse is the negated offset from its center
    let delta = center_arc.delta_theta;
    let mut t = best_t;

    for _ in 0..NEWTON_ITERATIONS {
        let theta       = center_arc.angle_at_pos(t);
        let pos         = center_arc.point_at_angle(theta);
        let tangent     = center_arc.derivative_at_angle(theta);
        let curvature   = center_arc.center - pos;
        let offset      = pos - *point;

        let numerator   = offset.dot(&tangent);
        let denominator = delta * (tangent.dot(&tangent) + offset.dot(&curvature));

        if denominator.abs() < 1e-12 {
            break;
        }

        let next_t      = (t - numerator/denominator).max(0.0).min(1.0);
        let finished    = (next_t - t).abs() < SMALL_T_DISTANCE;
        t               = next_t;

        if finished {
            break;
        }
    }

    let refined_pos = center_arc.point_at_pos(t);

    if refined_pos.distance_to(point) <= best_dist {
        (t, refined_pos)
    } else {
        (best_t, best_pos)
    }
}
