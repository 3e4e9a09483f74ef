use super::basis::*;
use super::curve::*;
use super::derivative::*;

use super::super::consts::*;
use super::super::coordinate::*;

/// Number of evenly spaced samples used to find the starting point for the search
const NEAREST_SAMPLES: usize = 32;

/// Maximum number of Newton-Raphson steps used to refine the nearest point
const NEWTON_ITERATIONS: usize = 12;

///
/// Finds the point on a bezier curve that is nearest to the specified point
///
/// Returns the t value and the position of the nearest point. The curve is sampled at evenly
/// spaced t values to find the nearest sample, which is then refined by Newton-Raphson
/// iteration on `(B(t)-P).B'(t) = 0`. The refinement is only used if it moves closer.
///
pub fn nearest_point_on_curve<C: BezierCurve>(curve: &C, point: &C::Point) -> (f64, C::Point) {
    let start       = curve.start_point();
    let end         = curve.end_point();
    let (cp1, cp2)  = curve.control_points();

    // Derivatives of the curve
    let (d1, d2, d3)    = derivative4(start, cp1, cp2, end);
    let (dd1, dd2)      = derivative3(d1, d2, d3);

    // Find the nearest sample
    let mut best_t      = 0.0;
    let mut best_pos    = start;
    let mut best_dist   = f64::MAX;

    for sample in 0..=NEAREST_SAMPLES {
        let t       = (sample as f64) / (NEAREST_SAMPLES as f64);
        let pos     = de_casteljau4(t, start, cp1, cp2, end);
        let offset  = pos - *point;
        let dist    = offset.dot(&offset);

        if dist < best_dist {
            best_t      = t;
            best_pos    = pos;
            best_dist   = dist;
        }
    }

    // Refine using Newton-Raphson
    let mut t = best_t;
    for _ in 0..NEWTON_ITERATIONS {
        let pos         = de_casteljau4(t, start, cp1, cp2, end);
        let tangent     = de_casteljau3(t, d1, d2, d3);
        let curvature   = de_casteljau2(t, dd1, dd2);
        let offset      = pos - *point;

        let numerator   = offset.dot(&tangent);
        let denominator = tangent.dot(&tangent) + offset.dot(&curvature);

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

    let refined_pos     = de_casteljau4(t, start, cp1, cp2, end);
    let refined_offset  = refined_pos - *point;

    if refined_offset.dot(&refined_offset) <= best_dist {
        (t, refined_pos)
    } else {
        (best_t, best_pos)
    }
}
