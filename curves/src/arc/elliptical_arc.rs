use super::super::geo::*;
use super::super::line::*;
use super::super::consts::*;
use super::super::bezier::*;
use super::super::coordinate::*;

use serde::{Serialize, Deserialize};

use std::f64::consts::PI;

///
/// An elliptical arc, described by its end points (as in the SVG 'A' command)
///
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct EllipticalArc {
    /// The start point of the arc
    pub from: Coord2,

    /// The end point of the arc
    pub to: Coord2,

    /// The (x-axis, y-axis) radii of the ellipse
    pub radii: (f64, f64),

    /// The rotation of the ellipse's x-axis, in degrees
    pub x_axis_rotation: f64,

    /// True if the arc sweeps through more than 180 degrees
    pub large_arc: bool,

    /// True if the arc is drawn in the direction of increasing angles
    pub sweep: bool
}

///
/// The center parameterization of an elliptical arc
///
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CenterArc {
    /// Center of the ellipse
    pub center: Coord2,

    /// Radii of the ellipse (corrected so that the end points lie on the ellipse)
    pub radii: (f64, f64),

    /// Rotation of the ellipse, in radians
    pub rotation: f64,

    /// Angle of the start point
    pub theta1: f64,

    /// Angle swept to reach the end point (negative for arcs drawn in the direction of decreasing angles)
    pub delta_theta: f64
}

///
/// Result of converting an arc to its center parameterization
///
/// When attempting to compute the center parameterization of the arc,
/// out of range parameters may see an arc omitted or treated as a line.
///
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ArcParameterization {
    /// Center parameterization of the arc
    CenterParameters(CenterArc),

    /// The arc has a zero radius and is drawn as a line to the end point
    LineTo,

    /// The arc starts and ends at the same point and is not drawn
    Omit
}

impl EllipticalArc {
    ///
    /// Creates a new arc from its SVG parameters
    ///
    pub fn new(from: Coord2, radii: (f64, f64), x_axis_rotation: f64, large_arc: bool, sweep: bool, to: Coord2) -> EllipticalArc {
        EllipticalArc { from, to, radii, x_axis_rotation, large_arc, sweep }
    }

    ///
    /// Calculates a center parameterization from the endpoint parameterization.
    ///
    /// Radii may be adjusted if there is no solution. See the 'Conversion from endpoint to center
    /// parameterization' section of the SVG implementation notes.
    ///
    pub fn center_parameterization(&self) -> ArcParameterization {
        let (mut rx, mut ry)    = self.radii;
        let (x1, y1)            = self.from.coords();
        let (x2, y2)            = self.to.coords();

        // Zero radii are treated as a line joining the end points
        if rx * rx < f64::EPSILON || ry * ry < f64::EPSILON {
            return ArcParameterization::LineTo;
        }

        let phi                 = self.x_axis_rotation * PI / 180.0;
        let (sin_phi, cos_phi)  = phi.sin_cos();

        rx = rx.abs();
        ry = ry.abs();

        // Translate the origin to the midpoint of the chord and rotate onto the ellipse axes
        let mid_x   = (x1 - x2) / 2.0;
        let mid_y   = (y1 - y2) / 2.0;
        let x1_     = cos_phi * mid_x + sin_phi * mid_y;
        let y1_     = -sin_phi * mid_x + cos_phi * mid_y;

        // Scale the ellipse up uniformly if the radii are too small to reach both end points
        let lambda = (x1_ / rx).powi(2) + (y1_ / ry).powi(2);
        if lambda > 1.0 {
            rx *= lambda.sqrt();
            ry *= lambda.sqrt();
        }

        // Transformed center
        let d = (rx * y1_).powi(2) + (ry * x1_).powi(2);
        if d == 0.0 {
            return ArcParameterization::Omit;
        }

        let k = {
            let mut k = ((rx * ry).powi(2) / d - 1.0).abs().sqrt();
            if self.sweep == self.large_arc {
                k = -k;
            }
            k
        };
        let cx_ = k * rx * y1_ / ry;
        let cy_ = -k * ry * x1_ / rx;

        // Center in the original coordinate system
        let cx = cos_phi * cx_ - sin_phi * cy_ + (x1 + x2) / 2.0;
        let cy = sin_phi * cx_ + cos_phi * cy_ + (y1 + y2) / 2.0;

        // Start angle
        let ux      = (x1_ - cx_) / rx;
        let uy      = (y1_ - cy_) / ry;
        let u_len   = (ux * ux + uy * uy).abs().sqrt();
        if u_len == 0.0 {
            return ArcParameterization::Omit;
        }

        let cos_theta1  = (ux / u_len).max(-1.0).min(1.0);
        let theta1      = if uy < 0.0 { -cos_theta1.acos() } else { cos_theta1.acos() };

        // Swept angle
        let vx      = (-x1_ - cx_) / rx;
        let vy      = (-y1_ - cy_) / ry;
        let v_len   = (vx * vx + vy * vy).abs().sqrt();
        if v_len == 0.0 {
            return ArcParameterization::Omit;
        }

        let dp_uv           = ux * vx + uy * vy;
        let cos_delta_theta = (dp_uv / (u_len * v_len)).max(-1.0).min(1.0);
        let delta_theta     = {
            let mut delta_theta = cos_delta_theta.acos();
            if ux * vy - uy * vx < 0.0 {
                delta_theta = -delta_theta;
            }
            if self.sweep && delta_theta < 0.0 {
                delta_theta += PI * 2.0;
            } else if !self.sweep && delta_theta > 0.0 {
                delta_theta -= PI * 2.0;
            }
            delta_theta
        };

        ArcParameterization::CenterParameters(CenterArc {
            center:         Coord2(cx, cy),
            radii:          (rx, ry),
            rotation:       phi,
            theta1:         theta1,
            delta_theta:    delta_theta
        })
    }

    ///
    /// Given a value t from 0 to 1, returns a point on this arc
    ///
    pub fn point_at_pos(&self, t: f64) -> Coord2 {
        match self.center_parameterization() {
            ArcParameterization::CenterParameters(arc)  => arc.point_at_pos(t),
            ArcParameterization::LineTo                 => self.from.lerp(&self.to, t),
            ArcParameterization::Omit                   => self.from
        }
    }

    ///
    /// Returns the same arc drawn in the opposite direction
    ///
    pub fn reverse(&self) -> EllipticalArc {
        EllipticalArc {
            from:               self.to,
            to:                 self.from,
            radii:              self.radii,
            x_axis_rotation:    self.x_axis_rotation,
            large_arc:          self.large_arc,
            sweep:              !self.sweep
        }
    }

    ///
    /// Returns the part of this arc between two t values
    ///
    pub fn section(&self, t_min: f64, t_max: f64) -> EllipticalArc {
        match self.center_parameterization() {
            ArcParameterization::CenterParameters(arc) => {
                let swept = arc.delta_theta * (t_max - t_min);

                EllipticalArc {
                    from:               arc.point_at_pos(t_min),
                    to:                 arc.point_at_pos(t_max),
                    radii:              arc.radii,
                    x_axis_rotation:    self.x_axis_rotation,
                    large_arc:          swept.abs() > PI,
                    sweep:              self.sweep
                }
            }

            ArcParameterization::LineTo | ArcParameterization::Omit => {
                EllipticalArc {
                    from:   self.point_at_pos(t_min),
                    to:     self.point_at_pos(t_max),
                    ..*self
                }
            }
        }
    }

    ///
    /// Approximates this arc with a series of cubic bezier curves, each covering at most 90 degrees
    ///
    pub fn to_curves(&self) -> Vec<Curve<Coord2>> {
        match self.center_parameterization() {
            ArcParameterization::CenterParameters(arc)  => arc.to_curves(),
            ArcParameterization::LineTo                 => vec![line_to_bezier(&(self.from, self.to))],
            ArcParameterization::Omit                   => vec![]
        }
    }

    ///
    /// Computes the exact bounding box of this arc
    ///
    pub fn bounding_box<Bounds: BoundingBox<Point=Coord2>>(&self) -> Bounds {
        let mut points = vec![self.from, self.to];

        if let ArcParameterization::CenterParameters(arc) = self.center_parameterization() {
            points.extend(arc.extremity_angles().into_iter()
                .filter_map(|angle| arc.t_for_angle(angle))
                .map(|t| arc.point_at_pos(t)));
        }

        Bounds::bounds_for_points(points).unwrap_or_else(|| Bounds::from_min_max(self.from, self.to))
    }

    ///
    /// Computes the length of this arc, to within (approximately) the specified error
    ///
    pub fn arc_length(&self, max_error: f64) -> f64 {
        self.to_curves().iter()
            .map(|curve| curve.curve_length(max_error))
            .sum()
    }

    ///
    /// Approximates this arc with a polyline, returning the points along it (including the start and end points)
    ///
    pub fn flatten(&self, tolerance: f64) -> Vec<Coord2> {
        let mut points = vec![self.from];

        for curve in self.to_curves() {
            points.extend(curve.flatten(tolerance).into_iter().skip(1));
        }

        if let Some(last) = points.last_mut() {
            *last = self.to;
        }

        points
    }
}

impl CenterArc {
    ///
    /// Returns the point at the specified angle on the ellipse this arc is part of
    ///
    #[inline]
    pub fn point_at_angle(&self, theta: f64) -> Coord2 {
        let (rx, ry)            = self.radii;
        let (sin_phi, cos_phi)  = self.rotation.sin_cos();
        let (sin_th, cos_th)    = theta.sin_cos();

        Coord2(
            self.center.x() + rx*cos_th*cos_phi - ry*sin_th*sin_phi,
            self.center.y() + rx*cos_th*sin_phi + ry*sin_th*cos_phi
        )
    }

    ///
    /// Returns the derivative of the ellipse with respect to the angle
    ///
    #[inline]
    pub fn derivative_at_angle(&self, theta: f64) -> Coord2 {
        let (rx, ry)            = self.radii;
        let (sin_phi, cos_phi)  = self.rotation.sin_cos();
        let (sin_th, cos_th)    = theta.sin_cos();

        Coord2(
            -rx*sin_th*cos_phi - ry*cos_th*sin_phi,
            -rx*sin_th*sin_phi + ry*cos_th*cos_phi
        )
    }

    ///
    /// The angle at the specified t value
    ///
    #[inline]
    pub fn angle_at_pos(&self, t: f64) -> f64 {
        self.theta1 + self.delta_theta*t
    }

    ///
    /// Given a value t from 0 to 1, returns a point on this arc
    ///
    #[inline]
    pub fn point_at_pos(&self, t: f64) -> Coord2 {
        self.point_at_angle(self.angle_at_pos(t))
    }

    ///
    /// Finds the t value of the point at the specified angle, or None if the angle is not swept by this arc
    ///
    /// Angles a very small way outside of the arc are moved onto its end points.
    ///
    pub fn t_for_angle(&self, angle: f64) -> Option<f64> {
        if self.delta_theta == 0.0 {
            return None;
        }

        let offset      = (angle - self.theta1).rem_euclid(PI*2.0);
        let candidates  = [offset / self.delta_theta, (offset - PI*2.0) / self.delta_theta];

        candidates.iter()
            .map(|t| {
                if *t < 0.0 && *t > -SMALL_T_DISTANCE { 0.0 }
                else if *t > 1.0 && *t < 1.0+SMALL_T_DISTANCE { 1.0 }
                else { *t }
            })
            .find(|t| *t >= 0.0 && *t <= 1.0)
    }

    ///
    /// The angles where the ellipse reaches its extremes in x and y
    ///
    fn extremity_angles(&self) -> Vec<f64> {
        let (rx, ry)            = self.radii;
        let (sin_phi, cos_phi)  = self.rotation.sin_cos();

        let theta_x = f64::atan2(-ry*sin_phi, rx*cos_phi);
        let theta_y = f64::atan2(ry*cos_phi, rx*sin_phi);

        vec![theta_x, theta_x + PI, theta_y, theta_y + PI]
    }

    ///
    /// Approximates this arc with a series of cubic bezier curves, each covering at most 90 degrees
    ///
    pub fn to_curves(&self) -> Vec<Curve<Coord2>> {
        let num_segments    = (self.delta_theta.abs() / (PI * 0.5 + 0.001)).ceil().max(1.0) as usize;
        let step            = self.delta_theta / (num_segments as f64);

        (0..num_segments)
            .map(|segment| {
                let th0 = self.theta1 + step*(segment as f64);
                let th1 = th0 + step;

                self.arc_segment(th0, th1)
            })
            .collect()
    }

    ///
    /// Turns a section of the ellipse into a cubic bezier curve
    ///
    fn arc_segment(&self, th0: f64, th1: f64) -> Curve<Coord2> {
        let (rx, ry)            = self.radii;
        let (sin_phi, cos_phi)  = self.rotation.sin_cos();
        let (sin_th0, cos_th0)  = th0.sin_cos();
        let (sin_th1, cos_th1)  = th1.sin_cos();

        let th_half = 0.5 * (th1 - th0);
        let t       = (8.0 / 3.0) * (th_half * 0.5).sin().powi(2) / th_half.sin();
        let x1      = rx * (cos_th0 - t * sin_th0);
        let y1      = ry * (sin_th0 + t * cos_th0);
        let x3      = rx * cos_th1;
        let y3      = ry * sin_th1;
        let x2      = x3 + rx * (t * sin_th1);
        let y2      = y3 + ry * (-t * cos_th1);

        let transform = |x: f64, y: f64| Coord2(self.center.x() + cos_phi * x - sin_phi * y, self.center.y() + sin_phi * x + cos_phi * y);

        Curve::from_points(self.point_at_angle(th0), (transform(x1, y1), transform(x2, y2)), transform(x3, y3))
    }
}
