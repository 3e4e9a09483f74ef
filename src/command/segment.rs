use super::command_type::*;

use flo_morph_curves::*;
use flo_morph_curves::line::*;
use flo_morph_curves::bezier::*;
use flo_morph_curves::arc::*;

use serde::{Serialize, Deserialize};
use smallvec::{SmallVec, smallvec};

/// Maximum error allowed when measuring the length of a curve
pub const LENGTH_TOLERANCE: f64 = 1e-4;

///
/// The parameters of an arc command other than its end points
///
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ArcParameters {
    /// Radii of the ellipse along its own x and y axes
    pub radii: (f64, f64),

    /// Rotation of the ellipse's x axis in degrees
    pub x_axis_rotation: f64,

    /// Set to pick the arc that sweeps more than 180 degrees
    pub large_arc: bool,

    /// Set to draw the arc in the direction of increasing angle
    pub sweep: bool
}

///
/// The geometry of a single path command
///
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum Segment {
    Move        { to: Coord2 },
    Line        { from: Coord2, to: Coord2 },
    Quadratic   { from: Coord2, control: Coord2, to: Coord2 },
    Cubic       { from: Coord2, control_points: (Coord2, Coord2), to: Coord2 },
    Arc         { from: Coord2, parameters: ArcParameters, to: Coord2 },
    Close       { from: Coord2, to: Coord2 }
}

impl Segment {
    ///
    /// Creates an arc segment from an elliptical arc
    ///
    pub fn from_arc(arc: &EllipticalArc) -> Segment {
        Segment::Arc {
            from:       arc.from,
            parameters: ArcParameters { radii: arc.radii, x_axis_rotation: arc.x_axis_rotation, large_arc: arc.large_arc, sweep: arc.sweep },
            to:         arc.to
        }
    }

    ///
    /// Creates a cubic segment from a bezier curve
    ///
    pub fn from_curve<C: BezierCurve<Point=Coord2>>(curve: &C) -> Segment {
        Segment::Cubic { from: curve.start_point(), control_points: curve.control_points(), to: curve.end_point() }
    }

    ///
    /// The type of command this segment is drawn by
    ///
    pub fn command_type(&self) -> CommandType {
        match self {
            Segment::Move { .. }        => CommandType::MoveTo,
            Segment::Line { .. }        => CommandType::LineTo,
            Segment::Quadratic { .. }   => CommandType::QuadraticCurveTo,
            Segment::Cubic { .. }       => CommandType::CubicCurveTo,
            Segment::Arc { .. }         => CommandType::ArcTo,
            Segment::Close { .. }       => CommandType::ClosePath
        }
    }

    ///
    /// Where this segment starts (a move starts and ends at the point it moves to)
    ///
    pub fn start_point(&self) -> Coord2 {
        match self {
            Segment::Move { to }                => *to,
            Segment::Line { from, .. }          |
            Segment::Quadratic { from, .. }     |
            Segment::Cubic { from, .. }         |
            Segment::Arc { from, .. }           |
            Segment::Close { from, .. }         => *from
        }
    }

    ///
    /// Where this segment ends
    ///
    pub fn end_point(&self) -> Coord2 {
        match self {
            Segment::Move { to }            |
            Segment::Line { to, .. }        |
            Segment::Quadratic { to, .. }   |
            Segment::Cubic { to, .. }       |
            Segment::Arc { to, .. }         |
            Segment::Close { to, .. }       => *to
        }
    }

    ///
    /// The control points of this segment, in drawing order
    ///
    pub fn points(&self) -> SmallVec<[Coord2; 4]> {
        match self {
            Segment::Move { to }                                    => smallvec![*to],
            Segment::Line { from, to }                              => smallvec![*from, *to],
            Segment::Quadratic { from, control, to }                => smallvec![*from, *control, *to],
            Segment::Cubic { from, control_points: (cp1, cp2), to } => smallvec![*from, *cp1, *cp2, *to],
            Segment::Arc { from, to, .. }                           => smallvec![*from, *to],
            Segment::Close { from, to }                             => smallvec![*from, *to]
        }
    }

    ///
    /// The arc parameters for this segment, if it's an arc
    ///
    pub fn arc_parameters(&self) -> Option<ArcParameters> {
        match self {
            Segment::Arc { parameters, .. } => Some(*parameters),
            _                               => None
        }
    }

    ///
    /// Returns this segment as an elliptical arc (if it's an arc)
    ///
    pub fn as_arc(&self) -> Option<EllipticalArc> {
        match self {
            Segment::Arc { from, parameters, to } => Some(EllipticalArc::new(*from, parameters.radii, parameters.x_axis_rotation, parameters.large_arc, parameters.sweep, *to)),
            _                                     => None
        }
    }

    ///
    /// Returns a cubic bezier curve that follows this segment, if there is one
    ///
    /// Lines become curves with their control points at their thirds and quadratics are raised to cubics,
    /// so in both cases the curve has the same parameterization as the original segment. Arcs can only
    /// be approximated by a cubic curve, so this returns the approximation only for arcs that sweep
    /// 90 degrees or less.
    ///
    pub fn as_cubic(&self) -> Option<Curve<Coord2>> {
        match self {
            Segment::Move { .. }                            => None,
            Segment::Line { from, to }                      |
            Segment::Close { from, to }                     => Some(line_to_bezier(&(*from, *to))),
            Segment::Quadratic { from, control, to }        => Some(QuadraticCurve::new(*from, *control, *to).to_cubic()),
            Segment::Cubic { from, control_points, to }     => Some(Curve::from_points(*from, *control_points, *to)),
            Segment::Arc { .. }                             => {
                let curves = self.as_arc()?.to_curves();
                if curves.len() == 1 { curves.into_iter().next() } else { None }
            }
        }
    }

    ///
    /// Returns the point at the specified t value along this segment
    ///
    pub fn point_at_pos(&self, t: f64) -> Coord2 {
        match self {
            Segment::Move { to }                        => *to,
            Segment::Line { from, to }                  |
            Segment::Close { from, to }                 => from.lerp(to, t),
            Segment::Quadratic { from, control, to }    => QuadraticCurve::new(*from, *control, *to).point_at_pos(t),
            Segment::Cubic { from, control_points, to } => Curve::from_points(*from, *control_points, *to).point_at_pos(t),
            Segment::Arc { from, .. }                   => self.as_arc().map(|arc| arc.point_at_pos(t)).unwrap_or(*from)
        }
    }

    ///
    /// Measures the length of this segment
    ///
    pub fn length(&self) -> f64 {
        match self {
            Segment::Move { .. }                        => 0.0,
            Segment::Line { from, to }                  |
            Segment::Close { from, to }                 => from.distance_to(to),
            Segment::Quadratic { .. }                   |
            Segment::Cubic { .. }                       => self.as_cubic().map(|curve| curve.curve_length(LENGTH_TOLERANCE)).unwrap_or(0.0),
            Segment::Arc { .. }                         => self.as_arc().map(|arc| arc.arc_length(LENGTH_TOLERANCE)).unwrap_or(0.0)
        }
    }

    ///
    /// Computes the exact bounding box of this segment
    ///
    pub fn bounding_box(&self) -> Bounds<Coord2> {
        match self {
            Segment::Move { to }                        => Bounds::from_min_max(*to, *to),
            Segment::Line { from, to }                  |
            Segment::Close { from, to }                 => Bounds::from_min_max(*from, *to),
            Segment::Quadratic { from, .. }             |
            Segment::Cubic { from, .. }                 => self.as_cubic().map(|curve| curve.bounding_box()).unwrap_or_else(|| Bounds::from_min_max(*from, *from)),
            Segment::Arc { from, .. }                   => self.as_arc().map(|arc| arc.bounding_box()).unwrap_or_else(|| Bounds::from_min_max(*from, *from))
        }
    }

    ///
    /// Finds the nearest point on this segment to a target point, returning the t value and the point
    ///
    pub fn nearest_point(&self, point: &Coord2) -> (f64, Coord2) {
        match self {
            Segment::Move { to }                        => (0.0, *to),
            Segment::Line { from, to }                  |
            Segment::Close { from, to }                 => nearest_point_on_line(&(*from, *to), point),
            Segment::Quadratic { from, .. }             |
            Segment::Cubic { from, .. }                 => self.as_cubic().map(|curve| curve.nearest_point(point)).unwrap_or((0.0, *from)),
            Segment::Arc { from, .. }                   => self.as_arc().map(|arc| nearest_point_on_arc(&arc, point)).unwrap_or((0.0, *from))
        }
    }

    ///
    /// Finds where a line segment crosses this segment
    ///
    /// The result is a list of (segment_t, line_t, point) values, ordered by segment_t. A segment that lies along the
    /// line does not cross it.
    ///
    pub fn intersect_line(&self, line: &(Coord2, Coord2)) -> Vec<(f64, f64, Coord2)> {
        match self {
            Segment::Move { .. }                        => vec![],
            Segment::Line { from, to }                  |
            Segment::Close { from, to }                 => line_intersects_line(&(*from, *to), line).into_iter().collect(),
            Segment::Quadratic { from, control, to }    => quadratic_intersects_line(&QuadraticCurve::new(*from, *control, *to), line),
            Segment::Cubic { from, control_points, to } => curve_intersects_line(&Curve::from_points(*from, *control_points, *to), line),
            Segment::Arc { .. }                         => self.as_arc().map(|arc| arc_intersects_line(&arc, line)).unwrap_or_else(Vec::new)
        }
    }

    ///
    /// Returns the section of this segment between two t values
    ///
    pub fn section(&self, t_min: f64, t_max: f64) -> Segment {
        match self {
            Segment::Move { .. }                        => *self,
            Segment::Line { .. }                        => Segment::Line { from: self.point_at_pos(t_min), to: self.point_at_pos(t_max) },
            Segment::Close { .. }                       => Segment::Close { from: self.point_at_pos(t_min), to: self.point_at_pos(t_max) },

            Segment::Quadratic { from, control, to }    => {
                let section = QuadraticCurve::new(*from, *control, *to).section(t_min, t_max);
                Segment::Quadratic { from: section.start_point, control: section.control_point, to: section.end_point }
            }

            Segment::Cubic { from, control_points, to } => {
                let section: Curve<Coord2> = Curve::from_points(*from, *control_points, *to).section(t_min, t_max);
                Segment::from_curve(&section)
            }

            Segment::Arc { .. }                         => self.as_arc().map(|arc| Segment::from_arc(&arc.section(t_min, t_max))).unwrap_or(*self)
        }
    }

    ///
    /// Divides this segment into two at the specified t value
    ///
    pub fn subdivide(&self, t: f64) -> (Segment, Segment) {
        (self.section(0.0, t), self.section(t, 1.0))
    }

    ///
    /// Returns this segment drawn in the opposite direction
    ///
    pub fn reverse(&self) -> Segment {
        match self {
            Segment::Move { .. }                                    => *self,
            Segment::Line { from, to }                              => Segment::Line { from: *to, to: *from },
            Segment::Close { from, to }                             => Segment::Close { from: *to, to: *from },
            Segment::Quadratic { from, control, to }                => Segment::Quadratic { from: *to, control: *control, to: *from },
            Segment::Cubic { from, control_points: (cp1, cp2), to } => Segment::Cubic { from: *to, control_points: (*cp2, *cp1), to: *from },
            Segment::Arc { .. }                                     => self.as_arc().map(|arc| Segment::from_arc(&arc.reverse())).unwrap_or(*self)
        }
    }

    ///
    /// Approximates this segment with a polyline, returning its points (including the start and end point)
    ///
    pub fn flatten(&self, tolerance: f64) -> Vec<Coord2> {
        match self {
            Segment::Move { to }                        => vec![*to],
            Segment::Line { from, to }                  |
            Segment::Close { from, to }                 => vec![*from, *to],
            Segment::Quadratic { from, .. }             |
            Segment::Cubic { from, .. }                 => self.as_cubic().map(|curve| curve.flatten(tolerance)).unwrap_or_else(|| vec![*from]),
            Segment::Arc { from, .. }                   => self.as_arc().map(|arc| arc.flatten(tolerance)).unwrap_or_else(|| vec![*from])
        }
    }

    ///
    /// Returns a copy of this segment with its start point moved
    ///
    /// Curves keep their control points, and arcs keep their parameters. Moving the start point of a move command
    /// moves its target.
    ///
    pub fn with_start_point(&self, start: Coord2) -> Segment {
        match *self {
            Segment::Move { .. }                        => Segment::Move { to: start },
            Segment::Line { to, .. }                    => Segment::Line { from: start, to },
            Segment::Close { to, .. }                   => Segment::Close { from: start, to },
            Segment::Quadratic { control, to, .. }      => Segment::Quadratic { from: start, control, to },
            Segment::Cubic { control_points, to, .. }   => Segment::Cubic { from: start, control_points, to },
            Segment::Arc { parameters, to, .. }         => Segment::Arc { from: start, parameters, to }
        }
    }

    ///
    /// True if the control points of this segment and another are of the same type and all within `epsilon` of each other
    ///
    pub fn is_near_to(&self, other: &Segment, epsilon: f64) -> bool {
        if self.command_type() != other.command_type() {
            return false;
        }

        let params_match = match (self.arc_parameters(), other.arc_parameters()) {
            (Some(a), Some(b))  => (a.radii.0 - b.radii.0).abs() <= epsilon
                && (a.radii.1 - b.radii.1).abs() <= epsilon
                && (a.x_axis_rotation - b.x_axis_rotation).abs() <= epsilon
                && a.large_arc == b.large_arc
                && a.sweep == b.sweep,
            (None, None)        => true,
            _                   => false
        };

        params_match && self.points().iter().zip(other.points().iter()).all(|(a, b)| a.is_near_to(b, epsilon))
    }
}
