use super::split::*;
use super::super::error::*;
use super::super::command::*;
use super::super::sub_path::*;

use flo_morph_curves::*;
use flo_morph_curves::arc::*;
use flo_morph_curves::line::*;
use flo_morph_curves::bezier::*;

use std::sync::Arc;

///
/// Approximates an arc with a single cubic curve
///
/// The control points lie along the tangents at the end points, at the distance that makes the curve exact at its
/// midpoint for a circular arc.
///
fn arc_to_cubic(arc: &EllipticalArc) -> Segment {
    match arc.center_parameterization() {
        ArcParameterization::CenterParameters(center_arc) => {
            let theta1      = center_arc.theta1;
            let theta2      = center_arc.theta1 + center_arc.delta_theta;
            let handle      = (4.0/3.0) * (center_arc.delta_theta / 4.0).tan();

            let cp1         = arc.from + center_arc.derivative_at_angle(theta1) * handle;
            let cp2         = arc.to - center_arc.derivative_at_angle(theta2) * handle;

            Segment::Cubic { from: arc.from, control_points: (cp1, cp2), to: arc.to }
        }

        _ => Segment::from_curve(&line_to_bezier::<_, Curve<Coord2>>(&(arc.from, arc.to)))
    }
}

///
/// Converts a segment to a different type, keeping its end points
///
pub fn convert_segment(segment: &Segment, command_type: CommandType) -> Result<Segment, PathError> {
    let from    = segment.start_point();
    let to      = segment.end_point();

    if segment.command_type() == command_type {
        return Ok(*segment);
    }

    match (segment, command_type) {
        (Segment::Move { .. }, _)           => Err(PathError::StructuralError("move commands can't be converted to other types".to_string())),
        (_, CommandType::MoveTo)            => Err(PathError::StructuralError("commands can't be converted to moves".to_string())),
        (_, CommandType::ArcTo)             => Err(PathError::StructuralError("commands can't be converted to arcs".to_string())),

        (_, CommandType::LineTo)            => Ok(Segment::Line { from, to }),
        (_, CommandType::ClosePath)         => Ok(Segment::Close { from, to }),

        (Segment::Arc { .. }, CommandType::CubicCurveTo) => {
            segment.as_arc()
                .map(|arc| arc_to_cubic(&arc))
                .ok_or_else(|| PathError::StructuralError("could not convert arc to a curve".to_string()))
        }

        (Segment::Arc { .. }, CommandType::QuadraticCurveTo) => {
            Err(PathError::StructuralError("arcs can only be converted to lines or cubic curves".to_string()))
        }

        (_, CommandType::CubicCurveTo)      => {
            segment.as_cubic()
                .map(|curve| Segment::from_curve(&curve))
                .ok_or_else(|| PathError::StructuralError(format!("could not convert {:?} to a curve", segment.command_type())))
        }

        (_, CommandType::QuadraticCurveTo)  => {
            match segment {
                Segment::Line { .. } | Segment::Close { .. }    => Ok(Segment::Quadratic { from, control: from.midpoint(&to), to }),

                _                                               => {
                    let cubic       = segment.as_cubic().ok_or_else(|| PathError::StructuralError(format!("could not convert {:?} to a curve", segment.command_type())))?;
                    let quadratic   = QuadraticCurve::from_cubic(&cubic);

                    Ok(Segment::Quadratic { from, control: quadratic.control_point, to })
                }
            }
        }
    }
}

///
/// Changes the type of a command in a subpath
///
/// Only the last command of a closed subpath can become a close command.
///
pub fn convert_command(sub_idx: usize, sub_path: &SubPath, cmd_idx: usize, command_type: CommandType) -> Result<SubPath, PathError> {
    let cmd = command_at(sub_idx, sub_path, cmd_idx)?;

    if cmd.command_type() == command_type {
        return Ok(sub_path.clone());
    }

    if command_type == CommandType::ClosePath {
        let is_last         = cmd_idx == sub_path.len()-1;
        let returns_to_start = cmd.end_point().is_near_to(&sub_path.start_point(), CONTINUITY_TOLERANCE);

        if !is_last || !returns_to_start {
            return Err(PathError::StructuralError(format!("only the last command of a closed subpath can be converted to a close (command {} of subpath {} can't)", cmd_idx, sub_idx)));
        }
    }

    let converted       = cmd.with_new_geometry(convert_segment(cmd.segment(), command_type)?);
    let mut commands    = sub_path.commands().to_vec();
    commands[cmd_idx]   = Arc::new(converted);

    SubPath::from_shared(commands)
}
