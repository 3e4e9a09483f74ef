use super::super::error::*;
use super::super::command::*;
use super::super::sub_path::*;

use flo_morph_curves::*;
use flo_morph_curves::consts::*;
use flo_morph_curves::arc::*;
use flo_morph_curves::bezier::*;

use std::f64::consts::PI;
use std::sync::Arc;

/// Number of bisection steps used when finding the t value that splits a command in half
const HALF_LENGTH_ITERATIONS: usize = 32;

/// t ranges that meet within this distance are considered contiguous
const RANGE_TOLERANCE: f64 = 1e-9;

///
/// Retrieves the command at an index in a subpath
///
pub (super) fn command_at(sub_idx: usize, sub_path: &SubPath, cmd_idx: usize) -> Result<&Arc<Command>, PathError> {
    sub_path.command(cmd_idx).ok_or_else(|| PathError::no_command(sub_idx, cmd_idx))
}

///
/// Replaces a range of commands in a subpath
///
fn replace_commands(sub_path: &SubPath, range: std::ops::Range<usize>, replacement: Vec<Command>) -> Result<SubPath, PathError> {
    let mut commands = sub_path.commands().to_vec();
    commands.splice(range, replacement.into_iter().map(Arc::new));

    SubPath::from_shared(commands)
}

///
/// The section of a segment between two t values, drawn as a line if it's part of a close that doesn't reach the end
///
fn section_of(original: &Segment, t_min: f64, t_max: f64) -> Segment {
    match original.section(t_min, t_max) {
        Segment::Close { from, to } if t_max < 1.0  => Segment::Line { from, to },
        section                                     => section
    }
}

///
/// Splits the command at `cmd_idx` into two commands at the position `t`
///
/// Both halves keep the identity of the original command, and remember where they came from so they can be merged
/// again later. Splitting a close command produces a line followed by a shorter close.
///
pub fn split_command(sub_idx: usize, sub_path: &SubPath, cmd_idx: usize, t: f64) -> Result<SubPath, PathError> {
    let cmd = command_at(sub_idx, sub_path, cmd_idx)?;

    if !(t > 0.0 && t < 1.0) {
        return Err(PathError::StructuralError(format!("commands can only be split at a t value between 0 and 1 (not {})", t)));
    }

    if cmd.command_type() == CommandType::MoveTo {
        return Err(PathError::StructuralError("move commands can't be split".to_string()));
    }

    // Position of the split relative to the unsplit command
    let (original, t_min, t_max) = match cmd.split_source() {
        Some(source)    => (source.original, source.t_min, source.t_max),
        None            => (*cmd.segment(), 0.0, 1.0)
    };
    let t_mid = t_min + (t_max - t_min)*t;

    let (first, second) = cmd.segment().subdivide(t);
    let first           = match first {
        Segment::Close { from, to } => Segment::Line { from, to },
        other                       => other
    };

    let first   = Command::fragment(cmd.id(), first, SplitSource { original, t_min: t_min, t_max: t_mid });
    let second  = Command::fragment(cmd.id(), second, SplitSource { original, t_min: t_mid, t_max: t_max });

    replace_commands(sub_path, cmd_idx..(cmd_idx+1), vec![first, second])
}

///
/// Finds the t value that divides a segment into two parts of equal length
///
pub fn half_length_t(segment: &Segment) -> f64 {
    match segment {
        Segment::Line { .. } | Segment::Close { .. } | Segment::Move { .. } => 0.5,

        _ => {
            let half_length     = segment.length() / 2.0;
            let (mut low, mut high) = (0.0, 1.0);

            for _ in 0..HALF_LENGTH_ITERATIONS {
                let mid = (low + high) / 2.0;

                if segment.section(0.0, mid).length() < half_length {
                    low = mid;
                } else {
                    high = mid;
                }
            }

            (low + high) / 2.0
        }
    }
}

///
/// Splits the command at `cmd_idx` into two commands of equal length
///
pub fn split_command_in_half(sub_idx: usize, sub_path: &SubPath, cmd_idx: usize) -> Result<SubPath, PathError> {
    let cmd = command_at(sub_idx, sub_path, cmd_idx)?;
    let t   = half_length_t(cmd.segment());

    split_command(sub_idx, sub_path, cmd_idx, t)
}

///
/// Merges two arcs that are part of the same ellipse and are drawn in the same direction
///
fn merge_arcs(first: &EllipticalArc, second: &EllipticalArc) -> Option<Segment> {
    let (first_center, second_center) = match (first.center_parameterization(), second.center_parameterization()) {
        (ArcParameterization::CenterParameters(a), ArcParameterization::CenterParameters(b)) => (a, b),
        _ => return None
    };

    let same_ellipse = first_center.center.is_near_to(&second_center.center, SMALL_DISTANCE)
        && (first_center.radii.0 - second_center.radii.0).abs() < SMALL_DISTANCE
        && (first_center.radii.1 - second_center.radii.1).abs() < SMALL_DISTANCE
        && (first.x_axis_rotation - second.x_axis_rotation).abs() < SMALL_DISTANCE
        && first.sweep == second.sweep;

    if !same_ellipse {
        return None;
    }

    let swept = first_center.delta_theta + second_center.delta_theta;
    if swept.abs() >= PI*2.0 {
        return None;
    }

    Some(Segment::from_arc(&EllipticalArc::new(first.from, first_center.radii, first.x_axis_rotation, swept.abs() > PI, first.sweep, second.to)))
}

///
/// Finds a cubic curve that was subdivided to make two curves (reversing de Casteljau's algorithm)
///
fn merge_curves(first: &Curve<Coord2>, second: &Curve<Coord2>) -> Segment {
    let (a0, (a1, a2), a3)  = (first.start_point(), first.control_points(), first.end_point());
    let (b0, (b1, b2), b3)  = (second.start_point(), second.control_points(), second.end_point());

    // The split point divides the tangent at the join in the ratio t:(1-t)
    let before  = a3.distance_to(&a2);
    let after   = b1.distance_to(&b0);
    let total   = before + after;

    let (cp1, cp2) = if total > 0.0 {
        let t = before / total;

        if t > SMALL_T_DISTANCE && t < 1.0-SMALL_T_DISTANCE {
            (a0 + (a1 - a0)*(1.0/t), b3 + (b2 - b3)*(1.0/(1.0-t)))
        } else {
            (a1, b2)
        }
    } else {
        (a1, b2)
    };

    Segment::Cubic { from: a0, control_points: (cp1, cp2), to: b3 }
}

///
/// Merges two segments geometrically, when they are not contiguous parts of the same original segment
///
fn merge_segments(first: &Segment, second: &Segment) -> Result<Segment, PathError> {
    match (first, second) {
        (Segment::Line { from, .. }, Segment::Line { to, .. })  => Ok(Segment::Line { from: *from, to: *to }),
        (Segment::Line { from, .. }, Segment::Close { to, .. }) => Ok(Segment::Close { from: *from, to: *to }),

        (Segment::Arc { .. }, Segment::Arc { .. })              => {
            match (first.as_arc(), second.as_arc()) {
                (Some(first_arc), Some(second_arc)) => merge_arcs(&first_arc, &second_arc)
                    .ok_or_else(|| PathError::StructuralError("arcs that are not part of the same ellipse can't be merged".to_string())),
                _                                   => Err(PathError::StructuralError("arcs could not be merged".to_string()))
            }
        }

        _                                                       => {
            match (first.as_cubic(), second.as_cubic()) {
                (Some(first_curve), Some(second_curve)) => Ok(merge_curves(&first_curve, &second_curve)),
                _                                       => Err(PathError::StructuralError(format!("{:?} and {:?} commands can't be merged", first.command_type(), second.command_type())))
            }
        }
    }
}

///
/// Merges the command at `cmd_idx` with the command that follows it
///
/// The two commands must have been created by splitting the same command. If they are neighbouring fragments of
/// the command, the merged command is an exact section of it (or the command itself, if the merge covers the whole
/// command). Otherwise the two commands are merged geometrically.
///
pub fn unsplit_command(sub_idx: usize, sub_path: &SubPath, cmd_idx: usize) -> Result<SubPath, PathError> {
    let first   = command_at(sub_idx, sub_path, cmd_idx)?;
    let second  = command_at(sub_idx, sub_path, cmd_idx+1)?;

    if first.id() != second.id() || first.command_type() == CommandType::MoveTo {
        return Err(PathError::StructuralError(format!("commands {} and {} were not split from the same command", cmd_idx, cmd_idx+1)));
    }

    let merged = match (first.split_source(), second.split_source()) {
        (Some(first_source), Some(second_source))
            if first_source.original == second_source.original && (first_source.t_max - second_source.t_min).abs() < RANGE_TOLERANCE => {
            let original        = first_source.original;
            let (t_min, t_max)  = (first_source.t_min, second_source.t_max);

            if t_min <= 0.0 && t_max >= 1.0 {
                // Merging the last two fragments restores the original command
                Command::with_id(first.id(), original)
            } else {
                Command::fragment(first.id(), section_of(&original, t_min, t_max), SplitSource { original, t_min, t_max })
            }
        }

        _ => first.with_new_geometry(merge_segments(first.segment(), second.segment())?)
    };

    replace_commands(sub_path, cmd_idx..(cmd_idx+2), vec![merged])
}
