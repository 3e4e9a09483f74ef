use super::super::command::*;
use super::super::sub_path::*;

use flo_morph_curves::*;

use itertools::Itertools;

use std::sync::Arc;

///
/// Formats a number for a path string, rounded to a number of decimal places with any trailing zeros removed
///
pub fn format_number(value: f64, precision: usize) -> String {
    let formatted = format!("{:.*}", precision, value);

    let trimmed = if formatted.contains('.') {
        formatted.trim_end_matches('0').trim_end_matches('.')
    } else {
        &formatted[..]
    };

    match trimmed {
        "-0" | ""   => "0".to_string(),
        other       => other.to_string()
    }
}

///
/// Writes out a single command in its canonical form
///
fn write_command(cmd: &Command, precision: usize) -> String {
    let num     = |value: f64| format_number(value, precision);
    let point   = |point: Coord2| format!("{} {}", num(point.x()), num(point.y()));
    let letter  = cmd.command_type().svg_letter();

    match cmd.segment() {
        Segment::Move { to }                                    => format!("{} {}", letter, point(*to)),
        Segment::Line { to, .. }                                => format!("{} {}", letter, point(*to)),
        Segment::Quadratic { control, to, .. }                  => format!("{} {} {}", letter, point(*control), point(*to)),
        Segment::Cubic { control_points: (cp1, cp2), to, .. }   => format!("{} {} {} {}", letter, point(*cp1), point(*cp2), point(*to)),
        Segment::Close { .. }                                   => letter.to_string(),

        Segment::Arc { parameters, to, .. }                     => {
            format!("{} {} {} {} {} {} {}", letter,
                num(parameters.radii.0), num(parameters.radii.1), num(parameters.x_axis_rotation),
                if parameters.large_arc { 1 } else { 0 },
                if parameters.sweep { 1 } else { 0 },
                point(*to))
        }
    }
}

///
/// Writes a set of subpaths as an SVG path string, using absolute coordinates rounded to the specified number of decimal places
///
pub fn write_path_string(sub_paths: &[Arc<SubPath>], precision: usize) -> String {
    sub_paths.iter()
        .flat_map(|sub_path| sub_path.commands().iter())
        .map(|cmd| write_command(cmd, precision))
        .join(" ")
}
