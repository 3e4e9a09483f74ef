use super::split::*;
use super::super::error::*;
use super::super::command::*;
use super::super::sub_path::*;

use std::sync::Arc;

///
/// How a contour is closed
///
#[derive(Clone, Debug)]
enum Closing {
    /// There's no close command
    NoClose,

    /// The subpath ends with a close command that doesn't draw anything
    ZeroLengthClose(Arc<Command>),

    /// The subpath ends with a close command that draws a line (which is the last drawing command of the contour)
    Close
}

///
/// A subpath broken down into its drawing commands, so they can be reordered
///
/// A close command that draws a line is stored as a line, so the drawing commands can be treated as a loop
/// when the subpath is closed.
///
struct Contour {
    /// The initial move command
    move_command: Arc<Command>,

    /// The commands that draw the contour
    drawing: Vec<Arc<Command>>,

    /// How the contour is closed
    closing: Closing
}

impl Contour {
    ///
    /// Breaks a subpath down into a contour
    ///
    fn from_sub_path(sub_path: &SubPath) -> Contour {
        let commands        = sub_path.commands();
        let move_command    = Arc::clone(&commands[0]);
        let mut drawing     = commands[1..].to_vec();
        let mut closing     = Closing::NoClose;

        if let Some(last) = drawing.pop() {
            match *last.segment() {
                Segment::Close { from, to } if from == to   => { closing = Closing::ZeroLengthClose(last); }
                Segment::Close { from, to }                 => { drawing.push(Arc::new(last.with_segment(Segment::Line { from, to }))); closing = Closing::Close; }
                _                                           => { drawing.push(last); }
            }
        }

        Contour { move_command, drawing, closing }
    }

    ///
    /// Turns this contour back into a subpath
    ///
    fn to_sub_path(self) -> Result<SubPath, PathError> {
        let start       = self.drawing.first().map(|cmd| cmd.start_point()).unwrap_or_else(|| self.move_command.end_point());
        let end         = self.drawing.last().map(|cmd| cmd.end_point()).unwrap_or(start);
        let mut drawing = self.drawing;

        match self.closing {
            Closing::NoClose                    => { }
            Closing::ZeroLengthClose(close)     => { drawing.push(Arc::new(close.with_segment(Segment::Close { from: end, to: end }))); }

            Closing::Close                      => {
                // The last line becomes the close, or a close is added if the contour ends with a curve
                let last_line = match drawing.last().map(|cmd| *cmd.segment()) {
                    Some(Segment::Line { from, to })    => Some(Segment::Close { from, to }),
                    _                                   => None
                };

                match last_line {
                    Some(close) => {
                        let last_idx        = drawing.len()-1;
                        drawing[last_idx]   = Arc::new(drawing[last_idx].with_segment(close));
                    }

                    None        => {
                        drawing.push(Arc::new(Command::close_path(end, end)));
                    }
                }
            }
        }

        let mut commands = vec![Arc::new(self.move_command.with_segment(Segment::Move { to: start }))];
        commands.extend(drawing);

        SubPath::from_shared(commands)
    }
}

///
/// Reverses a command, keeping track of where it is in the command it was split from
///
fn reverse_command(cmd: &Command) -> Command {
    let reversed = cmd.segment().reverse();

    match cmd.split_source() {
        Some(source)    => Command::fragment(cmd.id(), reversed, SplitSource { original: source.original.reverse(), t_min: 1.0-source.t_max, t_max: 1.0-source.t_min }),
        None            => Command::with_id(cmd.id(), reversed)
    }
}

///
/// Reverses the direction that a subpath is drawn in
///
/// Open subpaths start at their old end point. A closed subpath whose close command draws a line keeps its close
/// command last, which makes the subpath start at the old start of the command before the close.
///
pub fn reverse_sub_path(sub_path: &SubPath) -> Result<SubPath, PathError> {
    let mut contour = Contour::from_sub_path(sub_path);

    contour.drawing = contour.drawing.iter()
        .rev()
        .map(|cmd| Arc::new(reverse_command(cmd)))
        .collect();

    if let Closing::Close = contour.closing {
        // The reversed close is now the first command: move it back to the end
        if !contour.drawing.is_empty() {
            contour.drawing.rotate_left(1);
        }
    }

    contour.to_sub_path()
}

///
/// Rotates the drawing commands of a closed subpath so that the command at `cmd_idx` is drawn first
///
pub fn shift_sub_path_start(sub_idx: usize, sub_path: &SubPath, cmd_idx: usize) -> Result<SubPath, PathError> {
    command_at(sub_idx, sub_path, cmd_idx)?;

    if cmd_idx == 0 {
        return Err(PathError::StructuralError("the start of a subpath can't be moved to its initial move".to_string()));
    }

    let mut contour = closed_contour(sub_idx, sub_path)?;

    // A close command that draws nothing starts at the same place as the first drawing command
    let position = if cmd_idx-1 < contour.drawing.len() { cmd_idx-1 } else { 0 };
    if position > 0 {
        contour.drawing.rotate_left(position);
    }

    contour.to_sub_path()
}

///
/// Moves the start of a closed subpath forward by one drawing command
///
pub fn shift_sub_path_forward(sub_idx: usize, sub_path: &SubPath) -> Result<SubPath, PathError> {
    let mut contour = closed_contour(sub_idx, sub_path)?;

    if !contour.drawing.is_empty() {
        contour.drawing.rotate_left(1);
    }

    contour.to_sub_path()
}

///
/// Moves the start of a closed subpath back by one drawing command
///
pub fn shift_sub_path_back(sub_idx: usize, sub_path: &SubPath) -> Result<SubPath, PathError> {
    let mut contour = closed_contour(sub_idx, sub_path)?;

    if !contour.drawing.is_empty() {
        contour.drawing.rotate_right(1);
    }

    contour.to_sub_path()
}

///
/// Breaks a subpath down into a contour, if it's closed
///
fn closed_contour(sub_idx: usize, sub_path: &SubPath) -> Result<Contour, PathError> {
    if !sub_path.is_closed() {
        Err(PathError::StructuralError(format!("subpath {} must be closed to move its start point", sub_idx)))
    } else {
        Ok(Contour::from_sub_path(sub_path))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use flo_morph_curves::*;

    fn square() -> SubPath {
        SubPath::new(vec![
            Command::move_to(Coord2(0.0, 0.0)),
            Command::line_to(Coord2(0.0, 0.0), Coord2(10.0, 0.0)),
            Command::line_to(Coord2(10.0, 0.0), Coord2(10.0, 10.0)),
            Command::line_to(Coord2(10.0, 10.0), Coord2(0.0, 10.0)),
            Command::close_path(Coord2(0.0, 10.0), Coord2(0.0, 0.0))
        ]).unwrap()
    }

    #[test]
    fn contour_round_trip() {
        let sub_path    = square();
        let contour     = Contour::from_sub_path(&sub_path);

        assert!(contour.drawing.len() == 4);
        assert!(contour.to_sub_path().unwrap().is_near_to(&sub_path, 1e-9));
    }

    #[test]
    fn reverse_keeps_close_last() {
        let reversed = reverse_sub_path(&square()).unwrap();

        assert!(reversed.len() == 5);
        assert!(reversed.start_point() == Coord2(0.0, 10.0));
        assert!(reversed.commands()[4].command_type() == CommandType::ClosePath);
        assert!(reversed.commands()[1].end_point() == Coord2(10.0, 10.0));
    }

    #[test]
    fn shift_preserves_ids() {
        let sub_path    = square();
        let shifted     = shift_sub_path_start(0, &sub_path, 2).unwrap();

        assert!(shifted.start_point() == Coord2(10.0, 0.0));
        assert!(shifted.commands()[1].id() == sub_path.commands()[2].id());
        assert!(shifted.commands()[4].command_type() == CommandType::ClosePath);
    }
}
