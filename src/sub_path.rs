use super::error::*;
use super::command::*;

use flo_morph_curves::*;

use once_cell::sync::OnceCell;

use std::sync::Arc;

/// Maximum distance between the end of one command and the start of the next in a subpath
pub const CONTINUITY_TOLERANCE: f64 = 1e-6;

///
/// A single contour within a path
///
/// A subpath always starts with a move command, and each following command starts where the previous one ended.
/// Commands are shared between subpaths, so editing one command in a path only needs to copy the list of
/// commands and not the commands themselves.
///
#[derive(Clone, Debug)]
pub struct SubPath {
    /// The commands making up this subpath
    commands: Vec<Arc<Command>>,

    /// Cached length of this subpath
    length: OnceCell<f64>
}

impl SubPath {
    ///
    /// Creates a new subpath, checking that the commands form a valid contour
    ///
    pub fn new(commands: Vec<Command>) -> Result<SubPath, PathError> {
        SubPath::from_shared(commands.into_iter().map(Arc::new).collect())
    }

    ///
    /// Creates a new subpath from a set of commands that might be shared with other subpaths
    ///
    pub fn from_shared(commands: Vec<Arc<Command>>) -> Result<SubPath, PathError> {
        validate_commands(&commands)?;

        Ok(SubPath {
            commands:   commands,
            length:     OnceCell::new()
        })
    }

    ///
    /// The commands in this subpath (the first is always a move)
    ///
    #[inline]
    pub fn commands(&self) -> &[Arc<Command>] {
        &self.commands
    }

    ///
    /// Retrieves the command at the specified index
    ///
    #[inline]
    pub fn command(&self, cmd_idx: usize) -> Option<&Arc<Command>> {
        self.commands.get(cmd_idx)
    }

    ///
    /// The number of commands in this subpath (including the initial move)
    ///
    #[inline]
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    ///
    /// The point that this subpath starts at
    ///
    pub fn start_point(&self) -> Coord2 {
        self.commands[0].end_point()
    }

    ///
    /// The point that this subpath ends at
    ///
    pub fn end_point(&self) -> Coord2 {
        self.commands[self.commands.len()-1].end_point()
    }

    ///
    /// True if this subpath contains any commands other than its initial move
    ///
    #[inline]
    pub fn has_drawing_commands(&self) -> bool {
        self.commands.len() > 1
    }

    ///
    /// True if this subpath ends with a close command or ends where it starts
    ///
    pub fn is_closed(&self) -> bool {
        match self.commands.last() {
            Some(last) if last.command_type() == CommandType::ClosePath => true,
            _                                                           => self.has_drawing_commands() && self.end_point().is_near_to(&self.start_point(), CONTINUITY_TOLERANCE)
        }
    }

    ///
    /// The total length of the commands in this subpath
    ///
    pub fn length(&self) -> f64 {
        *self.length.get_or_init(|| self.commands.iter().map(|cmd| cmd.length()).sum())
    }

    ///
    /// The bounding box of this subpath
    ///
    pub fn bounding_box(&self) -> Bounds<Coord2> {
        let first = self.commands[0].bounding_box();

        self.commands.iter()
            .skip(1)
            .fold(first, |bounds, cmd| bounds.union_bounds(cmd.bounding_box()))
    }

    ///
    /// Approximates this subpath with a polyline
    ///
    /// The start point of each command is shared with the end point of the previous command so it appears only
    /// once. For closed subpaths, the point that returns to the start is left out as polygons are implicitly closed.
    ///
    pub fn to_polygon(&self, tolerance: f64) -> Vec<Coord2> {
        let mut points = vec![self.start_point()];

        for cmd in self.commands.iter().skip(1) {
            points.extend(cmd.segment().flatten(tolerance).into_iter().skip(1));
        }

        if self.is_closed() && points.len() > 1 {
            let first = points[0];
            if points[points.len()-1].is_near_to(&first, CONTINUITY_TOLERANCE) {
                points.pop();
            }
        }

        points
    }

    ///
    /// True if this subpath has the same command types as another with every control point within `epsilon`
    ///
    pub fn is_near_to(&self, other: &SubPath, epsilon: f64) -> bool {
        self.commands.len() == other.commands.len()
            && self.commands.iter().zip(other.commands.iter()).all(|(a, b)| a.is_near_to(b, epsilon))
    }
}

///
/// Checks that a set of commands can form a subpath
///
fn validate_commands(commands: &[Arc<Command>]) -> Result<(), PathError> {
    let first = commands.first().ok_or_else(|| PathError::StructuralError("a subpath must contain at least one command".to_string()))?;

    if first.command_type() != CommandType::MoveTo {
        return Err(PathError::StructuralError(format!("a subpath must start with a move, not {:?}", first.command_type())));
    }

    let start_point     = first.end_point();
    let mut last_point  = start_point;

    for (cmd_idx, cmd) in commands.iter().enumerate().skip(1) {
        match cmd.command_type() {
            CommandType::MoveTo     => {
                return Err(PathError::StructuralError(format!("command {} is a move: only the first command of a subpath can be a move", cmd_idx)));
            }

            CommandType::ClosePath  => {
                if cmd_idx != commands.len()-1 {
                    return Err(PathError::StructuralError(format!("command {} closes the path but is not the last command", cmd_idx)));
                }

                if !cmd.end_point().is_near_to(&start_point, CONTINUITY_TOLERANCE) {
                    return Err(PathError::StructuralError(format!("command {} closes the path but does not return to its start", cmd_idx)));
                }
            }

            _                       => { }
        }

        if !cmd.start_point().is_near_to(&last_point, CONTINUITY_TOLERANCE) {
            return Err(PathError::StructuralError(format!("command {} starts at ({}, {}) but the previous command ends at ({}, {})",
                cmd_idx, cmd.start_point().x(), cmd.start_point().y(), last_point.x(), last_point.y())));
        }

        last_point = cmd.end_point();
    }

    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn empty_sub_path_is_an_error() {
        assert!(SubPath::new(vec![]).is_err());
    }

    #[test]
    fn must_start_with_move() {
        let result = SubPath::new(vec![Command::line_to(Coord2(0.0, 0.0), Coord2(1.0, 0.0))]);

        assert!(match result { Err(PathError::StructuralError(_)) => true, _ => false });
    }

    #[test]
    fn commands_must_join_up() {
        let result = SubPath::new(vec![
            Command::move_to(Coord2(0.0, 0.0)),
            Command::line_to(Coord2(0.0, 0.0), Coord2(1.0, 0.0)),
            Command::line_to(Coord2(1.0, 0.5), Coord2(1.0, 1.0))
        ]);

        assert!(match result { Err(PathError::StructuralError(_)) => true, _ => false });
    }

    #[test]
    fn tiny_gaps_are_allowed() {
        let result = SubPath::new(vec![
            Command::move_to(Coord2(0.0, 0.0)),
            Command::line_to(Coord2(0.0, 0.0), Coord2(1.0, 0.0)),
            Command::line_to(Coord2(1.0, 1e-8), Coord2(1.0, 1.0))
        ]);

        assert!(result.is_ok());
    }

    #[test]
    fn close_must_be_last() {
        let result = SubPath::new(vec![
            Command::move_to(Coord2(0.0, 0.0)),
            Command::line_to(Coord2(0.0, 0.0), Coord2(1.0, 0.0)),
            Command::close_path(Coord2(1.0, 0.0), Coord2(0.0, 0.0)),
            Command::line_to(Coord2(0.0, 0.0), Coord2(1.0, 1.0))
        ]);

        assert!(result.is_err());
    }

    #[test]
    fn ending_at_start_is_closed() {
        let sub_path = SubPath::new(vec![
            Command::move_to(Coord2(0.0, 0.0)),
            Command::line_to(Coord2(0.0, 0.0), Coord2(1.0, 0.0)),
            Command::line_to(Coord2(1.0, 0.0), Coord2(0.0, 0.0))
        ]).unwrap();

        assert!(sub_path.is_closed());
        assert!(sub_path.to_polygon(0.01).len() == 2);
    }

    #[test]
    fn lone_move_is_not_closed() {
        let sub_path = SubPath::new(vec![Command::move_to(Coord2(3.0, 4.0))]).unwrap();

        assert!(!sub_path.is_closed());
        assert!(sub_path.length() == 0.0);
    }
}
