use super::segment::*;
use super::command_id::*;
use super::projection::*;
use super::command_type::*;

use flo_morph_curves::*;

use once_cell::sync::OnceCell;
use serde::{Serialize, Deserialize};
use smallvec::SmallVec;

///
/// Describes where a command that was created by splitting another command came from
///
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SplitSource {
    /// The command before any splits were made
    pub original: Segment,

    /// The t value in the original command where this fragment starts
    pub t_min: f64,

    /// The t value in the original command where this fragment ends
    pub t_max: f64
}

///
/// A single drawing instruction within a subpath
///
/// Commands are never changed once they're created: editing a path creates new commands. The length and
/// bounding box are calculated the first time they're needed.
///
#[derive(Clone, Debug)]
pub struct Command {
    /// Identity of this command (shared with any fragments it's split into)
    id: CommandId,

    /// What is drawn by this command
    segment: Segment,

    /// If this command is a fragment of a larger command, where it came from
    split: Option<SplitSource>,

    /// Cached length
    length: OnceCell<f64>,

    /// Cached bounding box
    bounds: OnceCell<Bounds<Coord2>>
}

impl Command {
    ///
    /// Creates a new command with a new identity
    ///
    pub fn new(segment: Segment) -> Command {
        Command::with_id(CommandId::new(), segment)
    }

    ///
    /// Creates a command with a known identity
    ///
    pub fn with_id(id: CommandId, segment: Segment) -> Command {
        Command {
            id:         id,
            segment:    segment,
            split:      None,
            length:     OnceCell::new(),
            bounds:     OnceCell::new()
        }
    }

    ///
    /// Creates a fragment of a command that has been split
    ///
    pub fn fragment(id: CommandId, segment: Segment, split: SplitSource) -> Command {
        Command {
            id:         id,
            segment:    segment,
            split:      Some(split),
            length:     OnceCell::new(),
            bounds:     OnceCell::new()
        }
    }

    pub fn move_to(to: Coord2) -> Command {
        Command::new(Segment::Move { to })
    }

    pub fn line_to(from: Coord2, to: Coord2) -> Command {
        Command::new(Segment::Line { from, to })
    }

    pub fn quadratic_to(from: Coord2, control: Coord2, to: Coord2) -> Command {
        Command::new(Segment::Quadratic { from, control, to })
    }

    pub fn cubic_to(from: Coord2, control_points: (Coord2, Coord2), to: Coord2) -> Command {
        Command::new(Segment::Cubic { from, control_points, to })
    }

    pub fn arc_to(from: Coord2, parameters: ArcParameters, to: Coord2) -> Command {
        Command::new(Segment::Arc { from, parameters, to })
    }

    pub fn close_path(from: Coord2, to: Coord2) -> Command {
        Command::new(Segment::Close { from, to })
    }

    ///
    /// Creates a command with the same identity and split history as this one but different geometry
    ///
    pub fn with_segment(&self, segment: Segment) -> Command {
        Command {
            id:         self.id,
            segment:    segment,
            split:      self.split,
            length:     OnceCell::new(),
            bounds:     OnceCell::new()
        }
    }

    ///
    /// Creates a command with the same identity as this one but different geometry and no split history
    ///
    /// Used when an edit changes a command such that it can no longer be merged with the other fragments it was split
    /// from.
    ///
    pub fn with_new_geometry(&self, segment: Segment) -> Command {
        Command::with_id(self.id, segment)
    }

    #[inline] pub fn id(&self) -> CommandId { self.id }
    #[inline] pub fn segment(&self) -> &Segment { &self.segment }
    #[inline] pub fn command_type(&self) -> CommandType { self.segment.command_type() }
    #[inline] pub fn points(&self) -> SmallVec<[Coord2; 4]> { self.segment.points() }
    #[inline] pub fn start_point(&self) -> Coord2 { self.segment.start_point() }
    #[inline] pub fn end_point(&self) -> Coord2 { self.segment.end_point() }
    #[inline] pub fn point_at(&self, t: f64) -> Coord2 { self.segment.point_at_pos(t) }

    ///
    /// For arc commands, the radii, rotation and flags of the arc
    ///
    #[inline]
    pub fn arc_parameters(&self) -> Option<ArcParameters> {
        self.segment.arc_parameters()
    }

    ///
    /// True if this command was created by splitting another command
    ///
    #[inline]
    pub fn is_split_segment(&self) -> bool {
        self.split.is_some()
    }

    ///
    /// If this command is a fragment of a split command, describes the command it was split from
    ///
    #[inline]
    pub fn split_source(&self) -> Option<&SplitSource> {
        self.split.as_ref()
    }

    ///
    /// The length of this command
    ///
    pub fn length(&self) -> f64 {
        *self.length.get_or_init(|| self.segment.length())
    }

    ///
    /// The bounding box of this command
    ///
    pub fn bounding_box(&self) -> Bounds<Coord2> {
        *self.bounds.get_or_init(|| self.segment.bounding_box())
    }

    ///
    /// Finds the point on this command that's nearest to the specified point
    ///
    pub fn project(&self, point: &Coord2) -> Projection {
        let (t, nearest) = self.segment.nearest_point(point);

        Projection {
            point:      nearest,
            t:          t,
            distance:   nearest.distance_to(point)
        }
    }

    ///
    /// Returns the t values where a line segment crosses this command, in ascending order
    ///
    pub fn intersect_line(&self, line: &(Coord2, Coord2)) -> Vec<f64> {
        self.segment.intersect_line(line)
            .into_iter()
            .map(|(t, _s, _pos)| t)
            .collect()
    }

    ///
    /// The number of times a line segment crosses this command
    ///
    #[inline]
    pub fn intersection_count(&self, line: &(Coord2, Coord2)) -> usize {
        self.intersect_line(line).len()
    }

    ///
    /// True if this command and another have the same type and control points within `epsilon` of each other
    ///
    #[inline]
    pub fn is_near_to(&self, other: &Command, epsilon: f64) -> bool {
        self.segment.is_near_to(&other.segment, epsilon)
    }
}
