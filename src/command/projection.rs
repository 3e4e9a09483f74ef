use flo_morph_curves::*;

use serde::{Serialize, Deserialize};

///
/// Locates a command within a path
///
/// Indexes are only meaningful for the path they were obtained from: edits can renumber the commands.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PathIndex {
    pub sub_idx: usize,
    pub cmd_idx: usize
}

impl PathIndex {
    #[inline]
    pub fn new(sub_idx: usize, cmd_idx: usize) -> PathIndex {
        PathIndex { sub_idx, cmd_idx }
    }
}

///
/// The result of projecting a point onto a command
///
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Projection {
    /// The nearest point on the command
    pub point: Coord2,

    /// The t value of the nearest point along the command
    pub t: f64,

    /// The distance between the nearest point and the point that was projected
    pub distance: f64
}

///
/// The result of projecting a point onto a whole path
///
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProjectionOntoPath {
    /// The command that the point was projected on to
    pub index: PathIndex,

    /// Where the point lies on that command
    pub projection: Projection
}
