use super::path_string::*;
use super::super::error::*;
use super::super::options::*;
use super::super::command::*;
use super::super::sub_path::*;

use flo_morph_curves::*;

use once_cell::sync::OnceCell;

use std::sync::Arc;

///
/// The contents of a path
///
#[derive(Debug)]
pub (crate) struct PathData {
    /// The contours making up this path
    pub (crate) sub_paths: Vec<Arc<SubPath>>,

    /// Options used when writing out and approximating this path
    pub (crate) options: Arc<PathOptions>,

    /// Cached path string
    path_string: OnceCell<String>,

    /// Cached length
    length: OnceCell<f64>
}

impl PathData {
    pub (crate) fn new(sub_paths: Vec<Arc<SubPath>>, options: Arc<PathOptions>) -> PathData {
        PathData {
            sub_paths:      sub_paths,
            options:        options,
            path_string:    OnceCell::new(),
            length:         OnceCell::new()
        }
    }
}

///
/// A compound vector path, made up of a list of subpaths
///
/// Paths are immutable: `mutate()` returns a builder that creates a new path, leaving this one unchanged, so a
/// path can be shared freely between threads. Every path also remembers the path it was originally created from
/// before any edits were made, which can be retrieved with `revert()`.
///
#[derive(Clone, Debug)]
pub struct Path {
    /// The current state of this path
    pub (crate) data: Arc<PathData>,

    /// The state of this path before it was edited
    pub (crate) pristine: Arc<PathData>
}

impl Path {
    ///
    /// Creates a new path from a set of subpaths
    ///
    pub fn from_sub_paths(sub_paths: Vec<SubPath>) -> Path {
        Path::from_data(PathData::new(sub_paths.into_iter().map(Arc::new).collect(), Arc::new(PathOptions::default())))
    }

    ///
    /// Creates an unedited path from its data
    ///
    pub (crate) fn from_data(data: PathData) -> Path {
        let data = Arc::new(data);

        Path {
            pristine:   Arc::clone(&data),
            data:       data
        }
    }

    ///
    /// Creates an edited version of this path
    ///
    pub (crate) fn with_edited_sub_paths(&self, sub_paths: Vec<Arc<SubPath>>) -> Path {
        Path {
            data:       Arc::new(PathData::new(sub_paths, Arc::clone(&self.data.options))),
            pristine:   Arc::clone(&self.pristine)
        }
    }

    ///
    /// Returns a copy of this path that uses a different set of options
    ///
    /// The copy is a new, unedited path.
    ///
    pub fn with_options(&self, options: PathOptions) -> Result<Path, PathError> {
        options.validate()?;

        Ok(Path::from_data(PathData::new(self.data.sub_paths.clone(), Arc::new(options))))
    }

    ///
    /// The options that apply to this path
    ///
    #[inline]
    pub fn options(&self) -> &PathOptions {
        &self.data.options
    }

    ///
    /// The total length of this path
    ///
    pub fn path_length(&self) -> f64 {
        *self.data.length.get_or_init(|| self.data.sub_paths.iter().map(|sub_path| sub_path.length()).sum())
    }

    ///
    /// The SVG path string for this path
    ///
    pub fn path_string(&self) -> &str {
        self.data.path_string.get_or_init(|| write_path_string(&self.data.sub_paths, self.data.options.precision))
    }

    ///
    /// The subpaths making up this path
    ///
    #[inline]
    pub fn sub_paths(&self) -> &[Arc<SubPath>] {
        &self.data.sub_paths
    }

    ///
    /// Retrieves the subpath at a particular index
    ///
    pub fn sub_path(&self, sub_idx: usize) -> Result<&Arc<SubPath>, PathError> {
        self.data.sub_paths.get(sub_idx)
            .ok_or_else(|| PathError::no_sub_path(sub_idx))
    }

    ///
    /// Every command in this path, in order
    ///
    pub fn commands(&self) -> Vec<Arc<Command>> {
        self.data.sub_paths.iter()
            .flat_map(|sub_path| sub_path.commands().iter().cloned())
            .collect()
    }

    ///
    /// Retrieves a single command from this path
    ///
    pub fn command(&self, sub_idx: usize, cmd_idx: usize) -> Result<&Arc<Command>, PathError> {
        self.sub_path(sub_idx)?
            .command(cmd_idx)
            .ok_or_else(|| PathError::no_command(sub_idx, cmd_idx))
    }

    ///
    /// The total number of commands in this path
    ///
    pub fn command_count(&self) -> usize {
        self.data.sub_paths.iter().map(|sub_path| sub_path.len()).sum()
    }

    ///
    /// The bounding box of this path, or None if it has no commands
    ///
    pub fn bounding_box(&self) -> Option<Bounds<Coord2>> {
        self.data.sub_paths.iter()
            .map(|sub_path| sub_path.bounding_box())
            .fold(None, |bounds: Option<Bounds<Coord2>>, next| match bounds {
                Some(bounds)    => Some(bounds.union_bounds(next)),
                None            => Some(next)
            })
    }

    ///
    /// True if this path can be morphed into another path
    ///
    /// Paths are morphable when they have the same number of subpaths, with the same number of commands in each,
    /// and the corresponding commands are of the same type. The control points can be anywhere.
    ///
    pub fn is_morphable_with(&self, other: &Path) -> bool {
        let our_sub_paths   = self.sub_paths();
        let their_sub_paths = other.sub_paths();

        our_sub_paths.len() == their_sub_paths.len()
            && our_sub_paths.iter().zip(their_sub_paths.iter()).all(|(ours, theirs)| {
                ours.len() == theirs.len()
                    && ours.commands().iter().zip(theirs.commands().iter()).all(|(a, b)| a.command_type() == b.command_type())
            })
    }

    ///
    /// True if this path has the same structure as another, with every control point within `epsilon` of its counterpart
    ///
    pub fn approx_eq(&self, other: &Path, epsilon: f64) -> bool {
        let our_sub_paths   = self.sub_paths();
        let their_sub_paths = other.sub_paths();

        our_sub_paths.len() == their_sub_paths.len()
            && our_sub_paths.iter().zip(their_sub_paths.iter()).all(|(ours, theirs)| ours.is_near_to(theirs, epsilon))
    }

    ///
    /// Returns this path as it was before any edits were made to it
    ///
    pub fn revert(&self) -> Path {
        Path {
            data:       Arc::clone(&self.pristine),
            pristine:   Arc::clone(&self.pristine)
        }
    }

    ///
    /// True if this path was produced by editing another path
    ///
    #[inline]
    pub fn has_edits(&self) -> bool {
        !Arc::ptr_eq(&self.data, &self.pristine)
    }

    ///
    /// Finds every command in this path that came from the same original command as the one at the specified index
    ///
    /// Splitting a command gives every fragment the same identity, so this finds all of the fragments of a split
    /// command (including the command at the index itself). The results are in path order.
    ///
    pub fn connected_split_segments(&self, sub_idx: usize, cmd_idx: usize) -> Result<Vec<PathIndex>, PathError> {
        let id = self.command(sub_idx, cmd_idx)?.id();

        Ok(self.data.sub_paths.iter()
            .enumerate()
            .flat_map(|(sub_idx, sub_path)| sub_path.commands().iter()
                .enumerate()
                .filter(move |(_, cmd)| cmd.id() == id)
                .map(move |(cmd_idx, _)| PathIndex::new(sub_idx, cmd_idx)))
            .collect())
    }
}

impl Default for Path {
    fn default() -> Path {
        Path::from_sub_paths(vec![])
    }
}
