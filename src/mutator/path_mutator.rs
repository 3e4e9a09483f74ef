use super::split::*;
use super::convert::*;
use super::contour::*;
use super::path_edit::*;
use super::super::path::*;
use super::super::error::*;
use super::super::command::*;
use super::super::sub_path::*;

use log::*;

use std::sync::Arc;

///
/// The state of a path mutator
///
#[derive(Clone, Debug)]
enum MutatorState {
    /// Edits are being staged
    Staging(Vec<PathEdit>),

    /// The mutator has built its path and can't be used any more
    Built
}

///
/// Stages a set of edits to a path, then builds a new path with the edits applied
///
/// The base path is never changed. Edits are applied in the order they're staged, each to the result of the edits
/// before it, and are only checked when `build()` is called: if any edit fails, no path is produced. A mutator
/// can only build a single path.
///
/// ```
/// # use flo_morph::*;
/// let path    = Path::parse("M 0 0 L 10 0 L 10 10 Z").unwrap();
/// let split   = path.mutate()
///     .split_command(0, 1, 0.5).unwrap()
///     .build().unwrap();
///
/// assert!(split.path_string() == "M 0 0 L 5 0 L 10 0 L 10 10 Z");
/// assert!(path.path_string() == "M 0 0 L 10 0 L 10 10 Z");
/// ```
///
#[derive(Clone, Debug)]
pub struct PathMutator {
    /// The path that the edits are applied to
    base: Path,

    /// Current state of this mutator
    state: MutatorState
}

impl Path {
    ///
    /// Creates a mutator that can be used to build an edited copy of this path
    ///
    pub fn mutate(&self) -> PathMutator {
        PathMutator::new(self)
    }
}

impl PathMutator {
    ///
    /// Creates a new mutator for a path
    ///
    pub fn new(base: &Path) -> PathMutator {
        PathMutator {
            base:   base.clone(),
            state:  MutatorState::Staging(vec![])
        }
    }

    ///
    /// Adds an edit to the list to be applied when the path is built
    ///
    pub fn stage(&mut self, edit: PathEdit) -> Result<&mut PathMutator, PathError> {
        match &mut self.state {
            MutatorState::Staging(edits)    => edits.push(edit),
            MutatorState::Built             => return Err(PathError::UsageError(format!("can't {} using a mutator that has already built its path", edit.description())))
        }

        Ok(self)
    }

    ///
    /// The edits that have been staged so far
    ///
    pub fn staged_edits(&self) -> &[PathEdit] {
        match &self.state {
            MutatorState::Staging(edits)    => edits,
            MutatorState::Built             => &[]
        }
    }

    ///
    /// Splits a command in two at the specified t value (which must be between 0 and 1)
    ///
    pub fn split_command(&mut self, sub_idx: usize, cmd_idx: usize, t: f64) -> Result<&mut PathMutator, PathError> {
        self.stage(PathEdit::SplitCommand { sub_idx, cmd_idx, t })
    }

    ///
    /// Splits a command into two commands of equal length
    ///
    pub fn split_command_in_half(&mut self, sub_idx: usize, cmd_idx: usize) -> Result<&mut PathMutator, PathError> {
        self.stage(PathEdit::SplitCommandInHalf { sub_idx, cmd_idx })
    }

    ///
    /// Merges a command with the following command (they must have been split from the same command)
    ///
    pub fn unsplit_command(&mut self, sub_idx: usize, cmd_idx: usize) -> Result<&mut PathMutator, PathError> {
        self.stage(PathEdit::UnsplitCommand { sub_idx, cmd_idx })
    }

    pub fn reverse_sub_path(&mut self, sub_idx: usize) -> Result<&mut PathMutator, PathError> {
        self.stage(PathEdit::ReverseSubPath { sub_idx })
    }

    ///
    /// Makes the command at `cmd_idx` the first command drawn by a closed subpath
    ///
    pub fn shift_sub_path_start(&mut self, sub_idx: usize, cmd_idx: usize) -> Result<&mut PathMutator, PathError> {
        self.stage(PathEdit::ShiftSubPathStart { sub_idx, cmd_idx })
    }

    pub fn shift_sub_path_forward(&mut self, sub_idx: usize) -> Result<&mut PathMutator, PathError> {
        self.stage(PathEdit::ShiftSubPathForward { sub_idx })
    }

    pub fn shift_sub_path_back(&mut self, sub_idx: usize) -> Result<&mut PathMutator, PathError> {
        self.stage(PathEdit::ShiftSubPathBack { sub_idx })
    }

    ///
    /// Changes the type of a command, keeping its end points
    ///
    pub fn convert_command(&mut self, sub_idx: usize, cmd_idx: usize, command_type: CommandType) -> Result<&mut PathMutator, PathError> {
        self.stage(PathEdit::ConvertCommand { sub_idx, cmd_idx, command_type })
    }

    pub fn add_sub_path(&mut self, sub_path: SubPath) -> Result<&mut PathMutator, PathError> {
        self.stage(PathEdit::AddSubPath(Arc::new(sub_path)))
    }

    pub fn insert_sub_path(&mut self, sub_idx: usize, sub_path: SubPath) -> Result<&mut PathMutator, PathError> {
        self.stage(PathEdit::InsertSubPath(sub_idx, Arc::new(sub_path)))
    }

    pub fn delete_sub_path(&mut self, sub_idx: usize) -> Result<&mut PathMutator, PathError> {
        self.stage(PathEdit::DeleteSubPath(sub_idx))
    }

    ///
    /// Applies the staged edits to the base path and returns the result
    ///
    /// The mutator can't be used again after this call, even if one of the edits fails.
    ///
    pub fn build(&mut self) -> Result<Path, PathError> {
        let edits = match std::mem::replace(&mut self.state, MutatorState::Built) {
            MutatorState::Staging(edits)    => edits,
            MutatorState::Built             => return Err(PathError::UsageError("build() can only be called once for each mutator".to_string()))
        };

        let mut sub_paths = self.base.sub_paths().to_vec();

        for (edit_idx, edit) in edits.iter().enumerate() {
            debug!("Applying edit {}: {}", edit_idx, edit.description());

            apply_edit(&mut sub_paths, edit)
                .map_err(|err| err.for_edit(&format!("edit {} ({})", edit_idx, edit.description())))?;
        }

        Ok(self.base.with_edited_sub_paths(sub_paths))
    }
}

///
/// Retrieves the subpath at an index
///
fn sub_path_at(sub_paths: &[Arc<SubPath>], sub_idx: usize) -> Result<&SubPath, PathError> {
    sub_paths.get(sub_idx)
        .map(|sub_path| &**sub_path)
        .ok_or_else(|| PathError::no_sub_path(sub_idx))
}

///
/// Replaces a subpath with an edited version
///
fn edit_sub_path<EditFn: FnOnce(&SubPath) -> Result<SubPath, PathError>>(sub_paths: &mut Vec<Arc<SubPath>>, sub_idx: usize, edit: EditFn) -> Result<(), PathError> {
    let edited          = edit(sub_path_at(sub_paths, sub_idx)?)?;
    sub_paths[sub_idx]  = Arc::new(edited);

    Ok(())
}

///
/// Applies a single edit to a list of subpaths
///
fn apply_edit(sub_paths: &mut Vec<Arc<SubPath>>, edit: &PathEdit) -> Result<(), PathError> {
    use self::PathEdit::*;

    match edit {
        SplitCommand { sub_idx, cmd_idx, t }                => edit_sub_path(sub_paths, *sub_idx, |sub_path| split_command(*sub_idx, sub_path, *cmd_idx, *t)),
        SplitCommandInHalf { sub_idx, cmd_idx }             => edit_sub_path(sub_paths, *sub_idx, |sub_path| split_command_in_half(*sub_idx, sub_path, *cmd_idx)),
        UnsplitCommand { sub_idx, cmd_idx }                 => edit_sub_path(sub_paths, *sub_idx, |sub_path| unsplit_command(*sub_idx, sub_path, *cmd_idx)),
        ReverseSubPath { sub_idx }                          => edit_sub_path(sub_paths, *sub_idx, |sub_path| reverse_sub_path(sub_path)),
        ShiftSubPathStart { sub_idx, cmd_idx }              => edit_sub_path(sub_paths, *sub_idx, |sub_path| shift_sub_path_start(*sub_idx, sub_path, *cmd_idx)),
        ShiftSubPathForward { sub_idx }                     => edit_sub_path(sub_paths, *sub_idx, |sub_path| shift_sub_path_forward(*sub_idx, sub_path)),
        ShiftSubPathBack { sub_idx }                        => edit_sub_path(sub_paths, *sub_idx, |sub_path| shift_sub_path_back(*sub_idx, sub_path)),
        ConvertCommand { sub_idx, cmd_idx, command_type }   => edit_sub_path(sub_paths, *sub_idx, |sub_path| convert_command(*sub_idx, sub_path, *cmd_idx, *command_type)),

        AddSubPath(sub_path)                                => {
            sub_paths.push(Arc::clone(sub_path));
            Ok(())
        }

        InsertSubPath(sub_idx, sub_path)                    => {
            if *sub_idx > sub_paths.len() {
                Err(PathError::no_sub_path(*sub_idx))
            } else {
                sub_paths.insert(*sub_idx, Arc::clone(sub_path));
                Ok(())
            }
        }

        DeleteSubPath(sub_idx)                              => {
            sub_path_at(sub_paths, *sub_idx)?;
            sub_paths.remove(*sub_idx);
            Ok(())
        }
    }
}
