use super::super::command::*;
use super::super::sub_path::*;

use std::sync::Arc;

///
/// A single edit staged in a path mutator
///
#[derive(Clone, Debug)]
pub enum PathEdit {
    /// Splits a command into two at a t value
    SplitCommand { sub_idx: usize, cmd_idx: usize, t: f64 },

    /// Splits a command into two pieces of equal length
    SplitCommandInHalf { sub_idx: usize, cmd_idx: usize },

    /// Merges a command with the command following it
    UnsplitCommand { sub_idx: usize, cmd_idx: usize },

    /// Reverses the direction of a subpath
    ReverseSubPath { sub_idx: usize },

    /// Makes a command the first drawing command in a closed subpath
    ShiftSubPathStart { sub_idx: usize, cmd_idx: usize },

    /// Moves the start of a closed subpath to the end of its first drawing command
    ShiftSubPathForward { sub_idx: usize },

    /// Moves the start of a closed subpath to the start of its last drawing command
    ShiftSubPathBack { sub_idx: usize },

    /// Changes the type of a command
    ConvertCommand { sub_idx: usize, cmd_idx: usize, command_type: CommandType },

    /// Adds a subpath to the end of the path
    AddSubPath(Arc<SubPath>),

    /// Inserts a subpath before the subpath at an index
    InsertSubPath(usize, Arc<SubPath>),

    /// Removes a subpath
    DeleteSubPath(usize)
}

impl PathEdit {
    ///
    /// Short description of this edit, used for logging and error messages
    ///
    pub fn description(&self) -> String {
        use self::PathEdit::*;

        match self {
            SplitCommand { sub_idx, cmd_idx, t }                => format!("split command {} of subpath {} at t={}", cmd_idx, sub_idx, t),
            SplitCommandInHalf { sub_idx, cmd_idx }             => format!("split command {} of subpath {} in half", cmd_idx, sub_idx),
            UnsplitCommand { sub_idx, cmd_idx }                 => format!("unsplit command {} of subpath {}", cmd_idx, sub_idx),
            ReverseSubPath { sub_idx }                          => format!("reverse subpath {}", sub_idx),
            ShiftSubPathStart { sub_idx, cmd_idx }              => format!("shift start of subpath {} to command {}", sub_idx, cmd_idx),
            ShiftSubPathForward { sub_idx }                     => format!("shift subpath {} forward", sub_idx),
            ShiftSubPathBack { sub_idx }                        => format!("shift subpath {} back", sub_idx),
            ConvertCommand { sub_idx, cmd_idx, command_type }   => format!("convert command {} of subpath {} to {:?}", cmd_idx, sub_idx, command_type),
            AddSubPath(_)                                       => "add subpath".to_string(),
            InsertSubPath(sub_idx, _)                           => format!("insert subpath at {}", sub_idx),
            DeleteSubPath(sub_idx)                              => format!("delete subpath {}", sub_idx)
        }
    }
}
