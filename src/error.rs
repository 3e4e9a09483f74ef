use serde::{Serialize, Deserialize};

use std::fmt;
use std::error::Error;

///
/// Errors that can result from parsing, querying or editing a path
///
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum PathError {
    /// The commands do not form a valid path (a subpath doesn't start with a move, commands are not
    /// joined up, an edit parameter is out of range, or an operation needs a closed subpath)
    StructuralError(String),

    /// A subpath or command index does not exist (cmd_idx is None for subpath lookups)
    IndexError { sub_idx: usize, cmd_idx: Option<usize> },

    /// A single-use object was used after it was finished with
    UsageError(String),

    /// A path string could not be parsed
    ParseError(String),

    /// A set of options could not be loaded
    ConfigurationError(String)
}

impl PathError {
    ///
    /// Creates an index error for a subpath
    ///
    pub fn no_sub_path(sub_idx: usize) -> PathError {
        PathError::IndexError { sub_idx, cmd_idx: None }
    }

    ///
    /// Creates an index error for a command
    ///
    pub fn no_command(sub_idx: usize, cmd_idx: usize) -> PathError {
        PathError::IndexError { sub_idx, cmd_idx: Some(cmd_idx) }
    }

    ///
    /// Describes this error as the failure of a staged edit
    ///
    /// Edits are checked when a path is built, so an edit that refers to a subpath or command that doesn't exist
    /// is reported as a structural error rather than an index error.
    ///
    pub fn for_edit(self, edit_description: &str) -> PathError {
        use self::PathError::*;

        match self {
            StructuralError(msg)    => StructuralError(format!("{}: {}", edit_description, msg)),
            IndexError { .. }       => StructuralError(format!("{}: {}", edit_description, self)),
            UsageError(msg)         => UsageError(format!("{}: {}", edit_description, msg)),
            ParseError(msg)         => ParseError(format!("{}: {}", edit_description, msg)),
            ConfigurationError(msg) => ConfigurationError(format!("{}: {}", edit_description, msg))
        }
    }
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use self::PathError::*;

        match self {
            StructuralError(msg)                            => write!(f, "invalid path structure: {}", msg),
            IndexError { sub_idx, cmd_idx: None }           => write!(f, "no subpath at index {}", sub_idx),
            IndexError { sub_idx, cmd_idx: Some(cmd_idx) }  => write!(f, "no command at index {} in subpath {}", cmd_idx, sub_idx),
            UsageError(msg)                                 => write!(f, "invalid use: {}", msg),
            ParseError(msg)                                 => write!(f, "could not parse path: {}", msg),
            ConfigurationError(msg)                         => write!(f, "invalid options: {}", msg)
        }
    }
}

impl Error for PathError { }

impl From<svgtypes::Error> for PathError {
    fn from(err: svgtypes::Error) -> PathError {
        PathError::ParseError(err.to_string())
    }
}

impl From<serde_json::Error> for PathError {
    fn from(err: serde_json::Error) -> PathError {
        PathError::ConfigurationError(err.to_string())
    }
}
