use serde::{Serialize, Deserialize};
use uuid::Uuid;

use std::fmt;

///
/// Identity token for a command
///
/// Every command created by parsing or construction gets a new ID. Edits that keep a command's
/// geometry keep its ID, and splitting a command gives both halves the ID of the command that
/// was split, which is how fragments of the same original command can be found again later on.
///
#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CommandId(Uuid);

impl CommandId {
    ///
    /// Creates a unique new command ID
    ///
    pub fn new() -> CommandId {
        CommandId(Uuid::new_v4())
    }
}

impl Default for CommandId {
    fn default() -> CommandId {
        CommandId::new()
    }
}

impl fmt::Display for CommandId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
