//! Game message packet.

use serde::Serialize;

/// Prints a line of text in the player's chatbox.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CGameMessage {
    /// The text to print.
    pub message: String,
}

impl CGameMessage {
    /// Creates a new game message packet.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
