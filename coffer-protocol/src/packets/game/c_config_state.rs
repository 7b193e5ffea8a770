//! Config state packet.

use serde::Serialize;

/// Sets a client-side state variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CConfigState {
    /// The state variable.
    pub id: i32,
    /// Its new value.
    pub value: i32,
}

impl CConfigState {
    /// Creates a new config state packet.
    #[must_use]
    pub const fn new(id: i32, value: i32) -> Self {
        Self { id, value }
    }
}
