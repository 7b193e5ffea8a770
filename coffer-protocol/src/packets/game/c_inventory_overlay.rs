//! Inventory overlay packet.

use serde::Serialize;

/// Opens an interface with another interface drawn over the inventory tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CInventoryOverlay {
    /// The main interface.
    pub interface_id: i32,
    /// The interface replacing the inventory tab.
    pub overlay_id: i32,
}

impl CInventoryOverlay {
    /// Creates a new inventory overlay packet.
    #[must_use]
    pub const fn new(interface_id: i32, overlay_id: i32) -> Self {
        Self {
            interface_id,
            overlay_id,
        }
    }
}
