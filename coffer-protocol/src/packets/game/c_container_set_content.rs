//! Container set content packet.

use serde::Serialize;

use super::slot_data::SlotData;

/// Sends the entire contents of an item display to the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CContainerSetContent {
    /// The widget displaying the items.
    pub widget_id: i32,
    /// All slot contents, in slot order.
    pub items: Vec<SlotData>,
}

impl CContainerSetContent {
    /// Creates a new container set content packet.
    #[must_use]
    pub fn new(widget_id: i32, items: Vec<SlotData>) -> Self {
        Self { widget_id, items }
    }

    /// Returns the number of occupied slots in this payload.
    #[must_use]
    pub fn occupied(&self) -> usize {
        self.items.iter().filter(|slot| !slot.is_empty()).count()
    }
}
