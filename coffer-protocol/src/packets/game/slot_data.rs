//! Slot data for item display packets.

use coffer_registry::{Item, ItemId};
use serde::Serialize;

/// A slot's contents for display.
///
/// An empty slot carries no id and an amount of zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct SlotData {
    /// The item identity, if the slot is occupied.
    pub id: Option<ItemId>,
    /// The item amount.
    pub amount: u32,
}

impl SlotData {
    /// Creates an empty slot.
    #[must_use]
    pub const fn empty() -> Self {
        Self { id: None, amount: 0 }
    }

    /// Returns whether this slot is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.id.is_none()
    }
}

impl From<Option<Item>> for SlotData {
    fn from(item: Option<Item>) -> Self {
        match item {
            Some(item) => Self {
                id: Some(item.id()),
                amount: item.amount(),
            },
            None => Self::empty(),
        }
    }
}
