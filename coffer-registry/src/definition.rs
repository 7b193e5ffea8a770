//! Static item metadata.

use serde::Deserialize;

use crate::ItemId;

/// The definition every unregistered identity resolves to.
pub static UNKNOWN_ITEM: ItemDefinition = ItemDefinition {
    name: String::new(),
    stackable: false,
    noteable: false,
    noted_id: None,
    unnoted_id: None,
    weight: 0.0,
};

/// Static metadata for an item identity.
///
/// A noted/unnoted pair always points at each other: if `a.noted_id == Some(b)`
/// then `b.unnoted_id == Some(a)`. The registry checks this when loading.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ItemDefinition {
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Whether same-identity items share one slot under the standard stacking policy.
    #[serde(default)]
    pub stackable: bool,
    /// Whether this item can be converted into a note.
    #[serde(default)]
    pub noteable: bool,
    /// The identity of the noted form of this item.
    #[serde(default)]
    pub noted_id: Option<ItemId>,
    /// The identity of the unnoted form, present only on noted items.
    #[serde(default)]
    pub unnoted_id: Option<ItemId>,
    /// Weight in kilograms of one occupied slot.
    #[serde(default)]
    pub weight: f64,
}

impl ItemDefinition {
    /// Returns the noted identity if this item can be withdrawn as a note.
    #[must_use]
    pub fn note_id(&self) -> Option<ItemId> {
        if self.noteable { self.noted_id } else { None }
    }

    /// Returns whether this definition describes a noted item.
    #[must_use]
    pub fn is_note(&self) -> bool {
        self.unnoted_id.is_some()
    }
}

impl Default for ItemDefinition {
    fn default() -> Self {
        UNKNOWN_ITEM.clone()
    }
}
