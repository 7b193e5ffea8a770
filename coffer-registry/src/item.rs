//! Item identities and item values.

use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

/// Item ID - the raw identity an item definition is registered under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub u32);

impl Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// An immutable item value: an identity and an amount of at least one.
///
/// An empty slot is never represented by an `Item`; containers use `Option<Item>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Item {
    id: ItemId,
    amount: u32,
}

impl Item {
    /// Creates a new item. An amount of zero is clamped up to one.
    #[must_use]
    pub const fn new(id: ItemId, amount: u32) -> Self {
        Self {
            id,
            amount: if amount == 0 { 1 } else { amount },
        }
    }

    /// Creates a single unit of `id`.
    #[must_use]
    pub const fn single(id: ItemId) -> Self {
        Self::new(id, 1)
    }

    /// Returns the identity of this item.
    #[must_use]
    pub const fn id(&self) -> ItemId {
        self.id
    }

    /// Returns the amount of this item.
    #[must_use]
    pub const fn amount(&self) -> u32 {
        self.amount
    }

    /// Returns a copy of this item with a different amount.
    #[must_use]
    pub const fn with_amount(self, amount: u32) -> Self {
        Self::new(self.id, amount)
    }

    /// Returns a copy of this item with a different identity.
    #[must_use]
    pub const fn with_id(self, id: ItemId) -> Self {
        Self::new(id, self.amount)
    }
}

impl Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} x{}", self.id, self.amount)
    }
}
