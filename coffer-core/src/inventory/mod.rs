//! This module contains the inventory system.

mod bank;
mod container;
mod listener;
mod weight;

pub use bank::{
    BANK_DISPLAY_ID, BANK_SIZE, Bank, INTERFACE_ID, INVENTORY_DISPLAY_ID, INVENTORY_OVERLAY_ID,
    NOTE_UNAVAILABLE_MESSAGE, WITHDRAW_MODE_STATE_ID, bank_display,
};
pub use container::{ItemContainer, StackPolicy};
pub use listener::{ContainerListener, DisplayConfig, DisplayListener};
pub use weight::{WeightListener, compute_weight, compute_weight_difference};
