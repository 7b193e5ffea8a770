//! A player's bank.

use std::sync::{Arc, Weak};

use coffer_protocol::packets::game::CInventoryOverlay;
use coffer_registry::{Item, ItemLookup};

use super::{DisplayConfig, DisplayListener, ItemContainer, StackPolicy};
use crate::player::{ClientConnection, Player};

/// The number of bank slots.
pub const BANK_SIZE: usize = 352;
/// The main bank interface.
pub const INTERFACE_ID: i32 = 5292;
/// The interface drawn over the inventory tab while banking.
pub const INVENTORY_OVERLAY_ID: i32 = 5063;
/// The bank item display.
pub const BANK_DISPLAY_ID: i32 = 5382;
/// The inventory item display inside the overlay.
pub const INVENTORY_DISPLAY_ID: i32 = 5064;
/// The client state mirroring the withdraw mode.
pub const WITHDRAW_MODE_STATE_ID: i32 = 115;

/// Sent when a withdraw in note mode finds no noted form.
pub const NOTE_UNAVAILABLE_MESSAGE: &str = "This item cannot be withdrawn as a note.";

/// Presentation of the bank container.
#[must_use]
pub fn bank_display() -> DisplayConfig {
    DisplayConfig::new(
        "You do not have enough bank space to deposit that.",
        BANK_DISPLAY_ID,
    )
}

/// A player's bank: 352 slots where every identity stacks.
///
/// Banked items are always stored unnoted. Each call is one transaction:
/// it either moves the whole (clamped) amount between the bank and the
/// inventory and refreshes both displays, or changes nothing.
pub struct Bank {
    items: ItemContainer,
    player: Weak<Player>,
}

impl Bank {
    /// Creates an empty bank for `player`.
    #[must_use]
    pub fn new(
        player: Weak<Player>,
        connection: Arc<dyn ClientConnection>,
        lookup: Arc<dyn ItemLookup>,
    ) -> Self {
        let mut items = ItemContainer::new(BANK_SIZE, StackPolicy::Always, lookup);
        items.add_listener(Box::new(DisplayListener::new(connection, bank_display())));
        Self { items, player }
    }

    /// Returns the banked items.
    #[must_use]
    pub fn items(&self) -> &ItemContainer {
        &self.items
    }

    /// Returns the banked items mutably.
    #[must_use]
    pub fn items_mut(&mut self) -> &mut ItemContainer {
        &mut self.items
    }

    /// Opens the banking interface.
    pub fn open(&mut self) {
        let Some(player) = self.player.upgrade() else {
            return;
        };

        self.items.shift();

        player.queue(CInventoryOverlay::new(INTERFACE_ID, INVENTORY_OVERLAY_ID));
        player.set_withdraw_as_note(false);

        let inventory = player.inventory();
        self.refresh(&player, &inventory);
    }

    /// Deposits an item from the inventory. Returns `true` if successful.
    pub fn deposit(&mut self, inventory_index: usize, amount: i32) -> bool {
        let Some(player) = self.player.upgrade() else {
            return false;
        };
        let mut inventory = player.inventory();

        let Some(inventory_item) = inventory.get(inventory_index) else {
            return false;
        };
        if amount < 1 {
            return false;
        }

        let existing_amount = inventory.compute_amount_for_id(inventory_item.id());
        let inventory_item = inventory_item.with_amount(amount.unsigned_abs().min(existing_amount));

        let unnoted_id = self.items.lookup().lookup(inventory_item.id()).unnoted_id;
        let deposit_item = inventory_item.with_id(unnoted_id.unwrap_or(inventory_item.id()));

        let remaining = self.items.compute_remaining_size();
        let deposit_index = self.items.compute_index_for_id(deposit_item.id());
        if (remaining < 1 && deposit_index.is_none()) || !self.items.has_room_for(deposit_item) {
            self.items.fire_capacity_exceeded_event();
            return false;
        }

        if !inventory.remove(inventory_item) {
            return false;
        }
        self.items.add(deposit_item);
        log::debug!(
            "{} deposited {inventory_item} as {deposit_item}",
            player.username
        );

        self.refresh(&player, &inventory);
        true
    }

    /// Withdraws an item from the bank. Returns `true` if successful.
    pub fn withdraw(&mut self, bank_index: usize, amount: i32) -> bool {
        let Some(player) = self.player.upgrade() else {
            return false;
        };

        let Some(bank_item) = self.items.get(bank_index) else {
            return false;
        };
        if amount < 1 {
            return false;
        }
        let amount = amount.unsigned_abs().min(bank_item.amount());

        let mut withdraw_id = bank_item.id();
        if player.withdraw_as_note() {
            match self.items.lookup().lookup(bank_item.id()).note_id() {
                Some(noted_id) => withdraw_id = noted_id,
                None => player.send_message(NOTE_UNAVAILABLE_MESSAGE),
            }
        }
        let stackable = self.items.lookup().lookup(withdraw_id).stackable;

        let mut inventory = player.inventory();
        let remaining = inventory.compute_remaining_size();
        if remaining < 1 {
            inventory.fire_capacity_exceeded_event();
            return false;
        }

        // Every unit of a non-stackable item needs its own slot.
        let amount = if stackable {
            amount
        } else {
            amount.min(u32::try_from(remaining).unwrap_or(u32::MAX))
        };
        let bank_item = bank_item.with_amount(amount);
        let withdraw_item = Item::new(withdraw_id, amount);

        if !inventory.has_room_for(withdraw_item) {
            inventory.fire_capacity_exceeded_event();
            return false;
        }
        if !self.items.remove(bank_item) {
            return false;
        }
        inventory.add(withdraw_item);
        log::debug!(
            "{} withdrew {bank_item} as {withdraw_item}",
            player.username
        );

        self.refresh(&player, &inventory);
        true
    }

    /// Sends the bank and inventory contents to the player.
    fn refresh(&self, player: &Player, inventory: &ItemContainer) {
        player.queue(self.items.construct_refresh(BANK_DISPLAY_ID));
        player.queue(inventory.construct_refresh(INVENTORY_DISPLAY_ID));
    }
}
