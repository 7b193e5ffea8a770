//! This module contains all things player-related.
mod connection;

use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

pub use connection::{ClientConnection, QueuedConnection};
use coffer_protocol::{
    ClientboundMessage,
    packets::game::{CConfigState, CGameMessage, CUpdateWeight},
};
use coffer_registry::ItemLookup;
use parking_lot::{Mutex, MutexGuard};

use crate::inventory::{
    Bank, DisplayConfig, DisplayListener, ItemContainer, StackPolicy, WITHDRAW_MODE_STATE_ID,
    WeightListener,
};

/// The number of inventory slots.
pub const INVENTORY_SIZE: usize = 28;
/// The inventory item display.
pub const INVENTORY_DISPLAY_ID: i32 = 3214;

/// Presentation of the inventory container.
#[must_use]
pub fn inventory_display() -> DisplayConfig {
    DisplayConfig::new(
        "You do not have enough space in your inventory.",
        INVENTORY_DISPLAY_ID,
    )
}

/// A struct representing a player.
///
/// The bank and the inventory keep weak back-references to the player. When
/// both are needed, lock the bank before the inventory.
pub struct Player {
    /// The player's name.
    pub username: String,
    /// The player's connection.
    pub connection: Arc<dyn ClientConnection>,

    /// Whether withdrawals should produce noted items.
    withdraw_as_note: AtomicBool,
    /// Total carried weight in kilograms.
    weight: Mutex<f64>,

    inventory: Mutex<ItemContainer>,
    bank: Mutex<Bank>,
}

impl Player {
    /// Creates a new player with the default inventory size.
    pub fn new(
        username: impl Into<String>,
        connection: Arc<dyn ClientConnection>,
        lookup: Arc<dyn ItemLookup>,
    ) -> Arc<Self> {
        Self::with_inventory_size(username, connection, lookup, INVENTORY_SIZE)
    }

    /// Creates a new player with `inventory_size` inventory slots.
    pub fn with_inventory_size(
        username: impl Into<String>,
        connection: Arc<dyn ClientConnection>,
        lookup: Arc<dyn ItemLookup>,
        inventory_size: usize,
    ) -> Arc<Self> {
        let username = username.into();
        Arc::new_cyclic(|player| {
            let mut inventory =
                ItemContainer::new(inventory_size, StackPolicy::Standard, lookup.clone());
            inventory.add_listener(Box::new(WeightListener::new(player.clone())));
            inventory.add_listener(Box::new(DisplayListener::new(
                connection.clone(),
                inventory_display(),
            )));

            Self {
                username,
                bank: Mutex::new(Bank::new(player.clone(), connection.clone(), lookup)),
                connection,
                withdraw_as_note: AtomicBool::new(false),
                weight: Mutex::new(0.0),
                inventory: Mutex::new(inventory),
            }
        })
    }

    /// Locks the player's inventory.
    pub fn inventory(&self) -> MutexGuard<'_, ItemContainer> {
        self.inventory.lock()
    }

    /// Locks the player's bank.
    pub fn bank(&self) -> MutexGuard<'_, Bank> {
        self.bank.lock()
    }

    /// Queues a message to the player's client.
    pub fn queue(&self, message: impl Into<ClientboundMessage>) {
        self.connection.queue(message.into());
    }

    /// Prints `message` in the player's chatbox.
    pub fn send_message(&self, message: impl Into<String>) {
        self.queue(CGameMessage::new(message));
    }

    /// Returns whether withdrawals should produce noted items.
    #[must_use]
    pub fn withdraw_as_note(&self) -> bool {
        self.withdraw_as_note.load(Ordering::Relaxed)
    }

    /// Sets the withdraw mode and mirrors it to the client.
    pub fn set_withdraw_as_note(&self, withdraw_as_note: bool) {
        self.withdraw_as_note.store(withdraw_as_note, Ordering::Relaxed);
        self.queue(CConfigState::new(
            WITHDRAW_MODE_STATE_ID,
            i32::from(withdraw_as_note),
        ));
    }

    /// Returns the carried weight in kilograms.
    #[must_use]
    pub fn weight(&self) -> f64 {
        *self.weight.lock()
    }

    /// Adds `delta` to the carried weight and sends the new total.
    pub fn add_weight(&self, delta: f64) {
        let mut weight = self.weight.lock();
        *weight += delta;
        self.queue(CUpdateWeight::new(*weight));
    }
}

#[cfg(test)]
mod tests {
    use coffer_registry::Item;

    use super::*;
    use crate::test_support::{LOGS, test_player};

    #[test]
    fn withdraw_mode_is_mirrored_to_the_client() {
        let (player, connection) = test_player();
        assert!(!player.withdraw_as_note());

        player.set_withdraw_as_note(true);
        assert!(player.withdraw_as_note());
        assert_eq!(
            connection.drain(),
            vec![ClientboundMessage::from(CConfigState::new(115, 1))]
        );
    }

    #[test]
    fn full_inventory_reports_its_own_message() {
        let (player, connection) = test_player();
        let mut inventory = player.inventory();
        assert!(inventory.add(Item::new(LOGS, 28)));
        assert!(!inventory.add(Item::single(LOGS)));
        connection.drain();

        inventory.fire_capacity_exceeded_event();
        assert_eq!(
            connection.drain(),
            vec![ClientboundMessage::from(CGameMessage::new(
                "You do not have enough space in your inventory."
            ))]
        );
    }

    #[test]
    fn custom_inventory_size() {
        let (player, _) = test_player();
        assert_eq!(player.inventory().size(), INVENTORY_SIZE);

        let connection = Arc::new(QueuedConnection::new());
        let player =
            Player::with_inventory_size("tester", connection, crate::test_support::registry(), 4);
        assert_eq!(player.inventory().size(), 4);
    }
}
