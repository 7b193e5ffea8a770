//! Replays client requests against one player's bank and inventory.

use std::{fs, path::Path, sync::Arc};

use coffer_core::player::{Player, QueuedConnection};
use coffer_protocol::ClientboundMessage;
use coffer_registry::{Item, ItemId, ItemLookup};
use serde::Deserialize;

/// A request issued by the player's client.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "request")]
pub enum Request {
    /// Puts items straight into the inventory.
    Give {
        /// The item identity.
        id: ItemId,
        /// How many to give.
        amount: u32,
    },
    /// Opens the bank.
    Open,
    /// Moves items from an inventory slot into the bank.
    Deposit {
        /// The inventory slot.
        slot: usize,
        /// The requested amount.
        amount: i32,
    },
    /// Moves items from a bank slot into the inventory.
    Withdraw {
        /// The bank slot.
        slot: usize,
        /// The requested amount.
        amount: i32,
    },
    /// Switches between withdrawing items and notes.
    WithdrawMode {
        /// Whether to withdraw notes.
        noted: bool,
    },
}

/// Totals of a replayed session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    /// Requests that succeeded.
    pub accepted: usize,
    /// Requests that were rejected.
    pub rejected: usize,
    /// Messages queued to the client.
    pub messages: usize,
}

/// Reads a JSON5 list of requests.
pub fn load_requests(path: impl AsRef<Path>) -> anyhow::Result<Vec<Request>> {
    let requests = fs::read_to_string(path)?;
    Ok(serde_json5::from_str(&requests)?)
}

/// One player and the connection their messages are queued on.
pub struct Session {
    player: Arc<Player>,
    connection: Arc<QueuedConnection>,
}

impl Session {
    /// Creates a session for a fresh player.
    pub fn new(username: &str, lookup: Arc<dyn ItemLookup>, inventory_size: usize) -> Self {
        let connection = Arc::new(QueuedConnection::new());
        let player = Player::with_inventory_size(username, connection.clone(), lookup, inventory_size);
        Self { player, connection }
    }

    /// Returns the session's player.
    #[must_use]
    pub fn player(&self) -> &Arc<Player> {
        &self.player
    }

    /// Handles one request. Returns `true` if it succeeded.
    pub fn handle(&self, request: &Request) -> bool {
        match *request {
            Request::Give { id, amount } => amount > 0 && self.player.inventory().add(Item::new(id, amount)),
            Request::Open => {
                self.player.bank().open();
                true
            }
            Request::Deposit { slot, amount } => self.player.bank().deposit(slot, amount),
            Request::Withdraw { slot, amount } => self.player.bank().withdraw(slot, amount),
            Request::WithdrawMode { noted } => {
                self.player.set_withdraw_as_note(noted);
                true
            }
        }
    }

    /// Removes every message queued since the last drain.
    pub fn drain_messages(&self) -> Vec<ClientboundMessage> {
        self.connection.drain()
    }

    /// Handles every request in order, logging results and outgoing messages.
    pub fn replay(&self, requests: &[Request]) -> SessionSummary {
        let mut summary = SessionSummary::default();
        for request in requests {
            if self.handle(request) {
                summary.accepted += 1;
                tracing::info!("{request:?} accepted");
            } else {
                summary.rejected += 1;
                tracing::info!("{request:?} rejected");
            }

            for message in self.drain_messages() {
                summary.messages += 1;
                match serde_json::to_string(&message) {
                    Ok(json) => tracing::debug!("-> {json}"),
                    Err(e) => tracing::warn!("Failed to encode {message:?}: {e}"),
                }
            }
        }
        summary
    }
}
