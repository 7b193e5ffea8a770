//! This module contains the `ClientConnection` trait that abstracts the presentation layer.
//!
//! The trait is object-safe so a player can hold `dyn ClientConnection` for both a
//! transport-backed connection and the in-memory [`QueuedConnection`].

use coffer_protocol::ClientboundMessage;
use parking_lot::Mutex;

/// An object-safe sink for messages addressed to one player.
pub trait ClientConnection: Send + Sync {
    /// Queues a message for delivery.
    fn queue(&self, message: ClientboundMessage);
}

/// A connection that keeps every queued message in memory until drained.
#[derive(Debug, Default)]
pub struct QueuedConnection {
    queue: Mutex<Vec<ClientboundMessage>>,
}

impl QueuedConnection {
    /// Creates an empty connection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes and returns every queued message in the order it was queued.
    pub fn drain(&self) -> Vec<ClientboundMessage> {
        std::mem::take(&mut *self.queue.lock())
    }

    /// Returns the number of queued messages.
    #[must_use]
    pub fn len(&self) -> usize {
        self.queue.lock().len()
    }

    /// Returns true if nothing is queued.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.queue.lock().is_empty()
    }
}

impl ClientConnection for QueuedConnection {
    fn queue(&self, message: ClientboundMessage) {
        self.queue.lock().push(message);
    }
}
