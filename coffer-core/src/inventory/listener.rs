//! Container change notification.

use std::{borrow::Cow, sync::Arc};

use coffer_protocol::packets::game::CGameMessage;
use coffer_registry::Item;

use super::ItemContainer;
use crate::player::ClientConnection;

/// Receives change notifications from an [`ItemContainer`].
///
/// Callbacks run inline with the mutation that caused them and see the
/// container after the write. Every method defaults to doing nothing.
#[allow(unused_variables)]
pub trait ContainerListener: Send + Sync {
    /// A single slot was written outside of a bulk operation.
    fn on_single_update(
        &mut self,
        items: &ItemContainer,
        old_item: Option<Item>,
        new_item: Option<Item>,
        index: usize,
    ) {
    }

    /// One slot changed as part of a bulk operation still in progress.
    fn on_bulk_update(
        &mut self,
        items: &ItemContainer,
        old_item: Option<Item>,
        new_item: Option<Item>,
        index: usize,
    ) {
    }

    /// The bulk operation that produced the preceding bulk updates finished.
    fn on_bulk_update_completed(&mut self, items: &ItemContainer) {}

    /// An item did not fit into the container.
    fn on_capacity_exceeded(&mut self, items: &ItemContainer) {}
}

/// How a container is presented to its owner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayConfig {
    /// Sent when an item does not fit.
    pub capacity_exceeded_message: Cow<'static, str>,
    /// The widget that displays the container's items.
    pub widget_id: i32,
}

impl DisplayConfig {
    /// Creates a display config.
    #[must_use]
    pub fn new(capacity_exceeded_message: impl Into<Cow<'static, str>>, widget_id: i32) -> Self {
        Self {
            capacity_exceeded_message: capacity_exceeded_message.into(),
            widget_id,
        }
    }
}

/// Keeps the owner's display of a container current.
///
/// Every single update and every completed bulk update queues a refresh of the
/// configured widget. Capacity failures queue the configured message.
pub struct DisplayListener {
    connection: Arc<dyn ClientConnection>,
    config: DisplayConfig,
}

impl DisplayListener {
    /// Creates a listener sending through `connection`.
    #[must_use]
    pub fn new(connection: Arc<dyn ClientConnection>, config: DisplayConfig) -> Self {
        Self { connection, config }
    }
}

impl ContainerListener for DisplayListener {
    fn on_single_update(
        &mut self,
        items: &ItemContainer,
        _old_item: Option<Item>,
        _new_item: Option<Item>,
        _index: usize,
    ) {
        self.connection
            .queue(items.construct_refresh(self.config.widget_id).into());
    }

    fn on_bulk_update_completed(&mut self, items: &ItemContainer) {
        self.connection
            .queue(items.construct_refresh(self.config.widget_id).into());
    }

    fn on_capacity_exceeded(&mut self, _items: &ItemContainer) {
        self.connection.queue(
            CGameMessage::new(self.config.capacity_exceeded_message.clone()).into(),
        );
    }
}
