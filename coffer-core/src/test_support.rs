//! Shared fixtures for unit tests.

use std::sync::Arc;

use coffer_registry::{Item, ItemId, ItemRegistry};
use parking_lot::Mutex;

use crate::{
    inventory::{ContainerListener, ItemContainer},
    player::{Player, QueuedConnection},
};

pub const COINS: ItemId = ItemId(995);
pub const LOGS: ItemId = ItemId(1511);
pub const NOTED_LOGS: ItemId = ItemId(1512);
pub const SHRIMPS: ItemId = ItemId(315);
pub const NOTED_SHRIMPS: ItemId = ItemId(316);
pub const BONES: ItemId = ItemId(526);

const DEFINITIONS: &str = r#"[
    { "id": 995, "name": "Coins", "stackable": true },
    { "id": 1511, "name": "Logs", "noteable": true, "noted_id": 1512, "weight": 2.0 },
    { "id": 1512, "name": "Logs", "stackable": true, "unnoted_id": 1511, "weight": 2.0 },
    { "id": 315, "name": "Shrimps", "noteable": true, "noted_id": 316, "weight": 1.0 },
    { "id": 316, "name": "Shrimps", "stackable": true, "unnoted_id": 315, "weight": 1.0 },
    { "id": 526, "name": "Bones", "weight": 0.5 }
]"#;

pub fn registry() -> Arc<ItemRegistry> {
    Arc::new(ItemRegistry::from_json_str(DEFINITIONS).expect("test definitions are valid"))
}

pub fn test_player() -> (Arc<Player>, Arc<QueuedConnection>) {
    let connection = Arc::new(QueuedConnection::new());
    let player = Player::new("tester", connection.clone(), registry());
    (player, connection)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordedEvent {
    Single(usize, Option<Item>, Option<Item>),
    Bulk(usize, Option<Item>, Option<Item>),
    BulkCompleted,
    CapacityExceeded,
}

pub struct RecordingListener {
    events: Arc<Mutex<Vec<RecordedEvent>>>,
}

impl RecordingListener {
    pub fn new() -> (Self, Arc<Mutex<Vec<RecordedEvent>>>) {
        let events = Arc::new(Mutex::new(Vec::new()));
        (
            Self {
                events: events.clone(),
            },
            events,
        )
    }
}

impl ContainerListener for RecordingListener {
    fn on_single_update(
        &mut self,
        _items: &ItemContainer,
        old_item: Option<Item>,
        new_item: Option<Item>,
        index: usize,
    ) {
        self.events
            .lock()
            .push(RecordedEvent::Single(index, old_item, new_item));
    }

    fn on_bulk_update(
        &mut self,
        _items: &ItemContainer,
        old_item: Option<Item>,
        new_item: Option<Item>,
        index: usize,
    ) {
        self.events
            .lock()
            .push(RecordedEvent::Bulk(index, old_item, new_item));
    }

    fn on_bulk_update_completed(&mut self, _items: &ItemContainer) {
        self.events.lock().push(RecordedEvent::BulkCompleted);
    }

    fn on_capacity_exceeded(&mut self, _items: &ItemContainer) {
        self.events.lock().push(RecordedEvent::CapacityExceeded);
    }
}
