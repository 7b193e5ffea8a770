//! Carried weight tracking.

use std::sync::Weak;

use coffer_registry::{Item, ItemLookup};

use super::{ContainerListener, ItemContainer};
use crate::player::Player;

/// Returns the weight an optional slot contributes.
///
/// Only presence matters: a stack of fifty weighs the same as a single unit.
#[must_use]
pub fn compute_weight(lookup: &dyn ItemLookup, item: Option<Item>) -> f64 {
    item.map_or(0.0, |item| lookup.lookup(item.id()).weight)
}

/// Returns the weight change of a slot going from `old_item` to `new_item`.
#[must_use]
pub fn compute_weight_difference(
    lookup: &dyn ItemLookup,
    old_item: Option<Item>,
    new_item: Option<Item>,
) -> f64 {
    compute_weight(lookup, new_item) - compute_weight(lookup, old_item)
}

/// Keeps a player's carried weight in step with a container.
///
/// Single updates are applied immediately. Bulk updates are buffered and
/// applied as one sum when the bulk operation completes, so the player never
/// observes an intermediate weight.
pub struct WeightListener {
    player: Weak<Player>,
    /// Deltas of the bulk operation in progress. Only non-empty between its
    /// first `on_bulk_update` and its `on_bulk_update_completed`.
    pending: Vec<f64>,
}

impl WeightListener {
    /// Creates a listener updating `player`.
    #[must_use]
    pub fn new(player: Weak<Player>) -> Self {
        Self {
            player,
            pending: Vec::new(),
        }
    }

    /// Returns whether bulk deltas are waiting for their completion callback.
    #[must_use]
    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }
}

impl ContainerListener for WeightListener {
    fn on_single_update(
        &mut self,
        items: &ItemContainer,
        old_item: Option<Item>,
        new_item: Option<Item>,
        _index: usize,
    ) {
        if let Some(player) = self.player.upgrade() {
            player.add_weight(compute_weight_difference(items.lookup(), old_item, new_item));
        }
    }

    fn on_bulk_update(
        &mut self,
        items: &ItemContainer,
        old_item: Option<Item>,
        new_item: Option<Item>,
        _index: usize,
    ) {
        self.pending
            .push(compute_weight_difference(items.lookup(), old_item, new_item));
    }

    fn on_bulk_update_completed(&mut self, _items: &ItemContainer) {
        let total: f64 = self.pending.drain(..).sum();
        if let Some(player) = self.player.upgrade() {
            player.add_weight(total);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use coffer_protocol::{ClientboundMessage, packets::game::CUpdateWeight};
    use coffer_registry::Item;

    use super::*;
    use crate::{
        inventory::{ItemContainer, StackPolicy},
        player::QueuedConnection,
        test_support::{BONES, COINS, LOGS, registry, test_player},
    };

    fn assert_weight(player: &Player, expected: f64) {
        assert!(
            (player.weight() - expected).abs() < 1e-9,
            "weight was {}, expected {expected}",
            player.weight()
        );
    }

    #[test]
    fn weight_ignores_amount() {
        let lookup = registry();
        let diff = compute_weight_difference(
            lookup.as_ref(),
            Some(Item::new(COINS, 10)),
            Some(Item::new(COINS, 60)),
        );
        assert!(diff.abs() < f64::EPSILON);
        assert!((compute_weight(lookup.as_ref(), Some(Item::new(LOGS, 50))) - 2.0).abs() < 1e-9);
        assert!(compute_weight(lookup.as_ref(), None).abs() < f64::EPSILON);
    }

    #[test]
    fn single_updates_apply_immediately() {
        let (player, _connection) = test_player();
        let mut inventory = player.inventory();

        inventory.set(0, Some(Item::single(LOGS)));
        assert_weight(&player, 2.0);
        inventory.set(0, Some(Item::single(BONES)));
        assert_weight(&player, 0.5);
        inventory.set(0, None);
        assert_weight(&player, 0.0);
    }

    #[test]
    fn bulk_updates_apply_once() {
        let (player, connection) = test_player();
        connection.drain();

        assert!(player.inventory().add(Item::new(LOGS, 4)));
        assert_weight(&player, 8.0);

        let updates: Vec<_> = connection
            .drain()
            .into_iter()
            .filter(|message| matches!(message, ClientboundMessage::UpdateWeight(_)))
            .collect();
        assert_eq!(
            updates,
            vec![ClientboundMessage::from(CUpdateWeight::new(8.0))]
        );
    }

    #[test]
    fn single_and_bulk_paths_agree() {
        let (single, _) = test_player();
        {
            let mut inventory = single.inventory();
            inventory.set(0, Some(Item::single(LOGS)));
            inventory.set(1, Some(Item::single(LOGS)));
            inventory.set(2, Some(Item::single(LOGS)));
            inventory.set(1, None);
        }

        let (bulk, _) = test_player();
        {
            let mut inventory = bulk.inventory();
            assert!(inventory.add(Item::new(LOGS, 3)));
            assert!(inventory.remove(Item::single(LOGS)));
        }

        assert_weight(&single, 4.0);
        assert_weight(&bulk, single.weight());
    }

    #[test]
    fn pending_deltas_are_cleared_after_completion() {
        let (player, _) = test_player();
        let mut listener = WeightListener::new(Arc::downgrade(&player));
        let items = ItemContainer::new(2, StackPolicy::Standard, registry());

        listener.on_bulk_update(&items, None, Some(Item::single(LOGS)), 0);
        listener.on_bulk_update(&items, None, Some(Item::single(BONES)), 1);
        assert!(listener.has_pending());
        assert_weight(&player, 0.0);

        listener.on_bulk_update_completed(&items);
        assert!(!listener.has_pending());
        assert_weight(&player, 2.5);

        listener.on_bulk_update_completed(&items);
        assert_weight(&player, 2.5);
    }

    #[test]
    fn dropped_player_is_ignored() {
        let connection = Arc::new(QueuedConnection::new());
        let player = Player::new("ghost", connection, registry());
        let mut listener = WeightListener::new(Arc::downgrade(&player));
        drop(player);

        let items = ItemContainer::new(1, StackPolicy::Standard, registry());
        listener.on_single_update(&items, None, Some(Item::single(LOGS)), 0);
        listener.on_bulk_update(&items, None, Some(Item::single(LOGS)), 0);
        listener.on_bulk_update_completed(&items);
        assert!(!listener.has_pending());
    }
}
