//! Fixed-size slotted item storage.

use std::{mem, sync::Arc};

use coffer_protocol::packets::game::{CContainerSetContent, SlotData};
use coffer_registry::{Item, ItemId, ItemLookup};
use smallvec::SmallVec;

use super::ContainerListener;

/// Most operations touch a handful of slots.
type SlotWrites = SmallVec<[(usize, Option<Item>); 4]>;

/// Decides when two items of the same identity share one slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StackPolicy {
    /// Every unit takes its own slot.
    Never,
    /// Items merge only when their definition is stackable.
    Standard,
    /// Items of the same identity always merge.
    Always,
}

#[derive(Debug, Clone, Copy)]
struct SlotChange {
    index: usize,
    old: Option<Item>,
    new: Option<Item>,
}

/// A fixed number of optional item slots with a stacking policy.
///
/// Every write is reported to the attached listeners. [`ItemContainer::set`] is a
/// single update; [`add`](ItemContainer::add), [`remove`](ItemContainer::remove),
/// [`shift`](ItemContainer::shift) and [`clear`](ItemContainer::clear) are bulk
/// updates: one bulk callback per changed slot, then one completion callback.
pub struct ItemContainer {
    items: Box<[Option<Item>]>,
    policy: StackPolicy,
    lookup: Arc<dyn ItemLookup>,
    listeners: Vec<Box<dyn ContainerListener>>,
}

impl ItemContainer {
    /// Creates an empty container with `capacity` slots.
    #[must_use]
    pub fn new(capacity: usize, policy: StackPolicy, lookup: Arc<dyn ItemLookup>) -> Self {
        Self {
            items: vec![None; capacity].into_boxed_slice(),
            policy,
            lookup,
            listeners: Vec::new(),
        }
    }

    /// Attaches a listener. Listeners are notified in the order they were added.
    pub fn add_listener(&mut self, listener: Box<dyn ContainerListener>) {
        self.listeners.push(listener);
    }

    /// Returns the number of slots.
    #[must_use]
    pub fn size(&self) -> usize {
        self.items.len()
    }

    /// Returns the stacking policy.
    #[must_use]
    pub fn policy(&self) -> StackPolicy {
        self.policy
    }

    /// Returns the definitions this container resolves items against.
    #[must_use]
    pub fn lookup(&self) -> &dyn ItemLookup {
        self.lookup.as_ref()
    }

    /// Returns all slots in order.
    #[must_use]
    pub fn slots(&self) -> &[Option<Item>] {
        &self.items
    }

    /// Iterates over the occupied slots as `(index, item)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (usize, Item)> + '_ {
        self.items
            .iter()
            .enumerate()
            .filter_map(|(index, item)| item.map(|item| (index, item)))
    }

    /// Returns the item in `index`, or `None` if the slot is empty or out of range.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<Item> {
        self.items.get(index).copied().flatten()
    }

    /// Returns the number of occupied slots.
    #[must_use]
    pub fn occupied(&self) -> usize {
        self.items.iter().filter(|item| item.is_some()).count()
    }

    /// Returns whether any slot holds `id`.
    #[must_use]
    pub fn contains(&self, id: ItemId) -> bool {
        self.items.iter().flatten().any(|item| item.id() == id)
    }

    /// Returns whether items of `id` merge into one slot in this container.
    #[must_use]
    pub fn stacks(&self, id: ItemId) -> bool {
        match self.policy {
            StackPolicy::Never => false,
            StackPolicy::Standard => self.lookup.lookup(id).stackable,
            StackPolicy::Always => true,
        }
    }

    /// Sums the amount of `id` across every slot, saturating at `u32::MAX`.
    #[must_use]
    pub fn compute_amount_for_id(&self, id: ItemId) -> u32 {
        self.items
            .iter()
            .flatten()
            .filter(|item| item.id() == id)
            .fold(0, |total, item| total.saturating_add(item.amount()))
    }

    /// Returns the first slot holding `id` when a stack of `id` can absorb more.
    ///
    /// Always `None` for identities that do not stack in this container.
    #[must_use]
    pub fn compute_index_for_id(&self, id: ItemId) -> Option<usize> {
        if !self.stacks(id) {
            return None;
        }
        self.position_of(id)
    }

    /// Returns the number of empty slots.
    #[must_use]
    pub fn compute_remaining_size(&self) -> usize {
        self.items.iter().filter(|item| item.is_none()).count()
    }

    /// Returns whether [`ItemContainer::add`] would accept `item`.
    #[must_use]
    pub fn has_room_for(&self, item: Item) -> bool {
        self.plan_add(item).is_some()
    }

    /// Replaces the item in `index` and fires a single update.
    ///
    /// # Panics
    /// Panics if `index` is out of range.
    pub fn set(&mut self, index: usize, item: Option<Item>) {
        let old = mem::replace(&mut self.items[index], item);
        self.notify(|listener, items| listener.on_single_update(items, old, item, index));
    }

    /// Adds `item`, merging it into an existing stack where the policy allows.
    ///
    /// Either the whole item is stored or nothing changes: returns `false` when
    /// there are not enough free slots or a merged stack would overflow.
    pub fn add(&mut self, item: Item) -> bool {
        match self.plan_add(item) {
            Some(writes) => {
                self.commit(writes);
                true
            }
            None => false,
        }
    }

    /// Removes `item.amount()` units of `item.id()`, draining slots front to back.
    ///
    /// Returns `false` without changing anything if fewer units are present.
    pub fn remove(&mut self, item: Item) -> bool {
        if self.compute_amount_for_id(item.id()) < item.amount() {
            return false;
        }

        let mut remaining = item.amount();
        let mut writes = SlotWrites::new();
        for (index, slot) in self.iter() {
            if remaining == 0 {
                break;
            }
            if slot.id() != item.id() {
                continue;
            }
            let taken = slot.amount().min(remaining);
            remaining -= taken;
            let left = slot.amount() - taken;
            writes.push((index, (left > 0).then(|| slot.with_amount(left))));
        }
        self.commit(writes);
        true
    }

    /// Moves every item towards the front, closing gaps and keeping their order.
    pub fn shift(&mut self) {
        let occupied: Vec<Item> = self.items.iter().flatten().copied().collect();
        let writes = (0..self.items.len())
            .map(|index| (index, occupied.get(index).copied()))
            .collect();
        self.commit(writes);
    }

    /// Empties every slot.
    pub fn clear(&mut self) {
        let writes = (0..self.items.len()).map(|index| (index, None)).collect();
        self.commit(writes);
    }

    /// Tells the listeners that an item did not fit.
    pub fn fire_capacity_exceeded_event(&mut self) {
        self.notify(|listener, items| listener.on_capacity_exceeded(items));
    }

    /// Builds a display update carrying every slot of this container.
    #[must_use]
    pub fn construct_refresh(&self, widget_id: i32) -> CContainerSetContent {
        CContainerSetContent::new(
            widget_id,
            self.items.iter().copied().map(SlotData::from).collect(),
        )
    }

    fn position_of(&self, id: ItemId) -> Option<usize> {
        self.items
            .iter()
            .position(|item| item.is_some_and(|item| item.id() == id))
    }

    fn plan_add(&self, item: Item) -> Option<SlotWrites> {
        let mut writes = SlotWrites::new();
        if self.stacks(item.id()) {
            match self.position_of(item.id()) {
                Some(index) => {
                    let existing = self.items[index]?;
                    let amount = existing.amount().checked_add(item.amount())?;
                    writes.push((index, Some(existing.with_amount(amount))));
                }
                None => {
                    let index = self.items.iter().position(Option::is_none)?;
                    writes.push((index, Some(item)));
                }
            }
        } else {
            let needed = item.amount() as usize;
            if self.compute_remaining_size() < needed {
                return None;
            }
            let single = Some(item.with_amount(1));
            writes.extend(
                self.items
                    .iter()
                    .enumerate()
                    .filter(|(_, slot)| slot.is_none())
                    .take(needed)
                    .map(|(index, _)| (index, single)),
            );
        }
        Some(writes)
    }

    fn commit(&mut self, writes: SlotWrites) {
        let mut changes: SmallVec<[SlotChange; 4]> = SmallVec::new();
        for (index, new) in writes {
            let old = mem::replace(&mut self.items[index], new);
            if old != new {
                changes.push(SlotChange { index, old, new });
            }
        }
        if changes.is_empty() {
            return;
        }

        self.notify(|listener, items| {
            for change in &changes {
                listener.on_bulk_update(items, change.old, change.new, change.index);
            }
        });
        self.notify(|listener, items| listener.on_bulk_update_completed(items));
    }

    fn notify(&mut self, mut event: impl FnMut(&mut dyn ContainerListener, &Self)) {
        let mut listeners = mem::take(&mut self.listeners);
        for listener in &mut listeners {
            event(listener.as_mut(), self);
        }
        // Listeners attached from inside a callback go after the existing ones.
        listeners.append(&mut self.listeners);
        self.listeners = listeners;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{
        BONES, COINS, LOGS, NOTED_LOGS, RecordedEvent, RecordingListener, registry,
    };

    fn container(capacity: usize, policy: StackPolicy) -> ItemContainer {
        ItemContainer::new(capacity, policy, registry())
    }

    #[test]
    fn standard_policy_stacks_only_stackable_items() {
        let mut items = container(4, StackPolicy::Standard);
        assert!(items.add(Item::new(COINS, 100)));
        assert!(items.add(Item::new(COINS, 50)));
        assert_eq!(items.occupied(), 1);
        assert_eq!(items.get(0), Some(Item::new(COINS, 150)));

        assert!(items.add(Item::new(LOGS, 2)));
        assert_eq!(items.occupied(), 3);
        assert_eq!(items.get(1), Some(Item::single(LOGS)));
        assert_eq!(items.get(2), Some(Item::single(LOGS)));
        assert_eq!(items.compute_amount_for_id(LOGS), 2);
    }

    #[test]
    fn always_policy_stacks_everything() {
        let mut items = container(2, StackPolicy::Always);
        assert!(items.add(Item::new(LOGS, 3)));
        assert!(items.add(Item::new(LOGS, 4)));
        assert_eq!(items.slots(), &[Some(Item::new(LOGS, 7)), None]);
        assert_eq!(items.compute_index_for_id(LOGS), Some(0));
    }

    #[test]
    fn never_policy_splits_stackables() {
        let mut items = container(3, StackPolicy::Never);
        assert!(items.add(Item::new(COINS, 2)));
        assert_eq!(items.occupied(), 2);
        assert_eq!(items.compute_index_for_id(COINS), None);
        assert!(!items.add(Item::new(COINS, 2)));
        assert_eq!(items.occupied(), 2);
    }

    #[test]
    fn add_is_all_or_nothing() {
        let mut items = container(2, StackPolicy::Standard);
        assert!(!items.add(Item::new(LOGS, 3)));
        assert_eq!(items.occupied(), 0);

        assert!(items.add(Item::new(COINS, u32::MAX)));
        assert!(!items.has_room_for(Item::single(COINS)));
        assert!(!items.add(Item::single(COINS)));
        assert_eq!(items.get(0), Some(Item::new(COINS, u32::MAX)));
    }

    #[test]
    fn remove_drains_front_to_back() {
        let mut items = container(4, StackPolicy::Standard);
        items.set(0, Some(Item::new(NOTED_LOGS, 3)));
        items.set(2, Some(Item::new(NOTED_LOGS, 5)));

        assert!(!items.remove(Item::new(NOTED_LOGS, 9)));
        assert_eq!(items.compute_amount_for_id(NOTED_LOGS), 8);

        assert!(items.remove(Item::new(NOTED_LOGS, 4)));
        assert_eq!(items.slots(), &[None, None, Some(Item::new(NOTED_LOGS, 4)), None]);
    }

    #[test]
    fn shift_closes_gaps_in_order() {
        let mut items = container(5, StackPolicy::Always);
        items.set(1, Some(Item::single(LOGS)));
        items.set(3, Some(Item::single(BONES)));
        items.set(4, Some(Item::new(COINS, 9)));

        items.shift();
        assert_eq!(
            items.slots(),
            &[
                Some(Item::single(LOGS)),
                Some(Item::single(BONES)),
                Some(Item::new(COINS, 9)),
                None,
                None
            ]
        );
        assert_eq!(items.compute_remaining_size(), 2);
    }

    #[test]
    fn get_out_of_range_is_empty() {
        let items = container(1, StackPolicy::Standard);
        assert_eq!(items.get(1), None);
        assert_eq!(items.get(usize::MAX), None);
    }

    #[test]
    fn bulk_operations_fire_one_completion() {
        let mut items = container(4, StackPolicy::Standard);
        let (listener, events) = RecordingListener::new();
        items.add_listener(Box::new(listener));

        assert!(items.add(Item::new(LOGS, 3)));
        assert_eq!(
            *events.lock(),
            vec![
                RecordedEvent::Bulk(0, None, Some(Item::single(LOGS))),
                RecordedEvent::Bulk(1, None, Some(Item::single(LOGS))),
                RecordedEvent::Bulk(2, None, Some(Item::single(LOGS))),
                RecordedEvent::BulkCompleted,
            ]
        );
    }

    #[test]
    fn single_and_capacity_events_are_forwarded() {
        let mut items = container(1, StackPolicy::Standard);
        let (listener, events) = RecordingListener::new();
        items.add_listener(Box::new(listener));

        items.set(0, Some(Item::single(BONES)));
        items.fire_capacity_exceeded_event();
        assert_eq!(
            *events.lock(),
            vec![
                RecordedEvent::Single(0, None, Some(Item::single(BONES))),
                RecordedEvent::CapacityExceeded,
            ]
        );
    }

    #[test]
    fn failed_and_unchanged_operations_are_silent() {
        let mut items = container(2, StackPolicy::Standard);
        items.set(0, Some(Item::single(BONES)));
        let (listener, events) = RecordingListener::new();
        items.add_listener(Box::new(listener));

        assert!(!items.remove(Item::single(LOGS)));
        assert!(!items.add(Item::new(LOGS, 2)));
        items.shift();
        assert!(events.lock().is_empty());
    }

    #[test]
    fn refresh_carries_every_slot() {
        let mut items = container(3, StackPolicy::Standard);
        items.set(1, Some(Item::new(COINS, 7)));
        let refresh = items.construct_refresh(5382);
        assert_eq!(refresh.widget_id, 5382);
        assert_eq!(refresh.items.len(), 3);
        assert_eq!(refresh.occupied(), 1);
        assert_eq!(refresh.items[1], SlotData::from(Some(Item::new(COINS, 7))));
    }
}
