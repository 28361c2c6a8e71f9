//! Screen State
//!
//! Lifecycle shared by the list screens:
//! `Idle -> Loading -> {Loaded, Failed}` and `Loaded -> mutating -> Loaded`.
//! Local entries only change after the server confirms a mutation.

use crate::list_ops::{self, Keyed};
use crate::models::{Event, Item};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadPhase {
    #[default]
    Idle,
    Loading,
    Loaded,
    Failed(String),
}

/// Server-confirmed change to apply to the local copy
#[derive(Debug, Clone, PartialEq)]
pub enum Change<T> {
    Append(T),
    Replace(T),
    Remove(u32),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ListState<T> {
    load: LoadPhase,
    mutating: bool,
    entries: Vec<T>,
}

impl<T> Default for ListState<T> {
    fn default() -> Self {
        Self {
            load: LoadPhase::Idle,
            mutating: false,
            entries: Vec::new(),
        }
    }
}

impl<T: Keyed + Clone> ListState<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> &LoadPhase {
        &self.load
    }

    pub fn entries(&self) -> &[T] {
        &self.entries
    }

    pub fn is_loading(&self) -> bool {
        self.load == LoadPhase::Loading
    }

    pub fn is_mutating(&self) -> bool {
        self.mutating
    }

    pub fn begin_load(&mut self) {
        self.load = LoadPhase::Loading;
    }

    /// Loaded replaces the entries; a failure keeps whatever was there
    pub fn finish_load(&mut self, result: Result<Vec<T>, String>) {
        match result {
            Ok(entries) => {
                self.entries = entries;
                self.load = LoadPhase::Loaded;
            }
            Err(message) => self.load = LoadPhase::Failed(message),
        }
    }

    /// Claim the single mutation slot. False while loading or already mutating.
    pub fn begin_mutation(&mut self) -> bool {
        if self.is_loading() || self.mutating {
            return false;
        }
        self.mutating = true;
        true
    }

    pub fn commit(&mut self, change: Change<T>) {
        match change {
            Change::Append(entry) => list_ops::append(&mut self.entries, entry),
            Change::Replace(entry) => {
                list_ops::replace_by_id(&mut self.entries, entry);
            }
            Change::Remove(id) => {
                list_ops::remove_by_id(&mut self.entries, id);
            }
        }
        self.mutating = false;
    }

    /// Mutation failed; entries stay as they were
    pub fn abort_mutation(&mut self) {
        self.mutating = false;
    }
}

/// Event detail: items attached to the event vs the user's other items
#[derive(Debug, Clone, PartialEq)]
pub struct EventDetailState {
    pub event: Event,
    candidates: LoadPhase,
    available: Vec<Item>,
    selected: Option<u32>,
}

impl EventDetailState {
    pub fn new(event: Event) -> Self {
        Self {
            event,
            candidates: LoadPhase::Loading,
            available: Vec::new(),
            selected: None,
        }
    }

    pub fn attached(&self) -> &[Item] {
        &self.event.items
    }

    /// Progress of the fetch that feeds the selector
    pub fn candidates(&self) -> &LoadPhase {
        &self.candidates
    }

    pub fn available(&self) -> &[Item] {
        &self.available
    }

    pub fn selected(&self) -> Option<u32> {
        self.selected
    }

    /// Recompute the selector from all of the user's items and preselect the first
    pub fn set_candidates(&mut self, all_items: &[Item]) {
        self.available = list_ops::without_ids(all_items, &self.event.items);
        self.selected = self.available.first().map(|i| i.id);
        self.candidates = LoadPhase::Loaded;
    }

    /// Nothing can be attached until the user's items are known
    pub fn candidates_failed(&mut self, message: impl Into<String>) {
        self.available.clear();
        self.selected = None;
        self.candidates = LoadPhase::Failed(message.into());
    }

    /// Ignores ids that are not available
    pub fn select(&mut self, item_id: u32) {
        if list_ops::find_by_id(&self.available, item_id).is_some() {
            self.selected = Some(item_id);
        }
    }

    /// Move a confirmed item from available to attached and preselect the next one
    pub fn attach(&mut self, item_id: u32) -> Option<Item> {
        let item = list_ops::remove_by_id(&mut self.available, item_id)?;
        self.event.items.push(item.clone());
        self.selected = self.available.first().map(|i| i.id);
        Some(item)
    }

    pub fn rename(&mut self, updated: Event) {
        // keep locally attached items if the response omits them
        let items = if updated.items.is_empty() {
            std::mem::take(&mut self.event.items)
        } else {
            updated.items.clone()
        };
        self.event = Event { items, ..updated };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_item(id: u32) -> Item {
        Item {
            id,
            title: format!("Item {}", id),
            description: None,
            image_url: None,
            link: None,
            price: None,
            note: None,
            category_id: None,
            user_id: Some(1),
            is_booked: None,
        }
    }

    fn make_event(id: u32, items: Vec<Item>) -> Event {
        Event {
            id,
            title: format!("Event {}", id),
            description: None,
            date: None,
            is_shared: false,
            items,
            user_id: Some(1),
        }
    }

    #[test]
    fn test_load_lifecycle() {
        let mut state = ListState::<Item>::new();
        assert_eq!(state.phase(), &LoadPhase::Idle);

        state.begin_load();
        assert!(state.is_loading());
        assert!(!state.begin_mutation());

        state.finish_load(Ok(vec![make_item(1), make_item(2)]));
        assert_eq!(state.phase(), &LoadPhase::Loaded);
        assert_eq!(state.entries().len(), 2);
    }

    #[test]
    fn test_load_failure() {
        let mut state = ListState::<Item>::new();
        state.begin_load();
        state.finish_load(Err("offline".to_string()));
        assert_eq!(state.phase(), &LoadPhase::Failed("offline".to_string()));
        assert!(state.entries().is_empty());
    }

    #[test]
    fn test_single_mutation_in_flight() {
        let mut state = ListState::<Item>::new();
        state.finish_load(Ok(vec![make_item(1)]));

        assert!(state.begin_mutation());
        assert!(!state.begin_mutation());
        state.commit(Change::Append(make_item(2)));
        assert!(!state.is_mutating());
        assert_eq!(state.phase(), &LoadPhase::Loaded);
        assert_eq!(state.entries().iter().map(|i| i.id).collect::<Vec<_>>(), vec![1, 2]);
    }

    #[test]
    fn test_failed_mutation_keeps_entries() {
        let mut state = ListState::<Item>::new();
        state.finish_load(Ok(vec![make_item(1)]));
        assert!(state.begin_mutation());
        state.abort_mutation();
        assert!(!state.is_mutating());
        assert_eq!(state.entries().len(), 1);
    }

    #[test]
    fn test_commit_replace_and_remove() {
        let mut state = ListState::<Item>::new();
        state.finish_load(Ok(vec![make_item(1), make_item(2)]));

        let mut renamed = make_item(2);
        renamed.title = "Renamed".to_string();
        state.begin_mutation();
        state.commit(Change::Replace(renamed));
        assert_eq!(state.entries()[1].title, "Renamed");

        state.begin_mutation();
        state.commit(Change::Remove(1));
        state.begin_mutation();
        state.commit(Change::Remove(99));
        assert_eq!(state.entries().iter().map(|i| i.id).collect::<Vec<_>>(), vec![2]);
    }

    #[test]
    fn test_detail_candidates_and_attach() {
        let mut detail = EventDetailState::new(make_event(1, vec![make_item(1), make_item(2)]));
        detail.set_candidates(&[make_item(1), make_item(2), make_item(3), make_item(4)]);
        assert_eq!(detail.available().iter().map(|i| i.id).collect::<Vec<_>>(), vec![3, 4]);
        assert_eq!(detail.selected(), Some(3));

        let attached = detail.attach(3).unwrap();
        assert_eq!(attached.id, 3);
        assert_eq!(detail.attached().len(), 3);
        assert_eq!(detail.selected(), Some(4));

        detail.attach(4);
        assert!(detail.available().is_empty());
        assert_eq!(detail.selected(), None);
        assert!(detail.attach(4).is_none());
    }

    #[test]
    fn test_detail_candidates_phase() {
        let mut detail = EventDetailState::new(make_event(1, vec![]));
        assert_eq!(detail.candidates(), &LoadPhase::Loading);
        detail.set_candidates(&[make_item(5)]);
        assert_eq!(detail.candidates(), &LoadPhase::Loaded);
    }

    #[test]
    fn test_detail_candidates_failure_settles() {
        let mut detail = EventDetailState::new(make_event(1, vec![make_item(1)]));
        detail.candidates_failed("offline");
        assert_eq!(detail.candidates(), &LoadPhase::Failed("offline".to_string()));
        assert!(detail.available().is_empty());
        assert_eq!(detail.selected(), None);
        assert_eq!(detail.attached().len(), 1);
    }

    #[test]
    fn test_detail_select_ignores_unknown() {
        let mut detail = EventDetailState::new(make_event(1, vec![]));
        detail.set_candidates(&[make_item(7), make_item(8)]);
        detail.select(8);
        assert_eq!(detail.selected(), Some(8));
        detail.select(42);
        assert_eq!(detail.selected(), Some(8));
    }

    #[test]
    fn test_detail_rename_keeps_items() {
        let mut detail = EventDetailState::new(make_event(1, vec![make_item(1)]));
        let mut updated = make_event(1, vec![]);
        updated.title = "Party".to_string();
        detail.rename(updated);
        assert_eq!(detail.event.title, "Party");
        assert_eq!(detail.attached().len(), 1);
    }
}
