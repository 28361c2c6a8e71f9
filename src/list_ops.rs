//! Local List Operations
//!
//! Id-keyed splices applied to a screen's copy of a backend collection
//! after the server confirms a mutation.

use std::collections::HashSet;

use crate::models::{Event, Friend, Item};

/// Entity with a backend id
pub trait Keyed {
    fn key(&self) -> u32;
}

impl Keyed for Item {
    fn key(&self) -> u32 {
        self.id
    }
}

impl Keyed for Event {
    fn key(&self) -> u32 {
        self.id
    }
}

impl Keyed for Friend {
    fn key(&self) -> u32 {
        self.id
    }
}

pub fn append<T>(list: &mut Vec<T>, entry: T) {
    list.push(entry);
}

/// Replace the entry with the same id in place. Returns false if absent.
pub fn replace_by_id<T: Keyed>(list: &mut [T], updated: T) -> bool {
    match list.iter_mut().find(|e| e.key() == updated.key()) {
        Some(slot) => {
            *slot = updated;
            true
        }
        None => false,
    }
}

/// Remove the first entry with `id`; no-op when missing
pub fn remove_by_id<T: Keyed>(list: &mut Vec<T>, id: u32) -> Option<T> {
    let index = list.iter().position(|e| e.key() == id)?;
    Some(list.remove(index))
}

/// Entries of `all` whose id is not in `exclude`, order preserved
pub fn without_ids<T: Keyed + Clone>(all: &[T], exclude: &[T]) -> Vec<T> {
    let excluded: HashSet<u32> = exclude.iter().map(Keyed::key).collect();
    all.iter()
        .filter(|e| !excluded.contains(&e.key()))
        .cloned()
        .collect()
}

pub fn find_by_id<T: Keyed>(list: &[T], id: u32) -> Option<&T> {
    list.iter().find(|e| e.key() == id)
}
