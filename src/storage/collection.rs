// BookFair Core - Book fair registry and validation engine
// Copyright (C) 2025 Henning Berge
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program. If not, see <https://www.gnu.org/licenses/>.


//! Locked, key-sorted entity collection backing every registry
//!
//! Lookups are linear scans. Reads hand out clones, so nothing outside the
//! collection can reach the stored values.

use parking_lot::RwLock;
use tracing::debug;

use crate::model::Keyed;

#[derive(Debug)]
pub struct Collection<E: Keyed> {
    /// Entity name, for log fields
    entity: &'static str,
    items: RwLock<Vec<E>>,
}

impl<E: Keyed> Collection<E> {
    pub fn new(entity: &'static str) -> Self {
        Self {
            entity,
            items: RwLock::new(Vec::new()),
        }
    }

    /// Append without any uniqueness check
    pub fn insert(&self, item: E) {
        debug!(entity = self.entity, key = %item.key(), "inserting record");
        self.items.write().push(item);
    }

    pub fn contains(&self, key: &E::Key) -> bool {
        self.items.read().iter().any(|item| item.key() == key)
    }

    /// Copy of the first record with `key`
    pub fn get(&self, key: &E::Key) -> Option<E> {
        self.items.read().iter().find(|item| item.key() == key).cloned()
    }

    /// Copies of all records, stably sorted by key
    pub fn all_sorted(&self) -> Vec<E> {
        self.filter_sorted(|_| true)
    }

    /// Copies of the matching records, stably sorted by key
    pub fn filter_sorted<F>(&self, predicate: F) -> Vec<E>
    where
        F: Fn(&E) -> bool,
    {
        let mut matches: Vec<E> = self
            .items
            .read()
            .iter()
            .filter(|item| predicate(item))
            .cloned()
            .collect();
        matches.sort_by(|a, b| a.key().cmp(b.key()));
        matches
    }

    /// Mutate the first record with `key` in place
    ///
    /// Returns `None` when no record has that key.
    pub fn update<R, F>(&self, key: &E::Key, f: F) -> Option<R>
    where
        F: FnOnce(&mut E) -> R,
    {
        let mut items = self.items.write();
        let item = items.iter_mut().find(|item| item.key() == key)?;
        debug!(entity = self.entity, key = %key, "updating record links");
        Some(f(item))
    }

    pub fn len(&self) -> usize {
        self.items.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.read().is_empty()
    }

    pub fn clear(&self) {
        self.items.write().clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Stand;

    #[test]
    fn test_all_sorted_returns_new_sorted_vec() {
        let stands = Collection::new("stand");
        stands.insert(Stand::new(30, 1.0));
        stands.insert(Stand::new(10, 2.0));
        stands.insert(Stand::new(20, 3.0));

        let ids: Vec<i64> = stands.all_sorted().iter().map(Stand::id).collect();
        assert_eq!(ids, vec![10, 20, 30]);
    }

    #[test]
    fn test_sort_is_stable_for_equal_keys() {
        let stands = Collection::new("stand");
        stands.insert(Stand::new(5, 1.0));
        stands.insert(Stand::new(1, 9.0));
        stands.insert(Stand::new(5, 2.0));

        let prices: Vec<f64> = stands.all_sorted().iter().map(Stand::price).collect();
        assert_eq!(prices, vec![9.0, 1.0, 2.0]);
    }

    #[test]
    fn test_returned_copy_does_not_alias_storage() {
        let stands = Collection::new("stand");
        stands.insert(Stand::new(1, 10.0));

        let mut copy = stands.get(&1).unwrap();
        copy.add_publisher(crate::model::Nit::parse("900.123.456-7").unwrap());

        assert_eq!(stands.get(&1).unwrap().publisher_quantity(), 0);
    }

    #[test]
    fn test_update_missing_key() {
        let stands: Collection<Stand> = Collection::new("stand");
        assert!(stands.update(&1, |_| ()).is_none());
        assert!(stands.is_empty());
    }

    #[test]
    fn test_clear() {
        let stands = Collection::new("stand");
        stands.insert(Stand::new(1, 10.0));
        assert_eq!(stands.len(), 1);
        stands.clear();
        assert!(!stands.contains(&1));
    }
}
