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


//! Stand registry

use crate::model::{Nit, Stand, StandId};

use super::collection::Collection;
use super::observers::{ChangeCallback, ObserverId, ObserverList};

#[derive(Debug)]
pub struct StandRegistry {
    stands: Collection<Stand>,
    observers: ObserverList,
}

impl Default for StandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl StandRegistry {
    pub fn new() -> Self {
        Self {
            stands: Collection::new("stand"),
            observers: ObserverList::new("stands"),
        }
    }

    pub fn add(&self, stand: Stand) {
        self.stands.insert(stand);
        self.observers.notify();
    }

    pub fn exists(&self, id: StandId) -> bool {
        self.stands.contains(&id)
    }

    pub fn get(&self, id: StandId) -> Option<Stand> {
        self.stands.get(&id)
    }

    /// All stands sorted by id
    pub fn all(&self) -> Vec<Stand> {
        self.stands.all_sorted()
    }

    /// Record a buying publisher; true only if a new link was added
    pub fn link_publisher(&self, id: StandId, publisher: Nit) -> bool {
        self.stands
            .update(&id, |stand| stand.add_publisher(publisher))
            .unwrap_or(false)
    }

    pub fn len(&self) -> usize {
        self.stands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stands.is_empty()
    }

    pub fn clear(&self) {
        self.stands.clear();
    }

    pub fn add_observer(&self, callback: ChangeCallback) -> ObserverId {
        self.observers.add(callback)
    }

    pub fn remove_observer(&self, id: ObserverId) -> bool {
        self.observers.remove(id)
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nit(raw: &str) -> Nit {
        Nit::parse(raw).unwrap()
    }

    #[test]
    fn test_link_publisher_once_per_pair() {
        let registry = StandRegistry::new();
        registry.add(Stand::new(4, 500.0));

        assert!(registry.link_publisher(4, nit("900.123.456-7")));
        assert!(!registry.link_publisher(4, nit("900.123.456-7")));
        assert!(registry.link_publisher(4, nit("800.000.000-1")));
        assert_eq!(registry.get(4).unwrap().publisher_quantity(), 2);
    }

    #[test]
    fn test_link_unknown_stand() {
        let registry = StandRegistry::new();
        assert!(!registry.link_publisher(9, nit("900.123.456-7")));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_all_sorted_by_id() {
        let registry = StandRegistry::new();
        for id in [3, 1, 2] {
            registry.add(Stand::new(id, 10.0));
        }
        let ids: Vec<StandId> = registry.all().iter().map(Stand::id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }
}
