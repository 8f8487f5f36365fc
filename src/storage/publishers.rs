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


//! Publisher registry

use crate::model::{Isbn, Nit, Publisher, StandId};

use super::collection::Collection;
use super::observers::{ChangeCallback, ObserverId, ObserverList};

#[derive(Debug)]
pub struct PublisherRegistry {
    publishers: Collection<Publisher>,
    observers: ObserverList,
}

impl Default for PublisherRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl PublisherRegistry {
    pub fn new() -> Self {
        Self {
            publishers: Collection::new("publisher"),
            observers: ObserverList::new("publishers"),
        }
    }

    pub fn add(&self, publisher: Publisher) {
        self.publishers.insert(publisher);
        self.observers.notify();
    }

    pub fn exists(&self, nit: &Nit) -> bool {
        self.publishers.contains(nit)
    }

    pub fn get(&self, nit: &Nit) -> Option<Publisher> {
        self.publishers.get(nit)
    }

    /// All publishers sorted by NIT
    pub fn all(&self) -> Vec<Publisher> {
        self.publishers.all_sorted()
    }

    /// Add a book to the publisher's list; false if the publisher is unknown
    pub fn link_book(&self, nit: &Nit, isbn: Isbn) -> bool {
        self.publishers
            .update(nit, |publisher| publisher.add_book(isbn))
            .is_some()
    }

    /// Record a held stand; true only if a new link was added
    pub fn link_stand(&self, nit: &Nit, stand: StandId) -> bool {
        self.publishers
            .update(nit, |publisher| publisher.add_stand(stand))
            .unwrap_or(false)
    }

    pub fn len(&self) -> usize {
        self.publishers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.publishers.is_empty()
    }

    pub fn clear(&self) {
        self.publishers.clear();
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
