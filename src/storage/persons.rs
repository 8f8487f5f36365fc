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


//! Person registry, partitioned by subtype
//!
//! Authors, managers and narrators live in separate collections; an id only
//! has to be unique inside its own partition. One observer list covers all
//! three partitions.

use tracing::debug;

use crate::model::{Author, Isbn, Manager, Narrator, Nit, Person, PersonId};

use super::collection::Collection;
use super::observers::{ChangeCallback, ObserverId, ObserverList};

#[derive(Debug)]
pub struct PersonRegistry {
    authors: Collection<Author>,
    managers: Collection<Manager>,
    narrators: Collection<Narrator>,
    observers: ObserverList,
}

impl Default for PersonRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl PersonRegistry {
    pub fn new() -> Self {
        Self {
            authors: Collection::new("author"),
            managers: Collection::new("manager"),
            narrators: Collection::new("narrator"),
            observers: ObserverList::new("persons"),
        }
    }

    // ===== Authors =====

    pub fn add_author(&self, author: Author) {
        self.authors.insert(author);
        self.observers.notify();
    }

    pub fn exists_author(&self, id: PersonId) -> bool {
        self.authors.contains(&id)
    }

    pub fn get_author(&self, id: PersonId) -> Option<Author> {
        self.authors.get(&id)
    }

    pub fn all_authors(&self) -> Vec<Author> {
        self.authors.all_sorted()
    }

    /// Credit `isbn` to the author; false if the author is unknown
    pub fn link_book_to_author(&self, id: PersonId, isbn: Isbn, publisher: &Nit) -> bool {
        self.authors
            .update(&id, |author| author.add_book(isbn, publisher))
            .is_some()
    }

    // ===== Managers =====

    pub fn add_manager(&self, manager: Manager) {
        self.managers.insert(manager);
        self.observers.notify();
    }

    pub fn exists_manager(&self, id: PersonId) -> bool {
        self.managers.contains(&id)
    }

    pub fn get_manager(&self, id: PersonId) -> Option<Manager> {
        self.managers.get(&id)
    }

    pub fn all_managers(&self) -> Vec<Manager> {
        self.managers.all_sorted()
    }

    /// Set the manager's back-reference; false if the manager is unknown
    pub fn assign_publisher_to_manager(&self, id: PersonId, publisher: Nit) -> bool {
        self.managers
            .update(&id, |manager| {
                if let Some(previous) = manager.set_publisher(publisher) {
                    debug!(manager = id, previous = %previous, "manager reassigned");
                }
            })
            .is_some()
    }

    // ===== Narrators =====

    pub fn add_narrator(&self, narrator: Narrator) {
        self.narrators.insert(narrator);
        self.observers.notify();
    }

    pub fn exists_narrator(&self, id: PersonId) -> bool {
        self.narrators.contains(&id)
    }

    pub fn get_narrator(&self, id: PersonId) -> Option<Narrator> {
        self.narrators.get(&id)
    }

    pub fn all_narrators(&self) -> Vec<Narrator> {
        self.narrators.all_sorted()
    }

    /// Record a narrated audiobook; false if the narrator is unknown
    pub fn link_audiobook_to_narrator(&self, id: PersonId, isbn: Isbn) -> bool {
        self.narrators
            .update(&id, |narrator| narrator.add_book(isbn))
            .is_some()
    }

    // ===== All persons =====

    /// Every person sorted by id; equal ids keep author, manager, narrator order
    pub fn all_persons(&self) -> Vec<Person> {
        let mut persons: Vec<Person> = self
            .all_authors()
            .into_iter()
            .map(Person::Author)
            .chain(self.all_managers().into_iter().map(Person::Manager))
            .chain(self.all_narrators().into_iter().map(Person::Narrator))
            .collect();
        persons.sort_by_key(Person::id);
        persons
    }

    pub fn len(&self) -> usize {
        self.authors.len() + self.managers.len() + self.narrators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop every person; observers stay registered
    pub fn clear(&self) {
        self.authors.clear();
        self.managers.clear();
        self.narrators.clear();
    }

    // ===== Observers =====

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
