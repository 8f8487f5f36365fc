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


//! Book registry

use crate::model::{Author, Book, BookVariant, Isbn};

use super::collection::Collection;
use super::observers::{ChangeCallback, ObserverId, ObserverList};

#[derive(Debug)]
pub struct BookRegistry {
    books: Collection<Book>,
    observers: ObserverList,
}

impl Default for BookRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl BookRegistry {
    pub fn new() -> Self {
        Self {
            books: Collection::new("book"),
            observers: ObserverList::new("books"),
        }
    }

    pub fn add(&self, book: Book) {
        self.books.insert(book);
        self.observers.notify();
    }

    pub fn exists(&self, isbn: &Isbn) -> bool {
        self.books.contains(isbn)
    }

    pub fn get(&self, isbn: &Isbn) -> Option<Book> {
        self.books.get(isbn)
    }

    /// All books sorted by ISBN
    pub fn all(&self) -> Vec<Book> {
        self.books.all_sorted()
    }

    pub fn by_variant(&self, variant: BookVariant) -> Vec<Book> {
        self.books.filter_sorted(|book| book.variant() == variant)
    }

    /// Books whose format label equals `format` exactly
    pub fn by_format(&self, format: &str) -> Vec<Book> {
        self.books.filter_sorted(|book| book.format() == format)
    }

    /// Books credited to `author`, resolved from the author's own book list
    pub fn by_author(&self, author: &Author) -> Vec<Book> {
        self.books
            .filter_sorted(|book| author.books().contains(book.isbn()))
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    pub fn clear(&self) {
        self.books.clear();
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
