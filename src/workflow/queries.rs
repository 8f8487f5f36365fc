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


//! Read-only query workflows
//!
//! Every listing is a fresh vector of copies sorted by the entity key.
//! An empty fair yields empty listings, never an error.

use crate::error::{FairError, Result};
use crate::fair::BookFair;
use crate::model::{Author, Book, BookVariant, Manager, Narrator, Nit, Person, PersonId, Publisher, Stand};

/// Books credited to an author, sorted by ISBN
pub fn books_by_author(fair: &BookFair, author_id: PersonId) -> Result<Vec<Book>> {
    let author = author_by_id(fair, author_id)?;
    Ok(fair.books().by_author(&author))
}

/// Books whose format label matches exactly, sorted by ISBN
pub fn books_by_format(fair: &BookFair, format: &str) -> Vec<Book> {
    fair.books().by_format(format)
}

/// Authors tied for the highest count of distinct publishers, by id
///
/// Empty when there are no authors or nobody has published anything yet.
pub fn authors_with_most_distinct_publishers(fair: &BookFair) -> Vec<Author> {
    let authors = fair.persons().all_authors();
    let max = authors
        .iter()
        .map(Author::publisher_quantity)
        .max()
        .unwrap_or(0);
    if max == 0 {
        return Vec::new();
    }
    authors
        .into_iter()
        .filter(|author| author.publisher_quantity() == max)
        .collect()
}

pub fn author_by_id(fair: &BookFair, id: PersonId) -> Result<Author> {
    fair.persons()
        .get_author(id)
        .ok_or_else(|| FairError::not_found("Author", id))
}

/// Publisher by NIT; a malformed NIT is reported as not found
pub fn publisher_by_nit(fair: &BookFair, nit: &str) -> Result<Publisher> {
    Nit::parse(nit)
        .ok()
        .and_then(|parsed| fair.publishers().get(&parsed))
        .ok_or_else(|| FairError::not_found("Publisher", nit))
}

/// Every person of every subtype, by id
pub fn all_persons(fair: &BookFair) -> Vec<Person> {
    fair.persons().all_persons()
}

pub fn all_authors(fair: &BookFair) -> Vec<Author> {
    fair.persons().all_authors()
}

pub fn all_managers(fair: &BookFair) -> Vec<Manager> {
    fair.persons().all_managers()
}

pub fn all_narrators(fair: &BookFair) -> Vec<Narrator> {
    fair.persons().all_narrators()
}

pub fn all_publishers(fair: &BookFair) -> Vec<Publisher> {
    fair.publishers().all()
}

pub fn all_stands(fair: &BookFair) -> Vec<Stand> {
    fair.stands().all()
}

pub fn all_books(fair: &BookFair) -> Vec<Book> {
    fair.books().all()
}

pub fn all_printed_books(fair: &BookFair) -> Vec<Book> {
    fair.books().by_variant(BookVariant::Printed)
}

pub fn all_digital_books(fair: &BookFair) -> Vec<Book> {
    fair.books().by_variant(BookVariant::Digital)
}

pub fn all_audiobooks(fair: &BookFair) -> Vec<Book> {
    fair.books().by_variant(BookVariant::Audiobook)
}
