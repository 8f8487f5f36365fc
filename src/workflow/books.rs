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


//! Printed, digital and audiobook creation
//!
//! The three workflows share one pipeline: key checks, scalar fields,
//! author resolution, publisher resolution, then (audiobooks only) the
//! narrator. Links are written only after every check has passed.

use std::collections::HashSet;

use tracing::{debug, info};

use crate::error::{FairError, Result};
use crate::fair::BookFair;
use crate::model::{Book, BookKind, Isbn, NewBook, Nit, PersonId};

use super::validation::{require_count, require_positive, require_text, traced};

pub fn create_printed_book(fair: &BookFair, input: &NewBook, pages: i32, copies: i32) -> Result<Book> {
    traced("create_printed_book", try_create_printed_book(fair, input, pages, copies))
}

fn try_create_printed_book(fair: &BookFair, input: &NewBook, pages: i32, copies: i32) -> Result<Book> {
    let _guard = fair.lock_mutations();
    let checked = check_common(fair, input, |fair| {
        require_count(fair.config(), "pages", pages)?;
        require_count(fair.config(), "copies", copies)
    })?;
    Ok(register(fair, checked, BookKind::Printed { pages, copies }))
}

/// `hyperlink` is trimmed; a blank link is stored as absent
pub fn create_digital_book(fair: &BookFair, input: &NewBook, hyperlink: Option<&str>) -> Result<Book> {
    traced("create_digital_book", try_create_digital_book(fair, input, hyperlink))
}

fn try_create_digital_book(fair: &BookFair, input: &NewBook, hyperlink: Option<&str>) -> Result<Book> {
    let _guard = fair.lock_mutations();
    let checked = check_common(fair, input, |_| Ok(()))?;
    let hyperlink = hyperlink
        .map(str::trim)
        .filter(|link| !link.is_empty())
        .map(str::to_string);
    Ok(register(fair, checked, BookKind::Digital { hyperlink }))
}

/// `duration` is in minutes; the narrator is resolved after the publisher
pub fn create_audiobook(fair: &BookFair, input: &NewBook, duration: i32, narrator_id: PersonId) -> Result<Book> {
    traced("create_audiobook", try_create_audiobook(fair, input, duration, narrator_id))
}

fn try_create_audiobook(fair: &BookFair, input: &NewBook, duration: i32, narrator_id: PersonId) -> Result<Book> {
    let _guard = fair.lock_mutations();
    let checked = check_common(fair, input, |fair| require_count(fair.config(), "duration", duration))?;
    if !fair.persons().exists_narrator(narrator_id) {
        return Err(FairError::not_found("Narrator", narrator_id));
    }
    Ok(register(
        fair,
        checked,
        BookKind::Audiobook {
            duration,
            narrator: narrator_id,
        },
    ))
}

/// Validated fields shared by every variant
struct CheckedBook {
    title: String,
    authors: Vec<PersonId>,
    isbn: Isbn,
    genre: String,
    format: String,
    value: f64,
    publisher: Nit,
}

fn check_common<F>(fair: &BookFair, input: &NewBook, variant_fields: F) -> Result<CheckedBook>
where
    F: FnOnce(&BookFair) -> Result<()>,
{
    let isbn = Isbn::parse(&input.isbn)?;
    if fair.books().exists(&isbn) {
        return Err(FairError::duplicate("book", &isbn));
    }

    let title = require_text("book", "title", &input.title)?;
    let genre = require_text("book", "genre", &input.genre)?;
    let format = require_text("book", "format", &input.format)?;
    require_positive("book", "value", input.value)?;
    variant_fields(fair)?;

    let authors = resolve_authors(fair, &input.author_ids)?;

    // A malformed NIT can never have been registered
    let publisher = Nit::parse(&input.publisher_nit)
        .ok()
        .filter(|nit| fair.publishers().exists(nit))
        .ok_or_else(|| FairError::not_found("Publisher", &input.publisher_nit))?;

    Ok(CheckedBook {
        title: title.to_string(),
        authors,
        isbn,
        genre: genre.to_string(),
        format: format.to_string(),
        value: input.value,
        publisher,
    })
}

fn resolve_authors(fair: &BookFair, ids: &[i64]) -> Result<Vec<PersonId>> {
    if ids.is_empty() {
        return Err(FairError::EmptySelection("author"));
    }
    let mut seen = HashSet::with_capacity(ids.len());
    for &id in ids {
        if !fair.persons().exists_author(id) {
            return Err(FairError::not_found("Author", id));
        }
        if !seen.insert(id) {
            return Err(FairError::DuplicateAuthor(id));
        }
    }
    Ok(ids.to_vec())
}

fn register(fair: &BookFair, checked: CheckedBook, kind: BookKind) -> Book {
    let book = Book::new(
        checked.title,
        checked.authors,
        checked.isbn,
        checked.genre,
        checked.format,
        checked.value,
        checked.publisher,
        kind,
    );

    for &author in book.authors() {
        fair.persons()
            .link_book_to_author(author, book.isbn().clone(), book.publisher());
    }
    fair.publishers().link_book(book.publisher(), book.isbn().clone());
    if let Some(narrator) = book.narrator() {
        fair.persons().link_audiobook_to_narrator(narrator, book.isbn().clone());
    }
    debug!(isbn = %book.isbn(), authors = book.authors().len(), "book links written");

    fair.books().add(book.clone());
    info!(isbn = %book.isbn(), variant = book.variant().label(), "book created");
    book
}
