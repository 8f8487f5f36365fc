//! Book entity and its printed / digital / audio variants
//!
//! The variant is an explicit tag ([`BookKind`]) on a single `Book` record,
//! so filtering by variant is a match on the tag.

use serde::{Deserialize, Serialize};

use super::keys::{Isbn, Nit, PersonId};
use super::Keyed;

/// Discriminator used to filter books by variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BookVariant {
    Printed,
    Digital,
    Audiobook,
}

impl BookVariant {
    pub fn label(self) -> &'static str {
        match self {
            BookVariant::Printed => "printed book",
            BookVariant::Digital => "digital book",
            BookVariant::Audiobook => "audiobook",
        }
    }
}

/// Variant-specific data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "variant")]
pub enum BookKind {
    Printed { pages: i32, copies: i32 },
    Digital { hyperlink: Option<String> },
    /// `duration` is in minutes
    Audiobook { duration: i32, narrator: PersonId },
}

impl BookKind {
    pub fn variant(&self) -> BookVariant {
        match self {
            BookKind::Printed { .. } => BookVariant::Printed,
            BookKind::Digital { .. } => BookVariant::Digital,
            BookKind::Audiobook { .. } => BookVariant::Audiobook,
        }
    }
}

/// Book entity
///
/// `authors` keeps the order given at creation and never holds the same id
/// twice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    title: String,
    authors: Vec<PersonId>,
    isbn: Isbn,
    genre: String,
    format: String,
    value: f64,
    publisher: Nit,
    kind: BookKind,
}

impl Book {
    /// Build a book from already validated parts
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        title: impl Into<String>,
        authors: Vec<PersonId>,
        isbn: Isbn,
        genre: impl Into<String>,
        format: impl Into<String>,
        value: f64,
        publisher: Nit,
        kind: BookKind,
    ) -> Self {
        Self {
            title: title.into(),
            authors,
            isbn,
            genre: genre.into(),
            format: format.into(),
            value,
            publisher,
            kind,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn authors(&self) -> &[PersonId] {
        &self.authors
    }

    pub fn isbn(&self) -> &Isbn {
        &self.isbn
    }

    pub fn genre(&self) -> &str {
        &self.genre
    }

    /// Free-form format label (e.g. "Hardcover", "EPUB")
    pub fn format(&self) -> &str {
        &self.format
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn publisher(&self) -> &Nit {
        &self.publisher
    }

    pub fn kind(&self) -> &BookKind {
        &self.kind
    }

    pub fn variant(&self) -> BookVariant {
        self.kind.variant()
    }

    /// Narrator id for audiobooks
    pub fn narrator(&self) -> Option<PersonId> {
        match self.kind {
            BookKind::Audiobook { narrator, .. } => Some(narrator),
            _ => None,
        }
    }
}

impl Keyed for Book {
    type Key = Isbn;

    fn key(&self) -> &Isbn {
        &self.isbn
    }
}

/// Fields shared by every book creation workflow
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewBook {
    pub title: String,
    pub author_ids: Vec<i64>,
    pub isbn: String,
    pub genre: String,
    pub format: String,
    pub value: f64,
    pub publisher_nit: String,
}
