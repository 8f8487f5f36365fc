//! Persons taking part in the fair: authors, publisher managers and
//! audiobook narrators.
//!
//! Relationship fields hold keys (ISBN, NIT) rather than the related
//! entities, so cloning a person yields a value that shares nothing with the
//! registry's copy.

use serde::{Deserialize, Serialize};

use super::keys::{Isbn, Nit, PersonId};
use super::Keyed;

/// Identity and name shared by every person subtype
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonDetails {
    id: PersonId,
    firstname: String,
    lastname: String,
}

impl PersonDetails {
    pub fn new(id: PersonId, firstname: impl Into<String>, lastname: impl Into<String>) -> Self {
        Self {
            id,
            firstname: firstname.into(),
            lastname: lastname.into(),
        }
    }

    pub fn id(&self) -> PersonId {
        self.id
    }

    pub fn firstname(&self) -> &str {
        &self.firstname
    }

    pub fn lastname(&self) -> &str {
        &self.lastname
    }

    pub fn fullname(&self) -> String {
        format!("{} {}", self.firstname, self.lastname)
    }
}

/// Person subtype; the declaration order is the tie-break order of
/// combined listings
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PersonKind {
    Author,
    Manager,
    Narrator,
}

impl PersonKind {
    pub fn label(self) -> &'static str {
        match self {
            PersonKind::Author => "author",
            PersonKind::Manager => "manager",
            PersonKind::Narrator => "narrator",
        }
    }
}

/// Input for any person creation workflow
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewPerson {
    pub id: i64,
    pub firstname: String,
    pub lastname: String,
}

impl NewPerson {
    pub fn new(id: i64, firstname: impl Into<String>, lastname: impl Into<String>) -> Self {
        Self {
            id,
            firstname: firstname.into(),
            lastname: lastname.into(),
        }
    }
}

// ============================================================================
// AUTHOR
// ============================================================================

/// Book author
///
/// `books` grows as books crediting this author are registered;
/// `publishers` keeps the distinct publishers of those books in the order
/// they were first seen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Author {
    details: PersonDetails,
    books: Vec<Isbn>,
    publishers: Vec<Nit>,
}

impl Author {
    pub fn new(details: PersonDetails) -> Self {
        Self {
            details,
            books: Vec::new(),
            publishers: Vec::new(),
        }
    }

    pub fn id(&self) -> PersonId {
        self.details.id
    }

    pub fn details(&self) -> &PersonDetails {
        &self.details
    }

    pub fn books(&self) -> &[Isbn] {
        &self.books
    }

    pub fn book_quantity(&self) -> usize {
        self.books.len()
    }

    pub fn publishers(&self) -> &[Nit] {
        &self.publishers
    }

    /// Number of distinct publishers across this author's books
    pub fn publisher_quantity(&self) -> usize {
        self.publishers.len()
    }

    /// Credit a book, published by `publisher`, to this author
    pub fn add_book(&mut self, isbn: Isbn, publisher: &Nit) {
        if !self.books.contains(&isbn) {
            self.books.push(isbn);
        }
        if !self.publishers.contains(publisher) {
            self.publishers.push(publisher.clone());
        }
    }
}

impl Keyed for Author {
    type Key = PersonId;

    fn key(&self) -> &PersonId {
        &self.details.id
    }
}

// ============================================================================
// MANAGER
// ============================================================================

/// Publisher manager; `publisher` is set when a publisher is created with
/// this manager
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manager {
    details: PersonDetails,
    publisher: Option<Nit>,
}

impl Manager {
    pub fn new(details: PersonDetails) -> Self {
        Self {
            details,
            publisher: None,
        }
    }

    pub fn id(&self) -> PersonId {
        self.details.id
    }

    pub fn details(&self) -> &PersonDetails {
        &self.details
    }

    pub fn publisher(&self) -> Option<&Nit> {
        self.publisher.as_ref()
    }

    /// Point this manager at `publisher`, returning the one it managed before
    pub fn set_publisher(&mut self, publisher: Nit) -> Option<Nit> {
        self.publisher.replace(publisher)
    }
}

impl Keyed for Manager {
    type Key = PersonId;

    fn key(&self) -> &PersonId {
        &self.details.id
    }
}

// ============================================================================
// NARRATOR
// ============================================================================

/// Audiobook narrator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Narrator {
    details: PersonDetails,
    books: Vec<Isbn>,
}

impl Narrator {
    pub fn new(details: PersonDetails) -> Self {
        Self {
            details,
            books: Vec::new(),
        }
    }

    pub fn id(&self) -> PersonId {
        self.details.id
    }

    pub fn details(&self) -> &PersonDetails {
        &self.details
    }

    pub fn books(&self) -> &[Isbn] {
        &self.books
    }

    pub fn book_quantity(&self) -> usize {
        self.books.len()
    }

    pub fn add_book(&mut self, isbn: Isbn) {
        if !self.books.contains(&isbn) {
            self.books.push(isbn);
        }
    }
}

impl Keyed for Narrator {
    type Key = PersonId;

    fn key(&self) -> &PersonId {
        &self.details.id
    }
}

// ============================================================================
// ANY PERSON
// ============================================================================

/// Any registered person, as returned by combined listings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum Person {
    Author(Author),
    Manager(Manager),
    Narrator(Narrator),
}

impl Person {
    pub fn details(&self) -> &PersonDetails {
        match self {
            Person::Author(a) => a.details(),
            Person::Manager(m) => m.details(),
            Person::Narrator(n) => n.details(),
        }
    }

    pub fn id(&self) -> PersonId {
        self.details().id()
    }

    pub fn fullname(&self) -> String {
        self.details().fullname()
    }

    pub fn kind(&self) -> PersonKind {
        match self {
            Person::Author(_) => PersonKind::Author,
            Person::Manager(_) => PersonKind::Manager,
            Person::Narrator(_) => PersonKind::Narrator,
        }
    }
}
