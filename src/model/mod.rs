//! Domain entities of the book fair
//!
//! # Entities
//! - Persons: [`Author`], [`Manager`], [`Narrator`] (combined as [`Person`])
//! - Books: one [`Book`] record tagged printed, digital or audiobook
//! - [`Publisher`]: owns books and holds purchased stands
//! - [`Stand`]: exhibition space shared by the publishers that bought it
//!
//! # Relationships
//! All cross-entity links are stored as keys on both sides:
//! - Book → authors (ids), publisher (NIT), narrator (id)
//! - Author → books (ISBNs) and distinct publishers (NITs)
//! - Narrator → audiobooks (ISBNs)
//! - Manager → publisher (NIT); Publisher → manager (id)
//! - Publisher ↔ Stand (ids / NITs)
//!
//! Links are only added, never removed.

pub mod book;
pub mod keys;
pub mod person;
pub mod publisher;
pub mod stand;

use std::fmt::{Debug, Display};

pub use book::{Book, BookKind, BookVariant, NewBook};
pub use keys::{validate_id, Isbn, Nit, PersonId, StandId};
pub use person::{Author, Manager, Narrator, NewPerson, Person, PersonDetails, PersonKind};
pub use publisher::{NewPublisher, Publisher};
pub use stand::{NewStand, Stand};

/// Entity with a natural key; registries sort and look up by it
pub trait Keyed: Clone {
    type Key: Ord + Clone + Display + Debug;

    fn key(&self) -> &Self::Key;
}
