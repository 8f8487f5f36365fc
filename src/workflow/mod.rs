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


//! Creation, purchase and query workflows
//!
//! Workflows are free functions over a [`BookFair`](crate::fair::BookFair).
//! Each creation workflow validates its input completely, in a fixed order,
//! before touching any registry; the first failed check is returned as a
//! [`FairError`](crate::error::FairError) and nothing is registered.
//!
//! # Check order
//! 1. Key well-formedness (id range, ISBN/NIT pattern)
//! 2. Key uniqueness in the owning registry
//! 3. Required text fields and positive amounts
//! 4. Books only: author list non-empty, resolved, without repeats
//! 5. References: publisher, narrator, manager
//! 6. Build, link both directions, register, return a copy
//!
//! Mutating workflows hold the fair's mutation lock from step 2 through
//! registration.

mod books;
mod persons;
mod publishers;
mod queries;
mod stands;
mod validation;

pub use books::{create_audiobook, create_digital_book, create_printed_book};
pub use persons::{create_author, create_manager, create_narrator};
pub use publishers::create_publisher;
pub use queries::{
    all_audiobooks, all_authors, all_books, all_digital_books, all_managers, all_narrators, all_persons,
    all_printed_books, all_publishers, all_stands, author_by_id, authors_with_most_distinct_publishers,
    books_by_author, books_by_format, publisher_by_nit,
};
pub use stands::{create_stand, purchase_stands, StandPurchase};
