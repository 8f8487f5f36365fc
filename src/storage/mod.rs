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


//! In-memory entity registries
//!
//! Each registry is the sole owner of one entity kind's records and exposes
//! add / lookup / sorted listing plus change notification. Registries do not
//! validate anything: uniqueness and reference checks belong to the workflows
//! that call them.
//!
//! # Registries
//! - `PersonRegistry`: authors, managers and narrators, one partition each
//! - `BookRegistry`: books of every variant, with variant/format/author filters
//! - `PublisherRegistry`: publishers keyed by NIT
//! - `StandRegistry`: stands keyed by id
//!
//! # Locking
//! - One `parking_lot::RwLock` per collection, held only for the duration of
//!   a single read, insert or link update
//! - Observers are notified after the write lock is released
//!
//! # Usage Example
//! ```
//! use std::sync::Arc;
//! use bookfair_core::model::Stand;
//! use bookfair_core::storage::StandRegistry;
//!
//! let stands = StandRegistry::new();
//! stands.add_observer(Arc::new(|| println!("stands changed")));
//! stands.add(Stand::new(1, 250.0));
//! assert!(stands.exists(1));
//! ```

pub mod books;
pub mod collection;
pub mod observers;
pub mod persons;
pub mod publishers;
pub mod stands;

// Re-export commonly used types
pub use books::BookRegistry;
pub use collection::Collection;
pub use observers::{ChangeCallback, ObserverId, ObserverList};
pub use persons::PersonRegistry;
pub use publishers::PublisherRegistry;
pub use stands::StandRegistry;
