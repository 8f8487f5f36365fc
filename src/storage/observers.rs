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


//! Change notification for registries
//!
//! Observers are zero-argument callbacks: they learn that a registry changed
//! and re-query whatever they display. Delivery is synchronous, in
//! registration order, on the thread that performed the insert.

use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::error;

/// Callback type for registry change notifications
pub type ChangeCallback = Arc<dyn Fn() + Send + Sync>;

/// Handle returned by `add_observer`, used to remove the observer again
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverId(u64);

/// Ordered list of observers for one registry
pub struct ObserverList {
    /// Registry name, for log fields
    registry: &'static str,
    next_id: AtomicU64,
    callbacks: RwLock<Vec<(ObserverId, ChangeCallback)>>,
}

impl fmt::Debug for ObserverList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObserverList")
            .field("registry", &self.registry)
            .field("observers_count", &self.callbacks.read().len())
            .finish()
    }
}

impl ObserverList {
    pub fn new(registry: &'static str) -> Self {
        Self {
            registry,
            next_id: AtomicU64::new(0),
            callbacks: RwLock::new(Vec::new()),
        }
    }

    pub fn add(&self, callback: ChangeCallback) -> ObserverId {
        let id = ObserverId(self.next_id.fetch_add(1, Ordering::Relaxed));
        self.callbacks.write().push((id, callback));
        id
    }

    /// Returns false if `id` was not registered
    pub fn remove(&self, id: ObserverId) -> bool {
        let mut callbacks = self.callbacks.write();
        let before = callbacks.len();
        callbacks.retain(|(existing, _)| *existing != id);
        callbacks.len() != before
    }

    pub fn len(&self) -> usize {
        self.callbacks.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.callbacks.read().is_empty()
    }

    /// Run every observer once; returns how many of them panicked
    ///
    /// The list is snapshotted first, so observers may add or remove
    /// observers (or read the registry) without deadlocking. A panicking
    /// observer is logged and skipped; the rest still run.
    pub fn notify(&self) -> usize {
        let snapshot: Vec<(ObserverId, ChangeCallback)> = self
            .callbacks
            .read()
            .iter()
            .map(|(id, cb)| (*id, Arc::clone(cb)))
            .collect();

        let mut failures = 0;
        for (id, callback) in snapshot {
            if panic::catch_unwind(AssertUnwindSafe(|| callback())).is_err() {
                failures += 1;
                error!(registry = self.registry, observer = ?id, "registry observer panicked");
            }
        }
        failures
    }
}
