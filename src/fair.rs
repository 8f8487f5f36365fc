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


//! Composition root
//!
//! [`BookFair`] owns one instance of every registry plus the configuration.
//! Workflows receive it by reference; tests build a fresh one per scenario
//! instead of sharing global state.

use parking_lot::{ReentrantMutex, ReentrantMutexGuard};
use serde::{Deserialize, Serialize};

use crate::config::FairConfig;
use crate::error::Result;
use crate::storage::{BookRegistry, PersonRegistry, PublisherRegistry, StandRegistry};

/// All registries of one fair
#[derive(Debug)]
pub struct BookFair {
    config: FairConfig,
    persons: PersonRegistry,
    books: BookRegistry,
    publishers: PublisherRegistry,
    stands: StandRegistry,
    /// Serializes workflows from their uniqueness checks through
    /// registration. Reentrant so an observer may run a workflow.
    mutation: ReentrantMutex<()>,
}

/// Record counts per registry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FairStats {
    pub persons: usize,
    pub books: usize,
    pub publishers: usize,
    pub stands: usize,
}

impl Default for BookFair {
    fn default() -> Self {
        Self::new()
    }
}

impl BookFair {
    /// Empty fair with the default configuration
    pub fn new() -> Self {
        Self::build(FairConfig::default())
    }

    /// Empty fair with an explicit configuration
    ///
    /// # Errors
    /// Returns `ConfigurationError` if the configuration is out of range.
    pub fn with_config(config: FairConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::build(config))
    }

    fn build(config: FairConfig) -> Self {
        Self {
            config,
            persons: PersonRegistry::new(),
            books: BookRegistry::new(),
            publishers: PublisherRegistry::new(),
            stands: StandRegistry::new(),
            mutation: ReentrantMutex::new(()),
        }
    }

    pub fn config(&self) -> &FairConfig {
        &self.config
    }

    pub fn persons(&self) -> &PersonRegistry {
        &self.persons
    }

    pub fn books(&self) -> &BookRegistry {
        &self.books
    }

    pub fn publishers(&self) -> &PublisherRegistry {
        &self.publishers
    }

    pub fn stands(&self) -> &StandRegistry {
        &self.stands
    }

    pub(crate) fn lock_mutations(&self) -> ReentrantMutexGuard<'_, ()> {
        self.mutation.lock()
    }

    pub fn stats(&self) -> FairStats {
        FairStats {
            persons: self.persons.len(),
            books: self.books.len(),
            publishers: self.publishers.len(),
            stands: self.stands.len(),
        }
    }

    /// Drop every record in every registry; observers stay registered
    pub fn clear(&self) {
        let _guard = self.lock_mutations();
        self.persons.clear();
        self.books.clear();
        self.publishers.clear();
        self.stands.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Stand;

    #[test]
    fn test_with_config_validates() {
        let config = FairConfig {
            max_id_digits: 0,
            ..FairConfig::default()
        };
        assert!(BookFair::with_config(config).is_err());
    }

    #[test]
    fn test_instances_are_isolated() {
        let first = BookFair::new();
        let second = BookFair::new();
        first.stands().add(Stand::new(1, 100.0));

        assert_eq!(first.stats().stands, 1);
        assert_eq!(second.stats().stands, 0);
    }

    #[test]
    fn test_clear_resets_all_registries() {
        let fair = BookFair::new();
        fair.stands().add(Stand::new(1, 100.0));
        fair.clear();
        assert_eq!(
            fair.stats(),
            FairStats {
                persons: 0,
                books: 0,
                publishers: 0,
                stands: 0
            }
        );
    }
}
