//! Publisher entity

use serde::{Deserialize, Serialize};

use super::keys::{Isbn, Nit, PersonId, StandId};
use super::Keyed;

/// Publishing house exhibiting at the fair
///
/// Always has exactly one manager. `books` and `stands` only grow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Publisher {
    nit: Nit,
    name: String,
    address: String,
    manager: PersonId,
    books: Vec<Isbn>,
    stands: Vec<StandId>,
}

impl Publisher {
    pub fn new(nit: Nit, name: impl Into<String>, address: impl Into<String>, manager: PersonId) -> Self {
        Self {
            nit,
            name: name.into(),
            address: address.into(),
            manager,
            books: Vec::new(),
            stands: Vec::new(),
        }
    }

    pub fn nit(&self) -> &Nit {
        &self.nit
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn manager(&self) -> PersonId {
        self.manager
    }

    pub fn books(&self) -> &[Isbn] {
        &self.books
    }

    pub fn book_quantity(&self) -> usize {
        self.books.len()
    }

    pub fn stands(&self) -> &[StandId] {
        &self.stands
    }

    pub fn stand_quantity(&self) -> usize {
        self.stands.len()
    }

    pub fn add_book(&mut self, isbn: Isbn) {
        if !self.books.contains(&isbn) {
            self.books.push(isbn);
        }
    }

    /// Record a purchased stand; returns false if it was already held
    pub fn add_stand(&mut self, stand: StandId) -> bool {
        if self.stands.contains(&stand) {
            return false;
        }
        self.stands.push(stand);
        true
    }
}

impl Keyed for Publisher {
    type Key = Nit;

    fn key(&self) -> &Nit {
        &self.nit
    }
}

/// Input for the publisher creation workflow
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewPublisher {
    pub nit: String,
    pub name: String,
    pub address: String,
    pub manager_id: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_stand_is_idempotent() {
        let mut publisher = Publisher::new(Nit::parse("900.123.456-7").unwrap(), "Norma", "Calle 1", 3);
        assert!(publisher.add_stand(10));
        assert!(!publisher.add_stand(10));
        assert!(publisher.add_stand(11));
        assert_eq!(publisher.stand_quantity(), 2);
        assert_eq!(publisher.stands(), &[10, 11]);
    }
}
