//! Exhibition stand entity

use serde::{Deserialize, Serialize};

use super::keys::{Nit, StandId};
use super::Keyed;

/// Exhibition stand; may be shared by several publishers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stand {
    id: StandId,
    price: f64,
    publishers: Vec<Nit>,
}

impl Stand {
    pub fn new(id: StandId, price: f64) -> Self {
        Self {
            id,
            price,
            publishers: Vec::new(),
        }
    }

    pub fn id(&self) -> StandId {
        self.id
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn publishers(&self) -> &[Nit] {
        &self.publishers
    }

    pub fn publisher_quantity(&self) -> usize {
        self.publishers.len()
    }

    /// Record a buying publisher; returns false if it already held the stand
    pub fn add_publisher(&mut self, publisher: Nit) -> bool {
        if self.publishers.contains(&publisher) {
            return false;
        }
        self.publishers.push(publisher);
        true
    }
}

impl Keyed for Stand {
    type Key = StandId;

    fn key(&self) -> &StandId {
        &self.id
    }
}

/// Input for the stand creation workflow
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewStand {
    pub id: i64,
    pub price: f64,
}
