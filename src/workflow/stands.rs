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


//! Stand creation and the stand purchase batch
//!
//! A purchase links every selected stand with every selected publisher.
//! All stand ids and publisher NITs are resolved before the first link is
//! written, so a purchase either links the whole cross product or nothing.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{FairError, Result};
use crate::fair::BookFair;
use crate::model::{validate_id, NewStand, Nit, Publisher, Stand, StandId};

use super::validation::{require_positive, traced};

/// Register an exhibition stand
///
/// Checks, in order: id in range, id unused, price positive.
pub fn create_stand(fair: &BookFair, input: &NewStand) -> Result<Stand> {
    traced("create_stand", try_create_stand(fair, input))
}

fn try_create_stand(fair: &BookFair, input: &NewStand) -> Result<Stand> {
    let _guard = fair.lock_mutations();

    validate_id("stand", input.id, fair.config().max_id_digits)?;
    if fair.stands().exists(input.id) {
        return Err(FairError::duplicate("stand", input.id));
    }
    require_positive("stand", "price", input.price)?;

    let stand = Stand::new(input.id, input.price);
    fair.stands().add(stand.clone());
    info!(id = stand.id(), price = stand.price(), "stand created");
    Ok(stand)
}

/// Outcome of a completed purchase: copies of the stands and publishers
/// involved, in selection order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StandPurchase {
    pub stands: Vec<Stand>,
    pub publishers: Vec<Publisher>,
    /// Stand/publisher pairs that were not linked before this purchase
    pub links_added: usize,
}

/// Let every publisher in `publisher_nits` buy every stand in `stand_ids`
///
/// Checks, in order: both selections non-empty, no repeated stand, no
/// repeated publisher, every stand exists, every publisher exists.
pub fn purchase_stands(fair: &BookFair, stand_ids: &[StandId], publisher_nits: &[String]) -> Result<StandPurchase> {
    traced("purchase_stands", try_purchase_stands(fair, stand_ids, publisher_nits))
}

fn try_purchase_stands(fair: &BookFair, stand_ids: &[StandId], publisher_nits: &[String]) -> Result<StandPurchase> {
    let _guard = fair.lock_mutations();

    if stand_ids.is_empty() {
        return Err(FairError::EmptySelection("stand"));
    }
    if publisher_nits.is_empty() {
        return Err(FairError::EmptySelection("publisher"));
    }
    if let Some(repeated) = first_repeated(stand_ids) {
        return Err(FairError::DuplicateSelection {
            entity: "stand",
            key: repeated.to_string(),
        });
    }
    if let Some(repeated) = first_repeated(publisher_nits) {
        return Err(FairError::DuplicateSelection {
            entity: "publisher",
            key: repeated.clone(),
        });
    }

    for &id in stand_ids {
        if !fair.stands().exists(id) {
            return Err(FairError::not_found("Stand", id));
        }
    }
    let mut nits = Vec::with_capacity(publisher_nits.len());
    for raw in publisher_nits {
        // A malformed NIT cannot be registered, so it is reported as unknown
        let nit = Nit::parse(raw)
            .ok()
            .filter(|nit| fair.publishers().exists(nit))
            .ok_or_else(|| FairError::not_found("Publisher", raw))?;
        nits.push(nit);
    }

    let mut links_added = 0;
    for &id in stand_ids {
        for nit in &nits {
            let stand_linked = fair.stands().link_publisher(id, nit.clone());
            let publisher_linked = fair.publishers().link_stand(nit, id);
            if stand_linked || publisher_linked {
                links_added += 1;
            }
        }
    }

    let stands = stand_ids.iter().filter_map(|&id| fair.stands().get(id)).collect();
    let publishers = nits.iter().filter_map(|nit| fair.publishers().get(nit)).collect();
    info!(
        stands = stand_ids.len(),
        publishers = nits.len(),
        links_added,
        "stand purchase completed"
    );

    Ok(StandPurchase {
        stands,
        publishers,
        links_added,
    })
}

fn first_repeated<T: Eq + std::hash::Hash>(items: &[T]) -> Option<&T> {
    let mut seen = HashSet::with_capacity(items.len());
    items.iter().find(|item| !seen.insert(*item))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{NewPerson, NewPublisher};
    use crate::workflow::{create_manager, create_publisher};

    const NIT_A: &str = "900.000.001-1";
    const NIT_B: &str = "900.000.002-2";

    fn fair_with_stands_and_publishers() -> BookFair {
        let fair = BookFair::new();
        for id in [1, 2] {
            create_manager(&fair, &NewPerson::new(id, "Manager", "Test")).unwrap();
        }
        for (nit, manager_id) in [(NIT_A, 1), (NIT_B, 2)] {
            create_publisher(
                &fair,
                &NewPublisher {
                    nit: nit.to_string(),
                    name: "Publisher".to_string(),
                    address: "Address".to_string(),
                    manager_id,
                },
            )
            .unwrap();
        }
        for id in [10, 20] {
            create_stand(&fair, &NewStand { id, price: 100.0 }).unwrap();
        }
        fair
    }

    fn nits(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_create_stand_checks() {
        let fair = BookFair::new();
        create_stand(&fair, &NewStand { id: 1, price: 250.0 }).unwrap();

        let err = create_stand(&fair, &NewStand { id: -1, price: 250.0 }).unwrap_err();
        assert!(matches!(err, FairError::NegativeId { entity: "stand", .. }));

        let err = create_stand(&fair, &NewStand { id: 1_000_000_000_000_000, price: 250.0 }).unwrap_err();
        assert!(matches!(err, FairError::IdTooLong { entity: "stand", .. }));
        assert!(create_stand(&fair, &NewStand { id: 999_999_999_999_999, price: 1.0 }).is_ok());

        // Duplicate id is reported before the bad price
        let err = create_stand(&fair, &NewStand { id: 1, price: 0.0 }).unwrap_err();
        assert!(err.is_duplicate());

        let err = create_stand(&fair, &NewStand { id: 2, price: 0.0 }).unwrap_err();
        assert!(matches!(err, FairError::NonPositiveAmount { field: "price", .. }));

        let err = create_stand(&fair, &NewStand { id: 2, price: f64::INFINITY }).unwrap_err();
        assert!(err.is_malformed_input());
        assert!(!fair.stands().exists(2));
    }

    #[test]
    fn test_purchase_links_cross_product() {
        let fair = fair_with_stands_and_publishers();
        let purchase = purchase_stands(&fair, &[10, 20], &nits(&[NIT_A, NIT_B])).unwrap();

        assert_eq!(purchase.links_added, 4);
        for stand in fair.stands().all() {
            assert_eq!(stand.publisher_quantity(), 2);
        }
        for publisher in fair.publishers().all() {
            assert_eq!(publisher.stands(), &[10, 20]);
        }
    }

    #[test]
    fn test_repeat_purchase_adds_no_links() {
        let fair = fair_with_stands_and_publishers();
        purchase_stands(&fair, &[10], &nits(&[NIT_A])).unwrap();
        let again = purchase_stands(&fair, &[10], &nits(&[NIT_A])).unwrap();

        assert_eq!(again.links_added, 0);
        assert_eq!(fair.stands().get(10).unwrap().publisher_quantity(), 1);
    }

    #[test]
    fn test_selection_checks() {
        let fair = fair_with_stands_and_publishers();

        let err = purchase_stands(&fair, &[], &nits(&[NIT_A])).unwrap_err();
        assert!(matches!(err, FairError::EmptySelection("stand")));

        let err = purchase_stands(&fair, &[10], &[]).unwrap_err();
        assert!(matches!(err, FairError::EmptySelection("publisher")));

        let err = purchase_stands(&fair, &[10, 10], &nits(&[NIT_A])).unwrap_err();
        assert!(matches!(err, FairError::DuplicateSelection { entity: "stand", .. }));

        let err = purchase_stands(&fair, &[10], &nits(&[NIT_A, NIT_A])).unwrap_err();
        assert!(matches!(err, FairError::DuplicateSelection { entity: "publisher", .. }));
    }

    #[test]
    fn test_unknown_reference_leaves_everything_untouched() {
        let fair = fair_with_stands_and_publishers();

        let err = purchase_stands(&fair, &[10, 99], &nits(&[NIT_A])).unwrap_err();
        assert!(err.is_missing_reference());

        let err = purchase_stands(&fair, &[10], &nits(&[NIT_A, "123.456.789-0"])).unwrap_err();
        assert!(err.is_missing_reference());

        let err = purchase_stands(&fair, &[10], &nits(&["not-a-nit"])).unwrap_err();
        assert!(err.is_missing_reference());

        assert_eq!(fair.stands().get(10).unwrap().publisher_quantity(), 0);
        assert_eq!(fair.publishers().get(&Nit::parse(NIT_A).unwrap()).unwrap().stand_quantity(), 0);
    }
}
