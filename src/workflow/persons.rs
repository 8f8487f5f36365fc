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


//! Author, manager and narrator creation
//!
//! All three share the same checks, in order: id in range, id not yet used
//! in the subtype's partition, first and last name not blank.

use tracing::info;

use crate::error::Result;
use crate::fair::BookFair;
use crate::model::{Author, Manager, Narrator, NewPerson};

use super::validation::{person_details, traced};

pub fn create_author(fair: &BookFair, input: &NewPerson) -> Result<Author> {
    traced("create_author", try_create_author(fair, input))
}

fn try_create_author(fair: &BookFair, input: &NewPerson) -> Result<Author> {
    let _guard = fair.lock_mutations();
    let persons = fair.persons();
    let details = person_details(fair.config(), "author", input, |id| persons.exists_author(id))?;

    let author = Author::new(details);
    persons.add_author(author.clone());
    info!(id = author.id(), "author created");
    Ok(author)
}

pub fn create_manager(fair: &BookFair, input: &NewPerson) -> Result<Manager> {
    traced("create_manager", try_create_manager(fair, input))
}

fn try_create_manager(fair: &BookFair, input: &NewPerson) -> Result<Manager> {
    let _guard = fair.lock_mutations();
    let persons = fair.persons();
    let details = person_details(fair.config(), "manager", input, |id| persons.exists_manager(id))?;

    let manager = Manager::new(details);
    persons.add_manager(manager.clone());
    info!(id = manager.id(), "manager created");
    Ok(manager)
}

pub fn create_narrator(fair: &BookFair, input: &NewPerson) -> Result<Narrator> {
    traced("create_narrator", try_create_narrator(fair, input))
}

fn try_create_narrator(fair: &BookFair, input: &NewPerson) -> Result<Narrator> {
    let _guard = fair.lock_mutations();
    let persons = fair.persons();
    let details = person_details(fair.config(), "narrator", input, |id| persons.exists_narrator(id))?;

    let narrator = Narrator::new(details);
    persons.add_narrator(narrator.clone());
    info!(id = narrator.id(), "narrator created");
    Ok(narrator)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FairError;

    #[test]
    fn test_create_author_stores_trimmed_names() {
        let fair = BookFair::new();
        let author = create_author(&fair, &NewPerson::new(10, "  Jorge ", " Isaacs ")).unwrap();

        assert_eq!(author.details().firstname(), "Jorge");
        assert_eq!(author.details().lastname(), "Isaacs");
        assert_eq!(fair.persons().get_author(10).unwrap(), author);
    }

    #[test]
    fn test_duplicate_id_rejected_within_subtype() {
        let fair = BookFair::new();
        create_manager(&fair, &NewPerson::new(1, "Eva", "Sol")).unwrap();

        let err = create_manager(&fair, &NewPerson::new(1, "Other", "Name")).unwrap_err();
        assert!(matches!(err, FairError::DuplicateKey { entity: "manager", .. }));
        assert_eq!(fair.persons().all_managers().len(), 1);
    }

    #[test]
    fn test_same_id_allowed_across_subtypes() {
        let fair = BookFair::new();
        create_author(&fair, &NewPerson::new(1, "Ana", "Rios")).unwrap();
        create_manager(&fair, &NewPerson::new(1, "Eva", "Sol")).unwrap();
        create_narrator(&fair, &NewPerson::new(1, "Luz", "Vega")).unwrap();

        assert_eq!(fair.persons().all_persons().len(), 3);
    }

    #[test]
    fn test_id_range_checks() {
        let fair = BookFair::new();
        assert!(create_narrator(&fair, &NewPerson::new(999_999_999_999_999, "A", "B")).is_ok());

        let err = create_narrator(&fair, &NewPerson::new(1_000_000_000_000_000, "A", "B")).unwrap_err();
        assert!(matches!(err, FairError::IdTooLong { .. }));

        let err = create_narrator(&fair, &NewPerson::new(-5, "A", "B")).unwrap_err();
        assert!(matches!(err, FairError::NegativeId { .. }));
    }

    #[test]
    fn test_blank_lastname_rejected_without_registering() {
        let fair = BookFair::new();
        let err = create_author(&fair, &NewPerson::new(3, "Ana", "   ")).unwrap_err();
        assert!(err.is_malformed_input());
        assert!(!fair.persons().exists_author(3));
    }
}
