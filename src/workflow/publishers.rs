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


//! Publisher creation

use tracing::{info, warn};

use crate::error::{FairError, Result};
use crate::fair::BookFair;
use crate::model::{NewPublisher, Nit, Publisher};

use super::validation::{require_text, traced};

/// Register a publisher and point its manager back at it
///
/// Checks, in order: NIT format, NIT unused, name, address, manager exists.
pub fn create_publisher(fair: &BookFair, input: &NewPublisher) -> Result<Publisher> {
    traced("create_publisher", try_create_publisher(fair, input))
}

fn try_create_publisher(fair: &BookFair, input: &NewPublisher) -> Result<Publisher> {
    let _guard = fair.lock_mutations();

    let nit = Nit::parse(&input.nit)?;
    if fair.publishers().exists(&nit) {
        return Err(FairError::duplicate("publisher", &nit));
    }

    let name = require_text("publisher", "name", &input.name)?;
    let address = require_text("publisher", "address", &input.address)?;

    let manager = fair
        .persons()
        .get_manager(input.manager_id)
        .ok_or_else(|| FairError::not_found("Manager", input.manager_id))?;
    if let Some(previous) = manager.publisher() {
        warn!(manager = manager.id(), previous = %previous, next = %nit, "manager already manages a publisher; reassigning");
    }

    let publisher = Publisher::new(nit.clone(), name, address, manager.id());
    fair.persons().assign_publisher_to_manager(manager.id(), nit.clone());
    fair.publishers().add(publisher.clone());
    info!(nit = %nit, manager = manager.id(), "publisher created");
    Ok(publisher)
}
