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


//! Validation helpers shared by the creation workflows

use tracing::warn;

use crate::config::FairConfig;
use crate::error::{FairError, Result};
use crate::model::{validate_id, NewPerson, PersonDetails, PersonId};

/// Trimmed value of a required text field
pub(crate) fn require_text<'a>(entity: &'static str, field: &'static str, value: &'a str) -> Result<&'a str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(FairError::missing_field(entity, field));
    }
    Ok(trimmed)
}

/// Money must be finite and strictly positive
pub(crate) fn require_positive(entity: &'static str, field: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(FairError::NonPositiveAmount { entity, field, value })
    }
}

pub(crate) fn require_count(config: &FairConfig, field: &'static str, value: i32) -> Result<()> {
    if config.reject_negative_counts && value < 0 {
        return Err(FairError::NegativeCount { field, value });
    }
    Ok(())
}

/// Steps 1-3 of every person workflow: id shape, id uniqueness, names
pub(crate) fn person_details<F>(
    config: &FairConfig,
    entity: &'static str,
    input: &NewPerson,
    exists: F,
) -> Result<PersonDetails>
where
    F: Fn(PersonId) -> bool,
{
    validate_id(entity, input.id, config.max_id_digits)?;
    if exists(input.id) {
        return Err(FairError::duplicate(entity, input.id));
    }
    let firstname = require_text(entity, "first name", &input.firstname)?;
    let lastname = require_text(entity, "last name", &input.lastname)?;
    Ok(PersonDetails::new(input.id, firstname, lastname))
}

/// Log a rejected workflow call and pass the result through
pub(crate) fn traced<T>(operation: &'static str, result: Result<T>) -> Result<T> {
    if let Err(e) = &result {
        warn!(operation, kind = ?e.kind(), error = %e, "workflow rejected input");
    }
    result
}
