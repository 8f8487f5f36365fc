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


//! Fair configuration
//!
//! Every field has a default, so an empty JSON object is a valid config.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{FairError, Result};
use crate::model::keys::max_id_for_digits;

/// Largest digit count whose upper bound still fits in an `i64`
const MAX_SUPPORTED_ID_DIGITS: u32 = 18;

/// Fair configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FairConfig {
    /// Maximum number of decimal digits in a person or stand id
    pub max_id_digits: u32,

    /// Reject negative pages, copies and audiobook duration
    pub reject_negative_counts: bool,

    /// Default tracing filter for the CLI (e.g. "info", "bookfair_core=debug")
    pub log_filter: String,
}

impl Default for FairConfig {
    fn default() -> Self {
        Self {
            max_id_digits: 15,
            reject_negative_counts: true,
            log_filter: "info".to_string(),
        }
    }
}

impl FairConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: FairConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_file(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_id_digits == 0 || self.max_id_digits > MAX_SUPPORTED_ID_DIGITS {
            return Err(FairError::ConfigurationError(format!(
                "max_id_digits must be between 1 and {} (got {})",
                MAX_SUPPORTED_ID_DIGITS, self.max_id_digits
            )));
        }
        Ok(())
    }

    /// Largest id accepted under `max_id_digits` (999_999_999_999_999 for 15)
    pub fn max_id(&self) -> Result<i64> {
        max_id_for_digits(self.max_id_digits)
    }
}
