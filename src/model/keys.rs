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


//! Identifying keys
//!
//! ISBNs and NITs are newtypes that can only be built through their pattern
//! check, so a registry never holds a malformed key. Person and stand ids stay
//! plain integers and are range-checked by [`validate_id`].

use std::fmt;
use std::str::FromStr;

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{FairError, Result};

/// Person ids (authors, managers, narrators)
pub type PersonId = i64;

/// Exhibition stand ids
pub type StandId = i64;

lazy_static! {
    static ref ISBN_PATTERN: Regex =
        Regex::new(r"^[0-9]{3}-[0-9]-[0-9]{2}-[0-9]{6}-[0-9]$").expect("valid ISBN pattern");
    static ref NIT_PATTERN: Regex =
        Regex::new(r"^[0-9]{3}\.[0-9]{3}\.[0-9]{3}-[0-9]$").expect("valid NIT pattern");
}

/// Largest id with at most `max_digits` digits
///
/// `ConfigurationError` when `10^max_digits` does not fit in an `i64`.
pub(crate) fn max_id_for_digits(max_digits: u32) -> Result<i64> {
    10_i64
        .checked_pow(max_digits)
        .map(|bound| bound - 1)
        .ok_or_else(|| FairError::ConfigurationError(format!("max_id_digits {} exceeds the i64 range", max_digits)))
}

/// Check that `id` is non-negative and has at most `max_digits` digits
pub fn validate_id(entity: &'static str, id: i64, max_digits: u32) -> Result<()> {
    let max = max_id_for_digits(max_digits)?;
    if id < 0 {
        return Err(FairError::NegativeId { entity, id });
    }
    if id > max {
        return Err(FairError::IdTooLong {
            entity,
            id,
            max_digits,
        });
    }
    Ok(())
}

/// Book ISBN in the form `DDD-D-DD-DDDDDD-D`
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Isbn(String);

impl Isbn {
    pub fn parse(raw: &str) -> Result<Self> {
        if raw.trim().is_empty() {
            return Err(FairError::missing_field("book", "ISBN"));
        }
        if !ISBN_PATTERN.is_match(raw) {
            return Err(FairError::InvalidIsbn(raw.to_string()));
        }
        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Publisher tax id in the form `DDD.DDD.DDD-D`
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Nit(String);

impl Nit {
    pub fn parse(raw: &str) -> Result<Self> {
        if raw.trim().is_empty() {
            return Err(FairError::missing_field("publisher", "NIT"));
        }
        if !NIT_PATTERN.is_match(raw) {
            return Err(FairError::InvalidNit(raw.to_string()));
        }
        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

macro_rules! string_key_impls {
    ($ty:ident) => {
        impl TryFrom<String> for $ty {
            type Error = FairError;

            fn try_from(value: String) -> Result<Self> {
                Self::parse(&value)
            }
        }

        impl From<$ty> for String {
            fn from(key: $ty) -> String {
                key.0
            }
        }

        impl FromStr for $ty {
            type Err = FairError;

            fn from_str(s: &str) -> Result<Self> {
                Self::parse(s)
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

string_key_impls!(Isbn);
string_key_impls!(Nit);
