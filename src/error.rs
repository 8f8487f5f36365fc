//! Error types for BookFair Core
//!
//! This module defines error types using thiserror for ergonomic error handling.
//! Every rejection a workflow can produce is a variant here, and every variant
//! belongs to exactly one category of the fair's error taxonomy:
//!
//! ### Malformed input (surfaces as `BadRequest`)
//! - Blank required text → `MissingRequiredField`
//! - Id outside `[0, 10^digits)` → `NegativeId`, `IdTooLong`
//! - Key failing its exact pattern → `InvalidIsbn`, `InvalidNit`
//! - Non-positive or non-finite money → `NonPositiveAmount`
//! - Negative page/copy/minute counts → `NegativeCount`
//! - Empty author list or purchase selection → `EmptySelection`
//!
//! ### Duplicate key (surfaces as `Conflict`)
//! - Key already registered → `DuplicateKey`
//! - Same author twice on one book → `DuplicateAuthor`
//! - Same stand/publisher twice in one purchase → `DuplicateSelection`
//!
//! ### Missing reference (surfaces as `NotFound`)
//! - Author, manager, narrator, publisher or stand does not resolve → `NotFound`

use std::fmt::Display;

use thiserror::Error;

use crate::response::StatusCode;

/// Result type alias using our FairError type
pub type Result<T> = std::result::Result<T, FairError>;

/// Main error type for BookFair Core
#[derive(Error, Debug)]
pub enum FairError {
    // ===== Malformed Input =====

    /// A required text field was empty after trimming
    #[error("The {entity} {field} must not be empty")]
    MissingRequiredField {
        entity: &'static str,
        field: &'static str,
    },

    /// Numeric id below zero
    #[error("The {entity} id must be greater than or equal to 0 (got {id})")]
    NegativeId { entity: &'static str, id: i64 },

    /// Numeric id with more digits than allowed
    #[error("The {entity} id must have at most {max_digits} digits (got {id})")]
    IdTooLong {
        entity: &'static str,
        id: i64,
        max_digits: u32,
    },

    /// ISBN not matching `DDD-D-DD-DDDDDD-D`
    #[error("ISBN '{0}' must have the format XXX-X-XX-XXXXXX-X")]
    InvalidIsbn(String),

    /// NIT not matching `DDD.DDD.DDD-D`
    #[error("NIT '{0}' must have the format XXX.XXX.XXX-X")]
    InvalidNit(String),

    /// Book value or stand price that is zero, negative or not finite
    #[error("The {entity} {field} must be a finite amount greater than 0 (got {value})")]
    NonPositiveAmount {
        entity: &'static str,
        field: &'static str,
        value: f64,
    },

    /// Pages, copies or duration below zero
    #[error("The book {field} must not be negative (got {value})")]
    NegativeCount { field: &'static str, value: i32 },

    /// A list that must contain at least one element was empty
    #[error("At least one {0} must be selected")]
    EmptySelection(&'static str),

    // ===== Duplicate Keys =====

    /// Identifying key already present in the owning registry
    #[error("A {entity} with key {key} already exists")]
    DuplicateKey { entity: &'static str, key: String },

    /// The same author appears twice in one book's author list
    #[error("Author {0} is listed more than once")]
    DuplicateAuthor(i64),

    /// The same stand or publisher appears twice in one purchase
    #[error("The {entity} {key} is selected more than once")]
    DuplicateSelection { entity: &'static str, key: String },

    // ===== Missing References =====

    /// Referenced entity does not exist in its registry
    #[error("{entity} not found: {key}")]
    NotFound { entity: &'static str, key: String },

    // ===== Configuration / Infrastructure =====

    /// Configuration could not be used
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    #[error("JSON serialization error: {0}")]
    SerdeJsonError(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Taxonomy bucket of a [`FairError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum ErrorKind {
    MalformedInput,
    DuplicateKey,
    MissingReference,
    /// Not produced by workflows; configuration and I/O only
    Internal,
}

impl ErrorKind {
    /// Status code this kind surfaces as at the presentation boundary
    pub fn status(self) -> StatusCode {
        match self {
            ErrorKind::MalformedInput => StatusCode::BadRequest,
            ErrorKind::DuplicateKey => StatusCode::Conflict,
            ErrorKind::MissingReference => StatusCode::NotFound,
            ErrorKind::Internal => StatusCode::InternalError,
        }
    }
}

// Helper methods for creating common errors
impl FairError {
    pub fn missing_field(entity: &'static str, field: &'static str) -> Self {
        FairError::MissingRequiredField { entity, field }
    }

    pub fn duplicate<K: Display>(entity: &'static str, key: K) -> Self {
        FairError::DuplicateKey {
            entity,
            key: key.to_string(),
        }
    }

    pub fn not_found<K: Display>(entity: &'static str, key: K) -> Self {
        FairError::NotFound {
            entity,
            key: key.to_string(),
        }
    }

    /// Classify this error into the fair's taxonomy
    pub fn kind(&self) -> ErrorKind {
        match self {
            FairError::MissingRequiredField { .. }
            | FairError::NegativeId { .. }
            | FairError::IdTooLong { .. }
            | FairError::InvalidIsbn(_)
            | FairError::InvalidNit(_)
            | FairError::NonPositiveAmount { .. }
            | FairError::NegativeCount { .. }
            | FairError::EmptySelection(_) => ErrorKind::MalformedInput,
            FairError::DuplicateKey { .. }
            | FairError::DuplicateAuthor(_)
            | FairError::DuplicateSelection { .. } => ErrorKind::DuplicateKey,
            FairError::NotFound { .. } => ErrorKind::MissingReference,
            FairError::ConfigurationError(_)
            | FairError::SerdeJsonError(_)
            | FairError::IoError(_) => ErrorKind::Internal,
        }
    }

    pub fn is_malformed_input(&self) -> bool {
        self.kind() == ErrorKind::MalformedInput
    }

    pub fn is_duplicate(&self) -> bool {
        self.kind() == ErrorKind::DuplicateKey
    }

    pub fn is_missing_reference(&self) -> bool {
        self.kind() == ErrorKind::MissingReference
    }

    /// Get user-friendly error message suitable for display
    ///
    /// This is the message [`Response::from_error`](crate::response::Response::from_error)
    /// puts in the envelope. Falls back to the `Display` text for variants whose message already
    /// reads well on its own.
    pub fn user_message(&self) -> String {
        match self {
            FairError::DuplicateKey { entity, key } => {
                format!("A {} with key {} is already registered. Choose a different key.", entity, key)
            }
            FairError::NotFound { entity, key } => {
                format!("No {} is registered with key {}. Register it first.", entity.to_lowercase(), key)
            }
            FairError::IdTooLong { entity, max_digits, .. } => {
                format!("The {} id can have at most {} digits.", entity, max_digits)
            }
            _ => self.to_string(),
        }
    }
}

// ===== IMPLEMENTATION NOTES =====
//
// - Workflows validate completely before mutating; the first failing check
//   is returned and no registry is touched.
// - Registries never return errors. "Not found" is `None` there and becomes
//   `FairError::NotFound` only when a workflow needs the reference.
// - `kind()` is the single place that maps variants to the taxonomy; the
//   presentation envelope derives its status code from it.
