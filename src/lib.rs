//! Book fair registry and validation engine
//!
//! Models the persons, books, publishers and stands of a book fair and keeps
//! their relationships consistent as records are created. Start from a
//! [`BookFair`], run the functions in [`workflow`] against it and surface the
//! outcome through [`Response`].

pub mod config;
pub mod error;
pub mod fair;
pub mod model;
pub mod response;
pub mod scenario;
pub mod storage;
pub mod workflow;

pub use config::FairConfig;
pub use error::{ErrorKind, FairError, Result};
pub use fair::{BookFair, FairStats};
pub use response::{Response, StatusCode};
