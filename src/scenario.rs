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


//! Scripted fair setup
//!
//! A [`Scenario`] is a JSON document listing creations and purchases. It is
//! applied in a fixed order (persons, publishers, stands, books, purchases)
//! and every step produces one [`StepOutcome`], whether it succeeded or not.
//! A rejected step does not stop the remaining ones.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::Result;
use crate::fair::BookFair;
use crate::model::{NewBook, NewPerson, NewPublisher, NewStand};
use crate::response::{Response, StatusCode};
use crate::workflow;

/// Book creation step; `variant` selects the workflow
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "variant")]
pub enum BookStep {
    Printed {
        book: NewBook,
        pages: i32,
        copies: i32,
    },
    Digital {
        book: NewBook,
        #[serde(default)]
        hyperlink: Option<String>,
    },
    Audiobook {
        book: NewBook,
        duration: i32,
        narrator_id: i64,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PurchaseStep {
    pub stand_ids: Vec<i64>,
    pub publisher_nits: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Scenario {
    pub authors: Vec<NewPerson>,
    pub managers: Vec<NewPerson>,
    pub narrators: Vec<NewPerson>,
    pub publishers: Vec<NewPublisher>,
    pub stands: Vec<NewStand>,
    pub books: Vec<BookStep>,
    pub purchases: Vec<PurchaseStep>,
}

/// Result of one scenario step
#[derive(Debug, Clone, Serialize)]
pub struct StepOutcome {
    pub operation: &'static str,
    /// Key of the record the step targeted
    pub key: String,
    pub status: StatusCode,
    pub message: String,
}

impl StepOutcome {
    fn from_response<T>(operation: &'static str, key: impl Into<String>, response: Response<T>) -> Self {
        Self {
            operation,
            key: key.into(),
            status: response.status,
            message: response.message,
        }
    }

    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }
}

impl Scenario {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_file(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Run every step against `fair`, in order
    pub fn apply(&self, fair: &BookFair) -> Vec<StepOutcome> {
        let mut outcomes = Vec::new();

        for input in &self.authors {
            let response =
                Response::from_result(workflow::create_author(fair, input), StatusCode::Created, "Author created");
            outcomes.push(StepOutcome::from_response("create_author", input.id.to_string(), response));
        }
        for input in &self.managers {
            let response =
                Response::from_result(workflow::create_manager(fair, input), StatusCode::Created, "Manager created");
            outcomes.push(StepOutcome::from_response("create_manager", input.id.to_string(), response));
        }
        for input in &self.narrators {
            let response = Response::from_result(
                workflow::create_narrator(fair, input),
                StatusCode::Created,
                "Narrator created",
            );
            outcomes.push(StepOutcome::from_response("create_narrator", input.id.to_string(), response));
        }
        for input in &self.publishers {
            let response = Response::from_result(
                workflow::create_publisher(fair, input),
                StatusCode::Created,
                "Publisher created",
            );
            outcomes.push(StepOutcome::from_response("create_publisher", input.nit.as_str(), response));
        }
        for input in &self.stands {
            let response =
                Response::from_result(workflow::create_stand(fair, input), StatusCode::Created, "Stand created");
            outcomes.push(StepOutcome::from_response("create_stand", input.id.to_string(), response));
        }
        for step in &self.books {
            outcomes.push(apply_book(fair, step));
        }
        for step in &self.purchases {
            let response = Response::from_result(
                workflow::purchase_stands(fair, &step.stand_ids, &step.publisher_nits),
                StatusCode::Ok,
                "Stands purchased",
            );
            let key = format!("{:?} x {:?}", step.stand_ids, step.publisher_nits);
            outcomes.push(StepOutcome::from_response("purchase_stands", key, response));
        }

        let succeeded = outcomes.iter().filter(|o| o.is_success()).count();
        info!(steps = outcomes.len(), succeeded, "scenario applied");
        outcomes
    }
}

fn apply_book(fair: &BookFair, step: &BookStep) -> StepOutcome {
    let (operation, book, result) = match step {
        BookStep::Printed { book, pages, copies } => (
            "create_printed_book",
            book,
            workflow::create_printed_book(fair, book, *pages, *copies),
        ),
        BookStep::Digital { book, hyperlink } => (
            "create_digital_book",
            book,
            workflow::create_digital_book(fair, book, hyperlink.as_deref()),
        ),
        BookStep::Audiobook {
            book,
            duration,
            narrator_id,
        } => (
            "create_audiobook",
            book,
            workflow::create_audiobook(fair, book, *duration, *narrator_id),
        ),
    };
    let response = Response::from_result(result, StatusCode::Created, "Book created");
    StepOutcome::from_response(operation, book.isbn.as_str(), response)
}
