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


//! Presentation boundary envelope
//!
//! Workflows return `Result<T>`; a presentation layer that wants a flat
//! status/message/data triple wraps them with [`Response::from_result`].

use serde::{Deserialize, Serialize};

use crate::error::FairError;

/// Outcome kind of a boundary call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u16)]
pub enum StatusCode {
    Ok = 200,
    Created = 201,
    BadRequest = 400,
    NotFound = 404,
    Conflict = 409,
    InternalError = 500,
}

impl StatusCode {
    pub fn code(self) -> u16 {
        self as u16
    }

    pub fn is_success(self) -> bool {
        matches!(self, StatusCode::Ok | StatusCode::Created)
    }
}

/// Status, human-readable message and, on success, the returned copy
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Response<T> {
    pub status: StatusCode,
    pub message: String,
    pub data: Option<T>,
}

impl<T> Response<T> {
    pub fn ok(message: impl Into<String>, data: T) -> Self {
        Self {
            status: StatusCode::Ok,
            message: message.into(),
            data: Some(data),
        }
    }

    pub fn created(message: impl Into<String>, data: T) -> Self {
        Self {
            status: StatusCode::Created,
            message: message.into(),
            data: Some(data),
        }
    }

    /// Rejection envelope; status follows the error's taxonomy
    pub fn from_error(error: &FairError) -> Self {
        Self {
            status: error.kind().status(),
            message: error.user_message(),
            data: None,
        }
    }

    /// Wrap a workflow result, using `success` as status for the `Ok` case
    pub fn from_result(
        result: crate::Result<T>,
        success: StatusCode,
        message: impl Into<String>,
    ) -> Self {
        match result {
            Ok(data) => Self {
                status: success,
                message: message.into(),
                data: Some(data),
            },
            Err(e) => Self::from_error(&e),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }
}
