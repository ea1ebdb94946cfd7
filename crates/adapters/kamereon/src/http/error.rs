// -------------------------------------------------------------------------------------------------
//  Copyright (C) 2015-2025 Nautech Systems Pty Ltd. All rights reserved.
//  https://nautechsystems.io
//
//  Licensed under the GNU Lesser General Public License Version 3.0 (the "License");
//  You may not use this file except in compliance with the License.
//  You may obtain a copy of the License at https://www.gnu.org/licenses/lgpl-3.0.en.html
//
//  Unless required by applicable law or agreed to in writing, software
//  distributed under the License is distributed on an "AS IS" BASIS,
//  WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//  See the License for the specific language governing permissions and
//  limitations under the License.
// -------------------------------------------------------------------------------------------------

//! Error structures for the Kamereon integration.
//!
//! Vendor-reported failures are normalized into a single [`KamereonResponseError`]
//! regardless of their code; callers branch on [`KamereonResponseError::error_code`]
//! (or its derived [`KamereonErrorKind`]) rather than on distinct error types.

use thiserror::Error;

use crate::common::enums::{KamereonErrorFamily, KamereonErrorKind};

/// A functional or technical error reported by the Kamereon API.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{error_code}: {error_details}")]
pub struct KamereonResponseError {
    /// The raw vendor error code, e.g. `err.func.wired.overloaded`.
    pub error_code: String,
    /// The human-readable description derived from the vendor error entry.
    pub error_details: String,
}

impl KamereonResponseError {
    /// Creates a new [`KamereonResponseError`] instance.
    #[must_use]
    pub fn new(error_code: impl Into<String>, error_details: impl Into<String>) -> Self {
        Self {
            error_code: error_code.into(),
            error_details: error_details.into(),
        }
    }

    /// Returns the classification of the vendor error code.
    #[must_use]
    pub fn kind(&self) -> KamereonErrorKind {
        KamereonErrorKind::from_code(&self.error_code)
    }

    /// Returns the family (functional or technical) of the vendor error code.
    #[must_use]
    pub fn family(&self) -> KamereonErrorFamily {
        KamereonErrorFamily::from_code(&self.error_code)
    }
}

/// A typed error enumeration for parsing and checking Kamereon responses.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum KamereonError {
    /// The payload is not JSON or does not match the expected response shape.
    #[error("Deserialization error: {0}")]
    Deserialization(String),
    /// The vendor reported an error in the response `errors` list.
    #[error("Kamereon error {0}")]
    Response(#[from] KamereonResponseError),
}

impl KamereonError {
    /// Returns the vendor error, if this is a [`KamereonError::Response`].
    #[must_use]
    pub fn as_response(&self) -> Option<&KamereonResponseError> {
        match self {
            Self::Response(e) => Some(e),
            Self::Deserialization(_) => None,
        }
    }

    /// Returns the raw vendor error code, if this is a vendor-reported error.
    #[must_use]
    pub fn error_code(&self) -> Option<&str> {
        self.as_response().map(|e| e.error_code.as_str())
    }
}

// Allow use of the `?` operator on `serde_json` results inside the parsing
// functions by converting them into our typed error.
impl From<serde_json::Error> for KamereonError {
    fn from(error: serde_json::Error) -> Self {
        Self::Deserialization(error.to_string())
    }
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////
