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

//! Data transfer objects for deserializing Kamereon HTTP API payloads.
//!
//! Every Kamereon response shares the same envelope: an optional `data` payload and an
//! optional `errors` list. Fields not modelled here are ignored so that additions on
//! the vendor side do not break parsing.

use serde::{Deserialize, Serialize, de::DeserializeOwned};
use serde_json::Value;

use crate::{
    common::{
        enums::{KamereonErrorFamily, KamereonErrorKind},
        parse::{deserialize_empty_string_as_none, parse_error_message},
    },
    http::error::{KamereonError, KamereonResponseError},
};

/// A single entry of the Kamereon `errors` list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KamereonErrorEntry {
    /// Vendor error code, e.g. `err.func.400`.
    pub error_code: String,
    /// Free text, or a nested JSON document describing the failure.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_empty_string_as_none"
    )]
    pub error_message: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_empty_string_as_none"
    )]
    pub title: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_empty_string_as_none"
    )]
    pub detail: Option<String>,
}

impl KamereonErrorEntry {
    /// Returns the human-readable description of this entry.
    ///
    /// Resolution order is the direct `detail`, then the direct `title`, then the
    /// description extracted from `errorMessage` (see [`parse_error_message`]). An entry
    /// carrying none of them yields an empty string.
    #[must_use]
    pub fn error_details(&self) -> String {
        if let Some(detail) = &self.detail {
            return detail.clone();
        }
        if let Some(title) = &self.title {
            return title.clone();
        }
        self.error_message
            .as_deref()
            .map(parse_error_message)
            .unwrap_or_default()
    }

    /// Returns the classification of this entry's error code.
    #[must_use]
    pub fn kind(&self) -> KamereonErrorKind {
        KamereonErrorKind::from_code(&self.error_code)
    }

    /// Returns the family of this entry's error code.
    #[must_use]
    pub fn family(&self) -> KamereonErrorFamily {
        KamereonErrorFamily::from_code(&self.error_code)
    }
}

impl From<&KamereonErrorEntry> for KamereonResponseError {
    fn from(entry: &KamereonErrorEntry) -> Self {
        Self::new(entry.error_code.clone(), entry.error_details())
    }
}

/// The common Kamereon response envelope.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct KamereonResponse<T = Value> {
    /// The response payload, absent or `null` on errors.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Errors reported by the vendor, in the order received.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<KamereonErrorEntry>>,
}

impl<T> KamereonResponse<T> {
    /// Returns the first reported error entry, if any.
    #[must_use]
    pub fn first_error(&self) -> Option<&KamereonErrorEntry> {
        self.errors.as_deref().and_then(<[_]>::first)
    }

    /// Returns `true` if the vendor reported at least one error.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.first_error().is_some()
    }

    /// Checks the response for vendor-reported errors.
    ///
    /// # Errors
    ///
    /// Returns a [`KamereonResponseError`] built from the first entry of a non-empty
    /// `errors` list. Later entries are not reported.
    pub fn raise_for_error_code(&self) -> Result<(), KamereonResponseError> {
        match self.first_error() {
            None => Ok(()),
            Some(entry) => {
                let error = KamereonResponseError::from(entry);
                log::debug!(
                    "Kamereon response reported error {} ({} entries)",
                    error.error_code,
                    self.errors.as_ref().map_or(0, Vec::len),
                );
                Err(error)
            }
        }
    }

    /// Consumes the response, returning it only if no error was reported.
    ///
    /// # Errors
    ///
    /// Returns a [`KamereonResponseError`] under the same conditions as
    /// [`Self::raise_for_error_code`].
    pub fn into_checked(self) -> Result<Self, KamereonResponseError> {
        self.raise_for_error_code()?;
        Ok(self)
    }
}

/// The `data` object of a vehicle data response.
///
/// `attributes` is kept opaque since its shape depends on the endpoint queried
/// (battery status, lock status, cockpit, ...).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct KamereonVehicleData {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub data_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<Value>,
}

/// Response envelope for the vehicle data endpoints.
pub type KamereonVehicleDataResponse = KamereonResponse<KamereonVehicleData>;

impl KamereonResponse<KamereonVehicleData> {
    /// Decodes the opaque vehicle `attributes` into a typed structure.
    ///
    /// Returns `Ok(None)` when the response carries no data or no attributes.
    ///
    /// # Errors
    ///
    /// Returns [`KamereonError::Deserialization`] if the attributes do not match `A`.
    pub fn get_attributes<A: DeserializeOwned>(&self) -> Result<Option<A>, KamereonError> {
        match self.data.as_ref().and_then(|d| d.attributes.as_ref()) {
            Some(attributes) => Ok(Some(A::deserialize(attributes)?)),
            None => Ok(None),
        }
    }
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////
