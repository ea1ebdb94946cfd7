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

//! Serde helpers and conversion functions for Kamereon payloads.

use serde::{Deserialize, Deserializer};

use crate::common::consts::{KAMEREON_DETAIL_SEPARATOR, KAMEREON_ERRORS_SEPARATOR};

/// Deserializes an optional string, normalising empty strings to [`None`].
///
/// Kamereon sends `""` and omits the field interchangeably, so
///
/// ```rust,ignore
/// #[serde(default, deserialize_with = "crate::common::parse::deserialize_empty_string_as_none")]
/// pub detail: Option<String>,
/// ```
///
/// treats both the same way.
///
/// # Errors
///
/// Returns an error if the JSON value is neither `null` nor a string.
pub fn deserialize_empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|s| !s.is_empty()))
}

/// JSON:API style document the gateway sometimes embeds as a string inside `errorMessage`.
#[derive(Debug, Deserialize)]
struct NestedErrorMessage {
    #[serde(default)]
    errors: Vec<NestedError>,
    #[serde(default)]
    message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct NestedError {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    source: Option<NestedErrorSource>,
    #[serde(default)]
    detail: Option<String>,
}

#[derive(Debug, Deserialize)]
struct NestedErrorSource {
    #[serde(default)]
    pointer: Option<String>,
}

impl NestedError {
    fn describe(&self) -> String {
        let pointer = self.source.as_ref().and_then(|s| s.pointer.as_deref());
        [self.title.as_deref(), pointer, self.detail.as_deref()]
            .into_iter()
            .flatten()
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(KAMEREON_DETAIL_SEPARATOR)
    }
}

/// Extracts the human-readable description from a raw Kamereon `errorMessage`.
///
/// When the message is a nested JSON document with an `errors` array, each nested
/// error contributes its title, source pointer and detail (space separated) and the
/// nested errors are joined with `", "`. A nested document yielding no description
/// falls back to its `message` field. Anything else, including plain text, is
/// returned verbatim.
#[must_use]
pub fn parse_error_message(raw: &str) -> String {
    let nested = match serde_json::from_str::<NestedErrorMessage>(raw) {
        Ok(nested) => nested,
        Err(e) => {
            log::trace!("Kamereon error message is not nested JSON ({e}), using raw text");
            return raw.to_string();
        }
    };

    let description = nested
        .errors
        .iter()
        .map(NestedError::describe)
        .filter(|d| !d.is_empty())
        .collect::<Vec<_>>()
        .join(KAMEREON_ERRORS_SEPARATOR);

    if !description.is_empty() {
        return description;
    }

    match nested.message {
        Some(message) if !message.is_empty() => message,
        _ => raw.to_string(),
    }
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////
