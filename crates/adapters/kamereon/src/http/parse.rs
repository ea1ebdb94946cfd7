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

//! Functions for parsing raw Kamereon response text.

use serde::de::DeserializeOwned;

use crate::http::{
    error::KamereonError,
    models::{KamereonResponse, KamereonVehicleDataResponse},
};

/// Parses raw Kamereon JSON text into a [`KamereonResponse`].
///
/// Unknown fields are ignored. A single malformed entry in the `errors` list fails the
/// whole document.
///
/// # Errors
///
/// Returns [`KamereonError::Deserialization`] if `json` is not valid JSON or does not
/// match the response envelope.
pub fn parse_response<T: DeserializeOwned>(json: &str) -> Result<KamereonResponse<T>, KamereonError> {
    let response: KamereonResponse<T> = serde_json::from_str(json)?;
    log::trace!(
        "Parsed Kamereon response: data={}, errors={}",
        response.data.is_some(),
        response.errors.as_ref().map_or(0, Vec::len),
    );
    Ok(response)
}

/// Parses raw JSON text returned by one of the vehicle data endpoints.
///
/// # Errors
///
/// Returns [`KamereonError::Deserialization`] if `json` does not match the vehicle data
/// response shape.
pub fn parse_vehicle_data_response(json: &str) -> Result<KamereonVehicleDataResponse, KamereonError> {
    parse_response(json)
}

/// Parses raw Kamereon JSON text and checks it for vendor-reported errors.
///
/// # Errors
///
/// Returns [`KamereonError::Deserialization`] if parsing fails, or
/// [`KamereonError::Response`] carrying the first vendor error otherwise.
pub fn parse_and_check_response<T: DeserializeOwned>(
    json: &str,
) -> Result<KamereonResponse<T>, KamereonError> {
    let response = parse_response(json)?.into_checked()?;
    Ok(response)
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////
