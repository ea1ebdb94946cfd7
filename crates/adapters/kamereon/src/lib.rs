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

//! Response models and error normalization for the **Kamereon** API, the
//! vehicle-telematics backend behind Renault connected-car services.
//!
//! The `renault-kamereon` crate turns raw Kamereon JSON payloads into typed,
//! immutable response values and maps vendor-reported failures onto a single
//! [`KamereonResponseError`] carrying the vendor error code and a human-readable
//! detail string.
//!
//! Transport, authentication and retry policy belong to the surrounding client:
//! this crate only ever sees the response text.
//!
//! # Example
//!
//! ```rust
//! use renault_kamereon::{KamereonError, KamereonVehicleData, parse_and_check_response};
//!
//! let json = r#"{"errors":[{"errorCode":"err.func.403","errorMessage":"Access is denied for this resource"}]}"#;
//!
//! match parse_and_check_response::<KamereonVehicleData>(json) {
//!     Err(KamereonError::Response(e)) => {
//!         assert_eq!(e.error_code, "err.func.403");
//!         assert_eq!(e.error_details, "Access is denied for this resource");
//!     }
//!     other => panic!("unexpected result: {other:?}"),
//! }
//! ```

#![warn(rustc::all)]
#![deny(unsafe_code)]
#![deny(nonstandard_style)]
#![deny(missing_debug_implementations)]
#![deny(clippy::missing_errors_doc)]
#![deny(clippy::missing_panics_doc)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod common;
pub mod http;

// Re-exports
pub use crate::{
    common::enums::{KamereonErrorFamily, KamereonErrorKind},
    http::{
        error::{KamereonError, KamereonResponseError},
        models::{
            KamereonErrorEntry, KamereonResponse, KamereonVehicleData,
            KamereonVehicleDataResponse,
        },
        parse::{parse_and_check_response, parse_response, parse_vehicle_data_response},
    },
};
