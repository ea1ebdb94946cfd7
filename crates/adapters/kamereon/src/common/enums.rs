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

//! Enumerations classifying Kamereon vendor error codes.

use strum::{AsRefStr, Display, EnumIter, EnumString};

use crate::common::consts::{KAMEREON_FUNCTIONAL_PREFIX, KAMEREON_TECHNICAL_PREFIX};

/// Known Kamereon error codes.
///
/// This is a classification of the raw vendor code, not an error hierarchy: every
/// vendor failure is reported through the same error type and this kind is derived
/// from its code on demand.
#[derive(
    Copy, Clone, Debug, Display, PartialEq, Eq, Hash, AsRefStr, EnumIter, EnumString,
)]
pub enum KamereonErrorKind {
    /// The account exceeded its request quota.
    #[strum(serialize = "err.func.wired.overloaded")]
    QuotaLimit,
    /// The request payload was rejected (e.g. a date in the past).
    #[strum(serialize = "err.func.400")]
    InvalidInput,
    /// The account may not access the resource.
    #[strum(serialize = "err.func.403")]
    AccessDenied,
    /// The resource does not exist for this vehicle or account.
    #[strum(serialize = "err.func.wired.notFound")]
    ResourceNotFound,
    /// The upstream server returned an invalid response.
    #[strum(serialize = "err.tech.500")]
    InvalidUpstream,
    /// The gateway does not support the feature for this vehicle.
    #[strum(serialize = "err.tech.501")]
    NotSupported,
    /// The Kamereon proxy failed to forward the request.
    #[strum(serialize = "err.tech.wired.kamereon-proxy")]
    FailedForward,
    /// Any code not listed above.
    #[strum(serialize = "unknown")]
    Unknown,
}

impl KamereonErrorKind {
    /// Classifies a raw vendor error code, falling back to [`Self::Unknown`].
    #[must_use]
    pub fn from_code(code: &str) -> Self {
        code.parse().unwrap_or(Self::Unknown)
    }
}

/// Broad family of a Kamereon error code, derived from its prefix.
#[derive(Copy, Clone, Debug, Display, PartialEq, Eq, Hash, AsRefStr, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum KamereonErrorFamily {
    /// Caller-side failures (`err.func.*`).
    Functional,
    /// Gateway or upstream failures (`err.tech.*`).
    Technical,
    /// Codes outside the documented families.
    Other,
}

impl KamereonErrorFamily {
    /// Returns the family for a raw vendor error code.
    #[must_use]
    pub fn from_code(code: &str) -> Self {
        if code.starts_with(KAMEREON_FUNCTIONAL_PREFIX) {
            Self::Functional
        } else if code.starts_with(KAMEREON_TECHNICAL_PREFIX) {
            Self::Technical
        } else {
            Self::Other
        }
    }
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////
