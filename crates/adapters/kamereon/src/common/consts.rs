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

//! Kamereon vendor error codes and formatting constants.

/// Prefix shared by functional (caller-side) error codes.
pub const KAMEREON_FUNCTIONAL_PREFIX: &str = "err.func.";

/// Prefix shared by technical (gateway or upstream) error codes.
pub const KAMEREON_TECHNICAL_PREFIX: &str = "err.tech.";

pub const KAMEREON_CODE_QUOTA_LIMIT: &str = "err.func.wired.overloaded";
pub const KAMEREON_CODE_INVALID_INPUT: &str = "err.func.400";
pub const KAMEREON_CODE_ACCESS_DENIED: &str = "err.func.403";
pub const KAMEREON_CODE_RESOURCE_NOT_FOUND: &str = "err.func.wired.notFound";
pub const KAMEREON_CODE_INVALID_UPSTREAM: &str = "err.tech.500";
pub const KAMEREON_CODE_NOT_SUPPORTED: &str = "err.tech.501";
pub const KAMEREON_CODE_FAILED_FORWARD: &str = "err.tech.wired.kamereon-proxy";

/// Joins the title, source pointer and detail of a single nested error.
pub const KAMEREON_DETAIL_SEPARATOR: &str = " ";

/// Joins the descriptions of several nested errors.
pub const KAMEREON_ERRORS_SEPARATOR: &str = ", ";
