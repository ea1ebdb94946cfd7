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

//! Property-based tests for Kamereon response parsing and error normalization.
//!
//! These tests verify invariants that should hold for any well-formed envelope:
//! - Parsing the same text twice yields equal values
//! - An absent or empty `errors` list never raises
//! - A non-empty `errors` list raises exactly the first entry

use proptest::prelude::*;
use renault_kamereon::{KamereonResponse, parse_response};
use rstest::rstest;
use serde_json::{Value, json};

/// Generate a plain-text vendor error entry as `(code, message)`.
fn error_entry_strategy() -> impl Strategy<Value = (String, Option<String>)> {
    (
        "err\\.(func|tech)\\.[a-zA-Z0-9.]{1,20}",
        proptest::option::of("[a-zA-Z][a-zA-Z0-9 ().;]{0,40}"),
    )
}

/// Generate an arbitrary vehicle data payload, possibly absent.
fn data_strategy() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        ("[A-Z]{3,10}", 0i64..=100).prop_map(|(id, level)| {
            json!({"type": "Car", "id": id, "attributes": {"batteryLevel": level}})
        }),
    ]
}

fn envelope(data: &Value, errors: Option<&[(String, Option<String>)]>) -> String {
    let mut document = json!({ "data": data });
    if let Some(errors) = errors {
        let entries: Vec<Value> = errors
            .iter()
            .map(|(code, message)| json!({"errorCode": code, "errorMessage": message}))
            .collect();
        document["errors"] = Value::Array(entries);
    }
    document.to_string()
}

proptest! {
    /// Property: parsing is deterministic and yields equal values.
    #[rstest]
    fn parsing_is_idempotent(
        data in data_strategy(),
        errors in proptest::option::of(proptest::collection::vec(error_entry_strategy(), 0..4)),
    ) {
        let json = envelope(&data, errors.as_deref());

        let first: KamereonResponse = parse_response(&json).expect("valid envelope");
        let second: KamereonResponse = parse_response(&json).expect("valid envelope");
        prop_assert_eq!(first, second);
    }

    /// Property: an absent or empty errors list never raises.
    #[rstest]
    fn no_errors_never_raise(data in data_strategy(), with_empty_list in any::<bool>()) {
        let errors: Option<&[(String, Option<String>)]> = if with_empty_list { Some(&[]) } else { None };
        let json = envelope(&data, errors);

        let response: KamereonResponse = parse_response(&json).expect("valid envelope");
        prop_assert!(response.raise_for_error_code().is_ok());
    }

    /// Property: a non-empty errors list raises the first entry, verbatim.
    #[rstest]
    fn first_error_is_raised(
        data in data_strategy(),
        errors in proptest::collection::vec(error_entry_strategy(), 1..4),
    ) {
        let json = envelope(&data, Some(errors.as_slice()));

        let response: KamereonResponse = parse_response(&json).expect("valid envelope");
        let error = response.raise_for_error_code().expect_err("must raise");

        let (code, message) = &errors[0];
        prop_assert_eq!(&error.error_code, code);
        prop_assert_eq!(&error.error_details, &message.clone().unwrap_or_default());
    }
}
