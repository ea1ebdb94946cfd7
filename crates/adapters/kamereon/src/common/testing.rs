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

//! Shared testing utilities for Kamereon unit tests.

use std::{fs, path::PathBuf};

/// Returns the path of a fixture inside the crate `test_data` directory.
#[must_use]
pub fn test_data_path(file_name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("test_data")
        .join(file_name)
}

/// Loads a JSON fixture from the crate test data directory.
///
/// # Panics
///
/// Panics if the fixture cannot be read.
#[must_use]
pub fn load_test_json(file_name: &str) -> String {
    fs::read_to_string(test_data_path(file_name)).expect("Failed to read test JSON file")
}
