// Dweve Mapwords - Hash Map Benchmark Driver
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! JSON export of a [`Figure`] description.

use crate::error::{BenchError, Result};
use crate::plot::Figure;
use std::fs;
use std::io;
use std::path::Path;

/// Writes `figure` as pretty-printed JSON.
pub fn export_json(figure: &Figure, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(figure).map_err(|e| {
        BenchError::io_error(path, io::Error::new(io::ErrorKind::InvalidData, e))
    })?;

    fs::write(path, json).map_err(|e| BenchError::io_error(path, e))
}
