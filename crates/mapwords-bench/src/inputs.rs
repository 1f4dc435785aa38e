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

//! Expansion of input-file arguments.
//!
//! Shells on Unix expand wildcards before the driver sees them; Windows shells
//! do not. Arguments that still look like patterns and do not name an
//! existing path are expanded here.

use crate::error::{BenchError, Result};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

const GLOB_METACHARS: &[char] = &['*', '?', '['];

/// Returns true if `arg` contains glob metacharacters.
pub fn is_pattern(arg: &str) -> bool {
    arg.contains(GLOB_METACHARS)
}

/// Expands file arguments in order.
///
/// Literal arguments pass through unchanged, existing or not; a missing file
/// is reported by the benchmark executable itself. Each pattern contributes
/// its matches in sorted order. A pattern without matches contributes nothing.
///
/// # Errors
///
/// Returns [`BenchError::InvalidConfig`] for a malformed pattern or an
/// unreadable match.
pub fn expand_file_args<S: AsRef<str>>(args: &[S]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for arg in args {
        let arg = arg.as_ref();
        if !is_pattern(arg) || Path::new(arg).exists() {
            files.push(PathBuf::from(arg));
            continue;
        }

        let paths = glob::glob(arg)
            .map_err(|e| BenchError::invalid_config("file", format!("'{}': {}", arg, e)))?;

        let mut matches = paths
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| BenchError::invalid_config("file", format!("'{}': {}", arg, e)))?;
        matches.sort();

        if matches.is_empty() {
            warn!(pattern = arg, "file pattern matched nothing");
        } else {
            debug!(pattern = arg, count = matches.len(), "expanded file pattern");
        }
        files.extend(matches);
    }

    Ok(files)
}
