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

//! Hash function selectors understood by the mapwords executable.

use crate::error::{BenchError, Result};
use std::fmt;
use std::str::FromStr;

/// A hash function configuration of the benchmarked program.
///
/// The textual form is the selector passed via `-h` and reported back on the
/// `stats: hash_function=...` line.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    serde::Serialize,
    serde::Deserialize,
    clap::ValueEnum,
)]
pub enum HashFunction {
    /// Bernstein's djb2.
    #[serde(rename = "hash_djb2")]
    #[value(name = "hash_djb2")]
    Djb2,
    /// The sdbm database hash.
    #[serde(rename = "hash_sdbm")]
    #[value(name = "hash_sdbm")]
    Sdbm,
    /// `java.lang.String#hashCode`.
    #[serde(rename = "hash_java")]
    #[value(name = "hash_java")]
    Java,
}

impl HashFunction {
    /// Every hash function, in the order batches run them.
    pub const ALL: [HashFunction; 3] = [HashFunction::Djb2, HashFunction::Sdbm, HashFunction::Java];

    /// Returns the selector string.
    pub fn as_str(&self) -> &'static str {
        match self {
            HashFunction::Djb2 => "hash_djb2",
            HashFunction::Sdbm => "hash_sdbm",
            HashFunction::Java => "hash_java",
        }
    }
}

impl fmt::Display for HashFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HashFunction {
    type Err = BenchError;

    fn from_str(s: &str) -> Result<Self> {
        HashFunction::ALL
            .into_iter()
            .find(|hf| hf.as_str() == s)
            .ok_or_else(|| BenchError::parse(format!("unknown hash function '{}'", s)))
    }
}
