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

//! Measurements reported by one benchmark run.

use crate::error::{BenchError, Result};
use crate::hash::HashFunction;
use serde::{Deserialize, Serialize};

/// One completed benchmark invocation's measurements.
///
/// Records can only be built through [`StatsRecord::new`] (or deserialized
/// through the same checks), so a record always holds a finite, non-negative
/// duration. Fields are read-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawStats")]
pub struct StatsRecord {
    word_count: u64,
    collisions: u64,
    map_size: u64,
    char_count: u64,
    duration: f64,
    hash_function: HashFunction,
}

/// Unchecked field set, used as the deserialization source.
#[derive(Deserialize)]
struct RawStats {
    word_count: u64,
    collisions: u64,
    map_size: u64,
    char_count: u64,
    duration: f64,
    hash_function: HashFunction,
}

impl TryFrom<RawStats> for StatsRecord {
    type Error = BenchError;

    fn try_from(raw: RawStats) -> Result<Self> {
        StatsRecord::new(
            raw.word_count,
            raw.collisions,
            raw.map_size,
            raw.char_count,
            raw.duration,
            raw.hash_function,
        )
    }
}

impl StatsRecord {
    /// Creates a record, rejecting negative or non-finite durations.
    pub fn new(
        word_count: u64,
        collisions: u64,
        map_size: u64,
        char_count: u64,
        duration: f64,
        hash_function: HashFunction,
    ) -> Result<Self> {
        if !duration.is_finite() || duration < 0.0 {
            return Err(BenchError::parse(format!(
                "duration must be a finite, non-negative number of seconds, got {}",
                duration
            )));
        }

        Ok(Self {
            word_count,
            collisions,
            map_size,
            char_count,
            duration,
            hash_function,
        })
    }

    /// Number of words processed.
    pub fn word_count(&self) -> u64 {
        self.word_count
    }

    /// Hash collisions observed.
    pub fn collisions(&self) -> u64 {
        self.collisions
    }

    /// Final size of the hash table.
    pub fn map_size(&self) -> u64 {
        self.map_size
    }

    /// Characters processed.
    pub fn char_count(&self) -> u64 {
        self.char_count
    }

    /// Wall-clock duration in seconds.
    pub fn duration(&self) -> f64 {
        self.duration
    }

    /// Hash function that produced this run.
    pub fn hash_function(&self) -> HashFunction {
        self.hash_function
    }

    /// Words processed per second.
    ///
    /// # Errors
    ///
    /// Returns [`BenchError::ZeroDuration`] when the run reported a duration of
    /// zero. The record does not know its input file; [`BenchError::in_run`]
    /// adds it.
    pub fn throughput(&self) -> Result<f64> {
        if self.duration == 0.0 {
            return Err(BenchError::ZeroDuration {
                file: None,
                hash_function: self.hash_function,
                word_count: self.word_count,
            });
        }
        Ok(self.word_count as f64 / self.duration)
    }
}
