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

//! Grouping and throughput statistics over parsed runs.
//!
//! Records are grouped by hash function in first-seen order. Within a group
//! the word counts and the durations are sorted independently of each other,
//! so after sorting the i-th word count is not necessarily paired with the
//! i-th duration of the same run. The empirical plot is drawn from these
//! sequences as they are.

use crate::error::{BenchError, Result};
use crate::hash::HashFunction;
use crate::stats::StatsRecord;
use serde::Serialize;

/// Per-hash-function series used to draw one empirical line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupedSeries {
    /// Hash function of every contributing record.
    pub hash_function: HashFunction,
    /// Word counts, ascending.
    pub word_counts: Vec<u64>,
    /// Durations in seconds, ascending.
    pub durations: Vec<f64>,
    /// Throughput of each contributing record, in input order.
    pub throughputs: Vec<f64>,
}

impl GroupedSeries {
    fn new(hash_function: HashFunction) -> Self {
        Self {
            hash_function,
            word_counts: Vec::new(),
            durations: Vec::new(),
            throughputs: Vec::new(),
        }
    }

    /// Number of contributing records.
    pub fn len(&self) -> usize {
        self.word_counts.len()
    }

    /// Returns true if no record contributed.
    pub fn is_empty(&self) -> bool {
        self.word_counts.is_empty()
    }
}

/// Throughput of a single record.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Throughput {
    /// Hash function of the record.
    pub hash_function: HashFunction,
    /// Words per second.
    pub words_per_sec: f64,
}

/// Summary over all throughput values of a batch.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ThroughputSummary {
    /// Lowest words per second.
    pub min: f64,
    /// Highest words per second.
    pub max: f64,
    /// Arithmetic mean of words per second.
    pub mean: f64,
    /// Number of values summarized.
    pub count: usize,
}

/// Everything the plot builder needs from a batch.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Aggregation {
    /// Series per hash function, in first-seen order.
    pub groups: Vec<GroupedSeries>,
    /// Throughput per record, in input order.
    pub throughputs: Vec<Throughput>,
    /// Summary over `throughputs`.
    pub summary: ThroughputSummary,
}

impl Aggregation {
    /// Looks up the series of `hash_function`.
    pub fn group(&self, hash_function: HashFunction) -> Option<&GroupedSeries> {
        self.groups
            .iter()
            .find(|g| g.hash_function == hash_function)
    }
}

/// Aggregates the records of a batch.
///
/// # Errors
///
/// - [`BenchError::EmptyInput`] if `records` is empty
/// - [`BenchError::ZeroDuration`] if any record reports a zero duration
pub fn aggregate(records: &[StatsRecord]) -> Result<Aggregation> {
    if records.is_empty() {
        return Err(BenchError::empty("benchmark records to aggregate"));
    }

    let mut groups: Vec<GroupedSeries> = Vec::new();
    let mut throughputs = Vec::with_capacity(records.len());

    for record in records {
        let words_per_sec = record.throughput()?;
        let hash_function = record.hash_function();

        let index = match groups.iter().position(|g| g.hash_function == hash_function) {
            Some(index) => index,
            None => {
                groups.push(GroupedSeries::new(hash_function));
                groups.len() - 1
            }
        };
        let group = &mut groups[index];
        group.word_counts.push(record.word_count());
        group.durations.push(record.duration());
        group.throughputs.push(words_per_sec);

        throughputs.push(Throughput {
            hash_function,
            words_per_sec,
        });
    }

    for group in &mut groups {
        group.word_counts.sort_unstable();
        group.durations.sort_by(f64::total_cmp);
    }

    let values: Vec<f64> = throughputs.iter().map(|t| t.words_per_sec).collect();
    let summary = summarize(&values)?;

    Ok(Aggregation {
        groups,
        throughputs,
        summary,
    })
}

/// Computes min, max and mean of `values`.
///
/// # Errors
///
/// - [`BenchError::EmptyInput`] if `values` is empty
/// - [`BenchError::Parse`] if any value is NaN or infinite
pub fn summarize(values: &[f64]) -> Result<ThroughputSummary> {
    let first = *values
        .first()
        .ok_or_else(|| BenchError::empty("throughput values to summarize"))?;
    if let Some(bad) = values.iter().find(|v| !v.is_finite()) {
        return Err(BenchError::parse(format!(
            "throughput {} words per second is not a finite number",
            bad
        )));
    }

    let (min, max, sum) = values
        .iter()
        .skip(1)
        .fold((first, first, first), |(min, max, sum), &v| {
            (min.min(v), max.max(v), sum + v)
        });

    // Rounding can push the mean a hair outside [min, max] for equal values.
    let mean = (sum / values.len() as f64).clamp(min, max);

    Ok(ThroughputSummary {
        min,
        max,
        mean,
        count: values.len(),
    })
}
