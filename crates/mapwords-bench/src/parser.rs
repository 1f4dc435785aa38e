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

//! Parser for the `stats: <key>=<value>` output protocol.
//!
//! The benchmark executable reports its measurements as free-text lines such
//! as:
//!
//! ```text
//! stats: word_count=12345
//! stats: duration=0.0132
//! ```
//!
//! Scanning is line oriented. The pattern may appear anywhere in a line, the
//! key runs up to the last `=` of the line, and key and value are trimmed.
//! Later lines overwrite earlier ones with the same key.

use crate::error::{BenchError, Result};
use crate::hash::HashFunction;
use crate::stats::StatsRecord;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;
use std::str::FromStr;

static STATS_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"stats:\s(.*)=(.*)").expect("valid stats pattern"));

/// Key reporting the number of words processed.
pub const KEY_WORD_COUNT: &str = "word_count";
/// Key reporting hash collisions.
pub const KEY_COLLISIONS: &str = "collisions";
/// Key reporting the final table size.
pub const KEY_MAP_SIZE: &str = "map_size";
/// Key reporting characters processed.
pub const KEY_CHAR_COUNT: &str = "char_count";
/// Key reporting wall-clock seconds.
pub const KEY_DURATION: &str = "duration";
/// Key reporting the hash function selector.
pub const KEY_HASH_FUNCTION: &str = "hash_function";

/// Older executables report the selector under this key.
const LEGACY_HASH_FUNCTION_KEY: &str = "hashf";

/// Every key a run must report.
pub const REQUIRED_KEYS: [&str; 6] = [
    KEY_WORD_COUNT,
    KEY_COLLISIONS,
    KEY_MAP_SIZE,
    KEY_CHAR_COUNT,
    KEY_DURATION,
    KEY_HASH_FUNCTION,
];

/// Collects every `stats:` pair of `output`, last occurrence wins.
///
/// The legacy `hashf` key is stored as `hash_function`.
pub fn scan_stats(output: &str) -> HashMap<String, String> {
    let mut pairs = HashMap::new();

    for line in output.lines() {
        if let Some(caps) = STATS_PATTERN.captures(line) {
            let key = caps[1].trim();
            let key = if key == LEGACY_HASH_FUNCTION_KEY {
                KEY_HASH_FUNCTION
            } else {
                key
            };
            pairs.insert(key.to_string(), caps[2].trim().to_string());
        }
    }

    pairs
}

/// Parses the full output of one run into a [`StatsRecord`].
///
/// # Errors
///
/// Returns [`BenchError::Parse`] when no `stats:` line is present, when a
/// required key is missing, or when a value does not convert to its type.
///
/// # Examples
///
/// ```
/// use mapwords_bench::parser::parse_stats;
///
/// let output = "\
/// stats: word_count=100
/// stats: collisions=2
/// stats: map_size=64
/// stats: char_count=480
/// stats: duration=0.5
/// stats: hash_function=hash_djb2
/// ";
/// let record = parse_stats(output).unwrap();
/// assert_eq!(record.word_count(), 100);
/// assert_eq!(record.duration(), 0.5);
/// ```
pub fn parse_stats(output: &str) -> Result<StatsRecord> {
    let pairs = scan_stats(output);
    if pairs.is_empty() {
        return Err(BenchError::parse("output contains no 'stats:' lines"));
    }

    let missing: Vec<&str> = REQUIRED_KEYS
        .iter()
        .copied()
        .filter(|key| !pairs.contains_key(*key))
        .collect();
    if !missing.is_empty() {
        return Err(BenchError::parse(format!(
            "missing required keys: {}",
            missing.join(", ")
        )));
    }

    StatsRecord::new(
        field(&pairs, KEY_WORD_COUNT)?,
        field(&pairs, KEY_COLLISIONS)?,
        field(&pairs, KEY_MAP_SIZE)?,
        field(&pairs, KEY_CHAR_COUNT)?,
        field(&pairs, KEY_DURATION)?,
        field::<HashFunction>(&pairs, KEY_HASH_FUNCTION)?,
    )
}

/// Converts one required value, naming the key on failure.
fn field<T: FromStr>(pairs: &HashMap<String, String>, key: &str) -> Result<T> {
    let raw = pairs
        .get(key)
        .ok_or_else(|| BenchError::parse(format!("missing required keys: {}", key)))?;

    raw.parse::<T>().map_err(|_| {
        BenchError::parse(format!(
            "invalid value '{}' for key '{}' (expected {})",
            raw,
            key,
            expected_type(key)
        ))
    })
}

fn expected_type(key: &str) -> &'static str {
    match key {
        KEY_DURATION => "a number of seconds",
        KEY_HASH_FUNCTION => "a known hash function",
        _ => "a non-negative integer",
    }
}
