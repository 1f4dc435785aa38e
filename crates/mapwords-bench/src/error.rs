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

//! Error types for the benchmark driver.
//!
//! Every failure in the pipeline is fatal for the whole batch. Nothing here
//! is retried or recovered from.

use crate::hash::HashFunction;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type for benchmark driver operations
pub type Result<T> = std::result::Result<T, BenchError>;

/// Errors that can occur while running or analysing a benchmark batch
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BenchError {
    /// Benchmark output was malformed or incomplete.
    #[error("Parse error: {reason}")]
    Parse {
        /// What was wrong with the output
        reason: String,
    },

    /// Benchmark output of a specific run was malformed or incomplete.
    ///
    /// Same as [`BenchError::Parse`], with the configuration that produced it.
    #[error("Parse error for '{}' ({hash_function}): {reason}", .file.display())]
    RunParse {
        /// Input file of the failing run
        file: PathBuf,
        /// Hash function of the failing run
        hash_function: HashFunction,
        /// What was wrong with the output
        reason: String,
    },

    /// The benchmark executable could not be started or exited non-zero.
    #[error("Execution failed for '{}' ({hash_function}): {reason}", .file.display())]
    Execution {
        /// Input file of the failing run
        file: PathBuf,
        /// Hash function of the failing run
        hash_function: HashFunction,
        /// Exit status or start-up failure
        reason: String,
    },

    /// An operation that needs at least one element got none.
    #[error("Empty input: no {what}")]
    EmptyInput {
        /// What was missing
        what: String,
    },

    /// A record reported zero duration, so its throughput is undefined.
    #[error(
        "Zero duration reported by {hash_function} for {word_count} words{}; throughput is undefined",
        in_file(.file)
    )]
    ZeroDuration {
        /// Input file of the offending run, when known
        file: Option<PathBuf>,
        /// Hash function of the offending record
        hash_function: HashFunction,
        /// Word count of the offending record
        word_count: u64,
    },

    /// Invalid configuration parameter
    #[error("Invalid configuration parameter '{parameter}': {reason}")]
    InvalidConfig {
        /// Parameter name
        parameter: String,
        /// Reason for invalidity
        reason: String,
    },

    /// I/O error while writing a report
    #[error("I/O error for '{}': {message}", .path.display())]
    Io {
        /// The file path that caused the error
        path: PathBuf,
        /// The error message
        message: String,
    },
}

impl BenchError {
    /// Create a parse error.
    pub fn parse(reason: impl Into<String>) -> Self {
        Self::Parse {
            reason: reason.into(),
        }
    }

    /// Attach the run configuration to a parse or zero-duration error.
    ///
    /// Other errors are returned unchanged.
    pub fn in_run(self, file: &Path, hash_function: HashFunction) -> Self {
        match self {
            Self::Parse { reason } => Self::RunParse {
                file: file.to_path_buf(),
                hash_function,
                reason,
            },
            Self::ZeroDuration {
                file: None,
                hash_function,
                word_count,
            } => Self::ZeroDuration {
                file: Some(file.to_path_buf()),
                hash_function,
                word_count,
            },
            other => other,
        }
    }

    /// Create an execution error for a run.
    pub fn execution(
        file: impl Into<PathBuf>,
        hash_function: HashFunction,
        reason: impl Into<String>,
    ) -> Self {
        Self::Execution {
            file: file.into(),
            hash_function,
            reason: reason.into(),
        }
    }

    /// Create an empty-input error.
    pub fn empty(what: impl Into<String>) -> Self {
        Self::EmptyInput { what: what.into() }
    }

    /// Create an invalid-configuration error.
    pub fn invalid_config(parameter: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            parameter: parameter.into(),
            reason: reason.into(),
        }
    }

    /// Create an I/O error with file path context.
    ///
    /// ```rust,no_run
    /// use mapwords_bench::error::BenchError;
    /// use std::fs;
    ///
    /// let result = fs::write("figure.svg", "<svg/>")
    ///     .map_err(|e| BenchError::io_error("figure.svg", e));
    /// ```
    pub fn io_error(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            message: source.to_string(),
        }
    }

    /// Returns true for errors raised while running or parsing a benchmark.
    pub fn is_run_failure(&self) -> bool {
        matches!(
            self,
            Self::Parse { .. }
                | Self::RunParse { .. }
                | Self::Execution { .. }
                | Self::ZeroDuration { file: Some(_), .. }
        )
    }
}

fn in_file(file: &Option<PathBuf>) -> String {
    match file {
        Some(file) => format!(" in '{}'", file.display()),
        None => String::new(),
    }
}
