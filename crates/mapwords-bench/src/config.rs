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

//! Batch configuration.
//!
//! Everything a batch needs is carried explicitly by [`HarnessConfig`]; the
//! driver keeps no process-wide state between runs.

use crate::error::{BenchError, Result};
use crate::hash::HashFunction;
use std::path::{Path, PathBuf};

/// Default upper bound of the theoretical complexity panel.
pub const DEFAULT_ELEMENTS: usize = 1_000;

/// Smallest element bound that still yields a non-empty curve domain.
pub const MIN_ELEMENTS: usize = 2;

/// Default figure output path.
pub const DEFAULT_OUTPUT: &str = "mapwords.svg";

/// Output formats for the rendered figure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, clap::ValueEnum)]
pub enum ExportFormat {
    /// Two-panel SVG image.
    #[default]
    Svg,
    /// Figure description as JSON.
    Json,
}

impl ExportFormat {
    /// Picks the format from a file extension, if it names one.
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()?.to_ascii_lowercase().as_str() {
            "svg" => Some(ExportFormat::Svg),
            "json" => Some(ExportFormat::Json),
            _ => None,
        }
    }
}

/// Configuration of one benchmark batch.
#[derive(Debug, Clone)]
pub struct HarnessConfig {
    /// Path to the mapwords executable.
    pub executable: PathBuf,
    /// Input files, in run order.
    pub files: Vec<PathBuf>,
    /// Hash functions run on every file, in run order.
    pub hash_functions: Vec<HashFunction>,
    /// Upper bound of the theoretical panel's domain.
    pub elements: usize,
    /// Where the figure is written.
    pub output: PathBuf,
    /// Figure format.
    pub format: ExportFormat,
    /// Suppress per-run progress lines.
    pub quiet: bool,
}

impl HarnessConfig {
    /// Creates a configuration running every hash function on `files`.
    pub fn new(executable: impl Into<PathBuf>, files: Vec<PathBuf>) -> Self {
        Self {
            executable: executable.into(),
            files,
            hash_functions: HashFunction::ALL.to_vec(),
            elements: DEFAULT_ELEMENTS,
            output: PathBuf::from(DEFAULT_OUTPUT),
            format: ExportFormat::default(),
            quiet: false,
        }
    }

    /// Sets the hash functions, dropping repeats but keeping first-seen order.
    pub fn with_hash_functions(mut self, hash_functions: &[HashFunction]) -> Self {
        let mut unique = Vec::with_capacity(hash_functions.len());
        for &hf in hash_functions {
            if !unique.contains(&hf) {
                unique.push(hf);
            }
        }
        self.hash_functions = unique;
        self
    }

    /// Sets the theoretical panel's element bound.
    pub fn with_elements(mut self, elements: usize) -> Self {
        self.elements = elements;
        self
    }

    /// Sets the output path and format.
    pub fn with_output(mut self, path: impl Into<PathBuf>, format: ExportFormat) -> Self {
        self.output = path.into();
        self.format = format;
        self
    }

    /// Silences progress output.
    pub fn with_quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    /// Number of invocations the batch will issue.
    pub fn run_count(&self) -> usize {
        self.files.len() * self.hash_functions.len()
    }

    /// Checks the configuration before anything is executed.
    ///
    /// # Errors
    ///
    /// - [`BenchError::EmptyInput`] when there are no files or no hash functions
    /// - [`BenchError::InvalidConfig`] when the element bound is below
    ///   [`MIN_ELEMENTS`]
    pub fn validate(&self) -> Result<()> {
        if self.files.is_empty() {
            return Err(BenchError::empty("input files"));
        }
        if self.hash_functions.is_empty() {
            return Err(BenchError::empty("hash functions"));
        }
        if self.elements < MIN_ELEMENTS {
            return Err(BenchError::invalid_config(
                "elements",
                format!("must be at least {}, got {}", MIN_ELEMENTS, self.elements),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> HarnessConfig {
        HarnessConfig::new("./mapwords", vec![PathBuf::from("a.txt"), PathBuf::from("b.txt")])
    }

    #[test]
    fn test_default_config() {
        let config = config();
        assert_eq!(config.hash_functions, HashFunction::ALL.to_vec());
        assert_eq!(config.elements, DEFAULT_ELEMENTS);
        assert_eq!(config.output, PathBuf::from(DEFAULT_OUTPUT));
        assert_eq!(config.format, ExportFormat::Svg);
        assert_eq!(config.run_count(), 6);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_hash_function_dedup() {
        let config = config().with_hash_functions(&[
            HashFunction::Java,
            HashFunction::Djb2,
            HashFunction::Java,
        ]);
        assert_eq!(
            config.hash_functions,
            vec![HashFunction::Java, HashFunction::Djb2]
        );
        assert_eq!(config.run_count(), 4);
    }

    #[test]
    fn test_validate_rejects_empty() {
        let no_files = HarnessConfig::new("./mapwords", Vec::new());
        assert!(matches!(
            no_files.validate(),
            Err(BenchError::EmptyInput { .. })
        ));

        let no_hashes = config().with_hash_functions(&[]);
        assert!(matches!(
            no_hashes.validate(),
            Err(BenchError::EmptyInput { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_small_element_bound() {
        let err = config().with_elements(1).validate().unwrap_err();
        assert!(matches!(err, BenchError::InvalidConfig { .. }));
        assert!(config().with_elements(MIN_ELEMENTS).validate().is_ok());
    }

    #[test]
    fn test_export_format_from_path() {
        assert_eq!(
            ExportFormat::from_path(Path::new("out/figure.JSON")),
            Some(ExportFormat::Json)
        );
        assert_eq!(
            ExportFormat::from_path(Path::new("figure.svg")),
            Some(ExportFormat::Svg)
        );
        assert_eq!(ExportFormat::from_path(Path::new("figure.png")), None);
        assert_eq!(ExportFormat::from_path(Path::new("figure")), None);
    }
}
