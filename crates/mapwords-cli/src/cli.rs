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

//! Command-line arguments.

use clap::Parser;
use mapwords_bench::config::{ExportFormat, HarnessConfig, DEFAULT_ELEMENTS, DEFAULT_OUTPUT};
use mapwords_bench::inputs::expand_file_args;
use mapwords_bench::{HashFunction, Result};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "mapwords-bench")]
#[command(author, version, about = "Mapwords - hash map benchmark driver and performance analysis", long_about = None)]
pub struct Cli {
    /// Path to the mapwords executable
    #[arg(value_name = "MAPWORDS")]
    pub mapwords: PathBuf,

    /// Text files to benchmark (wildcards are expanded)
    #[arg(short, long = "file", value_name = "FILE", num_args = 1.., required = true)]
    pub files: Vec<String>,

    /// Hash functions to run on every file
    #[arg(long = "hash", value_name = "HASH", value_enum, value_delimiter = ',')]
    pub hash_functions: Vec<HashFunction>,

    /// Upper bound of the theoretical complexity curves
    #[arg(short = 'n', long, default_value_t = DEFAULT_ELEMENTS)]
    pub elements: usize,

    /// Figure output path
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Figure format (defaults to the output extension, else svg)
    #[arg(long, value_enum)]
    pub format: Option<ExportFormat>,

    /// Do not print a line per benchmark run
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Builds the batch configuration, expanding file patterns.
    pub fn into_config(self) -> Result<HarnessConfig> {
        let files = expand_file_args(&self.files)?;
        let format = self
            .format
            .or_else(|| ExportFormat::from_path(&self.output))
            .unwrap_or_default();

        let mut config = HarnessConfig::new(self.mapwords, files)
            .with_elements(self.elements)
            .with_output(self.output, format)
            .with_quiet(self.quiet);
        if !self.hash_functions.is_empty() {
            config = config.with_hash_functions(&self.hash_functions);
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["mapwords-bench", "./mapwords", "-f", "a.txt"]).unwrap();
        let config = cli.into_config().unwrap();

        assert_eq!(config.executable, PathBuf::from("./mapwords"));
        assert_eq!(config.files, vec![PathBuf::from("a.txt")]);
        assert_eq!(config.hash_functions, HashFunction::ALL.to_vec());
        assert_eq!(config.elements, DEFAULT_ELEMENTS);
        assert_eq!(config.format, ExportFormat::Svg);
        assert!(!config.quiet);
    }

    #[test]
    fn test_multiple_files_and_hashes() {
        let cli = Cli::try_parse_from([
            "mapwords-bench",
            "./mapwords",
            "-f",
            "a.txt",
            "b.txt",
            "--hash",
            "hash_java,hash_djb2",
            "-q",
        ])
        .unwrap();
        let config = cli.into_config().unwrap();

        assert_eq!(config.files.len(), 2);
        assert_eq!(
            config.hash_functions,
            vec![HashFunction::Java, HashFunction::Djb2]
        );
        assert!(config.quiet);
    }

    #[test]
    fn test_format_from_extension() {
        let cli = Cli::try_parse_from([
            "mapwords-bench",
            "./mapwords",
            "-f",
            "a.txt",
            "-o",
            "out.json",
        ])
        .unwrap();
        assert_eq!(cli.into_config().unwrap().format, ExportFormat::Json);

        let cli = Cli::try_parse_from([
            "mapwords-bench",
            "./mapwords",
            "-f",
            "a.txt",
            "-o",
            "out.json",
            "--format",
            "svg",
        ])
        .unwrap();
        assert_eq!(cli.into_config().unwrap().format, ExportFormat::Svg);
    }

    #[test]
    fn test_files_required() {
        assert!(Cli::try_parse_from(["mapwords-bench", "./mapwords"]).is_err());
    }

    #[test]
    fn test_unknown_hash_rejected() {
        assert!(Cli::try_parse_from([
            "mapwords-bench",
            "./mapwords",
            "-f",
            "a.txt",
            "--hash",
            "hash_crc32",
        ])
        .is_err());
    }
}
