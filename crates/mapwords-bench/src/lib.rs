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

//! Mapwords Benchmark Driver
//!
//! Runs the `mapwords` hash-map benchmark across input files and hash
//! functions, parses the statistics each run reports and builds a comparison
//! figure of theoretical complexity curves against measured durations.
//!
//! ## Pipeline
//!
//! 1. [`harness::runner`] invokes the executable once per (file, hash function)
//! 2. [`parser`] turns each run's `stats: key=value` lines into a [`StatsRecord`]
//! 3. [`harness::aggregator`] groups records and computes throughput
//! 4. [`plot`] builds the two-panel [`Figure`]
//! 5. [`reporters`] write the figure as SVG or JSON
//!
//! ## Usage
//!
//! ```no_run
//! use mapwords_bench::{run_batch, HarnessConfig, ProcessInvoker};
//! use std::path::PathBuf;
//!
//! let config = HarnessConfig::new("./mapwords", vec![PathBuf::from("book.txt")]);
//! let mut invoker = ProcessInvoker::new(&config.executable);
//! let figure = run_batch(&config, &mut invoker, &mut std::io::stdout())?;
//! mapwords_bench::reporters::export(&figure, &config.output, config.format)?;
//! # Ok::<(), mapwords_bench::BenchError>(())
//! ```

pub mod config;
pub mod error;
pub mod harness;
pub mod hash;
pub mod inputs;
pub mod parser;
pub mod plot;
pub mod reporters;
pub mod stats;

pub use config::{ExportFormat, HarnessConfig, DEFAULT_ELEMENTS};
pub use error::{BenchError, Result};
pub use harness::{
    aggregate, Aggregation, BenchmarkRunner, GroupedSeries, Invoker, ProcessInvoker,
    ThroughputSummary,
};
pub use hash::HashFunction;
pub use parser::parse_stats;
pub use plot::{Figure, Panel, PlotBuilder, Series};
pub use stats::StatsRecord;

use std::io::Write;

/// Runs a whole batch and returns its figure.
///
/// Validates `config`, executes every run through `invoker`, parses and
/// aggregates the results, then builds the figure. Progress lines and the
/// throughput report are both written to `out`. The first failure aborts the
/// batch.
pub fn run_batch<W: Write>(
    config: &HarnessConfig,
    invoker: &mut dyn Invoker,
    out: &mut W,
) -> Result<Figure> {
    config.validate()?;

    let records = BenchmarkRunner::new(config).run_and_parse(invoker, out)?;
    let aggregation = aggregate(&records)?;

    PlotBuilder::new(config.elements)
        .build(&aggregation, out)
        .map_err(|e| BenchError::io_error("<report output>", e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::{Path, PathBuf};

    struct FixedInvoker {
        calls: usize,
    }

    impl Invoker for FixedInvoker {
        fn invoke(&mut self, _file: &Path, hash_function: HashFunction) -> Result<String> {
            self.calls += 1;
            Ok(format!(
                "stats: word_count=100\nstats: collisions=1\nstats: map_size=8\n\
                 stats: char_count=400\nstats: duration=1.0\nstats: hash_function={}\n",
                hash_function
            ))
        }
    }

    #[test]
    fn test_run_batch() {
        let config = HarnessConfig::new("./mapwords", vec![PathBuf::from("a.txt")])
            .with_quiet(true)
            .with_elements(16);
        let mut invoker = FixedInvoker { calls: 0 };
        let mut out = Vec::new();

        let figure = run_batch(&config, &mut invoker, &mut out).unwrap();

        assert_eq!(invoker.calls, 3);
        assert_eq!(
            figure.empirical.legend(),
            vec!["hash_djb2", "hash_sdbm", "hash_java"]
        );
        let report = String::from_utf8(out).unwrap();
        assert_eq!(report.lines().count(), 4);
        assert!(report.ends_with("words per second: min=100.0, max=100.0, avg=100.0\n"));
    }

    #[test]
    fn test_run_batch_progress_precedes_report() {
        let config = HarnessConfig::new("./mapwords", vec![PathBuf::from("a.txt")])
            .with_hash_functions(&[HashFunction::Java]);
        let mut out = Vec::new();

        run_batch(&config, &mut FixedInvoker { calls: 0 }, &mut out).unwrap();

        let report = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = report.lines().collect();
        assert_eq!(
            lines,
            vec![
                "analyzing: 'a.txt' (hash_java)",
                "hash_java: 100.0 words per second",
                "words per second: min=100.0, max=100.0, avg=100.0",
            ]
        );
    }

    #[test]
    fn test_run_batch_validates_first() {
        let config = HarnessConfig::new("./mapwords", Vec::new());
        let mut invoker = FixedInvoker { calls: 0 };
        let err = run_batch(&config, &mut invoker, &mut std::io::sink()).unwrap_err();

        assert!(matches!(err, BenchError::EmptyInput { .. }));
        assert_eq!(invoker.calls, 0);
    }
}
