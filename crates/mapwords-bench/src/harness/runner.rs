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

//! Sequential execution of the benchmark executable.
//!
//! Runs are issued one at a time, file-major: every hash function runs on the
//! first file before the second file is touched. Each run blocks until the
//! subprocess exits. There is no timeout, so a hung executable hangs the
//! batch.

use crate::config::HarnessConfig;
use crate::error::{BenchError, Result};
use crate::hash::HashFunction;
use crate::parser::parse_stats;
use crate::stats::StatsRecord;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::time::Instant;
use tracing::{debug, info};

/// Maximum number of stderr bytes quoted in an execution error.
const STDERR_TAIL: usize = 512;

/// Executes a single benchmark run and returns its standard output.
pub trait Invoker {
    /// Runs the benchmark on `file` with `hash_function`.
    ///
    /// # Errors
    ///
    /// Returns [`BenchError::Execution`] if the run could not be started or
    /// did not succeed.
    fn invoke(&mut self, file: &Path, hash_function: HashFunction) -> Result<String>;
}

/// Runs the mapwords executable as a subprocess.
///
/// The command line is `<executable> -f <file> -h <hash_function>`.
#[derive(Debug, Clone)]
pub struct ProcessInvoker {
    executable: PathBuf,
}

impl ProcessInvoker {
    /// Creates an invoker for the executable at `executable`.
    pub fn new(executable: impl Into<PathBuf>) -> Self {
        Self {
            executable: executable.into(),
        }
    }

    /// Path of the executable.
    pub fn executable(&self) -> &Path {
        &self.executable
    }
}

impl Invoker for ProcessInvoker {
    fn invoke(&mut self, file: &Path, hash_function: HashFunction) -> Result<String> {
        let output = Command::new(&self.executable)
            .arg("-f")
            .arg(file)
            .arg("-h")
            .arg(hash_function.as_str())
            .stdin(Stdio::null())
            .output()
            .map_err(|e| {
                BenchError::execution(
                    file,
                    hash_function,
                    format!("cannot start '{}': {}", self.executable.display(), e),
                )
            })?;

        let stderr = String::from_utf8_lossy(&output.stderr);
        if !output.status.success() {
            let mut reason = output.status.to_string();
            let tail = stderr_tail(&stderr);
            if !tail.is_empty() {
                reason.push_str(": ");
                reason.push_str(tail);
            }
            return Err(BenchError::execution(file, hash_function, reason));
        }
        if !stderr.trim().is_empty() {
            debug!(stderr = %stderr.trim(), "benchmark wrote to stderr");
        }

        String::from_utf8(output.stdout)
            .map_err(|_| BenchError::parse("output is not valid UTF-8").in_run(file, hash_function))
    }
}

/// Last line-aligned part of stderr, at most [`STDERR_TAIL`] bytes.
fn stderr_tail(stderr: &str) -> &str {
    let trimmed = stderr.trim();
    if trimmed.len() <= STDERR_TAIL {
        return trimmed;
    }
    let mut start = trimmed.len() - STDERR_TAIL;
    while !trimmed.is_char_boundary(start) {
        start += 1;
    }
    let tail = &trimmed[start..];
    match tail.find('\n') {
        Some(newline) => &tail[newline + 1..],
        None => tail,
    }
}

/// Raw output of one completed run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunOutput {
    /// Input file of the run.
    pub file: PathBuf,
    /// Hash function of the run.
    pub hash_function: HashFunction,
    /// Full standard output.
    pub stdout: String,
}

impl RunOutput {
    /// Parses the output, naming this run on failure.
    ///
    /// A zero duration is rejected here as well, so the error can name the
    /// file that produced it.
    pub fn parse(&self) -> Result<StatsRecord> {
        parse_stats(&self.stdout)
            .and_then(|record| record.throughput().map(|_| record))
            .map_err(|e| e.in_run(&self.file, self.hash_function))
    }
}

/// Drives a batch of runs over files × hash functions.
pub struct BenchmarkRunner<'a> {
    config: &'a HarnessConfig,
}

impl<'a> BenchmarkRunner<'a> {
    /// Creates a runner for `config`.
    pub fn new(config: &'a HarnessConfig) -> Self {
        Self { config }
    }

    /// The (file, hash function) pairs of the batch, in run order.
    pub fn plan(&self) -> Vec<(&'a Path, HashFunction)> {
        let config = self.config;
        config
            .files
            .iter()
            .flat_map(|file| {
                config
                    .hash_functions
                    .iter()
                    .map(move |&hf| (file.as_path(), hf))
            })
            .collect()
    }

    /// Executes every run in order and collects the raw outputs.
    ///
    /// Unless the configuration is quiet, an `analyzing:` line is written to
    /// `out` before each run. Stops at the first failing run; later runs are
    /// not issued.
    pub fn run_all<W: Write>(
        &self,
        invoker: &mut dyn Invoker,
        out: &mut W,
    ) -> Result<Vec<RunOutput>> {
        let plan = self.plan();
        let mut outputs = Vec::with_capacity(plan.len());
        let batch_start = Instant::now();

        for (index, (file, hash_function)) in plan.into_iter().enumerate() {
            if !self.config.quiet {
                writeln!(out, "analyzing: '{}' ({})", file.display(), hash_function)
                    .map_err(|e| BenchError::io_error("<progress output>", e))?;
            }
            debug!(
                run = index + 1,
                file = %file.display(),
                hash_function = %hash_function,
                "invoking benchmark"
            );

            let stdout = invoker.invoke(file, hash_function)?;
            outputs.push(RunOutput {
                file: file.to_path_buf(),
                hash_function,
                stdout,
            });
        }

        info!(
            runs = outputs.len(),
            elapsed_ms = batch_start.elapsed().as_millis() as u64,
            "benchmark batch finished"
        );
        Ok(outputs)
    }

    /// Executes every run, then parses each output in run order.
    pub fn run_and_parse<W: Write>(
        &self,
        invoker: &mut dyn Invoker,
        out: &mut W,
    ) -> Result<Vec<StatsRecord>> {
        self.run_all(invoker, out)?
            .iter()
            .map(RunOutput::parse)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Records calls and fails on a chosen call index.
    struct ScriptedInvoker {
        calls: Vec<(PathBuf, HashFunction)>,
        fail_at: Option<usize>,
    }

    impl ScriptedInvoker {
        fn new(fail_at: Option<usize>) -> Self {
            Self {
                calls: Vec::new(),
                fail_at,
            }
        }
    }

    impl Invoker for ScriptedInvoker {
        fn invoke(&mut self, file: &Path, hash_function: HashFunction) -> Result<String> {
            self.calls.push((file.to_path_buf(), hash_function));
            if self.fail_at == Some(self.calls.len() - 1) {
                return Err(BenchError::execution(file, hash_function, "exit status: 1"));
            }
            Ok(stats_output(self.calls.len() as u64, "0.5", hash_function))
        }
    }

    fn stats_output(word_count: u64, duration: &str, hash_function: HashFunction) -> String {
        format!(
            "stats: word_count={}\nstats: collisions=0\nstats: map_size=16\n\
             stats: char_count=10\nstats: duration={}\nstats: hash_function={}\n",
            word_count, duration, hash_function
        )
    }

    fn config() -> HarnessConfig {
        HarnessConfig::new("./mapwords", vec![PathBuf::from("f1"), PathBuf::from("f2")])
            .with_quiet(true)
    }

    #[test]
    fn test_runs_file_major() {
        let config = config();
        let mut invoker = ScriptedInvoker::new(None);
        let outputs = BenchmarkRunner::new(&config)
            .run_all(&mut invoker, &mut std::io::sink())
            .unwrap();

        let expected: Vec<(PathBuf, HashFunction)> = ["f1", "f2"]
            .iter()
            .flat_map(|f| HashFunction::ALL.into_iter().map(move |hf| (PathBuf::from(f), hf)))
            .collect();
        assert_eq!(invoker.calls, expected);
        assert_eq!(outputs.len(), 6);
        assert_eq!(outputs[3].file, PathBuf::from("f2"));
        assert_eq!(outputs[3].hash_function, HashFunction::Djb2);
    }

    #[test]
    fn test_failure_stops_batch() {
        let config = config();
        let mut invoker = ScriptedInvoker::new(Some(1));
        let err = BenchmarkRunner::new(&config)
            .run_all(&mut invoker, &mut std::io::sink())
            .unwrap_err();

        assert!(matches!(err, BenchError::Execution { .. }));
        assert_eq!(invoker.calls.len(), 2);
    }

    #[test]
    fn test_run_and_parse_keeps_order() {
        let config = config();
        let mut invoker = ScriptedInvoker::new(None);
        let records = BenchmarkRunner::new(&config)
            .run_and_parse(&mut invoker, &mut std::io::sink())
            .unwrap();

        let counts: Vec<u64> = records.iter().map(StatsRecord::word_count).collect();
        assert_eq!(counts, vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(records[2].hash_function(), HashFunction::Java);
    }

    #[test]
    fn test_parse_failure_names_run() {
        let output = RunOutput {
            file: PathBuf::from("book.txt"),
            hash_function: HashFunction::Sdbm,
            stdout: "garbage".to_string(),
        };
        let err = output.parse().unwrap_err();
        assert!(matches!(err, BenchError::RunParse { .. }));
        assert!(err.to_string().contains("book.txt"));
    }

    #[test]
    fn test_zero_duration_names_run() {
        let output = RunOutput {
            file: PathBuf::from("b.txt"),
            hash_function: HashFunction::Djb2,
            stdout: stats_output(10, "0", HashFunction::Djb2),
        };
        let err = output.parse().unwrap_err();
        assert_eq!(
            err,
            BenchError::ZeroDuration {
                file: Some(PathBuf::from("b.txt")),
                hash_function: HashFunction::Djb2,
                word_count: 10,
            }
        );
        assert!(err.to_string().contains("b.txt"));
    }

    #[test]
    fn test_progress_lines_go_to_writer() {
        let config = config()
            .with_quiet(false)
            .with_hash_functions(&[HashFunction::Sdbm]);
        let mut out = Vec::new();
        BenchmarkRunner::new(&config)
            .run_all(&mut ScriptedInvoker::new(None), &mut out)
            .unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "analyzing: 'f1' (hash_sdbm)\nanalyzing: 'f2' (hash_sdbm)\n"
        );
    }

    #[test]
    fn test_quiet_writes_nothing() {
        let config = config();
        let mut out = Vec::new();
        BenchmarkRunner::new(&config)
            .run_all(&mut ScriptedInvoker::new(None), &mut out)
            .unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn test_plan_size() {
        let config = config().with_hash_functions(&[HashFunction::Java]);
        let plan = BenchmarkRunner::new(&config).plan();
        assert_eq!(
            plan,
            vec![
                (Path::new("f1"), HashFunction::Java),
                (Path::new("f2"), HashFunction::Java),
            ]
        );
    }

    #[test]
    fn test_missing_executable() {
        let mut invoker = ProcessInvoker::new("/nonexistent/mapwords");
        let err = invoker
            .invoke(Path::new("a.txt"), HashFunction::Djb2)
            .unwrap_err();
        assert!(matches!(err, BenchError::Execution { .. }));
        assert!(err.to_string().contains("cannot start"));
    }

    #[test]
    fn test_stderr_tail() {
        assert_eq!(stderr_tail("  boom \n"), "boom");
        let long = format!("{}\nlast line", "x".repeat(STDERR_TAIL * 2));
        assert_eq!(stderr_tail(&long), "last line");
    }
}
