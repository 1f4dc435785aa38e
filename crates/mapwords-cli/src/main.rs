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

//! mapwords-bench: run the mapwords benchmark and plot the results.

mod cli;

use clap::Parser;
use cli::Cli;
use mapwords_bench::{reporters, run_batch, ProcessInvoker};
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Log filter used when `RUST_LOG` is unset or invalid.
const DEFAULT_LOG_FILTER: &str = "mapwords_bench=warn";

fn main() -> ExitCode {
    // Logs go to stderr; stdout carries the progress and throughput lines.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if e.is_run_failure() {
                error!(error = %e, "benchmark batch aborted");
            }
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> mapwords_bench::Result<()> {
    let config = cli.into_config()?;
    info!(
        executable = %config.executable.display(),
        runs = config.run_count(),
        "starting benchmark batch"
    );

    let mut invoker = ProcessInvoker::new(&config.executable);
    let figure = run_batch(&config, &mut invoker, &mut std::io::stdout().lock())?;

    reporters::export(&figure, &config.output, config.format)?;
    info!(output = %config.output.display(), "figure written");
    Ok(())
}
