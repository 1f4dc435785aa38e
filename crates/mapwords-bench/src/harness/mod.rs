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

//! Benchmark harness.
//!
//! Drives the benchmark executable and turns its runs into statistics.
//!
//! # Modules
//!
//! - `runner`: Sequential execution of the benchmark executable
//! - `aggregator`: Grouping by hash function and throughput statistics

pub mod aggregator;
pub mod runner;

pub use aggregator::{
    aggregate, summarize, Aggregation, GroupedSeries, Throughput, ThroughputSummary,
};
pub use runner::{BenchmarkRunner, Invoker, ProcessInvoker, RunOutput};
