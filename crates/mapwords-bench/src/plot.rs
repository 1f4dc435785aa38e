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

//! Construction of the two-panel comparison figure.
//!
//! The left panel shows reference complexity curves, the right panel one
//! measured duration-over-word-count line per hash function. The result is a
//! plain [`Figure`] description; drawing it is up to a reporter.

use crate::harness::aggregator::Aggregation;
use serde::Serialize;
use std::io::{self, Write};

/// How a series is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SeriesStyle {
    /// Polyline through the points.
    Line,
    /// Horizontal reference rule between its two points.
    Rule,
}

/// One labelled set of points.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Series {
    /// Legend label.
    pub label: String,
    /// Points in drawing order.
    pub points: Vec<(f64, f64)>,
    /// Drawing style.
    pub style: SeriesStyle,
}

impl Series {
    fn line(label: impl Into<String>, points: Vec<(f64, f64)>) -> Self {
        Self {
            label: label.into(),
            points,
            style: SeriesStyle::Line,
        }
    }
}

/// A single set of axes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Panel {
    /// Panel title.
    pub title: String,
    /// X axis label.
    pub x_label: String,
    /// Y axis label.
    pub y_label: String,
    /// Series, in legend order.
    pub series: Vec<Series>,
}

impl Panel {
    /// Legend entries, one per series.
    pub fn legend(&self) -> Vec<&str> {
        self.series.iter().map(|s| s.label.as_str()).collect()
    }

    /// Smallest box containing every point, as `(x_min, x_max, y_min, y_max)`.
    pub fn bounds(&self) -> Option<(f64, f64, f64, f64)> {
        let mut points = self.series.iter().flat_map(|s| s.points.iter());
        let &(x, y) = points.next()?;
        Some(points.fold((x, x, y, y), |(x0, x1, y0, y1), &(x, y)| {
            (x0.min(x), x1.max(x), y0.min(y), y1.max(y))
        }))
    }
}

/// The complete two-panel figure.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Figure {
    /// Reference complexity curves.
    pub theoretical: Panel,
    /// Measured series per hash function.
    pub empirical: Panel,
}

/// Builds [`Figure`]s for a fixed element bound.
#[derive(Debug, Clone, Copy)]
pub struct PlotBuilder {
    elements: usize,
}

impl PlotBuilder {
    /// Creates a builder whose reference curves span `[1, elements)`.
    pub fn new(elements: usize) -> Self {
        Self { elements }
    }

    /// Reference curves O(log n), O(n log n), O(n) and O(1).
    pub fn theoretical_panel(&self) -> Panel {
        let xs: Vec<f64> = (1..self.elements).map(|x| x as f64).collect();
        let curve = |f: fn(f64) -> f64| xs.iter().map(|&x| (x, f(x))).collect::<Vec<_>>();

        let series = vec![
            Series::line("O(log n)", curve(f64::log2)),
            Series::line("O(n log n)", curve(|x| x * x.ln())),
            Series::line("O(n)", curve(|x| x)),
            Series {
                label: "O(1)".to_string(),
                points: vec![(1.0, 1.0), (self.elements as f64, 1.0)],
                style: SeriesStyle::Rule,
            },
        ];

        Panel {
            title: "theoretical".to_string(),
            x_label: "elements".to_string(),
            y_label: "operations".to_string(),
            series,
        }
    }

    /// One line per hash function: sorted word counts against sorted durations.
    pub fn empirical_panel(&self, aggregation: &Aggregation) -> Panel {
        let series = aggregation
            .groups
            .iter()
            .map(|group| {
                let points = group
                    .word_counts
                    .iter()
                    .zip(&group.durations)
                    .map(|(&words, &secs)| (words as f64, secs))
                    .collect();
                Series::line(group.hash_function.as_str(), points)
            })
            .collect();

        Panel {
            title: "empirical".to_string(),
            x_label: "word count".to_string(),
            y_label: "duration (s)".to_string(),
            series,
        }
    }

    /// Builds the figure and writes the throughput report to `out`.
    pub fn build<W: Write>(&self, aggregation: &Aggregation, out: &mut W) -> io::Result<Figure> {
        write_throughput_report(aggregation, out)?;

        Ok(Figure {
            theoretical: self.theoretical_panel(),
            empirical: self.empirical_panel(aggregation),
        })
    }
}

/// Writes one line per record, then the min/max/mean summary line.
///
/// ```text
/// hash_djb2: 100.0 words per second
/// words per second: min=100.0, max=100.0, avg=100.0
/// ```
pub fn write_throughput_report<W: Write>(aggregation: &Aggregation, out: &mut W) -> io::Result<()> {
    for t in &aggregation.throughputs {
        writeln!(out, "{}: {:?} words per second", t.hash_function, t.words_per_sec)?;
    }

    let summary = &aggregation.summary;
    writeln!(
        out,
        "words per second: min={:?}, max={:?}, avg={:?}",
        summary.min, summary.max, summary.mean
    )
}
