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

//! SVG rendering of a [`Figure`].

use crate::error::{BenchError, Result};
use crate::plot::{Figure, Panel, SeriesStyle};
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

const PANEL_WIDTH: f64 = 600.0;
const HEIGHT: f64 = 480.0;
const MARGIN_LEFT: f64 = 80.0;
const MARGIN_RIGHT: f64 = 24.0;
const MARGIN_TOP: f64 = 40.0;
const MARGIN_BOTTOM: f64 = 60.0;
const TICKS: usize = 5;

const PALETTE: &[&str] = &[
    "#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd", "#8c564b", "#e377c2", "#7f7f7f",
];

/// Writes `figure` as a two-panel SVG image.
pub fn export_svg(figure: &Figure, path: &Path) -> Result<()> {
    fs::write(path, render_svg(figure)).map_err(|e| BenchError::io_error(path, e))
}

/// Renders `figure` to an SVG document.
pub fn render_svg(figure: &Figure) -> String {
    let mut svg = String::new();
    let width = PANEL_WIDTH * 2.0;

    let _ = writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}" font-family="sans-serif" font-size="12">"#,
        w = width,
        h = HEIGHT
    );
    svg.push_str(r#"<rect width="100%" height="100%" fill="white"/>"#);
    svg.push('\n');

    render_panel(&mut svg, &figure.theoretical, 0.0);
    render_panel(&mut svg, &figure.empirical, PANEL_WIDTH);

    svg.push_str("</svg>\n");
    svg
}

/// Maps data coordinates into one panel's plot area.
struct Scale {
    x0: f64,
    x1: f64,
    y0: f64,
    y1: f64,
    left: f64,
    right: f64,
    top: f64,
    bottom: f64,
}

impl Scale {
    fn new(panel: &Panel, offset: f64) -> Self {
        let (x0, x1, y0, y1) = panel.bounds().unwrap_or((0.0, 1.0, 0.0, 1.0));
        let (x0, x1) = widen(x0, x1);
        let (y0, y1) = widen(y0, y1);

        Self {
            x0,
            x1,
            y0,
            y1,
            left: offset + MARGIN_LEFT,
            right: offset + PANEL_WIDTH - MARGIN_RIGHT,
            top: MARGIN_TOP,
            bottom: HEIGHT - MARGIN_BOTTOM,
        }
    }

    fn x(&self, v: f64) -> f64 {
        self.left + (v - self.x0) / (self.x1 - self.x0) * (self.right - self.left)
    }

    fn y(&self, v: f64) -> f64 {
        self.bottom - (v - self.y0) / (self.y1 - self.y0) * (self.bottom - self.top)
    }
}

/// Gives a zero-width range some extent so it can be scaled.
fn widen(lo: f64, hi: f64) -> (f64, f64) {
    if hi > lo {
        (lo, hi)
    } else {
        let pad = if lo == 0.0 { 1.0 } else { lo.abs() * 0.5 };
        (lo - pad, hi + pad)
    }
}

fn render_panel(svg: &mut String, panel: &Panel, offset: f64) {
    let scale = Scale::new(panel, offset);

    let _ = writeln!(
        svg,
        r#"<g class="panel"><text x="{:.1}" y="{:.1}" text-anchor="middle" font-size="14">{}</text>"#,
        (scale.left + scale.right) / 2.0,
        MARGIN_TOP / 2.0,
        escape(&panel.title)
    );
    render_axes(svg, panel, &scale);

    for (i, series) in panel.series.iter().enumerate() {
        let color = PALETTE[i % PALETTE.len()];
        let points: Vec<String> = series
            .points
            .iter()
            .map(|&(x, y)| format!("{:.2},{:.2}", scale.x(x), scale.y(y)))
            .collect();
        let dash = match series.style {
            SeriesStyle::Line => "",
            SeriesStyle::Rule => r#" stroke-dasharray="6 4""#,
        };
        let _ = writeln!(
            svg,
            r#"<polyline fill="none" stroke="{}" stroke-width="1.5"{} points="{}"/>"#,
            color,
            dash,
            points.join(" ")
        );
    }

    render_legend(svg, panel, &scale);
    svg.push_str("</g>\n");
}

fn render_axes(svg: &mut String, panel: &Panel, scale: &Scale) {
    let _ = writeln!(
        svg,
        r#"<rect x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}" fill="none" stroke="black"/>"#,
        scale.left,
        scale.top,
        scale.right - scale.left,
        scale.bottom - scale.top
    );

    for i in 0..=TICKS {
        let t = i as f64 / TICKS as f64;

        let xv = scale.x0 + t * (scale.x1 - scale.x0);
        let px = scale.x(xv);
        let _ = writeln!(
            svg,
            r#"<line x1="{px:.1}" y1="{b:.1}" x2="{px:.1}" y2="{e:.1}" stroke="black"/><text x="{px:.1}" y="{l:.1}" text-anchor="middle">{}</text>"#,
            format_tick(xv),
            b = scale.bottom,
            e = scale.bottom + 5.0,
            l = scale.bottom + 18.0
        );

        let yv = scale.y0 + t * (scale.y1 - scale.y0);
        let py = scale.y(yv);
        let _ = writeln!(
            svg,
            r#"<line x1="{s:.1}" y1="{py:.1}" x2="{l:.1}" y2="{py:.1}" stroke="black"/><text x="{t:.1}" y="{ty:.1}" text-anchor="end">{}</text>"#,
            format_tick(yv),
            s = scale.left - 5.0,
            l = scale.left,
            t = scale.left - 8.0,
            ty = py + 4.0
        );
    }

    let _ = writeln!(
        svg,
        r#"<text x="{:.1}" y="{:.1}" text-anchor="middle">{}</text>"#,
        (scale.left + scale.right) / 2.0,
        HEIGHT - 16.0,
        escape(&panel.x_label)
    );
    let cx = scale.left - MARGIN_LEFT + 16.0;
    let cy = (scale.top + scale.bottom) / 2.0;
    let _ = writeln!(
        svg,
        r#"<text x="{cx:.1}" y="{cy:.1}" text-anchor="middle" transform="rotate(-90 {cx:.1} {cy:.1})">{}</text>"#,
        escape(&panel.y_label)
    );
}

fn render_legend(svg: &mut String, panel: &Panel, scale: &Scale) {
    let x = scale.left + 10.0;
    for (i, label) in panel.legend().into_iter().enumerate() {
        let y = scale.top + 16.0 + i as f64 * 16.0;
        let color = PALETTE[i % PALETTE.len()];
        let _ = writeln!(
            svg,
            r#"<line x1="{x:.1}" y1="{y:.1}" x2="{x2:.1}" y2="{y:.1}" stroke="{color}" stroke-width="2"/><text x="{tx:.1}" y="{ty:.1}">{}</text>"#,
            escape(label),
            x2 = x + 20.0,
            tx = x + 26.0,
            ty = y + 4.0
        );
    }
}

fn format_tick(v: f64) -> String {
    let a = v.abs();
    if a == 0.0 || a >= 100.0 {
        format!("{:.0}", v)
    } else if a >= 1.0 {
        format!("{:.1}", v)
    } else {
        format!("{:.3}", v)
    }
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::harness::aggregator::aggregate;
    use crate::hash::HashFunction;
    use crate::plot::PlotBuilder;
    use crate::stats::StatsRecord;
    use tempfile::NamedTempFile;

    fn figure() -> Figure {
        let records = vec![
            StatsRecord::new(100, 0, 0, 0, 1.0, HashFunction::Djb2).unwrap(),
            StatsRecord::new(300, 0, 0, 0, 2.0, HashFunction::Java).unwrap(),
        ];
        PlotBuilder::new(50)
            .build(&aggregate(&records).unwrap(), &mut std::io::sink())
            .unwrap()
    }

    #[test]
    fn test_render_contains_labels_and_legend() {
        let svg = render_svg(&figure());

        assert!(svg.starts_with("<svg"));
        assert!(svg.trim_end().ends_with("</svg>"));
        for text in [
            "elements",
            "operations",
            "word count",
            "duration (s)",
            "O(log n)",
            "O(n log n)",
            "O(n)",
            "O(1)",
            "hash_djb2",
            "hash_java",
        ] {
            assert!(svg.contains(text), "missing {}", text);
        }
        assert_eq!(svg.matches("<polyline").count(), 6);
        assert!(svg.contains("stroke-dasharray"));
    }

    #[test]
    fn test_single_point_series_renders() {
        let records = vec![StatsRecord::new(10, 0, 0, 0, 0.5, HashFunction::Sdbm).unwrap()];
        let figure = PlotBuilder::new(2)
            .build(&aggregate(&records).unwrap(), &mut std::io::sink())
            .unwrap();
        let svg = render_svg(&figure);
        assert!(!svg.contains("NaN"));
        assert!(!svg.contains("inf"));
    }

    #[test]
    fn test_escape() {
        assert_eq!(escape("a<b & \"c\">"), "a&lt;b &amp; &quot;c&quot;&gt;");
    }

    #[test]
    fn test_widen() {
        assert_eq!(widen(0.0, 0.0), (-1.0, 1.0));
        assert_eq!(widen(4.0, 4.0), (2.0, 6.0));
        assert_eq!(widen(1.0, 3.0), (1.0, 3.0));
    }

    #[test]
    fn test_export_svg() {
        let temp = NamedTempFile::new().unwrap();
        export_svg(&figure(), temp.path()).unwrap();

        let content = fs::read_to_string(temp.path()).unwrap();
        assert!(content.contains("hash_djb2"));
    }

    #[test]
    fn test_export_svg_bad_path() {
        let err = export_svg(&figure(), Path::new("/nonexistent/dir/figure.svg")).unwrap_err();
        assert!(matches!(err, BenchError::Io { .. }));
    }
}
