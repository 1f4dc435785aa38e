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

//! Rendering of benchmark figures.
//!
//! - `svg`: two-panel SVG image
//! - `json`: figure description as JSON

pub mod json;
pub mod svg;

pub use json::export_json;
pub use svg::{export_svg, render_svg};

use crate::config::ExportFormat;
use crate::error::Result;
use crate::plot::Figure;
use std::path::Path;

/// Writes `figure` to `path` in `format`.
pub fn export(figure: &Figure, path: &Path, format: ExportFormat) -> Result<()> {
    match format {
        ExportFormat::Svg => export_svg(figure, path),
        ExportFormat::Json => export_json(figure, path),
    }
}
