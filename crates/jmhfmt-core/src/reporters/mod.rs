// jmhfmt - JMH Benchmark Report Formatter
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

//! Report renderers.
//!
//! Renderers receive fully aggregated [`CategoryReport`]s and only format
//! them; no statistics are computed here.
//!
//! # Modules
//!
//! - `markdown`: BenchmarkDotNet-style GitHub markdown tables
//! - `json`: machine-readable export of the aggregated data
//! - `units`: display helpers for sizes, rates, throughput and latency

pub mod json;
pub mod markdown;
pub mod units;

use crate::aggregator::CategoryReport;
use crate::config::{OutputFormat, ReportConfig};
use crate::error::Result;

/// Renders reports in the configured output format.
pub fn render(config: &ReportConfig, reports: &[CategoryReport]) -> Result<String> {
    match config.format {
        OutputFormat::Markdown => Ok(markdown::render(&config.header, reports)),
        OutputFormat::Json => json::render(&config.header, reports),
    }
}
