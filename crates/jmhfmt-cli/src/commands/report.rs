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

//! Report command - render JMH results as comparison tables

use super::{read_file, write_output};
use crate::error::CliError;
use jmhfmt_core::{build_reports, parse_results, reporters, ReportConfig};
use std::path::Path;

/// Load, aggregate and render the results described by `config`.
///
/// # Errors
///
/// Returns an error if the input cannot be read, is empty or not valid JMH
/// JSON, or contains a malformed record of a reported category.
pub fn render_report(config: &ReportConfig) -> Result<String, CliError> {
    let content = read_file(&config.input_path)?;
    let source_name = config.input_path.display().to_string();

    let records = parse_results(&content, &source_name)?;
    let reports = build_reports(&records, &config.categories)?;

    if reports.is_empty() {
        tracing::warn!(
            source = %source_name,
            "no records of the selected categories, report has no tables"
        );
    }
    tracing::debug!(
        records = records.len(),
        tables = reports.len(),
        format = ?config.format,
        "rendering report"
    );

    Ok(reporters::render(config, &reports)?)
}

/// Render the report and write it to `output` or stdout.
///
/// # Errors
///
/// Returns an error if rendering or writing fails.
pub fn report(config: &ReportConfig, output: Option<&Path>) -> Result<(), CliError> {
    let rendered = render_report(config)?;
    write_output(&rendered, output)?;

    if let Some(path) = output {
        tracing::info!(path = %path.display(), "report written");
    }
    Ok(())
}
