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

//! BenchmarkDotNet-style markdown rendering.
//!
//! Produces the GitHub report layout: a fenced environment header followed
//! by one table per category, rows grouped by message size with an empty
//! row between groups.

use crate::aggregator::{CategoryReport, ReportRow};
use crate::config::HeaderInfo;
use crate::reporters::units::{
    format_gen0, format_latency, format_rate, format_size, format_throughput,
};

const TABLE_HEADER: &str = "| Method                   | MessageSize | MessageCount | Score (ops/s) | Mean       | Error       | StdDev    | Ratio | RatioSD | Latency   | Messages/sec | Data Throughput | Gen0      | Allocated    | Alloc Ratio |";

const TABLE_ALIGNMENT: &str = "|------------------------- |------------ |------------- |--------------:|-----------:|------------:|----------:|------:|--------:|----------:|-------------:|----------------:|----------:|-------------:|------------:|";

const GROUP_SEPARATOR: &str = "|                          |             |              |               |            |             |           |       |         |           |              |                 |           |              |             |";

/// Renders the full report.
///
/// Categories with no rows are skipped entirely.
pub fn render(header: &HeaderInfo, reports: &[CategoryReport]) -> String {
    let mut md = render_header(header);
    for report in reports.iter().filter(|r| !r.is_empty()) {
        md.push_str(&render_category(report));
    }
    md
}

/// Renders the fenced environment block.
pub fn render_header(header: &HeaderInfo) -> String {
    let mut md = String::new();
    md.push_str("\n```\n");
    md.push_str(&format!("\n{}\n", header.title));
    md.push_str(&format!("{}\n", header.harness));
    md.push_str(&format!("{}\n", header.runtime));
    md.push('\n');
    md.push_str(&format!("{}\n", header.job));
    md.push_str(&format!("{}\n", header.iterations));
    md.push('\n');
    md.push_str("```\n");
    md
}

/// Renders the section of one category.
pub fn render_category(report: &CategoryReport) -> String {
    let mut md = String::new();
    md.push_str(&format!("\n## {}\n\n", report.spec.title));
    md.push_str(TABLE_HEADER);
    md.push('\n');
    md.push_str(TABLE_ALIGNMENT);
    md.push('\n');

    for (i, &size) in report.sizes.iter().enumerate() {
        for row in report.rows_for_size(size) {
            md.push_str(&render_row(report, &row));
            md.push('\n');
        }

        if i + 1 < report.sizes.len() {
            md.push_str(GROUP_SEPARATOR);
            md.push('\n');
        }
    }

    md.push('\n');
    md
}

/// Renders one table row.
pub fn render_row(report: &CategoryReport, row: &ReportRow<'_>) -> String {
    let stats = row.stats;
    let ratio = row.ratio;

    let latency_ns = stats.mean_time_ms * 1e6 / stats.repeat_count as f64;
    let msg_per_sec = stats.repeat_count as f64 * stats.score_ops_per_sec;

    format!(
        "| {:<24} | {:<11} | {:<12} | {:>12.2} | {:>8.3} ms | {:>9.4} ms | {:>8.4} ms | {:>5.2} | {:>6.2} | {:>9} | {:>12} | {:>15} | {:>9} | {:>12} | {:>10.3} |",
        report.spec.display_name(&stats.variant_label),
        stats.config_size,
        stats.repeat_count,
        stats.score_ops_per_sec,
        stats.mean_time_ms,
        stats.error_ms,
        stats.stddev_ms,
        ratio.time_ratio,
        ratio.time_ratio_stddev,
        format_latency(latency_ns),
        format_rate(msg_per_sec),
        format_throughput(stats.config_size, msg_per_sec),
        format_gen0(stats.gc_count),
        format_size(stats.alloc_per_op),
        ratio.alloc_ratio,
    )
}
