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

//! JSON export of aggregated results.

use crate::aggregator::{CategoryReport, DerivedStats};
use crate::category::Category;
use crate::comparator::RatioResult;
use crate::config::HeaderInfo;
use crate::error::Result;
use serde::Serialize;

#[derive(Serialize)]
struct ReportExport<'a> {
    title: &'a str,
    categories: Vec<CategoryExport<'a>>,
}

#[derive(Serialize)]
struct CategoryExport<'a> {
    category: Category,
    title: &'a str,
    baseline: &'a str,
    sizes: &'a [u64],
    variants: &'a [String],
    sizes_without_baseline: Vec<u64>,
    rows: Vec<RowExport<'a>>,
}

#[derive(Serialize)]
struct RowExport<'a> {
    display_name: &'a str,
    #[serde(flatten)]
    stats: &'a DerivedStats,
    ratio: &'a RatioResult,
}

/// Serializes aggregated reports as pretty-printed JSON.
///
/// Rows appear in display order (size, then variant). Categories with no
/// rows are skipped, as in the markdown report.
pub fn render(header: &HeaderInfo, reports: &[CategoryReport]) -> Result<String> {
    let export = ReportExport {
        title: &header.title,
        categories: reports
            .iter()
            .filter(|r| !r.is_empty())
            .map(|report| CategoryExport {
                category: report.spec.category,
                title: &report.spec.title,
                baseline: &report.spec.baseline,
                sizes: &report.sizes,
                variants: &report.variants,
                sizes_without_baseline: report.sizes_without_baseline(),
                rows: report
                    .rows()
                    .into_iter()
                    .map(|row| RowExport {
                        display_name: report.spec.display_name(&row.stats.variant_label),
                        stats: row.stats,
                        ratio: row.ratio,
                    })
                    .collect(),
            })
            .collect(),
    };

    Ok(serde_json::to_string_pretty(&export)?)
}
