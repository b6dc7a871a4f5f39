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

//! jmhfmt core
//!
//! Turns JMH `-rf json` results of the messaging benchmarks into
//! BenchmarkDotNet-style comparison tables.
//!
//! ## Pipeline
//!
//! 1. [`record::parse_results`] deserializes the JMH array.
//! 2. [`classifier::classify`] selects the records of one category and
//!    assigns their variant labels.
//! 3. [`aggregator::aggregate`] derives per-row statistics and compares
//!    every row against the baseline of its message size.
//! 4. [`reporters`] render the resulting [`CategoryReport`]s.
//!
//! [`build_reports`] runs steps 2 and 3 for a list of categories.
//!
//! ## Example
//!
//! ```
//! use jmhfmt_core::{build_reports, parse_results, CategorySpec};
//!
//! let json = r#"[
//!   {"benchmark": "zmq.MemoryStrategyBenchmark.ByteArray_SendRecv",
//!    "params": {"messageSize": "64", "messageCount": "10000"},
//!    "primaryMetric": {"score": 1000.0, "scoreError": 10.0, "rawData": [[1000.0]]}}
//! ]"#;
//!
//! let records = parse_results(json, "inline").unwrap();
//! let reports = build_reports(&records, &[CategorySpec::memory_strategy()]).unwrap();
//! assert_eq!(reports.len(), 1);
//! assert_eq!(reports[0].row(64, "ByteArray_SendRecv").unwrap().ratio.time_ratio, 1.0);
//! ```

pub mod aggregator;
pub mod category;
pub mod classifier;
pub mod comparator;
pub mod config;
pub mod error;
pub mod record;
pub mod reporters;
pub mod stats;

pub use aggregator::{aggregate, CategoryReport, DerivedStats, GroupKey, ReportRow};
pub use category::{Category, CategorySpec, LabelSource};
pub use classifier::{classify, group_by_category, ClassifiedRecord};
pub use comparator::{RatioBasis, RatioResult};
pub use config::{HeaderInfo, OutputFormat, ReportConfig};
pub use error::{ReportError, Result};
pub use record::{parse_results, JmhRecord, RawRecord};

/// Classifies and aggregates `records` for every category in `specs`.
///
/// Categories without any matching record are skipped silently. Reports
/// are returned in the order of `specs`.
///
/// # Errors
///
/// Returns the first [`ReportError::MalformedRecord`] of the first category
/// that contains one.
pub fn build_reports(records: &[JmhRecord], specs: &[CategorySpec]) -> Result<Vec<CategoryReport>> {
    let grouped = group_by_category(records, specs);
    let mut reports = Vec::with_capacity(grouped.len());

    for spec in specs {
        match grouped.get(&spec.category) {
            Some(classified) => reports.push(aggregate(classified, spec)?),
            None => tracing::debug!(category = %spec.category, "no matching records, skipping"),
        }
    }

    Ok(reports)
}
