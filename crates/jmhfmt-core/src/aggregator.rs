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

//! Result aggregation and derived statistics.
//!
//! Aggregation runs in two phases with a barrier between them:
//!
//! 1. every classified record is validated and turned into a
//!    [`DerivedStats`] independently (in parallel, results kept in input
//!    order);
//! 2. once all rows exist, each row is compared against the baseline of its
//!    message size (see [`crate::comparator`]).

use crate::category::CategorySpec;
use crate::classifier::ClassifiedRecord;
use crate::comparator::{compute_ratios, RatioBasis, RatioResult};
use crate::error::Result;
use crate::record::RawRecord;
use crate::stats::{ops_per_sec_to_ms, population_std_dev, reciprocal_spread_ms};
use rayon::prelude::*;
use serde::Serialize;
use std::collections::{BTreeSet, HashMap};

/// Identifies one aggregated row: a message size and a variant.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct GroupKey {
    /// Message size in bytes.
    pub config_size: u64,
    /// Variant label.
    pub variant_label: String,
}

impl GroupKey {
    /// Creates a key.
    pub fn new(config_size: u64, variant_label: impl Into<String>) -> Self {
        Self {
            config_size,
            variant_label: variant_label.into(),
        }
    }
}

/// Statistics derived from one record, in milliseconds per operation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DerivedStats {
    /// Variant label.
    pub variant_label: String,
    /// Message size in bytes.
    pub config_size: u64,
    /// Messages per operation.
    pub repeat_count: u64,
    /// JMH score (ops/s).
    pub score_ops_per_sec: f64,
    /// `1000 / score`.
    pub mean_time_ms: f64,
    /// `1000 * scoreError / score²`.
    pub error_ms: f64,
    /// Population standard deviation of the first sample set, `* 1000 / score²`.
    pub stddev_ms: f64,
    /// `gc.alloc.rate` (MB/sec).
    pub alloc_rate: f64,
    /// `gc.alloc.rate.norm` (bytes per op).
    pub alloc_per_op: f64,
    /// `gc.count`.
    pub gc_count: f64,
}

impl DerivedStats {
    /// Derives statistics from a validated record.
    pub fn from_record(record: &RawRecord) -> Self {
        let score = record.primary_score;
        let samples_sd = population_std_dev(record.samples());

        Self {
            variant_label: record.variant_label.clone(),
            config_size: record.config_size,
            repeat_count: record.repeat_count,
            score_ops_per_sec: score,
            mean_time_ms: ops_per_sec_to_ms(score),
            error_ms: reciprocal_spread_ms(record.primary_score_error, score),
            stddev_ms: reciprocal_spread_ms(samples_sd, score),
            alloc_rate: record.secondary.alloc_rate,
            alloc_per_op: record.secondary.alloc_per_op,
            gc_count: record.secondary.gc_count,
        }
    }

    /// The key of this row.
    pub fn key(&self) -> GroupKey {
        GroupKey::new(self.config_size, self.variant_label.clone())
    }
}

/// One row of a category report, ready for rendering.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReportRow<'a> {
    /// Row statistics.
    pub stats: &'a DerivedStats,
    /// Comparison against the size group's baseline.
    pub ratio: &'a RatioResult,
}

/// Fully aggregated results of one category.
#[derive(Debug, Clone)]
pub struct CategoryReport {
    /// The category configuration used.
    pub spec: CategorySpec,
    /// Distinct message sizes, ascending.
    pub sizes: Vec<u64>,
    /// Distinct variants, in display order.
    pub variants: Vec<String>,
    /// Derived statistics per key.
    pub stats: HashMap<GroupKey, DerivedStats>,
    /// Ratios per key; has exactly the keys of `stats`.
    pub ratios: HashMap<GroupKey, RatioResult>,
}

impl CategoryReport {
    /// Returns the row for a size and variant, if present.
    pub fn row(&self, config_size: u64, variant_label: &str) -> Option<ReportRow<'_>> {
        let key = GroupKey::new(config_size, variant_label);
        let stats = self.stats.get(&key)?;
        let ratio = self.ratios.get(&key)?;
        Some(ReportRow { stats, ratio })
    }

    /// Rows of one size, in variant display order.
    pub fn rows_for_size(&self, config_size: u64) -> Vec<ReportRow<'_>> {
        self.variants
            .iter()
            .filter_map(|variant| self.row(config_size, variant))
            .collect()
    }

    /// All rows, ordered by size then variant.
    pub fn rows(&self) -> Vec<ReportRow<'_>> {
        self.sizes
            .iter()
            .flat_map(|&size| self.rows_for_size(size))
            .collect()
    }

    /// Sizes whose group has no baseline row.
    pub fn sizes_without_baseline(&self) -> Vec<u64> {
        self.sizes
            .iter()
            .copied()
            .filter(|&size| {
                self.rows_for_size(size)
                    .iter()
                    .any(|row| row.ratio.basis == RatioBasis::NoBaseline)
            })
            .collect()
    }

    /// Number of aggregated rows.
    pub fn len(&self) -> usize {
        self.stats.len()
    }

    /// Returns whether the report has no rows.
    pub fn is_empty(&self) -> bool {
        self.stats.is_empty()
    }
}

/// Aggregates the classified records of one category.
///
/// # Errors
///
/// Returns [`crate::error::ReportError::MalformedRecord`] for the first
/// (lowest index) record lacking a required field. There is no partial
/// result.
///
/// # Examples
///
/// ```
/// use jmhfmt_core::aggregator::aggregate;
/// use jmhfmt_core::category::CategorySpec;
/// use jmhfmt_core::classifier::classify;
/// use jmhfmt_core::record::parse_results;
///
/// let records = parse_results(r#"[{
///     "benchmark": "x.MemoryStrategyBenchmark.ByteArray_SendRecv",
///     "params": {"messageSize": "64", "messageCount": "10000"},
///     "primaryMetric": {"score": 1000.0, "scoreError": 10.0, "rawData": [[990.0, 1010.0]]}
/// }]"#, "inline").unwrap();
///
/// let spec = CategorySpec::memory_strategy();
/// let report = aggregate(&classify(&records, &spec), &spec).unwrap();
/// assert_eq!(report.sizes, vec![64]);
/// assert_eq!(report.row(64, "ByteArray_SendRecv").unwrap().stats.mean_time_ms, 1.0);
/// ```
pub fn aggregate(classified: &[ClassifiedRecord<'_>], spec: &CategorySpec) -> Result<CategoryReport> {
    // Phase 1: per-record derivation. Results are collected in input order
    // so the first malformed record is reported deterministically.
    let derived: Vec<Result<DerivedStats>> = classified
        .par_iter()
        .map(|c| {
            let raw = RawRecord::from_jmh(c.index, c.record, c.variant_label.clone())?;
            Ok(DerivedStats::from_record(&raw))
        })
        .collect();
    let derived = derived.into_iter().collect::<Result<Vec<_>>>()?;

    let mut stats: HashMap<GroupKey, DerivedStats> = HashMap::with_capacity(derived.len());
    for row in derived {
        let key = row.key();
        if stats.insert(key.clone(), row).is_some() {
            tracing::warn!(
                size = key.config_size,
                variant = %key.variant_label,
                "duplicate result for key, keeping the later record"
            );
        }
    }

    let sizes: Vec<u64> = stats
        .keys()
        .map(|k| k.config_size)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();
    let present: BTreeSet<String> = stats.keys().map(|k| k.variant_label.clone()).collect();
    let variants = order_variants(&present, spec);

    // Phase 2: baseline comparison over the complete table.
    let ratios = compute_ratios(&stats, &sizes, &spec.baseline);

    tracing::debug!(
        category = %spec.category,
        rows = stats.len(),
        sizes = sizes.len(),
        variants = variants.len(),
        "aggregated category"
    );

    Ok(CategoryReport {
        spec: spec.clone(),
        sizes,
        variants,
        stats,
        ratios,
    })
}

/// Orders the variants present in a category for display.
///
/// With a canonical order: its labels that are present, then every other
/// label lexically. Without one: the baseline (if present), then the rest
/// lexically.
pub fn order_variants(present: &BTreeSet<String>, spec: &CategorySpec) -> Vec<String> {
    let mut ordered: Vec<String> = Vec::with_capacity(present.len());

    if spec.canonical_order.is_empty() {
        if present.contains(&spec.baseline) {
            ordered.push(spec.baseline.clone());
        }
    } else {
        ordered.extend(
            spec.canonical_order
                .iter()
                .filter(|label| present.contains(*label))
                .cloned(),
        );
    }

    // BTreeSet iterates lexically
    let rest: Vec<String> = present
        .iter()
        .filter(|label| !ordered.contains(*label))
        .cloned()
        .collect();
    ordered.extend(rest);
    ordered
}
