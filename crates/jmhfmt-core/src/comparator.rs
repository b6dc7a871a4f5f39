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

//! Baseline comparison.
//!
//! Every row of a category is compared against the baseline variant of its
//! own message size. Sizes are never compared with each other.

use crate::aggregator::{DerivedStats, GroupKey};
use crate::stats::ratio_std_dev;
use serde::Serialize;
use std::collections::HashMap;

/// RatioSD shown on a baseline's own row. Never an exact zero, matching
/// BenchmarkDotNet output.
pub const BASELINE_RATIO_SD: f64 = 0.01;

/// How a [`RatioResult`] was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RatioBasis {
    /// The row is the baseline of its size group.
    Baseline,
    /// The row was compared against its size group's baseline.
    Relative,
    /// The size group has no baseline; the values are a fallback.
    NoBaseline,
}

/// Baseline-relative comparison of one row.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RatioResult {
    /// Mean time relative to the baseline.
    pub time_ratio: f64,
    /// Spread of `time_ratio`.
    pub time_ratio_stddev: f64,
    /// Bytes allocated per op relative to the baseline.
    pub alloc_ratio: f64,
    /// How the figures above were obtained.
    pub basis: RatioBasis,
}

impl RatioResult {
    /// Result for the baseline row itself.
    pub fn baseline() -> Self {
        Self {
            time_ratio: 1.0,
            time_ratio_stddev: BASELINE_RATIO_SD,
            alloc_ratio: 1.0,
            basis: RatioBasis::Baseline,
        }
    }

    /// Fallback for rows whose size group has no baseline.
    ///
    /// Numerically identical to a self-comparison, apart from the spread.
    pub fn no_baseline() -> Self {
        Self {
            time_ratio: 1.0,
            time_ratio_stddev: 0.0,
            alloc_ratio: 1.0,
            basis: RatioBasis::NoBaseline,
        }
    }

    /// Compares a row against its baseline.
    ///
    /// `alloc_ratio` is 0 when the baseline allocates nothing.
    pub fn relative(row: &DerivedStats, baseline: &DerivedStats) -> Self {
        let time_ratio = row.mean_time_ms / baseline.mean_time_ms;
        let time_ratio_stddev = ratio_std_dev(
            time_ratio,
            row.mean_time_ms,
            row.stddev_ms,
            baseline.mean_time_ms,
            baseline.stddev_ms,
        );
        let alloc_ratio = if baseline.alloc_per_op > 0.0 {
            row.alloc_per_op / baseline.alloc_per_op
        } else {
            0.0
        };

        Self {
            time_ratio,
            time_ratio_stddev,
            alloc_ratio,
            basis: RatioBasis::Relative,
        }
    }
}

/// Finds the baseline row of every size that has one.
pub fn find_baselines<'a>(
    stats: &'a HashMap<GroupKey, DerivedStats>,
    sizes: &[u64],
    baseline_label: &str,
) -> HashMap<u64, &'a DerivedStats> {
    sizes
        .iter()
        .filter_map(|&size| {
            stats
                .get(&GroupKey::new(size, baseline_label))
                .map(|baseline| (size, baseline))
        })
        .collect()
}

/// Computes the ratio of every row against its size group's baseline.
///
/// Requires all derived statistics of the category up front.
pub fn compute_ratios(
    stats: &HashMap<GroupKey, DerivedStats>,
    sizes: &[u64],
    baseline_label: &str,
) -> HashMap<GroupKey, RatioResult> {
    let baselines = find_baselines(stats, sizes, baseline_label);

    for size in sizes.iter().filter(|size| !baselines.contains_key(size)) {
        tracing::warn!(
            size = *size,
            baseline = baseline_label,
            "no baseline for message size, ratios default to 1.0"
        );
    }

    stats
        .iter()
        .map(|(key, row)| {
            let ratio = match baselines.get(&key.config_size) {
                None => RatioResult::no_baseline(),
                Some(_) if key.variant_label == baseline_label => RatioResult::baseline(),
                Some(baseline) => RatioResult::relative(row, baseline),
            };
            (key.clone(), ratio)
        })
        .collect()
}
