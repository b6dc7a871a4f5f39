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

//! Statistics primitives.
//!
//! The formulas here are first-order approximations chosen to reproduce
//! BenchmarkDotNet-style reports. They must stay exactly as written:
//!
//! - standard deviation uses the population variance (divide by N)
//! - errors through the `1/x` transform use `Δ(1/x) ≈ Δx / x²`
//! - the spread of a ratio adds relative variances of independent quantities

/// Milliseconds per second.
pub const MS_PER_SEC: f64 = 1000.0;

/// Arithmetic mean. Returns 0 for an empty slice.
pub fn mean(samples: &[f64]) -> f64 {
    if samples.is_empty() {
        return 0.0;
    }
    samples.iter().sum::<f64>() / samples.len() as f64
}

/// Population standard deviation (N divisor, not N-1).
///
/// Returns 0 for an empty slice.
///
/// # Examples
///
/// ```
/// use jmhfmt_core::stats::population_std_dev;
///
/// let sd = population_std_dev(&[1.0, 2.0, 3.0, 4.0]);
/// assert!((sd - 1.25f64.sqrt()).abs() < 1e-12);
/// ```
pub fn population_std_dev(samples: &[f64]) -> f64 {
    if samples.is_empty() {
        return 0.0;
    }

    let mean = mean(samples);
    let variance = samples
        .iter()
        .map(|x| {
            let diff = x - mean;
            diff * diff
        })
        .sum::<f64>()
        / samples.len() as f64;

    variance.sqrt()
}

/// Converts a throughput in ops/s into milliseconds per op.
pub fn ops_per_sec_to_ms(score: f64) -> f64 {
    MS_PER_SEC / score
}

/// Propagates an ops/s spread through the reciprocal transform, in ms.
///
/// `1000 * delta / score²`
pub fn reciprocal_spread_ms(delta: f64, score: f64) -> f64 {
    MS_PER_SEC * delta / (score * score)
}

/// Spread of `ratio = a / b` given the means and standard deviations of
/// `a` and `b`, assuming independence.
///
/// `ratio * sqrt((sd_a/mean_a)² + (sd_b/mean_b)²)`
pub fn ratio_std_dev(ratio: f64, mean_a: f64, sd_a: f64, mean_b: f64, sd_b: f64) -> f64 {
    let rel_a = sd_a / mean_a;
    let rel_b = sd_b / mean_b;
    ratio * (rel_a * rel_a + rel_b * rel_b).sqrt()
}
