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

//! JMH result records.
//!
//! Two layers live here:
//!
//! - [`JmhRecord`]: the serde view of one entry of JMH's `-rf json` output.
//!   Everything except `benchmark` is optional at this layer because result
//!   files routinely mix benchmark classes, and classes this tool does not
//!   report on may not carry message parameters at all.
//! - [`RawRecord`]: a validated record of a recognized category, produced by
//!   [`RawRecord::from_jmh`] once the classifier has assigned a variant label.

use crate::error::{ReportError, Result};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::collections::BTreeMap;

/// Message size parameter (bytes per message).
pub const PARAM_MESSAGE_SIZE: &str = "messageSize";
/// Message count parameter (messages per benchmark operation).
pub const PARAM_MESSAGE_COUNT: &str = "messageCount";
/// Receive mode parameter of the receive-mode benchmark.
pub const PARAM_MODE: &str = "mode";

/// GC profiler: allocation rate in MB/sec.
pub const METRIC_ALLOC_RATE: &str = "gc.alloc.rate";
/// GC profiler: bytes allocated per operation.
pub const METRIC_ALLOC_RATE_NORM: &str = "gc.alloc.rate.norm";
/// GC profiler: number of collections during measurement.
pub const METRIC_GC_COUNT: &str = "gc.count";

/// One entry of a JMH JSON result file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JmhRecord {
    /// Fully qualified benchmark method name.
    pub benchmark: String,
    /// `@Param` values, as JMH writes them (strings).
    #[serde(default)]
    pub params: BTreeMap<String, Value>,
    /// The primary (throughput) metric.
    #[serde(default)]
    pub primary_metric: Option<PrimaryMetric>,
    /// Profiler metrics keyed by name (`gc.alloc.rate`, ...).
    #[serde(default)]
    pub secondary_metrics: BTreeMap<String, SecondaryMetric>,
}

/// Primary metric block of a JMH record.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrimaryMetric {
    /// Score in ops/s.
    #[serde(default, deserialize_with = "lenient_f64")]
    pub score: Option<f64>,
    /// Confidence interval half-width. JMH writes `"NaN"` when there were
    /// too few iterations to compute one.
    #[serde(default, deserialize_with = "lenient_f64")]
    pub score_error: Option<f64>,
    /// Per-fork, per-iteration scores, kept as raw JSON until the record is
    /// validated. JMH writes non-finite samples as strings (`"NaN"`).
    #[serde(default)]
    pub raw_data: Option<Value>,
}

/// Secondary metric block of a JMH record.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SecondaryMetric {
    /// Metric score.
    #[serde(default, deserialize_with = "lenient_f64")]
    pub score: Option<f64>,
}

impl JmhRecord {
    /// Returns a parameter as a string, accepting JSON strings and numbers.
    pub fn param(&self, name: &str) -> Option<String> {
        match self.params.get(name)? {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }

    /// Returns a secondary metric score, or `None` when absent.
    pub fn secondary_score(&self, name: &str) -> Option<f64> {
        self.secondary_metrics.get(name).and_then(|m| m.score)
    }
}

/// Secondary (GC profiler) scores of a record. Missing metrics are 0.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SecondaryScores {
    /// `gc.alloc.rate` (MB/sec).
    pub alloc_rate: f64,
    /// `gc.alloc.rate.norm` (bytes per op).
    pub alloc_per_op: f64,
    /// `gc.count`.
    pub gc_count: f64,
}

/// A validated measurement record of a recognized category.
#[derive(Debug, Clone, PartialEq)]
pub struct RawRecord {
    /// Position in the input array.
    pub index: usize,
    /// The JMH `benchmark` string.
    pub category_name: String,
    /// Variant compared within the category.
    pub variant_label: String,
    /// Message size in bytes.
    pub config_size: u64,
    /// Messages per measured operation.
    pub repeat_count: u64,
    /// Throughput in ops/s.
    pub primary_score: f64,
    /// Confidence half-width of `primary_score`.
    pub primary_score_error: f64,
    /// Raw sample sets; never empty, and the first set is never empty.
    pub raw_samples: Vec<Vec<f64>>,
    /// GC profiler scores.
    pub secondary: SecondaryScores,
}

impl RawRecord {
    /// Validates a classified JMH record.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::MalformedRecord`] when `messageSize`,
    /// `messageCount`, the score, the score error or the raw data is missing
    /// or unusable.
    pub fn from_jmh(index: usize, record: &JmhRecord, variant_label: String) -> Result<Self> {
        let malformed =
            |field: &str, reason: String| ReportError::malformed(index, &record.benchmark, field, reason);

        let config_size = integer_param(index, record, PARAM_MESSAGE_SIZE)?;
        let repeat_count = integer_param(index, record, PARAM_MESSAGE_COUNT)?;
        if repeat_count == 0 {
            return Err(malformed(
                "params.messageCount",
                "must be at least 1".to_string(),
            ));
        }

        let primary = record
            .primary_metric
            .as_ref()
            .ok_or_else(|| malformed("primaryMetric", "is missing".to_string()))?;

        let primary_score = primary
            .score
            .ok_or_else(|| malformed("primaryMetric.score", "is missing".to_string()))?;
        if !primary_score.is_finite() || primary_score <= 0.0 {
            return Err(malformed(
                "primaryMetric.score",
                format!("must be a positive finite number (got {})", primary_score),
            ));
        }

        let primary_score_error = match primary.score_error {
            None => {
                return Err(malformed(
                    "primaryMetric.scoreError",
                    "is missing".to_string(),
                ))
            }
            Some(e) if e.is_nan() => 0.0,
            Some(e) if e.is_finite() && e >= 0.0 => e,
            Some(e) => {
                return Err(malformed(
                    "primaryMetric.scoreError",
                    format!("must be a non-negative number (got {})", e),
                ))
            }
        };

        let raw_samples = primary
            .raw_data
            .as_ref()
            .ok_or_else(|| malformed("primaryMetric.rawData", "is missing".to_string()))
            .and_then(|raw| {
                sample_sets(raw).map_err(|reason| malformed("primaryMetric.rawData", reason))
            })?;
        match raw_samples.first() {
            None => {
                return Err(malformed(
                    "primaryMetric.rawData",
                    "contains no sample sets".to_string(),
                ))
            }
            Some(first) if first.is_empty() => {
                return Err(malformed(
                    "primaryMetric.rawData",
                    "first sample set is empty".to_string(),
                ))
            }
            Some(_) => {}
        }

        let secondary = SecondaryScores {
            alloc_rate: record.secondary_score(METRIC_ALLOC_RATE).unwrap_or(0.0),
            alloc_per_op: record.secondary_score(METRIC_ALLOC_RATE_NORM).unwrap_or(0.0),
            gc_count: record.secondary_score(METRIC_GC_COUNT).unwrap_or(0.0),
        };

        Ok(Self {
            index,
            category_name: record.benchmark.clone(),
            variant_label,
            config_size,
            repeat_count,
            primary_score,
            primary_score_error,
            raw_samples,
            secondary,
        })
    }

    /// The sample set used for statistics (the first fork).
    pub fn samples(&self) -> &[f64] {
        self.raw_samples.first().map(Vec::as_slice).unwrap_or(&[])
    }
}

/// Parses a JMH JSON result document.
///
/// `source_name` only appears in error messages.
///
/// # Errors
///
/// - [`ReportError::EmptyInput`] if the document is blank or an empty array
/// - [`ReportError::InvalidJson`] if it is not an array of JMH records
///
/// # Examples
///
/// ```
/// use jmhfmt_core::record::parse_results;
///
/// let json = r#"[{"benchmark": "x.MemoryStrategyBenchmark.Message_SendRecv"}]"#;
/// let records = parse_results(json, "inline").unwrap();
/// assert_eq!(records.len(), 1);
/// ```
pub fn parse_results(json: &str, source_name: &str) -> Result<Vec<JmhRecord>> {
    if json.trim().is_empty() {
        return Err(ReportError::empty_input(source_name));
    }

    let records: Vec<JmhRecord> = serde_json::from_str(json)?;
    if records.is_empty() {
        return Err(ReportError::empty_input(source_name));
    }

    tracing::debug!(count = records.len(), source = source_name, "parsed JMH records");
    Ok(records)
}

fn integer_param(index: usize, record: &JmhRecord, name: &str) -> Result<u64> {
    let field = format!("params.{}", name);
    let raw = record
        .param(name)
        .ok_or_else(|| ReportError::malformed(index, &record.benchmark, &field, "is missing"))?;

    raw.trim().parse::<u64>().map_err(|_| {
        ReportError::malformed(
            index,
            &record.benchmark,
            &field,
            format!("is not an unsigned integer ('{}')", raw),
        )
    })
}

/// Converts `rawData` into sample sets. Every sample must be a finite
/// number, given either as a JSON number or a numeric string.
fn sample_sets(raw: &Value) -> std::result::Result<Vec<Vec<f64>>, String> {
    let sets = raw
        .as_array()
        .ok_or_else(|| "must be an array of sample sets".to_string())?;

    sets.iter()
        .enumerate()
        .map(|(i, set)| {
            let samples = set
                .as_array()
                .ok_or_else(|| format!("sample set {} is not an array", i))?;
            samples
                .iter()
                .enumerate()
                .map(|(j, sample)| {
                    let value = match sample {
                        Value::Number(n) => n.as_f64(),
                        Value::String(s) => s.trim().parse::<f64>().ok(),
                        _ => None,
                    };
                    value.filter(|v| v.is_finite()).ok_or_else(|| {
                        format!("sample [{}][{}] is not a finite number ({})", i, j, sample)
                    })
                })
                .collect()
        })
        .collect()
}

fn lenient_f64<'de, D>(deserializer: D) -> std::result::Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Number(n)) => Ok(n.as_f64()),
        Some(Value::String(s)) => s
            .trim()
            .parse::<f64>()
            .map(Some)
            .map_err(|_| D::Error::custom(format!("invalid number '{}'", s))),
        Some(other) => Err(D::Error::custom(format!("expected a number, found {}", other))),
    }
}
