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

//! Record classification.
//!
//! Partitions the parsed result file into per-category subsets and assigns
//! each matching record its variant label. Classification never fails:
//! field validation happens later, in the aggregator, and only for records
//! that were selected here.

use crate::category::{Category, CategorySpec, LabelSource};
use crate::record::JmhRecord;
use std::collections::BTreeMap;

/// A record selected for a category, with its variant label.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassifiedRecord<'a> {
    /// Position of the record in the input array.
    pub index: usize,
    /// The underlying JMH record.
    pub record: &'a JmhRecord,
    /// Variant label extracted per the category's [`LabelSource`].
    pub variant_label: String,
}

/// Selects the records of one category.
///
/// Returns an empty vector when nothing matches; callers skip the category.
///
/// # Examples
///
/// ```
/// use jmhfmt_core::category::CategorySpec;
/// use jmhfmt_core::classifier::classify;
/// use jmhfmt_core::record::parse_results;
///
/// let records = parse_results(
///     r#"[{"benchmark": "x.MemoryStrategyBenchmark.Message_SendRecv"},
///         {"benchmark": "x.LatencyBenchmark.roundTrip"}]"#,
///     "inline",
/// ).unwrap();
/// let selected = classify(&records, &CategorySpec::memory_strategy());
/// assert_eq!(selected.len(), 1);
/// assert_eq!(selected[0].variant_label, "Message_SendRecv");
/// ```
pub fn classify<'a>(records: &'a [JmhRecord], spec: &CategorySpec) -> Vec<ClassifiedRecord<'a>> {
    let selected: Vec<ClassifiedRecord<'a>> = records
        .iter()
        .enumerate()
        .filter(|(_, record)| spec.matches(&record.benchmark))
        .map(|(index, record)| ClassifiedRecord {
            index,
            record,
            variant_label: variant_label(record, spec),
        })
        .collect();

    tracing::debug!(
        category = %spec.category,
        matched = selected.len(),
        total = records.len(),
        "classified records"
    );
    selected
}

/// Classifies records into every given category.
///
/// Categories without matches are absent from the returned map.
pub fn group_by_category<'a>(
    records: &'a [JmhRecord],
    specs: &[CategorySpec],
) -> BTreeMap<Category, Vec<ClassifiedRecord<'a>>> {
    specs
        .iter()
        .map(|spec| (spec.category, classify(records, spec)))
        .filter(|(_, selected)| !selected.is_empty())
        .collect()
}

/// Extracts the variant label of a record.
pub fn variant_label(record: &JmhRecord, spec: &CategorySpec) -> String {
    match &spec.label_source {
        LabelSource::MethodName => record
            .benchmark
            .rsplit('.')
            .next()
            .unwrap_or(record.benchmark.as_str())
            .to_string(),
        LabelSource::Param { name, fallback } => match record.param(name) {
            Some(value) => value,
            None => {
                tracing::warn!(
                    benchmark = %record.benchmark,
                    param = %name,
                    "parameter missing, using '{}'",
                    fallback
                );
                fallback.clone()
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::UNKNOWN_VARIANT;
    use crate::record::parse_results;

    fn records() -> Vec<JmhRecord> {
        parse_results(
            r#"[
              {"benchmark": "io.github.ulalax.zmq.benchmark.MemoryStrategyBenchmark.ByteArray_SendRecv"},
              {"benchmark": "io.github.ulalax.zmq.benchmark.ReceiveModeBenchmark.routerBenchmark",
               "params": {"mode": "POLLER"}},
              {"benchmark": "io.github.ulalax.zmq.benchmark.ReceiveModeBenchmark.routerBenchmark"},
              {"benchmark": "io.github.ulalax.zmq.benchmark.LatencyBenchmark.reqRep"},
              {"benchmark": "io.github.ulalax.zmq.benchmark.MemoryStrategyBenchmark.MessagePoolZeroCopy_SendRecv"}
            ]"#,
            "test",
        )
        .unwrap()
    }

    #[test]
    fn test_classify_memory_uses_method_name() {
        let records = records();
        let selected = classify(&records, &CategorySpec::memory_strategy());
        let labels: Vec<&str> = selected.iter().map(|c| c.variant_label.as_str()).collect();
        assert_eq!(labels, vec!["ByteArray_SendRecv", "MessagePoolZeroCopy_SendRecv"]);
        assert_eq!(selected[0].index, 0);
        assert_eq!(selected[1].index, 4);
    }

    #[test]
    fn test_classify_receive_uses_mode_param() {
        let records = records();
        let selected = classify(&records, &CategorySpec::receive_mode());
        let labels: Vec<&str> = selected.iter().map(|c| c.variant_label.as_str()).collect();
        assert_eq!(labels, vec!["POLLER", UNKNOWN_VARIANT]);
    }

    #[test]
    fn test_unmatched_records_appear_nowhere() {
        let records = records();
        let specs = [CategorySpec::memory_strategy(), CategorySpec::receive_mode()];
        let grouped = group_by_category(&records, &specs);

        let total: usize = grouped.values().map(Vec::len).sum();
        assert_eq!(total, 4);
        assert!(grouped
            .values()
            .flatten()
            .all(|c| !c.record.benchmark.contains("LatencyBenchmark")));
    }

    #[test]
    fn test_empty_category_is_absent() {
        let records = parse_results(
            r#"[{"benchmark": "x.MemoryStrategyBenchmark.Message_SendRecv"}]"#,
            "test",
        )
        .unwrap();
        let specs = [CategorySpec::memory_strategy(), CategorySpec::receive_mode()];
        let grouped = group_by_category(&records, &specs);
        assert!(grouped.contains_key(&Category::MemoryStrategy));
        assert!(!grouped.contains_key(&Category::ReceiveMode));
        assert!(classify(&records, &CategorySpec::receive_mode()).is_empty());
    }

    #[test]
    fn test_method_name_without_dots() {
        let records = parse_results(r#"[{"benchmark": "MemoryStrategyBenchmark"}]"#, "t").unwrap();
        assert_eq!(
            variant_label(&records[0], &CategorySpec::memory_strategy()),
            "MemoryStrategyBenchmark"
        );
    }
}
