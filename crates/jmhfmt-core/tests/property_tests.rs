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

//! Property-based tests for the statistics and aggregation invariants.

use jmhfmt_core::stats::{mean, population_std_dev};
use jmhfmt_core::{build_reports, parse_results, CategorySpec, RatioBasis};
use proptest::prelude::*;
use serde_json::{json, Value};
use std::collections::BTreeSet;

const RECEIVE_MODES: [&str; 4] = ["BLOCKING", "NON_BLOCKING", "POLLER", "BUSY_SPIN"];

fn arb_record() -> impl Strategy<Value = (u64, usize, f64)> {
    (
        prop::sample::select(vec![64u64, 1500, 65536]),
        0..RECEIVE_MODES.len(),
        1.0f64..1_000_000.0,
    )
}

fn receive_doc(records: &[(u64, usize, f64)]) -> String {
    let values: Vec<Value> = records
        .iter()
        .map(|(size, mode, score)| {
            json!({
                "benchmark": "io.zmq.bench.ReceiveModeBenchmark.routerToRouter",
                "params": {
                    "messageSize": size.to_string(),
                    "messageCount": "1000",
                    "mode": RECEIVE_MODES[*mode]
                },
                "primaryMetric": { "score": score, "scoreError": 1.0, "rawData": [[score]] }
            })
        })
        .collect();
    Value::Array(values).to_string()
}

proptest! {
    /// Property: mean time is exactly 1000 / score
    #[test]
    fn prop_mean_is_reciprocal(record in arb_record()) {
        let doc = receive_doc(&[record]);
        let parsed = parse_results(&doc, "prop").unwrap();
        let reports = build_reports(&parsed, &[CategorySpec::receive_mode()]).unwrap();

        let (size, mode, score) = record;
        let row = reports[0].row(size, RECEIVE_MODES[mode]).unwrap();
        prop_assert!((row.stats.score_ops_per_sec - score).abs() <= score * 1e-12);
        prop_assert_eq!(row.stats.mean_time_ms, 1000.0 / row.stats.score_ops_per_sec);
    }

    /// Property: every matched record lands in exactly one key, the baseline
    /// compares to itself as 1.0
    #[test]
    fn prop_grouping_and_baseline(records in prop::collection::vec(arb_record(), 1..40)) {
        let doc = receive_doc(&records);
        let parsed = parse_results(&doc, "prop").unwrap();
        let reports = build_reports(&parsed, &[CategorySpec::receive_mode()]).unwrap();
        let report = &reports[0];

        let keys: BTreeSet<(u64, &str)> = records
            .iter()
            .map(|(size, mode, _)| (*size, RECEIVE_MODES[*mode]))
            .collect();
        prop_assert_eq!(report.len(), keys.len());

        for (size, label) in &keys {
            let row = report.row(*size, label).unwrap();
            if *label == "BLOCKING" {
                prop_assert_eq!(row.ratio.time_ratio, 1.0);
                prop_assert_eq!(row.ratio.basis, RatioBasis::Baseline);
            } else if report.sizes_without_baseline().contains(size) {
                prop_assert_eq!(row.ratio.basis, RatioBasis::NoBaseline);
            } else {
                prop_assert_eq!(row.ratio.basis, RatioBasis::Relative);
            }
        }

        // Known modes keep their canonical order, unknown ones trail.
        if let Some(pos) = report.variants.iter().position(|v| v == "BUSY_SPIN") {
            prop_assert_eq!(pos, report.variants.len() - 1);
        }
    }

    /// Property: population standard deviation is shift invariant and never
    /// exceeds the sample range
    #[test]
    fn prop_std_dev_bounds(samples in prop::collection::vec(0.0f64..1e6, 1..50), shift in 0.0f64..1e3) {
        let sd = population_std_dev(&samples);
        let shifted: Vec<f64> = samples.iter().map(|s| s + shift).collect();
        prop_assert!((population_std_dev(&shifted) - sd).abs() < 1e-6 * (1.0 + sd));

        let min = samples.iter().cloned().fold(f64::INFINITY, f64::min);
        let max = samples.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        prop_assert!(sd <= (max - min) + 1e-6);
        let m = mean(&samples);
        prop_assert!(m >= min - 1e-6 && m <= max + 1e-6);
    }
}
