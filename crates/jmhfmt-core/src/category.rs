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

//! Benchmark categories and their reporting configuration.
//!
//! Each recognized benchmark class is described by a [`CategorySpec`]: how
//! its records are recognized, where their variant label comes from, which
//! variant is the baseline, and in which order variants are displayed.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Label used when a receive-mode record carries no `mode` parameter.
pub const UNKNOWN_VARIANT: &str = "UNKNOWN";

/// The recognized benchmark categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// `MemoryStrategyBenchmark`: byte arrays vs pooled buffers vs messages.
    MemoryStrategy,
    /// `ReceiveModeBenchmark`: blocking vs non-blocking vs poller receive.
    ReceiveMode,
}

impl Category {
    /// All categories, in report order.
    pub const ALL: [Category; 2] = [Category::MemoryStrategy, Category::ReceiveMode];

    /// Returns the short tag used on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::MemoryStrategy => "memory",
            Category::ReceiveMode => "receive",
        }
    }

    /// Returns the built-in reporting spec for this category.
    pub fn spec(&self) -> CategorySpec {
        match self {
            Category::MemoryStrategy => CategorySpec::memory_strategy(),
            Category::ReceiveMode => CategorySpec::receive_mode(),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "memory" | "memory-strategy" => Ok(Category::MemoryStrategy),
            "receive" | "receive-mode" => Ok(Category::ReceiveMode),
            other => Err(format!(
                "Unknown category '{}'. Expected one of: memory, receive",
                other
            )),
        }
    }
}

/// Where a record's variant label comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LabelSource {
    /// The trailing `.`-separated component of the benchmark name.
    MethodName,
    /// A named `@Param`, with a fallback label when it is absent.
    Param {
        /// Parameter name.
        name: String,
        /// Label used when the parameter is missing.
        fallback: String,
    },
}

/// Reporting configuration of one category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategorySpec {
    /// Which category this describes.
    pub category: Category,
    /// Section heading in rendered reports.
    pub title: String,
    /// Substring a benchmark name must contain to belong here.
    pub name_pattern: String,
    /// Where the variant label comes from.
    pub label_source: LabelSource,
    /// Variant every other variant is compared against.
    pub baseline: String,
    /// Preferred display order. Empty means: baseline first, then lexical.
    pub canonical_order: Vec<String>,
    /// Display names for labels that should render differently.
    pub display_names: Vec<(String, String)>,
}

impl CategorySpec {
    /// Spec for `MemoryStrategyBenchmark`.
    pub fn memory_strategy() -> Self {
        Self {
            category: Category::MemoryStrategy,
            title: "Memory Strategy Benchmarks".to_string(),
            name_pattern: "MemoryStrategyBenchmark".to_string(),
            label_source: LabelSource::MethodName,
            baseline: "ByteArray_SendRecv".to_string(),
            canonical_order: to_strings(&[
                "ByteArray_SendRecv",
                "ArrayPool_SendRecv",
                "Message_SendRecv",
                "MessageZeroCopy_SendRecv",
            ]),
            display_names: Vec::new(),
        }
    }

    /// Spec for `ReceiveModeBenchmark`.
    pub fn receive_mode() -> Self {
        Self {
            category: Category::ReceiveMode,
            title: "Receive Mode Benchmarks".to_string(),
            name_pattern: "ReceiveModeBenchmark".to_string(),
            label_source: LabelSource::Param {
                name: crate::record::PARAM_MODE.to_string(),
                fallback: UNKNOWN_VARIANT.to_string(),
            },
            baseline: "BLOCKING".to_string(),
            canonical_order: to_strings(&["BLOCKING", "NON_BLOCKING", "POLLER"]),
            display_names: vec![
                ("BLOCKING".to_string(), "Blocking_RouterToRouter".to_string()),
                (
                    "NON_BLOCKING".to_string(),
                    "NonBlocking_RouterToRouter".to_string(),
                ),
                ("POLLER".to_string(), "Poller_RouterToRouter".to_string()),
            ],
        }
    }

    /// Returns whether a benchmark name belongs to this category.
    pub fn matches(&self, benchmark: &str) -> bool {
        benchmark.contains(&self.name_pattern)
    }

    /// Returns the display name of a variant label.
    pub fn display_name<'a>(&'a self, label: &'a str) -> &'a str {
        self.display_names
            .iter()
            .find(|(from, _)| from == label)
            .map(|(_, to)| to.as_str())
            .unwrap_or(label)
    }
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
