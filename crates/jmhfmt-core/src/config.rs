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

//! Report configuration.
//!
//! Collects everything that shapes a report but is not measurement data:
//! where the results live, which categories to include, the output format
//! and the environment lines printed in the report header.

use crate::category::{Category, CategorySpec};
use std::path::PathBuf;
use std::str::FromStr;

/// Where Gradle's JMH plugin writes `-rf json` results.
pub const DEFAULT_INPUT_PATH: &str = "zmq/build/reports/jmh/results.json";

/// Default report title line.
pub const DEFAULT_TITLE: &str = "BenchmarkDotNet-style JMH Results";

/// Output format options for reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OutputFormat {
    /// BenchmarkDotNet GitHub-flavoured markdown tables.
    #[default]
    Markdown,
    /// The aggregated data as JSON.
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!(
                "Unknown output format '{}'. Expected one of: markdown, json",
                other
            )),
        }
    }
}

/// Environment lines shown in the report header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    /// First line of the header block.
    pub title: String,
    /// Harness and operating system.
    pub harness: String,
    /// Virtual machine.
    pub runtime: String,
    /// Job description.
    pub job: String,
    /// Warmup and measurement settings.
    pub iterations: String,
}

impl Default for HeaderInfo {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            harness: "JMH v1.37, Ubuntu 24.04 LTS".to_string(),
            runtime: "Java HotSpot(TM) 64-Bit Server VM, JDK 22.0.2".to_string(),
            job: "Job=Default  Runtime=Java 22  Platform=X64".to_string(),
            iterations: "Warmup=3 iterations (2s each)  Measurement=5 iterations (5s each)"
                .to_string(),
        }
    }
}

/// Report configuration.
///
/// # Example
///
/// ```
/// use jmhfmt_core::category::Category;
/// use jmhfmt_core::config::{OutputFormat, ReportConfig};
///
/// let config = ReportConfig::default()
///     .with_categories(&[Category::ReceiveMode])
///     .with_format(OutputFormat::Json);
/// assert_eq!(config.categories.len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct ReportConfig {
    /// JMH result file.
    pub input_path: PathBuf,
    /// Categories to report, in order.
    pub categories: Vec<CategorySpec>,
    /// Output format.
    pub format: OutputFormat,
    /// Header lines.
    pub header: HeaderInfo,
}

impl ReportConfig {
    /// Creates a configuration reading from `input_path`.
    pub fn new(input_path: impl Into<PathBuf>) -> Self {
        Self {
            input_path: input_path.into(),
            categories: Category::ALL.iter().map(Category::spec).collect(),
            format: OutputFormat::default(),
            header: HeaderInfo::default(),
        }
    }

    /// Sets the input path.
    pub fn with_input_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.input_path = path.into();
        self
    }

    /// Restricts the report to the given categories, in the given order.
    /// Duplicates are ignored.
    pub fn with_categories(mut self, categories: &[Category]) -> Self {
        let mut specs: Vec<CategorySpec> = Vec::with_capacity(categories.len());
        for category in categories {
            if !specs.iter().any(|s| s.category == *category) {
                specs.push(category.spec());
            }
        }
        self.categories = specs;
        self
    }

    /// Sets the output format.
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Sets the report title line.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.header.title = title.into();
        self
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self::new(DEFAULT_INPUT_PATH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ReportConfig::default();
        assert_eq!(config.input_path, PathBuf::from(DEFAULT_INPUT_PATH));
        assert_eq!(config.format, OutputFormat::Markdown);
        let order: Vec<Category> = config.categories.iter().map(|s| s.category).collect();
        assert_eq!(order, vec![Category::MemoryStrategy, Category::ReceiveMode]);
        assert_eq!(config.header.title, DEFAULT_TITLE);
    }

    #[test]
    fn test_with_categories_dedupes() {
        let config = ReportConfig::default().with_categories(&[
            Category::ReceiveMode,
            Category::ReceiveMode,
            Category::MemoryStrategy,
        ]);
        let order: Vec<Category> = config.categories.iter().map(|s| s.category).collect();
        assert_eq!(order, vec![Category::ReceiveMode, Category::MemoryStrategy]);
    }

    #[test]
    fn test_output_format_from_str() {
        assert_eq!("md".parse::<OutputFormat>(), Ok(OutputFormat::Markdown));
        assert_eq!("JSON".parse::<OutputFormat>(), Ok(OutputFormat::Json));
        assert!("html".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_builders() {
        let config = ReportConfig::default()
            .with_input_path("custom/results.json")
            .with_title("Nightly");
        assert_eq!(config.input_path, PathBuf::from("custom/results.json"));
        assert_eq!(config.header.title, "Nightly");
    }
}
