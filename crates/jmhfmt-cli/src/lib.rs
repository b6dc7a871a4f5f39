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

//! jmhfmt CLI library.
//!
//! Command definitions and implementations behind the `jmhfmt` binary.
//!
//! # Commands
//!
//! - **report**: Render JMH results as BenchmarkDotNet-style markdown (or JSON)
//! - **completion**: Generate shell completion scripts (bash, zsh, fish, powershell, elvish)
//!
//! # Examples
//!
//! ```no_run
//! use jmhfmt_cli::commands::report;
//! use jmhfmt_core::ReportConfig;
//!
//! # fn main() -> Result<(), jmhfmt_cli::error::CliError> {
//! let config = ReportConfig::new("zmq/build/reports/jmh/results.json");
//! report(&config, None)?;
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod commands;
pub mod error;
pub mod logging;
