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

//! CLI command definitions and argument parsing.

use crate::commands;
use crate::error::CliError;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::shells::{Bash, Elvish, Fish, PowerShell, Zsh};
use jmhfmt_core::config::{OutputFormat, ReportConfig, DEFAULT_INPUT_PATH};
use jmhfmt_core::Category;
use std::path::PathBuf;

/// jmhfmt - JMH benchmark report formatter
///
/// Turns JMH `-rf json` results of the messaging benchmarks into
/// BenchmarkDotNet-style comparison tables.
///
/// # Examples
///
/// ```bash
/// # Render the default Gradle results file to stdout
/// jmhfmt report
///
/// # Only the receive-mode table, written to a file
/// jmhfmt report results.json --category receive -o RESULTS.md
///
/// # Machine-readable output
/// jmhfmt report results.json --format json
/// ```
#[derive(Parser)]
#[command(name = "jmhfmt")]
#[command(author, version, about = "jmhfmt - JMH benchmark report formatter", long_about = None)]
pub struct Cli {
    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Render a JMH results file as comparison tables
    ///
    /// Reads the JSON written by JMH's `-rf json` option, aggregates the
    /// memory-strategy and receive-mode benchmarks and prints one table per
    /// category that has results.
    Report {
        /// JMH results file
        #[arg(value_name = "INPUT", default_value = DEFAULT_INPUT_PATH)]
        input: PathBuf,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output format (markdown, json)
        #[arg(short, long, default_value = "markdown")]
        format: OutputFormat,

        /// Restrict the report to a category (memory, receive); repeatable
        #[arg(short, long = "category", value_name = "CATEGORY")]
        categories: Vec<Category>,

        /// Report title line
        #[arg(long)]
        title: Option<String>,
    },

    /// Generate shell completion scripts
    ///
    /// Supported shells: bash, zsh, fish, powershell, elvish
    Completion {
        /// Shell to generate completions for (bash, zsh, fish, powershell, elvish)
        #[arg(value_name = "SHELL")]
        shell: String,

        /// Print installation instructions instead of generating script
        #[arg(short, long)]
        install: bool,
    },
}

impl Commands {
    /// Execute the command.
    ///
    /// # Errors
    ///
    /// Returns the first error of the command; see [`CliError`].
    pub fn execute(self) -> Result<(), CliError> {
        match self {
            Commands::Report {
                input,
                output,
                format,
                categories,
                title,
            } => {
                let mut config = ReportConfig::new(input).with_format(format);
                if !categories.is_empty() {
                    config = config.with_categories(&categories);
                }
                if let Some(title) = title {
                    config = config.with_title(title);
                }
                commands::report(&config, output.as_deref())
            }
            Commands::Completion { shell, install } => {
                if install {
                    let instructions = commands::print_installation_instructions(&shell)?;
                    println!("{}", instructions);
                    Ok(())
                } else {
                    generate_completion(&shell)
                }
            }
        }
    }
}

/// Generate shell completion for the specified shell.
fn generate_completion(shell: &str) -> Result<(), CliError> {
    let mut cmd = Cli::command();

    match shell.to_lowercase().as_str() {
        "bash" => commands::generate_completion_for_command(Bash, &mut cmd),
        "zsh" => commands::generate_completion_for_command(Zsh, &mut cmd),
        "fish" => commands::generate_completion_for_command(Fish, &mut cmd),
        "powershell" | "pwsh" => commands::generate_completion_for_command(PowerShell, &mut cmd),
        "elvish" => commands::generate_completion_for_command(Elvish, &mut cmd),
        _ => Err(commands::unsupported_shell(shell)),
    }
}
