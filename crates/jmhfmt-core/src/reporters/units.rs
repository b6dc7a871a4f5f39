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

//! Display helpers for table cells.
//!
//! Pure string formatting of values that were already aggregated.

/// Largest message size reported in bits per second; larger messages are
/// reported in bytes per second.
pub const BITS_THRESHOLD_BYTES: u64 = 1500;

/// Formats a byte count with binary units (`B`, `KB`, `MB`, `GB`).
pub fn format_size(bytes: f64) -> String {
    const KB: f64 = 1024.0;
    const MB: f64 = KB * 1024.0;
    const GB: f64 = MB * 1024.0;

    if bytes < KB {
        format!("{:.2} B", bytes)
    } else if bytes < MB {
        format!("{:.2} KB", bytes / KB)
    } else if bytes < GB {
        format!("{:.2} MB", bytes / MB)
    } else {
        format!("{:.2} GB", bytes / GB)
    }
}

/// Formats data throughput for a message size and message rate.
///
/// Messages up to [`BITS_THRESHOLD_BYTES`] are shown in Mbps/Gbps, larger
/// ones in MB/s or GB/s.
pub fn format_throughput(msg_size: u64, msg_per_sec: f64) -> String {
    let bytes_per_sec = msg_size as f64 * msg_per_sec;

    if msg_size <= BITS_THRESHOLD_BYTES {
        let bits_per_sec = bytes_per_sec * 8.0;
        if bits_per_sec >= 1e9 {
            format!("{:.2} Gbps", bits_per_sec / 1e9)
        } else {
            format!("{:.2} Mbps", bits_per_sec / 1e6)
        }
    } else if bytes_per_sec >= 1e9 {
        format!("{:.2} GB/s", bytes_per_sec / 1e9)
    } else {
        format!("{:.2} MB/s", bytes_per_sec / 1e6)
    }
}

/// Formats a message rate with `M`/`K` suffixes.
pub fn format_rate(count: f64) -> String {
    if count >= 1e6 {
        format!("{:.2}M", count / 1e6)
    } else if count >= 1e3 {
        format!("{:.2}K", count / 1e3)
    } else {
        format!("{:.2}", count)
    }
}

/// Formats a per-message latency given in nanoseconds.
pub fn format_latency(ns: f64) -> String {
    if ns < 1000.0 {
        format!("{:.2} ns", ns)
    } else {
        format!("{:.2} μs", ns / 1000.0)
    }
}

/// Formats GC collections per op, `-` when there were none.
pub fn format_gen0(gc_count: f64) -> String {
    if gc_count > 0.0 {
        format!("{:.4}", gc_count)
    } else {
        "-".to_string()
    }
}
