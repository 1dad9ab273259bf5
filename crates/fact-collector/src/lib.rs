// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # fact-collector
//!
//! Reads live machine state from `/proc` and `/sys` for the kfetch
//! information device.
//!
//! # Collected Facts
//! - **Host identity**: node name and kernel release.
//! - **CPU**: model name, online and present logical CPU counts.
//! - **Memory**: free and total RAM.
//! - **Processes**: number of live processes.
//! - **Uptime**: minutes since boot.
//!
//! Every fact is read fresh on each call; nothing is cached.
//!
//! # Graceful Degradation
//! Collection is best effort. A category whose source is missing or
//! malformed (a container without sysfs, a kernel without `model name`)
//! takes its default value instead of failing the whole read.
//!
//! # Example
//! ```no_run
//! use fact_collector::{FactSource, ProcFs};
//!
//! let facts = ProcFs::default().collect();
//! println!("{} running {}", facts.host.hostname, facts.host.kernel_release);
//! ```

mod cpu;
mod error;
mod facts;
mod host;
mod memory;
mod procs;
mod uptime;

pub use cpu::CpuInfo;
pub use error::CollectError;
pub use facts::{FactSet, FactSource, FixedFacts, ProcFs};
pub use host::HostInfo;
pub use memory::MemoryInfo;
pub use procs::count_processes;
pub use uptime::read_uptime_minutes;

/// Collects a fresh [`FactSet`] from the standard `/proc` and `/sys` mounts.
///
/// This is a convenience wrapper around [`ProcFs::default()`].
pub fn collect() -> FactSet {
    ProcFs::default().collect()
}
