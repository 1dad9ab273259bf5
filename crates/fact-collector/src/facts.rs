// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Aggregated point-in-time fact set.
//!
//! A [`FactSet`] combines host identity, CPU, memory, process and uptime
//! readings into a single struct. It is the input the `kfetch-device`
//! renderer turns into a snapshot, and it is produced through the
//! [`FactSource`] trait so the device can be driven by fixed facts in tests.

use crate::{count_processes, read_uptime_minutes, CpuInfo, HostInfo, MemoryInfo};
use std::path::PathBuf;

/// A complete point-in-time reading of every fact category.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FactSet {
    /// Node name and kernel release.
    pub host: HostInfo,
    /// CPU model and logical CPU counts.
    pub cpu: CpuInfo,
    /// Free and total memory.
    pub memory: MemoryInfo,
    /// Number of live processes.
    pub num_procs: u32,
    /// Minutes since boot.
    pub uptime_mins: u64,
}

impl FactSet {
    /// Collects a fresh fact set from the given procfs/sysfs roots.
    ///
    /// Never fails: each value that cannot be read is logged at `debug`
    /// and replaced by its default (empty string or zero). Nothing is cached
    /// between calls.
    pub fn collect_from(roots: &ProcFs) -> Self {
        let host = HostInfo::read_from(&roots.proc_root);

        let cpu = CpuInfo::read_from(&roots.proc_root, &roots.sys_root).unwrap_or_else(|e| {
            tracing::debug!("cpu info unavailable: {e}");
            CpuInfo::default()
        });

        let memory = MemoryInfo::read_from(&roots.proc_root).unwrap_or_else(|e| {
            tracing::debug!("memory info unavailable: {e}");
            MemoryInfo::default()
        });

        let num_procs = count_processes(&roots.proc_root).unwrap_or_else(|e| {
            tracing::debug!("process count unavailable: {e}");
            0
        });

        let uptime_mins = read_uptime_minutes(&roots.proc_root).unwrap_or_else(|e| {
            tracing::debug!("uptime unavailable: {e}");
            0
        });

        Self {
            host,
            cpu,
            memory,
            num_procs,
            uptime_mins,
        }
    }
}

/// Anything that can produce a fresh [`FactSet`] on demand.
pub trait FactSource: Send + Sync {
    /// Returns the current facts. Must not cache between calls and must
    /// not fail; unavailable facts take their default values.
    fn collect(&self) -> FactSet;
}

/// Reads facts from a live procfs/sysfs tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcFs {
    /// Mount point of procfs (normally `/proc`).
    pub proc_root: PathBuf,
    /// Mount point of sysfs (normally `/sys`).
    pub sys_root: PathBuf,
}

impl ProcFs {
    /// Creates a collector over custom roots (e.g. a container's host mounts).
    pub fn new(proc_root: impl Into<PathBuf>, sys_root: impl Into<PathBuf>) -> Self {
        Self {
            proc_root: proc_root.into(),
            sys_root: sys_root.into(),
        }
    }
}

impl Default for ProcFs {
    fn default() -> Self {
        Self::new("/proc", "/sys")
    }
}

impl FactSource for ProcFs {
    fn collect(&self) -> FactSet {
        FactSet::collect_from(self)
    }
}

/// A source that always returns the same facts.
#[derive(Debug, Clone, Default)]
pub struct FixedFacts(pub FactSet);

impl FactSource for FixedFacts {
    fn collect(&self) -> FactSet {
        self.0.clone()
    }
}
