// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! System memory via `/proc/meminfo`.
//!
//! Reports `MemFree` (pages not in use at all) rather than `MemAvailable`:
//! the snapshot shows what the kernel's `si_meminfo()` calls free RAM.

use crate::CollectError;
use std::path::Path;

/// System memory state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryInfo {
    /// Total physical memory in bytes.
    pub total_bytes: u64,
    /// Free memory in bytes.
    pub free_bytes: u64,
}

impl MemoryInfo {
    /// Reads memory information from `<proc_root>/meminfo`.
    pub fn read_from(proc_root: &Path) -> Result<Self, CollectError> {
        let path = proc_root.join("meminfo");
        let content = std::fs::read_to_string(&path).map_err(|e| CollectError::ReadError {
            path: path.display().to_string(),
            source: e,
        })?;

        Ok(Self::parse(&content, &path))
    }

    /// Parses the content of a `/proc/meminfo`-formatted string.
    ///
    /// Each key is taken on its own: a missing or malformed `MemTotal` or
    /// `MemFree` reads as zero without discarding the other.
    pub(crate) fn parse(content: &str, source_path: &Path) -> Self {
        let mut total_kb: Option<u64> = None;
        let mut free_kb: Option<u64> = None;

        for line in content.lines() {
            let parts: Vec<&str> = line.split_whitespace().collect();
            if parts.len() < 2 {
                continue;
            }
            match parts[0] {
                "MemTotal:" => total_kb = Some(parse_kb_value(parts[1], source_path)),
                "MemFree:" => free_kb = Some(parse_kb_value(parts[1], source_path)),
                _ => {}
            }

            if total_kb.is_some() && free_kb.is_some() {
                break;
            }
        }

        Self {
            total_bytes: kb_or_zero(total_kb, "MemTotal", source_path).saturating_mul(1024),
            free_bytes: kb_or_zero(free_kb, "MemFree", source_path).saturating_mul(1024),
        }
    }

    /// Returns free memory in megabytes (truncated).
    pub fn free_mb(&self) -> u64 {
        self.free_bytes / (1024 * 1024)
    }

    /// Returns total memory in megabytes (truncated).
    pub fn total_mb(&self) -> u64 {
        self.total_bytes / (1024 * 1024)
    }
}

/// Parses a numeric string from `/proc/meminfo` (values are in kB).
/// A malformed value reads as zero.
fn parse_kb_value(s: &str, source_path: &Path) -> u64 {
    s.parse::<u64>().unwrap_or_else(|_| {
        let e = CollectError::ParseError {
            path: source_path.display().to_string(),
            detail: format!("expected integer kB value, got '{s}'"),
        };
        tracing::debug!("{e}");
        0
    })
}

fn kb_or_zero(value: Option<u64>, key: &str, source_path: &Path) -> u64 {
    value.unwrap_or_else(|| {
        tracing::debug!("{key} not found in {}", source_path.display());
        0
    })
}
