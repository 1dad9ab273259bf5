// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! System uptime via `/proc/uptime`.
//!
//! The first field is seconds since boot, including time spent suspended.

use crate::host::read_sysfs_file;
use crate::CollectError;
use std::path::Path;

/// Reads the uptime in whole minutes from `<proc_root>/uptime`.
pub fn read_uptime_minutes(proc_root: &Path) -> Result<u64, CollectError> {
    let path = proc_root.join("uptime");
    let content = read_sysfs_file(&path)?;
    parse_uptime_minutes(&content).ok_or_else(|| CollectError::ParseError {
        path: path.display().to_string(),
        detail: format!("expected '<seconds> <idle>', got '{content}'"),
    })
}

/// Parses `/proc/uptime` content (`"350735.47 234388.90"`) into minutes.
fn parse_uptime_minutes(content: &str) -> Option<u64> {
    let seconds: f64 = content.split_whitespace().next()?.parse().ok()?;
    if !seconds.is_finite() || seconds < 0.0 {
        return None;
    }
    Some((seconds / 60.0).floor() as u64)
}
