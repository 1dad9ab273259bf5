// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! CPU model and logical CPU counts.
//!
//! Reads CPU state from:
//! - `/proc/cpuinfo`: the model name of the first processor.
//! - `/sys/devices/system/cpu/online`: online logical CPUs.
//! - `/sys/devices/system/cpu/present`: logical CPUs present in the system.
//!
//! # Architecture differences
//! x86 reports `model name` per processor. Many ARM kernels omit it and
//! publish `Hardware` or `Model` instead, so those keys are tried in turn.

use crate::host::read_sysfs_file;
use crate::CollectError;
use std::path::Path;

/// Keys searched in `/proc/cpuinfo`, in order of preference.
const MODEL_KEYS: [&str; 3] = ["model name", "Hardware", "Model"];

/// CPU identity and logical CPU counts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CpuInfo {
    /// Model name of CPU 0 (empty if the kernel does not report one).
    pub model_name: String,
    /// Number of online logical CPUs.
    pub online: u32,
    /// Number of logical CPUs present.
    pub total: u32,
}

impl CpuInfo {
    /// Reads CPU information from procfs and sysfs.
    ///
    /// The model name is best effort and never fails the read. The online
    /// count falls back to counting `cpuN` directories and then to
    /// `available_parallelism()`; the total falls back to the online count.
    pub fn read_from(proc_root: &Path, sys_root: &Path) -> Result<Self, CollectError> {
        let cpu_base = sys_root.join("devices").join("system").join("cpu");

        let model_name = std::fs::read_to_string(proc_root.join("cpuinfo"))
            .ok()
            .and_then(|content| parse_model_name(&content))
            .unwrap_or_default();

        let online = read_online(&cpu_base)?;
        let total = read_sysfs_file(&cpu_base.join("present"))
            .ok()
            .and_then(|s| parse_cpu_range(&s))
            .unwrap_or(online);

        Ok(Self {
            model_name,
            online,
            total,
        })
    }
}

/// Extracts the CPU model from `/proc/cpuinfo` content.
///
/// Returns the value of the first key in [`MODEL_KEYS`] that appears
/// anywhere in the file.
fn parse_model_name(content: &str) -> Option<String> {
    MODEL_KEYS.iter().find_map(|key| {
        content.lines().find_map(|line| {
            let (k, v) = line.split_once(':')?;
            (k.trim() == *key)
                .then(|| v.trim().to_string())
                .filter(|v| !v.is_empty())
        })
    })
}

/// Determines the number of online logical CPUs.
fn read_online(cpu_base: &Path) -> Result<u32, CollectError> {
    if let Ok(content) = read_sysfs_file(&cpu_base.join("online")) {
        if let Some(count) = parse_cpu_range(&content) {
            return Ok(count);
        }
    }

    // Fallback: count cpu directories.
    if let Ok(entries) = std::fs::read_dir(cpu_base) {
        let count = entries
            .filter_map(|e| e.ok())
            .filter(|e| {
                let name = e.file_name();
                let name = name.to_string_lossy();
                name.len() > 3
                    && name.starts_with("cpu")
                    && name[3..].chars().all(|c| c.is_ascii_digit())
            })
            .count();
        if count > 0 {
            return Ok(count as u32);
        }
    }

    std::thread::available_parallelism()
        .map(|n| n.get() as u32)
        .map_err(|e| CollectError::ReadError {
            path: cpu_base.display().to_string(),
            source: e,
        })
}

/// Parses a CPU range string like `"0-3"` → 4, `"0-7"` → 8, `"0"` → 1, `"0,2-3"` → 3.
fn parse_cpu_range(s: &str) -> Option<u32> {
    let mut total = 0u32;
    for part in s.split(',') {
        let part = part.trim();
        if let Some((start_s, end_s)) = part.split_once('-') {
            let start: u32 = start_s.trim().parse().ok()?;
            let end: u32 = end_s.trim().parse().ok()?;
            let span = end.checked_sub(start)?.checked_add(1)?;
            total = total.checked_add(span)?;
        } else {
            let _: u32 = part.parse().ok()?;
            total = total.checked_add(1)?;
        }
    }
    if total > 0 {
        Some(total)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    const X86_CPUINFO: &str = "\
processor\t: 0
vendor_id\t: GenuineIntel
model name\t: Intel(R) Core(TM) i7-8650U CPU @ 1.90GHz
cpu MHz\t\t: 2112.000

processor\t: 1
model name\t: Intel(R) Core(TM) i7-8650U CPU @ 1.90GHz
";

    const ARM_CPUINFO: &str = "\
processor\t: 0
BogoMIPS\t: 108.00
Features\t: fp asimd evtstrm crc32 cpuid
CPU implementer\t: 0x41

Hardware\t: BCM2835
Revision\t: c03112
Model\t\t: Raspberry Pi 4 Model B Rev 1.2
";

    fn fake_tree(name: &str, cpuinfo: &str, online: &str, present: Option<&str>) -> PathBuf {
        let root = std::env::temp_dir().join("kfetch_cpu_test").join(name);
        let _ = std::fs::remove_dir_all(&root);
        let cpu_base = root.join("sys/devices/system/cpu");
        std::fs::create_dir_all(root.join("proc")).unwrap();
        std::fs::create_dir_all(&cpu_base).unwrap();
        std::fs::write(root.join("proc/cpuinfo"), cpuinfo).unwrap();
        std::fs::write(cpu_base.join("online"), online).unwrap();
        if let Some(p) = present {
            std::fs::write(cpu_base.join("present"), p).unwrap();
        }
        root
    }

    #[test]
    fn test_parse_cpu_range_simple() {
        assert_eq!(parse_cpu_range("0-3"), Some(4));
        assert_eq!(parse_cpu_range("0-7"), Some(8));
        assert_eq!(parse_cpu_range("0"), Some(1));
    }

    #[test]
    fn test_parse_cpu_range_complex() {
        assert_eq!(parse_cpu_range("0,2-3"), Some(3));
        assert_eq!(parse_cpu_range("0-1,3-5"), Some(5));
    }

    #[test]
    fn test_parse_cpu_range_invalid() {
        assert_eq!(parse_cpu_range(""), None);
        assert_eq!(parse_cpu_range("abc"), None);
        assert_eq!(parse_cpu_range("3-1"), None);
        assert_eq!(parse_cpu_range("0-4294967295"), None);
        assert_eq!(parse_cpu_range("0-4294967294,5"), None);
    }

    #[test]
    fn test_model_name_x86() {
        assert_eq!(
            parse_model_name(X86_CPUINFO).as_deref(),
            Some("Intel(R) Core(TM) i7-8650U CPU @ 1.90GHz")
        );
    }

    #[test]
    fn test_model_name_arm_prefers_hardware() {
        assert_eq!(parse_model_name(ARM_CPUINFO).as_deref(), Some("BCM2835"));
    }

    #[test]
    fn test_model_name_missing() {
        assert_eq!(parse_model_name("processor\t: 0\n"), None);
    }

    #[test]
    fn test_read_from_tree() {
        let root = fake_tree("full", X86_CPUINFO, "0-1\n", Some("0-7\n"));
        let info = CpuInfo::read_from(&root.join("proc"), &root.join("sys")).unwrap();
        assert_eq!(info.model_name, "Intel(R) Core(TM) i7-8650U CPU @ 1.90GHz");
        assert_eq!(info.online, 2);
        assert_eq!(info.total, 8);
        let _ = std::fs::remove_dir_all(&root);
    }

    #[test]
    fn test_total_falls_back_to_online() {
        let root = fake_tree("no_present", ARM_CPUINFO, "0-3", None);
        let info = CpuInfo::read_from(&root.join("proc"), &root.join("sys")).unwrap();
        assert_eq!(info.online, 4);
        assert_eq!(info.total, 4);
        let _ = std::fs::remove_dir_all(&root);
    }

    #[test]
    fn test_online_fallback() {
        // Nonexistent tree: should fall through to available_parallelism.
        let cores = read_online(Path::new("/nonexistent/sys/devices/system/cpu")).unwrap();
        assert!(cores >= 1);
    }
}
