// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Host identity via `/proc/sys/kernel/`.
//!
//! The kernel exposes the UTS namespace fields as plain text files:
//! `hostname` (the node name) and `osrelease` (the running kernel release,
//! e.g. `6.1.0-18-amd64`).

use crate::CollectError;
use std::path::Path;

/// Host identity: node name and kernel release.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HostInfo {
    /// Node name of the machine.
    pub hostname: String,
    /// Release string of the running kernel.
    pub kernel_release: String,
}

impl HostInfo {
    /// Reads the host identity from `<proc_root>/sys/kernel/`.
    ///
    /// Each field is read on its own; one that cannot be read is left
    /// empty without affecting the other.
    pub fn read_from(proc_root: &Path) -> Self {
        let kernel = proc_root.join("sys").join("kernel");
        Self {
            hostname: read_or_empty(&kernel.join("hostname")),
            kernel_release: read_or_empty(&kernel.join("osrelease")),
        }
    }
}

fn read_or_empty(path: &Path) -> String {
    read_sysfs_file(path).unwrap_or_else(|e| {
        tracing::debug!("{e}");
        String::new()
    })
}

/// Reads a sysfs/procfs file and returns its trimmed content.
///
/// Shared by every reader in this crate.
pub(crate) fn read_sysfs_file(path: &Path) -> Result<String, CollectError> {
    if !path.exists() {
        return Err(CollectError::NotAvailable {
            path: path.display().to_string(),
        });
    }
    std::fs::read_to_string(path)
        .map(|s| s.trim().to_string())
        .map_err(|e| CollectError::ReadError {
            path: path.display().to_string(),
            source: e,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn fake_proc(name: &str, hostname: Option<&str>, release: Option<&str>) -> PathBuf {
        let root = std::env::temp_dir().join("kfetch_host_test").join(name);
        let kernel = root.join("sys").join("kernel");
        let _ = std::fs::remove_dir_all(&root);
        std::fs::create_dir_all(&kernel).unwrap();
        if let Some(h) = hostname {
            std::fs::write(kernel.join("hostname"), h).unwrap();
        }
        if let Some(r) = release {
            std::fs::write(kernel.join("osrelease"), r).unwrap();
        }
        root
    }

    #[test]
    fn test_read_host_info() {
        let root = fake_proc("full", Some("raspberrypi\n"), Some("6.1.0-rpi7-rpi-v8\n"));
        let info = HostInfo::read_from(&root);
        assert_eq!(info.hostname, "raspberrypi");
        assert_eq!(info.kernel_release, "6.1.0-rpi7-rpi-v8");
        let _ = std::fs::remove_dir_all(&root);
    }

    #[test]
    fn test_missing_release_keeps_hostname() {
        let root = fake_proc("no_release", Some("edge-node\n"), None);
        let info = HostInfo::read_from(&root);
        assert_eq!(info.hostname, "edge-node");
        assert_eq!(info.kernel_release, "");
        let _ = std::fs::remove_dir_all(&root);
    }

    #[test]
    fn test_missing_hostname_keeps_release() {
        let root = fake_proc("no_hostname", None, Some("6.6.31\n"));
        let info = HostInfo::read_from(&root);
        assert_eq!(info.hostname, "");
        assert_eq!(info.kernel_release, "6.6.31");
        let _ = std::fs::remove_dir_all(&root);
    }

    #[test]
    fn test_read_missing_file() {
        let result = read_sysfs_file(Path::new("/nonexistent/kernel/hostname"));
        assert!(matches!(result, Err(CollectError::NotAvailable { .. })));
    }
}
