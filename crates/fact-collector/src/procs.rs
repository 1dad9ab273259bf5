// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Process count via the numeric entries of `/proc`.
//!
//! Every live thread group has a `/proc/<pid>` directory; threads only
//! appear under `/proc/<pid>/task/`, so the count matches the number of
//! processes rather than the number of threads.

use crate::CollectError;
use std::path::Path;

/// Counts the processes visible under `proc_root`.
pub fn count_processes(proc_root: &Path) -> Result<u32, CollectError> {
    let entries = std::fs::read_dir(proc_root).map_err(|e| CollectError::ReadError {
        path: proc_root.display().to_string(),
        source: e,
    })?;

    let count = entries
        .filter_map(|e| e.ok())
        .filter(|e| is_pid(&e.file_name().to_string_lossy()))
        .count();
    Ok(count as u32)
}

fn is_pid(name: &str) -> bool {
    !name.is_empty() && name.chars().all(|c| c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_pid() {
        assert!(is_pid("1"));
        assert!(is_pid("48213"));
        assert!(!is_pid("self"));
        assert!(!is_pid("sys"));
        assert!(!is_pid(""));
    }

    #[test]
    fn test_count_fake_proc() {
        let root = std::env::temp_dir().join("kfetch_procs_test");
        let _ = std::fs::remove_dir_all(&root);
        for name in ["1", "42", "1337", "self", "sys", "net"] {
            std::fs::create_dir_all(root.join(name)).unwrap();
        }
        std::fs::write(root.join("meminfo"), "").unwrap();
        assert_eq!(count_processes(&root).unwrap(), 3);
        let _ = std::fs::remove_dir_all(&root);
    }

    #[test]
    fn test_missing_root() {
        let result = count_processes(Path::new("/nonexistent/proc"));
        assert!(matches!(result, Err(CollectError::ReadError { .. })));
    }

    #[test]
    fn test_count_real_proc() {
        if Path::new("/proc/self").exists() {
            assert!(count_processes(Path::new("/proc")).unwrap() >= 1);
        }
    }
}
