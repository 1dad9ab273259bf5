// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Error types for fact collection.

/// Errors that can occur when reading a single fact from the host.
///
/// These never escape [`FactSet::collect_from`](crate::FactSet::collect_from);
/// they are reported by the individual readers so the collector can log
/// them before falling back to a default.
#[derive(Debug, thiserror::Error)]
pub enum CollectError {
    /// Failed to read a sysfs or procfs file.
    #[error("failed to read {path}: {source}")]
    ReadError {
        path: String,
        source: std::io::Error,
    },

    /// Failed to parse a value from a system file.
    #[error("failed to parse value from {path}: {detail}")]
    ParseError { path: String, detail: String },

    /// The expected procfs/sysfs path does not exist.
    #[error("path not found: {path}")]
    NotAvailable { path: String },
}
