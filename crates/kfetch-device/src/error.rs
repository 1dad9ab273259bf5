// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Error types for the information device.

/// Errors reported by the device's session, mask and render paths.
///
/// Faults while copying across the user boundary are deliberately absent:
/// they surface as a zero byte count from `read`/`write`, not as an error.
#[derive(Debug, thiserror::Error)]
pub enum DeviceError {
    /// `open` was called while another session is attached.
    #[error("device '{device}' is busy: another session is already open")]
    Busy { device: String },

    /// `close` was called on a session guard that is not open.
    #[error("session is already closed")]
    AlreadyClosed,

    /// A mask write supplied a byte count the mask storage cannot hold.
    #[error("malformed mask write: {len} bytes supplied, expected 1 to {max}")]
    MalformedMask { len: usize, max: usize },

    /// A formatted info line exceeded the per-line capacity.
    #[error("info line '{field}' exceeds the {capacity}-byte line capacity")]
    LineOverflow {
        field: &'static str,
        capacity: usize,
    },

    /// The composed snapshot exceeded the snapshot buffer capacity.
    #[error("snapshot exceeds the {capacity}-byte buffer capacity")]
    SnapshotOverflow { capacity: usize },

    /// Invalid device configuration.
    #[error("configuration error: {0}")]
    ConfigError(String),
}
