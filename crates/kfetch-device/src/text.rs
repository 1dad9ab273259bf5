// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Capacity-checked text buffer.
//!
//! [`BoundedText`] implements [`fmt::Write`] but refuses any write that
//! would take it past its capacity, so `write!` reports overflow as
//! `fmt::Error` instead of silently growing. A refused write leaves the
//! buffer exactly as it was.

use std::fmt;

/// A `String` with a hard byte capacity.
#[derive(Debug, Clone)]
pub(crate) struct BoundedText {
    buf: String,
    capacity: usize,
}

impl BoundedText {
    /// Creates an empty buffer holding at most `capacity` bytes.
    pub(crate) fn new(capacity: usize) -> Self {
        Self {
            buf: String::with_capacity(capacity),
            capacity,
        }
    }

    /// Returns the text written so far.
    pub(crate) fn as_str(&self) -> &str {
        &self.buf
    }

    /// Consumes the buffer and returns its text.
    pub(crate) fn into_string(self) -> String {
        self.buf
    }
}

impl fmt::Write for BoundedText {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        if self.buf.len() + s.len() > self.capacity {
            return Err(fmt::Error);
        }
        self.buf.push_str(s);
        Ok(())
    }
}
