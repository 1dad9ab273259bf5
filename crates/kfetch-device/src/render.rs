// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Snapshot rendering: banner rows zipped with mask-selected info lines.
//!
//! ```text
//!  banner[0] ++ hostname
//!  banner[1] ++ "-" × len(hostname)
//!  banner[2] ++ 1st selected fact      (Kernel, CPU, CPUs, Mem, Procs, Uptime)
//!  ...
//!  banner[7] ++ 6th selected fact, or nothing
//! ```
//!
//! The info lines form a single ordered sequence: the two mandatory lines,
//! then the selected facts in [`Fact::RENDER_ORDER`]. Unselected facts
//! leave no gap. Banner rows beyond the last info line are emitted bare.
//!
//! Every line is formatted into a [`BoundedText`], so an oversized value
//! is reported as [`DeviceError::LineOverflow`] rather than written past
//! the line capacity, and the composed text is checked against the
//! snapshot capacity the same way.

use crate::banner::{banner, RESET, YELLOW};
use crate::text::BoundedText;
use crate::{DeviceError, Fact, InfoMask};
use fact_collector::FactSet;
use std::fmt::{self, Write};

/// Width of the label column, in visible characters.
const LABEL_WIDTH: usize = 7;

/// Layout limits and styling for the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Wrap labels and logo accents in ANSI colour.
    pub color: bool,
    /// Maximum bytes in one info line, escape sequences included.
    pub line_capacity: usize,
    /// Fixed size of the snapshot buffer returned by a read.
    pub buffer_capacity: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            color: true,
            line_capacity: 128,
            buffer_capacity: 1024,
        }
    }
}

/// The rendered output of one read: a fixed-capacity, zero-padded buffer.
#[derive(Clone, PartialEq, Eq)]
pub struct SnapshotBuffer {
    bytes: Box<[u8]>,
    len: usize,
}

impl SnapshotBuffer {
    fn from_text(text: &str, capacity: usize) -> Self {
        let mut bytes = vec![0u8; capacity].into_boxed_slice();
        bytes[..text.len()].copy_from_slice(text.as_bytes());
        Self {
            bytes,
            len: text.len(),
        }
    }

    /// The full fixed-capacity buffer, including zero padding.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// The rendered text without padding.
    pub fn text(&self) -> &str {
        // Built from a `&str` in `from_text`, so the prefix is valid UTF-8.
        std::str::from_utf8(&self.bytes[..self.len]).unwrap_or_default()
    }

    /// Length of the rendered text in bytes.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if nothing was rendered.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Fixed size of the buffer in bytes.
    pub fn capacity(&self) -> usize {
        self.bytes.len()
    }
}

impl fmt::Debug for SnapshotBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SnapshotBuffer")
            .field("len", &self.len)
            .field("capacity", &self.capacity())
            .finish()
    }
}

/// Composes snapshots from a mask and a fact set.
#[derive(Debug, Clone, Default)]
pub struct Renderer {
    options: RenderOptions,
}

impl Renderer {
    /// Creates a renderer with the given options.
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    /// Returns the renderer's options.
    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Renders one snapshot. Deterministic in `(mask, facts)`.
    pub fn render(&self, mask: InfoMask, facts: &FactSet) -> Result<SnapshotBuffer, DeviceError> {
        let lines = self.info_lines(mask, facts)?;
        let capacity = self.options.buffer_capacity;
        let overflow = |_| DeviceError::SnapshotOverflow { capacity };

        let mut out = BoundedText::new(capacity);
        let mut info = lines.iter();
        for row in banner(self.options.color) {
            out.write_str(row).map_err(overflow)?;
            if let Some(line) = info.next() {
                out.write_str(line).map_err(overflow)?;
            }
            out.write_char('\n').map_err(overflow)?;
        }

        Ok(SnapshotBuffer::from_text(out.as_str(), capacity))
    }

    /// Builds the ordered info lines: hostname, separator, then the
    /// selected facts.
    pub fn info_lines(&self, mask: InfoMask, facts: &FactSet) -> Result<Vec<String>, DeviceError> {
        let hostname = &facts.host.hostname;
        let mut lines = Vec::with_capacity(2 + Fact::RENDER_ORDER.len());

        lines.push(self.bounded("hostname", |t| t.write_str(hostname))?);
        lines.push(self.bounded("separator", |t| {
            (0..hostname.chars().count()).try_for_each(|_| t.write_char('-'))
        })?);

        for fact in mask.facts() {
            lines.push(self.bounded(fact.as_str(), |t| self.write_fact(t, fact, facts))?);
        }
        Ok(lines)
    }

    fn write_fact(&self, t: &mut BoundedText, fact: Fact, facts: &FactSet) -> fmt::Result {
        let label = fact.label();
        if self.options.color {
            write!(t, "{YELLOW}{label}{RESET}")?;
        } else {
            t.write_str(label)?;
        }
        write!(t, "{:pad$} ", "", pad = LABEL_WIDTH - label.len())?;

        match fact {
            Fact::Release => t.write_str(&facts.host.kernel_release),
            Fact::CpuModel => t.write_str(&facts.cpu.model_name),
            Fact::NumCpus => write!(t, "{} / {}", facts.cpu.online, facts.cpu.total),
            Fact::Memory => write!(
                t,
                "{} / {} MB",
                facts.memory.free_mb(),
                facts.memory.total_mb()
            ),
            Fact::NumProcs => write!(t, "{}", facts.num_procs),
            Fact::Uptime => write!(t, "{} mins", facts.uptime_mins),
        }
    }

    fn bounded(
        &self,
        field: &'static str,
        f: impl FnOnce(&mut BoundedText) -> fmt::Result,
    ) -> Result<String, DeviceError> {
        let capacity = self.options.line_capacity;
        let mut text = BoundedText::new(capacity);
        f(&mut text).map_err(|_| DeviceError::LineOverflow { field, capacity })?;
        Ok(text.into_string())
    }
}
