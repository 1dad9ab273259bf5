// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Device configuration loaded from TOML files or constructed programmatically.
//!
//! # TOML Format
//! ```toml
//! device_name = "kfetch"
//! buffer_size = 1024
//! line_capacity = 128
//! color = true
//! proc_root = "/proc"
//! sys_root = "/sys"
//! ```
//!
//! The information mask is deliberately absent: a freshly loaded device
//! always starts with every field enabled.

use crate::{DeviceError, RenderOptions};
use fact_collector::ProcFs;
use std::path::{Path, PathBuf};

/// Configuration for the information device.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct DeviceConfig {
    /// Endpoint name; the device appears as `/dev/<device_name>`.
    pub device_name: String,
    /// Fixed size of every snapshot returned by a read, in bytes.
    pub buffer_size: usize,
    /// Maximum size of one formatted info line, in bytes.
    pub line_capacity: usize,
    /// Colour labels and logo accents with ANSI escapes.
    pub color: bool,
    /// Mount point of procfs.
    pub proc_root: PathBuf,
    /// Mount point of sysfs.
    pub sys_root: PathBuf,
}

impl DeviceConfig {
    /// Loads configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, DeviceError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            DeviceError::ConfigError(format!("cannot read config '{}': {e}", path.display()))
        })?;
        Self::from_toml(&content)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, DeviceError> {
        toml::from_str(toml_str)
            .map_err(|e| DeviceError::ConfigError(format!("TOML parse error: {e}")))
    }

    /// Serialises configuration to TOML.
    pub fn to_toml(&self) -> Result<String, DeviceError> {
        toml::to_string_pretty(self)
            .map_err(|e| DeviceError::ConfigError(format!("TOML serialise error: {e}")))
    }

    /// Checks that the limits are usable.
    pub fn validate(&self) -> Result<(), DeviceError> {
        if self.device_name.trim().is_empty() {
            return Err(DeviceError::ConfigError("device_name must not be empty".into()));
        }
        if self.buffer_size == 0 {
            return Err(DeviceError::ConfigError("buffer_size must be positive".into()));
        }
        if self.line_capacity == 0 {
            return Err(DeviceError::ConfigError("line_capacity must be positive".into()));
        }
        if self.line_capacity > self.buffer_size {
            return Err(DeviceError::ConfigError(format!(
                "line_capacity ({}) exceeds buffer_size ({})",
                self.line_capacity, self.buffer_size
            )));
        }
        Ok(())
    }

    /// Renderer options derived from this config.
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            color: self.color,
            line_capacity: self.line_capacity,
            buffer_capacity: self.buffer_size,
        }
    }

    /// The procfs/sysfs collector described by this config.
    pub fn fact_source(&self) -> ProcFs {
        ProcFs::new(&self.proc_root, &self.sys_root)
    }

    /// Path of the device endpoint.
    pub fn endpoint(&self) -> String {
        format!("/dev/{}", self.device_name)
    }
}

impl Default for DeviceConfig {
    fn default() -> Self {
        Self {
            device_name: "kfetch".to_string(),
            buffer_size: 1024,
            line_capacity: 128,
            color: true,
            proc_root: PathBuf::from("/proc"),
            sys_root: PathBuf::from("/sys"),
        }
    }
}
