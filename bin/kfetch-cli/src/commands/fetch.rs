// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! The fetch flow: load the device, optionally set the mask, read one
//! snapshot and print its text.

use anyhow::{bail, Context};
use kfetch_device::{DeviceConfig, InfoMask, KfetchDevice, UserSlice};
use std::path::Path;

pub fn execute(config: Option<&Path>, mask: Option<InfoMask>, no_color: bool) -> anyhow::Result<()> {
    let mut config = match config {
        Some(path) => DeviceConfig::from_file(path)?,
        None => DeviceConfig::default(),
    };
    if no_color {
        config.color = false;
    }

    let device = KfetchDevice::load(config)?;
    let text = fetch(&device, mask)?;
    print!("{text}");

    device.unload()?;
    Ok(())
}

/// Runs one open → write → read → close cycle and returns the snapshot text.
pub fn fetch(device: &KfetchDevice, mask: Option<InfoMask>) -> anyhow::Result<String> {
    let session = device
        .open()
        .with_context(|| format!("failed to open {}", device.endpoint()))?;

    if let Some(mask) = mask {
        let written = session.write(&UserSlice(&mask.to_ne_bytes()))?;
        if written == 0 {
            bail!("failed to set info mask {mask}");
        }
        tracing::info!("info mask set to {mask}");
    }

    let mut buf = Vec::new();
    let n = session.read(&mut buf)?;
    session.close()?;
    if n == 0 {
        bail!("read from {} returned no data", device.endpoint());
    }

    Ok(snapshot_text(&buf[..n]))
}

/// Text of a snapshot up to its first NUL.
fn snapshot_text(bytes: &[u8]) -> String {
    let end = bytes.iter().position(|b| *b == 0).unwrap_or(bytes.len());
    String::from_utf8_lossy(&bytes[..end]).into_owned()
}
