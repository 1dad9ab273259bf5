// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # kfetch-device
//!
//! A single-session system information device. A client opens the device,
//! optionally writes a bitmask choosing which facts to show, and reads back
//! a fixed-size snapshot: an ASCII-art penguin with the host name, a
//! separator, and the selected facts alongside.
//!
//! # Key Components
//!
//! - [`InfoMask`] / [`MaskStore`]: which optional facts are shown. The
//!   store starts as [`InfoMask::ALL`] and is replaced wholesale by writes.
//! - [`SessionGuard`]: admits one open session at a time and pins the
//!   module through a [`ModuleRef`] keep-alive count while open.
//! - [`Renderer`]: zips the banner rows with the ordered info lines into a
//!   bounded [`SnapshotBuffer`].
//! - [`UserWriter`] / [`UserReader`]: the boundary to caller memory. A
//!   faulting copy is reported as zero bytes, never a partial transfer.
//! - [`KfetchDevice`] / [`Session`]: load/unload and the per-session
//!   `read`/`write`/`close` operations.
//!
//! # Lifecycle
//!
//! ```text
//! KfetchDevice::load(config)        mask = ALL
//!       │
//!       ▼
//!   device.open() ──► Session        keep-alive += 1   (Busy if already open)
//!       │  .write(mask bytes)        mask replaced
//!       │  .read(dest)               collect → render → copy out
//!       │  .close() / drop           keep-alive -= 1
//!       ▼
//!   device.unload()                  refused while keep-alive > 0
//! ```
//!
//! # Example
//! ```
//! use kfetch_device::{DeviceConfig, InfoMask, KfetchDevice, UserSlice};
//! use fact_collector::{FactSet, FixedFacts};
//!
//! let mut facts = FactSet::default();
//! facts.host.hostname = "raspberrypi".into();
//! facts.uptime_mins = 42;
//!
//! let config = DeviceConfig { color: false, ..Default::default() };
//! let device = KfetchDevice::load_with(config, FixedFacts(facts)).unwrap();
//!
//! let session = device.open().unwrap();
//! session.write(&UserSlice(&InfoMask::UPTIME.to_ne_bytes())).unwrap();
//!
//! let mut out = Vec::new();
//! session.read(&mut out).unwrap();
//! let text = String::from_utf8_lossy(&out);
//! assert!(text.contains("raspberrypi"));
//! assert!(text.contains("Uptime: 42 mins"));
//! ```

mod banner;
mod config;
mod device;
mod error;
mod handle;
mod mask;
mod render;
mod session;
mod text;
mod transfer;

pub use banner::{banner, BANNER_LINES};
pub use config::DeviceConfig;
pub use device::{KfetchDevice, UnloadRefused};
pub use error::DeviceError;
pub use handle::Session;
pub use mask::{Fact, InfoMask, MaskStore};
pub use render::{RenderOptions, Renderer, SnapshotBuffer};
pub use session::{ModuleRef, SessionGuard, SessionState};
pub use transfer::{BoundaryFault, UserReader, UserSlice, UserSliceMut, UserWriter};
