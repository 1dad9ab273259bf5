// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! The device and its load/unload lifecycle.
//!
//! [`KfetchDevice::load`] builds the single endpoint, initialises the mask
//! to every field, and hands out at most one [`Session`] at a time through
//! [`KfetchDevice::open`]. Sessions hold an `Arc` to the device's inner
//! state, so a session may outlive the `KfetchDevice` value itself; the
//! keep-alive count is what stops [`KfetchDevice::unload`] while one is
//! attached.

use crate::session::{ModuleRef, SessionGuard};
use crate::transfer::{copy_mask_in, copy_snapshot_out};
use crate::{DeviceConfig, DeviceError, InfoMask, MaskStore, Renderer, Session};
use crate::{UserReader, UserWriter};
use fact_collector::FactSource;
use std::fmt;
use std::sync::Arc;

/// Internal device state, shared between the device and its session.
pub(crate) struct DeviceInner {
    name: String,
    mask: MaskStore,
    sessions: SessionGuard,
    renderer: Renderer,
    facts: Box<dyn FactSource>,
}

impl DeviceInner {
    /// Collects fresh facts, renders them under the current mask and copies
    /// the snapshot to `dest`.
    pub(crate) fn read(&self, dest: &mut dyn UserWriter) -> Result<usize, DeviceError> {
        let facts = self.facts.collect();
        let snapshot = self.renderer.render(self.mask.get(), &facts)?;
        Ok(copy_snapshot_out(&snapshot, dest))
    }

    /// Replaces the mask with the value the caller supplies.
    pub(crate) fn write(&self, src: &dyn UserReader) -> Result<usize, DeviceError> {
        copy_mask_in(src, &self.mask)
    }

    /// Releases the session slot.
    pub(crate) fn release(&self) -> Result<(), DeviceError> {
        self.sessions.close()?;
        tracing::debug!(device = %self.name, "session closed");
        Ok(())
    }
}

/// The information device.
///
/// # Example
/// ```
/// use kfetch_device::{DeviceConfig, InfoMask, KfetchDevice, UserSlice};
/// use fact_collector::FixedFacts;
///
/// let device = KfetchDevice::load_with(DeviceConfig::default(), FixedFacts::default()).unwrap();
/// let session = device.open().unwrap();
///
/// // A second client is turned away while the first is attached.
/// assert!(device.open().is_err());
///
/// session.write(&UserSlice(&InfoMask::MEMORY.to_ne_bytes())).unwrap();
/// let mut out = Vec::new();
/// assert_eq!(session.read(&mut out).unwrap(), 1024);
///
/// session.close().unwrap();
/// device.unload().unwrap();
/// ```
pub struct KfetchDevice {
    inner: Arc<DeviceInner>,
    module_ref: Arc<ModuleRef>,
    endpoint: String,
}

impl KfetchDevice {
    /// Loads the device, reading facts from the procfs/sysfs roots named
    /// in `config`.
    pub fn load(config: DeviceConfig) -> Result<Self, DeviceError> {
        let source = config.fact_source();
        Self::load_with(config, source)
    }

    /// Loads the device with a custom fact source.
    pub fn load_with(
        config: DeviceConfig,
        source: impl FactSource + 'static,
    ) -> Result<Self, DeviceError> {
        config.validate()?;

        let module_ref = Arc::new(ModuleRef::new());
        let endpoint = config.endpoint();
        let inner = Arc::new(DeviceInner {
            name: config.device_name.clone(),
            mask: MaskStore::init(),
            sessions: SessionGuard::new(Arc::clone(&module_ref)),
            renderer: Renderer::new(config.render_options()),
            facts: Box::new(source),
        });

        tracing::info!("device created on {endpoint}");
        Ok(Self {
            inner,
            module_ref,
            endpoint,
        })
    }

    /// Opens the single session.
    ///
    /// Returns `Busy` if a session is already open.
    pub fn open(&self) -> Result<Session, DeviceError> {
        if let Err(e) = self.inner.sessions.try_open(&self.inner.name) {
            tracing::warn!("{e}");
            return Err(e);
        }
        tracing::debug!(device = %self.inner.name, "session opened");
        Ok(Session::new(Arc::clone(&self.inner)))
    }

    /// Returns the current information mask.
    pub fn mask(&self) -> InfoMask {
        self.inner.mask.get()
    }

    /// Returns `true` while a session is attached.
    pub fn is_open(&self) -> bool {
        self.inner.sessions.is_open()
    }

    /// Returns the keep-alive count held on behalf of open sessions.
    pub fn keep_alive_count(&self) -> usize {
        self.module_ref.count()
    }

    /// Path of the device endpoint, e.g. `/dev/kfetch`.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Removes the endpoint.
    ///
    /// Refused while any session holds a keep-alive reference; the device
    /// is handed back inside the error.
    pub fn unload(self) -> Result<(), UnloadRefused> {
        let refs = self.module_ref.count();
        if refs > 0 {
            return Err(UnloadRefused { device: self, refs });
        }
        tracing::info!("device {} removed", self.endpoint);
        Ok(())
    }
}

impl fmt::Debug for KfetchDevice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KfetchDevice")
            .field("endpoint", &self.endpoint)
            .field("mask", &self.mask())
            .field("keep_alive", &self.keep_alive_count())
            .finish()
    }
}

/// Unload was refused because sessions are still attached.
#[derive(Debug, thiserror::Error)]
#[error("cannot unload {}: {refs} session reference(s) held", .device.endpoint)]
pub struct UnloadRefused {
    /// The device, still loaded.
    pub device: KfetchDevice,
    /// Keep-alive count at the time of the attempt.
    pub refs: usize,
}

impl UnloadRefused {
    /// Takes the device back.
    pub fn into_device(self) -> KfetchDevice {
        self.device
    }
}
