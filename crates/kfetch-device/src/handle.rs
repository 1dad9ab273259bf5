// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! RAII session handle that releases the device on drop.
//!
//! A [`Session`] is the only way to read or write the device, so "requires
//! an open session" is a compile-time property rather than a runtime
//! check. Closing consumes the handle; a handle dropped without an explicit
//! close releases the slot and its keep-alive reference all the same.

use crate::device::DeviceInner;
use crate::{DeviceError, UserReader, UserWriter};
use std::sync::Arc;

/// An open session on a [`KfetchDevice`](crate::KfetchDevice).
///
/// # Example
/// ```ignore
/// let session = device.open()?;
/// session.read(&mut out)?;   // use the device
/// session.close()?;          // slot released
/// // session.read(&mut out); // compile error: moved value
/// ```
pub struct Session {
    /// Handle back to the device. `None` once the session has been closed.
    device: Option<Arc<DeviceInner>>,
}

impl Session {
    /// Wraps an already-admitted session (called by the device on open).
    pub(crate) fn new(device: Arc<DeviceInner>) -> Self {
        Self {
            device: Some(device),
        }
    }

    /// Reads one snapshot into `dest`.
    ///
    /// Facts are collected fresh and rendered under the current mask.
    /// Returns the number of bytes transferred: the full buffer size, or
    /// `0` if the copy to `dest` faulted.
    pub fn read(&self, dest: &mut dyn UserWriter) -> Result<usize, DeviceError> {
        self.device()?.read(dest)
    }

    /// Replaces the information mask with the value in `src`.
    ///
    /// Returns the number of bytes consumed, or `0` if the copy from `src`
    /// faulted. More bytes than the mask holds is `MalformedMask`.
    pub fn write(&self, src: &dyn UserReader) -> Result<usize, DeviceError> {
        self.device()?.write(src)
    }

    /// Closes the session, releasing the slot and its keep-alive reference.
    pub fn close(mut self) -> Result<(), DeviceError> {
        match self.device.take() {
            Some(device) => device.release(),
            None => Err(DeviceError::AlreadyClosed),
        }
    }

    fn device(&self) -> Result<&DeviceInner, DeviceError> {
        self.device.as_deref().ok_or(DeviceError::AlreadyClosed)
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        if let Some(device) = self.device.take() {
            if let Err(e) = device.release() {
                tracing::warn!("releasing dropped session: {e}");
            }
        }
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("open", &self.device.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use crate::{DeviceConfig, KfetchDevice, UserSlice};
    use fact_collector::FixedFacts;

    fn device() -> KfetchDevice {
        KfetchDevice::load_with(DeviceConfig::default(), FixedFacts::default()).unwrap()
    }

    #[test]
    fn test_drop_releases_slot() {
        let d = device();
        {
            let _s = d.open().unwrap();
            assert_eq!(d.keep_alive_count(), 1);
        }
        assert!(!d.is_open());
        assert_eq!(d.keep_alive_count(), 0);
        assert!(d.open().is_ok());
    }

    #[test]
    fn test_close_releases_slot() {
        let d = device();
        let s = d.open().unwrap();
        s.close().unwrap();
        assert_eq!(d.keep_alive_count(), 0);
    }

    #[test]
    fn test_session_outlives_device_handle() {
        let d = device();
        let s = d.open().unwrap();
        drop(d);
        let mut out = Vec::new();
        assert_eq!(s.read(&mut out).unwrap(), 1024);
        assert_eq!(s.write(&UserSlice(&[0x01, 0, 0, 0])).unwrap(), 4);
        s.close().unwrap();
    }

    #[test]
    fn test_debug() {
        let d = device();
        let s = d.open().unwrap();
        assert_eq!(format!("{s:?}"), "Session { open: true }");
    }
}
