// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Copies across the user boundary.
//!
//! The caller's memory is reached only through [`UserWriter`] (snapshot
//! out) and [`UserReader`] (mask in). A copy either moves every byte or
//! fails with [`BoundaryFault`]; the device turns a fault into a zero byte
//! count for the caller, never a partial result.
//!
//! Incoming mask writes are length-checked against the staging area
//! *before* the copy, so an oversized write is rejected as
//! [`DeviceError::MalformedMask`] instead of spilling past the mask.

use crate::{DeviceError, InfoMask, MaskStore, SnapshotBuffer};

/// A failed copy to or from caller memory.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("fault copying {len} bytes across the user boundary")]
pub struct BoundaryFault {
    /// Number of bytes the copy attempted to move.
    pub len: usize,
}

/// Caller-owned destination for a read.
pub trait UserWriter {
    /// Copies all of `src` to the caller, or nothing.
    fn copy_to_user(&mut self, src: &[u8]) -> Result<(), BoundaryFault>;
}

/// Caller-owned source for a write.
pub trait UserReader {
    /// Number of bytes the caller is offering.
    fn len(&self) -> usize;

    /// Returns `true` if the caller offers no bytes.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Copies the first `dst.len()` offered bytes into `dst`, or nothing.
    fn copy_from_user(&self, dst: &mut [u8]) -> Result<(), BoundaryFault>;
}

/// A fixed-size caller buffer. Faults if it is too small for the copy,
/// as an unmapped tail page would.
#[derive(Debug)]
pub struct UserSliceMut<'a>(pub &'a mut [u8]);

impl UserWriter for UserSliceMut<'_> {
    fn copy_to_user(&mut self, src: &[u8]) -> Result<(), BoundaryFault> {
        let dst = self
            .0
            .get_mut(..src.len())
            .ok_or(BoundaryFault { len: src.len() })?;
        dst.copy_from_slice(src);
        Ok(())
    }
}

impl UserWriter for Vec<u8> {
    fn copy_to_user(&mut self, src: &[u8]) -> Result<(), BoundaryFault> {
        self.extend_from_slice(src);
        Ok(())
    }
}

/// Read-only caller bytes.
#[derive(Debug, Clone, Copy)]
pub struct UserSlice<'a>(pub &'a [u8]);

impl UserReader for UserSlice<'_> {
    fn len(&self) -> usize {
        self.0.len()
    }

    fn copy_from_user(&self, dst: &mut [u8]) -> Result<(), BoundaryFault> {
        let src = self
            .0
            .get(..dst.len())
            .ok_or(BoundaryFault { len: dst.len() })?;
        dst.copy_from_slice(src);
        Ok(())
    }
}

/// Copies the whole fixed-capacity snapshot to the caller.
///
/// Returns the number of bytes transferred: the buffer capacity, or `0`
/// on a fault.
pub(crate) fn copy_snapshot_out(snapshot: &SnapshotBuffer, dest: &mut dyn UserWriter) -> usize {
    match dest.copy_to_user(snapshot.as_bytes()) {
        Ok(()) => snapshot.capacity(),
        Err(e) => {
            tracing::warn!("read failed: {e}");
            0
        }
    }
}

/// Copies a mask value from the caller and installs it in `store`.
///
/// Accepts 1 to [`InfoMask::WIRE_SIZE`] bytes in native byte order; a
/// short write is zero-extended. Returns the number of bytes consumed, or
/// `0` on a fault (the store is left unchanged).
pub(crate) fn copy_mask_in(src: &dyn UserReader, store: &MaskStore) -> Result<usize, DeviceError> {
    let len = src.len();
    if len == 0 || len > InfoMask::WIRE_SIZE {
        return Err(DeviceError::MalformedMask {
            len,
            max: InfoMask::WIRE_SIZE,
        });
    }

    let mut staging = [0u8; InfoMask::WIRE_SIZE];
    if let Err(e) = src.copy_from_user(&mut staging[..len]) {
        tracing::warn!("write failed: {e}");
        return Ok(0);
    }

    let mask = InfoMask::from_bits(u32::from_ne_bytes(staging));
    store.set(mask);
    tracing::debug!(?mask, "info mask updated");
    Ok(len)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{RenderOptions, Renderer};
    use fact_collector::FactSet;

    /// A caller whose memory is never mapped.
    struct Unmapped(usize);

    impl UserReader for Unmapped {
        fn len(&self) -> usize {
            self.0
        }

        fn copy_from_user(&self, dst: &mut [u8]) -> Result<(), BoundaryFault> {
            Err(BoundaryFault { len: dst.len() })
        }
    }

    fn snapshot() -> SnapshotBuffer {
        Renderer::new(RenderOptions::default())
            .render(InfoMask::ALL, &FactSet::default())
            .unwrap()
    }

    #[test]
    fn test_copy_out_full_capacity() {
        let snap = snapshot();
        let mut out = vec![0xffu8; 2048];
        let n = copy_snapshot_out(&snap, &mut UserSliceMut(&mut out));
        assert_eq!(n, 1024);
        assert_eq!(&out[..1024], snap.as_bytes());
        assert!(out[1024..].iter().all(|b| *b == 0xff));
    }

    #[test]
    fn test_copy_out_to_vec() {
        let snap = snapshot();
        let mut out = Vec::new();
        assert_eq!(copy_snapshot_out(&snap, &mut out), 1024);
        assert_eq!(out, snap.as_bytes());
    }

    #[test]
    fn test_copy_out_short_destination_faults() {
        let snap = snapshot();
        let mut out = vec![0u8; 100];
        assert_eq!(copy_snapshot_out(&snap, &mut UserSliceMut(&mut out)), 0);
        // Nothing partial.
        assert!(out.iter().all(|b| *b == 0));
    }

    #[test]
    fn test_copy_mask_in() {
        let store = MaskStore::init();
        let bytes = InfoMask::MEMORY.to_ne_bytes();
        assert_eq!(copy_mask_in(&UserSlice(&bytes), &store).unwrap(), 4);
        assert_eq!(store.get(), InfoMask::MEMORY);
    }

    #[test]
    #[cfg(target_endian = "little")]
    fn test_short_write_zero_extends() {
        let store = MaskStore::init();
        // Low byte of a little-endian int: RELEASE | UPTIME.
        assert_eq!(copy_mask_in(&UserSlice(&[0x11]), &store).unwrap(), 1);
        assert_eq!(store.get(), InfoMask::UPTIME | InfoMask::RELEASE);
    }

    #[test]
    fn test_oversized_write_rejected() {
        let store = MaskStore::init();
        store.set(InfoMask::CPU_MODEL);
        let err = copy_mask_in(&UserSlice(&[0u8; 8]), &store).unwrap_err();
        assert!(matches!(err, DeviceError::MalformedMask { len: 8, max: 4 }));
        assert_eq!(store.get(), InfoMask::CPU_MODEL);
    }

    #[test]
    fn test_empty_write_rejected() {
        let store = MaskStore::init();
        let err = copy_mask_in(&UserSlice(&[]), &store).unwrap_err();
        assert!(matches!(err, DeviceError::MalformedMask { len: 0, .. }));
        assert_eq!(store.get(), InfoMask::ALL);
    }

    #[test]
    fn test_faulting_write_consumes_nothing() {
        let store = MaskStore::init();
        assert_eq!(copy_mask_in(&Unmapped(4), &store).unwrap(), 0);
        assert_eq!(store.get(), InfoMask::ALL);
    }
}
