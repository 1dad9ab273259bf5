// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Single-session admission control.
//!
//! [`SessionGuard`] is a two-state machine (`Closed` ⇄ `Open`) behind a
//! mutex: at most one session is open device-wide, and a second `open`
//! fails with `Busy` without touching anything. Each successful open pins
//! the hosting module through its [`ModuleRef`] keep-alive count, and each
//! close releases it, so the module cannot be unloaded while a client is
//! attached.

use crate::DeviceError;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Keep-alive reference count owned by the hosting environment.
///
/// Unload is refused while the count is non-zero.
#[derive(Debug, Default)]
pub struct ModuleRef {
    count: AtomicUsize,
}

impl ModuleRef {
    /// Creates a reference count at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Takes one reference.
    pub fn get(&self) {
        self.count.fetch_add(1, Ordering::AcqRel);
    }

    /// Drops one reference.
    pub fn put(&self) {
        let prev = self.count.fetch_sub(1, Ordering::AcqRel);
        debug_assert!(prev > 0, "module reference count underflow");
    }

    /// Returns the current number of references.
    pub fn count(&self) -> usize {
        self.count.load(Ordering::Acquire)
    }
}

/// State of the single session slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// No client attached.
    Closed,
    /// A client is attached.
    Open,
}

/// Admits at most one open session at a time.
#[derive(Debug)]
pub struct SessionGuard {
    state: Mutex<SessionState>,
    module_ref: Arc<ModuleRef>,
}

impl SessionGuard {
    /// Creates a closed guard that pins `module_ref` while open.
    pub fn new(module_ref: Arc<ModuleRef>) -> Self {
        Self {
            state: Mutex::new(SessionState::Closed),
            module_ref,
        }
    }

    /// Transitions `Closed → Open` and takes a module reference.
    ///
    /// Returns `Busy` (and changes nothing) if a session is already open.
    pub fn try_open(&self, device: &str) -> Result<(), DeviceError> {
        let mut state = self.lock();
        if *state == SessionState::Open {
            return Err(DeviceError::Busy {
                device: device.to_string(),
            });
        }
        *state = SessionState::Open;
        self.module_ref.get();
        Ok(())
    }

    /// Transitions `Open → Closed` and releases the module reference.
    ///
    /// Returns `AlreadyClosed` (and leaves the count alone) if no session
    /// is open.
    pub fn close(&self) -> Result<(), DeviceError> {
        let mut state = self.lock();
        if *state == SessionState::Closed {
            return Err(DeviceError::AlreadyClosed);
        }
        *state = SessionState::Closed;
        self.module_ref.put();
        Ok(())
    }

    /// Returns the current state.
    pub fn state(&self) -> SessionState {
        *self.lock()
    }

    /// Returns `true` if a session is open.
    pub fn is_open(&self) -> bool {
        self.state() == SessionState::Open
    }

    // The state is a plain enum, so a panic elsewhere cannot leave it torn.
    fn lock(&self) -> MutexGuard<'_, SessionState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
