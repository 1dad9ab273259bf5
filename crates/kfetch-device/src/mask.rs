// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! The information mask and its store.
//!
//! An [`InfoMask`] selects which optional facts a snapshot includes, one
//! bit per [`Fact`]. The bit values are part of the user ABI: clients
//! write a native-endian `int` built from these constants.
//!
//! The [`MaskStore`] holds the device's single current mask. It is only
//! ever replaced wholesale; the device never flips individual bits.

use std::fmt;
use std::ops::BitOr;
use std::sync::atomic::{AtomicU32, Ordering};

/// An optional fact that can be selected by the mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Fact {
    /// Kernel release string.
    Release,
    /// CPU model name.
    CpuModel,
    /// Online / total logical CPUs.
    NumCpus,
    /// Free / total memory in MB.
    Memory,
    /// Number of live processes.
    NumProcs,
    /// Minutes since boot.
    Uptime,
}

impl Fact {
    /// Every optional fact, in the order the renderer emits them.
    pub const RENDER_ORDER: [Fact; 6] = [
        Fact::Release,
        Fact::CpuModel,
        Fact::NumCpus,
        Fact::Memory,
        Fact::NumProcs,
        Fact::Uptime,
    ];

    /// The mask bit selecting this fact.
    pub fn bit(self) -> InfoMask {
        match self {
            Fact::Release => InfoMask::RELEASE,
            Fact::CpuModel => InfoMask::CPU_MODEL,
            Fact::NumCpus => InfoMask::NUM_CPUS,
            Fact::Memory => InfoMask::MEMORY,
            Fact::NumProcs => InfoMask::NUM_PROCS,
            Fact::Uptime => InfoMask::UPTIME,
        }
    }

    /// The label shown in front of the value.
    pub fn label(self) -> &'static str {
        match self {
            Fact::Release => "Kernel:",
            Fact::CpuModel => "CPU:",
            Fact::NumCpus => "CPUs:",
            Fact::Memory => "Mem:",
            Fact::NumProcs => "Procs:",
            Fact::Uptime => "Uptime:",
        }
    }

    /// Short name used in diagnostics.
    pub fn as_str(self) -> &'static str {
        match self {
            Fact::Release => "release",
            Fact::CpuModel => "cpu-model",
            Fact::NumCpus => "num-cpus",
            Fact::Memory => "memory",
            Fact::NumProcs => "num-procs",
            Fact::Uptime => "uptime",
        }
    }
}

/// Bitmask of optional facts to include in a snapshot.
///
/// Bits outside [`InfoMask::ALL`] are preserved verbatim but select
/// nothing.
///
/// # Example
/// ```
/// use kfetch_device::{Fact, InfoMask};
///
/// let mask = InfoMask::MEMORY | InfoMask::UPTIME;
/// assert!(mask.contains(Fact::Memory));
/// assert!(!mask.contains(Fact::Release));
/// assert_eq!(mask.bits(), 0b1_1000);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct InfoMask(u32);

impl InfoMask {
    /// Kernel release.
    pub const RELEASE: Self = Self(1 << 0);
    /// Online / total CPU count.
    pub const NUM_CPUS: Self = Self(1 << 1);
    /// CPU model name.
    pub const CPU_MODEL: Self = Self(1 << 2);
    /// Free / total memory.
    pub const MEMORY: Self = Self(1 << 3);
    /// Uptime in minutes.
    pub const UPTIME: Self = Self(1 << 4);
    /// Process count.
    pub const NUM_PROCS: Self = Self(1 << 5);

    /// No optional facts.
    pub const NONE: Self = Self(0);
    /// Every optional fact; the mask a freshly loaded device starts with.
    pub const ALL: Self = Self((1 << 6) - 1);

    /// Size of the mask on the wire, in bytes.
    pub const WIRE_SIZE: usize = std::mem::size_of::<u32>();

    /// Wraps a raw value without validation.
    pub const fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    /// Returns the raw value.
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Returns `true` if `fact` is selected.
    pub fn contains(self, fact: Fact) -> bool {
        self.0 & fact.bit().0 != 0
    }

    /// Returns `true` if no optional fact is selected.
    pub fn is_empty(self) -> bool {
        self.0 & Self::ALL.0 == 0
    }

    /// Iterates the selected facts in render order.
    pub fn facts(self) -> impl Iterator<Item = Fact> {
        Fact::RENDER_ORDER
            .into_iter()
            .filter(move |f| self.contains(*f))
    }

    /// Native-endian wire encoding, as a client would write it.
    pub fn to_ne_bytes(self) -> [u8; Self::WIRE_SIZE] {
        self.0.to_ne_bytes()
    }
}

impl BitOr for InfoMask {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl From<Fact> for InfoMask {
    fn from(fact: Fact) -> Self {
        fact.bit()
    }
}

impl FromIterator<Fact> for InfoMask {
    fn from_iter<I: IntoIterator<Item = Fact>>(iter: I) -> Self {
        iter.into_iter().fold(Self::NONE, |m, f| m | f.bit())
    }
}

impl fmt::Debug for InfoMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "InfoMask({:#04x})", self.0)
    }
}

impl fmt::Display for InfoMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "none");
        }
        let names: Vec<&str> = self.facts().map(Fact::as_str).collect();
        write!(f, "{}", names.join(","))
    }
}

/// The device's current mask.
///
/// Only one session mutates the store at a time (the session guard sees
/// to that), so relaxed atomics are enough; the atomic only makes the
/// store shareable behind an `Arc`.
#[derive(Debug)]
pub struct MaskStore {
    bits: AtomicU32,
}

impl MaskStore {
    /// Creates a store initialised to [`InfoMask::ALL`].
    pub fn init() -> Self {
        Self {
            bits: AtomicU32::new(InfoMask::ALL.bits()),
        }
    }

    /// Replaces the whole mask. High bits are kept as given.
    pub fn set(&self, mask: InfoMask) {
        self.bits.store(mask.bits(), Ordering::Relaxed);
    }

    /// Returns the current mask.
    pub fn get(&self) -> InfoMask {
        InfoMask::from_bits(self.bits.load(Ordering::Relaxed))
    }
}

impl Default for MaskStore {
    fn default() -> Self {
        Self::init()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_bits() {
        assert_eq!(InfoMask::ALL.bits(), 0x3f);
        for fact in Fact::RENDER_ORDER {
            assert!(InfoMask::ALL.contains(fact));
            assert!(!InfoMask::NONE.contains(fact));
        }
    }

    #[test]
    fn test_bits_are_distinct() {
        let combined: InfoMask = Fact::RENDER_ORDER.into_iter().collect();
        assert_eq!(combined, InfoMask::ALL);
        let sum: u32 = Fact::RENDER_ORDER.iter().map(|f| f.bit().bits()).sum();
        assert_eq!(sum, 0x3f);
    }

    #[test]
    fn test_abi_values() {
        assert_eq!(InfoMask::RELEASE.bits(), 1);
        assert_eq!(InfoMask::NUM_CPUS.bits(), 2);
        assert_eq!(InfoMask::CPU_MODEL.bits(), 4);
        assert_eq!(InfoMask::MEMORY.bits(), 8);
        assert_eq!(InfoMask::UPTIME.bits(), 16);
        assert_eq!(InfoMask::NUM_PROCS.bits(), 32);
    }

    #[test]
    fn test_facts_follow_render_order() {
        let mask = InfoMask::UPTIME | InfoMask::RELEASE | InfoMask::NUM_CPUS;
        let facts: Vec<Fact> = mask.facts().collect();
        assert_eq!(facts, vec![Fact::Release, Fact::NumCpus, Fact::Uptime]);
    }

    #[test]
    fn test_high_bits_select_nothing() {
        let mask = InfoMask::from_bits(0xffff_ff00);
        assert!(mask.is_empty());
        assert_eq!(mask.facts().count(), 0);
        assert_eq!(mask.bits(), 0xffff_ff00);
    }

    #[test]
    fn test_display() {
        assert_eq!(InfoMask::NONE.to_string(), "none");
        assert_eq!(
            (InfoMask::MEMORY | InfoMask::CPU_MODEL).to_string(),
            "cpu-model,memory"
        );
    }

    #[test]
    fn test_store_init_is_all() {
        assert_eq!(MaskStore::init().get(), InfoMask::ALL);
        assert_eq!(MaskStore::default().get(), InfoMask::ALL);
    }

    #[test]
    fn test_store_set_replaces_whole_mask() {
        let store = MaskStore::init();
        store.set(InfoMask::MEMORY);
        assert_eq!(store.get(), InfoMask::MEMORY);
        store.set(InfoMask::from_bits(u32::MAX));
        assert_eq!(store.get().bits(), u32::MAX);
        store.set(InfoMask::NONE);
        assert_eq!(store.get(), InfoMask::NONE);
    }
}
