// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

pub mod fetch;

use kfetch_device::InfoMask;
use tracing_subscriber::EnvFilter;

/// Installs the stderr log subscriber.
///
/// `RUST_LOG` wins when set; otherwise the level follows the `-v` count.
pub fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Field selection flags from the command line.
#[derive(Debug, Clone, Copy, Default)]
pub struct FieldFlags {
    pub all: bool,
    pub cpu_model: bool,
    pub memory: bool,
    pub num_cpus: bool,
    pub num_procs: bool,
    pub release: bool,
    pub uptime: bool,
}

impl FieldFlags {
    /// Union of the selected bits, or `None` when no field flag was given.
    pub fn mask(&self) -> Option<InfoMask> {
        let selected = [
            (self.all, InfoMask::ALL),
            (self.cpu_model, InfoMask::CPU_MODEL),
            (self.memory, InfoMask::MEMORY),
            (self.num_cpus, InfoMask::NUM_CPUS),
            (self.num_procs, InfoMask::NUM_PROCS),
            (self.release, InfoMask::RELEASE),
            (self.uptime, InfoMask::UPTIME),
        ];
        selected
            .into_iter()
            .filter(|(on, _)| *on)
            .map(|(_, bits)| bits)
            .reduce(|a, b| a | b)
    }
}
