// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # kfetch
//!
//! Command-line client for the kfetch information device.
//!
//! ## Usage
//! ```bash
//! # Everything the device currently selects
//! kfetch
//!
//! # Only memory and uptime
//! kfetch -m -u
//!
//! # Read from a container's procfs with a custom config
//! kfetch -a --config ./kfetch.toml
//! ```

mod commands;

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "kfetch",
    about = "Print a system information snapshot next to an ASCII logo",
    version,
    author
)]
struct Cli {
    /// Show all fields.
    #[arg(short = 'a', long)]
    all: bool,

    /// Show the CPU model name.
    #[arg(short = 'c', long)]
    cpu_model: bool,

    /// Show free and total memory.
    #[arg(short = 'm', long)]
    memory: bool,

    /// Show online and total CPU counts.
    #[arg(short = 'n', long)]
    num_cpus: bool,

    /// Show the number of processes.
    #[arg(short = 'p', long)]
    num_procs: bool,

    /// Show the kernel release.
    #[arg(short = 'r', long)]
    release: bool,

    /// Show uptime in minutes.
    #[arg(short = 'u', long)]
    uptime: bool,

    /// Path to a TOML device configuration file.
    #[arg(long)]
    config: Option<std::path::PathBuf>,

    /// Disable ANSI colour in the snapshot.
    #[arg(long)]
    no_color: bool,

    /// Enable verbose logging (repeat for more: -v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn fields(&self) -> commands::FieldFlags {
        commands::FieldFlags {
            all: self.all,
            cpu_model: self.cpu_model,
            memory: self.memory,
            num_cpus: self.num_cpus,
            num_procs: self.num_procs,
            release: self.release,
            uptime: self.uptime,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    commands::init_tracing(cli.verbose);

    commands::fetch::execute(cli.config.as_deref(), cli.fields().mask(), cli.no_color)
}
