// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

//! # Gridlock CLI Entry Point
//!
//! The binary entry point for Gridlock.
//!
//! This module bootstraps the runtime and owns the global process lifecycle,
//! keeping the command-line layer isolated from the client library.
//!
//! ## Responsibilities
//!
//! 1.  **Runtime Initialization**: `#[tokio::main]` brings up the async runtime
//!     the HTTP client runs on.
//! 2.  **Global State Setup**: Wires the `tracing` subscriber according to the
//!     `-v` verbosity flags.
//! 3.  **Command Dispatch**: Routes execution to the appropriate module in
//!     `commands/`.
//! 4.  **Error Boundary**: Any error propagated up from a subcommand is logged
//!     here and converted into a non-zero `ExitCode`.

mod commands;
mod terminal;

use std::process::ExitCode;

use gridlock_common::error;

use crate::commands::{CommandLine, Commands, activate, quarantine, release, sessions};

#[tokio::main]
async fn main() -> ExitCode {
    let command_line = CommandLine::parse_args();
    terminal::init_logging(command_line.verbosity);

    let result = match &command_line.command {
        Commands::Activate {
            max_attempts,
            interval_secs,
        } => activate::activate(&command_line, *max_attempts, *interval_secs).await,
        Commands::Quarantine { macs } => quarantine::quarantine(&command_line, macs).await,
        Commands::Release { macs } => release::release(&command_line, macs).await,
        Commands::Sessions { ip } => sessions::sessions(&command_line, ip.as_deref()).await,
    };

    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Critical failure: {e}");
            ExitCode::FAILURE
        }
    }
}
