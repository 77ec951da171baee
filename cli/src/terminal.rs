// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

//! # Terminal Logging
//!
//! Wires up the global tracing subscriber so `info!`, `warn!` and friends
//! print cleanly to stderr, leaving stdout for command output that may be
//! piped into other tools.

use tracing_subscriber::EnvFilter;

/// Installs the global subscriber.
///
/// Verbosity mapping: default shows info and above, `-v` adds debug,
/// `-vv` adds trace-level wire detail. `RUST_LOG` overrides everything.
pub fn init_logging(verbosity: u8) {
    let default_level = match verbosity {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
