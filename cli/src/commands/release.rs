// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

use colored::*;

use crate::commands::CommandLine;
use crate::commands::quarantine::{canonicalize_all, display_mac};

/// Clears the ANC policy from each given MAC address.
pub async fn release(command_line: &CommandLine, macs: &[String]) -> anyhow::Result<()> {
    let targets = canonicalize_all(macs)?;
    let client = command_line.connect().await?;

    for target in &targets {
        client.clear_endpoint(target).await?;
        let shown = display_mac(target, command_line.redact);
        println!("{} {}", "released".green().bold(), shown);
    }

    Ok(())
}
