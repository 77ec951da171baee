// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

//! This module is commonly used for **Medium Access Control (MAC)** address operations.
//!
//! ISE expects colon-separated uppercase MAC addresses on its ANC endpoints, while
//! operators and upstream inventories deliver them colon-, hyphen- or Cisco
//! dot-grouped. Everything funnels through [`canonicalize`] before going on the wire.
//! The **Organizationally unique identifier (OUI)** database is used to link a
//! vendor (e.g Cisco) to a MAC address in session listings.

use std::sync::OnceLock;

use mac_oui::Oui;

static OUI_DB: OnceLock<Oui> = OnceLock::new();

/// Retrieves or initializes the **Organizationally unique identifier** database.
fn get_oui_db() -> &'static Oui {
    OUI_DB.get_or_init(|| Oui::default().expect("failed to load OUI database"))
}

/// Identify the vendor of a MAC address. Accepts any input format
/// [`canonicalize`] accepts.
pub fn get_vendor(mac: &str) -> Option<String> {
    let canonical = canonicalize(mac)?;
    let db = get_oui_db();
    match db.lookup_by_mac(&canonical) {
        Ok(Some(entry)) => Some(entry.company_name.clone()),
        _ => None,
    }
}

/// Normalizes a MAC address to the uppercase colon-separated form ISE expects.
///
/// Accepted inputs: `aa:bb:cc:dd:ee:ff`, `AA-BB-CC-DD-EE-FF`, `aabb.ccdd.eeff`
/// and the bare 12-digit form. Returns `None` for anything that does not
/// contain exactly twelve hex digits.
pub fn canonicalize(input: &str) -> Option<String> {
    let digits: String = input
        .trim()
        .chars()
        .filter(|c| !matches!(c, ':' | '-' | '.'))
        .collect();

    if digits.len() != 12 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }

    let upper = digits.to_ascii_uppercase();
    let octets: Vec<&str> = (0..6).map(|i| &upper[i * 2..i * 2 + 2]).collect();
    Some(octets.join(":"))
}

/// Whether the input parses as a MAC address at all.
pub fn is_valid(input: &str) -> bool {
    canonicalize(input).is_some()
}
