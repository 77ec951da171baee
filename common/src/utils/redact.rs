// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

//! Utilities for privacy-preserving output.
//!
//! Session listings and action logs carry hardware addresses and endpoint IPs.
//! These helpers mask the identifying halves so output can be shared in tickets
//! or screenshots without fingerprinting individual devices.

/// Redacts a MAC address to prevent hardware fingerprinting.
///
/// Keeps the vendor prefix (first three octets) and masks the device-specific
/// remainder. Inputs that do not look like a colon-separated MAC are fully
/// masked rather than partially leaked.
///
/// # Examples
/// ```
/// use gridlock_common::utils::redact;
///
/// assert_eq!(redact::mac_addr("2C:CF:67:F2:51:E3"), "2C:CF:67:XX:XX:XX");
/// assert_eq!(redact::mac_addr("garbage"), "XX:XX:XX:XX:XX:XX");
/// ```
pub fn mac_addr(mac: &str) -> String {
    let parts: Vec<&str> = mac.split(':').collect();
    if parts.len() != 6 {
        return "XX:XX:XX:XX:XX:XX".to_string();
    }
    format!("{}:{}:{}:XX:XX:XX", parts[0], parts[1], parts[2])
}

/// Redacts an IPv4 address, keeping only the /16 network half.
///
/// # Examples
/// ```
/// use gridlock_common::utils::redact;
///
/// assert_eq!(redact::ip_addr("10.20.30.40"), "10.20.x.x");
/// ```
pub fn ip_addr(ip: &str) -> String {
    let parts: Vec<&str> = ip.split('.').collect();
    if parts.len() != 4 {
        return "x.x.x.x".to_string();
    }
    format!("{}.{}.x.x", parts[0], parts[1])
}
