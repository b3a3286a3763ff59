//! Calculated subnet parameters.

use super::AddressClass;
use serde::Serialize;
use std::net::Ipv4Addr;

/// Every parameter derived from one IP/mask calculation.
///
/// Computed fresh per calculation; carries no state beyond the derived
/// values.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct SubnetResult {
    /// Address with all host bits cleared.
    pub network_address: Ipv4Addr,
    /// Address with all host bits set.
    pub broadcast_address: Ipv4Addr,
    /// First address of the usable host range (network + 1).
    pub first_host: Ipv4Addr,
    /// Last address of the usable host range (broadcast - 1).
    pub last_host: Ipv4Addr,
    /// Usable host count, `2^(32-prefix) - 2`. Degenerate for /31 and /32.
    pub host_count: i64,
    /// The mask in dotted-decimal form, as supplied or expanded from /N.
    pub mask_decimal: String,
    /// The mask as dotted 8-bit binary groups.
    pub mask_binary: String,
    /// Leading-ones count of the mask.
    pub cidr_prefix: u8,
    /// Class of the input address, judged by its first octet.
    pub address_class: AddressClass,
}

impl SubnetResult {
    /// The usable host range rendered as "first - last".
    pub fn host_range(&self) -> String {
        format!("{} - {}", self.first_host, self.last_host)
    }
}
