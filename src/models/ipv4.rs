//! IPv4 address parsing and subnet arithmetic.
//!
//! Provides string validation for dotted-decimal addresses along with the
//! bit-level operations behind a subnet calculation: network and broadcast
//! derivation, usable host range, host count and address classification.

use super::CalcError;
use itertools::Itertools;
use regex::Regex;
use serde::Serialize;
use std::fmt;
use std::net::Ipv4Addr;
use std::sync::OnceLock;

/// Maximum length for an IPv4 subnet prefix (32 bits).
pub const MAX_LENGTH: u8 = 32;

/// Regex for dotted-decimal syntax: four dot-separated 1-3 digit groups.
static IPV4_REGEX: OnceLock<Regex> = OnceLock::new();

fn ipv4_regex() -> &'static Regex {
    IPV4_REGEX.get_or_init(|| {
        Regex::new(r"^(\d{1,3})\.(\d{1,3})\.(\d{1,3})\.(\d{1,3})$").expect("Invalid Regex")
    })
}

/// Parse a dotted-decimal IPv4 string.
///
/// Each group is checked numerically against [0,255], so leading zeros are
/// tolerated ("192.168.001.1" parses as 192.168.1.1).
///
/// # Examples
/// ```
/// use subnet_calculator::models::parse_ipv4;
/// assert_eq!(parse_ipv4("192.168.001.1").unwrap().to_string(), "192.168.1.1");
/// assert!(parse_ipv4("192.168.1.256").is_err());
/// ```
pub fn parse_ipv4(input: &str) -> Result<Ipv4Addr, CalcError> {
    let caps = ipv4_regex()
        .captures(input.trim())
        .ok_or(CalcError::InvalidIpAddress)?;

    let mut octets = [0u8; 4];
    for (i, octet) in octets.iter_mut().enumerate() {
        let value: u16 = caps[i + 1]
            .parse()
            .map_err(|_| CalcError::InvalidIpAddress)?;
        if value > 255 {
            return Err(CalcError::InvalidIpAddress);
        }
        *octet = value as u8;
    }

    Ok(Ipv4Addr::new(octets[0], octets[1], octets[2], octets[3]))
}

/// True if the string is four dot-separated decimal groups, each in [0,255].
pub fn validate_ipv4(input: &str) -> bool {
    parse_ipv4(input).is_ok()
}

/// Render an address as 8-bit zero-padded binary octets joined by dots.
pub fn to_binary(addr: Ipv4Addr) -> String {
    addr.octets()
        .iter()
        .map(|octet| format!("{octet:08b}"))
        .join(".")
}

/// The address with all host bits cleared (bitwise AND of address and mask).
pub fn network_address(addr: Ipv4Addr, mask: Ipv4Addr) -> Ipv4Addr {
    Ipv4Addr::from(u32::from(addr) & u32::from(mask))
}

/// The address with all host bits set.
pub fn broadcast_address(network: Ipv4Addr, mask: Ipv4Addr) -> Ipv4Addr {
    Ipv4Addr::from(u32::from(network) | !u32::from(mask))
}

/// The usable host range: network + 1 through broadcast - 1.
///
/// Carries and borrows propagate across octet boundaries. There is no
/// special-casing of /31 or /32 masks: for /32 the first host exceeds the
/// last, and for /31 the pair lands on the broadcast and network addresses.
/// Known limitation, kept to match the defined formulas.
pub fn host_range(network: Ipv4Addr, broadcast: Ipv4Addr) -> (Ipv4Addr, Ipv4Addr) {
    let first = u32::from(network).wrapping_add(1);
    let last = u32::from(broadcast).wrapping_sub(1);
    (Ipv4Addr::from(first), Ipv4Addr::from(last))
}

/// Usable host count for a prefix: `2^(32-prefix) - 2`, excluding the
/// network and broadcast addresses.
///
/// Unguarded for /31 and /32, which yield 0 and -1. Known limitation, kept
/// to match the defined formula; hence the signed return type.
pub fn host_count(prefix: u8) -> i64 {
    (1i64 << (MAX_LENGTH - prefix)) - 2
}

/// True for addresses in the RFC 1918 private ranges.
pub fn is_private_ip(addr: &Ipv4Addr) -> bool {
    let octets = addr.octets();

    match octets[0] {
        10 => true,                                    // 10.0.0.0/8
        172 if (16..=31).contains(&octets[1]) => true, // 172.16.0.0/12
        192 if octets[1] == 168 => true,               // 192.168.0.0/16
        _ => false,
    }
}

/// Address class, judged solely by the first octet.
///
/// First octets 0 and 127 are not special-cased and classify as `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressClass {
    A,
    B,
    C,
    D,
    E,
    Unknown,
}

/// Classify an address by its first octet.
pub fn address_class(addr: Ipv4Addr) -> AddressClass {
    match addr.octets()[0] {
        1..=126 => AddressClass::A,
        128..=191 => AddressClass::B,
        192..=223 => AddressClass::C,
        224..=239 => AddressClass::D,
        240..=255 => AddressClass::E,
        _ => AddressClass::Unknown,
    }
}

impl fmt::Display for AddressClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AddressClass::A => write!(f, "Class A (1-126)"),
            AddressClass::B => write!(f, "Class B (128-191)"),
            AddressClass::C => write!(f, "Class C (192-223)"),
            AddressClass::D => write!(f, "Class D (Multicast)"),
            AddressClass::E => write!(f, "Class E (Reserved)"),
            AddressClass::Unknown => write!(f, "Unknown Class"),
        }
    }
}

impl Serialize for AddressClass {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}
