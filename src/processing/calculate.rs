//! Subnet calculation orchestration.
//!
//! Validates the two input strings, then derives every subnet parameter in
//! one pass. Fails on the first invalid input; no partial results.

use crate::models::{
    address_class, broadcast_address, host_count, host_range, mask_to_prefix, network_address,
    normalize_mask, parse_ipv4, parse_mask, prefix_to_mask, to_binary, CalcError, SubnetResult,
};
use colored::Colorize;
use serde::Serialize;
use std::net::Ipv4Addr;

/// Calculate all subnet parameters for an IP address and mask.
///
/// The IP address is validated first, then the mask; the first failure is
/// returned and nothing is computed. The mask is accepted in dotted-decimal
/// or `/N` form.
///
/// # Examples
/// ```
/// use subnet_calculator::calculate;
/// let result = calculate("192.168.1.100", "/24").unwrap();
/// assert_eq!(result.network_address.to_string(), "192.168.1.0");
/// ```
pub fn calculate(ip_input: &str, mask_input: &str) -> Result<SubnetResult, CalcError> {
    log::debug!(
        "calculate({ip}, {mask})",
        ip = ip_input.on_blue(),
        mask = mask_input.on_blue()
    );

    let addr = parse_ipv4(ip_input)?;
    let mask_decimal = normalize_mask(mask_input)?;
    let mask = parse_mask(mask_input)?;
    let prefix = mask_to_prefix(u32::from(mask));

    let network = network_address(addr, mask);
    let broadcast = broadcast_address(network, mask);
    let (first_host, last_host) = host_range(network, broadcast);

    Ok(SubnetResult {
        network_address: network,
        broadcast_address: broadcast,
        first_host,
        last_host,
        host_count: host_count(prefix),
        mask_decimal,
        mask_binary: to_binary(mask),
        cidr_prefix: prefix,
        address_class: address_class(addr),
    })
}

/// Size summary for subnets of one prefix length.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct SubnetInfo {
    /// Number of subnets of this size in the full address space.
    pub total_subnets: u64,
    /// Usable hosts per subnet (same formula as [`host_count`]).
    pub hosts_per_subnet: i64,
    /// The mask in dotted-decimal form.
    pub subnet_mask: String,
}

/// Summarize the subnets of a given prefix length.
pub fn subnet_info(prefix: u8) -> Result<SubnetInfo, CalcError> {
    let mask = prefix_to_mask(prefix)?;

    Ok(SubnetInfo {
        total_subnets: 1u64 << prefix,
        hosts_per_subnet: host_count(prefix),
        subnet_mask: Ipv4Addr::from(mask).to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calculate_dotted_mask() {
        let result = calculate("192.168.1.100", "255.255.255.0").expect("Failed to calculate");

        assert_eq!(result.network_address, Ipv4Addr::new(192, 168, 1, 0));
        assert_eq!(result.broadcast_address, Ipv4Addr::new(192, 168, 1, 255));
        assert_eq!(result.first_host, Ipv4Addr::new(192, 168, 1, 1));
        assert_eq!(result.last_host, Ipv4Addr::new(192, 168, 1, 254));
        assert_eq!(result.host_count, 254);
        assert_eq!(result.mask_decimal, "255.255.255.0");
        assert_eq!(result.cidr_prefix, 24);
    }

    #[test]
    fn test_calculate_cidr_mask() {
        let result = calculate("172.16.10.1", "/20").expect("Failed to calculate");

        assert_eq!(result.network_address, Ipv4Addr::new(172, 16, 0, 0));
        assert_eq!(result.broadcast_address, Ipv4Addr::new(172, 16, 15, 255));
        assert_eq!(result.mask_decimal, "255.255.240.0");
        assert_eq!(
            result.mask_binary,
            "11111111.11111111.11110000.00000000"
        );
        assert_eq!(result.host_count, 4094);
    }

    #[test]
    fn test_calculate_invalid_ip() {
        assert_eq!(
            calculate("192.168.1.256", "/24").unwrap_err(),
            CalcError::InvalidIpAddress
        );
    }

    #[test]
    fn test_calculate_invalid_mask() {
        assert_eq!(
            calculate("192.168.1.1", "/33").unwrap_err(),
            CalcError::InvalidSubnetMask
        );
        assert_eq!(
            calculate("192.168.1.1", "300.1.1.1").unwrap_err(),
            CalcError::InvalidSubnetMask
        );
        assert_eq!(
            calculate("192.168.1.1", "0.255.0.0").unwrap_err(),
            CalcError::InvalidSubnetMask
        );
    }

    #[test]
    fn test_calculate_checks_ip_before_mask() {
        // Both inputs invalid: the IP failure wins
        assert_eq!(
            calculate("192.168.1.256", "/33").unwrap_err(),
            CalcError::InvalidIpAddress
        );
    }

    #[test]
    fn test_subnet_info() {
        let info = subnet_info(24).expect("Failed to get subnet info");
        assert_eq!(info.total_subnets, 16777216);
        assert_eq!(info.hosts_per_subnet, 254);
        assert_eq!(info.subnet_mask, "255.255.255.0");

        let info = subnet_info(0).expect("Failed to get subnet info");
        assert_eq!(info.total_subnets, 1);
        assert_eq!(info.hosts_per_subnet, 4294967294);

        assert!(subnet_info(33).is_err());
    }
}
