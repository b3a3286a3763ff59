//! Domain models for the subnet calculator.
//!
//! This module contains the core data structures and address arithmetic:
//! - [`CalcError`] - validation failure taxonomy
//! - [`SubnetResult`] - derived subnet parameters
//! - [`AddressClass`] - first-octet address classification
//! - address and mask helpers ([`parse_ipv4`], [`parse_mask`], ...)

mod error;
mod ipv4;
mod mask;
mod subnet;

// Re-export public types
pub use error::CalcError;
pub use ipv4::{
    address_class, broadcast_address, host_count, host_range, is_private_ip, network_address,
    parse_ipv4, to_binary, validate_ipv4, AddressClass, MAX_LENGTH,
};
pub use mask::{
    is_contiguous, mask_to_prefix, normalize_mask, parse_mask, prefix_to_mask, validate_mask,
};
pub use subnet::SubnetResult;
