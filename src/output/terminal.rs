//! Terminal output for calculation results.

use crate::models::{is_private_ip, SubnetResult};
use colored::Colorize;

const LABEL_WIDTH: usize = 19;

/// Print a calculation result as an aligned label/value table.
pub fn print_result(result: &SubnetResult) {
    for (label, value) in result_rows(result) {
        // Pad before coloring so ANSI escapes don't skew the alignment
        println!(" {} {}", pad_label(label, LABEL_WIDTH).cyan(), value);
    }
}

/// Left-align a label to a fixed minimum width.
fn pad_label(label: &str, width: usize) -> String {
    format!("{label:<width$}")
}

/// Assemble the (label, value) rows for one result.
fn result_rows(result: &SubnetResult) -> Vec<(&'static str, String)> {
    let mut network = result.network_address.to_string();
    if is_private_ip(&result.network_address) {
        network.push_str(" (private)");
    }

    vec![
        ("Network Address:", network),
        ("Broadcast Address:", result.broadcast_address.to_string()),
        ("Host Range:", result.host_range()),
        ("Usable Hosts:", result.host_count.to_string()),
        ("Subnet Mask:", result.mask_decimal.clone()),
        ("Mask Binary:", result.mask_binary.clone()),
        ("CIDR Notation:", format!("/{}", result.cidr_prefix)),
        ("Network Class:", result.address_class.to_string()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::calculate;

    #[test]
    fn test_pad_label_short() {
        assert_eq!(pad_label("Mask:", 10), "Mask:     ");
    }

    #[test]
    fn test_pad_label_long() {
        assert_eq!(pad_label("A very long label:", 5), "A very long label:");
    }

    #[test]
    fn test_result_rows() {
        let result = calculate("192.168.1.100", "255.255.255.0").expect("Failed to calculate");
        let rows = result_rows(&result);

        assert_eq!(rows.len(), 8);
        assert_eq!(rows[0], ("Network Address:", "192.168.1.0 (private)".to_string()));
        assert_eq!(rows[1].1, "192.168.1.255");
        assert_eq!(rows[2].1, "192.168.1.1 - 192.168.1.254");
        assert_eq!(rows[3].1, "254");
        assert_eq!(rows[6].1, "/24");
        assert_eq!(rows[7].1, "Class C (192-223)");
    }

    #[test]
    fn test_result_rows_public_network() {
        let result = calculate("8.8.8.8", "/24").expect("Failed to calculate");
        let rows = result_rows(&result);
        assert_eq!(rows[0].1, "8.8.8.0");
    }
}
