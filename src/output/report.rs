//! Rendering of calculation results.

use super::terminal::{format_field, group_digits};
use crate::error::SubnetError;
use crate::models::SubnetDetails;

const LABEL_WIDTH: usize = 17;

/// Multi-line text report for one result.
pub fn render_text(details: &SubnetDetails) -> String {
    let rows = [
        format_field("network_address", details.network_address, LABEL_WIDTH),
        format_field("broadcast_address", details.broadcast_address, LABEL_WIDTH),
        format_field("prefix_len", details.prefix_len, LABEL_WIDTH),
        format_field("netmask", details.netmask, LABEL_WIDTH),
        format_field("wildcard_mask", details.wildcard_mask, LABEL_WIDTH),
        format_field("total_hosts", group_digits(details.total_hosts), LABEL_WIDTH),
        format_field("usable_hosts", group_digits(details.usable_hosts), LABEL_WIDTH),
        format_field("first_usable_ip", details.first_usable_display(), LABEL_WIDTH),
        format_field("last_usable_ip", details.last_usable_display(), LABEL_WIDTH),
    ];
    rows.join("\n")
}

/// Pretty JSON for one result.
pub fn render_json(details: &SubnetDetails) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(details)
}

/// One-line description of an error, prefixed with its kind.
pub fn render_error(err: &SubnetError) -> String {
    let kind = match err {
        SubnetError::InvalidArgumentType { .. } => "InvalidArgumentType",
        SubnetError::InvalidNetworkFormat { .. } => "InvalidNetworkFormat",
        SubnetError::InternalError(_) => "InternalError",
    };
    format!("{kind}: {err}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculate;

    #[test]
    fn test_render_text() {
        let d = calculate("192.168.1.0/24").unwrap();
        let text = render_text(&d);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 9);
        assert_eq!(lines[0], "  network_address: 192.168.1.0");
        assert_eq!(lines[1], "broadcast_address: 192.168.1.255");
        assert_eq!(lines[6], "     usable_hosts: 254");
        assert_eq!(lines[8], "   last_usable_ip: 192.168.1.254");
    }

    #[test]
    fn test_render_text_sentinel() {
        let d = calculate("198.51.100.1/32").unwrap();
        let text = render_text(&d);
        assert!(text.contains("  first_usable_ip: N/A"));
        assert!(text.contains("   last_usable_ip: N/A"));
    }

    #[test]
    fn test_render_json() {
        let d = calculate("0.0.0.0/0").unwrap();
        let json: serde_json::Value = serde_json::from_str(&render_json(&d).unwrap()).unwrap();
        assert_eq!(json["total_hosts"], 4294967296u64);
        assert_eq!(json["first_usable_ip"], "0.0.0.1");
    }

    #[test]
    fn test_render_error() {
        let err = calculate("192.168.1.0").unwrap_err();
        assert_eq!(
            render_error(&err),
            "InvalidNetworkFormat: Invalid network format '192.168.1.0': missing '/prefix'"
        );
    }
}
