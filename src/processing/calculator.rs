//! The subnet calculator.
//!
//! Turns one `A.B.C.D/N` string into a [`SubnetDetails`] snapshot. Pure and
//! stateless; safe to call from any number of threads.

use crate::error::{SubnetError, SubnetResult};
use crate::models::{num_hosts, num_usable_hosts, Network, SubnetDetails};
use serde_json::Value;
use std::net::Ipv4Addr;

/// Calculate subnet facts for a CIDR string such as `"192.168.1.0/24"`.
///
/// Host bits in the address are masked away rather than rejected.
///
/// # Examples
/// ```
/// let d = subnet_calc::calculate("192.168.1.100/27").unwrap();
/// assert_eq!(d.network_address.to_string(), "192.168.1.96");
/// assert_eq!(d.usable_hosts, 30);
/// ```
pub fn calculate(input: &str) -> SubnetResult<SubnetDetails> {
    log::debug!("calculate({input:?})");

    let network = input.parse::<Network>().inspect_err(|e| {
        log::warn!("Rejected input {input:?}: {e}");
    })?;

    let details = derive_details(network).inspect_err(|e| {
        log::error!("Derivation failed for {network} (input {input:?}): {e}");
    })?;

    log::debug!(
        "{network} => broadcast={} total={} usable={}",
        details.broadcast_address,
        details.total_hosts,
        details.usable_hosts
    );
    Ok(details)
}

/// Calculate from a dynamically typed value.
///
/// Anything other than a JSON string fails with
/// [`SubnetError::InvalidArgumentType`] before its content is looked at.
pub fn calculate_value(input: &Value) -> SubnetResult<SubnetDetails> {
    match input {
        Value::String(s) => calculate(s),
        other => {
            let found = json_kind(other);
            log::warn!("Rejected non-string input of type {found}: {other}");
            Err(SubnetError::InvalidArgumentType {
                found: found.to_string(),
            })
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn internal(msg: String) -> SubnetError {
    SubnetError::InternalError(msg)
}

fn derive_details(network: Network) -> SubnetResult<SubnetDetails> {
    let prefix = network.prefix();
    let network_address = network.addr();
    let network_bits = u32::from(network_address);

    let total_hosts = num_hosts(prefix)?;
    let host_bits = u32::try_from(total_hosts - 1)
        .map_err(|_| internal(format!("host bits for /{prefix} do not fit in 32 bits")))?;
    if network_bits & host_bits != 0 {
        return Err(internal(format!("{network} has host bits set")));
    }

    let broadcast_address = Ipv4Addr::from(network_bits | host_bits);
    if broadcast_address != network.broadcast()? {
        return Err(internal(format!("broadcast mismatch for {network}")));
    }

    // Only /31 and /32 hit the floor.
    let usable_hosts = num_usable_hosts(prefix)?;
    if (usable_hosts == 0) != (prefix >= 31) || usable_hosts > total_hosts {
        return Err(internal(format!(
            "usable host count {usable_hosts} inconsistent with /{prefix}"
        )));
    }

    let (first_usable_ip, last_usable_ip) = if usable_hosts > 0 {
        let first = network_bits
            .checked_add(1)
            .ok_or_else(|| internal(format!("first usable address overflowed for {network}")))?;
        let last = u32::from(broadcast_address)
            .checked_sub(1)
            .ok_or_else(|| internal(format!("last usable address underflowed for {network}")))?;
        (Some(Ipv4Addr::from(first)), Some(Ipv4Addr::from(last)))
    } else {
        (None, None)
    };

    Ok(SubnetDetails {
        network_address,
        broadcast_address,
        prefix_len: prefix,
        netmask: network.netmask()?,
        wildcard_mask: network.wildcard_mask()?,
        total_hosts,
        usable_hosts,
        first_usable_ip,
        last_usable_ip,
    })
}
