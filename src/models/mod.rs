//! Domain models for subnet calculations.
//!
//! - [`Network`] - IPv4 network (normalized address + prefix length)
//! - [`SubnetDetails`] - facts derived from a network

mod details;
mod ipv4;

// Re-export public types
pub use details::{SubnetDetails, NO_USABLE_HOSTS};
pub use ipv4::{
    broadcast_addr, cut_addr, get_cidr_mask, num_hosts, num_usable_hosts, parse_cidr, Network,
    MAX_LENGTH,
};
