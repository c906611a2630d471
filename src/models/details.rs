//! Derived subnet facts.

use super::Network;
use crate::error::SubnetResult;
use serde::Serialize;
use std::net::Ipv4Addr;

/// Text shown in place of an address when a network has no usable hosts.
pub const NO_USABLE_HOSTS: &str = "N/A";

/// Read-only snapshot of everything derived from one network.
///
/// `first_usable_ip` and `last_usable_ip` are both `None` exactly when
/// `usable_hosts` is zero (`/31` and `/32`).
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct SubnetDetails {
    /// Network address, host bits zero.
    pub network_address: Ipv4Addr,
    /// Broadcast address, host bits all one.
    pub broadcast_address: Ipv4Addr,
    pub prefix_len: u8,
    pub netmask: Ipv4Addr,
    pub wildcard_mask: Ipv4Addr,
    /// 2^(32 - prefix_len).
    pub total_hosts: u64,
    /// total_hosts - 2, floored at 0.
    pub usable_hosts: u64,
    pub first_usable_ip: Option<Ipv4Addr>,
    pub last_usable_ip: Option<Ipv4Addr>,
}

impl SubnetDetails {
    /// The canonical network these details were derived from.
    pub fn cidr(&self) -> SubnetResult<Network> {
        Network::new(self.network_address, self.prefix_len)
    }

    /// First usable address as text, or [`NO_USABLE_HOSTS`].
    pub fn first_usable_display(&self) -> String {
        display_usable(self.first_usable_ip)
    }

    /// Last usable address as text, or [`NO_USABLE_HOSTS`].
    pub fn last_usable_display(&self) -> String {
        display_usable(self.last_usable_ip)
    }
}

fn display_usable(ip: Option<Ipv4Addr>) -> String {
    ip.map(|ip| ip.to_string())
        .unwrap_or_else(|| NO_USABLE_HOSTS.to_string())
}
