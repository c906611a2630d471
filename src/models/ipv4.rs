//! IPv4 prefix arithmetic and the [`Network`] value type.
//!
//! All helpers work on a 32 bit address with explicit masking. Host counts are
//! `u64` so a `/0` network (2^32 addresses) is representable.

use crate::error::{SubnetError, SubnetResult};
use regex::Regex;
use std::net::Ipv4Addr;
use std::str::FromStr;
use std::sync::OnceLock;

/// Maximum length for an IPv4 prefix (32 bits).
pub const MAX_LENGTH: u8 = 32;

/// `A.B.C.D/N` shape, ASCII digits only. Ranges are checked after matching.
static CIDR_REGEX: OnceLock<Regex> = OnceLock::new();

fn get_cidr_regex() -> &'static Regex {
    CIDR_REGEX.get_or_init(|| {
        Regex::new(r"^([0-9]+)\.([0-9]+)\.([0-9]+)\.([0-9]+)/([0-9]+)$")
            .expect("Invalid Regex")
    })
}

fn too_long(len: u8) -> SubnetError {
    SubnetError::InternalError(format!("Network length /{len} is too long"))
}

/// Convert a CIDR prefix length to a subnet mask as u32.
///
/// # Examples
/// ```
/// use subnet_calc::models::get_cidr_mask;
/// assert_eq!(get_cidr_mask(24).unwrap(), 0xFFFFFF00);
/// ```
pub fn get_cidr_mask(len: u8) -> SubnetResult<u32> {
    if len > MAX_LENGTH {
        Err(too_long(len))
    } else {
        let right_len = MAX_LENGTH - len;
        let all_bits = u32::MAX as u64;

        let mask = (all_bits >> right_len) << right_len;

        Ok(mask as u32)
    }
}

/// Get the network address for a given IP and prefix length.
pub fn cut_addr(addr: Ipv4Addr, len: u8) -> SubnetResult<Ipv4Addr> {
    let mask = get_cidr_mask(len)?;
    Ok(Ipv4Addr::from(u32::from(addr) & mask))
}

/// Calculate the broadcast address for a given IP and prefix length.
pub fn broadcast_addr(addr: Ipv4Addr, len: u8) -> SubnetResult<Ipv4Addr> {
    let mask = get_cidr_mask(len)?;
    let network_bits = u32::from(addr) & mask;
    Ok(Ipv4Addr::from(network_bits | !mask))
}

/// Total number of addresses in a network of the given prefix length.
pub fn num_hosts(len: u8) -> SubnetResult<u64> {
    if len > MAX_LENGTH {
        Err(too_long(len))
    } else {
        Ok(1u64 << (MAX_LENGTH - len))
    }
}

/// Number of assignable host addresses: network and broadcast are reserved.
///
/// `/31` and `/32` have none.
pub fn num_usable_hosts(len: u8) -> SubnetResult<u64> {
    Ok(num_hosts(len)?.saturating_sub(2))
}

/// Split and validate `A.B.C.D/N` text into an address and prefix length.
///
/// No trimming is done; surrounding whitespace is an error like any other
/// stray character.
pub fn parse_cidr(input: &str) -> SubnetResult<(Ipv4Addr, u8)> {
    if input.is_empty() {
        return Err(SubnetError::format(input, "empty input"));
    }
    if input.trim() != input {
        return Err(SubnetError::format(input, "leading or trailing whitespace"));
    }
    let Some((addr_part, _)) = input.split_once('/') else {
        return Err(SubnetError::format(input, "missing '/prefix'"));
    };

    let caps = get_cidr_regex().captures(input).ok_or_else(|| {
        let fields = addr_part.split('.').count();
        if fields != 4 {
            SubnetError::format(input, format!("expected 4 octets, found {fields}"))
        } else {
            SubnetError::format(input, "octets and prefix must be plain decimal numbers")
        }
    })?;

    let mut octets = [0u8; 4];
    for (i, octet) in octets.iter_mut().enumerate() {
        let text = &caps[i + 1];
        if text.len() > 1 && text.starts_with('0') {
            return Err(SubnetError::format(
                input,
                format!("octet '{text}' has leading zeros"),
            ));
        }
        *octet = text.parse().map_err(|_| {
            SubnetError::format(input, format!("octet '{text}' out of range 0-255"))
        })?;
    }

    let prefix_text = &caps[5];
    if prefix_text.len() > 1 && prefix_text.starts_with('0') {
        return Err(SubnetError::format(
            input,
            format!("prefix '{prefix_text}' has leading zeros"),
        ));
    }
    let prefix = prefix_text
        .parse::<u8>()
        .ok()
        .filter(|p| *p <= MAX_LENGTH)
        .ok_or_else(|| {
            SubnetError::format(
                input,
                format!("prefix length {prefix_text} out of range 0-{MAX_LENGTH}"),
            )
        })?;

    Ok((Ipv4Addr::from(octets), prefix))
}

/// An IPv4 network: base address plus prefix length.
///
/// The base address never has host bits set; [`Network::new`] masks them
/// away, so `192.168.1.100/27` and `192.168.1.96/27` are the same network.
#[derive(Eq, PartialEq, Debug, Copy, Clone)]
pub struct Network {
    addr: Ipv4Addr,
    prefix: u8,
}

impl Network {
    /// Build a network, clearing any host bits of `addr`.
    pub fn new(addr: Ipv4Addr, prefix: u8) -> SubnetResult<Network> {
        if prefix > MAX_LENGTH {
            return Err(SubnetError::format(
                &format!("{addr}/{prefix}"),
                format!("prefix length {prefix} out of range 0-{MAX_LENGTH}"),
            ));
        }
        Ok(Network {
            addr: cut_addr(addr, prefix)?,
            prefix,
        })
    }

    /// The network address (host bits zero).
    pub fn addr(&self) -> Ipv4Addr {
        self.addr
    }

    /// The prefix length (0-32).
    pub fn prefix(&self) -> u8 {
        self.prefix
    }

    pub fn netmask(&self) -> SubnetResult<Ipv4Addr> {
        Ok(Ipv4Addr::from(get_cidr_mask(self.prefix)?))
    }

    pub fn wildcard_mask(&self) -> SubnetResult<Ipv4Addr> {
        Ok(Ipv4Addr::from(!get_cidr_mask(self.prefix)?))
    }

    /// The highest address in the network (host bits all one).
    pub fn broadcast(&self) -> SubnetResult<Ipv4Addr> {
        broadcast_addr(self.addr, self.prefix)
    }
}

impl FromStr for Network {
    type Err = SubnetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (addr, prefix) = parse_cidr(s)?;
        Network::new(addr, prefix)
    }
}

impl std::fmt::Display for Network {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.addr, self.prefix)
    }
}
