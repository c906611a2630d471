//! Subnet calculation logic.
//!
//! - [`calculator`] - derive [`crate::models::SubnetDetails`] from CIDR text

mod calculator;

pub use calculator::{calculate, calculate_value};
