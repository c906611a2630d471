// cargo watch -x 'fmt' -x 'test'

//! IPv4 subnet calculator.
//!
//! [`calculate`] turns `"A.B.C.D/N"` into a [`SubnetDetails`] snapshot:
//! network and broadcast addresses, host counts and the usable host range.

pub mod cases;
pub mod config;
mod error;
pub mod harness;
pub mod models;
pub mod output;
pub mod processing;

pub use error::{SubnetError, SubnetResult};
pub use models::{Network, SubnetDetails, NO_USABLE_HOSTS};
pub use processing::{calculate, calculate_value};
