//! OCI access through the `oci` CLI.
//!
//! - [`cli`] - Command execution
//! - [`session`] - Profile, config file and region shared by all calls
//! - [`pagination`] - Page parsing and the lazy [`Pages`] iterator
//! - [`api`] - Narrow traits over the remote calls
//! - [`identity`] and [`network`] - CLI-backed implementations

pub mod api;
mod cli;
mod identity;
mod network;
mod pagination;
mod session;

// Re-export public types and functions
pub use api::{IdentityApi, NetworkApi};
pub use identity::CliIdentityClient;
pub use network::CliNetworkClient;
pub use pagination::{parse_item, parse_page, Page, Pages};
pub use session::Session;
