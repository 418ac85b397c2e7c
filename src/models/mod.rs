//! Domain models for the OCI IP inventory.
//!
//! Records as returned by the `oci` CLI (kebab-case JSON keys):
//! - [`Compartment`] - node of the compartment tree
//! - [`VnicAttachment`] and [`Vnic`] - virtual network interfaces
//! - [`PublicIp`] - reserved or ephemeral public address

mod compartment;
mod public_ip;
mod vnic;

// Re-export public types
pub use compartment::Compartment;
pub use public_ip::PublicIp;
pub use vnic::{Vnic, VnicAttachment};
