//! Remote API capabilities.
//!
//! One method per remote call, each returning a single page so callers can
//! drive pagination through [`Pages`](super::Pages). The CLI-backed clients
//! implement these traits; tests substitute in-memory fakes.

use super::pagination::Page;
use crate::models::{Compartment, PublicIp, Vnic, VnicAttachment};
use std::error::Error;

/// Identity service: compartment tree.
pub trait IdentityApi {
    /// `ListCompartments(root, accessLevel=ACCESSIBLE, includeSubtree=true)`.
    ///
    /// The listing never contains `root` itself.
    fn list_compartments(
        &self,
        root_compartment_id: &str,
        page: Option<&str>,
    ) -> Result<Page<Compartment>, Box<dyn Error>>;
}

/// Virtual network and compute services.
pub trait NetworkApi {
    fn list_vnic_attachments(
        &self,
        compartment_id: &str,
        page: Option<&str>,
    ) -> Result<Page<VnicAttachment>, Box<dyn Error>>;

    fn get_vnic(&self, vnic_id: &str) -> Result<Vnic, Box<dyn Error>>;

    /// Public IPs of the compartment with `scope=REGION`.
    fn list_public_ips(
        &self,
        compartment_id: &str,
        page: Option<&str>,
    ) -> Result<Page<PublicIp>, Box<dyn Error>>;
}
