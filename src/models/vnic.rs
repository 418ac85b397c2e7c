//! VNIC attachment and VNIC models.

use serde::{Deserialize, Serialize};

/// Link between a compute instance and a VNIC.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub struct VnicAttachment {
    /// Attachment OCID.
    pub id: String,
    pub compartment_id: String,
    /// VNIC OCID. OCI leaves this null until the attachment is ATTACHED.
    #[serde(default)]
    pub vnic_id: Option<String>,
    #[serde(default)]
    pub lifecycle_state: Option<String>,
}

/// A virtual network interface as returned by `oci network vnic get`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub struct Vnic {
    /// VNIC OCID.
    pub id: String,
    /// Primary private address, always present.
    pub private_ip: String,
    /// Public address, if one is assigned.
    #[serde(default)]
    pub public_ip: Option<String>,
    #[serde(default)]
    pub display_name: Option<String>,
}
