//! Public IP model.

use serde::{Deserialize, Serialize};

/// A public IP from `oci network public-ip list`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub struct PublicIp {
    /// Public IP OCID.
    pub id: String,
    /// The address literal, e.g. `129.146.2.1`.
    pub ip_address: String,
    /// `RESERVED` or `EPHEMERAL`.
    #[serde(default)]
    pub lifetime: Option<String>,
    /// `REGION` or `AVAILABILITY_DOMAIN`.
    #[serde(default)]
    pub scope: Option<String>,
}
