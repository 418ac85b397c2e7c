//! OCI compartment model.

use serde::{Deserialize, Serialize};

/// A compartment returned by `oci iam compartment list`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub struct Compartment {
    /// Compartment OCID.
    pub id: String,
    /// Display name (absent for the root we add back ourselves).
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub lifecycle_state: Option<String>,
}

impl Compartment {
    /// Compartment known only by its OCID.
    pub fn from_id(id: &str) -> Compartment {
        Compartment {
            id: id.to_string(),
            name: None,
            lifecycle_state: None,
        }
    }
}
