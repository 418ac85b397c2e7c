//! Tunables and environment variable names.

/// Executable used when `OCI_INVENTORY_CLI` is not set.
pub const DEFAULT_OCI_CLI: &str = "oci";

/// Page size requested from every list call.
pub const DEFAULT_PAGE_LIMIT: u32 = 100;

/// The OCI API rejects `limit` values above this.
pub const MAX_PAGE_LIMIT: u32 = 1000;

/// Refuse CLI responses larger than this many bytes.
pub const MAX_OUTPUT_BYTES: usize = 20_000_000;

pub const ENV_OCI_CLI: &str = "OCI_INVENTORY_CLI";
pub const ENV_PAGE_LIMIT: &str = "OCI_INVENTORY_PAGE_LIMIT";
pub const ENV_PROFILE: &str = "OCI_CLI_PROFILE";
pub const ENV_CONFIG_FILE: &str = "OCI_CLI_CONFIG_FILE";
pub const ENV_REGION: &str = "OCI_CLI_REGION";

/// Logging config read from the working directory.
pub const LOG4RS_FILE: &str = "log4rs.yml";
