//! Inventory of addresses across a compartment tree.
//!
//! - [`compartments`] - Subtree discovery, root appended last
//! - [`vnics`] - Private and public IPs of attached VNICs
//! - [`public_ips`] - Reserved public IPs of the region

mod compartments;
mod public_ips;
mod vnics;

pub use compartments::discover_compartments;
pub use public_ips::report_public_ips;
pub use vnics::report_vnics;

use crate::oci::{IdentityApi, NetworkApi};
use std::io::{self, Write};

/// Discover the compartments under `root_compartment_id` and report the
/// addresses of each one, in discovery order.
///
/// API failures are written to `out` and never returned: a failed compartment
/// listing ends the run, a failed listing inside one compartment skips only
/// that report. The `Err` case is reserved for failures writing `out`.
pub fn find_ips_in_compartments<I, N>(
    identity: &I,
    network: &N,
    root_compartment_id: &str,
    out: &mut dyn Write,
) -> io::Result<()>
where
    I: IdentityApi + ?Sized,
    N: NetworkApi + ?Sized,
{
    let compartments = match discover_compartments(identity, root_compartment_id) {
        Ok(compartments) => compartments,
        Err(e) => {
            log::error!("Compartment listing under {root_compartment_id} failed");
            writeln!(out, "Error listing compartments: {e}")?;
            return Ok(());
        }
    };
    log::info!(
        "Found {} compartments under {root_compartment_id} (root included)",
        compartments.len()
    );

    for compartment in &compartments {
        writeln!(out, "Processing compartment: {}", compartment.id)?;
        report_vnics(network, &compartment.id, out)?;
        report_public_ips(network, &compartment.id, out)?;
    }

    log::info!("#End find_ips_in_compartments()");
    Ok(())
}
