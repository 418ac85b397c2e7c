//! Reserved public IP reporting.

use crate::models::PublicIp;
use crate::oci::{NetworkApi, Pages};
use std::io::{self, Write};

/// Report every public IP of `compartment_id` in the session's region.
///
/// Nothing is reported for the compartment if any page fails.
pub fn report_public_ips<N>(
    network: &N,
    compartment_id: &str,
    out: &mut dyn Write,
) -> io::Result<()>
where
    N: NetworkApi + ?Sized,
{
    let public_ips: Vec<PublicIp> =
        match Pages::new(|page| network.list_public_ips(compartment_id, page))
            .collect::<Result<Vec<_>, _>>()
        {
            Ok(public_ips) => public_ips,
            Err(e) => {
                log::warn!("Public IP listing failed for {compartment_id}");
                writeln!(out, "Error listing public IPs: {e}")?;
                return Ok(());
            }
        };

    for public_ip in &public_ips {
        writeln!(out, "Found Reserved Public IP: {}", public_ip.ip_address)?;
    }
    Ok(())
}
