//! VNIC address reporting.

use crate::models::VnicAttachment;
use crate::oci::{NetworkApi, Pages};
use std::io::{self, Write};

/// Report the private IP, and the public IP when assigned, of every VNIC
/// attached in `compartment_id`.
///
/// A failed attachment listing is written to `out` and ends this report. A
/// VNIC that cannot be resolved is written to `out` and skipped.
pub fn report_vnics<N>(network: &N, compartment_id: &str, out: &mut dyn Write) -> io::Result<()>
where
    N: NetworkApi + ?Sized,
{
    let attachments: Vec<VnicAttachment> =
        match Pages::new(|page| network.list_vnic_attachments(compartment_id, page))
            .collect::<Result<Vec<_>, _>>()
        {
            Ok(attachments) => attachments,
            Err(e) => {
                log::warn!("VNIC attachment listing failed for {compartment_id}");
                writeln!(out, "Error listing VNIC attachments: {e}")?;
                return Ok(());
            }
        };
    log::debug!("{} VNIC attachments in {compartment_id}", attachments.len());

    for attachment in &attachments {
        let Some(vnic_id) = attachment.vnic_id.as_deref() else {
            writeln!(
                out,
                "Error getting VNIC: attachment {} has no VNIC (state {})",
                attachment.id,
                attachment.lifecycle_state.as_deref().unwrap_or("unknown")
            )?;
            continue;
        };

        let vnic = match network.get_vnic(vnic_id) {
            Ok(vnic) => vnic,
            Err(e) => {
                writeln!(out, "Error getting VNIC: {e}")?;
                continue;
            }
        };

        writeln!(out, "Found VNIC: {} with IP: {}", vnic.id, vnic.private_ip)?;
        if let Some(public_ip) = &vnic.public_ip {
            writeln!(out, " - Public IP: {public_ip}")?;
        }
    }
    Ok(())
}
