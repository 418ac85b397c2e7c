//! Network client backed by `oci compute` and `oci network`.

use super::api::NetworkApi;
use super::cli;
use super::pagination::{parse_item, parse_page, Page};
use super::session::Session;
use crate::models::{PublicIp, Vnic, VnicAttachment};
use std::error::Error;

pub struct CliNetworkClient<'a> {
    session: &'a Session,
}

impl<'a> CliNetworkClient<'a> {
    pub fn new(session: &'a Session) -> Self {
        CliNetworkClient { session }
    }

    fn list_vnic_attachments_command(
        &self,
        compartment_id: &str,
        page: Option<&str>,
    ) -> Vec<String> {
        self.session.list_command(
            "compute vnic-attachment list",
            &["--compartment-id", compartment_id],
            page,
        )
    }

    fn get_vnic_command(&self, vnic_id: &str) -> Vec<String> {
        self.session.command("network vnic get", &["--vnic-id", vnic_id])
    }

    fn list_public_ips_command(&self, compartment_id: &str, page: Option<&str>) -> Vec<String> {
        self.session.list_command(
            "network public-ip list",
            &["--compartment-id", compartment_id, "--scope", "REGION"],
            page,
        )
    }
}

impl NetworkApi for CliNetworkClient<'_> {
    fn list_vnic_attachments(
        &self,
        compartment_id: &str,
        page: Option<&str>,
    ) -> Result<Page<VnicAttachment>, Box<dyn Error>> {
        let output = cli::run(&self.list_vnic_attachments_command(compartment_id, page))?;
        parse_page(&output)
    }

    fn get_vnic(&self, vnic_id: &str) -> Result<Vnic, Box<dyn Error>> {
        let output = cli::run(&self.get_vnic_command(vnic_id))?;
        parse_item(&output)
    }

    fn list_public_ips(
        &self,
        compartment_id: &str,
        page: Option<&str>,
    ) -> Result<Page<PublicIp>, Box<dyn Error>> {
        let output = cli::run(&self.list_public_ips_command(compartment_id, page))?;
        parse_page(&output)
    }
}
