//! Identity client backed by `oci iam`.

use super::api::IdentityApi;
use super::cli;
use super::pagination::{parse_page, Page};
use super::session::Session;
use crate::models::Compartment;
use std::error::Error;

pub struct CliIdentityClient<'a> {
    session: &'a Session,
}

impl<'a> CliIdentityClient<'a> {
    pub fn new(session: &'a Session) -> Self {
        CliIdentityClient { session }
    }

    fn list_compartments_command(
        &self,
        root_compartment_id: &str,
        page: Option<&str>,
    ) -> Vec<String> {
        self.session.list_command(
            "iam compartment list",
            &[
                "--compartment-id",
                root_compartment_id,
                "--access-level",
                "ACCESSIBLE",
                "--compartment-id-in-subtree",
                "true",
            ],
            page,
        )
    }
}

impl IdentityApi for CliIdentityClient<'_> {
    fn list_compartments(
        &self,
        root_compartment_id: &str,
        page: Option<&str>,
    ) -> Result<Page<Compartment>, Box<dyn Error>> {
        let output = cli::run(&self.list_compartments_command(root_compartment_id, page))?;
        parse_page(&output)
    }
}
