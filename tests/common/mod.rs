//! In-memory OCI fake shared by the integration tests.
#![allow(dead_code)]

use oci_ip_inventory::models::{Compartment, PublicIp, Vnic, VnicAttachment};
use oci_ip_inventory::oci::{IdentityApi, NetworkApi, Page};
use std::cell::RefCell;
use std::collections::HashMap;
use std::error::Error;

pub const ROOT: &str = "ocid1.compartment.oc1..root";
pub const CHILD: &str = "ocid1.compartment.oc1..child";

/// Listing served page by page, or a failure.
type Listing<T> = Result<Vec<Page<T>>, String>;

/// Split `items` into pages of `per_page`, chained with tokens "1", "2", ...
pub fn paged<T: Clone>(items: &[T], per_page: usize) -> Vec<Page<T>> {
    if items.is_empty() {
        return vec![Page::last(vec![])];
    }
    let chunks: Vec<&[T]> = items.chunks(per_page).collect();
    let count = chunks.len();
    chunks
        .into_iter()
        .enumerate()
        .map(|(i, chunk)| Page {
            data: chunk.to_vec(),
            next_page: (i + 1 < count).then(|| (i + 1).to_string()),
        })
        .collect()
}

fn serve<T: Clone>(
    listing: Option<&Listing<T>>,
    page: Option<&str>,
) -> Result<Page<T>, Box<dyn Error>> {
    let pages = match listing {
        None => return Ok(Page::last(vec![])),
        Some(Err(e)) => return Err(e.clone().into()),
        Some(Ok(pages)) => pages,
    };
    let index: usize = page.map(str::parse::<usize>).transpose()?.unwrap_or(0);
    pages
        .get(index)
        .cloned()
        .ok_or_else(|| format!("no page {index}").into())
}

pub fn compartment(id: &str) -> Compartment {
    Compartment {
        id: id.to_string(),
        name: Some(id.rsplit('.').next().unwrap_or(id).to_string()),
        lifecycle_state: Some("ACTIVE".to_string()),
    }
}

pub fn attachment(compartment_id: &str, vnic_id: Option<&str>) -> VnicAttachment {
    let state = match vnic_id {
        Some(_) => "ATTACHED",
        None => "ATTACHING",
    };
    VnicAttachment {
        id: format!("ocid1.vnicattachment.oc1..{}", vnic_id.unwrap_or("pending")),
        compartment_id: compartment_id.to_string(),
        vnic_id: vnic_id.map(str::to_string),
        lifecycle_state: Some(state.to_string()),
    }
}

pub fn vnic(id: &str, private_ip: &str, public_ip: Option<&str>) -> Vnic {
    Vnic {
        id: id.to_string(),
        private_ip: private_ip.to_string(),
        public_ip: public_ip.map(str::to_string),
        display_name: None,
    }
}

pub fn public_ip(ip: &str) -> PublicIp {
    PublicIp {
        id: format!("ocid1.publicip.oc1..{ip}"),
        ip_address: ip.to_string(),
        lifetime: Some("RESERVED".to_string()),
        scope: Some("REGION".to_string()),
    }
}

/// Fake identity and network services. Unknown compartments have empty
/// listings; unknown VNICs fail.
pub struct FakeOci {
    pub compartments: Listing<Compartment>,
    pub attachments: HashMap<String, Listing<VnicAttachment>>,
    pub vnics: HashMap<String, Result<Vnic, String>>,
    pub public_ips: HashMap<String, Listing<PublicIp>>,
    /// Every call made, in order.
    pub calls: RefCell<Vec<String>>,
}

impl FakeOci {
    /// Fake whose subtree listing returns `subtree`, two per page.
    pub fn new(subtree: &[&str]) -> FakeOci {
        let compartments: Vec<Compartment> = subtree.iter().map(|id| compartment(id)).collect();
        FakeOci {
            compartments: Ok(paged(&compartments, 2)),
            attachments: HashMap::new(),
            vnics: HashMap::new(),
            public_ips: HashMap::new(),
            calls: RefCell::new(Vec::new()),
        }
    }

    /// Attach `vnic_id` in `compartment_id`; resolving it yields `vnic`.
    pub fn with_vnic(
        mut self,
        compartment_id: &str,
        vnic_id: &str,
        vnic: Result<Vnic, String>,
    ) -> Self {
        let entry = self
            .attachments
            .entry(compartment_id.to_string())
            .or_insert_with(|| Ok(vec![Page::last(vec![])]));
        if let Ok(pages) = entry {
            let mut items: Vec<VnicAttachment> = pages.drain(..).flat_map(|p| p.data).collect();
            items.push(attachment(compartment_id, Some(vnic_id)));
            *pages = paged(&items, 2);
        }
        self.vnics.insert(vnic_id.to_string(), vnic);
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    fn record(&self, call: String) {
        self.calls.borrow_mut().push(call);
    }
}

impl IdentityApi for FakeOci {
    fn list_compartments(
        &self,
        root: &str,
        page: Option<&str>,
    ) -> Result<Page<Compartment>, Box<dyn Error>> {
        self.record(format!("list_compartments {root} {page:?}"));
        serve(Some(&self.compartments), page)
    }
}

impl NetworkApi for FakeOci {
    fn list_vnic_attachments(
        &self,
        compartment_id: &str,
        page: Option<&str>,
    ) -> Result<Page<VnicAttachment>, Box<dyn Error>> {
        self.record(format!("list_vnic_attachments {compartment_id} {page:?}"));
        serve(self.attachments.get(compartment_id), page)
    }

    fn get_vnic(&self, vnic_id: &str) -> Result<Vnic, Box<dyn Error>> {
        self.record(format!("get_vnic {vnic_id}"));
        match self.vnics.get(vnic_id) {
            Some(Ok(vnic)) => Ok(vnic.clone()),
            Some(Err(e)) => Err(e.clone().into()),
            None => Err(format!("NotAuthorizedOrNotFound: {vnic_id}").into()),
        }
    }

    fn list_public_ips(
        &self,
        compartment_id: &str,
        page: Option<&str>,
    ) -> Result<Page<PublicIp>, Box<dyn Error>> {
        self.record(format!("list_public_ips {compartment_id} {page:?}"));
        serve(self.public_ips.get(compartment_id), page)
    }
}
