//! Compartment discovery.

use crate::models::Compartment;
use crate::oci::{IdentityApi, Pages};
use std::error::Error;

/// List every accessible compartment below `root_compartment_id`, at any
/// depth, followed by the root itself.
///
/// The subtree listing excludes the root, so it is appended after the listed
/// compartments. Nothing is de-duplicated: a root that the listing does
/// return shows up twice. Any failing page fails the whole discovery.
pub fn discover_compartments<I>(
    identity: &I,
    root_compartment_id: &str,
) -> Result<Vec<Compartment>, Box<dyn Error>>
where
    I: IdentityApi + ?Sized,
{
    let mut compartments: Vec<Compartment> =
        Pages::new(|page| identity.list_compartments(root_compartment_id, page))
            .collect::<Result<_, _>>()?;

    for c in &compartments {
        log::debug!(
            "compartment {} name={} state={}",
            c.id,
            c.name.as_deref().unwrap_or("-"),
            c.lifecycle_state.as_deref().unwrap_or("-")
        );
    }

    compartments.push(Compartment::from_id(root_compartment_id));
    Ok(compartments)
}
