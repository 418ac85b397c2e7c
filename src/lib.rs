pub mod config;
pub mod inventory;
pub mod logging;
pub mod models;
pub mod oci;

pub use inventory::{
    discover_compartments, find_ips_in_compartments, report_public_ips, report_vnics,
};

/// Printed when the command line does not hold exactly one argument.
pub const USAGE: &str = "Usage: oci-ip-inventory <root_compartment_ocid>";

/// Extract the root compartment OCID from `std::env::args()` style input
/// (program name first).
///
/// # Returns
/// * `Ok(&str)` - the single positional argument
/// * `Err(&str)` - the usage text, for any other argument count
pub fn root_compartment_from_args(args: &[String]) -> Result<&str, &'static str> {
    match args {
        [_, root] => Ok(root.as_str()),
        _ => Err(USAGE),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_one_argument() {
        let a = args(&["oci-ip-inventory", "ocid1.compartment.oc1..root"]);
        assert_eq!(root_compartment_from_args(&a), Ok("ocid1.compartment.oc1..root"));
    }

    #[test]
    fn test_wrong_argument_count() {
        assert_eq!(root_compartment_from_args(&args(&["oci-ip-inventory"])), Err(USAGE));
        assert_eq!(
            root_compartment_from_args(&args(&["oci-ip-inventory", "a", "b"])),
            Err(USAGE)
        );
        assert_eq!(root_compartment_from_args(&[]), Err(USAGE));
    }
}
