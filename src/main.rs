use oci_ip_inventory::logging::init_logging;
use oci_ip_inventory::oci::{CliIdentityClient, CliNetworkClient, Session};
use oci_ip_inventory::{find_ips_in_compartments, root_compartment_from_args};
use std::io::Write;
use std::process::ExitCode;

fn main() -> ExitCode {
    // Do as little as possible in main.rs as it can't contain any tests
    if let Err(e) = init_logging() {
        eprintln!("Error initializing log4rs: {e}");
    }
    dotenv::dotenv().ok();
    log::info!("#Start main()");

    let args: Vec<String> = std::env::args().collect();
    let root_compartment_id = match root_compartment_from_args(&args) {
        Ok(root) => root,
        Err(usage) => {
            println!("{usage}");
            return ExitCode::FAILURE;
        }
    };

    let session = match Session::from_env() {
        Ok(session) => session,
        Err(e) => {
            println!("Error creating session: {e}");
            return ExitCode::SUCCESS;
        }
    };
    let identity = CliIdentityClient::new(&session);
    let network = CliNetworkClient::new(&session);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if let Err(e) = find_ips_in_compartments(&identity, &network, root_compartment_id, &mut out)
        .and_then(|()| out.flush())
    {
        log::error!("Error writing report: {e}");
    }

    ExitCode::SUCCESS
}
