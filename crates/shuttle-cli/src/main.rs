mod cli;
mod config;
mod error;
mod logging;

use crate::cli::Cli;
use crate::error::Result;
use clap::Parser;
use qmshuttle::workflows::step;
use tracing::{debug, error, info};

fn main() {
    if let Err(e) = run_app() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run_app() -> Result<()> {
    let cli = Cli::parse();
    logging::setup_logging(cli.verbose, cli.quiet, cli.log_file.as_deref())?;

    info!("qmshuttle v{} starting up.", env!("CARGO_PKG_VERSION"));
    debug!("Full CLI arguments parsed: {:?}", &cli);

    let bridge_config = config::load(cli.config.as_deref())?;
    debug!("Bridge configuration: {:?}", &bridge_config);

    match step::run(&bridge_config, &cli.step_file) {
        Ok(summary) => {
            info!(
                "Step complete: {} atoms, {} point charges, energy {:.6}.",
                summary.atoms, summary.point_charges, summary.energy
            );
            Ok(())
        }
        Err(e) => {
            error!("Step failed: {e}");
            Err(e.into())
        }
    }
}
