//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

use nearby_cli::CliError;

fn main() {
    env_logger::init();
    match nearby_cli::run() {
        Ok(()) => {}
        Err(CliError::ArgumentParsing(err)) => err.exit(),
        Err(err) => {
            eprintln!("nearby: {:?}", eyre::Report::new(err));
            std::process::exit(1);
        }
    }
}
