use tracing_subscriber::EnvFilter;
use crate::error::{CliError, ErrorType};

mod error;
mod cli;
mod options;
mod reader;
mod write;
mod process;

fn main() -> Result<(), CliError> {
    init_logging();

    let matches = cli::build();
    process::execute(&matches)
}

// stdout carries the translated file, diagnostics go to stderr
fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
