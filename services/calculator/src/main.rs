#[macro_use]
extern crate lazy_static;

use std::io;

use log::{error, info};

use crate::config::Config;
use crate::error::CalculatorError;
use crate::repl::Repl;

mod config;
mod error;
mod repl;

fn run() -> Result<(), CalculatorError> {
    let config: Config = config::figment().extract()?;
    info!("Loaded {} bindings", config.bindings.len());

    let stdin = io::stdin();
    let stdout = io::stdout();
    Repl::new(stdin.lock(), stdout.lock(), &config).run()?;

    if config.show_metrics {
        let metrics =
            telemetry::encode().map_err(|e| CalculatorError::InternalError(e.to_string()))?;
        print!("{}", metrics);
    }
    Ok(())
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        error!("{}", e);
        std::process::exit(1);
    }
}
