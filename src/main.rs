//! Jizz - search Jackett, download with Transmission
//!
//! # Usage
//!
//! ```bash
//! # Reads ./jizz.yml
//! jizz
//!
//! # Other config, debug logging
//! jizz --config /etc/jizz.yml --verbose
//! ```

use clap::Parser;
use std::io;

use jizz::app::{self, App, AppError};
use jizz::cli::{Cli, ExitCode, Output};
use jizz::config::Config;
use jizz::telemetry;
use jizz::ui::{self, StdinPrompt};

#[tokio::main(flavor = "current_thread")]
async fn main() -> std::process::ExitCode {
    let cli = Cli::parse();

    if let Err(e) = telemetry::init_logging(cli.verbose) {
        eprintln!("{e}");
    }

    let output = Output::new(&cli);
    run(&cli, &output).await.into()
}

/// Load config, verify both services, then loop until interrupted
async fn run(cli: &Cli, output: &Output) -> ExitCode {
    let config = match Config::load(&cli.config) {
        Ok(config) => config,
        Err(e) => return output.error(&AppError::from(e)),
    };

    let mut stdout = io::stdout();
    if let Err(e) = ui::splash(&mut stdout) {
        return output.error(&AppError::from(e));
    }

    let (jackett, transmission) = match app::startup(&config, &mut stdout).await {
        Ok(clients) => clients,
        Err(e) => return output.error(&e),
    };

    let prompt = match StdinPrompt::new() {
        Ok(prompt) => prompt,
        Err(e) => return output.error(&AppError::from(e)),
    };

    let mut app = App::new(jackett, transmission, prompt, stdout);
    match app.run().await {
        Ok(()) => ExitCode::Success,
        Err(e) => output.error(&e),
    }
}
