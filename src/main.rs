use std::error::Error as _;

use betboard::adapter::inbound::cli::command::{Cli, ColorChoice};
use betboard::adapter::inbound::cli::output::{self, OutputConfig};
use betboard::adapter::inbound::cli::execute;
use clap::Parser;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {}
    }
    output::configure(OutputConfig::new(cli.json, cli.quiet, cli.verbose));

    if let Err(e) = execute(cli).await {
        output::error(&e.to_string());
        if output::verbosity() > 0 {
            let mut cause = e.source();
            while let Some(inner) = cause {
                output::hint(&inner.to_string());
                cause = inner.source();
            }
        }
        std::process::exit(1);
    }
}
