//! CLI module graph.

pub mod account;
pub mod command;
pub mod config;
pub mod market;
pub mod markets;
pub mod output;
pub mod paths;
pub mod portfolio;
pub mod render;
pub mod session;

use command::{Cli, Commands, ConfigCommand};

use crate::error::Result;

/// Run the parsed command.
pub async fn execute(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Markets(args) => markets::execute(&args).await,
        Commands::Market(args) => market::execute(&args).await,
        Commands::Portfolio(args) => portfolio::execute(&args).await,
        Commands::Account(args) => account::execute(&args).await,
        Commands::Config(ConfigCommand::Init(args)) => {
            config::execute_init(&args.path, args.force)
        }
        Commands::Config(ConfigCommand::Show(args)) => config::execute_show(&args.config),
        Commands::Config(ConfigCommand::Validate(args)) => {
            config::execute_validate(&args.config)
        }
    }
}
