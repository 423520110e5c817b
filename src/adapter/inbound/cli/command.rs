//! Command-line interface definitions.
//!
//! Defines the CLI structure for betboard using `clap`: browsing markets,
//! viewing the connected account's portfolio and managing configuration.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use super::paths;
use crate::application::listing::SortOrder;

/// Browse binary prediction markets and your positions
#[derive(Parser, Debug)]
#[command(name = "betboard")]
#[command(version)]
pub struct Cli {
    /// Color output mode [auto, always, never]
    #[arg(
        long,
        global = true,
        default_value = "auto",
        hide_possible_values = true
    )]
    pub color: ColorChoice,

    /// JSON output for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Decrease output verbosity
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase output verbosity
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Color output mode for terminal rendering.
#[derive(Clone, Debug, Default, clap::ValueEnum)]
pub enum ColorChoice {
    /// Detect automatically
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List all markets
    Markets(MarketsArgs),

    /// Show a single market
    Market(MarketArgs),

    /// Show the connected account's positions
    Portfolio(PortfolioArgs),

    /// Show the connected account and its balances
    Account(ConfigPathArg),

    /// Manage configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

/// Subcommands for `betboard config`.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Generate a new configuration file from template.
    Init(ConfigInitArgs),
    /// Display the effective configuration with defaults applied.
    Show(ConfigPathArg),
    /// Validate a configuration file for correctness.
    Validate(ConfigPathArg),
}

/// Shared argument struct for commands that require only a configuration path.
#[derive(Parser, Debug)]
pub struct ConfigPathArg {
    /// Path to the configuration file.
    #[arg(short, long, default_value_os_t = paths::default_config())]
    pub config: PathBuf,
}

/// Sort order accepted on the command line.
#[derive(Clone, Copy, Debug, Default, clap::ValueEnum)]
pub enum SortArg {
    /// Ascending market id
    #[default]
    Id,
    /// Largest volume first
    Volume,
    /// Most recently created first
    Newest,
}

impl From<SortArg> for SortOrder {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::Id => Self::Id,
            SortArg::Volume => Self::Volume,
            SortArg::Newest => Self::Newest,
        }
    }
}

/// Arguments for the `markets` subcommand.
#[derive(Parser, Debug)]
pub struct MarketsArgs {
    #[command(flatten)]
    pub config: ConfigPathArg,

    /// Only show markets whose question or options contain this text.
    #[arg(short, long)]
    pub search: Option<String>,

    /// Sort order.
    #[arg(long, value_enum, default_value_t = SortArg::Id)]
    pub sort: SortArg,

    /// Hide resolved markets.
    #[arg(long)]
    pub open: bool,
}

/// Arguments for the `market` subcommand.
#[derive(Parser, Debug)]
pub struct MarketArgs {
    /// Market id (ids start at 1).
    pub id: u64,

    #[command(flatten)]
    pub config: ConfigPathArg,
}

/// Arguments for the `portfolio` subcommand.
#[derive(Parser, Debug)]
pub struct PortfolioArgs {
    #[command(flatten)]
    pub config: ConfigPathArg,

    /// Read positions of this address instead of the connected account.
    #[arg(long)]
    pub account: Option<String>,
}

/// Arguments for `config init`.
#[derive(Parser, Debug)]
pub struct ConfigInitArgs {
    /// Output path for the configuration file.
    #[arg(default_value_os_t = paths::default_config())]
    pub path: PathBuf,

    /// Overwrite an existing file.
    #[arg(long)]
    pub force: bool,
}
