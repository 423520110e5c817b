//! Handler for the `config` command group.

use std::fs;
use std::path::Path;

use serde_json::json;

use crate::adapter::inbound::cli::{output, paths};
use crate::error::{ConfigError, Result};
use crate::infrastructure::config::settings::Config;

/// Default config template with documentation.
const CONFIG_TEMPLATE: &str = include_str!("../../../../config.toml.example");

/// Execute `config init`.
pub fn execute_init(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(ConfigError::InvalidValue {
            field: "config",
            reason: "file already exists (use --force to overwrite)".to_string(),
        }
        .into());
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    fs::write(path, CONFIG_TEMPLATE)?;

    if output::is_json() {
        output::json_output(json!({
            "command": "config.init",
            "path": path.display().to_string(),
            "created": true,
        }));
        return Ok(());
    }

    output::section("Config Initialized");
    output::success("Created configuration file");
    output::field("Path", path.display());
    if output::is_quiet() {
        return Ok(());
    }

    output::section("Next Steps");
    output::note(&format!("1. Edit {} with your RPC endpoint", path.display()));
    output::note(&format!(
        "2. Set WALLET_PRIVATE_KEY, or keep keystores in {}",
        paths::keystore_dir().display()
    ));
    output::note(&format!("3. Run: betboard config validate -c {}", path.display()));
    output::note(&format!("4. Run: betboard markets -c {}", path.display()));
    Ok(())
}

/// Execute `config show`.
pub fn execute_show(path: &Path) -> Result<()> {
    let config = Config::load(path)?;

    if output::is_json() {
        output::json_output(json!({
            "command": "config.show",
            "rpc_url": config.rpc_url(),
            "timeout_secs": config.network.timeout_secs,
            "betting": {
                "address": config.contracts.betting.address,
                "chain_id": config.contracts.betting.chain_id,
            },
            "token": config.contracts.token.as_ref().map(|token| json!({
                "address": token.address,
                "chain_id": token.chain_id,
            })),
            "watch_address": config.wallet.address,
            "private_key_loaded": config.wallet.private_key.is_some(),
            "concurrency": config.fetch.concurrency,
            "log_level": config.logging.level,
            "log_format": config.logging.format,
        }));
        return Ok(());
    }

    output::section("Effective Configuration");
    output::field("Path", path.display());

    output::section("Network");
    match config.rpc_url() {
        Some(url) => output::field("RPC", url),
        None => output::warning("No RPC endpoint configured"),
    }
    match config.network.timeout_secs {
        Some(secs) => output::field("Timeout", format!("{secs}s")),
        None => output::field("Timeout", "none"),
    }

    output::section("Contracts");
    output::field("Betting", &config.contracts.betting.address);
    output::field("Chain ID", config.contracts.betting.chain_id);
    if let Some(token) = &config.contracts.token {
        output::field("Token", &token.address);
        output::field("Token chain", token.chain_id);
    }

    output::section("Wallet");
    if config.wallet.private_key.is_some() {
        output::success("Private key loaded");
    } else if let Some(address) = &config.wallet.address {
        output::field("Watch", address);
    } else {
        output::note("Accounts come from the RPC node");
    }

    output::section("Fetch");
    output::field("Concurrency", config.fetch.concurrency);

    output::section("Logging");
    output::field("Level", &config.logging.level);
    output::field("Format", &config.logging.format);

    Ok(())
}

/// Warnings for a configuration that loads but cannot serve every command.
fn validation_warnings(config: &Config) -> Vec<&'static str> {
    let mut warnings = Vec::new();
    if config.rpc_url().is_none() {
        warnings.push("No RPC endpoint configured; market commands will not connect");
    }
    warnings
}

/// Execute `config validate`.
pub fn execute_validate(path: &Path) -> Result<()> {
    let config = Config::load(path)?;
    let warnings = validation_warnings(&config);

    if output::is_json() {
        output::json_output(json!({
            "command": "config.validate",
            "valid": true,
            "path": path.display().to_string(),
            "warnings": warnings,
        }));
        return Ok(());
    }

    output::section("Config Validation");
    output::field("Path", path.display());
    output::success("Configuration is valid");
    for warning in &warnings {
        output::warning(warning);
    }
    if !warnings.is_empty() {
        output::hint("set network.rpc_url or BETBOARD_RPC_URL");
    }
    Ok(())
}
