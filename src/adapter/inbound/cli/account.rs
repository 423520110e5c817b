use serde_json::json;

use crate::adapter::inbound::cli::command::ConfigPathArg;
use crate::adapter::inbound::cli::render::amount;
use crate::adapter::inbound::cli::{output, session};
use crate::error::Result;
use crate::infrastructure::bootstrap;
use crate::infrastructure::wallet::WalletService;

/// Display the connected account, its chain and balances.
pub async fn execute(args: &ConfigPathArg) -> Result<()> {
    let config = session::load_config(&args.config)?;
    let session = session::connect(&config).await?;

    let pb = output::spinner("Fetching balances");
    let overview = match bootstrap::with_timeout(
        config.network.timeout_secs,
        WalletService::overview(&session),
    )
    .await
    {
        Ok(overview) => {
            output::spinner_success(&pb, "Fetching balances");
            overview
        }
        Err(e) => {
            output::spinner_fail(&pb, "Fetching balances");
            return Err(e);
        }
    };

    if output::is_json() {
        output::json_output(json!({
            "command": "account",
            "account": overview.account,
            "chain_id": overview.chain_id,
            "wallet": overview.wallet,
            "balance": overview.balance,
            "token": overview.token,
        }));
        return Ok(());
    }

    output::section("Account");
    output::field("Address", overview.account);
    output::field("Wallet", &overview.wallet);
    if let Some(chain_id) = overview.chain_id {
        output::field("Chain ID", chain_id);
    }
    output::field("Balance", format!("{} ETH", amount(overview.balance)));

    match &overview.token {
        Some(token) => {
            output::field(
                "Token",
                format!("{} {}", amount(token.amount), token.symbol),
            );
            output::field("Token address", token.address);
        }
        None if config.contracts.token.is_some() => {
            output::warning("Token balance unavailable");
        }
        None => {}
    }

    Ok(())
}
