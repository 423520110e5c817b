//! Account overview tests.

mod support;

use std::sync::Arc;

use alloy_primitives::U256;
use betboard::application::{Deployment, Session, SessionTargets};
use betboard::error::{Error, WalletError};
use betboard::infrastructure::wallet::WalletService;
use betboard::port::outbound::wallet::WalletProvider;
use rust_decimal_macros::dec;

use support::contract::ScriptedContract;
use support::wallet::{ScriptedToken, ScriptedWallet};

fn targets(with_token: bool) -> SessionTargets {
    let deployment = |address| Deployment {
        address,
        chain_id: support::CHAIN_ID,
    };
    SessionTargets {
        betting: deployment(support::BETTING),
        token: with_token.then(|| deployment(support::TOKEN)),
    }
}

async fn session_with(wallet: ScriptedWallet, with_token: bool) -> Session {
    let provider: Arc<dyn WalletProvider> = Arc::new(wallet);
    let session = Session::new();
    session
        .initialize(Some(provider), &targets(with_token))
        .await
        .unwrap();
    session
}

fn wallet() -> ScriptedWallet {
    ScriptedWallet::new(Arc::new(ScriptedContract::new(vec![])))
        .with_balance(U256::from(25u128 * 10u128.pow(17)))
}

#[tokio::test]
async fn overview_reports_account_and_ether_balance() {
    let session = session_with(wallet(), false).await;

    let overview = WalletService::overview(&session).await.unwrap();

    assert_eq!(overview.account, support::USER);
    assert_eq!(overview.chain_id, Some(support::CHAIN_ID));
    assert_eq!(overview.wallet, "scripted");
    assert_eq!(overview.balance, dec!(2.5));
    assert!(overview.token.is_none());
}

#[tokio::test]
async fn overview_includes_token_balance() {
    let wallet = wallet().with_token(ScriptedToken {
        symbol: "BET".into(),
        amount: dec!(42),
        fail: false,
    });
    let session = session_with(wallet, true).await;

    let overview = WalletService::overview(&session).await.unwrap();

    let token = overview.token.unwrap();
    assert_eq!(token.symbol, "BET");
    assert_eq!(token.amount, dec!(42));
    assert_eq!(token.address, support::TOKEN);
}

#[tokio::test]
async fn failing_token_read_is_omitted() {
    let wallet = wallet().with_token(ScriptedToken {
        symbol: "BET".into(),
        amount: dec!(1),
        fail: true,
    });
    let session = session_with(wallet, true).await;

    let overview = WalletService::overview(&session).await.unwrap();

    assert!(overview.token.is_none());
    assert_eq!(overview.balance, dec!(2.5));
}

#[tokio::test]
async fn overview_requires_a_connected_account() {
    let session = Session::new();

    let result = WalletService::overview(&session).await;

    assert!(matches!(result, Err(Error::Wallet(WalletError::NoAccounts))));
}
