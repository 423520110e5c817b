//! Fetch steps of the `markets` and `portfolio` commands.

#![cfg(feature = "evm")]

mod support;

use betboard::adapter::inbound::cli::markets::{load_markets, MARKETS_FAILED};
use betboard::adapter::inbound::cli::portfolio::{load_portfolio, PORTFOLIO_FAILED};
use betboard::domain::Side;
use betboard::error::{ContractError, Error};

use support::contract::{record, user_bet, ScriptedContract};

fn three_markets() -> ScriptedContract {
    ScriptedContract::new(vec![
        record("first", 3000, 7000),
        record("second", 0, 0),
        record("third", 100, 100),
    ])
}

fn is_failed_bet_read(source: &Error) -> bool {
    matches!(
        source,
        Error::Contract(ContractError::Call { method: "bets", .. })
    )
}

#[tokio::test]
async fn failed_market_read_becomes_the_markets_alert() {
    let contract = three_markets().failing_on(2);

    let result = load_markets(&contract, 1, None).await;

    match result {
        Err(Error::Alert { message, source }) => {
            assert_eq!(message, MARKETS_FAILED);
            assert!(is_failed_bet_read(&source));
        }
        other => panic!("expected the markets alert, got {other:?}"),
    }
}

#[tokio::test]
async fn markets_alert_shows_the_fixed_message() {
    let contract = three_markets().failing_on(3);

    let err = load_markets(&contract, 3, None).await.unwrap_err();

    assert_eq!(
        err.to_string(),
        "Failed to fetch markets. Please try again later."
    );
}

#[tokio::test]
async fn healthy_contract_loads_every_market() {
    let contract = three_markets();

    let markets = load_markets(&contract, 1, Some(5)).await.unwrap();

    assert_eq!(markets.len(), 3);
}

#[tokio::test]
async fn failed_market_read_becomes_the_portfolio_alert() {
    let contract = three_markets()
        .with_user_bets(support::USER, Side::A, vec![user_bet(1, 100, 40)])
        .with_user_bets(support::USER, Side::B, vec![user_bet(2, 100, 60)])
        .failing_on(2);

    let result = load_portfolio(&contract, support::USER, None).await;

    match result {
        Err(Error::Alert { message, source }) => {
            assert_eq!(message, PORTFOLIO_FAILED);
            assert!(is_failed_bet_read(&source));
        }
        other => panic!("expected the portfolio alert, got {other:?}"),
    }
}

#[tokio::test]
async fn portfolio_loads_when_reads_succeed() {
    let contract =
        three_markets().with_user_bets(support::USER, Side::A, vec![user_bet(1, 100, 40)]);

    let portfolio = load_portfolio(&contract, support::USER, None).await.unwrap();

    assert_eq!(portfolio.entries.len(), 1);
}
