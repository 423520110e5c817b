//! Market and position aggregation tests against a scripted contract.

mod support;

use std::time::Duration;

use betboard::application::{catalog, portfolio, position};
use betboard::domain::{BetId, DomainError, Side, PLACEHOLDER_IMAGE};
use betboard::error::{ContractError, Error};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use support::contract::{record, user_bet, ScriptedContract};

fn three_markets() -> ScriptedContract {
    ScriptedContract::new(vec![
        record("first", 3000, 7000),
        record("second", 0, 0),
        record("third", 100, 100),
    ])
}

#[tokio::test]
async fn every_id_is_read_exactly_once() {
    let contract = three_markets();

    let markets = catalog::fetch_markets(&contract, 1).await.unwrap();

    let ids: Vec<u64> = markets.keys().map(|id| id.get()).collect();
    assert_eq!(ids, vec![1, 2, 3]);
    assert_eq!(contract.bet_reads(), vec![1, 2, 3]);
    assert_eq!(contract.count_reads(), 1);
}

#[tokio::test]
async fn markets_are_normalized() {
    let contract = three_markets();

    let markets = catalog::fetch_markets(&contract, 1).await.unwrap();
    let first = &markets[&BetId::new(1).unwrap()];

    assert_eq!(first.description, "first");
    assert_eq!(first.total_a, dec!(30));
    assert_eq!(first.total_b, dec!(70));
    assert_eq!(first.ratio_a, dec!(0.5));
    assert_eq!(first.percentage(Side::A), Some(dec!(30)));

    let second = &markets[&BetId::new(2).unwrap()];
    assert_eq!(second.percentage(Side::A), None);
}

#[tokio::test]
async fn empty_contract_yields_no_markets() {
    let contract = ScriptedContract::new(vec![]);

    let markets = catalog::fetch_markets(&contract, 1).await.unwrap();

    assert!(markets.is_empty());
    assert!(contract.bet_reads().is_empty());
}

#[tokio::test]
async fn empty_image_gets_placeholder() {
    let mut bare = record("bare", 1, 1);
    bare.image_hash = String::new();
    let contract = ScriptedContract::new(vec![bare]);

    let markets = catalog::fetch_markets(&contract, 1).await.unwrap();
    let market = &markets[&BetId::new(1).unwrap()];

    assert_eq!(market.image, PLACEHOLDER_IMAGE);
    assert!(market.has_placeholder_image());
}

#[tokio::test]
async fn one_failed_read_fails_the_whole_list() {
    let contract = three_markets().failing_on(2);

    let result = catalog::fetch_markets(&contract, 1).await;

    assert!(matches!(
        result,
        Err(Error::Contract(ContractError::Call { method: "bets", .. }))
    ));
    // Sequential reads stop at the failure.
    assert_eq!(contract.bet_reads(), vec![1, 2]);
}

#[tokio::test]
async fn concurrent_reads_keep_id_order() {
    let contract = three_markets()
        .delaying(1, Duration::from_millis(60))
        .delaying(2, Duration::from_millis(20));

    let markets = catalog::fetch_markets(&contract, 3).await.unwrap();

    let descriptions: Vec<&str> = markets.values().map(|m| m.description.as_str()).collect();
    assert_eq!(descriptions, vec!["first", "second", "third"]);
    assert_eq!(contract.bet_reads().len(), 3);
}

#[tokio::test]
async fn lookup_rejects_unknown_ids() {
    let contract = three_markets();

    let result = catalog::lookup_market(&contract, BetId::new(4).unwrap()).await;

    assert!(matches!(
        result,
        Err(Error::Domain(DomainError::UnknownBet { count: 3, .. }))
    ));
    assert!(contract.bet_reads().is_empty());
}

#[tokio::test]
async fn lookup_reads_a_single_market() {
    let contract = three_markets();

    let market = catalog::lookup_market(&contract, BetId::new(3).unwrap())
        .await
        .unwrap();

    assert_eq!(market.description, "third");
    assert_eq!(contract.bet_reads(), vec![3]);
}

#[tokio::test]
async fn user_bets_are_normalized() {
    let contract = ScriptedContract::new(vec![]).with_user_bets(
        support::USER,
        Side::A,
        vec![user_bet(2, 500, 40)],
    );

    let positions = position::fetch_positions(&contract, support::USER)
        .await
        .unwrap();

    assert_eq!(positions.a.len(), 1);
    let bet = &positions.a[0];
    assert_eq!(bet.amount, dec!(5));
    assert_eq!(bet.average_ratio, dec!(0.4));
    assert_eq!(bet.bet_id.get(), 2);
    assert!(positions.b.is_empty());
}

#[tokio::test]
async fn positions_are_read_with_the_user_as_sender() {
    let contract = ScriptedContract::new(vec![]);

    position::fetch_positions(&contract, support::USER)
        .await
        .unwrap();

    assert_eq!(
        contract.user_bet_reads(),
        vec![(Side::A, support::USER), (Side::B, support::USER)]
    );
}

#[tokio::test]
async fn portfolio_joins_positions_with_their_markets() {
    let wei = 10u128.pow(18);
    let contract = three_markets()
        .with_user_bets(support::USER, Side::A, vec![user_bet(1, 100 * wei, 40)])
        .with_user_bets(support::USER, Side::B, vec![user_bet(3, 50 * wei, 70)]);

    let portfolio = portfolio::load(&contract, support::USER).await.unwrap();

    assert_eq!(portfolio.account, support::USER);
    assert_eq!(portfolio.entries.len(), 2);

    let yes = &portfolio.entries[0];
    assert_eq!(yes.bet_id.get(), 1);
    assert_eq!(yes.chosen, "Yes");
    assert_eq!(yes.amount_ether, dec!(1));
    assert_eq!(yes.current_price, Some(dec!(30)));
    assert_eq!(yes.average_price, dec!(40));

    let no = &portfolio.entries[1];
    assert_eq!(no.bet_id.get(), 3);
    assert_eq!(no.chosen, "No");
    assert_eq!(no.amount_ether, dec!(0.5));
    assert_eq!(no.current_price, Some(dec!(50)));

    assert_eq!(portfolio.total_ether(), dec!(1.5));
    // Only referenced markets are read.
    assert_eq!(contract.bet_reads(), vec![1, 3]);
}

#[tokio::test]
async fn empty_portfolio_reads_no_markets() {
    let contract = three_markets();

    let portfolio = portfolio::load(&contract, support::USER).await.unwrap();

    assert!(portfolio.entries.is_empty());
    assert_eq!(portfolio.total_ether(), Decimal::ZERO);
    assert!(contract.bet_reads().is_empty());
}
