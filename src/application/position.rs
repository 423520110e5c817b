//! User position aggregation.

use alloy_primitives::Address;
use tracing::debug;

use crate::domain::{Positions, Side, UserBet};
use crate::error::Result;
use crate::port::outbound::betting::BettingContract;

/// Read `user`'s option-A and option-B positions.
///
/// Issues one read per side with `user` as the sender. Entries keep the
/// order the contract returned them in.
///
/// # Errors
///
/// Returns contract read errors and normalization errors.
pub async fn fetch_positions(contract: &dyn BettingContract, user: Address) -> Result<Positions> {
    let a = fetch_side(contract, Side::A, user).await?;
    let b = fetch_side(contract, Side::B, user).await?;
    debug!(%user, a = a.len(), b = b.len(), "Positions loaded");
    Ok(Positions { a, b })
}

async fn fetch_side(
    contract: &dyn BettingContract,
    side: Side,
    user: Address,
) -> Result<Vec<UserBet>> {
    let raw = contract.user_bets(side, user).await?;
    let bets = raw
        .into_iter()
        .map(UserBet::from_raw)
        .collect::<std::result::Result<Vec<_>, _>>()?;
    Ok(bets)
}
