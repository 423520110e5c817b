//! Scripted wallet provider.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use alloy_primitives::{Address, U256};
use async_trait::async_trait;
use rust_decimal::Decimal;

use betboard::error::{ContractError, Result, WalletError};
use betboard::port::outbound::betting::BettingContract;
use betboard::port::outbound::token::{TokenBalance, TokenContract};
use betboard::port::outbound::wallet::WalletProvider;

use super::contract::ScriptedContract;

/// Token contract with a fixed balance.
pub struct ScriptedToken {
    pub symbol: String,
    pub amount: Decimal,
    pub fail: bool,
}

#[async_trait]
impl TokenContract for ScriptedToken {
    fn address(&self) -> Address {
        super::TOKEN
    }

    async fn balance_of(&self, _owner: Address) -> Result<TokenBalance> {
        if self.fail {
            return Err(ContractError::Call {
                method: "balanceOf",
                reason: "execution reverted".into(),
            }
            .into());
        }
        Ok(TokenBalance {
            symbol: self.symbol.clone(),
            amount: self.amount,
        })
    }
}

/// Wallet provider answering from fixed data.
pub struct ScriptedWallet {
    accounts: Vec<Address>,
    reject: bool,
    chain_id: u64,
    balance: U256,
    contract: Arc<ScriptedContract>,
    token: Option<Arc<ScriptedToken>>,
    requests: AtomicUsize,
    bound: AtomicUsize,
}

impl ScriptedWallet {
    /// Wallet exposing [`super::USER`] on [`super::CHAIN_ID`].
    pub fn new(contract: Arc<ScriptedContract>) -> Self {
        Self {
            accounts: vec![super::USER],
            reject: false,
            chain_id: super::CHAIN_ID,
            balance: U256::ZERO,
            contract,
            token: None,
            requests: AtomicUsize::new(0),
            bound: AtomicUsize::new(0),
        }
    }

    /// Reject the access request like a user dismissing the prompt.
    pub fn rejecting(mut self) -> Self {
        self.reject = true;
        self
    }

    pub fn with_accounts(mut self, accounts: Vec<Address>) -> Self {
        self.accounts = accounts;
        self
    }

    pub fn on_chain(mut self, chain_id: u64) -> Self {
        self.chain_id = chain_id;
        self
    }

    pub fn with_balance(mut self, wei: U256) -> Self {
        self.balance = wei;
        self
    }

    pub fn with_token(mut self, token: ScriptedToken) -> Self {
        self.token = Some(Arc::new(token));
        self
    }

    /// Number of `request_accounts` calls.
    pub fn requests(&self) -> usize {
        self.requests.load(Ordering::SeqCst)
    }

    /// Number of contracts bound.
    pub fn bound(&self) -> usize {
        self.bound.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl WalletProvider for ScriptedWallet {
    async fn request_accounts(&self) -> Result<()> {
        self.requests.fetch_add(1, Ordering::SeqCst);
        if self.reject {
            return Err(WalletError::AccessDenied("User rejected the request.".into()).into());
        }
        Ok(())
    }

    async fn accounts(&self) -> Result<Vec<Address>> {
        Ok(self.accounts.clone())
    }

    async fn chain_id(&self) -> Result<u64> {
        Ok(self.chain_id)
    }

    async fn balance(&self, _account: Address) -> Result<U256> {
        Ok(self.balance)
    }

    fn bind_betting(&self, _address: Address) -> Result<Arc<dyn BettingContract>> {
        self.bound.fetch_add(1, Ordering::SeqCst);
        let contract: Arc<dyn BettingContract> = self.contract.clone();
        Ok(contract)
    }

    fn bind_token(&self, _address: Address) -> Result<Arc<dyn TokenContract>> {
        self.bound.fetch_add(1, Ordering::SeqCst);
        match &self.token {
            Some(token) => {
                let token: Arc<dyn TokenContract> = token.clone();
                Ok(token)
            }
            None => Err(ContractError::NotBound("token").into()),
        }
    }

    fn describe(&self) -> String {
        "scripted".to_string()
    }
}
