use thiserror::Error;

use crate::domain::error::DomainError;

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),
}

/// Wallet provider and account errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WalletError {
    /// No wallet provider could be reached. Terminal for the session.
    #[error("no wallet provider detected; configure network.rpc_url or set BETBOARD_RPC_URL")]
    Unavailable,

    #[error("wallet access request rejected: {0}")]
    AccessDenied(String),

    #[error("wallet returned no accounts")]
    NoAccounts,

    #[error("invalid signer: {0}")]
    Signer(String),

    #[error("wallet request {method} failed: {reason}")]
    Rpc { method: &'static str, reason: String },
}

/// Contract binding and call errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContractError {
    #[error("contract call {method} failed: {reason}")]
    Call { method: &'static str, reason: String },

    #[error("{contract} contract is deployed on chain {expected}, but the wallet is on chain {actual}")]
    WrongNetwork {
        contract: &'static str,
        expected: u64,
        actual: u64,
    },

    #[error("{0} contract is not bound; initialize the session first")]
    NotBound(&'static str),
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Wallet(#[from] WalletError),

    #[error(transparent)]
    Contract(#[from] ContractError),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("URL parse error: {0}")]
    Url(#[from] url::ParseError),

    #[error("request timed out after {0}s")]
    Timeout(u64),

    /// Failure shown to the user as a fixed message; the cause is kept for logs.
    #[error("{message}")]
    Alert {
        message: &'static str,
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    /// Wrap `self` behind a fixed user-facing message.
    #[must_use]
    pub fn alert(self, message: &'static str) -> Self {
        Self::Alert {
            message,
            source: Box::new(self),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
