use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON Error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Config Error: {0}")]
    Config(#[from] toml_edit::de::Error),
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
    #[error("Invalid range: {0}")]
    InvalidRange(String),
    #[error("Context cancelled")]
    Cancelled,
    #[error("Context deadline exceeded")]
    DeadlineExceeded,
    #[error("Head block not found")]
    HeadBlockNotFound,
    #[error("Storage Error: {0}")]
    Storage(String),
    #[error("Lookup Error: {0}")]
    Lookup(String),
    #[error("Unable to get balance for request {index} (account {account}): {source}")]
    BalanceLookup {
        index: usize,
        account: String,
        #[source]
        source: Box<Error>,
    },
    #[error("Invalid balance: {0}")]
    InvalidBalance(String),
    #[error("Currency must be specified for account {0}")]
    MissingCurrency(String),
    #[error("Response has {got} events, more than the requested limit of {limit}")]
    LimitExceeded { got: usize, limit: i64 },
}

impl Error {
    /// Returns true if the error, or the error that caused it, comes from a
    /// cancelled or expired [`Context`](crate::Context).
    pub fn is_cancellation(&self) -> bool {
        match self {
            Error::Cancelled | Error::DeadlineExceeded => true,
            Error::BalanceLookup { source, .. } => source.is_cancellation(),
            _ => false,
        }
    }
}

/// A result type bound to the standard rosetta-sdk error type.
pub type Result<T> = std::result::Result<T, Error>;
