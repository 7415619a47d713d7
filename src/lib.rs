//! Rosetta data types, balance resolution and helpers for building
//! blockchain indexers.

pub mod balance;
pub mod config;
pub mod context;
mod error;
pub mod storage;
pub mod types;
pub mod utils;

pub use balance::{
    get_account_balances, AccountBalance, AccountBalanceRequest, BalanceHelper, CurrencyBalance,
    MissingCurrency,
};
pub use config::Config;
pub use context::Context;
pub use error::*;
pub use storage::{check_storage_tip, BlockStorageHelper};
