use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use super::{BalanceHelper, CurrencyBalance, MissingCurrency};
use crate::context::Context;
use crate::types::{AccountIdentifier, Currency, NetworkIdentifier, PartialBlockIdentifier};
use crate::{Error, Result};

/// The arguments of one call made to a [`MockBalanceHelper`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BalanceCall {
    pub network: Option<NetworkIdentifier>,
    pub account: AccountIdentifier,
    pub currency: Option<Currency>,
    pub block: Option<PartialBlockIdentifier>,
}

/// An in-memory [`BalanceHelper`] for tests. Answers with fixed balances per
/// account and records every call it receives.
#[derive(Debug, Default)]
pub struct MockBalanceHelper {
    balances: Vec<(AccountIdentifier, CurrencyBalance)>,
    is_error: AtomicBool,
    fail_at: Option<usize>,
    missing_currency: MissingCurrency,
    calls: Mutex<Vec<BalanceCall>>,
}

impl MockBalanceHelper {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_balance(mut self, account: AccountIdentifier, balance: CurrencyBalance) -> Self {
        self.balances.push((account, balance));
        self
    }

    /// Makes the call with the given zero-based index fail.
    pub fn fail_at(mut self, call: usize) -> Self {
        self.fail_at = Some(call);
        self
    }

    pub fn with_missing_currency(mut self, policy: MissingCurrency) -> Self {
        self.missing_currency = policy;
        self
    }

    /// While set, every call fails.
    pub fn set_error(&self, is_error: bool) {
        self.is_error.store(is_error, Ordering::SeqCst);
    }

    pub fn calls(&self) -> Vec<BalanceCall> {
        self.calls
            .lock()
            .map(|calls| calls.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl BalanceHelper for MockBalanceHelper {
    async fn currency_balance(
        &self,
        ctx: &Context,
        network: Option<&NetworkIdentifier>,
        account: &AccountIdentifier,
        currency: Option<&Currency>,
        block: Option<&PartialBlockIdentifier>,
    ) -> Result<CurrencyBalance> {
        let index = {
            let mut calls = self
                .calls
                .lock()
                .map_err(|_| Error::Lookup("Mock call log poisoned".into()))?;
            calls.push(BalanceCall {
                network: network.cloned(),
                account: account.clone(),
                currency: currency.cloned(),
                block: block.cloned(),
            });
            calls.len() - 1
        };

        ctx.err()?;

        if self.is_error.load(Ordering::SeqCst) || self.fail_at == Some(index) {
            return Err(Error::Lookup("Unable to lookup account balance".into()));
        }

        self.balances
            .iter()
            .find(|(known, _)| known == account)
            .map(|(_, balance)| balance.clone())
            .ok_or_else(|| Error::Lookup(format!("Unknown account {}", account)))
    }

    fn missing_currency(&self) -> MissingCurrency {
        self.missing_currency
    }
}
