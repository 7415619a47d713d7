//! Resolve the balances of many accounts through a pluggable lookup.

use crate::context::Context;
use crate::types::{
    AccountIdentifier, Amount, BlockIdentifier, Coin, Currency, NetworkIdentifier,
    PartialBlockIdentifier,
};
use crate::{Error, Result};
use async_trait::async_trait;
use log::{debug, warn};
use std::sync::Arc;

pub mod mock;
pub use mock::MockBalanceHelper;

/// A request for one account's balance of one currency, optionally pinned
/// to a historical block.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct AccountBalanceRequest {
    pub account: AccountIdentifier,
    /// Overrides the batch network for this request.
    pub network: Option<NetworkIdentifier>,
    /// `None` asks for the lookup's native currency, see [`MissingCurrency`].
    pub currency: Option<Currency>,
    /// `None` asks for the balance at the current tip.
    pub block: Option<PartialBlockIdentifier>,
}

impl AccountBalanceRequest {
    pub fn new(account: AccountIdentifier, currency: Option<Currency>) -> Self {
        AccountBalanceRequest {
            account,
            currency,
            ..Default::default()
        }
    }

    pub fn at_block(mut self, block: PartialBlockIdentifier) -> Self {
        self.block = Some(block);
        self
    }

    pub fn on_network(mut self, network: NetworkIdentifier) -> Self {
        self.network = Some(network);
        self
    }
}

/// The balance of one account, answering one [`AccountBalanceRequest`].
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct AccountBalance {
    pub account: AccountIdentifier,
    pub amount: Amount,
    /// Only present when the lookup tracks coins for this currency.
    pub coins: Option<Vec<Coin>>,
    pub block: BlockIdentifier,
}

/// What a [`BalanceHelper`] returns for a single lookup.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CurrencyBalance {
    pub amount: Amount,
    pub block: BlockIdentifier,
    pub coins: Option<Vec<Coin>>,
}

/// How a [`BalanceHelper`] treats requests which do not name a currency.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum MissingCurrency {
    /// The lookup is called with `currency: None` and answers with its
    /// native currency.
    #[default]
    Native,
    /// Requests without a currency fail with [`Error::MissingCurrency`]
    /// before the lookup is called.
    Reject,
}

/// Looks up the balance of a single account.
///
/// Implementations may call out to a node, read a local index, or serve from
/// a cache. They must observe `ctx` and fail with its error once it is done.
/// A helper may be shared by concurrent batches, so it must be `Send + Sync`.
#[async_trait]
pub trait BalanceHelper: Send + Sync {
    async fn currency_balance(
        &self,
        ctx: &Context,
        network: Option<&NetworkIdentifier>,
        account: &AccountIdentifier,
        currency: Option<&Currency>,
        block: Option<&PartialBlockIdentifier>,
    ) -> Result<CurrencyBalance>;

    fn missing_currency(&self) -> MissingCurrency {
        MissingCurrency::Native
    }
}

#[async_trait]
impl<T: BalanceHelper + ?Sized> BalanceHelper for Arc<T> {
    async fn currency_balance(
        &self,
        ctx: &Context,
        network: Option<&NetworkIdentifier>,
        account: &AccountIdentifier,
        currency: Option<&Currency>,
        block: Option<&PartialBlockIdentifier>,
    ) -> Result<CurrencyBalance> {
        (**self)
            .currency_balance(ctx, network, account, currency, block)
            .await
    }

    fn missing_currency(&self) -> MissingCurrency {
        (**self).missing_currency()
    }
}

/// Fetches the balance for every request, in order.
///
/// Lookups run one at a time: each completes before the next starts, so a
/// stateful or rate-limited helper sees them in request order. The first
/// failing lookup aborts the batch and no partial results are returned.
/// `network` is used for requests which do not set their own.
pub async fn get_account_balances<H: BalanceHelper + ?Sized>(
    ctx: &Context,
    network: Option<&NetworkIdentifier>,
    helper: &H,
    requests: &[AccountBalanceRequest],
) -> Result<Vec<AccountBalance>> {
    let mut balances = Vec::with_capacity(requests.len());

    for (index, request) in requests.iter().enumerate() {
        let balance = lookup(ctx, network, helper, request).await.map_err(|err| {
            warn!(
                "Balance lookup {} for account {} failed: {}",
                index, request.account, err
            );
            Error::BalanceLookup {
                index,
                account: request.account.to_string(),
                source: Box::new(err),
            }
        })?;

        balances.push(AccountBalance {
            account: request.account.clone(),
            amount: balance.amount,
            coins: balance.coins,
            block: balance.block,
        });
    }

    Ok(balances)
}

async fn lookup<H: BalanceHelper + ?Sized>(
    ctx: &Context,
    network: Option<&NetworkIdentifier>,
    helper: &H,
    request: &AccountBalanceRequest,
) -> Result<CurrencyBalance> {
    if request.account.address.is_empty() {
        return Err(Error::InvalidBalance("account address is empty".into()));
    }

    if request.currency.is_none() && helper.missing_currency() == MissingCurrency::Reject {
        return Err(Error::MissingCurrency(request.account.to_string()));
    }

    debug!(
        "Looking up balance of {} in {} at {:?}",
        request.account,
        request
            .currency
            .as_ref()
            .map_or("native currency", |c| c.symbol.as_str()),
        request.block
    );

    let balance = helper
        .currency_balance(
            ctx,
            request.network.as_ref().or(network),
            &request.account,
            request.currency.as_ref(),
            request.block.as_ref(),
        )
        .await?;

    check_balance(request, &balance)?;
    Ok(balance)
}

/// A balance must be at the requested block, and its coins must be in the
/// balance's currency.
fn check_balance(request: &AccountBalanceRequest, balance: &CurrencyBalance) -> Result<()> {
    if let Some(block) = &request.block {
        if !block.matches(&balance.block) {
            return Err(Error::InvalidBalance(format!(
                "balance is at block {} ({}), requested {:?}",
                balance.block.index, balance.block.hash, block
            )));
        }
    }

    let coins = balance.coins.iter().flatten();
    for coin in coins {
        if coin.amount.currency != balance.amount.currency {
            return Err(Error::InvalidBalance(format!(
                "coin {} is in {}, balance is in {}",
                coin.coin_identifier.identifier,
                coin.amount.currency.symbol,
                balance.amount.currency.symbol
            )));
        }
    }

    Ok(())
}
