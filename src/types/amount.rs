use super::{CoinIdentifier, Metadata};
use crate::{Error, Result};
use num_bigint::BigInt;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A unit of account. `decimals` is the number of decimal places between
/// the integer amounts used on the wire and the standard display unit.
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Currency {
    pub symbol: String,
    pub decimals: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

impl Currency {
    pub fn new(symbol: impl Into<String>, decimals: u32) -> Self {
        Currency {
            symbol: symbol.into(),
            decimals,
            metadata: None,
        }
    }
}

/// An integer amount of a currency, in its smallest unit. The value is kept
/// as a decimal string so it can exceed any machine integer.
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Amount {
    pub value: String,
    pub currency: Currency,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

impl Amount {
    pub fn new(value: impl Into<String>, currency: Currency) -> Self {
        Amount {
            value: value.into(),
            currency,
            metadata: None,
        }
    }

    pub fn zero(currency: Currency) -> Self {
        Amount::new("0", currency)
    }

    pub fn from_big(value: &BigInt, currency: Currency) -> Self {
        Amount::new(value.to_string(), currency)
    }

    pub fn big_value(&self) -> Result<BigInt> {
        BigInt::from_str(&self.value).map_err(|_| {
            Error::InvalidAmount(format!(
                "{} is not an integer amount of {}",
                self.value, self.currency.symbol
            ))
        })
    }
}

/// A spendable unit of value held by an account (UTXO-style).
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Coin {
    pub coin_identifier: CoinIdentifier,
    pub amount: Amount,
}

impl Coin {
    pub fn new(identifier: impl Into<String>, amount: Amount) -> Self {
        Coin {
            coin_identifier: CoinIdentifier::new(identifier),
            amount,
        }
    }
}
