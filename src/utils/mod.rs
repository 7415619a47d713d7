//! Helpers shared by indexing tools: amount math and formatting, file
//! handling and timing.

use crate::types::{AccountIdentifier, Amount, Currency};

pub mod fs;
pub use fs::*;

pub mod math;
pub use math::*;

pub mod time;
pub use time::*;

pub fn contains_string(arr: &[String], s: &str) -> bool {
    arr.iter().any(|item| item == s)
}

pub fn contains_account_identifier(arr: &[AccountIdentifier], account: &AccountIdentifier) -> bool {
    arr.contains(account)
}

/// Returns the amount of `currency` among `balances`, or a zero amount of it
/// if there is none.
pub fn extract_amount(balances: &[Amount], currency: &Currency) -> Amount {
    balances
        .iter()
        .find(|amount| amount.currency == *currency)
        .cloned()
        .unwrap_or_else(|| Amount::zero(currency.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strings() {
        let cases: [(&[&str], &str, bool); 4] = [
            (&[], "hello", false),
            (&["hello"], "hello", true),
            (&["hello"], "test", false),
            (&["hello", "test"], "test", true),
        ];

        for (arr, s, contains) in cases {
            let arr: Vec<String> = arr.iter().map(|s| s.to_string()).collect();
            assert_eq!(contains_string(&arr, s), contains, "{:?} {}", arr, s);
        }
    }

    #[test]
    fn accounts() {
        let a = AccountIdentifier::new("a");
        let a_sub = AccountIdentifier::new("a").with_sub_account("staking");
        let b = AccountIdentifier::new("b");

        assert!(!contains_account_identifier(&[], &a));
        assert!(contains_account_identifier(&[a.clone(), b.clone()], &b));
        assert!(!contains_account_identifier(&[a.clone()], &a_sub));
        assert!(contains_account_identifier(&[a_sub.clone()], &a_sub));
    }

    #[test]
    fn extract() {
        let btc = Currency::new("BTC", 8);
        let eth = Currency::new("ETH", 18);
        let balances = vec![Amount::new("10", btc.clone()), Amount::new("20", eth.clone())];

        assert_eq!(extract_amount(&balances, &eth), Amount::new("20", eth));
        assert_eq!(
            extract_amount(&balances, &Currency::new("BTC", 7)),
            Amount::zero(Currency::new("BTC", 7))
        );
        assert_eq!(extract_amount(&[], &btc), Amount::zero(btc));
    }
}
