use crate::types::Currency;
use crate::{Error, Result};
use num_bigint::{BigInt, RandBigInt};
use num_traits::{One, Signed, Zero};

pub fn zero() -> BigInt {
    BigInt::zero()
}

pub fn one() -> BigInt {
    BigInt::one()
}

/// Returns 10^e, exactly.
pub fn big_pow10(e: u32) -> BigInt {
    BigInt::from(10u8).pow(e)
}

/// Formats an integer amount in the currency's display unit, e.g. `100` of a
/// currency with 10 decimals is `"0.0000000100 other"`.
pub fn pretty_amount(amount: &BigInt, currency: &Currency) -> String {
    let decimals = currency.decimals;
    if decimals == 0 {
        return format!("{} {}", amount, currency.symbol);
    }

    let divisor = big_pow10(decimals);
    let magnitude = amount.abs();
    let whole = &magnitude / &divisor;
    let fraction = &magnitude % &divisor;
    let sign = if amount.is_negative() { "-" } else { "" };

    format!(
        "{}{}.{:0>width$} {}",
        sign,
        whole,
        fraction.to_string(),
        currency.symbol,
        width = decimals as usize
    )
}

/// Returns a uniformly distributed integer in `[min, max)`. Not suitable for
/// anything security sensitive.
pub fn random_number(min: &BigInt, max: &BigInt) -> Result<BigInt> {
    if min >= max {
        return Err(Error::InvalidRange(format!(
            "min {} must be less than max {}",
            min, max
        )));
    }

    let mut rng = rand::thread_rng();
    Ok(rng.gen_bigint_range(min, max))
}
