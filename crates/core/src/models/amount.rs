use crate::prelude::*;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

/// An integer number of base units of some token.
///
/// Serialized as a decimal string, the way CosmWasm encodes `Uint128`.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    From,
    derive_more::Display,
    derive_more::FromStr,
)]
pub struct BaseAmount(u128);

impl BaseAmount {
    pub const ZERO: Self = Self(0);

    pub const fn new(value: u128) -> Self {
        Self(value)
    }

    pub const fn get(&self) -> u128 {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub fn checked_mul(self, factor: u128) -> Option<Self> {
        self.0.checked_mul(factor).map(Self)
    }
}

impl Serialize for BaseAmount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0.to_string())
    }
}

impl<'de> Deserialize<'de> for BaseAmount {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse::<u128>().map(Self).map_err(de::Error::custom)
    }
}

/// A denominated amount, `{ denom, amount }` on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
#[display("{amount}{denom}")]
pub struct Coin {
    pub denom: String,
    pub amount: BaseAmount,
}

impl Coin {
    pub fn new(amount: impl Into<BaseAmount>, denom: impl Into<String>) -> Self {
        Self {
            denom: denom.into(),
            amount: amount.into(),
        }
    }
}

/// Splits a decimal string into its integer and fractional digit strings.
fn split_decimal(value: &str) -> Option<(&str, &str)> {
    let (int_part, frac_part) = match value.split_once('.') {
        Some((i, f)) => (i, f),
        None => (value, ""),
    };
    if int_part.is_empty() && frac_part.is_empty() {
        return None;
    }
    let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    if !all_digits(int_part) || !all_digits(frac_part) {
        return None;
    }
    Some((int_part, frac_part))
}

fn pow10(exp: u32) -> Option<u128> {
    10u128.checked_pow(exp)
}

/// Multiplies a user supplied decimal amount by `10^decimals` using integer
/// arithmetic only.
///
/// `"1.5"` with 6 decimals becomes `1_500_000`. Inputs with more fractional
/// digits than `decimals` are rejected instead of being rounded.
pub fn scale(amount: &str, decimals: u8) -> Result<BaseAmount, InvalidInput> {
    let trimmed = amount.trim();
    let Some((int_part, frac_part)) = split_decimal(trimmed) else {
        return Err(InvalidInput::AmountNotNumeric {
            bad_value: amount.to_owned(),
        });
    };
    let frac_part = frac_part.trim_end_matches('0');
    if frac_part.len() > decimals as usize {
        return Err(InvalidInput::AmountTooPrecise {
            bad_value: amount.to_owned(),
            decimals,
        });
    }

    let overflow = || InvalidInput::AmountOverflow {
        bad_value: amount.to_owned(),
    };
    let int_value = if int_part.is_empty() {
        0
    } else {
        int_part.parse::<u128>().map_err(|_| overflow())?
    };
    let frac_value = if frac_part.is_empty() {
        0
    } else {
        frac_part.parse::<u128>().map_err(|_| overflow())?
    };
    let frac_shift = pow10(decimals as u32 - frac_part.len() as u32).ok_or_else(overflow)?;

    pow10(decimals as u32)
        .and_then(|unit| int_value.checked_mul(unit))
        .and_then(|whole| {
            frac_value
                .checked_mul(frac_shift)
                .and_then(|frac| whole.checked_add(frac))
        })
        .map(BaseAmount)
        .ok_or_else(overflow)
}

/// Inverse of [`scale`]: renders base units as a decimal string without
/// trailing fractional zeros.
pub fn unscale(amount: BaseAmount, decimals: u8) -> String {
    let digits = amount.get().to_string();
    let decimals = decimals as usize;
    if decimals == 0 {
        return digits;
    }
    let padded = format!("{digits:0>width$}", width = decimals + 1);
    let (int_part, frac_part) = padded.split_at(padded.len() - decimals);
    let frac_part = frac_part.trim_end_matches('0');
    if frac_part.is_empty() {
        int_part.to_owned()
    } else {
        format!("{int_part}.{frac_part}")
    }
}

/// Parses a positive amount, rejecting zero.
pub fn scale_positive(amount: &str, decimals: u8) -> Result<BaseAmount, InvalidInput> {
    let scaled = scale(amount, decimals)?;
    if scaled.is_zero() {
        return Err(InvalidInput::AmountMustBePositive);
    }
    Ok(scaled)
}

/// Checks that `amount` is a positive decimal number without knowing the
/// token's decimals yet. Precision is checked later by [`scale`].
pub fn check_amount(amount: &str) -> Result<(), InvalidInput> {
    let Some((int_part, frac_part)) = split_decimal(amount.trim()) else {
        return Err(InvalidInput::AmountNotNumeric {
            bad_value: amount.to_owned(),
        });
    };
    if int_part.bytes().chain(frac_part.bytes()).all(|b| b == b'0') {
        return Err(InvalidInput::AmountMustBePositive);
    }
    Ok(())
}
