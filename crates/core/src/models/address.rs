use crate::prelude::*;

use serde::{Deserialize, Serialize};

/// A bech32 account address such as `archway1...`.
///
/// Only the human readable part and character set are checked, the checksum
/// is left to the chain.
#[derive(
    Clone,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Debug,
    derive_more::Display,
)]
#[debug("{}", self.0)]
#[display("{}", self.0)]
#[serde(transparent)]
pub struct Address(String);

const BECH32_CHARSET: &str = "qpzry9x8gf2tvdw0s3jn54khce6mua7l";

impl Address {
    /// Accepts all lowercase or all uppercase addresses, the latter is stored
    /// lowercased. Mixed case is invalid bech32.
    pub fn parse(value: &str, prefix: &str) -> Result<Self, InvalidInput> {
        let trimmed = value.trim();
        let value = if trimmed.chars().any(|c| c.is_ascii_lowercase()) {
            trimmed.to_owned()
        } else {
            trimmed.to_ascii_lowercase()
        };
        let invalid = || InvalidInput::AddressInvalid {
            bad_value: trimmed.to_owned(),
            prefix: prefix.to_owned(),
        };
        let data = value
            .strip_prefix(prefix)
            .and_then(|rest| rest.strip_prefix('1'))
            .ok_or_else(invalid)?;
        if data.len() < 6 || !data.chars().all(|c| BECH32_CHARSET.contains(c)) {
            return Err(invalid());
        }
        Ok(Self(value))
    }

    /// Wraps an address reported by the chain or the wallet, which are trusted
    /// to be well formed.
    pub(crate) fn from_trusted(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Address {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
