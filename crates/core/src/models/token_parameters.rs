use crate::prelude::*;

pub const DEFAULT_TOKEN_DECIMALS: u8 = 18;
const MAX_DECIMALS: u8 = 18;

#[derive(Debug, Clone, Getters, CopyGetters, Builder)]
pub struct TokenParameters {
    #[getset(get = "pub")]
    #[builder(into)]
    name: String,

    #[getset(get = "pub")]
    #[builder(into)]
    symbol: String,

    #[getset(get_copy = "pub")]
    #[builder(default = DEFAULT_TOKEN_DECIMALS)]
    decimals: u8,

    /// Supply minted to the creator, in whole tokens.
    #[getset(get = "pub")]
    #[builder(into)]
    initial_supply: String,
}

fn invalid(field: &'static str, reason: impl Into<String>) -> InvalidInput {
    InvalidInput::TokenFieldInvalid {
        field,
        reason: reason.into(),
    }
}

impl TokenParameters {
    /// Applies the CW20 base contract's own instantiate checks, returning the
    /// initial supply in base units.
    pub fn validate(&self) -> Result<BaseAmount, InvalidInput> {
        let name_len = self.name.trim().chars().count();
        if !(3..=50).contains(&name_len) {
            return Err(invalid("name", "must be 3 to 50 characters"));
        }
        let symbol = self.symbol.trim();
        if !(3..=12).contains(&symbol.chars().count()) {
            return Err(invalid("symbol", "must be 3 to 12 characters"));
        }
        if !symbol.chars().all(|c| c.is_ascii_alphabetic() || c == '-') {
            return Err(invalid("symbol", "must contain only letters and `-`"));
        }
        if self.decimals > MAX_DECIMALS {
            return Err(invalid("decimals", format!("must not exceed {MAX_DECIMALS}")));
        }
        scale_positive(&self.initial_supply, self.decimals)
    }
}

#[derive(Debug, Clone, Getters, CopyGetters, Builder)]
pub struct SubdomainParameters {
    #[getset(get = "pub")]
    #[builder(into)]
    domain: String,

    #[getset(get = "pub")]
    #[builder(into)]
    subdomain: String,

    #[getset(get = "pub")]
    new_resolver: Address,

    #[getset(get = "pub")]
    new_owner: Address,

    #[getset(get_copy = "pub")]
    #[builder(default)]
    mint: bool,

    /// Expiration as a unix timestamp in seconds.
    #[getset(get_copy = "pub")]
    expiration: u64,
}
