use crate::prelude::*;

use serde::{Deserialize, Serialize};
use std::path::Path;

/// The only chain config layout this build understands.
pub const CHAIN_CONFIG_VERSION: u32 = 1;

/// Static parameters of the chain and of the contracts deployed on it.
///
/// The layout is a superset of the chain info accepted by browser wallets, so
/// the whole value can be handed to [`Wallet::suggest_chain`] as is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters, Builder)]
#[serde(rename_all = "camelCase")]
pub struct ChainConfig {
    #[getset(get = "pub")]
    version: u32,

    #[getset(get = "pub")]
    #[builder(into)]
    chain_id: String,

    #[getset(get = "pub")]
    #[builder(into)]
    chain_name: String,

    #[getset(get = "pub")]
    rpc: Url,

    #[getset(get = "pub")]
    rest: Url,

    #[getset(get = "pub")]
    bech32_config: Bech32Config,

    #[getset(get = "pub")]
    stake_currency: Currency,

    #[getset(get = "pub")]
    currencies: Vec<Currency>,

    #[getset(get = "pub")]
    fee_currencies: Vec<FeeCurrency>,

    #[getset(get = "pub")]
    #[serde(default)]
    #[builder(default)]
    features: Vec<String>,

    #[getset(get = "pub")]
    contracts: Contracts,

    /// Price per unit of gas in the fee currency, used when the fee is
    /// computed locally instead of by the wallet.
    #[getset(get = "pub")]
    #[builder(into)]
    fixed_gas_price: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, Builder)]
#[serde(rename_all = "camelCase")]
pub struct Bech32Config {
    #[getset(get = "pub")]
    #[builder(into)]
    bech32_prefix_acc_addr: String,
    #[getset(get = "pub")]
    #[builder(into)]
    bech32_prefix_acc_pub: String,
    #[getset(get = "pub")]
    #[builder(into)]
    bech32_prefix_val_addr: String,
    #[getset(get = "pub")]
    #[builder(into)]
    bech32_prefix_val_pub: String,
    #[getset(get = "pub")]
    #[builder(into)]
    bech32_prefix_cons_addr: String,
    #[getset(get = "pub")]
    #[builder(into)]
    bech32_prefix_cons_pub: String,
}

impl Bech32Config {
    /// Derives the standard set of prefixes from the account prefix.
    pub fn with_account_prefix(prefix: &str) -> Self {
        Self::builder()
            .bech32_prefix_acc_addr(prefix)
            .bech32_prefix_acc_pub(format!("{prefix}pub"))
            .bech32_prefix_val_addr(format!("{prefix}valoper"))
            .bech32_prefix_val_pub(format!("{prefix}valoperpub"))
            .bech32_prefix_cons_addr(format!("{prefix}valcons"))
            .bech32_prefix_cons_pub(format!("{prefix}valconspub"))
            .build()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Currency {
    pub coin_denom: String,
    pub coin_minimal_denom: String,
    pub coin_decimals: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeeCurrency {
    pub coin_denom: String,
    pub coin_minimal_denom: String,
    pub coin_decimals: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gas_price_step: Option<GasPriceStep>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GasPriceStep {
    pub low: f64,
    pub average: f64,
    pub high: f64,
}

/// Addresses and code ids of the contracts the dashboard talks to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, Builder)]
#[serde(rename_all = "camelCase")]
pub struct Contracts {
    #[getset(get = "pub")]
    #[builder(into)]
    name_registry: String,

    #[getset(get = "pub")]
    #[builder(into)]
    domain_nft: String,

    #[getset(get = "pub")]
    cw20_code_id: u64,
}

impl ChainConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFailed {
            path: path.display().to_string(),
            underlying: e.to_string(),
        })?;
        let config = Self::from_json(&json)?;
        info!(
            "Loaded chain config for {} ({}) from {}",
            config.chain_name,
            config.chain_id,
            path.display()
        );
        Ok(config)
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ConfigError::ParseFailed {
                underlying: e.to_string(),
            })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.version != CHAIN_CONFIG_VERSION {
            return Err(ConfigError::UnsupportedVersion {
                found: self.version,
                expected: CHAIN_CONFIG_VERSION,
            });
        }
        let required = [
            ("chainId", self.chain_id.as_str()),
            (
                "bech32Config.bech32PrefixAccAddr",
                self.bech32_config.bech32_prefix_acc_addr.as_str(),
            ),
            ("contracts.nameRegistry", self.contracts.name_registry.as_str()),
            ("contracts.domainNft", self.contracts.domain_nft.as_str()),
            ("fixedGasPrice", self.fixed_gas_price.as_str()),
        ];
        if let Some((field, _)) = required.iter().find(|(_, v)| v.trim().is_empty()) {
            return Err(ConfigError::EmptyField { field: *field });
        }
        if self.fee_currencies.is_empty() {
            return Err(ConfigError::NoFeeCurrency);
        }
        Ok(())
    }

    pub fn account_prefix(&self) -> &str {
        &self.bech32_config.bech32_prefix_acc_addr
    }

    /// The fee currency used for gas and for registry payments.
    pub fn fee_currency(&self) -> Result<&FeeCurrency, ConfigError> {
        self.fee_currencies.first().ok_or(ConfigError::NoFeeCurrency)
    }

    pub fn fee_denom(&self) -> Result<&str, ConfigError> {
        Ok(&self.fee_currency()?.coin_minimal_denom)
    }

    /// Decimals of a native denomination listed in `currencies`.
    pub fn decimals_of(&self, denom: &str) -> Option<u8> {
        self.currencies
            .iter()
            .find(|currency| currency.coin_minimal_denom == denom)
            .map(|currency| currency.coin_decimals)
    }

    pub fn parse_address(&self, value: &str) -> Result<Address, InvalidInput> {
        Address::parse(value, self.account_prefix())
    }
}
