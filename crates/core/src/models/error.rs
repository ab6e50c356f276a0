use crate::prelude::*;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Config error {0}")]
    Config(#[from] ConfigError),

    #[error("Wallet session error {0}")]
    WalletSession(#[from] WalletSessionError),

    #[error("Invalid input {0}")]
    InvalidInput(#[from] InvalidInput),

    #[error("Query error {0}")]
    Query(#[from] QueryError),

    #[error("Wallet error {0}")]
    Wallet(#[from] WalletError),

    #[error("Resolve error {0}")]
    Resolve(#[from] ResolveError),

    #[error("Build batch error {0}")]
    BuildBatch(#[from] BuildBatchError),

    #[error("Submit error {0}")]
    Submit(#[from] SubmitError),

    #[error("Spreadsheet error {0}")]
    Spreadsheet(#[from] SpreadsheetError),

    #[error("Failed to encode message: {underlying}")]
    Encode { underlying: String },
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read chain config at {path}: {underlying}")]
    ReadFailed { path: String, underlying: String },

    #[error("Failed to parse chain config: {underlying}")]
    ParseFailed { underlying: String },

    #[error("Unsupported chain config version {found}, expected {expected}")]
    UnsupportedVersion { found: u32, expected: u32 },

    #[error("Chain config field `{field}` must not be empty")]
    EmptyField { field: &'static str },

    #[error("Chain config has no fee currency")]
    NoFeeCurrency,
}

#[derive(Debug, thiserror::Error)]
pub enum WalletSessionError {
    #[error("No wallet available, install a compatible wallet and retry")]
    MissingWallet,

    #[error("Wallet rejected the chain suggestion: {underlying}")]
    SuggestChainRejected { underlying: String },

    #[error("Wallet refused to enable chain {chain_id}: {underlying}")]
    EnableRejected { chain_id: String, underlying: String },

    #[error("Wallet exposes no accounts for this chain")]
    NoAccounts,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidInput {
    #[error("Amount `{bad_value}` is not a decimal number")]
    AmountNotNumeric { bad_value: String },

    #[error("Amount `{bad_value}` has more than {decimals} fractional digits")]
    AmountTooPrecise { bad_value: String, decimals: u8 },

    #[error("Amount must be positive")]
    AmountMustBePositive,

    #[error("Amount `{bad_value}` overflows")]
    AmountOverflow { bad_value: String },

    #[error("Recipient entry must not be empty")]
    EmptyRecipient,

    #[error("Address `{bad_value}` is not a `{prefix}` account address")]
    AddressInvalid { bad_value: String, prefix: String },

    #[error("Token field `{field}` is invalid: {reason}")]
    TokenFieldInvalid { field: &'static str, reason: String },

    #[error("Name must not be empty")]
    EmptyName,

    #[error("Domain metadata must be a JSON object")]
    MetadataNotObject,
}

#[derive(Debug, thiserror::Error)]
pub enum QueryError {
    #[error("Request to {url} failed: {underlying}")]
    RequestFailed { url: String, underlying: String },

    #[error("Failed to decode query response: {underlying}")]
    DecodeFailed { underlying: String },

    #[error("Contract {contract} rejected query: {underlying}")]
    ContractError { contract: String, underlying: String },
}

#[derive(Debug, thiserror::Error)]
pub enum WalletError {
    #[error("Failed to connect to wallet bridge: {underlying}")]
    ConnectFailed { underlying: String },

    #[error("Wallet call `{method}` failed: {underlying}")]
    CallFailed { method: &'static str, underlying: String },
}

#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    #[error("Name `{name}` is not registered")]
    NameNotFound { name: String },

    #[error("Failed to resolve name `{name}`: {underlying}")]
    LookupFailed { name: String, underlying: String },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BuildBatchError {
    #[error("Insufficient funds, required {required} but available {available}")]
    InsufficientFunds {
        required: BaseAmount,
        available: BaseAmount,
    },

    #[error("Total amount for {recipients} recipients overflows")]
    TotalOverflow { recipients: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    #[error("Refusing to submit an empty batch")]
    EmptyBatch,

    #[error("Another submission is already in flight")]
    SubmissionInProgress,

    #[error("Fee computation overflows for gas {gas}")]
    FeeOverflow { gas: u64 },
}

#[derive(Debug, thiserror::Error)]
pub enum SpreadsheetError {
    #[error("Failed to read spreadsheet: {underlying}")]
    ReadFailed { underlying: String },
}
