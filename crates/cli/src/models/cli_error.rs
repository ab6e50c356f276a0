use crate::prelude::*;

#[derive(Debug, thiserror::Error)]
pub enum InvalidCliArgs {
    #[error("Wallet bridge url invalid {bad_value}")]
    WalletBridgeUrlInvalid { bad_value: String },

    #[error("No recipients given, pass `--recipients` or `--recipients-file`")]
    RecipientsMissing,

    #[error("Domain metadata is not valid JSON: {underlying}")]
    MetadataNotJson { underlying: String },
}

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("Invalid CLI arguments: {0}")]
    InvalidCliArgs(#[from] InvalidCliArgs),

    #[error("{0}")]
    CoreError(#[from] Error),
}

impl From<InvalidInput> for CliError {
    fn from(value: InvalidInput) -> Self {
        Self::CoreError(value.into())
    }
}
