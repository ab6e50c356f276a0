use crate::prelude::*;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum FeeArg {
    /// Let the wallet price the transaction.
    #[default]
    Auto,
    /// Pay simulated gas times the configured gas price.
    Fixed,
}

impl From<FeeArg> for FeeStrategy {
    fn from(value: FeeArg) -> Self {
        match value {
            FeeArg::Auto => FeeStrategy::Auto,
            FeeArg::Fixed => FeeStrategy::Fixed,
        }
    }
}

#[derive(Parser, Debug)]
pub struct AirdropArgs {
    /// Recipients separated by commas or newlines.
    #[arg(long)]
    recipients: Option<String>,

    /// Spreadsheet (xlsx, ods, xls) or CSV file, every non blank cell of the
    /// first sheet is a recipient.
    #[arg(long)]
    recipients_file: Option<PathBuf>,

    /// Treat recipients as registry names and resolve them to addresses.
    #[arg(long, default_value_t = false)]
    names: bool,

    /// Amount per recipient, in whole tokens.
    #[arg(long)]
    amount: String,

    /// Native denomination to send, defaults to the fee currency.
    #[arg(long, conflicts_with = "cw20")]
    denom: Option<String>,

    /// Address of a CW20 contract to send instead of a native token.
    #[arg(long)]
    cw20: Option<String>,

    /// Decimals of the token, looked up from the chain config or the CW20
    /// contract when omitted.
    #[arg(long)]
    decimals: Option<u8>,

    #[arg(long, value_enum, default_value_t = FeeArg::Auto)]
    fee: FeeArg,

    /// Maximum number of names resolved concurrently.
    #[arg(long, default_value_t = DEFAULT_RESOLVE_CONCURRENCY)]
    concurrency: usize,

    #[arg(long, default_value_t = String::new())]
    memo: String,
}

impl AirdropArgs {
    fn raw_recipients(&self) -> Result<Vec<String>, CliError> {
        let mut raw = Vec::new();
        if let Some(list) = &self.recipients {
            raw.extend(split_recipient_list(list));
        }
        if let Some(path) = &self.recipients_file {
            raw.extend(read_spreadsheet_file(path).map_err(Error::from)?);
        }
        if self.recipients.is_none() && self.recipients_file.is_none() {
            return Err(InvalidCliArgs::RecipientsMissing.into());
        }
        Ok(raw)
    }

    /// Native tokens listed in the chain config have known decimals, anything
    /// else is looked up on chain unless `--decimals` is given.
    fn token_and_decimals(&self, config: &ChainConfig) -> Result<(Token, Option<u8>), CliError> {
        if let Some(contract) = &self.cw20 {
            let token = Token::cw20(config.parse_address(contract)?);
            return Ok((token, self.decimals));
        }
        let denom = match &self.denom {
            Some(denom) => denom.clone(),
            None => config.fee_denom().map_err(Error::from)?.to_owned(),
        };
        let decimals = self.decimals.or_else(|| config.decimals_of(&denom));
        Ok((Token::native(denom)?, decimals))
    }

    pub fn parameters(&self, config: &ChainConfig) -> Result<AirdropParameters, CliError> {
        let raw_recipients = self.raw_recipients()?;
        let (token, decimals) = self.token_and_decimals(config)?;
        Ok(AirdropParameters::builder()
            .raw_recipients(raw_recipients)
            .resolve_names(self.names)
            .amount(self.amount.clone())
            .token(token)
            .maybe_decimals(decimals)
            .fee_strategy(self.fee.into())
            .resolve_concurrency(self.concurrency.max(1))
            .memo(self.memo.clone())
            .build())
    }
}
