use crate::prelude::*;
use clap::Parser;

#[derive(Parser, Debug)]
pub struct CreateTokenArgs {
    /// Token name, 3 to 50 characters.
    #[arg(long)]
    name: String,

    /// Ticker symbol, 3 to 12 letters or `-`.
    #[arg(long)]
    symbol: String,

    #[arg(long, default_value_t = DEFAULT_TOKEN_DECIMALS)]
    decimals: u8,

    /// Supply minted to the connected account, in whole tokens.
    #[arg(long)]
    initial_supply: String,
}

impl From<CreateTokenArgs> for TokenParameters {
    fn from(args: CreateTokenArgs) -> Self {
        TokenParameters::builder()
            .name(args.name)
            .symbol(args.symbol)
            .decimals(args.decimals)
            .initial_supply(args.initial_supply)
            .build()
    }
}
