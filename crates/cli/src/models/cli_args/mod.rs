mod airdrop_args;
#[allow(clippy::module_inception)]
mod cli_args;
mod create_token_args;
mod name_args;

pub use airdrop_args::*;
pub use cli_args::*;
pub use create_token_args::*;
pub use name_args::*;
