use crate::prelude::*;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub const BINARY_NAME: &str = "archpad";
pub const DEFAULT_CHAIN_CONFIG: &str = "configs/constantine.json";
pub const DEFAULT_WALLET_BRIDGE: &str = "ws://127.0.0.1:8547";

/// Token launchpad client for CosmWasm chains.
///
/// Every command first suggests the chain from `--chain-config` to the wallet
/// behind `--wallet-bridge` and connects its first account. Transactions are
/// signed by that wallet, never by this tool.
#[derive(Parser, Debug)]
#[command(name = BINARY_NAME, author, version, about, long_about = None)]
pub struct CliArgs {
    /// Path to the versioned chain config JSON.
    #[arg(long, global = true, default_value = DEFAULT_CHAIN_CONFIG)]
    chain_config: PathBuf,

    /// Websocket url of the wallet bridge.
    #[arg(long, global = true, default_value_t = DEFAULT_WALLET_BRIDGE.to_owned())]
    wallet_bridge: String,

    /// Log level, overrides `RUST_LOG`.
    #[arg(long, global = true)]
    log_level: Option<log::LevelFilter>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Connect the wallet and show the account and its fee token balance.
    Connect,

    /// Send the same amount of a token to many recipients in one transaction.
    Airdrop(AirdropArgs),

    /// Instantiate a new CW20 token owned by the connected account.
    CreateToken(CreateTokenArgs),

    /// Query and manage names in the name registry.
    #[command(subcommand)]
    Name(NameCommand),
}

impl CliArgs {
    pub fn chain_config(&self) -> &PathBuf {
        &self.chain_config
    }

    pub fn log_level(&self) -> Option<log::LevelFilter> {
        self.log_level
    }

    pub fn wallet_bridge_url(&self) -> Result<Url, InvalidCliArgs> {
        Url::parse(&self.wallet_bridge).map_err(|_| InvalidCliArgs::WalletBridgeUrlInvalid {
            bad_value: self.wallet_bridge.clone(),
        })
    }
}
