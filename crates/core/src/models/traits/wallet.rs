use crate::prelude::*;

use serde::{Deserialize, Serialize};

/// An account exposed by the wallet for the enabled chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalletAccount {
    pub address: String,
}

/// The signing side of the chain: an external wallet that holds the keys,
/// signs and broadcasts.
#[async_trait]
pub trait Wallet: Send + Sync {
    /// Whether a wallet is reachable and supports chain suggestions.
    async fn is_available(&self) -> bool;

    async fn suggest_chain(&self, chain: &ChainConfig) -> Result<(), WalletError>;

    async fn enable(&self, chain_id: &str) -> Result<(), WalletError>;

    async fn accounts(&self, chain_id: &str) -> Result<Vec<WalletAccount>, WalletError>;

    /// Returns the gas used by `messages` when executed by `signer`.
    async fn simulate(
        &self,
        signer: &Address,
        messages: &[WireMessage],
        memo: &str,
    ) -> Result<u64, WalletError>;

    async fn sign_and_broadcast(
        &self,
        signer: &Address,
        messages: &[WireMessage],
        fee: &Fee,
        memo: &str,
    ) -> Result<BroadcastResponse, WalletError>;
}
