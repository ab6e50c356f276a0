use crate::prelude::*;

use std::sync::Arc;

/// Everything an operation needs to talk to the chain on behalf of the
/// connected account. Passed explicitly into every operation.
#[derive(Clone, Getters, derive_more::Debug)]
#[debug("WalletSession({} on {})", account, config.chain_id())]
pub struct WalletSession {
    #[getset(get = "pub")]
    config: Arc<ChainConfig>,

    #[getset(get = "pub")]
    account: Address,

    #[getset(get = "pub")]
    wallet: Arc<dyn Wallet>,

    #[getset(get = "pub")]
    querier: Arc<dyn ChainQuerier>,
}

impl WalletSession {
    pub(crate) fn new(
        config: Arc<ChainConfig>,
        account: Address,
        wallet: Arc<dyn Wallet>,
        querier: Arc<dyn ChainQuerier>,
    ) -> Self {
        Self {
            config,
            account,
            wallet,
            querier,
        }
    }
}
