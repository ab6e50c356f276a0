use crate::prelude::*;

use std::sync::Arc;

impl WalletSession {
    /// Suggests the chain to the wallet, enables it and picks the first
    /// account. Nothing is changed on the chain.
    pub async fn connect(
        wallet: Arc<dyn Wallet>,
        querier: Arc<dyn ChainQuerier>,
        config: ChainConfig,
    ) -> Result<Self> {
        config.validate()?;
        if !wallet.is_available().await {
            return Err(WalletSessionError::MissingWallet.into());
        }

        wallet.suggest_chain(&config).await.map_err(|e| {
            WalletSessionError::SuggestChainRejected {
                underlying: e.to_string(),
            }
        })?;
        debug!("Wallet accepted chain {}", config.chain_id());

        wallet
            .enable(config.chain_id())
            .await
            .map_err(|e| WalletSessionError::EnableRejected {
                chain_id: config.chain_id().clone(),
                underlying: e.to_string(),
            })?;

        let accounts = wallet.accounts(config.chain_id()).await?;
        let Some(first) = accounts.into_iter().next() else {
            return Err(WalletSessionError::NoAccounts.into());
        };
        let account = config.parse_address(&first.address)?;
        info!("🔗 Connected {account} on {}", config.chain_id());

        Ok(Self::new(Arc::new(config), account, wallet, querier))
    }
}
