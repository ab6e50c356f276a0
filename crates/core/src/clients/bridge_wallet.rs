use crate::prelude::*;

use jsonrpsee_client_transport::ws::WsTransportClientBuilder;
use jsonrpsee_core::{
    client::{Client, ClientT},
    rpc_params,
    traits::ToRpcParams,
};
use serde::de::DeserializeOwned;
use tokio::time::Duration;

/// Wallet requests may wait on the user approving a popup.
const WALLET_REQUEST_TIMEOUT: Duration = Duration::from_secs(300);

/// A [`Wallet`] reached over a websocket JSON-RPC bridge, typically a small
/// companion process that forwards calls to a browser or hardware wallet.
pub struct BridgeWallet {
    url: Url,
    client: Client,
}

impl std::fmt::Debug for BridgeWallet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BridgeWallet").field("url", &self.url).finish()
    }
}

impl BridgeWallet {
    pub async fn connect(url: Url) -> Result<Self, WalletError> {
        let (sender, receiver) = WsTransportClientBuilder::default()
            .build(url.clone())
            .await
            .map_err(|e| WalletError::ConnectFailed {
                underlying: e.to_debug_string(),
            })?;

        let client = Client::builder()
            .request_timeout(WALLET_REQUEST_TIMEOUT)
            .build_with_tokio(sender, receiver);

        info!("Connected to wallet bridge at {url}");
        Ok(Self { url, client })
    }

    async fn call<R, P>(&self, method: &'static str, params: P) -> Result<R, WalletError>
    where
        R: DeserializeOwned,
        P: ToRpcParams + Send,
    {
        debug!("Calling wallet bridge method {method}");
        self.client
            .request(method, params)
            .await
            .map_err(|e| WalletError::CallFailed {
                method,
                underlying: e.to_string(),
            })
    }
}

#[async_trait]
impl Wallet for BridgeWallet {
    async fn is_available(&self) -> bool {
        match self.call::<bool, _>("wallet_isAvailable", rpc_params![]).await {
            Ok(available) => available,
            Err(e) => {
                warn!("Wallet bridge did not report availability: {e}");
                false
            }
        }
    }

    async fn suggest_chain(&self, chain: &ChainConfig) -> Result<(), WalletError> {
        self.call::<serde_json::Value, _>("wallet_suggestChain", rpc_params![chain])
            .await
            .map(|_| ())
    }

    async fn enable(&self, chain_id: &str) -> Result<(), WalletError> {
        self.call::<serde_json::Value, _>("wallet_enable", rpc_params![chain_id])
            .await
            .map(|_| ())
    }

    async fn accounts(&self, chain_id: &str) -> Result<Vec<WalletAccount>, WalletError> {
        self.call("wallet_getAccounts", rpc_params![chain_id]).await
    }

    async fn simulate(
        &self,
        signer: &Address,
        messages: &[WireMessage],
        memo: &str,
    ) -> Result<u64, WalletError> {
        self.call("wallet_simulate", rpc_params![signer, messages, memo])
            .await
    }

    async fn sign_and_broadcast(
        &self,
        signer: &Address,
        messages: &[WireMessage],
        fee: &Fee,
        memo: &str,
    ) -> Result<BroadcastResponse, WalletError> {
        self.call(
            "wallet_signAndBroadcast",
            rpc_params![signer, messages, fee, memo],
        )
        .await
    }
}
