use crate::prelude::*;

use serde::{de::DeserializeOwned, Serialize};

/// Read only access to chain state.
#[async_trait]
pub trait ChainQuerier: Send + Sync {
    async fn balance(&self, address: &Address, denom: &str) -> Result<BaseAmount, QueryError>;

    async fn query_contract_smart(
        &self,
        contract: &str,
        query: &serde_json::Value,
    ) -> Result<serde_json::Value, QueryError>;
}

/// Typed wrapper around [`ChainQuerier::query_contract_smart`].
pub async fn query_smart<Q, R>(
    querier: &dyn ChainQuerier,
    contract: &str,
    query: &Q,
) -> Result<R, QueryError>
where
    Q: Serialize + ?Sized,
    R: DeserializeOwned,
{
    let query = serde_json::to_value(query).map_err(|e| QueryError::DecodeFailed {
        underlying: e.to_string(),
    })?;
    debug!("Querying contract {contract} with {query}");
    let response = querier.query_contract_smart(contract, &query).await?;
    serde_json::from_value(response).map_err(|e| QueryError::DecodeFailed {
        underlying: e.to_string(),
    })
}
