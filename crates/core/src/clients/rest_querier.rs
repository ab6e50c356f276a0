use crate::prelude::*;

use base64::{engine::general_purpose::URL_SAFE, Engine as _};
use serde::{de::DeserializeOwned, Deserialize};
use serde_json::Value;

/// A [`ChainQuerier`] backed by the REST endpoint of a Cosmos SDK node.
#[derive(Debug, Clone)]
pub struct RestQuerier {
    base: Url,
    http: reqwest::Client,
}

#[derive(Deserialize)]
struct BalanceResponse {
    balance: Coin,
}

#[derive(Deserialize)]
struct SmartQueryResponse {
    data: Value,
}

/// The body of an error response, or why it could not be read.
fn error_body<E: std::fmt::Display>(body: Result<String, E>) -> String {
    body.unwrap_or_else(|e| format!("<unreadable body: {e}>"))
}

impl RestQuerier {
    pub fn new(rest: Url) -> Self {
        let mut base = rest;
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        Self {
            base,
            http: reqwest::Client::new(),
        }
    }

    fn endpoint(&self, path: &str) -> Result<Url, QueryError> {
        self.base.join(path).map_err(|e| QueryError::RequestFailed {
            url: format!("{}{path}", self.base),
            underlying: e.to_string(),
        })
    }

    pub(crate) fn balance_url(&self, address: &Address, denom: &str) -> Result<Url, QueryError> {
        let mut url = self.endpoint(&format!(
            "cosmos/bank/v1beta1/balances/{address}/by_denom"
        ))?;
        url.query_pairs_mut().append_pair("denom", denom);
        Ok(url)
    }

    pub(crate) fn smart_query_url(&self, contract: &str, query: &Value) -> Result<Url, QueryError> {
        let encoded = URL_SAFE.encode(query.to_string());
        self.endpoint(&format!(
            "cosmwasm/wasm/v1/contract/{contract}/smart/{encoded}"
        ))
    }

    /// Fetches `url`, returning the body of an error status as `Err(Some(..))`
    /// so callers can tell contract errors from transport errors.
    async fn get<R: DeserializeOwned>(&self, url: Url) -> Result<R, (QueryError, Option<String>)> {
        debug!("GET {url}");
        let request_failed = |e: reqwest::Error| {
            (
                QueryError::RequestFailed {
                    url: url.to_string(),
                    underlying: e.to_string(),
                },
                None,
            )
        };
        let response = self
            .http
            .get(url.clone())
            .send()
            .await
            .map_err(request_failed)?;
        let status = response.status();
        if !status.is_success() {
            let body = error_body(response.text().await);
            return Err((
                QueryError::RequestFailed {
                    url: url.to_string(),
                    underlying: format!("HTTP {status}: {body}"),
                },
                Some(body),
            ));
        }
        response.json::<R>().await.map_err(|e| {
            (
                QueryError::DecodeFailed {
                    underlying: e.to_string(),
                },
                None,
            )
        })
    }
}

#[async_trait]
impl ChainQuerier for RestQuerier {
    async fn balance(&self, address: &Address, denom: &str) -> Result<BaseAmount, QueryError> {
        let url = self.balance_url(address, denom)?;
        let response: BalanceResponse = self.get(url).await.map_err(|(e, _)| e)?;
        Ok(response.balance.amount)
    }

    async fn query_contract_smart(&self, contract: &str, query: &Value) -> Result<Value, QueryError> {
        let url = self.smart_query_url(contract, query)?;
        match self.get::<SmartQueryResponse>(url).await {
            Ok(response) => Ok(response.data),
            Err((_, Some(body))) => Err(QueryError::ContractError {
                contract: contract.to_owned(),
                underlying: body,
            }),
            Err((e, None)) => Err(e),
        }
    }
}
