use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Cw721QueryMsg {
    NftInfo { token_id: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NftInfoResponse {
    pub token_uri: Option<String>,
    #[serde(default)]
    pub extension: serde_json::Value,
}
