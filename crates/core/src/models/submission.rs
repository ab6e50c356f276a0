use crate::prelude::*;

use serde::{Deserialize, Serialize};

/// What the wallet reports after broadcasting a transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BroadcastResponse {
    pub code: u32,

    #[serde(default, alias = "log")]
    pub raw_log: String,

    pub transaction_hash: String,

    #[serde(default)]
    pub events: Vec<TxEvent>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxEvent {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub attributes: Vec<TxEventAttribute>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxEventAttribute {
    pub key: String,
    pub value: String,
}

/// Outcome of one user triggered submission. Reported once, never retried.
#[derive(Debug, Clone, PartialEq, Eq, Getters, CopyGetters)]
pub struct SubmissionResult {
    #[getset(get_copy = "pub")]
    succeeded: bool,

    #[getset(get = "pub")]
    transaction_reference: Option<String>,

    #[getset(get = "pub")]
    message: Option<String>,
}

impl From<&BroadcastResponse> for SubmissionResult {
    fn from(response: &BroadcastResponse) -> Self {
        let transaction_reference =
            Some(response.transaction_hash.clone()).filter(|hash| !hash.is_empty());
        if response.code == 0 {
            Self {
                succeeded: true,
                transaction_reference,
                message: None,
            }
        } else {
            Self {
                succeeded: false,
                transaction_reference,
                message: Some(format!(
                    "Transaction failed with code {}: {}",
                    response.code, response.raw_log
                )),
            }
        }
    }
}

impl std::fmt::Display for SubmissionResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let status = if self.succeeded { "succeeded" } else { "failed" };
        write!(f, "Submission {status}")?;
        if let Some(hash) = &self.transaction_reference {
            write!(f, " (tx {hash})")?;
        }
        if let Some(message) = &self.message {
            write!(f, ": {message}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn failed_broadcast_keeps_raw_log() {
        let response: BroadcastResponse = serde_json::from_value(json!({
            "code": 5,
            "log": "insufficient fees",
            "transactionHash": "ABC"
        }))
        .unwrap();
        let result = SubmissionResult::from(&response);
        assert!(!result.succeeded());
        assert_eq!(result.transaction_reference().as_deref(), Some("ABC"));
        assert_eq!(
            result.message().as_deref(),
            Some("Transaction failed with code 5: insufficient fees")
        );
    }

    #[test]
    fn successful_broadcast() {
        let response: BroadcastResponse = serde_json::from_value(json!({
            "code": 0,
            "rawLog": "[]",
            "transactionHash": "DEF"
        }))
        .unwrap();
        let result = SubmissionResult::from(&response);
        assert!(result.succeeded());
        assert_eq!(result.to_string(), "Submission succeeded (tx DEF)");
    }
}
