use crate::prelude::*;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RegistryQueryMsg {
    Config {},
    ResolveRecord { name: String },
    ResolveAddress { address: Address },
}

/// Registry settings, only the fields this client uses are decoded.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RegistryConfigResponse {
    pub base_cost: BaseAmount,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolveRecordResponse {
    pub address: Option<String>,
    pub expiration: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolveAddressResponse {
    pub names: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RegistryExecuteMsg {
    Register {
        name: String,
    },
    RenewRegistration {
        name: String,
    },
    UpdateResolver {
        name: String,
        new_resolver: Address,
    },
    UpdateUserDomainData {
        name: String,
        metadata_update: serde_json::Value,
    },
    RegisterSubdomain {
        domain: String,
        subdomain: String,
        new_resolver: Address,
        new_owner: Address,
        mint: bool,
        expiration: u64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn query_shapes() {
        assert_eq!(
            serde_json::to_value(RegistryQueryMsg::Config {}).unwrap(),
            json!({ "config": {} })
        );
        assert_eq!(
            serde_json::to_value(RegistryQueryMsg::ResolveRecord {
                name: "alice.arch".to_owned()
            })
            .unwrap(),
            json!({ "resolve_record": { "name": "alice.arch" } })
        );
    }

    #[test]
    fn execute_shapes() {
        let msg = RegistryExecuteMsg::UpdateResolver {
            name: "alice.arch".to_owned(),
            new_resolver: Address::from_trusted("archway1new"),
        };
        assert_eq!(
            serde_json::to_value(msg).unwrap(),
            json!({ "update_resolver": { "name": "alice.arch", "new_resolver": "archway1new" } })
        );
    }

    #[test]
    fn unresolved_record_has_no_address() {
        let response: ResolveRecordResponse =
            serde_json::from_value(json!({ "address": null, "expiration": 0 })).unwrap();
        assert_eq!(response.address, None);
    }
}
