use crate::prelude::*;

use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct TokenCreation {
    #[getset(get = "pub")]
    result: SubmissionResult,

    /// Address of the new contract, when the ledger reported one.
    #[getset(get = "pub")]
    contract_address: Option<Address>,
}

/// The `MsgInstantiateContract` creating a CW20 token whose whole initial
/// supply belongs to `creator`.
pub fn token_instantiate_message(
    creator: &Address,
    code_id: u64,
    parameters: &TokenParameters,
) -> Result<WireMessage> {
    let supply = parameters.validate()?;
    let name = parameters.name().trim().to_owned();
    let msg = Cw20InstantiateMsg {
        name: name.clone(),
        symbol: parameters.symbol().trim().to_owned(),
        decimals: parameters.decimals(),
        initial_balances: vec![Cw20Coin {
            address: creator.clone(),
            amount: supply,
        }],
        mint: None,
        marketing: None,
    };
    Ok(WireMessage::InstantiateContract(MsgInstantiateContract {
        sender: creator.clone(),
        admin: None,
        code_id,
        label: format!("Init {name}"),
        msg: contract_payload(&msg)?,
        funds: Vec::new(),
    }))
}

#[derive(Debug, Deserialize)]
struct LogEntry {
    #[serde(default)]
    events: Vec<TxEvent>,
}

const CONTRACT_ADDRESS_KEY: &str = "_contract_address";

fn find_contract_address<'a>(events: impl IntoIterator<Item = &'a TxEvent>) -> Option<String> {
    events
        .into_iter()
        .filter(|event| event.kind == "instantiate")
        .flat_map(|event| event.attributes.iter())
        .find(|attribute| attribute.key == CONTRACT_ADDRESS_KEY)
        .map(|attribute| attribute.value.clone())
}

/// Reads the instantiated contract address from the response events, or
/// from the JSON raw log older chains return.
pub fn instantiated_contract_address(response: &BroadcastResponse) -> Option<String> {
    find_contract_address(&response.events).or_else(|| {
        let entries: Vec<LogEntry> = serde_json::from_str(&response.raw_log).ok()?;
        find_contract_address(entries.iter().flat_map(|entry| entry.events.iter()))
    })
}

/// Instantiates a new CW20 token owned by the session account.
pub async fn create_token(
    session: &WalletSession,
    parameters: &TokenParameters,
) -> Result<TokenCreation> {
    let code_id = *session.config().contracts().cw20_code_id();
    let message = token_instantiate_message(session.account(), code_id, parameters)?;
    info!(
        "🏭 Creating token {} ({}) from code {code_id}",
        parameters.name(),
        parameters.symbol()
    );

    let fee = Fee::Auto;
    let response = session
        .wallet()
        .sign_and_broadcast(session.account(), &[message], &fee, "")
        .await?;
    let result = SubmissionResult::from(&response);
    let contract_address = if result.succeeded() {
        instantiated_contract_address(&response).map(Address::from_trusted)
    } else {
        None
    };

    match (&contract_address, result.succeeded()) {
        (Some(address), _) => info!("✅ Token created at {address}"),
        (None, true) => warn!("Token created but no contract address was reported: {result}"),
        (None, false) => warn!("❌ Failed to create token: {result}"),
    }

    Ok(TokenCreation {
        result,
        contract_address,
    })
}
