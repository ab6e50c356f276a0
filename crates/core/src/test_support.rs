//! In memory doubles of the chain boundary used by the unit tests.

use crate::prelude::*;

use serde_json::{json, Value};
use std::{
    collections::HashMap,
    sync::{
        atomic::{AtomicBool, AtomicU64, AtomicUsize, Ordering},
        Arc, Mutex,
    },
};
use tokio::sync::Notify;

pub const CONSTANTINE_JSON: &str = include_str!("../../../configs/constantine.json");

pub const SENDER: &str = "archway1sender0000000000000000000000000000";
pub const ALICE: &str = "archway1a7ace0000000000000000000000000000";
pub const BOB: &str = "archway1z0p000000000000000000000000000000";
pub const TOKEN_CONTRACT: &str = "archway1t0ken0000000000000000000000000000";

pub fn constantine() -> ChainConfig {
    ChainConfig::from_json(CONSTANTINE_JSON).expect("shipped config is valid")
}

/// A config that skipped validation, as a caller could deserialize or build.
pub fn config_without_fee_currency() -> ChainConfig {
    let mut value: Value = serde_json::from_str(CONSTANTINE_JSON).expect("shipped config is JSON");
    value["feeCurrencies"] = json!([]);
    serde_json::from_value(value).expect("layout is still well formed")
}

pub fn sender() -> Address {
    Address::from_trusted(SENDER)
}

pub fn session_with(wallet: Arc<MockWallet>, querier: Arc<MockQuerier>) -> WalletSession {
    WalletSession::new(Arc::new(constantine()), sender(), wallet, querier)
}

#[derive(Debug, Clone)]
pub struct RecordedBroadcast {
    pub messages: Vec<WireMessage>,
    pub fee: Fee,
    pub memo: String,
}

#[derive(Debug)]
pub struct MockWallet {
    available: AtomicBool,
    reject_suggestion: AtomicBool,
    accounts: Mutex<Vec<WalletAccount>>,
    suggested: Mutex<Vec<String>>,
    enabled: Mutex<Vec<String>>,
    gas_used: AtomicU64,
    simulations: AtomicUsize,
    failure: Mutex<Option<(u32, String)>>,
    events: Mutex<Vec<TxEvent>>,
    broadcasts: Mutex<Vec<RecordedBroadcast>>,
    gated: AtomicBool,
    entered: Notify,
    release: Notify,
}

impl MockWallet {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            available: AtomicBool::new(true),
            reject_suggestion: AtomicBool::new(false),
            accounts: Mutex::new(vec![WalletAccount {
                address: SENDER.to_owned(),
            }]),
            suggested: Mutex::default(),
            enabled: Mutex::default(),
            gas_used: AtomicU64::new(100_000),
            simulations: AtomicUsize::new(0),
            failure: Mutex::default(),
            events: Mutex::default(),
            broadcasts: Mutex::default(),
            gated: AtomicBool::new(false),
            entered: Notify::new(),
            release: Notify::new(),
        })
    }

    pub fn unavailable(self: Arc<Self>) -> Arc<Self> {
        self.available.store(false, Ordering::SeqCst);
        self
    }

    pub fn rejecting_suggestion(self: Arc<Self>) -> Arc<Self> {
        self.reject_suggestion.store(true, Ordering::SeqCst);
        self
    }

    pub fn with_accounts(self: Arc<Self>, accounts: Vec<WalletAccount>) -> Arc<Self> {
        *self.accounts.lock().unwrap() = accounts;
        self
    }

    pub fn with_gas_used(self: Arc<Self>, gas: u64) -> Arc<Self> {
        self.gas_used.store(gas, Ordering::SeqCst);
        self
    }

    pub fn with_broadcast_failure(self: Arc<Self>, code: u32, log: &str) -> Arc<Self> {
        *self.failure.lock().unwrap() = Some((code, log.to_owned()));
        self
    }

    pub fn with_events(self: Arc<Self>, events: Vec<TxEvent>) -> Arc<Self> {
        *self.events.lock().unwrap() = events;
        self
    }

    /// Makes `sign_and_broadcast` block until [`Self::release_broadcast`].
    pub fn gated(self: Arc<Self>) -> Arc<Self> {
        self.gated.store(true, Ordering::SeqCst);
        self
    }

    pub async fn wait_until_broadcasting(&self) {
        self.entered.notified().await;
    }

    pub fn release_broadcast(&self) {
        self.release.notify_one();
    }

    pub fn suggested_chains(&self) -> Vec<String> {
        self.suggested.lock().unwrap().clone()
    }

    pub fn enabled_chains(&self) -> Vec<String> {
        self.enabled.lock().unwrap().clone()
    }

    pub fn simulation_count(&self) -> usize {
        self.simulations.load(Ordering::SeqCst)
    }

    pub fn broadcasts(&self) -> Vec<RecordedBroadcast> {
        self.broadcasts.lock().unwrap().clone()
    }
}

#[async_trait]
impl Wallet for MockWallet {
    async fn is_available(&self) -> bool {
        self.available.load(Ordering::SeqCst)
    }

    async fn suggest_chain(&self, chain: &ChainConfig) -> Result<(), WalletError> {
        if self.reject_suggestion.load(Ordering::SeqCst) {
            return Err(WalletError::CallFailed {
                method: "suggest_chain",
                underlying: "user rejected".to_owned(),
            });
        }
        self.suggested.lock().unwrap().push(chain.chain_id().clone());
        Ok(())
    }

    async fn enable(&self, chain_id: &str) -> Result<(), WalletError> {
        self.enabled.lock().unwrap().push(chain_id.to_owned());
        Ok(())
    }

    async fn accounts(&self, _chain_id: &str) -> Result<Vec<WalletAccount>, WalletError> {
        Ok(self.accounts.lock().unwrap().clone())
    }

    async fn simulate(
        &self,
        _signer: &Address,
        _messages: &[WireMessage],
        _memo: &str,
    ) -> Result<u64, WalletError> {
        self.simulations.fetch_add(1, Ordering::SeqCst);
        Ok(self.gas_used.load(Ordering::SeqCst))
    }

    async fn sign_and_broadcast(
        &self,
        _signer: &Address,
        messages: &[WireMessage],
        fee: &Fee,
        memo: &str,
    ) -> Result<BroadcastResponse, WalletError> {
        self.broadcasts.lock().unwrap().push(RecordedBroadcast {
            messages: messages.to_vec(),
            fee: fee.clone(),
            memo: memo.to_owned(),
        });
        if self.gated.load(Ordering::SeqCst) {
            self.entered.notify_one();
            self.release.notified().await;
        }
        let failure = self.failure.lock().unwrap().clone();
        let (code, raw_log) = failure.unwrap_or((0, "[]".to_owned()));
        Ok(BroadcastResponse {
            code,
            raw_log,
            transaction_hash: "C0FFEE".to_owned(),
            events: self.events.lock().unwrap().clone(),
        })
    }
}

#[derive(Debug, Default)]
pub struct MockQuerier {
    names: Mutex<HashMap<String, String>>,
    native_balances: Mutex<HashMap<(String, String), u128>>,
    cw20_balances: Mutex<HashMap<(String, String), u128>>,
    cw20_decimals: Mutex<HashMap<String, u8>>,
    base_cost: Mutex<Option<u128>>,
    nfts: Mutex<HashMap<String, Value>>,
    smart_queries: AtomicUsize,
    balance_queries: AtomicUsize,
}

impl MockQuerier {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn with_name(self: Arc<Self>, name: &str, address: &str) -> Arc<Self> {
        self.names
            .lock()
            .unwrap()
            .insert(name.to_owned(), address.to_owned());
        self
    }

    pub fn with_native_balance(self: Arc<Self>, owner: &str, denom: &str, amount: u128) -> Arc<Self> {
        self.native_balances
            .lock()
            .unwrap()
            .insert((owner.to_owned(), denom.to_owned()), amount);
        self
    }

    pub fn with_cw20_balance(self: Arc<Self>, contract: &str, owner: &str, amount: u128) -> Arc<Self> {
        self.cw20_balances
            .lock()
            .unwrap()
            .insert((contract.to_owned(), owner.to_owned()), amount);
        self
    }

    pub fn with_cw20_decimals(self: Arc<Self>, contract: &str, decimals: u8) -> Arc<Self> {
        self.cw20_decimals
            .lock()
            .unwrap()
            .insert(contract.to_owned(), decimals);
        self
    }

    pub fn with_base_cost(self: Arc<Self>, cost: u128) -> Arc<Self> {
        *self.base_cost.lock().unwrap() = Some(cost);
        self
    }

    pub fn with_nft(self: Arc<Self>, token_id: &str, extension: Value) -> Arc<Self> {
        self.nfts
            .lock()
            .unwrap()
            .insert(token_id.to_owned(), extension);
        self
    }

    pub fn smart_query_count(&self) -> usize {
        self.smart_queries.load(Ordering::SeqCst)
    }

    pub fn balance_query_count(&self) -> usize {
        self.balance_queries.load(Ordering::SeqCst)
    }

    fn answer(&self, contract: &str, query: &Value) -> Option<Value> {
        let (entrypoint, args) = query.as_object()?.iter().next()?;
        let arg = |key: &str| args[key].as_str().unwrap_or_default().to_owned();
        match entrypoint.as_str() {
            "resolve_record" => {
                let address = self.names.lock().unwrap().get(&arg("name")).cloned();
                Some(json!({ "address": address, "expiration": 0 }))
            }
            "resolve_address" => {
                let address = arg("address");
                let names: Vec<_> = self
                    .names
                    .lock()
                    .unwrap()
                    .iter()
                    .filter(|(_, owner)| **owner == address)
                    .map(|(name, _)| name.clone())
                    .collect();
                Some(json!({ "names": names }))
            }
            "config" => {
                let cost = (*self.base_cost.lock().unwrap())?;
                Some(json!({ "base_cost": cost.to_string() }))
            }
            "balance" => {
                let key = (contract.to_owned(), arg("address"));
                let balance = self.cw20_balances.lock().unwrap().get(&key).copied()?;
                Some(json!({ "balance": balance.to_string() }))
            }
            "token_info" => {
                let decimals = self.cw20_decimals.lock().unwrap().get(contract).copied()?;
                Some(json!({
                    "name": "Test",
                    "symbol": "TST",
                    "decimals": decimals,
                    "total_supply": "0"
                }))
            }
            "nft_info" => {
                let extension = self.nfts.lock().unwrap().get(&arg("token_id")).cloned()?;
                Some(json!({ "token_uri": null, "extension": extension }))
            }
            _ => None,
        }
    }
}

#[async_trait]
impl ChainQuerier for MockQuerier {
    async fn balance(&self, address: &Address, denom: &str) -> Result<BaseAmount, QueryError> {
        self.balance_queries.fetch_add(1, Ordering::SeqCst);
        let key = (address.to_string(), denom.to_owned());
        let amount = self
            .native_balances
            .lock()
            .unwrap()
            .get(&key)
            .copied()
            .unwrap_or_default();
        Ok(BaseAmount::new(amount))
    }

    async fn query_contract_smart(
        &self,
        contract: &str,
        query: &Value,
    ) -> Result<Value, QueryError> {
        self.smart_queries.fetch_add(1, Ordering::SeqCst);
        self.answer(contract, query)
            .ok_or_else(|| QueryError::ContractError {
                contract: contract.to_owned(),
                underlying: format!("unsupported query {query}"),
            })
    }
}
