//! Recording capability provider shared by the integration tests.

use async_trait::async_trait;
use serde_json::{json, Value};
use simple_ao::provider::{CapabilityProvider, ResultsQuery};
use simple_ao::types::{Tags, WalletKey};
use simple_ao::{Error, Result};
use std::collections::HashMap;
use std::sync::Mutex;

/// One delegated call, as the provider saw it.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    CreateWallet,
    Spawn {
        wallet: Option<Value>,
        module: String,
        tags: Tags,
        scheduler: Option<String>,
        data: Option<String>,
    },
    Send {
        wallet: Option<Value>,
        process: String,
        data: String,
        tags: Tags,
    },
    DryRun {
        wallet: Option<Value>,
        process: String,
        data: String,
        tags: Tags,
    },
    Results {
        process: String,
        limit: u32,
    },
}

/// Provider answering each operation with a canned outcome.
///
/// Operations without a canned outcome answer `{"success": false}`.
/// Operations listed in `faults` fail with a provider-level error instead.
#[derive(Default)]
pub struct MockProvider {
    calls: Mutex<Vec<Call>>,
    responses: Mutex<HashMap<&'static str, Value>>,
    faults: Mutex<Vec<&'static str>>,
}

impl MockProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(self, op: &'static str, outcome: Value) -> Self {
        self.responses.lock().unwrap().insert(op, outcome);
        self
    }

    pub fn fault(self, op: &'static str) -> Self {
        self.faults.lock().unwrap().push(op);
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn answer(&self, op: &'static str, call: Call) -> Result<Value> {
        self.calls.lock().unwrap().push(call);
        if self.faults.lock().unwrap().contains(&op) {
            return Err(Error::Remote {
                status: 503,
                message: format!("{op} unavailable"),
            });
        }
        Ok(self
            .responses
            .lock()
            .unwrap()
            .get(op)
            .cloned()
            .unwrap_or_else(|| json!({"success": false})))
    }
}

#[async_trait]
impl CapabilityProvider for MockProvider {
    async fn create_wallet(&self) -> Result<Value> {
        self.answer("create_wallet", Call::CreateWallet)
    }

    async fn spawn_process(
        &self,
        wallet: Option<&WalletKey>,
        module: &str,
        tags: &Tags,
        scheduler: Option<&str>,
        data: Option<&str>,
    ) -> Result<Value> {
        self.answer(
            "spawn",
            Call::Spawn {
                wallet: wallet.map(WalletKey::to_value),
                module: module.to_string(),
                tags: tags.clone(),
                scheduler: scheduler.map(str::to_string),
                data: data.map(str::to_string),
            },
        )
    }

    async fn send_message(
        &self,
        wallet: Option<&WalletKey>,
        process_id: &str,
        data: &str,
        tags: &Tags,
    ) -> Result<Value> {
        self.answer(
            "send",
            Call::Send {
                wallet: wallet.map(WalletKey::to_value),
                process: process_id.to_string(),
                data: data.to_string(),
                tags: tags.clone(),
            },
        )
    }

    async fn dry_run(
        &self,
        wallet: Option<&WalletKey>,
        process_id: &str,
        data: &str,
        tags: &Tags,
    ) -> Result<Value> {
        self.answer(
            "dry_run",
            Call::DryRun {
                wallet: wallet.map(WalletKey::to_value),
                process: process_id.to_string(),
                data: data.to_string(),
                tags: tags.clone(),
            },
        )
    }

    async fn get_results(&self, process_id: &str, query: ResultsQuery) -> Result<Value> {
        self.answer(
            "results",
            Call::Results {
                process: process_id.to_string(),
                limit: query.limit,
            },
        )
    }
}

pub fn wallet_outcome(address: &str) -> Value {
    json!({
        "success": true,
        "wallet": {
            "address": address,
            "jwk": {"kty": "RSA", "e": "AQAB", "n": "AQAB", "d": "private"}
        }
    })
}
