//! Capability provider boundary.
//!
//! Signing, message bundling and the scheduler/gateway wire protocol all live
//! behind this trait. The crate ships [`crate::transport::HttpBridgeProvider`];
//! tests and embedders can inject their own implementation.
//!
//! Every method answers with the provider's raw JSON outcome, shaped roughly as:
//!
//! | Call | Outcome |
//! |------|---------|
//! | `create_wallet` | `{success, wallet?: {address, jwk}}` |
//! | `spawn_process` | `{success, processId?, result?: {processId?}}` |
//! | `send_message` | `{success, messageId?, result?: {messageId?}}` |
//! | `dry_run` | `{success, result?}` |
//! | `get_results` | `{success, results?: {edges}, edges?}` |
//!
//! Interpreting those shapes is left to [`crate::outcome`]. An `Err` from any
//! method is a provider-level fault and propagates to the caller untouched.

use crate::types::{Tags, WalletKey};
use crate::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Options for a results query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultsQuery {
    /// Maximum number of most recent result records to return.
    pub limit: u32,
}

impl ResultsQuery {
    pub fn with_limit(limit: u32) -> Self {
        Self { limit }
    }
}

impl Default for ResultsQuery {
    fn default() -> Self {
        Self { limit: 10 }
    }
}

/// External collaborator that performs the actual network operations.
///
/// The wallet is passed per call; `None` means the caller holds no credential.
#[async_trait]
pub trait CapabilityProvider: Send + Sync {
    /// Generate new wallet key material.
    async fn create_wallet(&self) -> Result<Value>;

    /// Spawn a process from `module` (a content hash already known to the network).
    async fn spawn_process(
        &self,
        wallet: Option<&WalletKey>,
        module: &str,
        tags: &Tags,
        scheduler: Option<&str>,
        data: Option<&str>,
    ) -> Result<Value>;

    /// Submit a message to an existing process.
    async fn send_message(
        &self,
        wallet: Option<&WalletKey>,
        process_id: &str,
        data: &str,
        tags: &Tags,
    ) -> Result<Value>;

    /// Evaluate a message against a process without mutating its state.
    async fn dry_run(
        &self,
        wallet: Option<&WalletKey>,
        process_id: &str,
        data: &str,
        tags: &Tags,
    ) -> Result<Value>;

    /// Fetch the most recent results of a process.
    async fn get_results(&self, process_id: &str, query: ResultsQuery) -> Result<Value>;
}
