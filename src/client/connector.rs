//! Wallet-bound connector.

use crate::outcome::{self, Outcome};
use crate::provider::{CapabilityProvider, ResultsQuery};
use crate::types::{Tags, WalletKey, WalletMaterial};
use crate::Result;
use serde_json::Value;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::debug;

/// Binds at most one wallet credential to the four remote operations and
/// delegates each of them to the capability provider.
///
/// The binding is fixed at construction. `create_wallet` does not rebind:
/// build a new connector against the persisted wallet file to use a new key.
/// Provider faults are returned as-is; outcomes are normalized through
/// [`crate::outcome`].
#[derive(Clone)]
pub struct AoConnect {
    provider: Arc<dyn CapabilityProvider>,
    wallet: Option<WalletKey>,
    wallet_path: Option<PathBuf>,
}

impl AoConnect {
    /// A connector with no credential. Only `create_wallet` and `results` make sense on it.
    pub fn unbound(provider: Arc<dyn CapabilityProvider>) -> Self {
        Self {
            provider,
            wallet: None,
            wallet_path: None,
        }
    }

    /// Load the wallet key stored at `path` and bind it.
    pub async fn from_wallet_file(
        provider: Arc<dyn CapabilityProvider>,
        path: impl AsRef<Path>,
    ) -> Result<Self> {
        let path = path.as_ref();
        let wallet = WalletKey::load(path).await?;
        debug!(path = %path.display(), "wallet bound to connector");
        Ok(Self {
            provider,
            wallet: Some(wallet),
            wallet_path: Some(path.to_path_buf()),
        })
    }

    /// Bind an in-memory wallet key.
    pub fn with_wallet(provider: Arc<dyn CapabilityProvider>, wallet: WalletKey) -> Self {
        Self {
            provider,
            wallet: Some(wallet),
            wallet_path: None,
        }
    }

    pub fn wallet(&self) -> Option<&WalletKey> {
        self.wallet.as_ref()
    }

    pub fn wallet_path(&self) -> Option<&Path> {
        self.wallet_path.as_deref()
    }

    pub fn is_bound(&self) -> bool {
        self.wallet.is_some()
    }

    pub async fn create_wallet(&self) -> Result<Outcome<WalletMaterial>> {
        let raw = self.provider.create_wallet().await?;
        Ok(outcome::wallet(raw))
    }

    pub async fn spawn(
        &self,
        source: &str,
        tags: &Tags,
        scheduler: Option<&str>,
        data: Option<&str>,
    ) -> Result<Outcome<Option<String>>> {
        let raw = self
            .provider
            .spawn_process(self.wallet(), source, tags, scheduler, data)
            .await?;
        debug!(outcome = %raw, "spawn outcome");
        Ok(outcome::process_id(raw))
    }

    pub async fn send(
        &self,
        process_id: &str,
        data: &str,
        tags: &Tags,
    ) -> Result<Outcome<Option<String>>> {
        let raw = self
            .provider
            .send_message(self.wallet(), process_id, data, tags)
            .await?;
        Ok(outcome::message_id(raw))
    }

    pub async fn dry_run(&self, process_id: &str, data: &str, tags: &Tags) -> Result<Outcome<Value>> {
        let raw = self
            .provider
            .dry_run(self.wallet(), process_id, data, tags)
            .await?;
        Ok(outcome::dry_run(raw))
    }

    pub async fn results(&self, process_id: &str, query: ResultsQuery) -> Result<Outcome<Vec<Value>>> {
        let raw = self.provider.get_results(process_id, query).await?;
        Ok(outcome::results(raw))
    }
}

impl std::fmt::Debug for AoConnect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Key material stays out of debug output.
        f.debug_struct("AoConnect")
            .field("bound", &self.is_bound())
            .field("wallet_path", &self.wallet_path)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use serde_json::json;
    use std::sync::Mutex;

    /// Echoes back which wallet, if any, reached the provider.
    #[derive(Default)]
    struct EchoProvider {
        seen: Mutex<Vec<Option<Value>>>,
    }

    #[async_trait]
    impl CapabilityProvider for EchoProvider {
        async fn create_wallet(&self) -> Result<Value> {
            Ok(json!({"success": false}))
        }

        async fn spawn_process(
            &self,
            wallet: Option<&WalletKey>,
            _module: &str,
            _tags: &Tags,
            _scheduler: Option<&str>,
            _data: Option<&str>,
        ) -> Result<Value> {
            self.seen.lock().unwrap().push(wallet.map(WalletKey::to_value));
            Ok(json!({"success": true, "result": {"processId": "nested-pid"}}))
        }

        async fn send_message(
            &self,
            wallet: Option<&WalletKey>,
            _process_id: &str,
            _data: &str,
            _tags: &Tags,
        ) -> Result<Value> {
            self.seen.lock().unwrap().push(wallet.map(WalletKey::to_value));
            Ok(json!({"success": true, "messageId": "m1"}))
        }

        async fn dry_run(
            &self,
            _wallet: Option<&WalletKey>,
            _process_id: &str,
            _data: &str,
            _tags: &Tags,
        ) -> Result<Value> {
            Ok(json!({"success": true, "result": {"Output": 1}}))
        }

        async fn get_results(&self, _process_id: &str, query: ResultsQuery) -> Result<Value> {
            let edges: Vec<Value> = (0..query.limit).map(|i| json!({"i": i})).collect();
            Ok(json!({"success": true, "results": {"edges": edges}}))
        }
    }

    #[tokio::test]
    async fn test_wallet_file_binding_reaches_provider() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("wallet.json");
        std::fs::write(&path, r#"{"kty":"RSA","n":"AQAB"}"#).unwrap();

        let provider = Arc::new(EchoProvider::default());
        let connector = AoConnect::from_wallet_file(provider.clone(), &path)
            .await
            .unwrap();
        assert!(connector.is_bound());
        assert_eq!(connector.wallet_path(), Some(path.as_path()));

        let pid = connector
            .spawn("module", &Tags::new(), None, None)
            .await
            .unwrap();
        assert_eq!(pid, Outcome::Success(Some("nested-pid".to_string())));

        let seen = provider.seen.lock().unwrap();
        assert_eq!(seen[0], Some(json!({"kty": "RSA", "n": "AQAB"})));
    }

    #[tokio::test]
    async fn test_unbound_connector_passes_no_wallet() {
        let provider = Arc::new(EchoProvider::default());
        let connector = AoConnect::unbound(provider.clone());
        let mid = connector.send("pid", "hi", &Tags::action("Message")).await.unwrap();
        assert_eq!(mid.success(), Some(Some("m1".to_string())));
        assert_eq!(provider.seen.lock().unwrap()[0], None);
    }

    #[tokio::test]
    async fn test_results_limit_is_forwarded() {
        let connector = AoConnect::unbound(Arc::new(EchoProvider::default()));
        let edges = connector
            .results("pid", ResultsQuery::with_limit(3))
            .await
            .unwrap()
            .success()
            .unwrap();
        assert_eq!(edges.len(), 3);
    }

    #[tokio::test]
    async fn test_missing_wallet_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = AoConnect::from_wallet_file(
            Arc::new(EchoProvider::default()),
            dir.path().join("absent.json"),
        )
        .await
        .unwrap_err();
        assert!(matches!(err, crate::Error::Io(_)));
    }
}
