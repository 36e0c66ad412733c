use crate::client::AoConnect;
use crate::config::AoConfig;
use crate::outcome::{self, Outcome};
use crate::provider::{CapabilityProvider, ResultsQuery};
use crate::types::tag::{AUTHORITY, NAME};
use crate::types::{Tags, WalletKey};
use crate::utils::short_id;
use crate::Result;
use serde_json::Value;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// `Action` used by [`SimpleAo::send_message`] when none is given.
pub const DEFAULT_MESSAGE_ACTION: &str = "Message";
/// `Action` used by [`SimpleAo::send_eval`].
pub const EVAL_ACTION: &str = "Eval";
/// `Action` used by [`SimpleAo::dry_run`] when none is given.
pub const DEFAULT_DRY_RUN_ACTION: &str = "Test";

const NO_WALLET_HINT: &str = "No wallet loaded. Use generate_wallet() first!";

/// Friendly facade over [`AoConnect`].
///
/// The facade is either *unbound* (no wallet file existed at construction) or
/// *bound*. Spawning, sending and dry runs refuse to run while unbound: they
/// log a hint and return `None` without calling the provider.
/// [`SimpleAo::generate_wallet`] persists a new key to the wallet file and
/// binds it.
///
/// `Ok(None)` means "no value": a missing wallet, a provider-reported failure,
/// or an outcome without the expected field. `Err` is reserved for provider
/// faults and wallet file I/O. Progress is reported through `tracing`.
///
/// Spawned processes and sent messages are not tracked; callers keep the
/// identifiers they need.
pub struct SimpleAo {
    provider: Arc<dyn CapabilityProvider>,
    config: AoConfig,
    wallet_file: PathBuf,
    connector: Option<AoConnect>,
    address: Option<String>,
}

impl SimpleAo {
    /// Create a facade with default settings, binding the wallet at `wallet_file` if it exists.
    pub async fn new(
        provider: Arc<dyn CapabilityProvider>,
        wallet_file: impl Into<PathBuf>,
    ) -> Result<Self> {
        Self::with_config(provider, wallet_file, AoConfig::default()).await
    }

    pub async fn with_config(
        provider: Arc<dyn CapabilityProvider>,
        wallet_file: impl Into<PathBuf>,
        config: AoConfig,
    ) -> Result<Self> {
        let mut ao = Self {
            provider,
            config,
            wallet_file: wallet_file.into(),
            connector: None,
            address: None,
        };
        ao.load_wallet().await?;
        Ok(ao)
    }

    pub fn builder() -> super::SimpleAoBuilder {
        super::SimpleAoBuilder::new()
    }

    /// Bind the wallet file if it exists. Returns whether the facade is now bound.
    ///
    /// A missing file is not an error; an unreadable or malformed one is.
    pub async fn load_wallet(&mut self) -> Result<bool> {
        if !tokio::fs::try_exists(&self.wallet_file).await? {
            info!(
                "No wallet found at {}. Use generate_wallet() to create one!",
                self.wallet_file.display()
            );
            return Ok(self.is_bound());
        }

        let connector = AoConnect::from_wallet_file(self.provider.clone(), &self.wallet_file).await?;
        self.address = connector.wallet().and_then(WalletKey::address);
        self.connector = Some(connector);
        info!("Loaded wallet from {}", self.wallet_file.display());
        Ok(true)
    }

    pub fn is_bound(&self) -> bool {
        self.connector.is_some()
    }

    pub fn wallet_file(&self) -> &Path {
        &self.wallet_file
    }

    /// Address of the bound wallet, when known.
    pub fn address(&self) -> Option<&str> {
        self.address.as_deref()
    }

    pub fn config(&self) -> &AoConfig {
        &self.config
    }

    /// The underlying connector, when bound.
    pub fn connector(&self) -> Option<&AoConnect> {
        self.connector.as_ref()
    }

    fn bound(&self) -> Option<&AoConnect> {
        let connector = self.connector.as_ref();
        if connector.is_none() {
            warn!("{}", NO_WALLET_HINT);
        }
        connector
    }

    /// Create a wallet, write its key to the wallet file and bind it.
    ///
    /// Returns the provider-reported address. On a failed outcome nothing is
    /// written and the binding is unchanged.
    pub async fn generate_wallet(&mut self) -> Result<Option<String>> {
        info!("Generating new wallet...");
        let creator = AoConnect::unbound(self.provider.clone());

        let material = match creator.create_wallet().await? {
            Outcome::Success(material) => material,
            Outcome::Failure(raw) => {
                warn!(outcome = %raw, "Failed to create wallet");
                return Ok(None);
            }
        };

        material.jwk.persist(&self.wallet_file).await?;
        let connector = AoConnect::from_wallet_file(self.provider.clone(), &self.wallet_file).await?;
        self.connector = Some(connector);
        self.address = Some(material.address.clone());

        info!("Wallet created! Address: {}...", short_id(&material.address));
        Ok(Some(material.address))
    }

    /// Spawn a process from `process_hash`, named `name` (default `"My Process"`).
    ///
    /// Attaches `Name` and `Authority` tags, the configured scheduler and the
    /// placeholder initial data.
    pub async fn spawn_process(
        &self,
        process_hash: &str,
        name: Option<&str>,
    ) -> Result<Option<String>> {
        let Some(connector) = self.bound() else {
            return Ok(None);
        };

        let name = name.unwrap_or(self.config.process_name.as_str());
        info!("Spawning process: {}", name);
        let tags = Tags::new()
            .with(NAME, name)
            .with(AUTHORITY, self.config.authority.as_str());

        let outcome = connector
            .spawn(
                process_hash,
                &tags,
                Some(self.config.scheduler.as_str()),
                Some(self.config.spawn_data.as_str()),
            )
            .await?;

        match outcome {
            Outcome::Success(Some(process_id)) => {
                info!("Process spawned! ID: {}...", short_id(&process_id));
                Ok(Some(process_id))
            }
            Outcome::Success(None) => {
                warn!("Spawn reported success but carried no process id");
                Ok(None)
            }
            Outcome::Failure(raw) => {
                debug!(outcome = %raw, "spawn failed");
                warn!("Failed to spawn process");
                Ok(None)
            }
        }
    }

    /// Send `message` with a single `Action` tag (default `"Message"`). Returns the message id.
    pub async fn send_message(
        &self,
        process_id: &str,
        message: &str,
        action: Option<&str>,
    ) -> Result<Option<String>> {
        let Some(connector) = self.bound() else {
            return Ok(None);
        };

        info!("Sending message: {}", message);
        let tags = Tags::action(action.unwrap_or(DEFAULT_MESSAGE_ACTION));

        match connector.send(process_id, message, &tags).await? {
            Outcome::Success(Some(message_id)) => {
                info!("Message sent! ID: {}...", short_id(&message_id));
                Ok(Some(message_id))
            }
            Outcome::Success(None) => {
                warn!("Send reported success but carried no message id");
                Ok(None)
            }
            Outcome::Failure(raw) => {
                debug!(outcome = %raw, "send failed");
                warn!("Failed to send message");
                Ok(None)
            }
        }
    }

    /// Send `code` for evaluation. Same call as `send_message` with action `"Eval"`.
    pub async fn send_eval(&self, process_id: &str, code: &str) -> Result<Option<String>> {
        self.send_message(process_id, code, Some(EVAL_ACTION)).await
    }

    /// Read the latest results of a process as a flat edge list (default limit 10).
    ///
    /// Unknown outcome shapes yield an empty list. Without a wallet no call is made.
    pub async fn read_results(&self, process_id: &str, limit: Option<u32>) -> Result<Vec<Value>> {
        let Some(connector) = self.bound() else {
            return Ok(Vec::new());
        };

        info!("Reading results from process...");
        let query = ResultsQuery::with_limit(limit.unwrap_or(self.config.results_limit));
        let edges = match connector.results(process_id, query).await? {
            Outcome::Success(edges) => edges,
            Outcome::Failure(raw) => outcome::edges(&raw),
        };

        info!("Found {} results!", edges.len());
        Ok(edges)
    }

    /// Evaluate `message` without committing it (default action `"Test"`).
    ///
    /// On success the inner result payload comes back as `Outcome::Success`.
    /// On a provider-reported failure the whole raw outcome comes back as
    /// `Outcome::Failure`, so callers can inspect the diagnostics. This is
    /// unlike the other operations, which collapse failures to `None`.
    /// Without a wallet the result is `None`.
    pub async fn dry_run(
        &self,
        process_id: &str,
        message: &str,
        action: Option<&str>,
    ) -> Result<Option<Outcome<Value>>> {
        let Some(connector) = self.bound() else {
            return Ok(None);
        };

        info!("Testing message: {}", message);
        let tags = Tags::action(action.unwrap_or(DEFAULT_DRY_RUN_ACTION));

        let outcome = connector.dry_run(process_id, message, &tags).await?;
        if outcome.is_success() {
            info!("Dry run completed successfully!");
        } else {
            warn!("Dry run failed");
        }
        Ok(Some(outcome))
    }
}

impl std::fmt::Debug for SimpleAo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SimpleAo")
            .field("wallet_file", &self.wallet_file)
            .field("bound", &self.is_bound())
            .field("address", &self.address)
            .finish()
    }
}
