use super::SimpleAo;
use crate::config::AoConfig;
use crate::provider::CapabilityProvider;
use crate::transport::HttpBridgeProvider;
use crate::Result;
use std::path::PathBuf;
use std::sync::Arc;

/// Builder for [`SimpleAo`].
///
/// Unset pieces fall back to the environment: [`AoConfig::from_env`] for
/// defaults, the config's wallet file for the path, and
/// [`HttpBridgeProvider::from_env`] for the provider.
#[derive(Default)]
pub struct SimpleAoBuilder {
    provider: Option<Arc<dyn CapabilityProvider>>,
    wallet_file: Option<PathBuf>,
    config: Option<AoConfig>,
}

impl SimpleAoBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inject the capability provider.
    pub fn provider(mut self, provider: Arc<dyn CapabilityProvider>) -> Self {
        self.provider = Some(provider);
        self
    }

    /// Wallet file location; overrides the config's `wallet_file`.
    pub fn wallet_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.wallet_file = Some(path.into());
        self
    }

    pub fn config(mut self, config: AoConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Build the facade, binding the wallet file if it exists.
    pub async fn build(self) -> Result<SimpleAo> {
        let config = self.config.unwrap_or_else(AoConfig::from_env);
        let wallet_file = self
            .wallet_file
            .unwrap_or_else(|| config.wallet_file.clone());
        let provider = match self.provider {
            Some(p) => p,
            None => Arc::new(HttpBridgeProvider::from_env()?),
        };
        SimpleAo::with_config(provider, wallet_file, config).await
    }
}
