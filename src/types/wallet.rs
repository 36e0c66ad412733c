//! Wallet key material and its on-disk form.

use crate::{Error, ErrorContext, Result};
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use sha2::{Digest, Sha256};
use std::path::Path;

/// Opaque wallet key (a JWK object in the provider's native serialization).
///
/// The key is never mutated after creation. It is written once, verbatim, and
/// read back on later startups.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WalletKey(Map<String, Value>);

impl WalletKey {
    /// Wrap a JSON value; anything but an object is rejected.
    pub fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            other => Err(Error::wallet_with_context(
                "wallet key must be a JSON object",
                ErrorContext::new()
                    .with_field_path("jwk")
                    .with_details(format!("found {}", json_kind(&other))),
            )),
        }
    }

    /// Read a wallet key from `path`.
    pub async fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = tokio::fs::read_to_string(path).await?;
        let value: Value = serde_json::from_str(&text).map_err(|e| {
            Error::wallet_with_context(
                format!("wallet file is not valid JSON: {}", e),
                ErrorContext::new()
                    .with_details(path.display().to_string())
                    .with_source("wallet_loader"),
            )
        })?;
        Self::from_value(value)
    }

    /// Write the key to `path`, replacing any existing file.
    pub async fn persist(&self, path: impl AsRef<Path>) -> Result<()> {
        let text = serde_json::to_string(&self.0)?;
        tokio::fs::write(path, text).await?;
        Ok(())
    }

    /// Derive the public address: base64url(sha256(modulus)).
    ///
    /// Returns `None` when the key has no usable `n` component.
    pub fn address(&self) -> Option<String> {
        let n = self.0.get("n")?.as_str()?;
        let modulus = URL_SAFE_NO_PAD.decode(n.trim_end_matches('=')).ok()?;
        if modulus.is_empty() {
            return None;
        }
        let digest = Sha256::digest(&modulus);
        Some(URL_SAFE_NO_PAD.encode(digest))
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn to_value(&self) -> Value {
        Value::Object(self.0.clone())
    }
}

/// Freshly created wallet as reported by the capability provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WalletMaterial {
    pub address: String,
    pub jwk: WalletKey,
}

fn json_kind(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
