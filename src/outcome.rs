//! Provider outcomes and their normalization.
//!
//! The capability provider answers every call with a loosely shaped JSON
//! object carrying a `success` flag. Identifiers may sit at the top level or
//! under a nested `result` object, and result edges may be wrapped in
//! different ways depending on the provider version. Each response kind gets
//! one normalizer here, trying candidate field paths in priority order, so no
//! call site inspects raw shapes itself.

use crate::types::{WalletKey, WalletMaterial};
use crate::utils::PathMapper;
use serde_json::Value;

/// Candidate locations of a spawned process identifier, in priority order.
pub const PROCESS_ID_PATHS: &[&str] = &["processId", "result.processId"];
/// Candidate locations of an accepted message identifier, in priority order.
pub const MESSAGE_ID_PATHS: &[&str] = &["messageId", "result.messageId"];
/// Candidate locations of a result edge sequence, in priority order.
pub const EDGE_PATHS: &[&str] = &["results.edges", "edges", "results"];

/// Outcome of a delegated call: a typed payload on success, or the raw
/// provider response on failure so callers can inspect it.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<T> {
    Success(T),
    Failure(Value),
}

impl<T> Outcome<T> {
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }

    /// The success payload, discarding any failure diagnostics.
    pub fn success(self) -> Option<T> {
        match self {
            Outcome::Success(v) => Some(v),
            Outcome::Failure(_) => None,
        }
    }

    /// The raw provider response, when the call failed.
    pub fn failure(&self) -> Option<&Value> {
        match self {
            Outcome::Success(_) => None,
            Outcome::Failure(raw) => Some(raw),
        }
    }
}

/// Whether the raw response reports `success: true`. Anything else counts as failure.
pub fn reported_success(raw: &Value) -> bool {
    raw.get("success").and_then(Value::as_bool).unwrap_or(false)
}

/// create-wallet: success requires both the flag and a well-formed `wallet`.
pub fn wallet(raw: Value) -> Outcome<WalletMaterial> {
    if !reported_success(&raw) {
        return Outcome::Failure(raw);
    }
    let address = PathMapper::get_str(&raw, "wallet.address").map(str::to_string);
    let jwk = PathMapper::get_path(&raw, "wallet.jwk")
        .cloned()
        .and_then(|v| WalletKey::from_value(v).ok());
    match (address, jwk) {
        (Some(address), Some(jwk)) => Outcome::Success(WalletMaterial { address, jwk }),
        _ => Outcome::Failure(raw),
    }
}

/// spawn-process: the process identifier, top-level or nested.
pub fn process_id(raw: Value) -> Outcome<Option<String>> {
    identifier(raw, PROCESS_ID_PATHS)
}

/// send-message: the message identifier, top-level or nested.
pub fn message_id(raw: Value) -> Outcome<Option<String>> {
    identifier(raw, MESSAGE_ID_PATHS)
}

fn identifier(raw: Value, candidates: &[&str]) -> Outcome<Option<String>> {
    if !reported_success(&raw) {
        return Outcome::Failure(raw);
    }
    Outcome::Success(PathMapper::first_str(&raw, candidates).map(str::to_string))
}

/// dry-run: the evaluated result payload (empty object when absent).
pub fn dry_run(raw: Value) -> Outcome<Value> {
    if !reported_success(&raw) {
        return Outcome::Failure(raw);
    }
    match raw {
        Value::Object(mut map) => match map.remove("result") {
            Some(result) if !result.is_null() => Outcome::Success(result),
            _ => Outcome::Success(Value::Object(Default::default())),
        },
        _ => Outcome::Success(Value::Object(Default::default())),
    }
}

/// get-results: the edge sequence on success, the raw response otherwise.
pub fn results(raw: Value) -> Outcome<Vec<Value>> {
    if reported_success(&raw) {
        Outcome::Success(edges(&raw))
    } else {
        Outcome::Failure(raw)
    }
}

/// Flatten any known results shape into a plain edge sequence.
///
/// Accepts a bare array, `{results: {edges: [...]}}`, `{edges: [...]}` and
/// `{results: [...]}`. Anything else yields an empty sequence.
pub fn edges(raw: &Value) -> Vec<Value> {
    if let Value::Array(items) = raw {
        return items.clone();
    }
    EDGE_PATHS
        .iter()
        .filter_map(|path| PathMapper::get_path(raw, path))
        .find_map(Value::as_array)
        .cloned()
        .unwrap_or_default()
}
