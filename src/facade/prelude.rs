//! Minimal prelude for application code.
//!
//! Goal: reduce import noise without hiding important concepts.

pub use crate::client::AoConnect;
pub use crate::config::{AoConfig, BridgeConfig};
pub use crate::facade::{SimpleAo, SimpleAoBuilder};
pub use crate::outcome::Outcome;
pub use crate::provider::{CapabilityProvider, ResultsQuery};
pub use crate::transport::HttpBridgeProvider;
pub use crate::types::{Tag, Tags, WalletKey, WalletMaterial};
pub use crate::{Error, Result};
