//! # simple-ao
//!
//! Wallet-bound convenience client for the AO compute network.
//!
//! ## Overview
//!
//! This crate is a thin orchestration layer. Signing, message bundling and
//! the scheduler/gateway protocol are delegated to a [`CapabilityProvider`];
//! the crate binds a wallet to that provider, guards preconditions, applies
//! default tags and reduces loosely shaped outcomes to the fields callers need.
//!
//! Two layers:
//!
//! - **Connector**: [`AoConnect`] binds zero or one wallet key to spawn, send,
//!   dry-run and fetch-results, delegating every call to the provider.
//! - **Facade**: [`SimpleAo`] owns the wallet file lifecycle (load if present,
//!   create and persist on demand) and returns plain identifiers.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use simple_ao::prelude::*;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> simple_ao::Result<()> {
//!     let provider = Arc::new(HttpBridgeProvider::from_env()?);
//!     let mut ao = SimpleAo::new(provider, "my_wallet.json").await?;
//!
//!     if !ao.is_bound() {
//!         ao.generate_wallet().await?;
//!     }
//!
//!     if let Some(pid) = ao.spawn_process("JArYBF-D8q2OmZ4Mok00sD2Y_6SYEQ7Hjx-6VZ_jl3g", Some("Demo")).await? {
//!         ao.send_message(&pid, "Hello AO!", None).await?;
//!         ao.send_eval(&pid, "return 1 + 1").await?;
//!         let results = ao.read_results(&pid, Some(5)).await?;
//!         println!("{} results", results.len());
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`facade`] | [`SimpleAo`] facade and its builder |
//! | [`client`] | [`AoConnect`] wallet-bound connector |
//! | [`provider`] | Capability provider trait |
//! | [`transport`] | HTTP bridge provider |
//! | [`outcome`] | Outcome type and shape normalizers |
//! | [`types`] | Tags and wallet key material |
//! | [`config`] | Defaults, environment and YAML configuration |

pub mod client;
pub mod config;
pub mod facade;
pub mod outcome;
pub mod provider;
pub mod transport;
pub mod types;
pub mod utils;

pub use facade::prelude;

// Re-export main types for convenience
pub use client::AoConnect;
pub use config::{AoConfig, BridgeConfig};
pub use facade::{SimpleAo, SimpleAoBuilder};
pub use outcome::Outcome;
pub use provider::{CapabilityProvider, ResultsQuery};
pub use transport::HttpBridgeProvider;
pub use types::{Tag, Tags, WalletKey, WalletMaterial};

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the library
pub mod error;
pub use error::{Error, ErrorContext};
