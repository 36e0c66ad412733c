//! Wallet-bound connector to the capability provider.
//!
//! The connector is the thin delegation layer under the facade: one optional
//! credential, four remote operations plus wallet creation.

pub mod connector;

pub use connector::AoConnect;
