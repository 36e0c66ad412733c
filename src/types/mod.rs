//! Core value types: tags and wallet key material.

pub mod tag;
pub mod wallet;

pub use tag::{Tag, Tags};
pub use wallet::{WalletKey, WalletMaterial};
