//! HTTP transport to the aoconnect bridge.

pub mod http;

pub use http::HttpBridgeProvider;

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Transport error: {0}")]
    Other(String),
}
