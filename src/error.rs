//! Error taxonomy for registry operations
//!
//! The client never retries internally; every variant is surfaced to the
//! caller and retry policy lives entirely in the refresh scheduler.

use thiserror::Error;

/// Errors produced by subgraph fetches and decoding
#[derive(Debug, Error)]
pub enum PeeringError {
    /// Network unreachable, connection refused, or request timeout
    #[error("subgraph request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Non-200 response; keeps the raw body for diagnosis
    #[error("subgraph returned {status} from {endpoint}: {body}")]
    BadStatus {
        status: u16,
        endpoint: String,
        body: String,
    },

    /// Response body was not the expected JSON envelope
    #[error("failed to decode subgraph response: {0}")]
    Decode(#[from] serde_json::Error),
}
