//! Peering Service-Node Registry
//!
//! In-memory registry of the service nodes registered on the network,
//! refreshed periodically from the network subgraph.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        PEERING                              │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Subgraph Client        ──→ POST GraphQL, decode envelope   │
//! │  Refresh Scheduler      ──→ initial fetch, then hourly loop │
//! │  Node Registry          ──→ id-keyed cache, merge + filter  │
//! │  Override Gate          ──→ standalone / test-host handling │
//! │  Metrics                ──→ fetch / cache counters          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! The registry trusts the subgraph's `isRegistered` flag verbatim and never
//! health-checks peers itself. Discovery-node reads are served from the
//! cache; content-node reads always hit the subgraph live.

pub mod client;
pub mod config;
pub mod error;
pub mod metrics;
pub mod overrides;
pub mod refresh;
pub mod registry;
pub mod retry;
pub mod types;

pub use client::{DirectoryClient, SubgraphClient};
pub use config::{DeploymentEnv, PeeringConfig};
pub use error::PeeringError;
pub use metrics::Metrics;
pub use refresh::Peering;
pub use registry::NodeRegistry;
pub use types::{NodeType, ServiceNode};
