//! Refresh Scheduler and the peering facade
//!
//! [`Peering`] owns the registry, the directory client and the metrics, and
//! is handed to every component needing peer addresses (construct one per
//! process, or per test). `start_polling` performs one blocking
//! retry-wrapped discovery fetch so startup only proceeds with a populated
//! cache, then a single background task refreshes the registry on a fixed
//! interval forever.
//!
//! The loop is strictly sequential: sleep, fetch, merge, sleep. Only one
//! refresh is ever in flight, so merges apply in fetch-completion order.
//! Background failures are logged and dropped; the cache keeps serving the
//! last known-good snapshot.

use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, warn};

use crate::client::{DirectoryClient, SubgraphClient};
use crate::config::PeeringConfig;
use crate::error::PeeringError;
use crate::metrics::Metrics;
use crate::overrides;
use crate::registry::NodeRegistry;
use crate::retry;
use crate::types::{NodeType, ServiceNode};

/// Handle to the service-node registry and its refresh loop
pub struct Peering {
    config: PeeringConfig,
    client: Arc<dyn DirectoryClient>,
    registry: Arc<NodeRegistry>,
    metrics: Arc<Metrics>,
}

impl Peering {
    /// Create a peering handle backed by the network subgraph
    pub fn new(config: PeeringConfig) -> anyhow::Result<Self> {
        config.validate()?;
        let client = Arc::new(SubgraphClient::new(&config)?);
        Ok(Self::with_client(config, client))
    }

    /// Create a peering handle with an injected directory client
    pub fn with_client(config: PeeringConfig, client: Arc<dyn DirectoryClient>) -> Self {
        Self {
            config,
            client,
            registry: Arc::new(NodeRegistry::new()),
            metrics: Arc::new(Metrics::new()),
        }
    }

    /// The underlying cache
    pub fn registry(&self) -> &Arc<NodeRegistry> {
        &self.registry
    }

    /// Shared metrics handle for the host's exporter
    pub fn metrics(&self) -> Arc<Metrics> {
        self.metrics.clone()
    }

    /// Populate the registry and start the background refresh loop
    ///
    /// Blocks on the first discovery fetch (retried per the configured
    /// policy) and returns its outcome, so callers can treat an unreachable
    /// subgraph at startup as fatal. In standalone and test-host modes this
    /// is a no-op. Background refreshes run until process exit; their
    /// failures are logged, never raised.
    pub async fn start_polling(&self) -> Result<(), PeeringError> {
        if !overrides::polling_enabled(&self.config) {
            info!("service-node polling disabled for this deployment");
            return Ok(());
        }

        let max_attempts = self.config.max_fetch_attempts;
        let initial_delay = self.config.retry_initial_delay();

        // First fetch is synchronous so startup sees a populated cache or a
        // hard error.
        refresh_with_retry(
            &self.client,
            &self.registry,
            &self.metrics,
            max_attempts,
            initial_delay,
        )
        .await?;

        info!(
            "📡 service-node registry populated ({} nodes), refreshing every {}s",
            self.registry.len().await,
            self.config.refresh_interval_secs
        );

        let client = self.client.clone();
        let registry = self.registry.clone();
        let metrics = self.metrics.clone();
        let interval = self.config.refresh_interval();

        tokio::spawn(async move {
            loop {
                tokio::time::sleep(interval).await;

                if let Err(e) = refresh_with_retry(
                    &client,
                    &registry,
                    &metrics,
                    max_attempts,
                    initial_delay,
                )
                .await
                {
                    warn!("background registry refresh failed: {}", e);
                }
            }
        });

        Ok(())
    }

    /// Current discovery nodes
    ///
    /// Served from the cache, never triggering a fetch. Standalone
    /// deployments always see an empty list; the test harness sees the
    /// fixed substitute records regardless of cache contents.
    pub async fn discovery_nodes(&self) -> Vec<ServiceNode> {
        if let Some(nodes) = overrides::override_discovery_nodes(&self.config) {
            return nodes;
        }

        self.registry.nodes_by_type(NodeType::DiscoveryNode).await
    }

    /// Current content nodes
    ///
    /// Always one live subgraph fetch per call.
    // TODO: cache content nodes once their staleness tolerance is decided
    pub async fn content_nodes(&self) -> Result<Vec<ServiceNode>, PeeringError> {
        self.metrics.inc_content_fetches();
        self.client.fetch_nodes(NodeType::ContentNode).await
    }
}

/// One fetch-and-merge cycle for the discovery role
async fn refresh(
    client: &Arc<dyn DirectoryClient>,
    registry: &Arc<NodeRegistry>,
    metrics: &Arc<Metrics>,
) -> Result<(), PeeringError> {
    debug!("refreshing service nodes");
    metrics.inc_refresh_attempts();

    let started = Instant::now();
    let nodes = client.fetch_nodes(NodeType::DiscoveryNode).await?;
    metrics.set_last_fetch_ms(started.elapsed().as_millis() as u64);

    debug!("fetched {} discovery nodes", nodes.len());
    registry.merge(nodes).await;
    metrics.set_cached_nodes(registry.len().await as u64);

    Ok(())
}

/// Refresh wrapped in the configured retry policy
async fn refresh_with_retry(
    client: &Arc<dyn DirectoryClient>,
    registry: &Arc<NodeRegistry>,
    metrics: &Arc<Metrics>,
    max_attempts: u32,
    initial_delay: std::time::Duration,
) -> Result<(), PeeringError> {
    let result = retry::with_backoff(max_attempts, initial_delay, move || {
        refresh(client, registry, metrics)
    })
    .await;

    if result.is_err() {
        metrics.inc_refresh_failures();
    }

    result
}
