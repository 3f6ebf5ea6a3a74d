//! Subgraph Directory Client
//!
//! Queries the network subgraph for registered service nodes of a given
//! role. One HTTP POST per fetch, bounded by a fixed timeout; errors carry
//! status, endpoint and raw body so failures are diagnosable from logs.
//!
//! Retry policy is deliberately absent here. The refresh scheduler owns it.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::config::PeeringConfig;
use crate::error::PeeringError;
use crate::types::{NodeType, ServiceNode};

/// Production subgraph endpoint
pub const PROD_SUBGRAPH_ENDPOINT: &str =
    "https://api.thegraph.com/subgraphs/name/audius-infra/audius-network-mainnet";

/// Staging subgraph endpoint
pub const STAGING_SUBGRAPH_ENDPOINT: &str =
    "https://api.thegraph.com/subgraphs/name/audius-infra/audius-network-goerli";

/// GraphQL query for registered service nodes of one role
const SERVICE_NODES_QUERY: &str = r#"
    query ServiceProviders($type: String) {
        serviceNodes(where: {isRegistered: true, type: $type}) {
            id
            spId
            endpoint
            delegateOwnerWallet
            type {
                id
            }
        }
    }
"#;

/// Source of service-node records, substitutable in tests
#[async_trait]
pub trait DirectoryClient: Send + Sync {
    /// Fetch all registered nodes of the given role
    async fn fetch_nodes(&self, node_type: NodeType) -> Result<Vec<ServiceNode>, PeeringError>;
}

/// Request body for the subgraph POST
#[derive(Debug, Serialize)]
struct GraphRequest<'a> {
    query: &'a str,
    variables: GraphVariables<'a>,
}

#[derive(Debug, Serialize)]
struct GraphVariables<'a> {
    #[serde(rename = "type")]
    node_type: &'a str,
}

/// Response envelope from the subgraph
#[derive(Debug, Deserialize)]
struct GraphResponse {
    #[serde(default)]
    data: GraphData,
}

#[derive(Debug, Default, Deserialize)]
struct GraphData {
    #[serde(default, rename = "serviceNodes")]
    service_nodes: Vec<ServiceNode>,
}

/// Directory client backed by the network subgraph
pub struct SubgraphClient {
    http: reqwest::Client,
    endpoint: String,
}

impl SubgraphClient {
    /// Build a client for the endpoint selected by the config
    pub fn new(config: &PeeringConfig) -> anyhow::Result<Self> {
        let endpoint = if config.is_staging() {
            STAGING_SUBGRAPH_ENDPOINT
        } else {
            PROD_SUBGRAPH_ENDPOINT
        };

        let http = reqwest::Client::builder()
            .timeout(config.fetch_timeout())
            .build()?;

        Ok(Self {
            http,
            endpoint: endpoint.to_string(),
        })
    }

    /// Endpoint this client posts to
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl DirectoryClient for SubgraphClient {
    async fn fetch_nodes(&self, node_type: NodeType) -> Result<Vec<ServiceNode>, PeeringError> {
        let body = GraphRequest {
            query: SERVICE_NODES_QUERY,
            variables: GraphVariables {
                node_type: node_type.type_id(),
            },
        };

        let response = self.http.post(&self.endpoint).json(&body).send().await?;

        let status = response.status();
        if status != reqwest::StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            return Err(PeeringError::BadStatus {
                status: status.as_u16(),
                endpoint: self.endpoint.clone(),
                body,
            });
        }

        let text = response.text().await?;
        let envelope: GraphResponse = serde_json::from_str(&text)?;

        Ok(envelope.data.service_nodes)
    }
}
