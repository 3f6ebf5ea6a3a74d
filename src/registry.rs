//! Node Registry Cache
//!
//! Id-keyed cache of the most recently fetched service nodes. A single lock
//! covers merges and snapshot reads: readers never observe a half-applied
//! merge and never block on network I/O.
//!
//! Records are only ever replaced by a newer fetch. A failed refresh leaves
//! the cache untouched, so callers keep getting the last known-good
//! snapshot (stale-but-available).

use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::types::{NodeType, ServiceNode};

/// In-memory registry of service nodes, keyed by node id
#[derive(Default)]
pub struct NodeRegistry {
    nodes: RwLock<HashMap<String, ServiceNode>>,
}

impl NodeRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge a fetched snapshot into the cache
    ///
    /// Every record replaces the entry for its id; ids not present in
    /// `nodes` keep their previous value.
    pub async fn merge(&self, nodes: Vec<ServiceNode>) {
        let mut map = self.nodes.write().await;
        for node in nodes {
            map.insert(node.id.clone(), node);
        }
    }

    /// Snapshot of all cached nodes with the given role
    ///
    /// Ordering is unspecified; the store is id-keyed.
    pub async fn nodes_by_type(&self, node_type: NodeType) -> Vec<ServiceNode> {
        let map = self.nodes.read().await;
        map.values()
            .filter(|node| node.is_type(node_type))
            .cloned()
            .collect()
    }

    /// Total cached nodes across all roles
    pub async fn len(&self) -> usize {
        self.nodes.read().await.len()
    }

    /// Whether the cache holds no nodes
    pub async fn is_empty(&self) -> bool {
        self.nodes.read().await.is_empty()
    }
}
