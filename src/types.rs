//! Core types for the service-node registry
//!
//! These mirror the subgraph's `serviceNodes` entity. Field names on the
//! wire are camelCase; the node role arrives as a nested `{"type": {"id"}}`
//! object and is flattened here into [`NodeType`].

use serde::{Deserialize, Serialize};

/// Wire identifier for discovery nodes
pub const DISCOVERY_NODE_TYPE_ID: &str = "discovery-node";

/// Wire identifier for content nodes
pub const CONTENT_NODE_TYPE_ID: &str = "content-node";

/// Functional role of a service node in the network
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeType {
    /// Indexes the network and answers queries
    DiscoveryNode,

    /// Stores and serves content
    ContentNode,
}

impl NodeType {
    /// Wire identifier used in subgraph queries and responses
    pub fn type_id(&self) -> &'static str {
        match self {
            NodeType::DiscoveryNode => DISCOVERY_NODE_TYPE_ID,
            NodeType::ContentNode => CONTENT_NODE_TYPE_ID,
        }
    }

    /// Parse a wire identifier
    pub fn from_type_id(id: &str) -> Option<Self> {
        match id {
            DISCOVERY_NODE_TYPE_ID => Some(NodeType::DiscoveryNode),
            CONTENT_NODE_TYPE_ID => Some(NodeType::ContentNode),
            _ => None,
        }
    }
}

impl std::fmt::Display for NodeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.type_id())
    }
}

/// Nested `type` object as it appears in subgraph responses
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeTypeTag {
    /// Role identifier, e.g. "discovery-node"
    #[serde(default)]
    pub id: String,
}

/// One registered service node as known to the registry
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceNode {
    /// Unique primary key within the registry
    #[serde(default)]
    pub id: String,

    /// Secondary identifier assigned by the network (may be absent)
    #[serde(default)]
    pub sp_id: Option<String>,

    /// URL at which the node is reachable
    #[serde(default)]
    pub endpoint: String,

    /// Wallet of the operator running the node
    #[serde(default)]
    pub delegate_owner_wallet: String,

    /// Role of the node, as the nested subgraph `type` object
    #[serde(default, rename = "type")]
    pub node_type: NodeTypeTag,
}

impl ServiceNode {
    /// Whether this node serves the given role
    pub fn is_type(&self, node_type: NodeType) -> bool {
        self.node_type.id == node_type.type_id()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_type_round_trip() {
        assert_eq!(NodeType::DiscoveryNode.type_id(), "discovery-node");
        assert_eq!(NodeType::ContentNode.type_id(), "content-node");
        assert_eq!(
            NodeType::from_type_id("discovery-node"),
            Some(NodeType::DiscoveryNode)
        );
        assert_eq!(
            NodeType::from_type_id("content-node"),
            Some(NodeType::ContentNode)
        );
        assert_eq!(NodeType::from_type_id("relay-node"), None);
    }

    #[test]
    fn test_service_node_wire_format() {
        let json = r#"{
            "id": "14",
            "spId": "2",
            "endpoint": "https://dn1.example.com",
            "delegateOwnerWallet": "0x1c185053c2259f72fd023ED89B9b3EBbD841DA0F",
            "type": { "id": "discovery-node" }
        }"#;

        let node: ServiceNode = serde_json::from_str(json).unwrap();
        assert_eq!(node.id, "14");
        assert_eq!(node.sp_id.as_deref(), Some("2"));
        assert_eq!(node.endpoint, "https://dn1.example.com");
        assert!(node.is_type(NodeType::DiscoveryNode));
        assert!(!node.is_type(NodeType::ContentNode));
    }

    #[test]
    fn test_service_node_null_sp_id() {
        // Subgraph may return null or omit spId entirely
        let json = r#"{
            "id": "3",
            "spId": null,
            "endpoint": "https://cn1.example.com",
            "delegateOwnerWallet": "0xabc",
            "type": { "id": "content-node" }
        }"#;

        let node: ServiceNode = serde_json::from_str(json).unwrap();
        assert_eq!(node.sp_id, None);
        assert!(node.is_type(NodeType::ContentNode));
    }
}
