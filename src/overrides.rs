//! Bootstrap and Override Gate
//!
//! Restricted deployment modes short-circuit the registry entirely:
//! standalone deployments never poll and see no discovery nodes, and the
//! test harness sees a fixed set of substitute discovery nodes without any
//! network access. Content-node reads are never gated here.

use crate::config::{DeploymentEnv, PeeringConfig};
use crate::types::{NodeTypeTag, ServiceNode, DISCOVERY_NODE_TYPE_ID};

/// Whether background polling should run at all for this deployment
pub fn polling_enabled(config: &PeeringConfig) -> bool {
    config.env != DeploymentEnv::Standalone && config.test_host.is_none()
}

/// Substitute discovery-node list for restricted modes
///
/// `Some(empty)` for standalone, `Some(fixed records)` for the test
/// harness, `None` when discovery reads should be served from the cache.
pub fn override_discovery_nodes(config: &PeeringConfig) -> Option<Vec<ServiceNode>> {
    if config.env == DeploymentEnv::Standalone {
        return Some(Vec::new());
    }

    if config.test_host.is_some() {
        return Some(test_discovery_nodes());
    }

    None
}

/// Fixed discovery nodes used by the test harness
pub fn test_discovery_nodes() -> Vec<ServiceNode> {
    let fixtures = [
        ("http://com1:8925", "0x1c185053c2259f72fd023ED89B9b3EBbD841DA0F"),
        ("http://com2:8925", "0x90b8d2655A7C268d0fA31758A714e583AE54489D"),
        ("http://com3:8925", "0xb7b9599EeB2FD9237C94cFf02d74368Bb2df959B"),
        ("http://com4:8925", "0xfa4f42633Cb0c72Aa35D3D1A3566abb7142c7b16"),
    ];

    fixtures
        .iter()
        .map(|(endpoint, wallet)| ServiceNode {
            endpoint: endpoint.to_string(),
            delegate_owner_wallet: wallet.to_string(),
            node_type: NodeTypeTag {
                id: DISCOVERY_NODE_TYPE_ID.to_string(),
            },
            ..Default::default()
        })
        .collect()
}
