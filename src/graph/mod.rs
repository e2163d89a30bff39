//! Flat graph produced from a germicule tree

pub mod algorithms;
pub mod edges;

pub use algorithms::GraphSummary;
pub use edges::{edge_name, insert_edge, Edge, EdgeMap, PartialEdge};

use crate::cluster::{ClusterMap, GraphCluster, DEFAULT_CLUSTER};
use serde::Serialize;

/// The accumulator filled by a translation pass.
///
/// `partial_edges` is a stack of fragments still waiting for a source; it
/// is part of the in-progress state and is not serialized.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphInfo<N, A> {
    /// Nodes in creation order
    pub nodes: Vec<N>,

    pub edges: EdgeMap<A>,

    #[serde(skip)]
    pub partial_edges: Vec<PartialEdge<A>>,

    pub clusters: ClusterMap,
}

impl<N, A> GraphInfo<N, A> {
    /// An empty graph seeded with the default cluster
    pub fn new() -> Self {
        let mut clusters = ClusterMap::new();
        clusters.insert(DEFAULT_CLUSTER.to_string(), GraphCluster::default_cluster());

        Self {
            nodes: Vec::new(),
            edges: EdgeMap::new(),
            partial_edges: Vec::new(),
            clusters,
        }
    }
}

impl<N, A> Default for GraphInfo<N, A> {
    fn default() -> Self {
        Self::new()
    }
}
