//! Summary statistics over a produced graph

use crate::graph::{insert_edge, GraphInfo};
use itertools::Itertools;
use petgraph::algo::{connected_components, is_cyclic_directed};
use petgraph::graph::{DiGraph, NodeIndex};
use serde::Serialize;
use std::collections::{HashMap, HashSet};

/// Per-cluster statistics
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClusterStats {
    pub id: u32,
    pub name: String,
    pub size: usize,

    /// Density: actual edges between members / potential edges
    pub density: f32,
}

/// Shape of a translated graph
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphSummary {
    pub node_count: usize,
    pub edge_count: usize,
    pub cluster_count: usize,

    /// Edge targets that do not name any node
    pub dangling_targets: Vec<String>,

    pub is_cyclic: bool,

    /// Weakly connected components, dangling targets included
    pub component_count: usize,

    pub clusters: Vec<ClusterStats>,
}

/// Compute a [`GraphSummary`], using `node_id` to read each node's identity
pub fn summarize<'a, N, A>(
    graph: &'a GraphInfo<N, A>,
    node_id: impl Fn(&'a N) -> &'a str,
) -> GraphSummary {
    let mut digraph: DiGraph<&str, ()> = DiGraph::with_capacity(graph.nodes.len(), graph.edges.len());
    let mut indices: HashMap<&str, NodeIndex> = HashMap::with_capacity(graph.nodes.len());

    for node in &graph.nodes {
        let id = node_id(node);
        indices.entry(id).or_insert_with(|| digraph.add_node(id));
    }

    let dangling_targets: Vec<String> = graph
        .edges
        .values()
        .map(|edge| edge.target.as_str())
        .filter(|target| !indices.contains_key(target))
        .unique()
        .sorted()
        .map(str::to_string)
        .collect();

    for target in &dangling_targets {
        log::warn!("Edge target {:?} does not name any node", target);
    }

    for edge in graph.edges.values() {
        let source = *indices
            .entry(edge.source.as_str())
            .or_insert_with(|| digraph.add_node(edge.source.as_str()));
        let target = *indices
            .entry(edge.target.as_str())
            .or_insert_with(|| digraph.add_node(edge.target.as_str()));
        digraph.add_edge(source, target, ());
    }

    let clusters = graph
        .clusters
        .values()
        .map(|cluster| ClusterStats {
            id: cluster.id,
            name: cluster.name.clone(),
            size: cluster.members.len(),
            density: calculate_density(graph, &cluster.members),
        })
        .collect();

    let summary = GraphSummary {
        node_count: graph.nodes.len(),
        edge_count: graph.edges.len(),
        cluster_count: graph.clusters.len(),
        dangling_targets,
        is_cyclic: is_cyclic_directed(&digraph),
        component_count: connected_components(&digraph),
        clusters,
    };

    log::info!(
        "Graph has {} nodes, {} edges, {} clusters and {} components",
        summary.node_count,
        summary.edge_count,
        summary.cluster_count,
        summary.component_count
    );

    summary
}

/// Calculate density (actual edges / potential edges) of a member set
pub fn calculate_density<N, A>(graph: &GraphInfo<N, A>, members: &[String]) -> f32 {
    let member_set: HashSet<&str> = members.iter().map(String::as_str).collect();
    let n = member_set.len();
    if n <= 1 {
        return 1.0; // By convention, singleton clusters have density 1
    }

    // Potential edges = n * (n - 1) for directed graph
    let potential_edges = n * (n - 1);

    let actual_edges = graph
        .edges
        .values()
        .filter(|edge| {
            edge.source != edge.target
                && member_set.contains(edge.source.as_str())
                && member_set.contains(edge.target.as_str())
        })
        .count();

    actual_edges as f32 / potential_edges as f32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cluster::GraphCluster;
    use crate::graph::PartialEdge;

    fn graph(nodes: &[&str], edges: &[(&str, &str)]) -> GraphInfo<String, ()> {
        let mut graph = GraphInfo::new();
        graph.nodes = nodes.iter().map(|n| n.to_string()).collect();
        for (source, target) in edges {
            insert_edge(&mut graph.edges, PartialEdge::new(*target, ()).with_source(*source));
        }
        graph
    }

    #[test]
    fn chain_is_acyclic_and_connected() {
        let graph = graph(&["a", "b", "c"], &[("a", "b"), ("b", "c")]);
        let summary = summarize(&graph, String::as_str);

        assert_eq!(summary.node_count, 3);
        assert_eq!(summary.edge_count, 2);
        assert!(!summary.is_cyclic);
        assert_eq!(summary.component_count, 1);
        assert!(summary.dangling_targets.is_empty());
    }

    #[test]
    fn dangling_targets_are_reported() {
        let graph = graph(&["a", "b"], &[("a", "ghost")]);
        let summary = summarize(&graph, String::as_str);

        assert_eq!(summary.dangling_targets, vec!["ghost"]);
        assert_eq!(summary.component_count, 2);
    }

    #[test]
    fn cycle_is_detected() {
        let graph = graph(&["a", "b"], &[("a", "b"), ("b", "a")]);
        assert!(summarize(&graph, String::as_str).is_cyclic);
    }

    #[test]
    fn cluster_density_counts_member_edges() {
        let mut graph = graph(&["a", "b", "c"], &[("a", "b"), ("c", "a")]);
        let mut cluster = GraphCluster::new("letters", 1);
        cluster.members = vec!["a".into(), "b".into(), "c".into()];
        graph.clusters.insert(cluster.name.clone(), cluster);

        let summary = summarize(&graph, String::as_str);
        let letters = summary.clusters.iter().find(|c| c.name == "letters").unwrap();
        assert_eq!(letters.size, 3);
        assert!((letters.density - 2.0 / 6.0).abs() < 1e-6);
    }
}
