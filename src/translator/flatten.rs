//! The recursive tree-to-graph pass

use crate::backend::Backend;
use crate::cluster::{ClusterRegistry, GraphCluster};
use crate::data::{GermiculeItem, Member};
use crate::graph::{edge_name, insert_edge, Edge, GraphInfo, PartialEdge};

/// Walks a germicule tree depth-first and folds it into a [`GraphInfo`].
///
/// Children are flattened before their parent. Every finished node offers
/// an edge fragment targeting itself; a sibling group hands its fragments to
/// the shared stack once it is done, and the parent drains that stack when
/// its own node is built.
pub struct Flattener<'t, B: Backend> {
    backend: &'t mut B,
    clusters: &'t mut ClusterRegistry,
}

impl<'t, B: Backend> Flattener<'t, B> {
    pub fn new(backend: &'t mut B, clusters: &'t mut ClusterRegistry) -> Self {
        Self { backend, clusters }
    }

    pub fn flatten(&mut self, items: &[Member], graph: &mut GraphInfo<B::Node, B::EdgeAttrs>) {
        let mut parent_partial_edges: Vec<PartialEdge<B::EdgeAttrs>> = Vec::new();

        for item in items.iter().flatten() {
            if let GermiculeItem::Link(link) = item {
                parent_partial_edges.push(self.backend.to_partial_edge(item, &link.link));
                continue;
            }

            if let Some(children) = item.children() {
                self.flatten(children, graph);
            }

            let mut node = self.backend.to_node(item);
            let source = self.backend.node_identifier(&node).to_string();
            log::debug!("Flattened node {:?}", source);

            self.drain_partial_edges(&source, graph);

            if let Some(cluster) = item.cluster() {
                self.join_cluster(cluster, &mut node, &source, graph);
            }

            parent_partial_edges.push(self.backend.to_partial_edge(item, &source));
            graph.nodes.push(node);
        }

        graph.partial_edges.extend(parent_partial_edges);
    }

    /// Resolve pending fragments against `source`, most recent first.
    ///
    /// Meeting a key that already exists stops the drain altogether, leaving
    /// the remaining fragments for whichever node is built next.
    // TODO: skip the duplicate and keep draining instead of stopping.
    fn drain_partial_edges(&self, source: &str, graph: &mut GraphInfo<B::Node, B::EdgeAttrs>) {
        while let Some(partial) = graph.partial_edges.pop() {
            let key = edge_name(source, &partial.target);
            if graph.edges.contains_key(&key) {
                log::debug!("Edge {:?} already exists, leaving {} pending", key, graph.partial_edges.len());
                return;
            }
            insert_edge(&mut graph.edges, partial.with_source(source));
        }
    }

    /// Link `node` to every member already in `name`, then add it as a member
    fn join_cluster(
        &mut self,
        name: &str,
        node: &mut B::Node,
        source: &str,
        graph: &mut GraphInfo<B::Node, B::EdgeAttrs>,
    ) {
        let cluster = graph
            .clusters
            .entry(name.to_string())
            .or_insert_with(|| GraphCluster::new(name, self.clusters.cluster_id(name)));

        for member in &cluster.members {
            let edge = Edge {
                source: source.to_string(),
                target: member.clone(),
                attrs: self.backend.default_cluster_edge(),
            };
            insert_edge(&mut graph.edges, edge);
        }

        cluster.members.push(source.to_string());
        self.backend.set_node_cluster_id(node, cluster.id);
    }
}
