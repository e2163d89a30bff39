//! Germicule tree to graph translation
//!
//! A [`Translator`] pairs one [`Backend`] with the cluster registry and the
//! placeholder counter it carries. Both counters live as long as the
//! translator, so repeated translations continue numbering where the last
//! one stopped; use a fresh translator for independent numbering.

pub mod flatten;

pub use flatten::Flattener;

use crate::backend::{Backend, BackendKind, D3Backend, EChartBackend};
use crate::cluster::{ClusterId, ClusterRegistry, GraphCluster};
use crate::config::Config;
use crate::data::GermiculeMeta;
use crate::error::Result;
use crate::graph::{algorithms, GraphInfo, GraphSummary};
use serde_json::Value;

pub struct Translator<B: Backend> {
    backend: B,
    clusters: ClusterRegistry,
}

impl<B: Backend + Default> Default for Translator<B> {
    fn default() -> Self {
        Self::new(B::default())
    }
}

impl<B: Backend> Translator<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            clusters: ClusterRegistry::new(),
        }
    }

    pub fn cluster_id(&mut self, name: &str) -> ClusterId {
        self.clusters.cluster_id(name)
    }

    /// An empty graph holding the default cluster and every declared cluster
    pub fn accumulator(&mut self, meta: &GermiculeMeta) -> GraphInfo<B::Node, B::EdgeAttrs> {
        let mut graph = GraphInfo::new();

        for declared in meta.clusters.iter().flatten() {
            let id = self.clusters.cluster_id(&declared.name);
            graph
                .clusters
                .insert(declared.name.clone(), GraphCluster::from_declaration(declared, id));
        }

        graph
    }

    /// Flatten `meta` into a graph
    pub fn translate(&mut self, meta: &GermiculeMeta) -> GraphInfo<B::Node, B::EdgeAttrs> {
        let mut graph = self.accumulator(meta);

        let members = match meta.germicules.as_deref() {
            Some(members) if !members.is_empty() => members,
            _ => {
                log::info!("Germicule is empty, emitting placeholder node");
                graph.nodes.push(self.backend.empty_node());
                return graph;
            }
        };

        Flattener::new(&mut self.backend, &mut self.clusters).flatten(members, &mut graph);

        log::info!(
            "Translated germicule into {} nodes, {} edges and {} clusters",
            graph.nodes.len(),
            graph.edges.len(),
            graph.clusters.len()
        );

        graph
    }

    /// Statistics of a graph produced by this translator
    pub fn summarize(&self, graph: &GraphInfo<B::Node, B::EdgeAttrs>) -> GraphSummary {
        algorithms::summarize(graph, |node| self.backend.node_identifier(node))
    }
}

/// A translated graph with its back-end erased, ready to hand to a renderer
#[derive(Debug, Clone)]
pub struct Translation {
    pub backend: BackendKind,
    pub graph: Value,
    pub summary: GraphSummary,
}

/// Translate with the back-end chosen in `config`
pub fn translate_with(config: &Config, meta: &GermiculeMeta) -> Result<Translation> {
    log::info!("Translating with {} backend", config.backend);

    let (graph, summary) = match config.backend {
        BackendKind::EChart => {
            let backend = EChartBackend::new(config.theme.clone(), config.symbol_size);
            translate_to_value(Translator::new(backend), meta)?
        }
        BackendKind::D3 => {
            let backend = D3Backend::new(config.theme.clone());
            translate_to_value(Translator::new(backend), meta)?
        }
    };

    Ok(Translation {
        backend: config.backend,
        graph,
        summary,
    })
}

fn translate_to_value<B>(mut translator: Translator<B>, meta: &GermiculeMeta) -> Result<(Value, GraphSummary)>
where
    B: Backend,
    B::Node: serde::Serialize,
    B::EdgeAttrs: serde::Serialize,
{
    let graph = translator.translate(meta);
    let summary = translator.summarize(&graph);
    Ok((serde_json::to_value(&graph)?, summary))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::EChartBackend;
    use crate::data::{GermiculeCluster, GermiculeItem};
    use serde_json::Map;

    fn declared(name: &str) -> GermiculeCluster {
        GermiculeCluster {
            name: name.to_string(),
            attrs: Map::new(),
        }
    }

    #[test]
    fn declared_clusters_are_numbered_in_order() {
        let mut translator: Translator<EChartBackend> = Translator::default();
        let meta = GermiculeMeta::new(vec![]).with_clusters(vec![declared("colors"), declared("flags")]);
        let graph = translator.accumulator(&meta);

        let ids: Vec<_> = graph.clusters.values().map(|c| (c.name.as_str(), c.id)).collect();
        assert_eq!(ids, vec![("unknown", 0), ("colors", 1), ("flags", 2)]);
    }

    #[test]
    fn numbering_continues_across_calls() {
        let mut translator: Translator<EChartBackend> = Translator::default();
        let meta = GermiculeMeta::new(vec![GermiculeItem::Null]);

        assert_eq!(translator.translate(&meta).nodes[0].name, "unknown 0");
        assert_eq!(translator.translate(&meta).nodes[0].name, "unknown 1");

        translator.cluster_id("colors");
        let graph = translator.accumulator(&GermiculeMeta::default().with_clusters(vec![declared("flags")]));
        assert_eq!(graph.clusters.get("flags").unwrap().id, 2);
    }

    #[test]
    fn missing_germicules_yield_placeholder() {
        let mut translator: Translator<EChartBackend> = Translator::default();
        let graph = translator.translate(&GermiculeMeta::default());

        assert_eq!(graph.nodes.len(), 1);
        assert_eq!(graph.nodes[0].tooltip.as_deref(), Some("your germicule is empty"));
        assert!(graph.edges.is_empty());
    }

    #[test]
    fn translate_with_selects_backend() {
        let config = Config {
            backend: BackendKind::D3,
            ..Config::default()
        };
        let meta = GermiculeMeta::new(vec![GermiculeItem::node("🦄")]);
        let translation = translate_with(&config, &meta).unwrap();

        assert_eq!(translation.backend, BackendKind::D3);
        assert_eq!(translation.graph["nodes"][0]["id"], "🦄");
        assert_eq!(translation.summary.node_count, 1);
    }
}
