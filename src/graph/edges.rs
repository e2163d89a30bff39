//! Edge records and the deduplicating edge map

use indexmap::map::Entry;
use indexmap::IndexMap;
use serde::Serialize;

/// Identity of an edge: `"<source> > <target>"`
pub fn edge_name(source: &str, target: &str) -> String {
    format!("{} > {}", source, target)
}

/// A directed edge carrying back-end specific attributes
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Edge<A> {
    pub source: String,
    pub target: String,

    #[serde(flatten)]
    pub attrs: A,
}

impl<A> Edge<A> {
    pub fn name(&self) -> String {
        edge_name(&self.source, &self.target)
    }
}

/// An edge whose target is known but whose source is not produced yet
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PartialEdge<A> {
    pub target: String,

    #[serde(flatten)]
    pub attrs: A,
}

impl<A> PartialEdge<A> {
    pub fn new(target: impl Into<String>, attrs: A) -> Self {
        Self {
            target: target.into(),
            attrs,
        }
    }

    pub fn with_source(self, source: impl Into<String>) -> Edge<A> {
        Edge {
            source: source.into(),
            target: self.target,
            attrs: self.attrs,
        }
    }
}

/// Edges keyed by [`edge_name`], in insertion order
pub type EdgeMap<A> = IndexMap<String, Edge<A>>;

/// Store `edge` unless its key is taken. Returns whether it was stored.
pub fn insert_edge<A>(edges: &mut EdgeMap<A>, edge: Edge<A>) -> bool {
    match edges.entry(edge.name()) {
        Entry::Occupied(_) => false,
        Entry::Vacant(slot) => {
            slot.insert(edge);
            true
        }
    }
}
