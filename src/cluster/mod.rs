//! Cluster records and id allocation

pub mod registry;

pub use registry::ClusterRegistry;

use crate::data::GermiculeCluster;
use indexmap::IndexMap;
use serde::Serialize;
use serde_json::{Map, Value};

pub type ClusterId = u32;

/// Name of the cluster every node belongs to until told otherwise
pub const DEFAULT_CLUSTER: &str = "unknown";

pub const DEFAULT_CLUSTER_ID: ClusterId = 0;

/// Keys owned by [`GraphCluster`] itself, never taken from display attributes
const RESERVED_KEYS: [&str; 3] = ["id", "name", "members"];

/// A named group of nodes, rendered as a clique of membership edges
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphCluster {
    /// Unique identifier for this cluster
    pub id: ClusterId,

    pub name: String,

    /// Identities of member nodes, in join order
    pub members: Vec<String>,

    /// Display attributes copied from the declaration
    #[serde(flatten)]
    pub attrs: Map<String, Value>,
}

/// Clusters keyed by name, in insertion order
pub type ClusterMap = IndexMap<String, GraphCluster>;

impl GraphCluster {
    pub fn new(name: impl Into<String>, id: ClusterId) -> Self {
        Self {
            id,
            name: name.into(),
            members: Vec::new(),
            attrs: Map::new(),
        }
    }

    /// The seeded "unknown" cluster
    pub fn default_cluster() -> Self {
        Self::new(DEFAULT_CLUSTER, DEFAULT_CLUSTER_ID)
    }

    /// Build a declared cluster. The allocated `id` always wins; a declared
    /// `members` list of strings seeds the membership.
    pub fn from_declaration(declared: &GermiculeCluster, id: ClusterId) -> Self {
        let mut attrs = declared.attrs.clone();
        let members = match attrs.get("members") {
            Some(Value::Array(values)) => values
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect(),
            _ => Vec::new(),
        };
        attrs.retain(|key, _| !RESERVED_KEYS.contains(&key.as_str()));

        Self {
            members,
            attrs,
            ..Self::new(declared.name.clone(), id)
        }
    }
}
