//! Output shapes for rendering back-ends
//!
//! A [`Backend`] decides how a germicule becomes a node or an edge fragment
//! for one renderer. The translation pass only talks to this trait, so a new
//! output format is a new implementation and nothing else.

pub mod d3;
pub mod echart;

pub use d3::{D3Backend, D3EdgeAttrs, D3Node};
pub use echart::{EChartBackend, EChartEdgeAttrs, EChartNode};

use crate::cluster::ClusterId;
use crate::data::GermiculeItem;
use crate::error::GermiculeError;
use crate::graph::PartialEdge;
use crate::theme::Theme;
use std::fmt;
use std::str::FromStr;

/// Identity of the placeholder node
pub const UNKNOWN_LABEL: &str = "❓";

/// Tooltip of the node produced for an empty germicule
pub const EMPTY_TOOLTIP: &str = "your germicule is empty";

/// Capabilities a rendering back-end provides to the translation pass
pub trait Backend {
    type Node;
    type EdgeAttrs;

    fn theme(&self) -> &Theme;

    /// The "unknown" placeholder node, in cluster 0
    fn default_node(&self) -> Self::Node;

    /// The node shown when there is nothing to translate
    fn empty_node(&self) -> Self::Node;

    /// Build the node for a `Node` or `Null` entry. Links never reach here.
    fn to_node(&mut self, item: &GermiculeItem) -> Self::Node;

    /// Edge fragment pointing at `target`, labelled and weighted from `item`
    fn to_partial_edge(&self, item: &GermiculeItem, target: &str) -> PartialEdge<Self::EdgeAttrs>;

    /// Attributes of the membership edges drawn inside a cluster
    fn default_cluster_edge(&self) -> Self::EdgeAttrs;

    fn node_identifier<'n>(&self, node: &'n Self::Node) -> &'n str;

    fn set_node_cluster_id(&self, node: &mut Self::Node, cluster_id: ClusterId);

    fn is_valid_risk(&self, risk: f64) -> bool {
        self.theme().is_valid_risk(risk)
    }
}

/// Source of the "unknown N" placeholder names
#[derive(Debug, Clone, Default)]
pub struct UnknownCounter {
    next: u64,
}

impl UnknownCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Next placeholder name, `"unknown 0"` first
    pub fn next_name(&mut self) -> String {
        let name = format!("unknown {}", self.next);
        self.next += 1;
        name
    }
}

/// Back-ends selectable at runtime
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BackendKind {
    /// Force-directed layout with sized and colored nodes
    #[default]
    EChart,

    /// Plain node-link layout with id and group
    D3,
}

impl FromStr for BackendKind {
    type Err = GermiculeError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name.to_ascii_lowercase().as_str() {
            "echart" | "echarts" => Ok(BackendKind::EChart),
            "d3" => Ok(BackendKind::D3),
            _ => Err(GermiculeError::UnsupportedBackend {
                name: name.to_string(),
            }),
        }
    }
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BackendKind::EChart => write!(f, "echart"),
            BackendKind::D3 => write!(f, "d3"),
        }
    }
}
