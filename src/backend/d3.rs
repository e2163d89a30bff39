//! Node-link graph shape: nodes with an id and a group

use crate::backend::{Backend, UnknownCounter, EMPTY_TOOLTIP, UNKNOWN_LABEL};
use crate::cluster::{ClusterId, DEFAULT_CLUSTER_ID};
use crate::data::GermiculeItem;
use crate::graph::{GraphInfo, PartialEdge};
use crate::theme::Theme;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct D3Node {
    pub id: String,

    #[serde(rename = "_label", skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    #[serde(rename = "_tooltip", skip_serializing_if = "Option::is_none")]
    pub tooltip: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,

    /// Cluster id
    pub group: ClusterId,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct D3EdgeAttrs {
    #[serde(rename = "_label", skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    #[serde(rename = "_tooltip", skip_serializing_if = "Option::is_none")]
    pub tooltip: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
}

pub type D3GraphInfo = GraphInfo<D3Node, D3EdgeAttrs>;

#[derive(Debug, Clone, Default)]
pub struct D3Backend {
    theme: Theme,
    unknowns: UnknownCounter,
}

impl D3Backend {
    pub fn new(theme: Theme) -> Self {
        Self {
            theme,
            unknowns: UnknownCounter::new(),
        }
    }
}

impl Backend for D3Backend {
    type Node = D3Node;
    type EdgeAttrs = D3EdgeAttrs;

    fn theme(&self) -> &Theme {
        &self.theme
    }

    fn default_node(&self) -> D3Node {
        D3Node {
            id: UNKNOWN_LABEL.to_string(),
            label: None,
            tooltip: None,
            value: None,
            group: DEFAULT_CLUSTER_ID,
        }
    }

    fn empty_node(&self) -> D3Node {
        D3Node {
            tooltip: Some(EMPTY_TOOLTIP.to_string()),
            ..self.default_node()
        }
    }

    fn to_node(&mut self, item: &GermiculeItem) -> D3Node {
        let node = match item {
            GermiculeItem::Node(node) => node,
            GermiculeItem::Null => {
                // the id doubles as identity, so it must be unique too
                let name = self.unknowns.next_name();
                return D3Node {
                    id: name.clone(),
                    label: Some(name),
                    ..self.default_node()
                };
            }
            GermiculeItem::Link(_) => return self.default_node(),
        };

        let mut result = D3Node {
            id: node.name.clone(),
            label: Some(node.name.clone()),
            ..self.default_node()
        };

        match node.risk {
            Some(risk) if self.is_valid_risk(risk) => {
                result.value = Some(risk);
                result.tooltip = Some(risk.to_string());
            }
            Some(risk) => log::warn!("Risk {} of {:?} has no palette level", risk, node.name),
            None => {}
        }

        result
    }

    fn to_partial_edge(&self, item: &GermiculeItem, target: &str) -> PartialEdge<D3EdgeAttrs> {
        let description = item.description().map(str::to_string);

        PartialEdge::new(
            target,
            D3EdgeAttrs {
                label: description.clone(),
                tooltip: description,
                value: item.contact(),
            },
        )
    }

    fn default_cluster_edge(&self) -> D3EdgeAttrs {
        D3EdgeAttrs::default()
    }

    fn node_identifier<'n>(&self, node: &'n D3Node) -> &'n str {
        &node.id
    }

    fn set_node_cluster_id(&self, node: &mut D3Node, cluster_id: ClusterId) {
        node.group = cluster_id;
    }
}
