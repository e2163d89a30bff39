//! Force-directed graph shape: named nodes sized and colored by risk

use crate::backend::{Backend, UnknownCounter, EMPTY_TOOLTIP, UNKNOWN_LABEL};
use crate::cluster::{ClusterId, DEFAULT_CLUSTER_ID};
use crate::data::GermiculeItem;
use crate::graph::{GraphInfo, PartialEdge};
use crate::theme::Theme;
use serde::Serialize;

/// Base node size used when none is configured
pub const DEFAULT_SYMBOL_SIZE: f64 = 30.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemStyle {
    pub color: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LineType {
    Solid,
    None,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineStyle {
    #[serde(rename = "type")]
    pub kind: LineType,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LabelStyle {
    pub show: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EChartNode {
    pub name: String,

    #[serde(rename = "_label", skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    #[serde(rename = "_tooltip", skip_serializing_if = "Option::is_none")]
    pub tooltip: Option<String>,

    /// Risk, when it was encoded
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,

    pub symbol_size: f64,

    /// Cluster id
    pub category: ClusterId,

    pub item_style: ItemStyle,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EChartEdgeAttrs {
    pub line_style: LineStyle,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<LabelStyle>,

    #[serde(rename = "_label", skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    #[serde(rename = "_tooltip", skip_serializing_if = "Option::is_none")]
    pub tooltip: Option<String>,

    /// Contact weight
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
}

impl Default for EChartEdgeAttrs {
    fn default() -> Self {
        Self {
            line_style: LineStyle {
                kind: LineType::Solid,
            },
            label: None,
            text: None,
            tooltip: None,
            value: None,
        }
    }
}

pub type EChartGraphInfo = GraphInfo<EChartNode, EChartEdgeAttrs>;

#[derive(Debug, Clone)]
pub struct EChartBackend {
    theme: Theme,
    symbol_size: f64,
    unknowns: UnknownCounter,
}

impl Default for EChartBackend {
    fn default() -> Self {
        Self::new(Theme::default(), DEFAULT_SYMBOL_SIZE)
    }
}

impl EChartBackend {
    pub fn new(theme: Theme, symbol_size: f64) -> Self {
        Self {
            theme,
            symbol_size,
            unknowns: UnknownCounter::new(),
        }
    }

    /// Lower risk draws a bigger node, the top level draws at base size
    fn risk_size(&self, risk: f64) -> f64 {
        let max = self.theme.max_level();
        if max <= 0.0 {
            return self.symbol_size;
        }
        self.symbol_size * (1.0 + (max - risk) / max)
    }
}

impl Backend for EChartBackend {
    type Node = EChartNode;
    type EdgeAttrs = EChartEdgeAttrs;

    fn theme(&self) -> &Theme {
        &self.theme
    }

    fn default_node(&self) -> EChartNode {
        EChartNode {
            name: UNKNOWN_LABEL.to_string(),
            label: Some(UNKNOWN_LABEL.to_string()),
            tooltip: None,
            value: None,
            symbol_size: self.symbol_size,
            category: DEFAULT_CLUSTER_ID,
            item_style: ItemStyle {
                color: self.theme.background.clone(),
            },
        }
    }

    fn empty_node(&self) -> EChartNode {
        EChartNode {
            tooltip: Some(EMPTY_TOOLTIP.to_string()),
            ..self.default_node()
        }
    }

    fn to_node(&mut self, item: &GermiculeItem) -> EChartNode {
        let node = match item {
            GermiculeItem::Node(node) => node,
            GermiculeItem::Null => {
                return EChartNode {
                    name: self.unknowns.next_name(),
                    ..self.default_node()
                };
            }
            GermiculeItem::Link(_) => return self.default_node(),
        };

        let mut result = EChartNode {
            name: node.name.clone(),
            label: Some(node.name.clone()),
            ..self.default_node()
        };

        if let Some(risk) = node.risk {
            if let Some(color) = self.theme.risk_color(risk) {
                result.value = Some(risk);
                result.tooltip = Some(risk.to_string());
                result.symbol_size = self.risk_size(risk);
                result.item_style.color = color.to_string();
            } else {
                log::warn!("Risk {} of {:?} has no palette level", risk, node.name);
            }
        }

        result
    }

    fn to_partial_edge(&self, item: &GermiculeItem, target: &str) -> PartialEdge<EChartEdgeAttrs> {
        let mut attrs = EChartEdgeAttrs::default();

        match item.description() {
            Some(description) => {
                attrs.text = Some(description.to_string());
                attrs.tooltip = Some(description.to_string());
            }
            None => attrs.label = Some(LabelStyle { show: false }),
        }

        attrs.value = item.contact();

        PartialEdge::new(target, attrs)
    }

    fn default_cluster_edge(&self) -> EChartEdgeAttrs {
        EChartEdgeAttrs {
            line_style: LineStyle {
                kind: LineType::None,
            },
            label: Some(LabelStyle { show: false }),
            ..Default::default()
        }
    }

    fn node_identifier<'n>(&self, node: &'n EChartNode) -> &'n str {
        &node.name
    }

    fn set_node_cluster_id(&self, node: &mut EChartNode, cluster_id: ClusterId) {
        node.category = cluster_id;
    }
}
