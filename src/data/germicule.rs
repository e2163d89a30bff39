//! Input model of a germicule tree

use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

/// A member that may be missing from its sibling list. `None` entries are skipped.
pub type Member = Option<GermiculeItem>;

/// One entry of a germicule member list
#[derive(Debug, Clone, PartialEq)]
pub enum GermiculeItem {
    /// A named entity, producing exactly one node
    Node(GermiculeNode),

    /// An edge towards an existing identity, producing no node
    Link(GermiculeLink),

    /// A placeholder rendered as an anonymous "unknown N" node
    Null,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct GermiculeNode {
    pub name: String,

    #[serde(default)]
    pub risk: Option<f64>,

    /// Weight of the edge from the parent to this node
    #[serde(default)]
    pub contact: Option<f64>,

    /// Label of the edge from the parent to this node
    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub cluster: Option<String>,

    #[serde(default, deserialize_with = "deserialize_members")]
    pub germicule: Option<Vec<Member>>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GermiculeLink {
    pub link: String,

    #[serde(default)]
    pub description: Option<String>,
}

/// A cluster declared ahead of the tree, with free-form display attributes
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GermiculeCluster {
    pub name: String,

    #[serde(flatten)]
    pub attrs: Map<String, Value>,
}

/// Top-level input
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct GermiculeMeta {
    #[serde(default, deserialize_with = "deserialize_members")]
    pub germicules: Option<Vec<Member>>,

    #[serde(default)]
    pub clusters: Option<Vec<GermiculeCluster>>,
}

impl GermiculeItem {
    pub fn node(name: impl Into<String>) -> Self {
        GermiculeItem::Node(GermiculeNode {
            name: name.into(),
            ..Default::default()
        })
    }

    pub fn link(target: impl Into<String>) -> Self {
        GermiculeItem::Link(GermiculeLink {
            link: target.into(),
            description: None,
        })
    }

    pub fn description(&self) -> Option<&str> {
        match self {
            GermiculeItem::Node(node) => node.description.as_deref(),
            GermiculeItem::Link(link) => link.description.as_deref(),
            GermiculeItem::Null => None,
        }
    }

    pub fn contact(&self) -> Option<f64> {
        match self {
            GermiculeItem::Node(node) => node.contact,
            _ => None,
        }
    }

    pub fn cluster(&self) -> Option<&str> {
        match self {
            GermiculeItem::Node(node) => node.cluster.as_deref(),
            _ => None,
        }
    }

    pub fn children(&self) -> Option<&[Member]> {
        match self {
            GermiculeItem::Node(node) => node.germicule.as_deref(),
            _ => None,
        }
    }
}

impl GermiculeMeta {
    pub fn new(germicules: Vec<GermiculeItem>) -> Self {
        Self {
            germicules: Some(germicules.into_iter().map(Some).collect()),
            clusters: None,
        }
    }

    pub fn with_clusters(mut self, clusters: Vec<GermiculeCluster>) -> Self {
        self.clusters = Some(clusters);
        self
    }

    /// True when there is nothing to flatten
    pub fn is_empty(&self) -> bool {
        self.germicules.as_ref().map_or(true, Vec::is_empty)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawItem {
    Link(GermiculeLink),
    Node(GermiculeNode),
}

impl<'de> Deserialize<'de> for GermiculeItem {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // `null` is the placeholder, `link` wins over the node shape
        Ok(match Option::<RawItem>::deserialize(deserializer)? {
            None => GermiculeItem::Null,
            Some(RawItem::Link(link)) => GermiculeItem::Link(link),
            Some(RawItem::Node(node)) => GermiculeItem::Node(node),
        })
    }
}

/// Every deserialized entry is present; absence only arises when built in code
fn deserialize_members<'de, D>(deserializer: D) -> Result<Option<Vec<Member>>, D::Error>
where
    D: Deserializer<'de>,
{
    let items = Option::<Vec<GermiculeItem>>::deserialize(deserializer)?;
    Ok(items.map(|items| items.into_iter().map(Some).collect()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn null_entries_become_placeholders() {
        let meta: GermiculeMeta = serde_json::from_value(json!({ "germicules": [null] })).unwrap();
        assert_eq!(meta.germicules, Some(vec![Some(GermiculeItem::Null)]));
    }

    #[test]
    fn link_is_detected_before_node() {
        let item: GermiculeItem =
            serde_json::from_value(json!({ "link": "🌞", "description": "best buds" })).unwrap();
        assert_eq!(item.description(), Some("best buds"));
        assert!(matches!(item, GermiculeItem::Link(ref l) if l.link == "🌞"));
    }

    #[test]
    fn nested_nodes_keep_their_fields() {
        let item: GermiculeItem = serde_json::from_value(json!({
            "name": "🌞",
            "risk": 3,
            "cluster": "stars",
            "germicule": [{ "name": "🌏", "risk": 2, "contact": 5, "description": "planet" }]
        }))
        .unwrap();

        let GermiculeItem::Node(node) = &item else {
            panic!("expected a node, got {item:?}");
        };
        assert_eq!(node.risk, Some(3.0));
        assert_eq!(item.cluster(), Some("stars"));

        let children = item.children().unwrap();
        assert_eq!(children.len(), 1);
        let child = children[0].as_ref().unwrap();
        assert_eq!(child.contact(), Some(5.0));
        assert_eq!(child.description(), Some("planet"));
    }

    #[test]
    fn declared_clusters_keep_display_attributes() {
        let meta: GermiculeMeta = serde_json::from_value(json!({
            "germicules": [],
            "clusters": [{ "name": "colors", "itemStyle": { "color": "#ff0000" } }]
        }))
        .unwrap();

        let clusters = meta.clusters.unwrap();
        assert_eq!(clusters[0].name, "colors");
        assert_eq!(clusters[0].attrs["itemStyle"]["color"], "#ff0000");
    }

    #[test]
    fn missing_germicules_is_empty() {
        let meta: GermiculeMeta = serde_json::from_value(json!({})).unwrap();
        assert!(meta.is_empty());
        assert!(GermiculeMeta::new(vec![]).is_empty());
        assert!(!GermiculeMeta::new(vec![GermiculeItem::Null]).is_empty());
    }
}
