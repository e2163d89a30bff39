//! Cluster id allocation

use crate::cluster::{ClusterId, DEFAULT_CLUSTER, DEFAULT_CLUSTER_ID};
use std::collections::HashMap;

/// Assigns ids to cluster names in first-seen order.
///
/// The default cluster owns id 0, every other name gets the next free id
/// starting at 1. Numbering carries over between translations that share
/// the same registry.
#[derive(Debug, Clone)]
pub struct ClusterRegistry {
    /// Cluster name -> assigned id
    seen: HashMap<String, ClusterId>,

    /// Next id to hand out
    next_id: ClusterId,
}

impl Default for ClusterRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ClusterRegistry {
    pub fn new() -> Self {
        let mut seen = HashMap::new();
        seen.insert(DEFAULT_CLUSTER.to_string(), DEFAULT_CLUSTER_ID);

        Self {
            seen,
            next_id: DEFAULT_CLUSTER_ID + 1,
        }
    }

    /// Get or allocate the id for `name`
    pub fn cluster_id(&mut self, name: &str) -> ClusterId {
        if let Some(&id) = self.seen.get(name) {
            return id;
        }

        let id = self.next_id;
        self.next_id += 1;
        self.seen.insert(name.to_string(), id);
        log::debug!("Assigned cluster id {} to {:?}", id, name);

        id
    }

    pub fn get(&self, name: &str) -> Option<ClusterId> {
        self.seen.get(name).copied()
    }

    /// Number of known clusters, the default one included
    pub fn len(&self) -> usize {
        self.seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_cluster_is_reserved() {
        let mut registry = ClusterRegistry::new();
        assert_eq!(registry.cluster_id("unknown"), 0);
        assert_eq!(registry.cluster_id("colors"), 1);
    }

    #[test]
    fn ids_follow_first_sight() {
        let mut registry = ClusterRegistry::new();
        assert_eq!(registry.cluster_id("colors"), 1);
        assert_eq!(registry.cluster_id("flags"), 2);
        assert_eq!(registry.cluster_id("colors"), 1);
        assert_eq!(registry.cluster_id("shapes"), 3);
        assert_eq!(registry.get("flags"), Some(2));
        assert_eq!(registry.get("animals"), None);
        assert_eq!(registry.len(), 4);
    }
}
