//! Germicule input model and loading

pub mod germicule;
pub mod loader;

pub use germicule::{GermiculeCluster, GermiculeItem, GermiculeLink, GermiculeMeta, GermiculeNode, Member};
pub use loader::{load_meta, parse_meta};
