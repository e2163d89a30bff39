//! Core library functions for the germicule graph translator

pub mod backend;
pub mod cluster;
pub mod config;
pub mod data;
pub mod error;
pub mod graph;
pub mod output;
pub mod theme;
pub mod translator;

pub use backend::{Backend, BackendKind, D3Backend, EChartBackend};
pub use config::Config;
pub use data::{GermiculeItem, GermiculeMeta};
pub use error::{GermiculeError, Result};
pub use graph::{GraphInfo, GraphSummary};
pub use theme::Theme;
pub use translator::{translate_with, Translation, Translator};
