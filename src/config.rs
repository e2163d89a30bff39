//! Configuration management for the germicule translator

use crate::backend::echart::DEFAULT_SYMBOL_SIZE;
use crate::backend::BackendKind;
use crate::error::Result;
use crate::theme::Theme;
use std::path::Path;

/// Default configuration for a translation
#[derive(Debug, Clone)]
pub struct Config {
    /// Output shape
    pub backend: BackendKind,

    /// Base node size (EChart only)
    pub symbol_size: f64,

    /// Risk palette and background
    pub theme: Theme,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            backend: BackendKind::default(),
            symbol_size: DEFAULT_SYMBOL_SIZE,
            theme: Theme::default(),
        }
    }
}

impl Config {
    /// Create a new configuration with custom values
    pub fn new(backend: BackendKind, symbol_size: f64, theme: Theme) -> Self {
        Self {
            backend,
            symbol_size,
            theme,
        }
    }

    /// Build a configuration from raw option values, as given on a command line
    pub fn from_options(backend: &str, symbol_size: Option<f64>, theme_path: Option<&Path>) -> Result<Self> {
        let backend = backend.parse()?;
        let theme = match theme_path {
            Some(path) => Theme::from_path(path)?,
            None => Theme::default(),
        };

        Ok(Self::new(backend, symbol_size.unwrap_or(DEFAULT_SYMBOL_SIZE), theme))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GermiculeError;
    use std::io::Write;

    #[test]
    fn defaults_match_echart_conventions() {
        let config = Config::default();
        assert_eq!(config.backend, BackendKind::EChart);
        assert_eq!(config.symbol_size, 30.0);
        assert_eq!(config.theme, Theme::default());
    }

    #[test]
    fn options_are_validated() {
        let err = Config::from_options("svg", None, None).unwrap_err();
        assert!(matches!(err, GermiculeError::UnsupportedBackend { .. }));

        let config = Config::from_options("d3", Some(12.0), None).unwrap();
        assert_eq!(config.backend, BackendKind::D3);
        assert_eq!(config.symbol_size, 12.0);
    }

    #[test]
    fn theme_is_loaded_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r##"{{"background": "#002b36", "risks": {{"0": "#859900"}}}}"##).unwrap();

        let config = Config::from_options("echart", None, Some(file.path())).unwrap();
        assert_eq!(config.theme.background, "#002b36");
        assert_eq!(config.theme.levels(), 1);
    }
}
