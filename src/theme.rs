//! Risk palette and background color used to encode nodes

use crate::error::{GermiculeError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Background color of the default theme (Solarized base3)
pub const DEFAULT_BACKGROUND: &str = "#fdf6e3";

/// Color lookup table for risk levels
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    /// Color of nodes without a usable risk
    pub background: String,

    /// Risk level -> color
    pub risks: BTreeMap<u32, String>,
}

impl Default for Theme {
    fn default() -> Self {
        let risks = [
            (0, "#859900"), // green
            (1, "#2aa198"), // cyan
            (2, "#268bd2"), // blue
            (3, "#6c71c4"), // violet
            (4, "#d33682"), // magenta
            (5, "#dc322f"), // red
        ]
        .into_iter()
        .map(|(level, color)| (level, color.to_string()))
        .collect();

        Self {
            background: DEFAULT_BACKGROUND.to_string(),
            risks,
        }
    }
}

impl Theme {
    /// Create a theme from a background color and an ordered list of risk colors
    pub fn new(background: impl Into<String>, risks: Vec<String>) -> Result<Self> {
        let theme = Self {
            background: background.into(),
            risks: risks
                .into_iter()
                .enumerate()
                .map(|(level, color)| (level as u32, color))
                .collect(),
        };
        theme.validate()?;
        Ok(theme)
    }

    /// Load a theme from a JSON file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(GermiculeError::FileNotFound {
                path: path.display().to_string(),
            });
        }

        log::info!("Reading theme file: {}", path.display());
        let text = std::fs::read_to_string(path)?;
        let theme: Theme = serde_json::from_str(&text)?;
        theme.validate()?;
        Ok(theme)
    }

    pub fn validate(&self) -> Result<()> {
        if self.risks.is_empty() {
            return Err(GermiculeError::InvalidTheme {
                message: "at least one risk level is required".to_string(),
            });
        }
        Ok(())
    }

    /// Number of palette levels
    pub fn levels(&self) -> usize {
        self.risks.len()
    }

    /// Highest risk level that still gets an encoding
    pub fn max_level(&self) -> f64 {
        self.levels().saturating_sub(1) as f64
    }

    /// A risk is encodable when `0 <= ceil(risk) < levels`
    pub fn is_valid_risk(&self, risk: f64) -> bool {
        if !risk.is_finite() {
            return false;
        }
        let level = risk.ceil();
        level >= 0.0 && level < self.levels() as f64
    }

    /// Palette color for `ceil(risk)`, if the risk is valid and the level is mapped
    pub fn risk_color(&self, risk: f64) -> Option<&str> {
        if !self.is_valid_risk(risk) {
            return None;
        }
        self.risks.get(&(risk.ceil() as u32)).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_theme_has_six_levels() {
        let theme = Theme::default();
        assert_eq!(theme.levels(), 6);
        assert_eq!(theme.max_level(), 5.0);
        assert_eq!(theme.background, "#fdf6e3");
    }

    #[test]
    fn risk_validity_uses_ceiling() {
        let theme = Theme::default();
        assert!(theme.is_valid_risk(0.0));
        assert!(theme.is_valid_risk(4.2));
        assert!(theme.is_valid_risk(5.0));
        assert!(!theme.is_valid_risk(5.1));
        assert!(!theme.is_valid_risk(-1.5));
        assert!(!theme.is_valid_risk(f64::NAN));
    }

    #[test]
    fn risk_color_picks_ceiling_level() {
        let theme = Theme::default();
        assert_eq!(theme.risk_color(2.3), Some("#6c71c4"));
        assert_eq!(theme.risk_color(5.0), Some("#dc322f"));
        assert_eq!(theme.risk_color(9.0), None);
    }

    #[test]
    fn empty_palette_is_rejected() {
        let err = Theme::new("#000000", vec![]).unwrap_err();
        assert!(matches!(err, GermiculeError::InvalidTheme { .. }));
    }

    #[test]
    fn theme_parses_string_keys() {
        let theme: Theme =
            serde_json::from_str(r##"{"background": "#000", "risks": {"0": "#111", "1": "#222"}}"##)
                .unwrap();
        assert_eq!(theme.levels(), 2);
        assert_eq!(theme.risk_color(0.5), Some("#222"));
    }
}
