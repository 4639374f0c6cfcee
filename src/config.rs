//! Render configuration
//!
//! Fixed for the lifetime of a display. Deserializable so table documents
//! can carry it, e.g.:
//!
//! ```json
//! {"padding": 2, "even_column_widths": true, "border": "double",
//!  "default_foreground": "White"}
//! ```

use serde::Deserialize;

use crate::core::{BorderStyle, Color};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Extra columns added to every column width
    pub padding: usize,
    /// Give every column the widest column's width
    pub even_column_widths: bool,
    /// Give every row the tallest row's height
    pub even_row_heights: bool,
    pub border: BorderStyle,
    /// Background for cells without their own color (`None` = terminal default)
    pub default_background: Option<Color>,
    /// Foreground for cells without their own color (`None` = terminal default)
    pub default_foreground: Option<Color>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            padding: 0,
            even_column_widths: false,
            even_row_heights: false,
            border: BorderStyle::SINGLE,
            default_background: None,
            default_foreground: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults_from_empty_json() {
        let config: RenderConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, RenderConfig::default());
    }

    #[test]
    fn test_config_from_json() {
        let config: RenderConfig = serde_json::from_str(
            r#"{"padding": 2, "even_column_widths": true, "border": "double",
                "default_foreground": "BrightWhite"}"#,
        )
        .unwrap();
        assert_eq!(config.padding, 2);
        assert!(config.even_column_widths);
        assert!(!config.even_row_heights);
        assert_eq!(config.border, BorderStyle::DOUBLE);
        assert_eq!(config.default_foreground, Some(Color::BrightWhite));
        assert_eq!(config.default_background, None);
    }
}
