//! Configuration type definitions.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::input::{DrawingToolConfig, Tool};

/// Drawing-related settings.
///
/// Controls which tool is active and how its brush looks when the board
/// first opens. The UI can change these at runtime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct DrawingConfig {
    /// Tool selected on startup (`pencil` or `highlighter`)
    #[serde(default)]
    pub default_tool: Tool,

    /// Brush width in pixels (valid range: 1.0 - 50.0)
    #[serde(default = "default_line_width")]
    pub line_width: f64,

    /// Brush color: a hex code (`#RGB`, `#RRGGBB`) or a CSS color name
    /// such as `"tomato"`
    #[serde(default = "default_line_color")]
    pub line_color: String,
}

impl DrawingConfig {
    /// Brush parameters for the configured tool.
    pub fn tool_config(&self) -> DrawingToolConfig {
        DrawingToolConfig::new(self.line_width, self.line_color.clone())
    }
}

impl Default for DrawingConfig {
    fn default() -> Self {
        Self {
            default_tool: Tool::default(),
            line_width: default_line_width(),
            line_color: default_line_color(),
        }
    }
}

// =============================================================================
// Default value functions
// =============================================================================

pub(super) fn default_line_width() -> f64 {
    3.0
}

pub(super) fn default_line_color() -> String {
    "#000000".to_string()
}
