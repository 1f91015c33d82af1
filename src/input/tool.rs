//! Freehand drawing tools.
//!
//! A tool's only job is to configure the canvas brush: switch the engine into
//! free-drawing mode and set width, color and cursor for the strokes that
//! follow. Tools differ in how they derive the color (opaque vs translucent)
//! and which cursor they show.

use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;
use log::debug;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::cursor::cursor_css;
use crate::draw::{BrushCanvas, ColorError, resolve_translucent};

/// Brush parameters chosen by the UI for the active tool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DrawingToolConfig {
    /// Stroke width in pixels (must be positive)
    pub line_width: f64,
    /// Hex code (`#RGB`/`#RRGGBB`) or palette color name
    pub line_color: String,
}

impl DrawingToolConfig {
    pub fn new(line_width: f64, line_color: impl Into<String>) -> Self {
        Self {
            line_width,
            line_color: line_color.into(),
        }
    }
}

/// Errors raised while configuring a tool. The canvas is left untouched.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ToolError {
    #[error(transparent)]
    Color(#[from] ColorError),

    #[error("line width must be a positive number, got {0}")]
    InvalidLineWidth(f64),
}

/// Behaviour shared by every drawing tool.
pub trait DrawingTool {
    /// Fixed identity used to select the tool's cursor, e.g. `"Pencil"`.
    fn identity(&self) -> &'static str;

    /// Applies this tool's brush settings to `canvas`.
    ///
    /// All derivation happens before the first write, so on error the canvas
    /// keeps its previous brush.
    fn configure(
        &self,
        canvas: &mut dyn BrushCanvas,
        config: &DrawingToolConfig,
    ) -> Result<(), ToolError>;
}

/// Opaque freehand pen. The color is passed through unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct Pencil;

/// Translucent marker. Colors are converted to `rgba(..., 0.4)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Highlighter;

fn checked_width(config: &DrawingToolConfig) -> Result<f64, ToolError> {
    let width = config.line_width;
    if width.is_finite() && width > 0.0 {
        Ok(width)
    } else {
        Err(ToolError::InvalidLineWidth(width))
    }
}

fn apply(canvas: &mut dyn BrushCanvas, width: f64, color: String, cursor: String) {
    canvas.set_drawing_mode(true);
    canvas.set_brush_width(width);
    canvas.set_brush_color(color);
    canvas.set_cursor(cursor);
}

impl DrawingTool for Pencil {
    fn identity(&self) -> &'static str {
        "Pencil"
    }

    fn configure(
        &self,
        canvas: &mut dyn BrushCanvas,
        config: &DrawingToolConfig,
    ) -> Result<(), ToolError> {
        let width = checked_width(config)?;
        let cursor = cursor_css(self.identity());

        debug!("Pencil brush: width {:.1}, color {}", width, config.line_color);
        apply(canvas, width, config.line_color.clone(), cursor);
        Ok(())
    }
}

impl DrawingTool for Highlighter {
    fn identity(&self) -> &'static str {
        "Highlighter"
    }

    fn configure(
        &self,
        canvas: &mut dyn BrushCanvas,
        config: &DrawingToolConfig,
    ) -> Result<(), ToolError> {
        let width = checked_width(config)?;
        let color = resolve_translucent(&config.line_color)?;
        let cursor = cursor_css(self.identity());

        debug!("Highlighter brush: width {:.1}, color {}", width, color);
        apply(canvas, width, color, cursor);
        Ok(())
    }
}

/// Drawing tool selection.
///
/// The closed set of tools a UI can activate. New tools are added as a new
/// variant plus a [`DrawingTool`] implementation.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema, ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Tool {
    /// Opaque freehand pen (default)
    #[default]
    #[serde(alias = "Pencil", alias = "PENCIL")]
    Pencil,
    /// Translucent freehand marker
    #[serde(alias = "Highlighter", alias = "HIGHLIGHTER")]
    Highlighter,
}

impl Tool {
    pub const ALL: [Tool; 2] = [Tool::Pencil, Tool::Highlighter];

    fn as_drawing_tool(self) -> &'static dyn DrawingTool {
        match self {
            Tool::Pencil => &Pencil,
            Tool::Highlighter => &Highlighter,
        }
    }
}

impl DrawingTool for Tool {
    fn identity(&self) -> &'static str {
        self.as_drawing_tool().identity()
    }

    fn configure(
        &self,
        canvas: &mut dyn BrushCanvas,
        config: &DrawingToolConfig,
    ) -> Result<(), ToolError> {
        self.as_drawing_tool().configure(canvas, config)
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.identity())
    }
}

impl FromStr for Tool {
    type Err = String;

    /// Accepts the tool identity in any case (`"Pencil"`, `"highlighter"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tool::ALL
            .into_iter()
            .find(|tool| tool.identity().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown tool '{s}'"))
    }
}
