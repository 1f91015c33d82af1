//! Brush state of the canvas engine that tools configure.

use serde::Serialize;

/// Brush settings a drawing tool is allowed to change.
///
/// The canvas engine owns its brush; tools only ever write through this
/// interface and never read back. Any engine that can toggle free-drawing mode
/// and accept a width, a color string and a CSS cursor value can be driven by
/// the tools in [`crate::input::tool`].
pub trait BrushCanvas {
    fn set_drawing_mode(&mut self, enabled: bool);
    fn set_brush_width(&mut self, width: f64);
    /// Color as canonical hex or an `rgba(...)` string.
    fn set_brush_color(&mut self, color: String);
    /// CSS cursor value, e.g. `url(data:...) 0 52, crosshair`.
    fn set_cursor(&mut self, cursor: String);
}

/// Plain in-memory brush state.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BrushState {
    pub is_drawing_mode: bool,
    pub brush_width: f64,
    pub brush_color: String,
    pub cursor: String,
}

impl BrushCanvas for BrushState {
    fn set_drawing_mode(&mut self, enabled: bool) {
        self.is_drawing_mode = enabled;
    }

    fn set_brush_width(&mut self, width: f64) {
        self.brush_width = width;
    }

    fn set_brush_color(&mut self, color: String) {
        self.brush_color = color;
    }

    fn set_cursor(&mut self, cursor: String) {
        self.cursor = cursor;
    }
}
