//! Freehand drawing tools for whiteboard canvases.
//!
//! A [`Tool`] configures the brush of an externally owned canvas engine
//! through the [`BrushCanvas`] trait. The supporting modules resolve colors
//! (hex codes and CSS names, opaque or translucent), tool cursors, and the
//! small geometry and identifier helpers stroke tracking relies on.

pub mod config;
pub mod cursor;
pub mod draw;
pub mod input;
pub mod util;

pub use config::Config;
pub use cursor::{CursorDescriptor, CursorProvider};
pub use draw::{BrushCanvas, BrushState, ColorError};
pub use input::{DrawingTool, DrawingToolConfig, Tool, ToolError};
