//! Tool selection and brush configuration.
//!
//! The UI picks a [`Tool`] and hands it a [`DrawingToolConfig`]; the tool
//! resolves color and cursor and writes them into the canvas brush.

pub mod tool;


pub use tool::{DrawingTool, DrawingToolConfig, Highlighter, Pencil, Tool, ToolError};
