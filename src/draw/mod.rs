//! Color handling and the brush surface tools draw with.
//!
//! - [`Color`]: typed RGBA color parsed from hex codes or palette names
//! - [`names`]: the static, case-insensitive named-color table
//! - [`BrushCanvas`]: the brush settings of an external canvas engine

pub mod canvas;
pub mod color;
pub mod names;

pub use canvas::{BrushCanvas, BrushState};
pub use color::{Color, ColorError, TRANSLUCENT_ALPHA};
pub use color::{hex_to_translucent_rgba, name_to_hex, resolve_hex, resolve_translucent};
