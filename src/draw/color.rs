//! Color parsing and translucency derivation.
//!
//! Colors arrive from the UI layer as strings: either a hex code (`#RGB` or
//! `#RRGGBB`) or a CSS-style color name. This module turns those descriptors
//! into a typed [`Color`] and renders them back into the two wire formats the
//! canvas engine accepts: canonical hex and `rgba(...)`.

use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

use super::names;

/// Alpha applied to every translucent (highlighter) color.
pub const TRANSLUCENT_ALPHA: f64 = 0.4;

static HEX_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#([A-Fa-f0-9]{3}){1,2}$").expect("hex color pattern is valid")
});

/// Errors produced while resolving a color descriptor.
///
/// Both failure modes are surfaced through this one type so callers can treat
/// a malformed hex code and an unknown name the same way.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    #[error("invalid color format: '{0}'")]
    InvalidFormat(String),

    #[error("unknown color name: '{0}'")]
    NotFound(String),
}

/// An RGB color with a floating-point alpha channel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    /// Alpha/transparency (0.0 = fully transparent, 1.0 = fully opaque)
    pub a: f64,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Parses a `#RGB` or `#RRGGBB` hex code into an opaque color.
    ///
    /// Three-digit codes are expanded by doubling each digit, so `#fa0` is
    /// read as `#ffaa00`.
    ///
    /// # Errors
    /// Returns [`ColorError::InvalidFormat`] if `hex` does not match
    /// `^#([A-Fa-f0-9]{3}){1,2}$`.
    pub fn from_hex(hex: &str) -> Result<Self, ColorError> {
        if !HEX_PATTERN.is_match(hex) {
            return Err(ColorError::InvalidFormat(hex.to_string()));
        }

        let digits = &hex[1..];
        let expanded: String = if digits.len() == 3 {
            digits.chars().flat_map(|c| [c, c]).collect()
        } else {
            digits.to_string()
        };

        // The pattern guarantees six hex digits at this point.
        let value = u32::from_str_radix(&expanded, 16)
            .map_err(|_| ColorError::InvalidFormat(hex.to_string()))?;

        Ok(Self::rgb(
            ((value >> 16) & 0xff) as u8,
            ((value >> 8) & 0xff) as u8,
            (value & 0xff) as u8,
        ))
    }

    /// Returns the same color with a different alpha.
    pub fn with_alpha(self, a: f64) -> Self {
        Self { a, ..self }
    }

    /// Canonical `#rrggbb` form (lowercase, alpha dropped).
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// `rgba(R,G,B,A)` form with no spaces, as accepted by canvas engines.
    pub fn to_rgba_string(&self) -> String {
        format!("rgba({},{},{},{})", self.r, self.g, self.b, self.a)
    }
}

/// Converts a hex code into its translucent `rgba(R,G,B,0.4)` form.
///
/// # Examples
///
/// ```
/// use inkboard::draw::color::hex_to_translucent_rgba;
/// assert_eq!(hex_to_translucent_rgba("#fff").unwrap(), "rgba(255,255,255,0.4)");
/// ```
pub fn hex_to_translucent_rgba(hex: &str) -> Result<String, ColorError> {
    Color::from_hex(hex).map(|color| color.with_alpha(TRANSLUCENT_ALPHA).to_rgba_string())
}

/// Looks up a color name (case-insensitive) and returns its hex code.
///
/// # Errors
/// Returns [`ColorError::NotFound`] if the name is not in the palette.
pub fn name_to_hex(name: &str) -> Result<&'static str, ColorError> {
    names::lookup(name).ok_or_else(|| ColorError::NotFound(name.to_string()))
}

/// Resolves any descriptor (hex or name) to a typed opaque color.
///
/// Descriptors starting with `#` are parsed as hex; everything else goes
/// through the name table first.
pub fn resolve(descriptor: &str) -> Result<Color, ColorError> {
    if descriptor.starts_with('#') {
        Color::from_hex(descriptor)
    } else {
        Color::from_hex(name_to_hex(descriptor)?)
    }
}

/// Resolves a descriptor to canonical `#rrggbb` hex.
pub fn resolve_hex(descriptor: &str) -> Result<String, ColorError> {
    resolve(descriptor).map(|color| color.to_hex())
}

/// Resolves a descriptor to its translucent `rgba(...)` form.
pub fn resolve_translucent(descriptor: &str) -> Result<String, ColorError> {
    if descriptor.starts_with('#') {
        hex_to_translucent_rgba(descriptor)
    } else {
        hex_to_translucent_rgba(name_to_hex(descriptor)?)
    }
}
