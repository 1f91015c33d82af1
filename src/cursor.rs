//! Tool cursors.
//!
//! Each drawing tool has an SVG cursor icon under `assets/cursors`, embedded
//! into the binary at compile time. Lookups turn the icon into a base64 data
//! URI and pair it with the tool's hotspot, ready to be handed to a canvas
//! engine as a CSS cursor value.

use base64::{Engine as _, engine::general_purpose::STANDARD};
use log::warn;
use rust_embed::RustEmbed;

/// CSS cursor keyword used when a tool has no custom icon, or when the
/// custom image cannot be rendered.
pub const FALLBACK_CURSOR: &str = "crosshair";

#[derive(RustEmbed)]
#[folder = "assets/cursors/"]
struct CursorIcons;

struct CursorSpec {
    identity: &'static str,
    file: &'static str,
    hotspot: (u32, u32),
}

const CURSORS: &[CursorSpec] = &[
    CursorSpec {
        identity: "Pencil",
        file: "pencil.svg",
        hotspot: (0, 52),
    },
    CursorSpec {
        identity: "Highlighter",
        file: "highlighter.svg",
        hotspot: (0, 36),
    },
];

/// A custom cursor: icon plus the pixel within it that tracks the pointer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CursorDescriptor {
    /// `data:image/svg+xml;base64,...` URI of the icon
    pub icon: String,
    pub hotspot_x: u32,
    pub hotspot_y: u32,
}

impl CursorDescriptor {
    /// CSS value in the form `url(<icon>) <x> <y>, crosshair`.
    pub fn css_value(&self) -> String {
        format!(
            "url({}) {} {}, {}",
            self.icon, self.hotspot_x, self.hotspot_y, FALLBACK_CURSOR
        )
    }
}

/// Resolves tool identities to their cursor descriptors.
pub struct CursorProvider;

impl CursorProvider {
    /// Returns the cursor for a tool identity such as `"Pencil"`.
    ///
    /// Unknown identities (and known ones whose icon is missing from the
    /// embedded assets) return `None`; callers fall back to
    /// [`FALLBACK_CURSOR`].
    pub fn get(identity: &str) -> Option<CursorDescriptor> {
        let spec = CURSORS.iter().find(|spec| spec.identity == identity)?;

        let Some(file) = CursorIcons::get(spec.file) else {
            warn!("Cursor icon '{}' for {} is not embedded", spec.file, identity);
            return None;
        };

        Some(CursorDescriptor {
            icon: format!("data:image/svg+xml;base64,{}", STANDARD.encode(&file.data)),
            hotspot_x: spec.hotspot.0,
            hotspot_y: spec.hotspot.1,
        })
    }

    /// Identities that have a custom cursor.
    pub fn identities() -> impl Iterator<Item = &'static str> {
        CURSORS.iter().map(|spec| spec.identity)
    }
}

/// CSS cursor value for `identity`, or [`FALLBACK_CURSOR`] if it has none.
pub fn cursor_css(identity: &str) -> String {
    CursorProvider::get(identity)
        .map(|descriptor| descriptor.css_value())
        .unwrap_or_else(|| FALLBACK_CURSOR.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::Engine as _;

    fn decoded_icon(descriptor: &CursorDescriptor) -> String {
        let payload = descriptor
            .icon
            .strip_prefix("data:image/svg+xml;base64,")
            .expect("data uri prefix");
        String::from_utf8(STANDARD.decode(payload).unwrap()).unwrap()
    }

    #[test]
    fn known_tools_have_fixed_hotspots() {
        let pencil = CursorProvider::get("Pencil").expect("pencil cursor");
        assert_eq!((pencil.hotspot_x, pencil.hotspot_y), (0, 52));

        let highlighter = CursorProvider::get("Highlighter").expect("highlighter cursor");
        assert_eq!((highlighter.hotspot_x, highlighter.hotspot_y), (0, 36));
    }

    #[test]
    fn icons_are_svg_data_uris() {
        for identity in CursorProvider::identities() {
            let descriptor = CursorProvider::get(identity).unwrap();
            assert!(decoded_icon(&descriptor).contains("<svg"), "{identity} icon");
        }
    }

    #[test]
    fn unknown_identity_yields_no_override() {
        assert_eq!(CursorProvider::get("Eraser"), None);
        assert_eq!(CursorProvider::get("pencil"), None);
        assert_eq!(cursor_css("Eraser"), "crosshair");
    }

    #[test]
    fn css_value_ends_with_fallback_keyword() {
        let css = cursor_css("Pencil");
        assert!(css.starts_with("url(data:image/svg+xml;base64,"));
        assert!(css.ends_with(") 0 52, crosshair"));
    }
}
