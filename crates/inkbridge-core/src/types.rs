//! Snapshot types shared between the notifier, the command table, and the
//! host message surface.
//!
//! Every snapshot is a flat record of scalars, so derived `PartialEq` is the
//! field-wise equality the dedup protocol relies on.

use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

use crate::color::{rgb_to_hex, strip_size_unit};
use crate::engine::EditorEngine;

/// Inline formats the host can toggle and observe.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormatTag {
    Bold,
    Italic,
    Strikethrough,
    Underline,
    Link,
}

impl FormatTag {
    /// Every tag, in host message field order.
    pub const ALL: [FormatTag; 5] = [
        FormatTag::Bold,
        FormatTag::Italic,
        FormatTag::Strikethrough,
        FormatTag::Underline,
        FormatTag::Link,
    ];

    /// The markup tag the editor engine uses for this format.
    pub fn tag_name(self) -> &'static str {
        match self {
            FormatTag::Bold => "b",
            FormatTag::Italic => "i",
            FormatTag::Strikethrough => "del",
            FormatTag::Underline => "u",
            FormatTag::Link => "a",
        }
    }

    /// Parse a symbolic host-facing name (`"bold"`, `"italic"`, ...).
    ///
    /// Returns `None` for unrecognized names; callers treat that as a no-op.
    pub fn from_name(name: &str) -> Option<FormatTag> {
        match name {
            "bold" => Some(FormatTag::Bold),
            "italic" => Some(FormatTag::Italic),
            "strikethrough" => Some(FormatTag::Strikethrough),
            "underline" => Some(FormatTag::Underline),
            "link" => Some(FormatTag::Link),
            _ => None,
        }
    }
}

/// Format flags at the active cursor or selection.
///
/// Starts all-false at bridge construction and is compared field-wise
/// against the last dispatched value before a `format` message goes out.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct FormatState {
    pub bold: bool,
    pub italic: bool,
    pub strikethrough: bool,
    pub underline: bool,
    pub link: bool,
}

impl FormatState {
    /// Read the current flags from the engine.
    pub fn read(engine: &impl EditorEngine) -> Self {
        Self {
            bold: engine.has_format(FormatTag::Bold.tag_name()),
            italic: engine.has_format(FormatTag::Italic.tag_name()),
            strikethrough: engine.has_format(FormatTag::Strikethrough.tag_name()),
            underline: engine.has_format(FormatTag::Underline.tag_name()),
            link: engine.has_format(FormatTag::Link.tag_name()),
        }
    }

    /// Flag value for a tag.
    pub fn get(&self, tag: FormatTag) -> bool {
        match tag {
            FormatTag::Bold => self.bold,
            FormatTag::Italic => self.italic,
            FormatTag::Strikethrough => self.strikethrough,
            FormatTag::Underline => self.underline,
            FormatTag::Link => self.link,
        }
    }
}

/// Font info as reported by the engine, before normalization.
///
/// Colors arrive in the `rgb(r, g, b)` textual form the engine computes from
/// the DOM; `size` still carries its CSS unit. `None` means the property is
/// not uniformly set across the selection.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RawFontInfo {
    pub color: Option<String>,
    pub background_color: Option<String>,
    pub family: Option<String>,
    pub size: Option<String>,
}

/// Normalized font info, as posted on the `fontInfo` channel.
///
/// Colors are `#rrggbb`, sizes are unit-less numeric text. Unset fields
/// serialize as `null`, never as a default color.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FontInfo {
    pub color: Option<SmolStr>,
    pub background_color: Option<SmolStr>,
    pub family: Option<SmolStr>,
    pub size: Option<SmolStr>,
}

impl FontInfo {
    /// Normalize raw engine font info.
    ///
    /// An unparseable color normalizes to unset rather than a default.
    pub fn from_raw(raw: &RawFontInfo) -> Self {
        Self {
            color: raw.color.as_deref().and_then(rgb_to_hex),
            background_color: raw.background_color.as_deref().and_then(rgb_to_hex),
            family: raw.family.as_deref().map(SmolStr::new),
            size: raw.size.as_deref().map(strip_size_unit),
        }
    }
}

/// Caret bounding rectangle in CSS pixels, viewport coordinates.
///
/// Posted on every cursor move without an equality check; any move is
/// treated as significant by the host.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct CaretRect {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
    pub width: f64,
    pub height: f64,
    pub x: f64,
    pub y: f64,
}

/// One-way message posted to the native host.
///
/// Each variant rides its own named WebView message channel; the payload is
/// the serialized snapshot alone.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum HostMessage {
    ContentHeight(i32),
    FontInfo(FontInfo),
    Format(FormatState),
    IsFocused(bool),
    CursorPosition(CaretRect),
}

impl HostMessage {
    /// Name of the host message channel this payload is posted on.
    pub fn channel(&self) -> &'static str {
        match self {
            HostMessage::ContentHeight(_) => "contentHeight",
            HostMessage::FontInfo(_) => "fontInfo",
            HostMessage::Format(_) => "format",
            HostMessage::IsFocused(_) => "isFocused",
            HostMessage::CursorPosition(_) => "cursorPosition",
        }
    }
}

/// Which derived states the notifier forwards to the host.
///
/// The presets mirror the two host integration modes: height tracking for
/// hosts that size the WebView to its content, caret tracking for hosts
/// that drive accessory UI from focus and caret geometry. The toggles are
/// independent; a host may enable all three.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NotifierConfig {
    /// Post `contentHeight` when the rendered height changes.
    pub content_height: bool,
    /// Post `isFocused` on every focus transition.
    pub focus_status: bool,
    /// Post `cursorPosition` on every cursor move.
    pub caret_geometry: bool,
}

impl NotifierConfig {
    /// Height tracking only.
    pub fn height_tracking() -> Self {
        Self {
            content_height: true,
            focus_status: false,
            caret_geometry: false,
        }
    }

    /// Focus and caret geometry tracking.
    pub fn caret_tracking() -> Self {
        Self {
            content_height: false,
            focus_status: true,
            caret_geometry: true,
        }
    }
}

impl Default for NotifierConfig {
    fn default() -> Self {
        Self::caret_tracking()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_names() {
        assert_eq!(FormatTag::Bold.tag_name(), "b");
        assert_eq!(FormatTag::Strikethrough.tag_name(), "del");
        assert_eq!(FormatTag::Link.tag_name(), "a");
    }

    #[test]
    fn test_from_name_roundtrip() {
        for tag in FormatTag::ALL {
            let name = match tag {
                FormatTag::Bold => "bold",
                FormatTag::Italic => "italic",
                FormatTag::Strikethrough => "strikethrough",
                FormatTag::Underline => "underline",
                FormatTag::Link => "link",
            };
            assert_eq!(FormatTag::from_name(name), Some(tag));
        }
        assert_eq!(FormatTag::from_name("unknownTag"), None);
        // Markup tag names are not accepted as symbolic names
        assert_eq!(FormatTag::from_name("b"), None);
    }

    #[test]
    fn test_font_info_normalization() {
        let raw = RawFontInfo {
            color: Some("rgb(255, 0, 128)".into()),
            background_color: None,
            family: Some("Helvetica".into()),
            size: Some("16px".into()),
        };
        let info = FontInfo::from_raw(&raw);
        assert_eq!(info.color.as_deref(), Some("#ff0080"));
        assert_eq!(info.background_color, None);
        assert_eq!(info.family.as_deref(), Some("Helvetica"));
        assert_eq!(info.size.as_deref(), Some("16"));
    }

    #[test]
    fn test_font_info_unparseable_color_stays_unset() {
        let raw = RawFontInfo {
            color: Some("currentcolor".into()),
            ..RawFontInfo::default()
        };
        assert_eq!(FontInfo::from_raw(&raw), FontInfo::default());
    }

    #[test]
    fn test_channel_names() {
        assert_eq!(HostMessage::ContentHeight(0).channel(), "contentHeight");
        assert_eq!(
            HostMessage::FontInfo(FontInfo::default()).channel(),
            "fontInfo"
        );
        assert_eq!(
            HostMessage::Format(FormatState::default()).channel(),
            "format"
        );
        assert_eq!(HostMessage::IsFocused(true).channel(), "isFocused");
        assert_eq!(
            HostMessage::CursorPosition(CaretRect::default()).channel(),
            "cursorPosition"
        );
    }
}
