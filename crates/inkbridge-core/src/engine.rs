//! The seam between bridge logic and the external rich-text engine.
//!
//! The engine itself (Squire in the shipped pages) is an external
//! collaborator; implementations of [`EditorEngine`] wrap it for the
//! notifier and the command table. The browser implementation lives in
//! `inkbridge-browser`; tests use an in-memory mock.

use smol_str::SmolStr;
use thiserror::Error;

use crate::types::{CaretRect, RawFontInfo};

/// Failure while addressing a selection by element id.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("element `{0}` not found")]
    ElementNotFound(SmolStr),
    #[error("element `{0}` has no text node child")]
    NoTextNode(SmolStr),
    #[error("engine rejected selection: {0}")]
    Engine(String),
}

/// Operations the bridge needs from the rich-text engine.
///
/// Mutating operations take `&mut self`, queries take `&self`. Every
/// operation completes synchronously within the calling event tick.
pub trait EditorEngine {
    /// Give the editable region input focus.
    fn focus(&mut self);

    /// Remove input focus from the editable region.
    fn blur(&mut self);

    /// Whether the editable region currently holds input focus.
    fn has_focus(&self) -> bool;

    /// Whether the given markup tag is active at the cursor/selection.
    fn has_format(&self, tag: &str) -> bool;

    /// Apply the given markup tag to the current selection.
    fn apply_format(&mut self, tag: &str);

    /// Remove the given markup tag from the current selection.
    fn remove_format(&mut self, tag: &str);

    /// Font info at the cursor/selection, unnormalized.
    fn font_info(&self) -> RawFontInfo;

    /// Set the font size from a CSS size string, unit included.
    fn set_font_size(&mut self, size: &str);

    /// Set the foreground text color from a hex string.
    fn set_text_color(&mut self, hex: &str);

    /// Set the highlight (background) color from a hex string.
    fn set_highlight_color(&mut self, hex: &str);

    /// Insert an image reference at the cursor.
    fn insert_image(&mut self, url: &str);

    /// Insert raw markup at the cursor.
    fn insert_html(&mut self, html: &str);

    /// Serialized editor content.
    fn html(&self) -> String;

    /// Replace the whole document.
    ///
    /// Replacing the document collapses the selection to the start; an
    /// empty string yields the engine's empty paragraph.
    fn set_html(&mut self, html: &str);

    /// Plain-text contents of the current selection.
    fn selected_text(&self) -> String;

    /// Wrap the current selection in a hyperlink.
    fn make_link(&mut self, url: &str);

    /// Unwrap the current selection from a hyperlink.
    fn remove_link(&mut self);

    /// Select from the first text node under `start_id` to the first text
    /// node under `end_id`, between the given character offsets.
    ///
    /// The current selection is left untouched on error.
    fn select_text_nodes(
        &mut self,
        start_id: &str,
        start_offset: u32,
        end_id: &str,
        end_offset: u32,
    ) -> Result<(), SelectionError>;

    /// Rendered height of the editable container, in pixels.
    fn content_height(&self) -> i32;

    /// Bounding rectangle of the caret, if the engine can produce one.
    fn caret_rect(&self) -> Option<CaretRect>;
}
