//! `EditorEngine` implementation backed by the page's Squire instance.

use wasm_bindgen::JsValue;

use inkbridge_core::{CaretRect, EditorEngine, RawFontInfo, SelectionError};

use crate::squire::{self, Squire};

/// Squire-backed engine.
///
/// Holds the editor handle and the outer container element whose
/// `clientHeight` is reported to the host. Cloning clones the JS handles,
/// not the editor.
#[derive(Clone)]
pub struct SquireEngine {
    editor: Squire,
    container: web_sys::HtmlElement,
}

impl SquireEngine {
    /// Wrap an existing Squire instance and its container element.
    pub fn new(editor: Squire, container: web_sys::HtmlElement) -> Self {
        Self { editor, container }
    }

    /// The underlying editor handle.
    pub fn editor(&self) -> &Squire {
        &self.editor
    }

    /// The container element whose height is reported to the host.
    pub fn container(&self) -> &web_sys::HtmlElement {
        &self.container
    }

    fn first_text_child(
        document: &web_sys::Document,
        id: &str,
    ) -> Result<web_sys::Node, SelectionError> {
        let element = document
            .get_element_by_id(id)
            .ok_or_else(|| SelectionError::ElementNotFound(id.into()))?;

        let children = element.child_nodes();
        for index in 0..children.length() {
            if let Some(node) = children.item(index) {
                if node.node_type() == web_sys::Node::TEXT_NODE {
                    return Ok(node);
                }
            }
        }
        Err(SelectionError::NoTextNode(id.into()))
    }
}

impl EditorEngine for SquireEngine {
    fn focus(&mut self) {
        self.editor.focus();
    }

    fn blur(&mut self) {
        self.editor.blur();
    }

    fn has_focus(&self) -> bool {
        let root = self.editor.get_root();
        web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.active_element())
            .is_some_and(|active| active.is_same_node(Some(root.as_ref())))
    }

    fn has_format(&self, tag: &str) -> bool {
        self.editor.has_format(tag)
    }

    fn apply_format(&mut self, tag: &str) {
        self.editor
            .change_format(&squire::tag_descriptor(tag).into(), &JsValue::NULL);
    }

    fn remove_format(&mut self, tag: &str) {
        self.editor
            .change_format(&JsValue::NULL, &squire::tag_descriptor(tag).into());
    }

    fn font_info(&self) -> RawFontInfo {
        squire::raw_font_info_from_js(&self.editor.get_font_info())
    }

    fn set_font_size(&mut self, size: &str) {
        self.editor.set_font_size(size);
    }

    fn set_text_color(&mut self, hex: &str) {
        self.editor.set_text_colour(hex);
    }

    fn set_highlight_color(&mut self, hex: &str) {
        self.editor.set_highlight_colour(hex);
    }

    fn insert_image(&mut self, url: &str) {
        // Squire returns the inserted element; the bridge has no use for it.
        let _ = self.editor.insert_image(url);
    }

    fn insert_html(&mut self, html: &str) {
        self.editor.insert_html(html);
    }

    fn html(&self) -> String {
        self.editor.get_html()
    }

    fn set_html(&mut self, html: &str) {
        self.editor.set_html(html);
    }

    fn selected_text(&self) -> String {
        self.editor.get_selected_text()
    }

    fn make_link(&mut self, url: &str) {
        self.editor.make_link(url);
    }

    fn remove_link(&mut self) {
        self.editor.remove_link();
    }

    fn select_text_nodes(
        &mut self,
        start_id: &str,
        start_offset: u32,
        end_id: &str,
        end_offset: u32,
    ) -> Result<(), SelectionError> {
        let document = web_sys::window()
            .and_then(|window| window.document())
            .ok_or_else(|| SelectionError::Engine("no document".into()))?;

        let start = Self::first_text_child(&document, start_id)?;
        let end = Self::first_text_child(&document, end_id)?;

        let range = self
            .editor
            .create_range(&start, start_offset, &end, end_offset);
        self.editor.set_selection(&range);

        tracing::trace!(
            target: "inkbridge::selection",
            start_id,
            start_offset,
            end_id,
            end_offset,
            "selection set from host"
        );
        Ok(())
    }

    fn content_height(&self) -> i32 {
        self.container.client_height()
    }

    fn caret_rect(&self) -> Option<CaretRect> {
        squire::caret_rect_from_js(&self.editor.get_cursor_position())
    }
}
