//! Raw bindings to the page's Squire editor instance.
//!
//! web-sys has no coverage for the editor widget, so the surface the bridge
//! needs is bound by hand. The font-info and cursor-position values come
//! back as plain JS objects and are read field-by-field via `Reflect`.

use wasm_bindgen::prelude::*;

use inkbridge_core::{CaretRect, RawFontInfo};

#[wasm_bindgen]
extern "C" {
    /// The Squire editor instance created by the page.
    #[derive(Clone)]
    pub type Squire;

    #[wasm_bindgen(method)]
    pub fn focus(this: &Squire);

    #[wasm_bindgen(method)]
    pub fn blur(this: &Squire);

    /// Root contenteditable element of the editor.
    #[wasm_bindgen(method, js_name = getRoot)]
    pub fn get_root(this: &Squire) -> web_sys::Element;

    /// Font family, size, color and background color at the cursor, as a
    /// plain object with nullable string properties.
    #[wasm_bindgen(method, js_name = getFontInfo)]
    pub fn get_font_info(this: &Squire) -> JsValue;

    #[wasm_bindgen(method, js_name = hasFormat)]
    pub fn has_format(this: &Squire, tag: &str) -> bool;

    /// `changeFormat(add, remove)` - either side takes a `{tag}` descriptor
    /// or null.
    #[wasm_bindgen(method, js_name = changeFormat)]
    pub fn change_format(this: &Squire, add: &JsValue, remove: &JsValue);

    #[wasm_bindgen(method, js_name = setFontSize)]
    pub fn set_font_size(this: &Squire, size: &str);

    #[wasm_bindgen(method, js_name = setTextColour)]
    pub fn set_text_colour(this: &Squire, colour: &str);

    #[wasm_bindgen(method, js_name = setHighlightColour)]
    pub fn set_highlight_colour(this: &Squire, colour: &str);

    #[wasm_bindgen(method, js_name = insertImage)]
    pub fn insert_image(this: &Squire, src: &str) -> JsValue;

    #[wasm_bindgen(method, js_name = insertHTML)]
    pub fn insert_html(this: &Squire, html: &str);

    #[wasm_bindgen(method, js_name = getHTML)]
    pub fn get_html(this: &Squire) -> String;

    #[wasm_bindgen(method, js_name = setHTML)]
    pub fn set_html(this: &Squire, html: &str);

    #[wasm_bindgen(method, js_name = getSelectedText)]
    pub fn get_selected_text(this: &Squire) -> String;

    #[wasm_bindgen(method, js_name = makeLink)]
    pub fn make_link(this: &Squire, url: &str);

    #[wasm_bindgen(method, js_name = removeLink)]
    pub fn remove_link(this: &Squire);

    #[wasm_bindgen(method, js_name = createRange)]
    pub fn create_range(
        this: &Squire,
        start: &web_sys::Node,
        start_offset: u32,
        end: &web_sys::Node,
        end_offset: u32,
    ) -> JsValue;

    #[wasm_bindgen(method, js_name = setSelection)]
    pub fn set_selection(this: &Squire, range: &JsValue);

    /// Bounding rectangle of the caret, as a DOMRect-shaped object.
    #[wasm_bindgen(method, js_name = getCursorPosition)]
    pub fn get_cursor_position(this: &Squire) -> JsValue;

    #[wasm_bindgen(method, js_name = addEventListener)]
    pub fn add_event_listener(this: &Squire, event_type: &str, listener: &js_sys::Function);

    #[wasm_bindgen(method, js_name = removeEventListener)]
    pub fn remove_event_listener(this: &Squire, event_type: &str, listener: &js_sys::Function);
}

/// Build the `{tag}` descriptor `changeFormat` expects.
pub fn tag_descriptor(tag: &str) -> js_sys::Object {
    let descriptor = js_sys::Object::new();
    // Reflect::set only fails on non-objects.
    let _ = js_sys::Reflect::set(
        &descriptor,
        &JsValue::from_str("tag"),
        &JsValue::from_str(tag),
    );
    descriptor
}

fn string_prop(value: &JsValue, key: &str) -> Option<String> {
    js_sys::Reflect::get(value, &JsValue::from_str(key))
        .ok()
        .and_then(|v| v.as_string())
}

fn f64_prop(value: &JsValue, key: &str) -> Option<f64> {
    js_sys::Reflect::get(value, &JsValue::from_str(key))
        .ok()
        .and_then(|v| v.as_f64())
}

/// Read a Squire font-info object into [`RawFontInfo`].
///
/// Missing or non-string properties read as unset.
pub fn raw_font_info_from_js(value: &JsValue) -> RawFontInfo {
    RawFontInfo {
        color: string_prop(value, "color"),
        background_color: string_prop(value, "backgroundColor"),
        family: string_prop(value, "family"),
        size: string_prop(value, "size"),
    }
}

/// Read a DOMRect-shaped cursor-position object into [`CaretRect`].
///
/// Returns `None` when the value is not an object or lacks any rect field.
pub fn caret_rect_from_js(value: &JsValue) -> Option<CaretRect> {
    if !value.is_object() {
        return None;
    }
    Some(CaretRect {
        top: f64_prop(value, "top")?,
        right: f64_prop(value, "right")?,
        bottom: f64_prop(value, "bottom")?,
        left: f64_prop(value, "left")?,
        width: f64_prop(value, "width")?,
        height: f64_prop(value, "height")?,
        x: f64_prop(value, "x")?,
        y: f64_prop(value, "y")?,
    })
}
