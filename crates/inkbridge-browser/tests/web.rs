//! WASM browser tests for inkbridge-browser.
//!
//! Run with: `wasm-pack test --headless --firefox` or `--chrome`

use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

use js_sys::{Object, Reflect};
use wasm_bindgen::JsValue;

use inkbridge_browser::squire::tag_descriptor;
use inkbridge_browser::{caret_rect_from_js, raw_font_info_from_js};

fn object_with(entries: &[(&str, JsValue)]) -> JsValue {
    let object = Object::new();
    for (key, value) in entries {
        Reflect::set(&object, &JsValue::from_str(key), value).unwrap();
    }
    object.into()
}

// === Font info extraction ===

#[wasm_bindgen_test]
fn test_font_info_reads_all_fields() {
    let value = object_with(&[
        ("color", JsValue::from_str("rgb(255, 0, 128)")),
        ("backgroundColor", JsValue::NULL),
        ("family", JsValue::from_str("Helvetica")),
        ("size", JsValue::from_str("16px")),
    ]);

    let raw = raw_font_info_from_js(&value);
    assert_eq!(raw.color.as_deref(), Some("rgb(255, 0, 128)"));
    assert_eq!(raw.background_color, None);
    assert_eq!(raw.family.as_deref(), Some("Helvetica"));
    assert_eq!(raw.size.as_deref(), Some("16px"));
}

#[wasm_bindgen_test]
fn test_font_info_missing_fields_read_as_unset() {
    let raw = raw_font_info_from_js(&Object::new().into());
    assert_eq!(raw.color, None);
    assert_eq!(raw.background_color, None);
    assert_eq!(raw.family, None);
    assert_eq!(raw.size, None);
}

// === Caret rect extraction ===

#[wasm_bindgen_test]
fn test_caret_rect_reads_all_fields() {
    let value = object_with(&[
        ("top", JsValue::from_f64(10.0)),
        ("right", JsValue::from_f64(12.0)),
        ("bottom", JsValue::from_f64(26.0)),
        ("left", JsValue::from_f64(11.0)),
        ("width", JsValue::from_f64(1.0)),
        ("height", JsValue::from_f64(16.0)),
        ("x", JsValue::from_f64(11.0)),
        ("y", JsValue::from_f64(10.0)),
    ]);

    let rect = caret_rect_from_js(&value).expect("full rect should parse");
    assert_eq!(rect.top, 10.0);
    assert_eq!(rect.width, 1.0);
    assert_eq!(rect.y, 10.0);
}

#[wasm_bindgen_test]
fn test_caret_rect_requires_every_field() {
    let value = object_with(&[
        ("top", JsValue::from_f64(10.0)),
        ("left", JsValue::from_f64(11.0)),
    ]);
    assert!(caret_rect_from_js(&value).is_none());
    assert!(caret_rect_from_js(&JsValue::NULL).is_none());
    assert!(caret_rect_from_js(&JsValue::UNDEFINED).is_none());
}

// === changeFormat descriptor ===

#[wasm_bindgen_test]
fn test_tag_descriptor_shape() {
    let descriptor = tag_descriptor("b");
    let tag = Reflect::get(&descriptor, &JsValue::from_str("tag")).unwrap();
    assert_eq!(tag.as_string().as_deref(), Some("b"));
}
