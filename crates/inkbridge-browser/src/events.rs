//! DOM event wiring that lives outside the editor widget itself.

use gloo_events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

use inkbridge_core::EditorEngine;

use crate::engine::SquireEngine;

/// Focus the editor when the outer container's own surface is clicked.
///
/// Clicks on descendants (the editable content itself) are left to the
/// browser, and clicks while the editor already holds focus are ignored.
/// Dropping the returned listener unhooks it.
pub fn click_to_focus(container: &HtmlElement, engine: &SquireEngine) -> EventListener {
    let target: HtmlElement = container.clone();
    let mut engine = engine.clone();

    EventListener::new(container, "click", move |event| {
        let on_container = event
            .target()
            .and_then(|t| t.dyn_into::<web_sys::Node>().ok())
            .is_some_and(|node| node.is_same_node(Some(target.as_ref())));
        if !on_container || engine.has_focus() {
            return;
        }
        engine.focus();
    })
}
