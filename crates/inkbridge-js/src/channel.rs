//! Outbound message transport to the native host.

use wasm_bindgen::{JsCast, JsValue};

use inkbridge_core::{HostChannel, HostMessage};

/// Posts messages to `window.webkit.messageHandlers.<channel>.postMessage`.
///
/// Strictly one-way: there is no reply protocol, and a missing handler is
/// logged and the message dropped.
#[derive(Clone, Copy, Debug, Default)]
pub struct WebKitChannel;

impl WebKitChannel {
    pub fn new() -> Self {
        Self
    }
}

impl HostChannel for WebKitChannel {
    fn post(&self, message: HostMessage) {
        let channel = message.channel();
        let payload = match serde_wasm_bindgen::to_value(&message) {
            Ok(payload) => payload,
            Err(err) => {
                tracing::warn!(target: "inkbridge::host", channel, %err, "failed to serialize host message");
                return;
            }
        };
        if let Err(err) = post_to_handler(channel, &payload) {
            tracing::warn!(target: "inkbridge::host", channel, error = ?err, "host message dropped");
        }
    }
}

fn post_to_handler(channel: &str, payload: &JsValue) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let webkit = js_sys::Reflect::get(window.as_ref(), &JsValue::from_str("webkit"))?;
    let handlers = js_sys::Reflect::get(&webkit, &JsValue::from_str("messageHandlers"))?;
    let handler = js_sys::Reflect::get(&handlers, &JsValue::from_str(channel))?;
    if handler.is_undefined() || handler.is_null() {
        return Err(JsValue::from_str("no message handler registered"));
    }
    let post = js_sys::Reflect::get(&handler, &JsValue::from_str("postMessage"))?;
    let post: js_sys::Function = post.dyn_into()?;
    post.call1(&handler, payload)?;
    Ok(())
}
