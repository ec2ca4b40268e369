//! WASM bindings for the inkbridge editor bridge.
//!
//! Exposes [`JsBridge`], the object the page glue constructs around its
//! Squire instance. Outbound state messages ride the WebKit message
//! handlers; inbound host commands arrive as direct calls on the bridge.

mod bridge;
mod channel;
mod types;

pub use bridge::*;
pub use channel::*;
pub use types::*;

use wasm_bindgen::prelude::*;

/// Initialize panic hook for better error messages in console.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}
