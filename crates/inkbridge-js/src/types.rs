//! JS-facing option types.

use serde::{Deserialize, Serialize};
use tsify_next::Tsify;

use inkbridge_core::NotifierConfig;

/// Options for [`JsBridge::attach`](crate::JsBridge::attach).
///
/// Mirrors [`NotifierConfig`]; an omitted options object selects the
/// caret-tracking preset.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, Tsify)]
#[tsify(into_wasm_abi, from_wasm_abi)]
#[serde(rename_all = "camelCase")]
pub struct BridgeOptions {
    /// Post `contentHeight` when the rendered height changes.
    #[serde(default)]
    pub content_height: bool,
    /// Post `isFocused` on every focus transition.
    #[serde(default)]
    pub focus_status: bool,
    /// Post `cursorPosition` on every cursor move.
    #[serde(default)]
    pub caret_geometry: bool,
}

impl From<BridgeOptions> for NotifierConfig {
    fn from(options: BridgeOptions) -> Self {
        NotifierConfig {
            content_height: options.content_height,
            focus_status: options.focus_status,
            caret_geometry: options.caret_geometry,
        }
    }
}
