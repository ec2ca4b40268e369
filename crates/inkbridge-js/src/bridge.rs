//! JsBridge - the bridge object exposed to the page.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_events::EventListener;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;

use inkbridge_browser::{Squire, SquireEngine, click_to_focus};
use inkbridge_core::{
    Command, CommandOutput, EditorEvent, NotifierConfig, StateNotifier, dispatch,
};

use crate::channel::WebKitChannel;
use crate::types::BridgeOptions;

/// Editor events the bridge subscribes to, with their engine event names.
const EDITOR_EVENTS: [(&str, EditorEvent); 5] = [
    ("focus", EditorEvent::FocusGained),
    ("blur", EditorEvent::FocusLost),
    ("input", EditorEvent::Input),
    ("select", EditorEvent::Select),
    ("cursor", EditorEvent::CursorMove),
];

struct BridgeState {
    engine: SquireEngine,
    notifier: StateNotifier<WebKitChannel>,
}

impl BridgeState {
    fn handle_event(&mut self, event: EditorEvent) {
        let BridgeState { engine, notifier } = self;
        notifier.handle_event(&*engine, event);
    }
}

/// The bridge between the page's editor widget and the native host.
///
/// Host commands arrive as direct method calls (or through
/// [`dispatchCommand`](Self::dispatch_command)); state changes go out on
/// the WebKit message handlers. One bridge serves one editor instance.
#[wasm_bindgen]
pub struct JsBridge {
    state: Rc<RefCell<BridgeState>>,
    listeners: Vec<(&'static str, Closure<dyn FnMut()>)>,
    _click_listener: Option<EventListener>,
}

#[wasm_bindgen]
impl JsBridge {
    /// Attach to an existing Squire instance.
    ///
    /// `container_id` names the outer element whose height is reported to
    /// the host and whose empty surface focuses the editor on click.
    /// Subscribes to the engine's focus/blur/input/select/cursor events;
    /// call [`detach`](Self::detach) to unhook them.
    #[wasm_bindgen]
    pub fn attach(
        editor: Squire,
        container_id: &str,
        options: Option<BridgeOptions>,
    ) -> Result<JsBridge, JsError> {
        let window = web_sys::window().ok_or_else(|| JsError::new("No window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsError::new("No document"))?;
        let container = document
            .get_element_by_id(container_id)
            .ok_or_else(|| JsError::new(&format!("Container not found: {container_id}")))?
            .dyn_into::<HtmlElement>()
            .map_err(|_| JsError::new("Container is not an HTML element"))?;

        let engine = SquireEngine::new(editor, container.clone());
        let config = options.map(NotifierConfig::from).unwrap_or_default();
        let notifier = StateNotifier::new(config, WebKitChannel::new());

        let click_listener = click_to_focus(&container, &engine);
        let state = Rc::new(RefCell::new(BridgeState { engine, notifier }));

        let mut listeners = Vec::with_capacity(EDITOR_EVENTS.len());
        for (name, event) in EDITOR_EVENTS {
            let handler_state = Rc::clone(&state);
            let closure = Closure::wrap(Box::new(move || {
                handler_state.borrow_mut().handle_event(event);
            }) as Box<dyn FnMut()>);
            state
                .borrow()
                .engine
                .editor()
                .add_event_listener(name, closure.as_ref().unchecked_ref());
            listeners.push((name, closure));
        }

        Ok(JsBridge {
            state,
            listeners,
            _click_listener: Some(click_listener),
        })
    }

    /// Unhook every event subscription.
    ///
    /// The bridge stops observing the editor and the container; pending
    /// host commands still work.
    #[wasm_bindgen]
    pub fn detach(&mut self) {
        {
            let state = self.state.borrow();
            for (name, closure) in self.listeners.drain(..) {
                state
                    .engine
                    .editor()
                    .remove_event_listener(name, closure.as_ref().unchecked_ref());
            }
        }
        self._click_listener = None;
    }

    /// Whether the editor held focus as of the last focus event.
    #[wasm_bindgen(js_name = isFocused)]
    pub fn is_focused(&self) -> bool {
        self.state.borrow().notifier.is_focused()
    }

    /// Execute a command given as a `{command: "..."}` tagged object.
    ///
    /// Query-style commands return their value; everything else returns
    /// undefined.
    #[wasm_bindgen(js_name = dispatchCommand)]
    pub fn dispatch_command(&mut self, command: JsValue) -> Result<JsValue, JsError> {
        let command: Command = serde_wasm_bindgen::from_value(command)
            .map_err(|e| JsError::new(&format!("Invalid command: {e}")))?;
        let output = self.run(&command);
        serde_wasm_bindgen::to_value(&output)
            .map_err(|e| JsError::new(&format!("Serialization error: {e}")))
    }

    // === Host command surface ===

    /// Give the editor input focus, or remove it with `false`.
    #[wasm_bindgen(js_name = focusEditor)]
    pub fn focus_editor(&mut self, focused: Option<bool>) {
        self.run(&Command::FocusEditor {
            focused: focused.unwrap_or(true),
        });
    }

    /// Apply markup for a symbolic tag name (`"bold"`, `"italic"`,
    /// `"strikethrough"`, `"underline"`, `"link"`) to the selection.
    /// Unknown names are ignored.
    #[wasm_bindgen(js_name = setFormat)]
    pub fn set_format(&mut self, tag: &str) {
        self.run(&Command::SetFormat { tag: tag.into() });
    }

    /// Remove markup for a symbolic tag name from the selection.
    #[wasm_bindgen(js_name = removeFormat)]
    pub fn remove_format(&mut self, tag: &str) {
        self.run(&Command::RemoveFormat { tag: tag.into() });
    }

    /// Set the font size in pixels.
    #[wasm_bindgen(js_name = setFontSize)]
    pub fn set_font_size(&mut self, size: f64) {
        self.run(&Command::SetFontSize { size });
    }

    #[wasm_bindgen(js_name = setTextColor)]
    pub fn set_text_color(&mut self, hex: &str) {
        self.run(&Command::SetTextColor { hex: hex.into() });
    }

    #[wasm_bindgen(js_name = setTextBackgroundColor)]
    pub fn set_text_background_color(&mut self, hex: &str) {
        self.run(&Command::SetTextBackgroundColor { hex: hex.into() });
    }

    #[wasm_bindgen(js_name = insertImage)]
    pub fn insert_image(&mut self, url: &str) {
        self.run(&Command::InsertImage {
            url: url.to_string(),
        });
    }

    #[wasm_bindgen(js_name = insertHTML)]
    pub fn insert_html(&mut self, html: &str) {
        self.run(&Command::InsertHtml {
            html: html.to_string(),
        });
    }

    /// Serialized editor content.
    #[wasm_bindgen(js_name = getHTML)]
    pub fn get_html(&self) -> String {
        match self.run(&Command::GetHtml) {
            CommandOutput::Text(text) => text,
            _ => String::new(),
        }
    }

    /// Reset content to an empty paragraph with the caret at the start.
    #[wasm_bindgen]
    pub fn clear(&mut self) {
        self.run(&Command::Clear);
    }

    #[wasm_bindgen(js_name = makeLink)]
    pub fn make_link(&mut self, url: &str) {
        self.run(&Command::MakeLink {
            url: url.to_string(),
        });
    }

    #[wasm_bindgen(js_name = removeLink)]
    pub fn remove_link(&mut self) {
        self.run(&Command::RemoveLink);
    }

    /// Select from the first text node under `start_id` to the first text
    /// node under `end_id`, between the given character offsets.
    #[wasm_bindgen(js_name = setTextSelection)]
    pub fn set_text_selection(
        &mut self,
        start_id: &str,
        start_offset: u32,
        end_id: &str,
        end_offset: u32,
    ) {
        self.run(&Command::SetTextSelection {
            start_id: start_id.into(),
            start_offset,
            end_id: end_id.into(),
            end_offset,
        });
    }

    /// Plain-text contents of the current selection.
    #[wasm_bindgen(js_name = getSelectedText)]
    pub fn get_selected_text(&self) -> String {
        match self.run(&Command::GetSelectedText) {
            CommandOutput::Text(text) => text,
            _ => String::new(),
        }
    }

    /// Rendered height of the editable container, in pixels.
    #[wasm_bindgen(js_name = getEditorHeight)]
    pub fn get_editor_height(&self) -> i32 {
        match self.run(&Command::GetEditorHeight) {
            CommandOutput::Height(height) => height,
            _ => 0,
        }
    }
}

// Internal methods (not exposed to JS)
impl JsBridge {
    fn run(&self, command: &Command) -> CommandOutput {
        let mut state = self.state.borrow_mut();
        dispatch(&mut state.engine, command)
    }
}
