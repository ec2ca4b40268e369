//! Change detection and diff dispatch.
//!
//! High-frequency editor events come in through
//! [`StateNotifier::handle_event`]; low-frequency, deduplicated host
//! messages go out through [`HostChannel`]. The notifier owns the "last
//! dispatched" snapshot of each state type and posts a new observation only
//! when it differs. Two states are exempt from dedup by design: focus
//! transitions and caret geometry are forwarded on every event.

use crate::engine::EditorEngine;
use crate::types::{FontInfo, FormatState, HostMessage, NotifierConfig};

/// Outbound transport for host messages.
///
/// The browser implementation posts to the WebView's named message
/// handlers; tests record messages in memory. Posting is one-way and
/// infallible from the bridge's point of view.
pub trait HostChannel {
    fn post(&self, message: HostMessage);
}

/// Discrete editor events the notifier observes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EditorEvent {
    /// The editable region gained input focus.
    FocusGained,
    /// The editable region lost input focus.
    FocusLost,
    /// Content-changing input; the serialized document has changed.
    Input,
    /// The selection range changed.
    Select,
    /// The caret moved with an empty selection.
    CursorMove,
}

/// Converts editor events into deduplicated host notifications.
///
/// The last-dispatched snapshots live here, not in module state; one
/// notifier serves one editor instance.
pub struct StateNotifier<C> {
    config: NotifierConfig,
    channel: C,
    last_font_info: FontInfo,
    last_format: FormatState,
    last_height: i32,
    focused: bool,
}

impl<C: HostChannel> StateNotifier<C> {
    /// Create a notifier with pristine snapshots: flags false, font fields
    /// unset, height zero, unfocused.
    pub fn new(config: NotifierConfig, channel: C) -> Self {
        Self {
            config,
            channel,
            last_font_info: FontInfo::default(),
            last_format: FormatState::default(),
            last_height: 0,
            focused: false,
        }
    }

    /// Whether the editor held focus as of the last focus event.
    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// The channel messages are posted on.
    pub fn channel(&self) -> &C {
        &self.channel
    }

    /// Route one editor event through change detection.
    pub fn handle_event(&mut self, engine: &impl EditorEngine, event: EditorEvent) {
        match event {
            EditorEvent::FocusGained => self.focus_changed(engine, true),
            EditorEvent::FocusLost => self.focus_changed(engine, false),
            EditorEvent::Input => {
                self.detect_height(engine);
                self.detect_font_info(engine);
                self.detect_format(engine);
            }
            EditorEvent::Select => {
                self.detect_font_info(engine);
                self.detect_format(engine);
            }
            EditorEvent::CursorMove => {
                self.detect_font_info(engine);
                self.detect_format(engine);
                self.post_caret(engine);
            }
        }
    }

    fn focus_changed(&mut self, engine: &impl EditorEngine, focused: bool) {
        self.focused = focused;
        if self.config.focus_status {
            // No dedup: every transition is forwarded.
            self.channel.post(HostMessage::IsFocused(focused));
        }
        if focused {
            // Gaining focus can resize the container (soft keyboard).
            self.detect_height(engine);
        }
    }

    fn detect_height(&mut self, engine: &impl EditorEngine) {
        if !self.config.content_height {
            return;
        }
        let height = engine.content_height();
        if height == self.last_height {
            return;
        }
        self.last_height = height;
        tracing::trace!(target: "inkbridge::notify", height, "content height changed");
        self.channel.post(HostMessage::ContentHeight(height));
    }

    fn detect_font_info(&mut self, engine: &impl EditorEngine) {
        let info = FontInfo::from_raw(&engine.font_info());
        if info == self.last_font_info {
            return;
        }
        self.last_font_info = info.clone();
        self.channel.post(HostMessage::FontInfo(info));
    }

    fn detect_format(&mut self, engine: &impl EditorEngine) {
        let format = FormatState::read(engine);
        if format == self.last_format {
            return;
        }
        self.last_format = format;
        self.channel.post(HostMessage::Format(format));
    }

    fn post_caret(&mut self, engine: &impl EditorEngine) {
        if !self.config.caret_geometry {
            return;
        }
        let Some(rect) = engine.caret_rect() else {
            return;
        };
        self.channel.post(HostMessage::CursorPosition(rect));
    }
}
