//! The host command table.
//!
//! Each command maps to exactly one engine operation. The enum is tagged by
//! command name so hosts can drive the bridge through a single dispatch
//! entry point instead of a bag of free global functions.

use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

use crate::engine::EditorEngine;
use crate::types::FormatTag;

/// A host-issued command.
///
/// On the wire this is a `{"command": "..."}` tagged object; the named
/// methods on the JS bridge construct the same variants directly.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "camelCase")]
pub enum Command {
    /// Give input focus, or remove it with `focused: false`.
    FocusEditor {
        #[serde(default = "default_focused")]
        focused: bool,
    },
    /// Apply markup for a symbolic tag name to the current selection.
    SetFormat { tag: SmolStr },
    /// Remove markup for a symbolic tag name from the current selection.
    RemoveFormat { tag: SmolStr },
    /// Set the font size; the `px` unit is appended here.
    SetFontSize { size: f64 },
    SetTextColor { hex: SmolStr },
    SetTextBackgroundColor { hex: SmolStr },
    InsertImage { url: String },
    #[serde(rename = "insertHTML")]
    InsertHtml { html: String },
    #[serde(rename = "getHTML")]
    GetHtml,
    /// Reset content to an empty paragraph with the caret at the start.
    Clear,
    MakeLink { url: String },
    RemoveLink,
    /// Select between two text nodes addressed by element id and offset.
    #[serde(rename_all = "camelCase")]
    SetTextSelection {
        start_id: SmolStr,
        start_offset: u32,
        end_id: SmolStr,
        end_offset: u32,
    },
    GetSelectedText,
    GetEditorHeight,
}

fn default_focused() -> bool {
    true
}

/// Value returned by a dispatched command.
///
/// Only the query-style commands produce one.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CommandOutput {
    None,
    Text(String),
    Height(i32),
}

/// Execute one command against the engine.
///
/// Unknown format tag names are logged and ignored; selection addressing
/// failures are logged and leave the selection untouched. Everything runs
/// synchronously to completion.
pub fn dispatch(engine: &mut impl EditorEngine, command: &Command) -> CommandOutput {
    match command {
        Command::FocusEditor { focused } => {
            if *focused {
                engine.focus();
            } else {
                engine.blur();
            }
            CommandOutput::None
        }
        Command::SetFormat { tag } => {
            match FormatTag::from_name(tag) {
                Some(tag) => engine.apply_format(tag.tag_name()),
                None => {
                    tracing::debug!(target: "inkbridge::command", %tag, "ignoring unknown format tag");
                }
            }
            CommandOutput::None
        }
        Command::RemoveFormat { tag } => {
            match FormatTag::from_name(tag) {
                Some(tag) => engine.remove_format(tag.tag_name()),
                None => {
                    tracing::debug!(target: "inkbridge::command", %tag, "ignoring unknown format tag");
                }
            }
            CommandOutput::None
        }
        Command::SetFontSize { size } => {
            engine.set_font_size(&format!("{size}px"));
            CommandOutput::None
        }
        Command::SetTextColor { hex } => {
            engine.set_text_color(hex);
            CommandOutput::None
        }
        Command::SetTextBackgroundColor { hex } => {
            engine.set_highlight_color(hex);
            CommandOutput::None
        }
        Command::InsertImage { url } => {
            engine.insert_image(url);
            CommandOutput::None
        }
        Command::InsertHtml { html } => {
            engine.insert_html(html);
            CommandOutput::None
        }
        Command::GetHtml => CommandOutput::Text(engine.html()),
        Command::Clear => {
            engine.set_html("");
            CommandOutput::None
        }
        Command::MakeLink { url } => {
            engine.make_link(url);
            CommandOutput::None
        }
        Command::RemoveLink => {
            engine.remove_link();
            CommandOutput::None
        }
        Command::SetTextSelection {
            start_id,
            start_offset,
            end_id,
            end_offset,
        } => {
            if let Err(err) = engine.select_text_nodes(start_id, *start_offset, end_id, *end_offset)
            {
                tracing::warn!(target: "inkbridge::command", %err, "setTextSelection failed");
            }
            CommandOutput::None
        }
        Command::GetSelectedText => CommandOutput::Text(engine.selected_text()),
        Command::GetEditorHeight => CommandOutput::Height(engine.content_height()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_wire_names() {
        let cmd: Command = serde_json::from_str(r#"{"command": "focusEditor"}"#).unwrap();
        assert_eq!(cmd, Command::FocusEditor { focused: true });

        let cmd: Command =
            serde_json::from_str(r#"{"command": "focusEditor", "focused": false}"#).unwrap();
        assert_eq!(cmd, Command::FocusEditor { focused: false });

        let cmd: Command =
            serde_json::from_str(r#"{"command": "setFormat", "tag": "bold"}"#).unwrap();
        assert_eq!(cmd, Command::SetFormat { tag: "bold".into() });

        let cmd: Command =
            serde_json::from_str(r#"{"command": "insertHTML", "html": "<p>hi</p>"}"#).unwrap();
        assert_eq!(
            cmd,
            Command::InsertHtml {
                html: "<p>hi</p>".into()
            }
        );

        let cmd: Command = serde_json::from_str(r#"{"command": "getHTML"}"#).unwrap();
        assert_eq!(cmd, Command::GetHtml);

        let cmd: Command = serde_json::from_str(
            r#"{"command": "setTextSelection", "startId": "p1", "startOffset": 0, "endId": "p2", "endOffset": 4}"#,
        )
        .unwrap();
        assert_eq!(
            cmd,
            Command::SetTextSelection {
                start_id: "p1".into(),
                start_offset: 0,
                end_id: "p2".into(),
                end_offset: 4,
            }
        );
    }

    #[test]
    fn test_unknown_command_is_an_error() {
        assert!(serde_json::from_str::<Command>(r#"{"command": "explode"}"#).is_err());
    }
}
