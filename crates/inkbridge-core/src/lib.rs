//! inkbridge-core: pure Rust bridge logic without browser dependencies.
//!
//! This crate provides:
//! - `EditorEngine` trait abstracting the rich-text editing widget
//! - `HostChannel` trait abstracting the outbound WebView message transport
//! - `StateNotifier` - change detection and diff dispatch to the host
//! - `Command` / `dispatch` - the host command table
//! - Snapshot types and color/size normalization
//!
//! The editing engine itself and the WebView transport are external
//! collaborators; the browser implementations live in `inkbridge-browser`
//! and `inkbridge-js`.

pub mod color;
pub mod command;
pub mod engine;
pub mod notify;
pub mod types;

pub use color::{rgb_to_hex, strip_size_unit};
pub use command::{Command, CommandOutput, dispatch};
pub use engine::{EditorEngine, SelectionError};
pub use notify::{EditorEvent, HostChannel, StateNotifier};
pub use smol_str::SmolStr;
pub use types::{
    CaretRect, FontInfo, FormatState, FormatTag, HostMessage, NotifierConfig, RawFontInfo,
};
