//! Browser DOM layer for the inkbridge editor bridge.
//!
//! Binds the page's Squire editor instance and implements the core
//! [`EditorEngine`](inkbridge_core::EditorEngine) trait on top of it. This
//! crate assumes a `wasm32-unknown-unknown` target environment.
//!
//! # Architecture
//!
//! - `squire`: hand-written bindings to the editor widget
//! - `engine`: `SquireEngine`, the `EditorEngine` implementation
//! - `events`: DOM event wiring outside the widget (click-to-focus)
//!
//! # Re-exports
//!
//! This crate re-exports `inkbridge-core` for convenience, so consumers
//! only need to depend on `inkbridge-browser`.

// Re-export core crate
pub use inkbridge_core;
pub use inkbridge_core::*;

pub mod engine;
pub mod events;
pub mod squire;

pub use engine::SquireEngine;
pub use events::click_to_focus;
pub use squire::{Squire, caret_rect_from_js, raw_font_info_from_js};
