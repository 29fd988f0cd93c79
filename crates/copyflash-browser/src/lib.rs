//! Browser DOM layer for the copyflash highlight plugin.
//!
//! Implements the `copyflash-core` platform traits against web-sys: the
//! injected stylesheet and document-root styling, `setTimeout`-backed
//! timers, the document `copy` listener, and bindings to the legacy
//! editing engine's marking API.

// Re-export core for convenience
pub use copyflash_core::*;

pub mod legacy;
pub mod listener;
pub mod style;
pub mod timers;

pub use legacy::{BrowserLegacyEditor, BrowserRangeMark, LegacyEditorJs, classify_handle};
pub use listener::CopyListener;
pub use style::{DomSurface, inject_stylesheet, teardown_styles};
pub use timers::BrowserTimers;
