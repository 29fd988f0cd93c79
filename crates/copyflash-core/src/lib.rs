//! Core copy-highlight logic for the copyflash plugin.
//!
//! Everything in this crate is host-agnostic: the session state machine,
//! the settings model, and the stylesheet text are plain Rust, and the
//! platform is only reached through the traits in [`platform`]. The
//! browser implementations live in `copyflash-browser`, the host plugin
//! bindings in `copyflash-js`.
//!
//! # Architecture
//!
//! - [`settings`]: persisted highlight settings and their lenient merge
//! - [`css`]: stylesheet text, class/property names, style resolution
//! - [`session`]: the Idle/Highlighting state machine and revert timers
//! - [`handler`]: the copy-event entry point tying workspace, session,
//!   and legacy range marking together
//! - [`platform`]: traits each host platform implements

pub mod css;
pub mod handler;
pub mod platform;
pub mod session;
pub mod settings;
pub mod types;

pub use css::{ResolvedStyle, highlight_stylesheet};
pub use handler::{CopyHighlighter, legacy_flash};
pub use platform::{
    HighlightSurface, LegacyEditor, LegacyMark, PlatformError, TimerHost, Workspace,
};
pub use session::{Generation, HighlightSession, SharedSession, flash};
pub use settings::{HighlightSettings, coerce_duration, parse_duration};
pub use types::{
    EditorHandle, EngineKind, EngineProbe, MarkdownView, SelectionEndpoints, TextPosition, ViewMode,
};
