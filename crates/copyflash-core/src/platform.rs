//! Platform abstraction traits for the copy-highlight pipeline.
//!
//! These traits define the interface between the highlight logic and
//! platform-specific implementations (browser DOM, test doubles). The
//! session in [`crate::session`] and the handler in [`crate::handler`]
//! only ever talk to the platform through them.

use thiserror::Error;

use crate::css::ResolvedStyle;
use crate::types::{MarkdownView, SelectionEndpoints, TextPosition};

/// Error type for platform operations.
#[derive(Debug, Clone, Error)]
#[error("{0}")]
pub struct PlatformError(pub String);

impl From<&str> for PlatformError {
    fn from(s: &str) -> Self {
        PlatformError(s.to_string())
    }
}

impl From<String> for PlatformError {
    fn from(s: String) -> Self {
        PlatformError(s)
    }
}

/// Where highlight styling is written.
///
/// The browser implementation sets CSS custom properties and the marker
/// class on the document root. Both operations swallow failures: a
/// styling miss leaves copying itself untouched.
pub trait HighlightSurface {
    /// Write the resolved style values for the upcoming highlight.
    fn apply_style(&self, style: &ResolvedStyle);

    /// Toggle the marker that makes the highlight rules match.
    fn set_marker(&self, active: bool);
}

/// One-shot timer scheduling.
///
/// Callbacks run from the host event loop, never re-entrantly during
/// `schedule` itself. Dropping the pending handle cancels the timer;
/// detached timers cannot be cancelled at all.
pub trait TimerHost {
    /// Cancellation handle for a scheduled timer.
    type Pending;

    /// Schedule `callback` after `after_ms` milliseconds.
    fn schedule(&self, after_ms: u32, callback: Box<dyn FnOnce() + 'static>) -> Self::Pending;

    /// Schedule a timer that outlives any handle and always fires.
    fn schedule_detached(&self, after_ms: u32, callback: Box<dyn FnOnce() + 'static>);
}

/// Imperative access to a legacy editing engine.
pub trait LegacyEditor {
    /// Handle to one marked range.
    type Mark: LegacyMark + 'static;

    /// Endpoints of the primary selection, if the handle can report one.
    ///
    /// `None` covers every degraded case: no selection, an empty
    /// selection list, or a handle without selection support at all.
    fn primary_selection(&self) -> Option<SelectionEndpoints>;

    /// Mark `from..to`, inclusive on both edges.
    ///
    /// Inclusive marking keeps characters typed at either boundary inside
    /// the highlight for its whole lifetime.
    fn mark_range(&self, from: TextPosition, to: TextPosition) -> Option<Self::Mark>;
}

/// A marked range in a legacy editor.
pub trait LegacyMark {
    /// Remove exactly this mark. Marks placed by other copies, or by
    /// other plugins, are untouched.
    fn clear(self);
}

/// Access to the host's window/view state.
pub trait Workspace {
    /// The platform's legacy editor handle type.
    type Legacy: LegacyEditor;

    /// The focused markdown view, or `None` when focus is elsewhere.
    ///
    /// Capabilities are probed fresh on every call; results are never
    /// cached across events.
    fn active_view(&self) -> Option<MarkdownView<Self::Legacy>>;
}
