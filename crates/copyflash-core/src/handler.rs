//! The copy event entry point.
//!
//! [`CopyHighlighter`] owns everything one copy event needs: the
//! workspace to find the active view, the shared session for the CSS
//! flash, and the legacy marking path for older editing engines. It is
//! deliberately infallible - every degraded case downgrades to "no
//! visible highlight" rather than an error.

use std::cell::RefCell;
use std::rc::Rc;

use crate::css::ResolvedStyle;
use crate::platform::{HighlightSurface, LegacyEditor, LegacyMark, TimerHost, Workspace};
use crate::session::{HighlightSession, SharedSession, flash};
use crate::settings::HighlightSettings;
use crate::types::{EditorHandle, ViewMode};

/// Copy-event handler wiring the whole highlight pipeline together.
pub struct CopyHighlighter<W, S, T>
where
    T: TimerHost,
{
    workspace: W,
    timers: T,
    session: SharedSession<S, T::Pending>,
    settings: Rc<RefCell<HighlightSettings>>,
}

impl<W, S, T> CopyHighlighter<W, S, T>
where
    W: Workspace,
    S: HighlightSurface + 'static,
    T: TimerHost,
    T::Pending: 'static,
{
    /// Build a handler around a fresh idle session.
    ///
    /// `settings` is shared with the settings store; edits apply to the
    /// next copy without re-wiring anything.
    pub fn new(
        workspace: W,
        timers: T,
        surface: S,
        settings: Rc<RefCell<HighlightSettings>>,
    ) -> Self {
        Self {
            workspace,
            timers,
            session: Rc::new(RefCell::new(HighlightSession::new(surface))),
            settings,
        }
    }

    /// Handle one copy event.
    ///
    /// No active markdown view means no work at all. Otherwise the CSS
    /// flash always runs; legacy engines in source mode additionally get
    /// their selection marked.
    pub fn on_copy(&self) {
        let Some(view) = self.workspace.active_view() else {
            tracing::trace!("copy outside any markdown view");
            return;
        };

        let settings = self.settings.borrow().clone();
        let style = ResolvedStyle::resolve(&settings);
        flash(&self.session, &self.timers, &style, settings.duration_ms);

        if view.mode == ViewMode::Source {
            if let EditorHandle::Legacy(editor) = view.handle {
                legacy_flash(&editor, &self.timers, settings.duration_ms);
            }
        }
    }

    /// Cancel any active highlight, reverting the surface. Used at
    /// unload; safe to call repeatedly.
    pub fn shutdown(&self) {
        self.session.borrow_mut().cancel();
    }
}

/// Mark the legacy engine's primary selection and schedule its removal.
///
/// The removal timer is detached on purpose: once a range is marked it
/// lives exactly `duration_ms`, regardless of later copies or session
/// restarts. Returns whether a mark was placed.
pub fn legacy_flash<L, T>(editor: &L, timers: &T, duration_ms: u32) -> bool
where
    L: LegacyEditor,
    T: TimerHost,
{
    let Some(endpoints) = editor.primary_selection() else {
        tracing::trace!("legacy editor reported no selection");
        return false;
    };
    let (from, to) = endpoints.normalized();
    let Some(mark) = editor.mark_range(from, to) else {
        return false;
    };
    tracing::debug!(?from, ?to, duration_ms, "marked legacy range");
    timers.schedule_detached(duration_ms, Box::new(move || mark.clear()));
    true
}
