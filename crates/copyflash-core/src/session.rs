//! The highlight session state machine.
//!
//! One session exists per plugin instance. A copy event starts (or
//! restarts) a highlight; the scheduled revert only wins if its
//! generation still matches, which is what makes rapid copy bursts
//! collapse into a single highlight interval ending one duration after
//! the last copy.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::css::ResolvedStyle;
use crate::platform::{HighlightSurface, TimerHost};

/// Identifies one `start` of the session. A revert carrying a stale
/// generation is ignored.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Generation(u64);

/// Session lifecycle states.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum SessionState {
    /// No highlight is showing.
    Idle,
    /// Highlight styling is applied and a revert is (about to be) armed.
    Highlighting,
}

/// The Idle/Highlighting state machine driving the CSS highlight.
///
/// `H` is the platform's pending-timer handle; dropping it cancels the
/// timer, so replacing `pending` is cancellation.
#[derive(Debug)]
pub struct HighlightSession<S, H> {
    surface: S,
    state: SessionState,
    generation: u64,
    pending: Option<H>,
}

impl<S: HighlightSurface, H> HighlightSession<S, H> {
    /// New idle session over the given surface.
    pub fn new(surface: S) -> Self {
        Self {
            surface,
            state: SessionState::Idle,
            generation: 0,
            pending: None,
        }
    }

    /// Whether a highlight is currently showing.
    pub fn is_active(&self) -> bool {
        self.state == SessionState::Highlighting
    }

    /// Begin (or restart) a highlight.
    ///
    /// Any pending revert is cancelled strictly before the new styling is
    /// written, so no stale timer can fire between the two. Returns the
    /// generation the caller must hand back through [`elapse`].
    ///
    /// [`elapse`]: HighlightSession::elapse
    pub fn start(&mut self, style: &ResolvedStyle) -> Generation {
        // Cancel first: dropping the handle kills the old timer.
        self.pending = None;
        self.generation += 1;
        self.surface.apply_style(style);
        self.surface.set_marker(true);
        self.state = SessionState::Highlighting;
        tracing::trace!(generation = self.generation, "highlight session started");
        Generation(self.generation)
    }

    /// Arm the revert timer for the current highlight.
    ///
    /// Only meaningful while highlighting; an idle session drops the
    /// handle immediately, which cancels it.
    pub fn arm(&mut self, pending: H) {
        if self.state == SessionState::Highlighting {
            self.pending = Some(pending);
        }
    }

    /// A revert timer fired. Returns whether it actually reverted.
    ///
    /// A stale generation means a newer copy restarted the session after
    /// this timer was armed; the timer must change nothing.
    pub fn elapse(&mut self, generation: Generation) -> bool {
        if generation.0 != self.generation || self.state != SessionState::Highlighting {
            tracing::trace!(
                fired = generation.0,
                current = self.generation,
                "stale revert ignored"
            );
            return false;
        }
        self.surface.set_marker(false);
        self.state = SessionState::Idle;
        self.pending = None;
        true
    }

    /// Revert immediately, cancelling any pending timer. Idempotent.
    pub fn cancel(&mut self) {
        self.pending = None;
        if self.state == SessionState::Highlighting {
            self.surface.set_marker(false);
            self.state = SessionState::Idle;
        }
    }
}

/// Shared session handle: single-threaded interior mutability, with weak
/// captures from timer callbacks.
pub type SharedSession<S, H> = Rc<RefCell<HighlightSession<S, H>>>;

/// Run one full flash: restart the session and arm its revert.
///
/// The timer callback holds only a [`Weak`] session reference; a session
/// dropped at unload leaves the callback a no-op.
pub fn flash<S, T>(
    session: &SharedSession<S, T::Pending>,
    timers: &T,
    style: &ResolvedStyle,
    duration_ms: u32,
) -> Generation
where
    S: HighlightSurface + 'static,
    T: TimerHost,
    T::Pending: 'static,
{
    let generation = session.borrow_mut().start(style);
    let weak: Weak<RefCell<HighlightSession<S, T::Pending>>> = Rc::downgrade(session);
    let pending = timers.schedule(
        duration_ms,
        Box::new(move || {
            let Some(session) = weak.upgrade() else {
                return;
            };
            session.borrow_mut().elapse(generation);
        }),
    );
    session.borrow_mut().arm(pending);
    generation
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::HighlightSettings;

    #[derive(Clone, Default)]
    struct MarkerLog {
        marks: Rc<RefCell<Vec<bool>>>,
    }

    impl HighlightSurface for MarkerLog {
        fn apply_style(&self, _style: &ResolvedStyle) {}

        fn set_marker(&self, active: bool) {
            self.marks.borrow_mut().push(active);
        }
    }

    /// Timer handle that records its own cancellation (drop before fire).
    struct DropFlag(Rc<RefCell<bool>>);

    impl Drop for DropFlag {
        fn drop(&mut self) {
            *self.0.borrow_mut() = true;
        }
    }

    fn style() -> ResolvedStyle {
        ResolvedStyle::resolve(&HighlightSettings::default())
    }

    #[test]
    fn test_start_applies_marker_and_bumps_generation() {
        let log = MarkerLog::default();
        let mut session: HighlightSession<_, DropFlag> = HighlightSession::new(log.clone());
        assert!(!session.is_active());

        let first = session.start(&style());
        assert!(session.is_active());
        let second = session.start(&style());
        assert_ne!(first, second);
        assert_eq!(*log.marks.borrow(), vec![true, true]);
    }

    #[test]
    fn test_elapse_current_generation_reverts() {
        let log = MarkerLog::default();
        let mut session: HighlightSession<_, DropFlag> = HighlightSession::new(log.clone());
        let generation = session.start(&style());
        assert!(session.elapse(generation));
        assert!(!session.is_active());
        assert_eq!(*log.marks.borrow(), vec![true, false]);
    }

    #[test]
    fn test_elapse_stale_generation_is_ignored() {
        let log = MarkerLog::default();
        let mut session: HighlightSession<_, DropFlag> = HighlightSession::new(log.clone());
        let stale = session.start(&style());
        let current = session.start(&style());

        assert!(!session.elapse(stale));
        assert!(session.is_active());

        assert!(session.elapse(current));
        assert_eq!(*log.marks.borrow(), vec![true, true, false]);
    }

    #[test]
    fn test_restart_cancels_pending_before_anything_else() {
        let log = MarkerLog::default();
        let mut session = HighlightSession::new(log);
        session.start(&style());
        let cancelled = Rc::new(RefCell::new(false));
        session.arm(DropFlag(cancelled.clone()));
        assert!(!*cancelled.borrow());

        session.start(&style());
        assert!(*cancelled.borrow());
    }

    #[test]
    fn test_arm_while_idle_cancels_immediately() {
        let log = MarkerLog::default();
        let mut session = HighlightSession::new(log);
        let cancelled = Rc::new(RefCell::new(false));
        session.arm(DropFlag(cancelled.clone()));
        assert!(*cancelled.borrow());
    }

    #[test]
    fn test_cancel_is_idempotent() {
        let log = MarkerLog::default();
        let mut session: HighlightSession<_, DropFlag> = HighlightSession::new(log.clone());
        session.start(&style());
        session.cancel();
        session.cancel();
        assert_eq!(*log.marks.borrow(), vec![true, false]);
        assert!(!session.is_active());
    }

    #[test]
    fn test_elapse_after_cancel_is_ignored() {
        let log = MarkerLog::default();
        let mut session: HighlightSession<_, DropFlag> = HighlightSession::new(log.clone());
        let generation = session.start(&style());
        session.cancel();
        // A leaked callback firing after cancel must not re-toggle.
        assert!(!session.elapse(generation));
        assert_eq!(*log.marks.borrow(), vec![true, false]);
    }
}
