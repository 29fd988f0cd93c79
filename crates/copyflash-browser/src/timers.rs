//! `setTimeout`-backed one-shot timers.

use copyflash_core::platform::TimerHost;
use gloo_timers::callback::Timeout;

/// [`TimerHost`] over the browser event loop.
///
/// The pending handle is gloo's [`Timeout`], which clears the underlying
/// `setTimeout` on drop. Detached timers are forgotten and always fire.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTimers;

impl BrowserTimers {
    pub fn new() -> Self {
        Self
    }
}

impl TimerHost for BrowserTimers {
    type Pending = Timeout;

    fn schedule(&self, after_ms: u32, callback: Box<dyn FnOnce() + 'static>) -> Timeout {
        Timeout::new(after_ms, callback)
    }

    fn schedule_detached(&self, after_ms: u32, callback: Box<dyn FnOnce() + 'static>) {
        Timeout::new(after_ms, callback).forget();
    }
}
