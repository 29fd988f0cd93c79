//! Document-level `copy` event subscription.

use copyflash_core::platform::PlatformError;
use gloo_events::EventListener;

/// Attached `copy` listener; detaches on drop.
///
/// The listener fires after the host has populated the clipboard -
/// highlight work never touches clipboard contents.
pub struct CopyListener {
    _listener: EventListener,
}

impl CopyListener {
    /// Attach `on_copy` to the document's `copy` event.
    pub fn attach(on_copy: impl Fn() + 'static) -> Result<Self, PlatformError> {
        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;
        let listener = EventListener::new(&document, "copy", move |_event| {
            tracing::trace!("copy event");
            on_copy();
        });
        Ok(Self {
            _listener: listener,
        })
    }
}
