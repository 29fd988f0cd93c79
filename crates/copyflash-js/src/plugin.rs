//! The plugin object and its lifecycle hooks.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use copyflash_browser::{
    BrowserTimers, CopyListener, DomSurface, inject_stylesheet, teardown_styles,
};
use copyflash_core::CopyHighlighter;
use wasm_bindgen::prelude::*;

use crate::host::{HostApp, HostWorkspace, SettingsForm};
use crate::panel;
use crate::store::SettingsStore;
use crate::types::JsHighlightSettings;

type Highlighter = CopyHighlighter<HostWorkspace, DomSurface, BrowserTimers>;

/// The copy-highlight plugin instance exposed to the host.
///
/// Construction wires everything together but touches nothing; `onload`
/// and `onunload` do the actual install and teardown.
#[wasm_bindgen]
pub struct CopyFlashPlugin {
    store: Rc<SettingsStore>,
    highlighter: Rc<Highlighter>,
    listener: Rc<RefCell<Option<CopyListener>>>,
    unloaded: Rc<Cell<bool>>,
}

#[wasm_bindgen]
impl CopyFlashPlugin {
    /// Create the plugin around the host app handle.
    #[wasm_bindgen(constructor)]
    pub fn new(app: HostApp) -> Self {
        let store = Rc::new(SettingsStore::new(app.clone()));
        let highlighter = Rc::new(CopyHighlighter::new(
            HostWorkspace::new(app),
            BrowserTimers,
            DomSurface::new(),
            store.shared(),
        ));
        Self {
            store,
            highlighter,
            listener: Rc::new(RefCell::new(None)),
            unloaded: Rc::new(Cell::new(false)),
        }
    }

    /// Load hook: inject the stylesheet, then (asynchronously) load
    /// persisted settings and start listening for copy events.
    ///
    /// Fails only when the DOM is unusable (no `document.head`). Copies
    /// that land before the settings arrive flash with the defaults.
    pub fn onload(&self) -> Result<(), JsError> {
        inject_stylesheet().map_err(|e| JsError::new(&e.to_string()))?;
        self.unloaded.set(false);

        let store = self.store.clone();
        let highlighter = self.highlighter.clone();
        let slot = self.listener.clone();
        let unloaded = self.unloaded.clone();
        wasm_bindgen_futures::spawn_local(async move {
            store.load().await;
            // The host may have unloaded us while loadData was pending.
            if unloaded.get() {
                tracing::debug!("unloaded before settings arrived");
                return;
            }
            match CopyListener::attach(move || highlighter.on_copy()) {
                Ok(listener) => {
                    *slot.borrow_mut() = Some(listener);
                    tracing::debug!("copyflash loaded");
                }
                Err(e) => tracing::warn!("copy listener attach failed: {}", e),
            }
        });
        Ok(())
    }

    /// Unload hook: stop listening, revert any active highlight, and
    /// remove every styling trace. Safe to call repeatedly.
    pub fn onunload(&self) {
        self.unloaded.set(true);
        self.listener.borrow_mut().take();
        self.highlighter.shutdown();
        teardown_styles();
        tracing::debug!("copyflash unloaded");
    }

    /// Host-routed copy delivery, for hosts that own event registration
    /// instead of letting plugins listen on the document.
    #[wasm_bindgen(js_name = notifyCopy)]
    pub fn notify_copy(&self) {
        self.highlighter.on_copy();
    }

    /// Populate the host's settings form for this plugin.
    #[wasm_bindgen(js_name = buildSettingsPanel)]
    pub fn build_settings_panel(&self, form: &SettingsForm) {
        panel::build(form, self.store.clone());
    }

    /// Current settings snapshot.
    #[wasm_bindgen(getter)]
    pub fn settings(&self) -> JsHighlightSettings {
        self.store.snapshot().into()
    }
}
