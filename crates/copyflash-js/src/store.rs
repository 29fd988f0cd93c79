//! Settings persistence through the host's data API.

use std::cell::RefCell;
use std::rc::Rc;

use copyflash_core::settings::HighlightSettings;
use serde::Serialize as _;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;

use crate::host::HostApp;

/// Shared settings state plus the host persistence calls.
///
/// The inner cell is handed to the copy handler, so panel edits apply to
/// the next copy without re-wiring anything.
pub struct SettingsStore {
    app: HostApp,
    current: Rc<RefCell<HighlightSettings>>,
}

impl SettingsStore {
    pub fn new(app: HostApp) -> Self {
        Self {
            app,
            current: Rc::new(RefCell::new(HighlightSettings::default())),
        }
    }

    /// The live settings cell shared with the copy handler.
    pub fn shared(&self) -> Rc<RefCell<HighlightSettings>> {
        self.current.clone()
    }

    /// Current settings by value.
    pub fn snapshot(&self) -> HighlightSettings {
        self.current.borrow().clone()
    }

    /// Load persisted settings and merge them over the defaults.
    ///
    /// Never fails outward: a missing, empty, or unreadable blob just
    /// means the defaults (or per-field defaults) apply.
    pub async fn load(&self) {
        let persisted = match JsFuture::from(self.app.load_data()).await {
            Ok(value) => persisted_value(&value),
            Err(e) => {
                tracing::warn!("loadData failed: {:?}", e);
                None
            }
        };
        let merged = HighlightSettings::merge_value(persisted.as_ref());
        tracing::debug!(?merged, "settings loaded");
        *self.current.borrow_mut() = merged;
    }

    /// Persist the current settings.
    ///
    /// Fire-and-forget: the host's promise completes on its own schedule
    /// and the outcome is only logged.
    pub fn save(&self) {
        let blob = self.snapshot().to_value();
        let data = match blob.serialize(&serde_wasm_bindgen::Serializer::json_compatible()) {
            Ok(data) => data,
            Err(e) => {
                tracing::warn!("settings serialization failed: {}", e);
                return;
            }
        };
        let promise = self.app.save_data(&data);
        wasm_bindgen_futures::spawn_local(async move {
            match JsFuture::from(promise).await {
                Ok(_) => tracing::debug!("settings saved"),
                Err(e) => tracing::warn!("saveData failed: {:?}", e),
            }
        });
    }

    /// Apply one edit to the current settings, then persist.
    pub fn update(&self, apply: impl FnOnce(&mut HighlightSettings)) {
        apply(&mut self.current.borrow_mut());
        self.save();
    }
}

/// Interpret the raw `loadData` result as a JSON value, if there is one.
fn persisted_value(raw: &JsValue) -> Option<serde_json::Value> {
    if raw.is_null() || raw.is_undefined() {
        return None;
    }
    match serde_wasm_bindgen::from_value(raw.clone()) {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::warn!("unreadable persisted settings: {}", e);
            None
        }
    }
}
