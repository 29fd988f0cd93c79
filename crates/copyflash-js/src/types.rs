//! Types exposed to JavaScript via wasm-bindgen.

use copyflash_core::settings::HighlightSettings;
use serde::{Deserialize, Serialize};
use tsify_next::Tsify;

/// Settings snapshot in the host's wire shape.
#[derive(Debug, Clone, Serialize, Deserialize, Tsify)]
#[tsify(into_wasm_abi, from_wasm_abi)]
#[serde(rename_all = "camelCase")]
pub struct JsHighlightSettings {
    pub background_color: String,
    pub foreground_color: String,
    pub duration: u32,
}

impl From<HighlightSettings> for JsHighlightSettings {
    fn from(settings: HighlightSettings) -> Self {
        Self {
            background_color: settings.background_color,
            foreground_color: settings.foreground_color,
            duration: settings.duration_ms,
        }
    }
}

impl From<JsHighlightSettings> for HighlightSettings {
    fn from(settings: JsHighlightSettings) -> Self {
        Self {
            background_color: settings.background_color,
            foreground_color: settings.foreground_color,
            duration_ms: settings.duration,
        }
    }
}
