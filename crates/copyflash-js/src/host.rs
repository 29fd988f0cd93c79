//! Bindings to the markdown host application.
//!
//! Custom wasm_bindgen bindings for the host objects the plugin calls
//! into: the app handle (persistence and workspace inspection) and the
//! declarative settings-form builder. Everything is structural - the
//! host hands us plain objects, not classes we control.

use copyflash_browser::legacy::{BrowserLegacyEditor, LegacyEditorJs, classify_handle};
use copyflash_core::platform::Workspace;
use copyflash_core::types::{MarkdownView, ViewMode};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    /// Handle to the host application, passed to the plugin constructor.
    #[derive(Clone)]
    pub type HostApp;

    #[wasm_bindgen(method, structural, js_name = loadData)]
    pub fn load_data(this: &HostApp) -> js_sys::Promise;

    #[wasm_bindgen(method, structural, js_name = saveData)]
    pub fn save_data(this: &HostApp, data: &JsValue) -> js_sys::Promise;

    #[wasm_bindgen(method, structural, js_name = activeMarkdownView)]
    pub fn active_markdown_view(this: &HostApp) -> Option<MarkdownViewJs>;

    /// The host's view object for an open markdown document.
    pub type MarkdownViewJs;

    #[wasm_bindgen(method, getter, structural)]
    pub fn mode(this: &MarkdownViewJs) -> String;

    #[wasm_bindgen(method, getter, structural)]
    pub fn editor(this: &MarkdownViewJs) -> JsValue;

    #[wasm_bindgen(method, getter, structural, js_name = legacyEditor)]
    pub fn legacy_editor(this: &MarkdownViewJs) -> Option<LegacyEditorJs>;

    /// The host's declarative settings-form builder.
    pub type SettingsForm;

    #[wasm_bindgen(method, structural, js_name = addTextField)]
    pub fn add_text_field(
        this: &SettingsForm,
        label: &str,
        placeholder: &str,
        value: &str,
        on_change: &js_sys::Function,
    ) -> TextField;

    /// One text field in the settings form.
    pub type TextField;

    #[wasm_bindgen(method, structural, js_name = setValue)]
    pub fn set_value(this: &TextField, value: &str);
}

/// [`Workspace`] over the host app handle.
///
/// Mode and engine are read fresh on every query; the host swaps both
/// under us when the user changes views.
pub struct HostWorkspace {
    app: HostApp,
}

impl HostWorkspace {
    pub fn new(app: HostApp) -> Self {
        Self { app }
    }
}

impl Workspace for HostWorkspace {
    type Legacy = BrowserLegacyEditor;

    fn active_view(&self) -> Option<MarkdownView<BrowserLegacyEditor>> {
        let view = self.app.active_markdown_view()?;
        let mode = ViewMode::parse(&view.mode());
        let handle = classify_handle(&view.editor(), view.legacy_editor());
        Some(MarkdownView { mode, handle })
    }
}
