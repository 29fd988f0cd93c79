//! Bindings to the legacy editing engine's marking API.
//!
//! The legacy engine exposes an imperative CodeMirror-5-style surface:
//! `listSelections()` for selection ranges, `markText(from, to, opts)`
//! returning a per-range marker with `clear()`. web-sys has no bindings
//! for host-embedded editors, so they are declared here, and every
//! capability is probed before use - a handle missing part of the API
//! short-circuits to "no mark" instead of trapping.

use copyflash_core::css::LEGACY_MARK_CLASS;
use copyflash_core::platform::{LegacyEditor, LegacyMark};
use copyflash_core::types::{EditorHandle, EngineKind, EngineProbe, SelectionEndpoints, TextPosition};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    /// Live handle to a legacy editing engine instance.
    pub type LegacyEditorJs;

    #[wasm_bindgen(method, structural, js_name = listSelections)]
    fn list_selections(this: &LegacyEditorJs) -> JsValue;

    #[wasm_bindgen(method, structural, js_name = markText)]
    fn mark_text(this: &LegacyEditorJs, from: &JsValue, to: &JsValue, options: &JsValue)
    -> TextMarkerJs;

    /// Marker for one marked text range.
    pub type TextMarkerJs;

    #[wasm_bindgen(method, structural)]
    fn clear(this: &TextMarkerJs);
}

/// Probe a view's editing handle and classify its engine.
///
/// Runs fresh on every copy event: view switches and engine swaps change
/// capabilities under us, so nothing is cached.
pub fn classify_handle(
    editor: &JsValue,
    legacy: Option<LegacyEditorJs>,
) -> EditorHandle<BrowserLegacyEditor> {
    let probe = EngineProbe {
        has_state_api: has_property(editor, "state"),
        has_legacy_handle: legacy.is_some(),
    };
    tracing::trace!(?probe, "classified editing handle");
    match probe.classify() {
        EngineKind::Modern => EditorHandle::Modern,
        EngineKind::Legacy => EditorHandle::Legacy(BrowserLegacyEditor { handle: legacy }),
    }
}

/// [`LegacyEditor`] over a (possibly absent) legacy engine handle.
///
/// An absent or capability-poor handle degrades to `None` at each step.
pub struct BrowserLegacyEditor {
    handle: Option<LegacyEditorJs>,
}

impl LegacyEditor for BrowserLegacyEditor {
    type Mark = BrowserRangeMark;

    fn primary_selection(&self) -> Option<SelectionEndpoints> {
        let handle = self.handle.as_ref()?;
        if !has_method(handle, "listSelections") {
            tracing::debug!("legacy handle lacks listSelections");
            return None;
        }
        let ranges = handle.list_selections();
        if !js_sys::Array::is_array(&ranges) {
            return None;
        }
        let ranges: js_sys::Array = ranges.unchecked_into();
        let first = ranges.get(0);
        if first.is_undefined() || first.is_null() {
            return None;
        }
        let anchor = position_field(&first, "anchor")?;
        let head = position_field(&first, "head")?;
        Some(SelectionEndpoints::new(anchor, head))
    }

    fn mark_range(&self, from: TextPosition, to: TextPosition) -> Option<BrowserRangeMark> {
        let handle = self.handle.as_ref()?;
        if !has_method(handle, "markText") {
            tracing::debug!("legacy handle lacks markText");
            return None;
        }
        let options = js_sys::Object::new();
        set_field(&options, "className", &JsValue::from_str(LEGACY_MARK_CLASS));
        set_field(&options, "inclusiveLeft", &JsValue::TRUE);
        set_field(&options, "inclusiveRight", &JsValue::TRUE);
        let options: JsValue = options.into();
        let marker = handle.mark_text(&js_position(from), &js_position(to), &options);
        Some(BrowserRangeMark { marker })
    }
}

/// One marked range; clearing removes only this mark.
pub struct BrowserRangeMark {
    marker: TextMarkerJs,
}

impl LegacyMark for BrowserRangeMark {
    fn clear(self) {
        self.marker.clear();
    }
}

fn has_property(value: &JsValue, name: &str) -> bool {
    js_sys::Reflect::has(value, &JsValue::from_str(name)).unwrap_or(false)
}

fn has_method(value: &JsValue, name: &str) -> bool {
    js_sys::Reflect::get(value, &JsValue::from_str(name))
        .map(|v| v.is_function())
        .unwrap_or(false)
}

fn js_position(position: TextPosition) -> JsValue {
    let object = js_sys::Object::new();
    set_field(&object, "line", &JsValue::from(position.line));
    set_field(&object, "ch", &JsValue::from(position.col));
    object.into()
}

fn position_field(range: &JsValue, field: &str) -> Option<TextPosition> {
    let position = js_sys::Reflect::get(range, &JsValue::from_str(field)).ok()?;
    let line = js_sys::Reflect::get(&position, &JsValue::from_str("line"))
        .ok()?
        .as_f64()?;
    let ch = js_sys::Reflect::get(&position, &JsValue::from_str("ch"))
        .ok()?
        .as_f64()?;
    Some(TextPosition::new(line as u32, ch as u32))
}

fn set_field(object: &js_sys::Object, field: &str, value: &JsValue) {
    let _ = js_sys::Reflect::set(object, &JsValue::from_str(field), value);
}
