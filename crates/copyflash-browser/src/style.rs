//! Stylesheet injection and document-root styling.
//!
//! The stylesheet goes into `<head>` once, under a fixed id; per-copy
//! styling is three custom properties plus the marker class on the
//! document root. Styling failures are logged and swallowed - copying
//! keeps working with no visible highlight.

use copyflash_core::css::{
    BACKGROUND_PROPERTY, DURATION_PROPERTY, FOREGROUND_PROPERTY, MARKER_CLASS, ResolvedStyle,
    STYLE_ELEMENT_ID, highlight_stylesheet,
};
use copyflash_core::platform::{HighlightSurface, PlatformError};
use wasm_bindgen::JsCast;

/// Inject the highlight stylesheet into `<head>`.
///
/// Idempotent: an already-present element (hot reload, double load) is
/// left alone.
pub fn inject_stylesheet() -> Result<(), PlatformError> {
    let window = web_sys::window().ok_or("no window")?;
    let document = window.document().ok_or("no document")?;

    if document.get_element_by_id(STYLE_ELEMENT_ID).is_some() {
        tracing::debug!("highlight stylesheet already present");
        return Ok(());
    }

    let style = document
        .create_element("style")
        .map_err(|e| format!("create style element failed: {:?}", e))?;
    style.set_id(STYLE_ELEMENT_ID);
    style.set_text_content(Some(&highlight_stylesheet()));

    let head = document.head().ok_or("document has no head")?;
    head.append_child(&style)
        .map_err(|e| format!("append stylesheet failed: {:?}", e))?;

    tracing::debug!("highlight stylesheet injected");
    Ok(())
}

/// Remove everything the plugin ever wrote to the document.
///
/// Safe to call at any time, any number of times: each piece (stylesheet
/// element, marker class, custom properties) is skipped when absent.
pub fn teardown_styles() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };

    if let Some(style) = document.get_element_by_id(STYLE_ELEMENT_ID) {
        style.remove();
    }

    let Some(root) = document.document_element() else {
        return;
    };
    let _ = root.class_list().remove_1(MARKER_CLASS);
    if let Some(root) = root.dyn_ref::<web_sys::HtmlElement>() {
        let css = root.style();
        for property in [BACKGROUND_PROPERTY, FOREGROUND_PROPERTY, DURATION_PROPERTY] {
            let _ = css.remove_property(property);
        }
    }
}

/// [`HighlightSurface`] over the live document root.
#[derive(Clone, Copy, Debug, Default)]
pub struct DomSurface;

impl DomSurface {
    pub fn new() -> Self {
        Self
    }
}

impl HighlightSurface for DomSurface {
    fn apply_style(&self, style: &ResolvedStyle) {
        let Some(root) = root_element() else {
            tracing::warn!("no document root to style");
            return;
        };
        let Some(root) = root.dyn_ref::<web_sys::HtmlElement>() else {
            tracing::warn!("document root is not an HtmlElement");
            return;
        };
        let css = root.style();
        for (property, value) in [
            (BACKGROUND_PROPERTY, style.background.as_str()),
            (FOREGROUND_PROPERTY, style.foreground.as_str()),
            (DURATION_PROPERTY, style.duration.as_str()),
        ] {
            if let Err(e) = css.set_property(property, value) {
                tracing::warn!("set {} failed: {:?}", property, e);
            }
        }
    }

    fn set_marker(&self, active: bool) {
        let Some(root) = root_element() else {
            return;
        };
        let list = root.class_list();
        let result = if active {
            list.add_1(MARKER_CLASS)
        } else {
            list.remove_1(MARKER_CLASS)
        };
        if let Err(e) = result {
            tracing::warn!("marker class toggle failed: {:?}", e);
        }
    }
}

fn root_element() -> Option<web_sys::Element> {
    web_sys::window()?.document()?.document_element()
}
