//! Stylesheet text and style resolution.
//!
//! The highlight is driven entirely by CSS custom properties: the
//! stylesheet below is injected once, and each copy event only rewrites
//! the property values on the document root and toggles a marker class.
//! Teardown removes all three pieces.

use crate::settings::{DEFAULT_BACKGROUND_COLOR, DEFAULT_DURATION_MS, HighlightSettings};

/// Class toggled on the document root while a highlight session is active.
pub const MARKER_CLASS: &str = "copyflash-active";
/// Class the legacy engine applies to marked ranges.
pub const LEGACY_MARK_CLASS: &str = "copyflash-marked";
/// `id` of the injected `<style>` element.
pub const STYLE_ELEMENT_ID: &str = "copyflash-style";

/// Custom property carrying the highlight background color.
pub const BACKGROUND_PROPERTY: &str = "--copyflash-background";
/// Custom property carrying the highlighted-text color.
pub const FOREGROUND_PROPERTY: &str = "--copyflash-foreground";
/// Custom property carrying the highlight duration.
pub const DURATION_PROPERTY: &str = "--copyflash-duration";

/// Selector for the raw-markdown editing surface.
pub const SOURCE_VIEW_SELECTOR: &str = ".markdown-source-view";
/// Selector for the rendered preview surface.
pub const PREVIEW_VIEW_SELECTOR: &str = ".markdown-preview-view";

/// Settings resolved to concrete CSS property values.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedStyle {
    /// Background color; never empty.
    pub background: String,
    /// Text color; `inherit` when the user left it empty.
    pub foreground: String,
    /// Duration with the `ms` unit attached.
    pub duration: String,
}

impl ResolvedStyle {
    /// Resolve user settings to property values.
    ///
    /// Empty colors select their fallback here rather than in CSS, so the
    /// values written to the document root are always well-formed.
    pub fn resolve(settings: &HighlightSettings) -> Self {
        let background = if settings.background_color.is_empty() {
            DEFAULT_BACKGROUND_COLOR.to_string()
        } else {
            settings.background_color.clone()
        };
        let foreground = if settings.foreground_color.is_empty() {
            "inherit".to_string()
        } else {
            settings.foreground_color.clone()
        };
        Self {
            background,
            foreground,
            duration: format!("{}ms", settings.duration_ms),
        }
    }
}

/// The static stylesheet injected at plugin load.
///
/// The `::selection` rules only match while [`MARKER_CLASS`] is on the
/// document root. The legacy-mark rule stands alone: marked ranges live
/// on their own timer and must stay styled after the session reverts.
pub fn highlight_stylesheet() -> String {
    format!(
        "\
:root {{
  {bg_prop}: {bg_default};
  {fg_prop}: inherit;
  {dur_prop}: {dur_default}ms;
}}

.{marker} {source} ::selection,
.{marker} {preview} ::selection {{
  background-color: var({bg_prop}, {bg_default});
  color: var({fg_prop}, inherit);
  transition:
    background-color var({dur_prop}, {dur_default}ms) ease-in-out,
    color var({dur_prop}, {dur_default}ms) ease-in-out;
}}

.{legacy_mark} {{
  background-color: var({bg_prop}, {bg_default});
  color: var({fg_prop}, inherit);
}}
",
        marker = MARKER_CLASS,
        legacy_mark = LEGACY_MARK_CLASS,
        source = SOURCE_VIEW_SELECTOR,
        preview = PREVIEW_VIEW_SELECTOR,
        bg_prop = BACKGROUND_PROPERTY,
        fg_prop = FOREGROUND_PROPERTY,
        dur_prop = DURATION_PROPERTY,
        bg_default = DEFAULT_BACKGROUND_COLOR,
        dur_default = DEFAULT_DURATION_MS,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_explicit_settings() {
        let settings = HighlightSettings {
            background_color: "red".to_string(),
            foreground_color: String::new(),
            duration_ms: 200,
        };
        let style = ResolvedStyle::resolve(&settings);
        insta::assert_snapshot!(
            format!("{:?}", style),
            @r#"ResolvedStyle { background: "red", foreground: "inherit", duration: "200ms" }"#
        );
    }

    #[test]
    fn test_resolve_empty_background_uses_default() {
        let settings = HighlightSettings {
            background_color: String::new(),
            foreground_color: "white".to_string(),
            duration_ms: 1000,
        };
        let style = ResolvedStyle::resolve(&settings);
        assert_eq!(style.background, DEFAULT_BACKGROUND_COLOR);
        assert_eq!(style.foreground, "white");
        assert_eq!(style.duration, "1000ms");
    }

    #[test]
    fn test_stylesheet_scopes_selection_rules_to_marker() {
        let css = highlight_stylesheet();
        assert!(css.contains(".copyflash-active .markdown-source-view ::selection"));
        assert!(css.contains(".copyflash-active .markdown-preview-view ::selection"));
        // Legacy marks live and die with their own timer, not the session
        // marker, so their rule must not require the marker class.
        assert!(css.contains("\n.copyflash-marked {"));
    }

    #[test]
    fn test_stylesheet_defines_fallback_properties() {
        let css = highlight_stylesheet();
        assert!(css.contains("--copyflash-background: #ffe066;"));
        assert!(css.contains("--copyflash-foreground: inherit;"));
        assert!(css.contains("--copyflash-duration: 1000ms;"));
        assert!(css.contains("var(--copyflash-background, #ffe066)"));
        assert!(css.contains("var(--copyflash-duration, 1000ms)"));
    }
}
