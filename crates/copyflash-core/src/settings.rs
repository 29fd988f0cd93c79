//! Persisted highlight settings and their merge/validation rules.
//!
//! Settings live in the host's key/value store as a small JSON blob with
//! camelCase keys. Loading is deliberately lenient: every missing or
//! wrong-typed field falls back to its default individually, so a blob
//! written by an older or newer build never blocks startup.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Default highlight background (warm yellow).
pub const DEFAULT_BACKGROUND_COLOR: &str = "#ffe066";
/// Default highlight foreground: empty means "inherit the surrounding color".
pub const DEFAULT_FOREGROUND_COLOR: &str = "";
/// Default highlight duration in milliseconds.
pub const DEFAULT_DURATION_MS: u32 = 1000;

/// User-configurable highlight settings.
///
/// The serde attributes describe the persisted wire shape:
/// `{"backgroundColor": "...", "foregroundColor": "...", "duration": ...}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HighlightSettings {
    /// CSS color for the highlight background. Empty selects the default.
    pub background_color: String,
    /// CSS color for highlighted text. Empty inherits the surrounding
    /// color.
    pub foreground_color: String,
    /// How long a highlight stays before reverting, in milliseconds.
    #[serde(rename = "duration")]
    pub duration_ms: u32,
}

impl Default for HighlightSettings {
    fn default() -> Self {
        Self {
            background_color: DEFAULT_BACKGROUND_COLOR.to_string(),
            foreground_color: DEFAULT_FOREGROUND_COLOR.to_string(),
            duration_ms: DEFAULT_DURATION_MS,
        }
    }
}

impl HighlightSettings {
    /// Merge a persisted blob over the defaults, field by field.
    ///
    /// `None`, non-object blobs, and individually missing or wrong-typed
    /// fields each fall back to the default for that field. This never
    /// fails: the worst possible blob yields pure defaults.
    pub fn merge_value(persisted: Option<&Value>) -> Self {
        let mut settings = Self::default();
        let Some(Value::Object(map)) = persisted else {
            return settings;
        };
        if let Some(Value::String(color)) = map.get("backgroundColor") {
            settings.background_color = color.clone();
        }
        if let Some(Value::String(color)) = map.get("foregroundColor") {
            settings.foreground_color = color.clone();
        }
        if let Some(duration) = map.get("duration").and_then(Value::as_u64) {
            settings.duration_ms = u32::try_from(duration).unwrap_or(u32::MAX);
        }
        settings
    }

    /// The persisted wire shape of these settings.
    pub fn to_value(&self) -> Value {
        serde_json::json!({
            "backgroundColor": self.background_color,
            "foregroundColor": self.foreground_color,
            "duration": self.duration_ms,
        })
    }
}

/// Parse a duration field edit. Whitespace is tolerated; anything that is
/// not a plain non-negative integer is rejected.
pub fn parse_duration(input: &str) -> Option<u32> {
    input.trim().parse().ok()
}

/// Coerce a duration field edit to a storable value.
///
/// A rejected edit keeps the prior stored value; with no prior value the
/// hardcoded default applies.
pub fn coerce_duration(input: &str, prior: Option<u32>) -> u32 {
    match parse_duration(input) {
        Some(ms) => ms,
        None => prior.unwrap_or(DEFAULT_DURATION_MS),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_merge_missing_blob_is_defaults() {
        assert_eq!(
            HighlightSettings::merge_value(None),
            HighlightSettings::default()
        );
    }

    #[test]
    fn test_merge_non_object_blob_is_defaults() {
        let blob = json!("#123456");
        assert_eq!(
            HighlightSettings::merge_value(Some(&blob)),
            HighlightSettings::default()
        );
        let blob = json!(null);
        assert_eq!(
            HighlightSettings::merge_value(Some(&blob)),
            HighlightSettings::default()
        );
    }

    #[test]
    fn test_merge_partial_blob_keeps_other_defaults() {
        let blob = json!({ "backgroundColor": "tomato" });
        let settings = HighlightSettings::merge_value(Some(&blob));
        assert_eq!(settings.background_color, "tomato");
        assert_eq!(settings.foreground_color, DEFAULT_FOREGROUND_COLOR);
        assert_eq!(settings.duration_ms, DEFAULT_DURATION_MS);
    }

    #[test]
    fn test_merge_wrong_typed_fields_fall_back_individually() {
        let blob = json!({
            "backgroundColor": 42,
            "foregroundColor": "white",
            "duration": "fast",
        });
        let settings = HighlightSettings::merge_value(Some(&blob));
        assert_eq!(settings.background_color, DEFAULT_BACKGROUND_COLOR);
        assert_eq!(settings.foreground_color, "white");
        assert_eq!(settings.duration_ms, DEFAULT_DURATION_MS);
    }

    #[test]
    fn test_merge_negative_or_fractional_duration_falls_back() {
        let blob = json!({ "duration": -200 });
        assert_eq!(
            HighlightSettings::merge_value(Some(&blob)).duration_ms,
            DEFAULT_DURATION_MS
        );
        let blob = json!({ "duration": 99.5 });
        assert_eq!(
            HighlightSettings::merge_value(Some(&blob)).duration_ms,
            DEFAULT_DURATION_MS
        );
    }

    #[test]
    fn test_merge_ignores_unknown_fields() {
        let blob = json!({ "duration": 250, "legacyOption": true });
        let settings = HighlightSettings::merge_value(Some(&blob));
        assert_eq!(settings.duration_ms, 250);
        assert_eq!(settings.background_color, DEFAULT_BACKGROUND_COLOR);
    }

    #[test]
    fn test_wire_shape() {
        insta::assert_snapshot!(
            HighlightSettings::default().to_value().to_string(),
            @r##"{"backgroundColor":"#ffe066","duration":1000,"foregroundColor":""}"##
        );
    }

    #[test]
    fn test_wire_shape_round_trips_through_serde() {
        let settings = HighlightSettings {
            background_color: "red".to_string(),
            foreground_color: "#222".to_string(),
            duration_ms: 150,
        };
        let parsed: HighlightSettings = serde_json::from_value(settings.to_value()).unwrap();
        assert_eq!(parsed, settings);
    }

    #[test]
    fn test_parse_duration_accepts_plain_integers() {
        assert_eq!(parse_duration("200"), Some(200));
        assert_eq!(parse_duration("  42  "), Some(42));
        assert_eq!(parse_duration("0"), Some(0));
    }

    #[test]
    fn test_parse_duration_rejects_garbage() {
        assert_eq!(parse_duration(""), None);
        assert_eq!(parse_duration("abc"), None);
        assert_eq!(parse_duration("12a"), None);
        assert_eq!(parse_duration("-5"), None);
        assert_eq!(parse_duration("1.5"), None);
    }

    #[test]
    fn test_coerce_duration_keeps_prior_on_reject() {
        assert_eq!(coerce_duration("300", Some(1000)), 300);
        assert_eq!(coerce_duration("nope", Some(700)), 700);
        assert_eq!(coerce_duration("nope", None), DEFAULT_DURATION_MS);
    }
}
