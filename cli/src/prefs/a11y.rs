//! # Accessibility Preferences
//!
//! File: cli/src/prefs/a11y.rs
//!
//! ## Overview
//!
//! Four settings the visitor can toggle: reduced motion, high contrast, text
//! scale and a dyslexia-friendly font. The page reacts to them through CSS
//! custom properties and utility classes on the document root; both are
//! computed here as plain data so any renderer can apply them.
//!
//! | Setting | CSS variable | Root class |
//! |---|---|---|
//! | `reduce_motion` | `--a11y-motion` (`0` when reduced, else `1`) | `reduced-motion-none` |
//! | `high_contrast` | `--a11y-contrast` (`1` when on, else `0`) | `a11y-high-contrast` |
//! | `text_scale` | `--a11y-text-scale` | |
//! | `dyslexia` | | `a11y-dyslexia` |
//!
//! ## Stored form
//!
//! ```json
//! {"reduceMotion":false,"highContrast":true,"textScale":1.1,"dyslexia":false}
//! ```
//!
//! Reading is lenient: unknown fields are ignored, a flag is on when its value
//! is truthy, a non-numeric scale becomes `1`. Input that is not a JSON object
//! yields the defaults.
//!
use serde::Serialize;
use serde_json::Value;

pub const MIN_TEXT_SCALE: f32 = 0.9;
pub const MAX_TEXT_SCALE: f32 = 1.3;
pub const DEFAULT_TEXT_SCALE: f32 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct A11yPrefs {
    pub reduce_motion: bool,
    pub high_contrast: bool,
    pub text_scale: f32,
    pub dyslexia: bool,
}

impl Default for A11yPrefs {
    fn default() -> Self {
        Self {
            reduce_motion: false,
            high_contrast: false,
            text_scale: DEFAULT_TEXT_SCALE,
            dyslexia: false,
        }
    }
}

/// A partial update. `None` fields keep their current value.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct A11yPatch {
    pub reduce_motion: Option<bool>,
    pub high_contrast: Option<bool>,
    pub text_scale: Option<f32>,
    pub dyslexia: Option<bool>,
}

impl A11yPatch {
    pub fn is_empty(&self) -> bool {
        *self == A11yPatch::default()
    }
}

/// Clamps into `[0.9, 1.3]`. Non-finite input falls back to `1.0`.
pub fn clamp_text_scale(scale: f32) -> f32 {
    if scale.is_finite() {
        scale.clamp(MIN_TEXT_SCALE, MAX_TEXT_SCALE)
    } else {
        DEFAULT_TEXT_SCALE
    }
}

fn truthy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|n| n != 0.0),
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(_)) | Some(Value::Object(_)) => true,
    }
}

impl A11yPrefs {
    /// Parses the stored JSON form, falling back to defaults when it is not
    /// an object.
    pub fn from_stored(raw: &str) -> Self {
        let value: Value = match serde_json::from_str(raw) {
            Ok(value) => value,
            Err(_) => return Self::default(),
        };
        let Some(object) = value.as_object() else {
            return Self::default();
        };
        Self {
            reduce_motion: truthy(object.get("reduceMotion")),
            high_contrast: truthy(object.get("highContrast")),
            text_scale: object
                .get("textScale")
                .and_then(Value::as_f64)
                .map(|scale| clamp_text_scale(scale as f32))
                .unwrap_or(DEFAULT_TEXT_SCALE),
            dyslexia: truthy(object.get("dyslexia")),
        }
    }

    pub fn to_stored(&self) -> String {
        // Serializing four plain fields cannot fail.
        serde_json::to_string(self).unwrap_or_default()
    }

    /// Applies the set fields of `patch`, clamping the scale.
    pub fn apply(&mut self, patch: A11yPatch) {
        if let Some(reduce_motion) = patch.reduce_motion {
            self.reduce_motion = reduce_motion;
        }
        if let Some(high_contrast) = patch.high_contrast {
            self.high_contrast = high_contrast;
        }
        if let Some(text_scale) = patch.text_scale {
            self.text_scale = clamp_text_scale(text_scale);
        }
        if let Some(dyslexia) = patch.dyslexia {
            self.dyslexia = dyslexia;
        }
    }

    pub fn css_variables(&self) -> Vec<(&'static str, String)> {
        vec![
            ("--a11y-text-scale", self.text_scale.to_string()),
            (
                "--a11y-motion",
                if self.reduce_motion { "0" } else { "1" }.to_string(),
            ),
            (
                "--a11y-contrast",
                if self.high_contrast { "1" } else { "0" }.to_string(),
            ),
        ]
    }

    /// Root classes that are active for these settings, in a fixed order.
    pub fn root_classes(&self) -> Vec<&'static str> {
        let mut classes = Vec::new();
        if self.reduce_motion {
            classes.push("reduced-motion-none");
        }
        if self.high_contrast {
            classes.push("a11y-high-contrast");
        }
        if self.dyslexia {
            classes.push("a11y-dyslexia");
        }
        classes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let prefs = A11yPrefs::default();
        assert!(!prefs.reduce_motion);
        assert!(!prefs.high_contrast);
        assert_eq!(prefs.text_scale, 1.0);
        assert!(!prefs.dyslexia);
        assert!(prefs.root_classes().is_empty());
    }

    #[test]
    fn test_from_stored_clamps_scale() {
        let prefs = A11yPrefs::from_stored(r#"{"textScale": 2.5}"#);
        assert_eq!(prefs.text_scale, MAX_TEXT_SCALE);
        let prefs = A11yPrefs::from_stored(r#"{"textScale": 0.2}"#);
        assert_eq!(prefs.text_scale, MIN_TEXT_SCALE);
        let prefs = A11yPrefs::from_stored(r#"{"textScale": "big"}"#);
        assert_eq!(prefs.text_scale, DEFAULT_TEXT_SCALE);
    }

    #[test]
    fn test_from_stored_is_lenient() {
        let prefs = A11yPrefs::from_stored(
            r#"{"reduceMotion": 1, "highContrast": "", "dyslexia": true, "extra": 5}"#,
        );
        assert!(prefs.reduce_motion);
        assert!(!prefs.high_contrast);
        assert!(prefs.dyslexia);

        assert_eq!(A11yPrefs::from_stored("{not json"), A11yPrefs::default());
        assert_eq!(A11yPrefs::from_stored("[1,2]"), A11yPrefs::default());
        assert_eq!(A11yPrefs::from_stored("null"), A11yPrefs::default());
    }

    #[test]
    fn test_stored_form_uses_camel_case() {
        let prefs = A11yPrefs {
            high_contrast: true,
            ..Default::default()
        };
        let stored = prefs.to_stored();
        assert!(stored.contains("\"highContrast\":true"));
        assert!(stored.contains("\"reduceMotion\":false"));
        assert_eq!(A11yPrefs::from_stored(&stored), prefs);
    }

    #[test]
    fn test_apply_patch() {
        let mut prefs = A11yPrefs::default();
        prefs.apply(A11yPatch {
            reduce_motion: Some(true),
            ..Default::default()
        });
        assert!(prefs.reduce_motion);
        assert!(!prefs.high_contrast);
        assert_eq!(prefs.text_scale, 1.0);

        prefs.apply(A11yPatch {
            text_scale: Some(5.0),
            ..Default::default()
        });
        assert_eq!(prefs.text_scale, MAX_TEXT_SCALE);
        assert!(prefs.reduce_motion);

        prefs.apply(A11yPatch {
            text_scale: Some(f32::NAN),
            ..Default::default()
        });
        assert_eq!(prefs.text_scale, DEFAULT_TEXT_SCALE);
    }

    #[test]
    fn test_document_effects() {
        let prefs = A11yPrefs {
            reduce_motion: true,
            high_contrast: true,
            text_scale: 1.1,
            dyslexia: true,
        };
        assert_eq!(
            prefs.css_variables(),
            vec![
                ("--a11y-text-scale", "1.1".to_string()),
                ("--a11y-motion", "0".to_string()),
                ("--a11y-contrast", "1".to_string()),
            ]
        );
        assert_eq!(
            prefs.root_classes(),
            vec!["reduced-motion-none", "a11y-high-contrast", "a11y-dyslexia"]
        );

        let vars = A11yPrefs::default().css_variables();
        assert_eq!(vars[0].1, "1");
        assert_eq!(vars[1].1, "1");
        assert_eq!(vars[2].1, "0");
    }
}
