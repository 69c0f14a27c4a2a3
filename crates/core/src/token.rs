//! Token data types shared across the compiler passes.
//!
//! A [`TokenRecord`] is one declaration lifted out of a source document:
//! the hierarchical path to the declaration, the document it came from,
//! the raw value, and the declared type string if the document carried one.

use serde_json::Value;

/// Which family of source document a token came from. The family decides
/// which normalization rules apply and which output surface receives the
/// binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    /// Foundation scales: colors, spacing steps, radii, base typography.
    Primitive,
    /// Mode-bearing semantic colors (light/dark values per token).
    Theme,
    /// Everything else: component spacing, widths, containers, named
    /// typography styles.
    Semantic,
}

impl DocumentKind {
    /// Classify a document by its file name. The match is on the file
    /// stem, case-insensitive, so `Primitives.json`, `primitives-v2.json`
    /// and `sub/Themes.json` all classify as expected.
    pub fn from_file(file: &str) -> Self {
        let stem = file
            .rsplit('/')
            .next()
            .unwrap_or(file)
            .trim_end_matches(".json")
            .to_lowercase();
        if stem.starts_with("primitives") {
            DocumentKind::Primitive
        } else if stem.starts_with("themes") {
            DocumentKind::Theme
        } else {
            DocumentKind::Semantic
        }
    }
}

/// The raw value of a token as authored, before any formatting.
#[derive(Debug, Clone, PartialEq)]
pub enum RawValue {
    /// A bare number (spacing step, radius, line height, ...).
    Number(serde_json::Number),
    /// A plain string (hex color, font name, weight name, ...).
    Literal(String),
    /// A brace-wrapped reference to another token, kept verbatim
    /// including the braces.
    Reference(String),
    /// A map from mode name to a per-mode value, in document order.
    Modes(ModeEntries),
    /// Anything else (booleans, arrays, nulls). Rejected when formatted.
    Unsupported(Value),
}

/// Mode maps keep their entries in document order so that output is
/// stable across runs.
pub type ModeEntries = Vec<(String, RawValue)>;

impl RawValue {
    /// Classify a JSON value from a token's `$value` field.
    pub fn from_json(value: &Value) -> RawValue {
        match value {
            Value::Number(n) => RawValue::Number(n.clone()),
            Value::String(s) => {
                if s.trim_start().starts_with('{') {
                    RawValue::Reference(s.clone())
                } else {
                    RawValue::Literal(s.clone())
                }
            }
            Value::Object(map) => {
                let entries: ModeEntries = map
                    .iter()
                    .map(|(k, v)| (k.clone(), RawValue::from_json(v)))
                    .collect();
                RawValue::Modes(entries)
            }
            other => RawValue::Unsupported(other.clone()),
        }
    }

    /// Short human-readable label for diagnostics.
    pub fn describe(&self) -> &'static str {
        match self {
            RawValue::Number(_) => "number",
            RawValue::Literal(_) => "string",
            RawValue::Reference(_) => "reference",
            RawValue::Modes(_) => "mode map",
            RawValue::Unsupported(_) => "unsupported value",
        }
    }
}

/// One token declaration from a source document.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenRecord {
    /// Hierarchical path of group names down to the token, as authored.
    pub path: Vec<String>,
    /// Source document, relative to the tokens root (e.g. `Themes.json`).
    pub file: String,
    /// Raw value, unformatted.
    pub value: RawValue,
    /// Declared `$type` string, if present (`color`, `dimension`, ...).
    pub declared_type: Option<String>,
}

impl TokenRecord {
    /// Document family this token belongs to.
    pub fn kind(&self) -> DocumentKind {
        DocumentKind::from_file(&self.file)
    }

    /// Dotted path used when naming the token in diagnostics.
    pub fn pointer(&self) -> String {
        self.path.join(".")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn document_kind_from_file() {
        assert_eq!(
            DocumentKind::from_file("Primitives.json"),
            DocumentKind::Primitive
        );
        assert_eq!(
            DocumentKind::from_file("tokens/Themes.json"),
            DocumentKind::Theme
        );
        assert_eq!(
            DocumentKind::from_file("Spacing.json"),
            DocumentKind::Semantic
        );
        assert_eq!(
            DocumentKind::from_file("containers.json"),
            DocumentKind::Semantic
        );
    }

    #[test]
    fn raw_value_classifies_number() {
        assert_eq!(
            RawValue::from_json(&json!(16)),
            RawValue::Number(serde_json::Number::from(16))
        );
    }

    #[test]
    fn raw_value_classifies_reference_vs_literal() {
        assert_eq!(
            RawValue::from_json(&json!("{Primitives.Colors.Base.white}")),
            RawValue::Reference("{Primitives.Colors.Base.white}".to_string())
        );
        assert_eq!(
            RawValue::from_json(&json!("#ffffff")),
            RawValue::Literal("#ffffff".to_string())
        );
    }

    #[test]
    fn raw_value_classifies_mode_map_in_order() {
        let v = RawValue::from_json(&json!({
            "Light": "{Primitives.Colors.Base.white}",
            "Dark": "#1a1a1a"
        }));
        match v {
            RawValue::Modes(entries) => {
                assert_eq!(entries.len(), 2);
                assert_eq!(entries[0].0, "Light");
                assert_eq!(entries[1].0, "Dark");
            }
            other => panic!("expected mode map, got {other:?}"),
        }
    }

    #[test]
    fn raw_value_classifies_unsupported() {
        assert!(matches!(
            RawValue::from_json(&json!(true)),
            RawValue::Unsupported(_)
        ));
        assert!(matches!(
            RawValue::from_json(&json!([1, 2])),
            RawValue::Unsupported(_)
        ));
    }

    #[test]
    fn pointer_joins_path_with_dots() {
        let record = TokenRecord {
            path: vec!["Background".into(), "Background".into(), "Primary".into()],
            file: "Themes.json".into(),
            value: RawValue::Literal("#fff".into()),
            declared_type: Some("color".into()),
        };
        assert_eq!(record.pointer(), "Background.Background.Primary");
        assert_eq!(record.kind(), DocumentKind::Theme);
    }
}
