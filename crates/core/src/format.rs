//! Value formatting -- produces the right-hand side text of an output
//! binding from a token's literal or resolved reference.
//!
//! References are always emitted as indirect `var(--...)` bindings, never
//! inlined: a theme can then re-point one alias instead of regenerating
//! every dependent declaration. Numbers pass through unscaled here; the
//! pixel-to-rem conversion happens only in the typography class stage so
//! a value is never converted twice.

use crate::error::CompileError;
use crate::token::{RawValue, TokenRecord};

/// Authoring-tool font weight names and their CSS numeric weights.
/// Italic variants map to the same weight as their upright counterpart.
/// The casing matches the source data, including the lower-case "italic"
/// in the last entry.
const FONT_WEIGHTS: &[(&str, u16)] = &[
    ("Bold", 700),
    ("Semibold", 600),
    ("Medium", 500),
    ("Regular", 400),
    ("Italic", 400),
    ("Medium Italic", 500),
    ("Semibold Italic", 600),
    ("Bold italic", 700),
];

/// A value ready for formatting: either the token's own literal, or the
/// canonical identifier its reference resolved to.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolved<'a> {
    Literal(&'a RawValue),
    Reference(String),
}

/// Format one binding value. `ident` is the token's canonical identifier,
/// used to recognize the font-family and font-weight categories when the
/// declared type is absent.
pub fn format_value(
    record: &TokenRecord,
    ident: &str,
    value: Resolved<'_>,
) -> Result<String, CompileError> {
    match value {
        Resolved::Reference(target) => Ok(format!("var(--{target})")),
        Resolved::Literal(RawValue::Number(n)) => Ok(n.to_string()),
        Resolved::Literal(RawValue::Literal(text)) => {
            if is_font_weight(record, ident) {
                for (name, weight) in FONT_WEIGHTS {
                    if *name == text.as_str() {
                        return Ok(weight.to_string());
                    }
                }
                // A weight name outside the table passes through as-is.
                return Ok(text.clone());
            }
            if is_font_family(record, ident) && text.contains(' ') {
                return Ok(format!("\"{text}\""));
            }
            Ok(text.clone())
        }
        Resolved::Literal(RawValue::Modes(_)) => Err(CompileError::MalformedValue {
            token: record.pointer(),
            file: record.file.clone(),
            detail: "mode map where a literal or reference is required".to_string(),
        }),
        Resolved::Literal(RawValue::Reference(raw)) => Err(CompileError::MalformedValue {
            token: record.pointer(),
            file: record.file.clone(),
            detail: format!("reference '{raw}' was not resolved before formatting"),
        }),
        Resolved::Literal(RawValue::Unsupported(v)) => Err(CompileError::MalformedValue {
            token: record.pointer(),
            file: record.file.clone(),
            detail: format!("expected a string, number, reference, or mode map, got: {v}"),
        }),
    }
}

fn is_font_weight(record: &TokenRecord, ident: &str) -> bool {
    matches!(
        record.declared_type.as_deref(),
        Some("fontWeights" | "fontWeight")
    ) || ident.contains("font-weight")
}

fn is_font_family(record: &TokenRecord, ident: &str) -> bool {
    matches!(
        record.declared_type.as_deref(),
        Some("fontFamilies" | "fontFamily")
    ) || ident.contains("font-family")
}
