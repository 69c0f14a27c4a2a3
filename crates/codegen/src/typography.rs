//! Typography class stage -- text-size classes in root-relative units.
//!
//! This is the only place pixel values are scaled to rem. Variable
//! declarations always carry the raw number, so running the conversion
//! here and only here avoids double scaling.

use tokenc_core::assemble::Binding;
use tokenc_core::token::DocumentKind;

/// Root font size used for pixel-to-rem scaling.
const REM_BASE: f64 = 16.0;

/// Render one `.text-<step>` class per primitive text-size binding.
///
/// Bindings whose value is not a plain number (references, keywords) are
/// skipped; the class stage only consumes resolved pixel literals.
pub fn emit(bindings: &[Binding]) -> String {
    let mut out = String::new();
    for binding in bindings {
        if binding.kind != DocumentKind::Primitive {
            continue;
        }
        let Some(step) = binding.ident.strip_prefix("typography-text-size-") else {
            continue;
        };
        let Ok(px) = binding.value.parse::<f64>() else {
            continue;
        };
        out.push_str(&format!(
            ".text-{} {{\n  font-size: {};\n}}\n\n",
            step,
            rem(px)
        ));
    }
    out
}

/// Scale a pixel value to rem against the 16px root size.
pub fn rem(px: f64) -> String {
    format!("{}rem", px / REM_BASE)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_size(step: &str, value: &str) -> Binding {
        Binding {
            ident: format!("typography-text-size-{}", step),
            value: value.to_string(),
            kind: DocumentKind::Primitive,
            source: "Primitives.json:test".to_string(),
        }
    }

    #[test]
    fn scales_pixels_by_sixteen() {
        assert_eq!(rem(16.0), "1rem");
        assert_eq!(rem(24.0), "1.5rem");
        assert_eq!(rem(14.0), "0.875rem");
        assert_eq!(rem(0.0), "0rem");
    }

    #[test]
    fn emits_one_class_per_text_size_binding() {
        let bindings = vec![text_size("100", "14"), text_size("200", "24")];
        assert_eq!(
            emit(&bindings),
            ".text-100 {\n  font-size: 0.875rem;\n}\n\n.text-200 {\n  font-size: 1.5rem;\n}\n\n"
        );
    }

    #[test]
    fn skips_non_text_size_and_non_numeric_bindings() {
        let bindings = vec![
            Binding {
                ident: "typography-font-weight-bold".to_string(),
                value: "700".to_string(),
                kind: DocumentKind::Primitive,
                source: "Primitives.json:test".to_string(),
            },
            text_size("ref", "var(--typography-text-size-100)"),
            Binding {
                ident: "typography-text-size-300".to_string(),
                value: "32".to_string(),
                kind: DocumentKind::Semantic,
                source: "Typography.json:test".to_string(),
            },
        ];
        assert_eq!(emit(&bindings), "");
    }
}
