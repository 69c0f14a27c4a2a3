//! Reference resolution -- maps a brace-wrapped dotted reference to the
//! canonical identifier of the token it points at.
//!
//! References are human-authored (`{Primitives.Spacing.4 (16px)}`), so
//! they carry the same naming noise as source paths. The resolver
//! canonicalizes the dotted notation and then runs the exact rule engine
//! from [`crate::normalize`]: resolving a reference to token T always
//! yields the identifier normalizing T's own path yields. A mismatch
//! between the two would emit a binding pointing at a name no token
//! declares, which is why they share one engine instead of two rule sets.

use crate::normalize::{kebab, normalize_name, strip_annotation, underscore_decimal_steps, Normalized};
use crate::token::DocumentKind;

/// Resolve a raw reference string to a canonical identifier.
///
/// Total like the normalizer: an unrecognized category falls back to a
/// plain dot-to-hyphen join with `matched` set to false.
pub fn resolve_reference(raw: &str) -> Normalized {
    let body = reference_body(raw);
    let lowered = body.to_lowercase();
    // Underscore decimal steps before splitting, otherwise the decimal
    // point in a spacing step would read as a path separator.
    let underscored = underscore_decimal_steps(&lowered);
    let joined = underscored.split('.').map(kebab).collect::<Vec<_>>().join("-");
    let kind = if joined.starts_with("themes-") {
        DocumentKind::Theme
    } else {
        DocumentKind::Semantic
    };
    normalize_name(&joined, kind)
}

/// Strip the wrapping braces and any trailing parenthetical annotation.
fn reference_body(raw: &str) -> &str {
    let body = raw.trim();
    let body = body.strip_prefix('{').unwrap_or(body);
    let body = body.strip_suffix('}').unwrap_or(body);
    strip_annotation(body.trim())
}
