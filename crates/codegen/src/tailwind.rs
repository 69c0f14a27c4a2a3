//! Utility re-export sheet for Tailwind v4 `@theme` consumption.
//!
//! The sheet never re-states a value: every line aliases a utility-shaped
//! name to the canonical variable with `var()`, so the cascade in the base
//! and mode stylesheets stays authoritative. Primitive families keep their
//! canonical names (or map onto Tailwind's `font`/`text`/`leading`
//! namespaces); theme variables are reshaped through the alias rules in
//! the core crate so utilities like `bg-*` and `text-color-*` can find
//! them.

use std::collections::HashSet;

use tokenc_core::compile::Compilation;
use tokenc_core::normalize::utility_alias;
use tokenc_core::token::DocumentKind;

use crate::surface::{mode_artifact_name, SurfaceConfig};

/// Tailwind namespaces cleared before the alias lines re-populate them.
const RESET_FAMILIES: &[&str] = &[
    "color", "spacing", "radius", "font", "leading", "text", "width",
];

const UTILITIES: &str = r#"/* Custom utilities */
@utility bg-* {
  background-color: --value(--background-*);
}

@utility text-color-* {
  color: --value(--text-*);
}

@utility border-color-* {
  border-color: --value(--border-*);
}

@utility rounded-* {
  border-radius: --value(--radius-*);
}

@utility w-* {
  width: --value(--width-*);
}

@utility min-w-* {
  min-width: --value(--width-*);
}

@utility max-w-* {
  max-width: --value(--width-*);
}
"#;

/// Render the utility re-export sheet for a compilation.
pub fn emit(compilation: &Compilation, config: &SurfaceConfig) -> String {
    let mut out = String::new();
    out.push_str("@import 'tailwindcss';\n");
    if let Some(prefix) = &config.utility_prefix {
        out.push_str(&format!("@import 'tailwindcss' prefix({});\n", prefix));
    }
    out.push_str(&format!("@import './{}';\n", config.globals));
    for block in &compilation.modes {
        if let Some(mode) = &block.mode {
            out.push_str(&format!("@import './{}';\n", mode_artifact_name(mode)));
        }
    }
    out.push('\n');
    out.push_str("@theme {\n");
    out.push_str("  /* Reset defaults */\n");
    for family in RESET_FAMILIES {
        out.push_str(&format!("  --{}-*: initial;\n", family));
    }
    out.push('\n');
    for line in alias_lines(compilation) {
        out.push_str(&line);
        out.push('\n');
    }
    out.push_str("}\n\n");
    out.push_str(UTILITIES);
    out
}

fn alias_lines(compilation: &Compilation) -> Vec<String> {
    let mut lines = Vec::new();
    let mut seen = HashSet::new();
    for binding in &compilation.root.bindings {
        if binding.kind != DocumentKind::Primitive {
            continue;
        }
        if let Some(alias) = primitive_alias(&binding.ident) {
            push_alias(&mut lines, &mut seen, &alias, &binding.ident);
        }
    }
    for block in &compilation.modes {
        for binding in &block.bindings {
            // Alpha overlays stay mode-scoped; utilities read them via the
            // cascade rather than a theme alias.
            if binding.ident.starts_with("alpha-") {
                continue;
            }
            let alias = utility_alias(&binding.ident);
            push_alias(&mut lines, &mut seen, &alias, &binding.ident);
        }
    }
    lines
}

fn push_alias(lines: &mut Vec<String>, seen: &mut HashSet<String>, alias: &str, target: &str) {
    if seen.insert(alias.to_string()) {
        lines.push(format!("  --{}: var(--{});", alias, target));
    }
}

/// Map a primitive variable onto its Tailwind namespace, or `None` when
/// the family has no utility counterpart.
fn primitive_alias(ident: &str) -> Option<String> {
    if ident.starts_with("color-") {
        return Some(ident.to_string());
    }
    if let Some(step) = ident.strip_prefix("spacing-") {
        if is_step(step) {
            return Some(ident.to_string());
        }
        return None;
    }
    if ident.starts_with("radius-") {
        return Some(ident.to_string());
    }
    if let Some(rest) = ident.strip_prefix("typography-font-family-") {
        return Some(format!("font-{}", rest));
    }
    if let Some(rest) = ident.strip_prefix("typography-font-weight-") {
        return Some(format!("font-weight-{}", rest));
    }
    if let Some(rest) = ident.strip_prefix("typography-text-size-") {
        return Some(format!("text-{}", rest));
    }
    if let Some(rest) = ident.strip_prefix("typography-line-height-") {
        return Some(format!("leading-{}", rest));
    }
    None
}

fn is_step(rest: &str) -> bool {
    !rest.is_empty()
        && rest.chars().any(|c| c.is_ascii_digit())
        && rest.chars().all(|c| c.is_ascii_digit() || c == '_')
}
