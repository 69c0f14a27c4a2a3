//! Name normalization -- maps a token's hierarchical source path to its
//! canonical flat identifier.
//!
//! The source data accumulates years of inconsistent authoring: category
//! folders repeated as same-named leaf folders (`Background/Background`),
//! decimal spacing steps (`4.5`), a one-dot-leader character standing in
//! for the decimal point, misspelled sub-family names, and scoping
//! prefixes that must not survive into output. Each inconsistency is
//! handled by an entry in one of the ordered rule tables below; adding a
//! new one is a one-line table addition.
//!
//! The reference resolver in [`crate::resolve`] feeds the same tables, so
//! a reference to a token always resolves to the identifier this module
//! produces for that token's own path.

use crate::token::DocumentKind;

/// Result of normalizing one name: the canonical identifier plus whether
/// any category rule recognized it. A fallback-only result is still a
/// valid identifier but callers may want to warn about it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Normalized {
    pub ident: String,
    pub matched: bool,
}

// ── Rule tables ──────────────────────────────────────────────────────

/// Whole-name rewrites, checked before the prefix rules.
const EXACT_RULES: &[(&str, &str)] = &[
    ("radius-components-card-radius", "radius-card"),
    ("widths-max-width-paragraph-max-width", "paragraph-max-width"),
    ("containers-screen-width-max-width-desktop", "screen-max-width-desktop"),
    ("containers-screen-hight-min-hight-desktop", "screen-min-hight-desktop"),
];

/// Ordered category rules for primitive and semantic names. The first
/// matching prefix wins and is rewritten to its replacement; the rest of
/// the name is kept as-is.
const CATEGORY_RULES: &[(&str, &str)] = &[
    ("primitives-colors-alpha-alpha-", "color-alpha-"),
    ("primitives-colors-", "color-"),
    ("primitives-spacing-", "spacing-"),
    ("primitives-radius-radius-", "radius-"),
    ("radius-radius-radius-", "radius-"),
    ("spacing-card-card-", "spacing-card-"),
    ("spacing-section-section-", "spacing-section-"),
    ("spacing-text-text-", "spacing-text-"),
    ("spacing-icon-icon-", "spacing-icon-"),
    ("spacing-button-buttons-", "spacing-button-"),
    ("spacing-button-button-", "spacing-button-"),
    ("spacing-link-links-", "spacing-link-"),
    ("spacing-link-link-", "spacing-link-"),
    ("spacing-control-control-", "spacing-control-"),
    ("spacing-accordion-accordion-", "spacing-accordion-"),
    ("spacing-global-spacing-", "spacing-"),
    ("spacing-tooltip-tooltip-", "spacing-tooltip-"),
    ("spacing-form-", "spacing-"),
    ("spacing-tab-", "spacing-"),
    ("spacing-table-table-", "spacing-table-"),
    ("spacing-progress-indicator-progress-indicator-", "spacing-progress-indicator-"),
    ("spacing-pagination-pagination-", "spacing-pagination-"),
    // "model" is the authored spelling; the output keeps the intended "modal".
    ("spacing-model-modal-", "spacing-modal-"),
    ("spacing-notification-notification-", "spacing-notification-"),
    ("primitives-typography-size-text-size-", "typography-text-size-"),
    ("primitives-typography-font-family-font-family-", "typography-font-family-"),
    // The source spells it "hight"; output uses the correct spelling.
    ("primitives-typography-line-hight-line-hight-", "typography-line-height-"),
    ("primitives-typography-font-weight-font-weight-", "typography-font-weight-"),
    ("primitives-typography-paragraph-spacing-paragraph-spacing-", "typography-paragraph-spacing-"),
    ("typography-font-wieght-font-weight-", "typography-font-weight-"),
    ("typography-paragraph-spacing-display-paragraph-spacing-display-", "typography-paragraph-spacing-display-"),
    ("typography-paragraph-spacing-text-paragraph-spacing-text-", "typography-paragraph-spacing-text-"),
    ("typography-line-height-text-line-heights-text-", "typography-line-heights-text-"),
    ("typography-line-height-display-line-heights-display-", "typography-line-heights-display-"),
    ("typography-size-text-typo-size-", "typography-typo-size-"),
    ("typography-size-display-typo-size-", "typography-typo-size-"),
    ("widths-width-width-", "width-"),
    ("containers-container-max-width-", "container-max-width-"),
    ("containers-container-padding-", "container-padding-"),
];

/// Doubled category segments in theme names, collapsed to one occurrence.
/// The authoring tool nests a category folder and a same-named leaf
/// folder, so `Background/Background/Primary` arrives doubled.
const THEME_DOUBLED_SEGMENTS: &[(&str, &str)] = &[
    ("background-background-", "background-"),
    ("text-text-", "text-"),
    ("button-button-", "button-"),
    ("border-border-", "border-"),
    ("link-link-", "link-"),
    ("icon-icon-", "icon-"),
    ("alpha-alpha-", "alpha-"),
    ("controls-control-", "controls-"),
    ("table-table-", "table-"),
    ("stepper-stepper-", "stepper-"),
    ("tag-tag-", "tag-"),
    ("tooltip-tooltip-", "tooltip-"),
    ("chip-chip-", "chip-"),
    ("charts-charts-", "charts-"),
    ("progress-bar-progress-bar-", "progress-bar-"),
];

/// Form sub-group folders collapsed into the bare form category.
const THEME_FORM_GROUPS: &[(&str, &str)] = &[
    ("form-field-", "form-"),
    ("form-text-", "form-"),
    ("form-form-", "form-"),
    ("form-option-", "form-"),
    ("form-datecell-", "form-"),
    ("form-textarea-", "form-"),
];

/// One rename step for the utility alias surface. Steps are applied in
/// order to the same name and may compose: a stepper line token passes
/// through the reorder step and then the color prefix step.
#[derive(Debug, Clone, Copy)]
enum Rename {
    /// Rewrite a leading `from` to `to`.
    Prefix(&'static str, &'static str),
    /// Rewrite the whole name when it equals `from`.
    Exact(&'static str, &'static str),
    /// Prepend `prefix` when the name starts with `when`, except when it
    /// starts with one of the `unless` prefixes.
    Inject {
        prefix: &'static str,
        when: &'static str,
        unless: &'static [&'static str],
    },
}

/// Reorderings and prefix injections applied when deriving the renamed
/// alias for the utility re-export surface. Canonical identifiers are
/// never changed by these; the alias binds back to the canonical name.
const UTILITY_RENAMES: &[Rename] = &[
    Rename::Prefix("form-background-", "background-form-"),
    Rename::Prefix("form-border-", "border-form-"),
    Rename::Exact("form-placeholder", "text-form-placeholder"),
    Rename::Exact("form-focused", "text-form-focused"),
    Rename::Exact("form-filled", "text-form-filled"),
    Rename::Exact("form-helper", "text-form-helper"),
    Rename::Exact("form-label", "text-form-label"),
    Rename::Exact("form-title", "text-form-title"),
    Rename::Exact("form-paragraph", "text-form-paragraph"),
    Rename::Exact("form-readonly", "text-form-readonly"),
    Rename::Exact("form-hovered", "text-form-hovered"),
    Rename::Exact("form-pressed", "text-form-pressed"),
    Rename::Prefix("form-today-background-", "background-form-today-"),
    Rename::Prefix("button-background-", "background-button-"),
    Rename::Prefix("button-label-", "text-button-label-"),
    Rename::Inject {
        prefix: "text-",
        when: "link-",
        unless: &["link-icon-", "link-link-"],
    },
    Rename::Prefix("link-icon-", "icon-link-"),
    Rename::Prefix("link-link-", "icon-link-"),
    Rename::Prefix("chip-background-", "background-chip-"),
    Rename::Prefix("button-icon-", "icon-button-"),
    Rename::Prefix("table-text-", "text-table-"),
    Rename::Prefix("table-background-", "background-table-"),
    Rename::Prefix("table-cell-", "border-table-cell-"),
    // "boarder" is the authored spelling for borders in table and controls.
    Rename::Prefix("table-boarder-", "border-table-"),
    Rename::Prefix("stepper-button-", "button-stepper-"),
    Rename::Prefix("stepper-text-", "text-stepper-"),
    Rename::Prefix("stepper-line-", "line-stepper-"),
    Rename::Prefix("tag-background-", "background-tag-"),
    Rename::Prefix("tag-border-", "border-tag-"),
    Rename::Prefix("tag-text-", "text-tag-"),
    Rename::Prefix("tag-icon-", "icon-tag-"),
    Rename::Prefix("tooltip-background-", "background-tooltip-"),
    Rename::Prefix("tooltip-text-", "text-tooltip-"),
    Rename::Prefix("icon-background-", "background-icon-"),
    Rename::Prefix("controls-icon-", "icon-controls-"),
    Rename::Prefix("controls-border", "border-controls"),
    Rename::Prefix("controls-boarder", "border-controls"),
    Rename::Inject { prefix: "background-", when: "controls-primary", unless: &[] },
    Rename::Inject { prefix: "background-", when: "controls-neutral", unless: &[] },
    Rename::Inject { prefix: "background-", when: "controls-pressed", unless: &[] },
    Rename::Inject { prefix: "background-", when: "controls-ripple", unless: &[] },
    Rename::Inject { prefix: "background-", when: "controls-disabled", unless: &[] },
    Rename::Prefix("form-scrollbar-", "scrollbar-form-"),
    Rename::Inject { prefix: "color-", when: "charts-", unless: &[] },
    Rename::Prefix("progress-bar-", "background-progress-bar-"),
    Rename::Exact("tag-dot", "color-tag-dot"),
    Rename::Inject { prefix: "color-", when: "line-stepper-", unless: &[] },
];

// ── Entry points ─────────────────────────────────────────────────────

/// Normalize a token's source path to its canonical identifier.
///
/// Total and pure: every path produces some identifier. When no category
/// rule recognizes the name, the kebab-joined path is used as-is and
/// `matched` is false.
pub fn normalize(path: &[String], kind: DocumentKind) -> Normalized {
    let last = path.len().saturating_sub(1);
    let segments: Vec<String> = path
        .iter()
        .enumerate()
        .map(|(i, s)| if i == last { kebab(strip_annotation(s)) } else { kebab(s) })
        .collect();
    normalize_name(&segments.join("-"), kind)
}

/// Normalize an already-flattened, hyphen-joined name. This is the rule
/// engine shared by [`normalize`] and the reference resolver.
pub fn normalize_name(name: &str, kind: DocumentKind) -> Normalized {
    let name = name.to_lowercase();
    match kind {
        DocumentKind::Theme => normalize_theme_name(&name),
        DocumentKind::Primitive | DocumentKind::Semantic => normalize_flat_name(&name),
    }
}

/// Derive the renamed alias used on the utility re-export surface.
/// Returns the identifier unchanged when no rename step applies.
pub fn utility_alias(ident: &str) -> String {
    let mut name = ident.to_string();
    for step in UTILITY_RENAMES {
        match step {
            Rename::Prefix(from, to) => {
                if let Some(rest) = name.strip_prefix(from) {
                    name = format!("{to}{rest}");
                }
            }
            Rename::Exact(from, to) => {
                if name == *from {
                    name = (*to).to_string();
                }
            }
            Rename::Inject { prefix, when, unless } => {
                if name.starts_with(when) && !unless.iter().any(|u| name.starts_with(u)) {
                    name = format!("{prefix}{name}");
                }
            }
        }
    }
    name
}

// ── Internals ────────────────────────────────────────────────────────

fn normalize_flat_name(name: &str) -> Normalized {
    for (from, to) in EXACT_RULES {
        if name == *from {
            return finish((*to).to_string(), true);
        }
    }
    for (prefix, replacement) in CATEGORY_RULES {
        if let Some(rest) = name.strip_prefix(prefix) {
            return finish(format!("{replacement}{rest}"), true);
        }
    }
    finish(name.to_string(), false)
}

fn normalize_theme_name(name: &str) -> Normalized {
    let mut ident = name.strip_prefix("themes-").unwrap_or(name).to_string();
    for (from, to) in THEME_DOUBLED_SEGMENTS {
        if let Some(rest) = ident.strip_prefix(from) {
            ident = format!("{to}{rest}");
            break;
        }
    }
    for (from, to) in THEME_FORM_GROUPS {
        if let Some(rest) = ident.strip_prefix(from) {
            ident = format!("{to}{rest}");
            break;
        }
    }
    finish(ident, true)
}

/// Final step for every category: drop the generic scoping prefix.
fn finish(ident: String, matched: bool) -> Normalized {
    let ident = match ident.strip_prefix("global-") {
        Some(rest) => rest.to_string(),
        None => ident,
    };
    Normalized { ident, matched }
}

/// Lower-case a path segment, collapse whitespace runs to hyphens, and
/// turn decimal separators between digits into underscores.
pub fn kebab(segment: &str) -> String {
    let lowered = segment.trim().to_lowercase();
    let mut out = String::with_capacity(lowered.len());
    let mut in_space = false;
    for c in lowered.chars() {
        if c.is_whitespace() {
            if !in_space {
                out.push('-');
                in_space = true;
            }
        } else {
            out.push(c);
            in_space = false;
        }
    }
    underscore_decimal_steps(&out)
}

/// Replace a decimal separator between two digits with an underscore, so
/// a spacing step like `4.5` stays a single identifier token (`4_5`).
/// Handles both the ASCII dot and U+2024 ONE DOT LEADER, which the
/// authoring tool emits for decimal step names.
pub(crate) fn underscore_decimal_steps(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    let mut out = String::with_capacity(s.len());
    for (i, &c) in chars.iter().enumerate() {
        let is_separator = c == '.' || c == '\u{2024}';
        let between_digits = is_separator
            && i > 0
            && chars[i - 1].is_ascii_digit()
            && chars.get(i + 1).is_some_and(|n| n.is_ascii_digit());
        if between_digits {
            out.push('_');
        } else {
            out.push(c);
        }
    }
    out
}

/// Drop a trailing parenthetical annotation (`"4 (16px)"` -> `"4"`).
pub(crate) fn strip_annotation(segment: &str) -> &str {
    let trimmed = segment.trim_end();
    match (trimmed.find(" ("), trimmed.ends_with(')')) {
        (Some(i), true) => &segment[..i],
        _ => segment,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn segs(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|s| s.to_string()).collect()
    }

    fn canon(parts: &[&str], kind: DocumentKind) -> String {
        normalize(&segs(parts), kind).ident
    }

    #[test]
    fn spacing_step_plain() {
        assert_eq!(
            canon(&["Primitives", "Spacing", "4"], DocumentKind::Primitive),
            "spacing-4"
        );
    }

    #[test]
    fn spacing_step_decimal_becomes_underscore() {
        assert_eq!(
            canon(&["Primitives", "Spacing", "4.5"], DocumentKind::Primitive),
            "spacing-4_5"
        );
    }

    #[test]
    fn spacing_step_one_dot_leader() {
        assert_eq!(
            canon(&["Primitives", "Spacing", "0\u{2024}25"], DocumentKind::Primitive),
            "spacing-0_25"
        );
    }

    #[test]
    fn spacing_step_annotated_leaf() {
        assert_eq!(
            canon(&["Primitives", "Spacing", "4 (16px)"], DocumentKind::Primitive),
            "spacing-4"
        );
    }

    #[test]
    fn color_primitive() {
        assert_eq!(
            canon(&["Primitives", "Colors", "Base", "white"], DocumentKind::Primitive),
            "color-base-white"
        );
    }

    #[test]
    fn color_alpha_collapses_doubled_group() {
        assert_eq!(
            canon(
                &["Primitives", "Colors", "Alpha", "Alpha-success-20"],
                DocumentKind::Primitive
            ),
            "color-alpha-success-20"
        );
    }

    #[test]
    fn radius_primitive() {
        assert_eq!(
            canon(&["Primitives", "Radius", "radius-sm"], DocumentKind::Primitive),
            "radius-sm"
        );
    }

    #[test]
    fn radius_card_exact_rule() {
        assert_eq!(
            canon(&["Radius", "Components", "Card Radius"], DocumentKind::Semantic),
            "radius-card"
        );
    }

    #[test]
    fn semantic_spacing_doubled_segment() {
        assert_eq!(
            canon(&["Spacing", "Card", "card-4"], DocumentKind::Semantic),
            "spacing-card-4"
        );
        assert_eq!(
            canon(&["Spacing", "Button", "buttons-2"], DocumentKind::Semantic),
            "spacing-button-2"
        );
    }

    #[test]
    fn semantic_spacing_model_is_modal() {
        assert_eq!(
            canon(&["Spacing", "Model", "modal-16"], DocumentKind::Semantic),
            "spacing-modal-16"
        );
    }

    #[test]
    fn semantic_spacing_form_and_tab_collapse_to_bare_spacing() {
        assert_eq!(
            canon(&["Spacing", "Form", "8"], DocumentKind::Semantic),
            "spacing-8"
        );
        assert_eq!(
            canon(&["Spacing", "Tab", "12"], DocumentKind::Semantic),
            "spacing-12"
        );
    }

    #[test]
    fn spacing_table_not_shadowed_by_tab_rule() {
        assert_eq!(
            canon(&["Spacing", "Table", "table-8"], DocumentKind::Semantic),
            "spacing-table-8"
        );
    }

    #[test]
    fn typography_primitive_families() {
        assert_eq!(
            canon(
                &["Primitives", "Typography", "Size", "text-size-200"],
                DocumentKind::Primitive
            ),
            "typography-text-size-200"
        );
        assert_eq!(
            canon(
                &["Primitives", "Typography", "Font Family", "font-family-primary"],
                DocumentKind::Primitive
            ),
            "typography-font-family-primary"
        );
        assert_eq!(
            canon(
                &["Primitives", "Typography", "Font Weight", "font-weight-bold"],
                DocumentKind::Primitive
            ),
            "typography-font-weight-bold"
        );
    }

    #[test]
    fn typography_line_hight_is_respelled() {
        assert_eq!(
            canon(
                &["Primitives", "Typography", "Line Hight", "line-hight-120"],
                DocumentKind::Primitive
            ),
            "typography-line-height-120"
        );
    }

    #[test]
    fn typography_wieght_is_respelled() {
        assert_eq!(
            canon(
                &["Typography", "Font Wieght", "font-weight-semibold"],
                DocumentKind::Semantic
            ),
            "typography-font-weight-semibold"
        );
    }

    #[test]
    fn typography_semantic_doubles() {
        assert_eq!(
            canon(
                &["Typography", "Line Height Text", "line-heights-text-md"],
                DocumentKind::Semantic
            ),
            "typography-line-heights-text-md"
        );
        assert_eq!(
            canon(
                &["Typography", "Size Display", "typo-size-lg"],
                DocumentKind::Semantic
            ),
            "typography-typo-size-lg"
        );
    }

    #[test]
    fn widths_and_containers() {
        assert_eq!(
            canon(&["Widths", "Width", "width-md"], DocumentKind::Semantic),
            "width-md"
        );
        assert_eq!(
            canon(
                &["Widths", "Max Width", "paragraph-max-width"],
                DocumentKind::Semantic
            ),
            "paragraph-max-width"
        );
        assert_eq!(
            canon(
                &["containers", "Container", "padding-desktop"],
                DocumentKind::Semantic
            ),
            "container-padding-desktop"
        );
        assert_eq!(
            canon(
                &["containers", "Screen Hight", "min-hight-desktop"],
                DocumentKind::Semantic
            ),
            "screen-min-hight-desktop"
        );
    }

    #[test]
    fn theme_doubled_segment_collapses() {
        assert_eq!(
            canon(
                &["Themes", "Background", "Background", "Primary"],
                DocumentKind::Theme
            ),
            "background-primary"
        );
        assert_eq!(
            canon(&["Themes", "Text", "Text", "Secondary"], DocumentKind::Theme),
            "text-secondary"
        );
        assert_eq!(
            canon(
                &["Themes", "Controls", "Control", "hovered"],
                DocumentKind::Theme
            ),
            "controls-hovered"
        );
    }

    #[test]
    fn theme_form_groups_collapse() {
        assert_eq!(
            canon(&["Themes", "Form", "Field", "disabled"], DocumentKind::Theme),
            "form-disabled"
        );
        assert_eq!(
            canon(&["Themes", "Form", "Textarea", "resize"], DocumentKind::Theme),
            "form-resize"
        );
    }

    #[test]
    fn theme_global_prefix_stripped() {
        assert_eq!(
            canon(
                &["Themes", "Global", "background", "secondary"],
                DocumentKind::Theme
            ),
            "background-secondary"
        );
    }

    #[test]
    fn unknown_category_falls_back_to_joined_path() {
        let n = normalize(&segs(&["Foo", "Bar", "Baz qux"]), DocumentKind::Semantic);
        assert_eq!(n.ident, "foo-bar-baz-qux");
        assert!(!n.matched);
    }

    #[test]
    fn normalization_is_idempotent_on_canonical_names() {
        let flat = [
            "spacing-4_5",
            "spacing-card-4",
            "spacing-modal-16",
            "color-base-white",
            "color-alpha-success-20",
            "radius-card",
            "radius-sm",
            "typography-line-height-120",
            "typography-font-weight-bold",
            "typography-text-size-200",
            "width-md",
            "container-padding-desktop",
            "screen-min-hight-desktop",
        ];
        for ident in flat {
            assert_eq!(
                normalize_name(ident, DocumentKind::Semantic).ident,
                ident,
                "flat identifier changed on re-normalization"
            );
            assert_eq!(normalize_name(ident, DocumentKind::Primitive).ident, ident);
        }
        let themed = [
            "background-primary",
            "form-disabled",
            "controls-hovered",
            "alpha-success-20",
            "progress-bar-primary",
        ];
        for ident in themed {
            assert_eq!(
                normalize_name(ident, DocumentKind::Theme).ident,
                ident,
                "theme identifier changed on re-normalization"
            );
        }
    }

    #[test]
    fn utility_alias_reorders_form_categories() {
        assert_eq!(
            utility_alias("form-background-disabled"),
            "background-form-disabled"
        );
        assert_eq!(utility_alias("form-border-focused"), "border-form-focused");
        assert_eq!(
            utility_alias("form-today-background-default"),
            "background-form-today-default"
        );
    }

    #[test]
    fn utility_alias_injects_text_prefix_for_bare_form_leaves() {
        assert_eq!(utility_alias("form-placeholder"), "text-form-placeholder");
        assert_eq!(utility_alias("form-label"), "text-form-label");
    }

    #[test]
    fn utility_alias_link_rules() {
        assert_eq!(utility_alias("link-visited"), "text-link-visited");
        assert_eq!(utility_alias("link-icon-hover"), "icon-link-hover");
        assert_eq!(utility_alias("link-link-oncolor-focused"), "icon-link-oncolor-focused");
    }

    #[test]
    fn utility_alias_controls_rules() {
        assert_eq!(utility_alias("controls-icon-default"), "icon-controls-default");
        assert_eq!(utility_alias("controls-border-focus"), "border-controls-focus");
        assert_eq!(utility_alias("controls-boarder-focus"), "border-controls-focus");
        assert_eq!(utility_alias("controls-primary"), "background-controls-primary");
        assert_eq!(
            utility_alias("controls-disabled-hover"),
            "background-controls-disabled-hover"
        );
    }

    #[test]
    fn utility_alias_steps_compose() {
        assert_eq!(
            utility_alias("stepper-line-complete"),
            "color-line-stepper-complete"
        );
    }

    #[test]
    fn utility_alias_misc_rules() {
        assert_eq!(utility_alias("charts-1"), "color-charts-1");
        assert_eq!(utility_alias("tag-dot"), "color-tag-dot");
        assert_eq!(
            utility_alias("progress-bar-primary"),
            "background-progress-bar-primary"
        );
        assert_eq!(utility_alias("table-boarder-row"), "border-table-row");
    }

    #[test]
    fn utility_alias_leaves_unrelated_names_alone() {
        assert_eq!(utility_alias("background-primary"), "background-primary");
        assert_eq!(utility_alias("text-secondary"), "text-secondary");
    }
}
