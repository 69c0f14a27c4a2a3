//! Token statistics report: per-document type counts, an aggregate
//! table with percentage bars, and a terminal color palette preview
//! rendered with 24-bit ANSI background escapes.
//!
//! Pure reporting. Nothing here feeds the compilation pipeline.

use std::collections::BTreeMap;
use std::path::Path;
use std::process;

use tokenc_core::loader::{DirectorySource, TokenSource};
use tokenc_core::token::{RawValue, TokenRecord};

use crate::config;

const RULE_WIDTH: usize = 60;
const PALETTE_TOKEN_CAP: usize = 50;
const PALETTE_GROUP_CAP: usize = 5;
const PALETTE_COLORS_PER_GROUP: usize = 10;

pub(crate) fn cmd_stats(tokens: Option<&Path>, config_path: Option<&Path>, quiet: bool) {
    let settings = match config::load_settings(tokens, None, config_path) {
        Ok(s) => s,
        Err(msg) => {
            if !quiet {
                eprintln!("{}", msg);
            }
            process::exit(1);
        }
    };
    let records = match DirectorySource::new(&settings.tokens_dir).load() {
        Ok(r) => r,
        Err(e) => {
            if !quiet {
                eprintln!("{}", e);
            }
            process::exit(1);
        }
    };
    if quiet {
        return;
    }
    print!("{}", render_report(&records));
}

fn render_report(records: &[TokenRecord]) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    let mut out = String::new();

    out.push_str(&format!(
        "{rule}\n   Design Tokens - Statistics Report\n{rule}\n\n"
    ));

    let mut totals: BTreeMap<String, usize> = BTreeMap::new();
    for (file, counts) in per_file_counts(records) {
        out.push_str(&format!("📁 {}\n", file));
        for (type_name, count) in &counts {
            out.push_str(&format!("   └─ {}: {}\n", type_name, count));
            *totals.entry(type_name.clone()).or_insert(0) += count;
        }
        out.push('\n');
    }

    out.push_str(&format!("{rule}\n   SUMMARY\n{rule}\n\n"));
    let total: usize = totals.values().sum();
    out.push_str(&format!("Total Tokens: {}\n\n", total));
    out.push_str("By Type:\n");
    let mut by_count: Vec<(&String, &usize)> = totals.iter().collect();
    by_count.sort_by(|a, b| b.1.cmp(a.1));
    for (type_name, count) in by_count {
        let percentage = if total > 0 {
            (*count as f64 / total as f64) * 100.0
        } else {
            0.0
        };
        let bar = "█".repeat((percentage / 5.0) as usize);
        out.push_str(&format!(
            "  {:<15} {:>4}  ({:>5.1}%) {}\n",
            type_name, count, percentage, bar
        ));
    }

    out.push_str(&format!("\n{rule}\n   COLOR PALETTE PREVIEW\n{rule}\n\n"));
    for (group, members) in color_groups(records).iter().take(PALETTE_GROUP_CAP) {
        out.push_str(&format!("  {}:\n", group));
        for (record, value) in members.iter().take(PALETTE_COLORS_PER_GROUP) {
            let start = record.path.len().saturating_sub(2);
            out.push_str(&format!(
                "    {} {:<9} - {}\n",
                swatch(value),
                value,
                record.path[start..].join(".")
            ));
        }
        if members.len() > PALETTE_COLORS_PER_GROUP {
            out.push_str(&format!(
                "    ... and {} more\n",
                members.len() - PALETTE_COLORS_PER_GROUP
            ));
        }
        out.push('\n');
    }

    out.push_str(&format!(
        "{rule}\n   Report generated successfully!\n{rule}\n"
    ));
    out
}

/// Per-document type counts, in load order. Types sort alphabetically
/// within a document.
fn per_file_counts(records: &[TokenRecord]) -> Vec<(String, BTreeMap<String, usize>)> {
    let mut files: Vec<(String, BTreeMap<String, usize>)> = Vec::new();
    for record in records {
        let type_name = record
            .declared_type
            .clone()
            .unwrap_or_else(|| "unknown".to_string());
        match files.last_mut() {
            Some((file, counts)) if *file == record.file => {
                *counts.entry(type_name).or_insert(0) += 1;
            }
            _ => {
                let mut counts = BTreeMap::new();
                counts.insert(type_name, 1);
                files.push((record.file.clone(), counts));
            }
        }
    }
    files
}

/// Hex color tokens grouped by their top path segment, first-seen group
/// order, capped at the first 50 colors overall.
fn color_groups<'a>(records: &'a [TokenRecord]) -> Vec<(String, Vec<(&'a TokenRecord, &'a str)>)> {
    let colors = records
        .iter()
        .filter(|r| r.declared_type.as_deref() == Some("color"))
        .filter_map(|r| match &r.value {
            RawValue::Literal(text) if text.starts_with('#') => Some((r, text.as_str())),
            _ => None,
        })
        .take(PALETTE_TOKEN_CAP);

    let mut groups: Vec<(String, Vec<(&TokenRecord, &str)>)> = Vec::new();
    for (record, value) in colors {
        let group = record.path.first().cloned().unwrap_or_default();
        match groups.iter_mut().find(|(name, _)| *name == group) {
            Some((_, members)) => members.push((record, value)),
            None => groups.push((group, vec![(record, value)])),
        }
    }
    groups
}

/// Three-space background swatch for a `#rrggbb` value; plain spaces for
/// anything else (shorthand or eight-digit hex has no exact swatch).
fn swatch(value: &str) -> String {
    match parse_hex(value) {
        Some((r, g, b)) => format!("\x1b[48;2;{};{};{}m   \x1b[0m", r, g, b),
        None => "   ".to_string(),
    }
}

fn parse_hex(value: &str) -> Option<(u8, u8, u8)> {
    let hex = value.strip_prefix('#')?;
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some((r, g, b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tokenc_core::loader::InMemorySource;

    fn sample_records() -> Vec<TokenRecord> {
        let source = InMemorySource::new(vec![
            (
                "Primitives.json".to_string(),
                json!({
                    "Primitives": {
                        "Colors": {
                            "Base": {
                                "white": { "$type": "color", "$value": "#ffffff" },
                                "ink": { "$type": "color", "$value": "#1a1a1a" }
                            }
                        },
                        "Spacing": {
                            "4": { "$type": "dimension", "$value": 16 }
                        }
                    }
                }),
            ),
            (
                "Themes.json".to_string(),
                json!({
                    "Themes": {
                        "Background": {
                            "Background": {
                                "Primary": {
                                    "$type": "color",
                                    "$value": { "Light": "#ffffff", "Dark": "#000000" }
                                }
                            }
                        }
                    }
                }),
            ),
        ]);
        source.load().unwrap()
    }

    #[test]
    fn parses_six_digit_hex_only() {
        assert_eq!(parse_hex("#11ca5c"), Some((0x11, 0xca, 0x5c)));
        assert_eq!(parse_hex("#11ca5c99"), None);
        assert_eq!(parse_hex("#fff"), None);
        assert_eq!(parse_hex("red"), None);
    }

    #[test]
    fn swatch_uses_truecolor_background_escape() {
        assert_eq!(swatch("#ffffff"), "\x1b[48;2;255;255;255m   \x1b[0m");
        assert_eq!(swatch("#zzzzzz"), "   ");
    }

    #[test]
    fn counts_tokens_per_file_by_declared_type() {
        let counts = per_file_counts(&sample_records());
        assert_eq!(counts.len(), 2);
        assert_eq!(counts[0].0, "Primitives.json");
        assert_eq!(counts[0].1.get("color"), Some(&2));
        assert_eq!(counts[0].1.get("dimension"), Some(&1));
        assert_eq!(counts[1].1.get("color"), Some(&1));
    }

    #[test]
    fn palette_groups_hex_literals_by_top_segment() {
        let records = sample_records();
        let groups = color_groups(&records);
        // The theme token's mode map is not a hex literal and stays out.
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].0, "Primitives");
        assert_eq!(groups[0].1.len(), 2);
        assert_eq!(groups[0].1[0].1, "#ffffff");
    }

    #[test]
    fn report_totals_and_bars_follow_the_counts() {
        let report = render_report(&sample_records());
        assert!(report.contains("📁 Primitives.json\n"));
        assert!(report.contains("   └─ color: 2\n"));
        assert!(report.contains("Total Tokens: 4\n"));
        // 3 of 4 tokens are colors: 75.0%, fifteen bar segments.
        assert!(report.contains(&format!("  {:<15} {:>4}  ( 75.0%) {}\n", "color", 3, "█".repeat(15))));
        assert!(report.contains("    \x1b[48;2;255;255;255m   \x1b[0m #ffffff   - Base.white\n"));
        assert!(report.contains("   Report generated successfully!"));
    }
}
