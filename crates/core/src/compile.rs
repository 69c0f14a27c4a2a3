//! The compilation pipeline: normalize every token, validate and resolve
//! references, format values, and assemble the output blocks.
//!
//! The pipeline is a purely functional pass over the loaded records. It
//! either returns a full [`Compilation`] or fails with the first error;
//! nothing is written anywhere from here, so a failed build can never
//! leave partial artifacts behind.

use std::collections::HashSet;

use crate::assemble::{Block, BlockBuilder};
use crate::error::{CompileError, Warning};
use crate::expand::mode_value;
use crate::format::{format_value, Resolved};
use crate::normalize::normalize;
use crate::resolve::resolve_reference;
use crate::token::{DocumentKind, RawValue, TokenRecord};

#[derive(Debug, Clone)]
pub struct CompileOptions {
    /// Appearance modes, in output order.
    pub modes: Vec<String>,
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self {
            modes: vec!["Light".to_string(), "Dark".to_string()],
        }
    }
}

/// The assembled result of a successful compilation.
#[derive(Debug, Clone, PartialEq)]
pub struct Compilation {
    /// Default/root scope: primitive and semantic tokens.
    pub root: Block,
    /// One block per requested mode, in request order: theme tokens.
    pub modes: Vec<Block>,
    pub warnings: Vec<Warning>,
}

/// Compile loaded token records into output blocks.
pub fn compile(
    records: &[TokenRecord],
    options: &CompileOptions,
) -> Result<Compilation, CompileError> {
    let mut warnings = Vec::new();

    // Normalize every record once. The set of declared identifiers backs
    // reference validation below.
    let mut entries = Vec::with_capacity(records.len());
    for record in records {
        let normalized = normalize(&record.path, record.kind());
        if !normalized.matched {
            warnings.push(Warning {
                token: record.pointer(),
                message: format!(
                    "no naming rule matched; using the joined path '--{}'",
                    normalized.ident
                ),
            });
        }
        entries.push((record, normalized.ident));
    }
    let declared: HashSet<&str> = entries.iter().map(|(_, ident)| ident.as_str()).collect();

    // Default/root scope: everything except theme documents.
    let mut root = BlockBuilder::new(None);
    for (record, ident) in &entries {
        if record.kind() == DocumentKind::Theme {
            continue;
        }
        let resolved = resolve_value(record, &record.value, &declared, &mut warnings)?;
        let value = format_value(record, ident, resolved)?;
        root.push(record, ident.clone(), value)?;
    }

    // Mode scopes: theme documents only, one block per requested mode.
    // The identifier is the same across modes; only the value differs.
    let mut modes = Vec::with_capacity(options.modes.len());
    for mode in &options.modes {
        let mut block = BlockBuilder::new(Some(mode.as_str()));
        for (record, ident) in &entries {
            if record.kind() != DocumentKind::Theme {
                continue;
            }
            let Some(for_mode) = mode_value(&record.value, mode) else {
                continue;
            };
            let resolved = resolve_value(record, for_mode, &declared, &mut warnings)?;
            let value = format_value(record, ident, resolved)?;
            block.push(record, ident.clone(), value)?;
        }
        modes.push(block.finish());
    }

    // A plain-valued theme token resolves once per mode; keep one copy
    // of any repeated diagnostic.
    let mut seen = HashSet::new();
    warnings.retain(|w| seen.insert((w.token.clone(), w.message.clone())));

    Ok(Compilation {
        root: root.finish(),
        modes,
        warnings,
    })
}

/// Resolve a raw value into something the formatter accepts, validating
/// that a reference points at a declared identifier.
fn resolve_value<'a>(
    record: &TokenRecord,
    value: &'a RawValue,
    declared: &HashSet<&str>,
    warnings: &mut Vec<Warning>,
) -> Result<Resolved<'a>, CompileError> {
    match value {
        RawValue::Reference(raw) => {
            let resolved = resolve_reference(raw);
            if !resolved.matched {
                warnings.push(Warning {
                    token: record.pointer(),
                    message: format!(
                        "reference '{raw}' matched no category; using '--{}'",
                        resolved.ident
                    ),
                });
            }
            if !declared.contains(resolved.ident.as_str()) {
                return Err(CompileError::UnresolvedReference {
                    token: record.pointer(),
                    file: record.file.clone(),
                    reference: raw.clone(),
                    target: resolved.ident,
                });
            }
            Ok(Resolved::Reference(resolved.ident))
        }
        other => Ok(Resolved::Literal(other)),
    }
}
