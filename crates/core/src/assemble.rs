//! Output assembly -- collects formatted bindings into ordered blocks,
//! one per output scope, with first-seen de-duplication.
//!
//! Ordering is the order tokens were pushed (document order), so output
//! is diff-friendly across runs over unchanged inputs. Within a block
//! each identifier appears at most once: an identical re-binding
//! collapses to the first occurrence, a conflicting one fails the build.

use std::collections::HashMap;

use crate::error::CompileError;
use crate::token::{DocumentKind, TokenRecord};

/// One output binding: a canonical identifier and its formatted value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binding {
    pub ident: String,
    pub value: String,
    /// Document family of the declaring token; the re-export surface
    /// filters on this.
    pub kind: DocumentKind,
    /// `file:dotted.path` of the declaring token, for diagnostics.
    pub source: String,
}

/// An ordered group of bindings destined for one selector scope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    /// `None` for the default/root scope, `Some(mode)` for a mode scope.
    pub mode: Option<String>,
    pub bindings: Vec<Binding>,
}

/// Accumulates the bindings of one block.
pub struct BlockBuilder {
    mode: Option<String>,
    bindings: Vec<Binding>,
    seen: HashMap<String, usize>,
}

impl BlockBuilder {
    pub fn new(mode: Option<&str>) -> Self {
        Self {
            mode: mode.map(str::to_owned),
            bindings: Vec::new(),
            seen: HashMap::new(),
        }
    }

    /// Add one binding. An identifier already bound to the same value is
    /// collapsed into the first occurrence; a different value for an
    /// already-bound identifier is a collision.
    pub fn push(
        &mut self,
        record: &TokenRecord,
        ident: String,
        value: String,
    ) -> Result<(), CompileError> {
        if let Some(&at) = self.seen.get(&ident) {
            let first = &self.bindings[at];
            if first.value == value {
                return Ok(());
            }
            return Err(CompileError::DuplicateBinding {
                ident,
                scope: self.mode.clone().unwrap_or_else(|| "default".to_string()),
                first: first.value.clone(),
                first_source: first.source.clone(),
                second: value,
                second_source: source_of(record),
            });
        }
        self.seen.insert(ident.clone(), self.bindings.len());
        self.bindings.push(Binding {
            ident,
            value,
            kind: record.kind(),
            source: source_of(record),
        });
        Ok(())
    }

    pub fn finish(self) -> Block {
        Block {
            mode: self.mode,
            bindings: self.bindings,
        }
    }
}

fn source_of(record: &TokenRecord) -> String {
    format!("{}:{}", record.file, record.pointer())
}
