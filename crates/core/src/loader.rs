//! Token document loading -- turns on-disk JSON documents into an
//! ordered sequence of [`TokenRecord`]s.
//!
//! The [`TokenSource`] trait abstracts where documents come from so the
//! compiler core never touches `std::fs` directly. [`DirectorySource`]
//! walks a tokens directory; [`InMemorySource`] feeds documents straight
//! from values, which tests use.
//!
//! A document is a nested object tree. Any object carrying a `$value`
//! key (or the legacy `value` key) is a token; any other object is a
//! group whose name becomes a path segment. Keys starting with `$` are
//! metadata and never become path segments.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::error::CompileError;
use crate::token::{RawValue, TokenRecord};

/// A source of token documents. `load` returns records in a stable
/// order: documents in source order, tokens in document order.
pub trait TokenSource {
    fn load(&self) -> Result<Vec<TokenRecord>, CompileError>;
}

/// Loads every `*.json` document under a tokens directory, recursively,
/// in sorted path order.
pub struct DirectorySource {
    root: PathBuf,
}

impl DirectorySource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl TokenSource for DirectorySource {
    fn load(&self) -> Result<Vec<TokenRecord>, CompileError> {
        let mut files = Vec::new();
        collect_documents(&self.root, &mut files)?;
        let mut records = Vec::new();
        for path in &files {
            let text = fs::read_to_string(path).map_err(|e| CompileError::Read {
                path: path.display().to_string(),
                detail: e.to_string(),
            })?;
            let root: Value = serde_json::from_str(&text).map_err(|e| CompileError::Parse {
                path: path.display().to_string(),
                detail: e.to_string(),
            })?;
            parse_document(&relative_name(&self.root, path), &root, &mut records)?;
        }
        Ok(records)
    }
}

/// In-memory document source for tests: a list of (file name, document)
/// pairs, loaded in list order.
pub struct InMemorySource {
    documents: Vec<(String, Value)>,
}

impl InMemorySource {
    pub fn new(documents: Vec<(String, Value)>) -> Self {
        Self { documents }
    }
}

impl TokenSource for InMemorySource {
    fn load(&self) -> Result<Vec<TokenRecord>, CompileError> {
        let mut records = Vec::new();
        for (file, root) in &self.documents {
            parse_document(file, root, &mut records)?;
        }
        Ok(records)
    }
}

// ── Internals ────────────────────────────────────────────────────────

fn collect_documents(dir: &Path, files: &mut Vec<PathBuf>) -> Result<(), CompileError> {
    let entries = fs::read_dir(dir).map_err(|e| CompileError::Read {
        path: dir.display().to_string(),
        detail: e.to_string(),
    })?;
    let mut children = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| CompileError::Read {
            path: dir.display().to_string(),
            detail: e.to_string(),
        })?;
        children.push(entry.path());
    }
    children.sort();
    for child in children {
        if child.is_dir() {
            collect_documents(&child, files)?;
        } else if child.extension().is_some_and(|ext| ext == "json") {
            files.push(child);
        }
    }
    Ok(())
}

fn relative_name(root: &Path, path: &Path) -> String {
    let rel = path.strip_prefix(root).unwrap_or(path);
    rel.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

fn parse_document(file: &str, root: &Value, out: &mut Vec<TokenRecord>) -> Result<(), CompileError> {
    let map = root.as_object().ok_or_else(|| CompileError::Parse {
        path: file.to_string(),
        detail: "document root is not an object".to_string(),
    })?;
    let mut path = Vec::new();
    walk(map, &mut path, file, out);
    Ok(())
}

fn walk(
    map: &serde_json::Map<String, Value>,
    path: &mut Vec<String>,
    file: &str,
    out: &mut Vec<TokenRecord>,
) {
    if let Some(value) = map.get("$value").or_else(|| map.get("value")) {
        let declared_type = map
            .get("$type")
            .or_else(|| map.get("type"))
            .and_then(Value::as_str)
            .map(str::to_owned);
        out.push(TokenRecord {
            path: path.clone(),
            file: file.to_string(),
            value: RawValue::from_json(value),
            declared_type,
        });
        return;
    }
    for (key, child) in map {
        if key.starts_with('$') {
            continue;
        }
        if let Value::Object(group) = child {
            path.push(key.clone());
            walk(group, path, file, out);
            path.pop();
        }
    }
}
