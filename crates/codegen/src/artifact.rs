//! Generated artifacts and the writer that puts them on disk.
//!
//! Generation never performs I/O itself: the surface generator returns
//! a list of named artifacts and [`write_artifacts`] is the single place
//! that touches the filesystem. A failed compilation therefore never
//! leaves partial output behind.

use std::fmt;
use std::fs;
use std::path::Path;

/// One generated output file: a name relative to the output directory
/// and its full content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub name: String,
    pub content: String,
}

/// Error type for artifact writing.
#[derive(Debug, Clone)]
pub enum CodegenError {
    /// An I/O error occurred while writing generated files.
    Io(String),
}

impl fmt::Display for CodegenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CodegenError::Io(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl std::error::Error for CodegenError {}

/// Write every artifact under `out_dir`, creating the directory first.
pub fn write_artifacts(artifacts: &[Artifact], out_dir: &Path) -> Result<(), CodegenError> {
    fs::create_dir_all(out_dir)
        .map_err(|e| CodegenError::Io(format!("{}: {}", out_dir.display(), e)))?;
    for artifact in artifacts {
        let path = out_dir.join(&artifact.name);
        fs::write(&path, &artifact.content)
            .map_err(|e| CodegenError::Io(format!("{}: {}", path.display(), e)))?;
    }
    Ok(())
}
