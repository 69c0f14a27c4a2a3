//! Build configuration for `tokenc`.
//!
//! Settings come from an optional `tokenc.toml` next to the working
//! directory (or passed via `--config`), with command-line flags taking
//! precedence over file values and file values over built-in defaults.
//!
//! # Example
//!
//! ```toml
//! [build]
//! tokens = "tokens"
//! out = "build/css"
//!
//! [modes]
//! names = ["Light", "Dark"]
//! default = "Light"
//! attribute = "data-theme"
//!
//! [surfaces]
//! globals = "globals.css"
//! tailwind = "tailwind.css"
//! typography = "typography.css"
//! utility_prefix = "moj"
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tokenc_codegen::SurfaceConfig;

// ── Types ─────────────────────────────────────────────────────────────────────

/// Top-level `tokenc.toml` layout. Every section and field is optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(crate) struct FileConfig {
    pub build: BuildSection,
    pub modes: ModesSection,
    pub surfaces: SurfacesSection,
}

/// `[build]` section: where tokens come from and where output goes.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub(crate) struct BuildSection {
    pub tokens: PathBuf,
    pub out: PathBuf,
}

impl Default for BuildSection {
    fn default() -> Self {
        Self {
            tokens: PathBuf::from("tokens"),
            out: PathBuf::from("build/css"),
        }
    }
}

/// `[modes]` section: appearance modes and the selector attribute.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub(crate) struct ModesSection {
    /// Mode names in output order. Names are matched case-exactly
    /// against the keys of mode-map token values.
    pub names: Vec<String>,
    /// Mode whose stylesheet also applies under `:root`.
    pub default: String,
    /// Attribute used to select a mode on an ancestor element.
    pub attribute: String,
}

impl Default for ModesSection {
    fn default() -> Self {
        Self {
            names: vec!["Light".to_string(), "Dark".to_string()],
            default: "Light".to_string(),
            attribute: "data-theme".to_string(),
        }
    }
}

/// `[surfaces]` section: artifact file names. The typography sheet is
/// only generated when its name is set.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub(crate) struct SurfacesSection {
    pub globals: String,
    pub tailwind: Option<String>,
    pub typography: Option<String>,
    pub utility_prefix: Option<String>,
}

impl Default for SurfacesSection {
    fn default() -> Self {
        Self {
            globals: "globals.css".to_string(),
            tailwind: Some("tailwind.css".to_string()),
            typography: None,
            utility_prefix: None,
        }
    }
}

/// Fully resolved settings for one build/check/stats run.
#[derive(Debug, Clone)]
pub(crate) struct BuildSettings {
    pub tokens_dir: PathBuf,
    pub out_dir: PathBuf,
    pub modes: Vec<String>,
    pub surface: SurfaceConfig,
}

// ── Functions ─────────────────────────────────────────────────────────────────

/// Read and parse a `tokenc.toml` file from `path`.
///
/// Returns a human-readable error string on failure.
pub(crate) fn read_config(path: &Path) -> Result<FileConfig, String> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| format!("could not read '{}': {}", path.display(), e))?;
    toml::from_str(&content).map_err(|e| format!("could not parse '{}': {}", path.display(), e))
}

/// Resolve settings from flags and the optional config file.
///
/// When `--config` is not given, a `tokenc.toml` in the working directory
/// is picked up automatically if present.
pub(crate) fn load_settings(
    tokens: Option<&Path>,
    out: Option<&Path>,
    config: Option<&Path>,
) -> Result<BuildSettings, String> {
    let file = match config {
        Some(path) => read_config(path)?,
        None => {
            let default_path = Path::new("tokenc.toml");
            if default_path.exists() {
                read_config(default_path)?
            } else {
                FileConfig::default()
            }
        }
    };
    Ok(resolve(tokens, out, file))
}

fn resolve(tokens: Option<&Path>, out: Option<&Path>, file: FileConfig) -> BuildSettings {
    BuildSettings {
        tokens_dir: tokens.map(Path::to_path_buf).unwrap_or(file.build.tokens),
        out_dir: out.map(Path::to_path_buf).unwrap_or(file.build.out),
        modes: file.modes.names,
        surface: SurfaceConfig {
            globals: file.surfaces.globals,
            mode_attribute: file.modes.attribute,
            default_mode: file.modes.default,
            tailwind: file.surfaces.tailwind,
            utility_prefix: file.surfaces.utility_prefix,
            typography: file.surfaces.typography,
        },
    }
}
