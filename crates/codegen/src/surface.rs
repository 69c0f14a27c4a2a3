//! Surface assembly -- turns a compilation into the set of CSS artifacts.
//!
//! The base stylesheet binds every non-theme variable under `:root`. Each
//! mode gets its own stylesheet whose selector is an attribute match on
//! the configured mode attribute; the default mode additionally binds
//! under `:root` so a page with no attribute set still renders.

use tokenc_core::compile::Compilation;

use crate::artifact::Artifact;
use crate::css;
use crate::tailwind;
use crate::typography;

/// Names and toggles for the generated CSS surface.
#[derive(Debug, Clone)]
pub struct SurfaceConfig {
    /// File name of the base stylesheet.
    pub globals: String,
    /// Attribute used to select a mode on an ancestor element.
    pub mode_attribute: String,
    /// Mode whose stylesheet also applies under `:root`.
    pub default_mode: String,
    /// File name of the utility re-export stylesheet, when enabled.
    pub tailwind: Option<String>,
    /// Import prefix passed through to the utility framework, when set.
    pub utility_prefix: Option<String>,
    /// File name of the typography class stylesheet, when enabled.
    pub typography: Option<String>,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        SurfaceConfig {
            globals: "globals.css".to_string(),
            mode_attribute: "data-theme".to_string(),
            default_mode: "Light".to_string(),
            tailwind: Some("tailwind.css".to_string()),
            utility_prefix: None,
            typography: None,
        }
    }
}

/// Generate every enabled artifact for a compilation.
///
/// Artifact order is fixed: base stylesheet, one stylesheet per mode in
/// compilation order, then the optional utility and typography sheets.
pub fn generate(compilation: &Compilation, config: &SurfaceConfig) -> Vec<Artifact> {
    let mut artifacts = Vec::new();
    artifacts.push(Artifact {
        name: config.globals.clone(),
        content: css::emit_block(":root", &compilation.root.bindings),
    });
    for block in &compilation.modes {
        let mode = block.mode.as_deref().unwrap_or_default();
        artifacts.push(Artifact {
            name: mode_artifact_name(mode),
            content: css::emit_block(&mode_selector(mode, config), &block.bindings),
        });
    }
    if let Some(name) = &config.tailwind {
        artifacts.push(Artifact {
            name: name.clone(),
            content: tailwind::emit(compilation, config),
        });
    }
    if let Some(name) = &config.typography {
        artifacts.push(Artifact {
            name: name.clone(),
            content: typography::emit(&compilation.root.bindings),
        });
    }
    artifacts
}

/// File name of the per-mode stylesheet, e.g. `theme-light.css`.
pub fn mode_artifact_name(mode: &str) -> String {
    format!("theme-{}.css", mode.to_lowercase())
}

fn mode_selector(mode: &str, config: &SurfaceConfig) -> String {
    let value = mode.to_lowercase();
    if mode == config.default_mode {
        format!(":root, [{}=\"{}\"]", config.mode_attribute, value)
    } else {
        format!("[{}=\"{}\"]", config.mode_attribute, value)
    }
}
