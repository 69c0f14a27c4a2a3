//! tokenc-codegen -- CSS surface generation for compiled design tokens.
//!
//! Takes a [`Compilation`](tokenc_core::compile::Compilation) from
//! tokenc-core and renders the output surfaces: the base stylesheet, one
//! stylesheet per mode, and the optional utility re-export and typography
//! class sheets. Rendering is pure; [`write_artifacts`] is the only
//! function that touches the filesystem.

pub mod artifact;
pub mod css;
pub mod surface;
pub mod tailwind;
pub mod typography;

pub use artifact::{write_artifacts, Artifact, CodegenError};
pub use surface::{generate, SurfaceConfig};
