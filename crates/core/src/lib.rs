#![allow(clippy::result_large_err)]
//! tokenc-core: design token compiler core library.
//!
//! Turns hierarchical design-token documents (colors, spacing, radii,
//! typography, widths, themes) into a flat namespace of output bindings:
//! canonical identifier on the left, literal or `var(--...)` indirection
//! on the right, grouped into a default/root block plus one block per
//! appearance mode.
//!
//! # Public API
//!
//! Key types are re-exported at the crate root for convenience:
//!
//! - [`compile()`] -- run the full pipeline over loaded records
//! - [`normalize()`] / [`resolve_reference()`] -- the shared naming engine
//! - [`TokenSource`] -- document loading abstraction
//! - [`Compilation`] -- assembled output blocks plus warnings
//! - [`CompileError`] / [`Warning`] -- diagnostics

pub mod assemble;
pub mod compile;
pub mod error;
pub mod expand;
pub mod format;
pub mod loader;
pub mod normalize;
pub mod resolve;
pub mod token;

// ── Convenience re-exports: key types ────────────────────────────────

pub use assemble::{Binding, Block};
pub use compile::{Compilation, CompileOptions};
pub use error::{CompileError, Warning};
pub use loader::{DirectorySource, InMemorySource, TokenSource};
pub use normalize::Normalized;
pub use token::{DocumentKind, RawValue, TokenRecord};

// ── Convenience re-exports: pipeline entry points ────────────────────

pub use compile::compile;
pub use expand::{expand, mode_value};
pub use format::{format_value, Resolved};
pub use normalize::{normalize, normalize_name, utility_alias};
pub use resolve::resolve_reference;
