//! CSS rendering for compiled variable blocks.
//!
//! The renderer is a straight serialization of a binding list: one
//! `--name: value;` declaration per binding, in compilation order. No
//! reordering, merging, or value rewriting happens here.

use tokenc_core::assemble::Binding;

/// Render one selector block with a custom-property declaration per binding.
pub fn emit_block(selector: &str, bindings: &[Binding]) -> String {
    let vars: Vec<String> = bindings
        .iter()
        .map(|b| format!("  --{}: {};", b.ident, b.value))
        .collect();
    format!("{} {{\n{}\n}}\n", selector, vars.join("\n"))
}
