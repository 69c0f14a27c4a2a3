use std::fmt;

/// All errors the compiler can fail a build with. Any one of these
/// aborts the build before artifacts are written.
#[derive(Debug, thiserror::Error)]
pub enum CompileError {
    /// A source document could not be read from disk.
    #[error("cannot read token document {path}: {detail}")]
    Read { path: String, detail: String },

    /// A source document is not valid JSON.
    #[error("cannot parse token document {path}: {detail}")]
    Parse { path: String, detail: String },

    /// A token's value references a name no token declares. Usually a
    /// renamed source group whose dependents were not updated.
    #[error(
        "unresolved reference in '{token}' ({file}): '{reference}' resolves to '--{target}', which no token declares"
    )]
    UnresolvedReference {
        token: String,
        file: String,
        reference: String,
        target: String,
    },

    /// A token's value has a shape the formatter does not accept.
    #[error("malformed value for '{token}' ({file}): {detail}")]
    MalformedValue {
        token: String,
        file: String,
        detail: String,
    },

    /// Two source tokens normalized to the same identifier with different
    /// values. The de-duplication rules are aggressive enough that this
    /// is a real hazard, so it is an error rather than last-write-wins.
    #[error(
        "conflicting bindings for '--{ident}' in the {scope} scope: '{first}' (from {first_source}) vs '{second}' (from {second_source})"
    )]
    DuplicateBinding {
        ident: String,
        scope: String,
        first: String,
        first_source: String,
        second: String,
        second_source: String,
    },
}

/// A non-fatal diagnostic: the build continues, but the output may not
/// be what the author intended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Warning {
    /// Dotted path of the token the warning is about.
    pub token: String,
    pub message: String,
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.token, self.message)
    }
}
