//! Mode expansion -- selects the per-mode raw value for mode-bearing
//! tokens.
//!
//! A theme token's identifier is the same in every mode; only the bound
//! value differs. A plain (non-mode-map) value serves every requested
//! mode. A mode map serves exactly the modes it names: a requested mode
//! absent from the map is omitted from that mode's output rather than
//! given a fabricated value.

use crate::token::RawValue;

/// The raw value a token contributes to one mode, or `None` when the
/// token does not participate in that mode.
pub fn mode_value<'a>(value: &'a RawValue, mode: &str) -> Option<&'a RawValue> {
    match value {
        RawValue::Modes(entries) => entries
            .iter()
            .find(|(name, _)| name == mode)
            .map(|(_, per_mode)| per_mode),
        plain => Some(plain),
    }
}

/// Expand a raw value over the requested modes, in request order.
pub fn expand<'a>(value: &'a RawValue, modes: &'a [String]) -> Vec<(&'a str, &'a RawValue)> {
    modes
        .iter()
        .filter_map(|mode| mode_value(value, mode).map(|v| (mode.as_str(), v)))
        .collect()
}
