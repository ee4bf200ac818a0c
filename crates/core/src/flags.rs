//! Boolean coercion for string-typed action inputs.

/// A raw flag as it arrives from configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlagValue<'a> {
    /// The input was not provided at all
    Absent,
    /// Already a boolean (e.g. set programmatically)
    Bool(bool),
    /// A string input, as CI systems hand them out
    Text(&'a str),
}

impl From<bool> for FlagValue<'_> {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl<'a> From<&'a str> for FlagValue<'a> {
    fn from(value: &'a str) -> Self {
        Self::Text(value)
    }
}

impl<'a> From<Option<&'a str>> for FlagValue<'a> {
    fn from(value: Option<&'a str>) -> Self {
        value.map_or(Self::Absent, Self::Text)
    }
}

/// Coerce a flag to a boolean.
///
/// Booleans pass through and the literals `"true"` / `"false"` map to their
/// value. Anything else falls back to `default`, or to `true` when no default
/// is given: an ambiguous input never silently disables a feature.
#[must_use]
pub fn coerce<'a>(value: impl Into<FlagValue<'a>>, default: Option<bool>) -> bool {
    match value.into() {
        FlagValue::Bool(value) => value,
        FlagValue::Text("true") => true,
        FlagValue::Text("false") => false,
        FlagValue::Absent | FlagValue::Text(_) => default.unwrap_or(true),
    }
}
