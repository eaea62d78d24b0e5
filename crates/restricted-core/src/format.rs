//! Format selectors.

use std::fmt;

/// Requested textual form of a value.
///
/// Selectors apply to the canonical representation, never to substrings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Format<'a> {
    /// Canonical, normalized form.
    #[default]
    Default,
    /// Lower-case form.
    Lower,
    /// Upper-case form.
    Upper,
    /// Type-specific selector, such as a unit abbreviation.
    Custom(&'a str),
}

impl<'a> Format<'a> {
    /// Maps `""`/`G` to Default, `L` to Lower, `U` to Upper; anything else is custom.
    pub fn parse(selector: &'a str) -> Self {
        match selector {
            "" | "G" | "g" => Format::Default,
            "L" | "l" => Format::Lower,
            "U" | "u" => Format::Upper,
            other => Format::Custom(other),
        }
    }

    /// Returns `true` for the selectors every type recognises.
    pub fn is_standard(self) -> bool {
        !matches!(self, Format::Custom(_))
    }
}

impl fmt::Display for Format<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Format::Default => f.write_str("G"),
            Format::Lower => f.write_str("L"),
            Format::Upper => f.write_str("U"),
            Format::Custom(s) => f.write_str(s),
        }
    }
}
