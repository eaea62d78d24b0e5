//! Culture descriptors used by the text codecs.

/// Culture-specific formatting conventions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Locale {
    tag: &'static str,
    decimal_separator: char,
}

const LOCALES: &[Locale] = &[
    Locale::INVARIANT,
    Locale::new("en", '.'),
    Locale::new("en-GB", '.'),
    Locale::new("en-US", '.'),
    Locale::new("de", ','),
    Locale::new("de-DE", ','),
    Locale::new("fr", ','),
    Locale::new("fr-FR", ','),
    Locale::new("es", ','),
    Locale::new("nl", ','),
];

impl Locale {
    /// Locale-independent conventions used for canonical text, hashing and storage.
    pub const INVARIANT: Locale = Locale::new("invariant", '.');

    const fn new(tag: &'static str, decimal_separator: char) -> Self {
        Self {
            tag,
            decimal_separator,
        }
    }

    /// Resolves a BCP 47-style tag (`de-DE`, `en_gb`), falling back to the language.
    ///
    /// Matching is case-insensitive and treats `_` like `-`.
    pub fn from_tag(tag: &str) -> Option<Locale> {
        if let Some(locale) = LOCALES.iter().find(|l| tags_match(l.tag, tag)) {
            return Some(*locale);
        }
        let language = tag.split(|c: char| c == '-' || c == '_').next()?;
        LOCALES.iter().find(|l| tags_match(l.tag, language)).copied()
    }

    /// All known locales.
    pub fn all() -> &'static [Locale] {
        LOCALES
    }

    /// Canonical tag.
    pub fn tag(&self) -> &'static str {
        self.tag
    }

    /// Separator between integer and fractional digits.
    pub fn decimal_separator(&self) -> char {
        self.decimal_separator
    }
}

impl Default for Locale {
    fn default() -> Self {
        Locale::INVARIANT
    }
}

fn tags_match(known: &str, requested: &str) -> bool {
    known.len() == requested.len()
        && known
            .bytes()
            .zip(requested.bytes())
            .all(|(a, b)| fold(a) == fold(b))
}

fn fold(b: u8) -> u8 {
    if b == b'_' {
        b'-'
    } else {
        b.to_ascii_lowercase()
    }
}
