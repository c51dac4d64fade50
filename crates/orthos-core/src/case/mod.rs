pub mod greek;

use std::fmt;

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Uppercase conversion strategy. Selected once at startup; both
/// implementations must agree on Greek and Latin input when accent
/// stripping is on, so peers running different strategies still produce
/// identical field values.
pub trait UppercaseTransform {
    fn uppercase(&self, text: &str, strip_greek_accents: bool) -> String;
    fn name(&self) -> &'static str;
}

/// Primary path: decompose, drop non-spacing combining marks, recompose,
/// then generic Unicode uppercase. Strips accents for any script, not
/// just Greek.
#[derive(Debug, Clone, Copy, Default)]
pub struct Transliterated;

impl UppercaseTransform for Transliterated {
    fn uppercase(&self, text: &str, strip_greek_accents: bool) -> String {
        if !strip_greek_accents {
            return text.to_uppercase();
        }
        let stripped: String = text
            .nfd()
            .filter(|ch| !is_combining_mark(*ch))
            .nfc()
            .collect();
        stripped.to_uppercase()
    }

    fn name(&self) -> &'static str {
        "transliterated"
    }
}

/// Fallback path: literal per-character lookup in the Greek table, then
/// generic Unicode uppercase for everything the table does not cover.
#[derive(Debug, Clone, Copy, Default)]
pub struct TableDriven;

impl UppercaseTransform for TableDriven {
    fn uppercase(&self, text: &str, strip_greek_accents: bool) -> String {
        if !strip_greek_accents {
            return text.to_uppercase();
        }
        let mapped: String = text
            .chars()
            .map(|ch| greek::lookup(ch).unwrap_or(ch))
            .collect();
        mapped.to_uppercase()
    }

    fn name(&self) -> &'static str {
        "table"
    }
}

pub struct CaseConverter {
    transform: Box<dyn UppercaseTransform + Send + Sync>,
    remove_greek_accents: bool,
}

impl CaseConverter {
    pub fn new(remove_greek_accents: bool) -> Self {
        Self::with_transform(Transliterated, remove_greek_accents)
    }

    pub fn with_transform<T>(transform: T, remove_greek_accents: bool) -> Self
    where
        T: UppercaseTransform + Send + Sync + 'static,
    {
        Self {
            transform: Box::new(transform),
            remove_greek_accents,
        }
    }

    pub fn transform_name(&self) -> &'static str {
        self.transform.name()
    }

    pub fn remove_greek_accents(&self) -> bool {
        self.remove_greek_accents
    }

    /// Converts to uppercase. Empty input is a no-op, never an error.
    pub fn to_uppercase(&self, text: &str) -> String {
        if text.is_empty() {
            return String::new();
        }
        self.transform.uppercase(text, self.remove_greek_accents)
    }

    /// Trims and lowercases. Used for email fields, where case folding
    /// alone suffices and no accent table applies.
    pub fn to_lowercase(text: &str) -> String {
        text.trim().to_lowercase()
    }
}

impl fmt::Debug for CaseConverter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CaseConverter")
            .field("transform", &self.transform.name())
            .field("remove_greek_accents", &self.remove_greek_accents)
            .finish()
    }
}
