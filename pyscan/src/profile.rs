//! Language profiles: the grammar-specific tables the scanner consults.
//!
//! The state machine itself (operator ladders, literal forms, comment
//! syntax) is fixed; everything word-shaped is parameterized here so the
//! same scanner serves multiple token grammars. A profile carries:
//!
//! 1. **Reserved keywords** — sorted table, binary-searched per
//!    identifier-shaped run
//! 2. **Known types** — names emitted as [`TokenKind::KnownType`]
//!    instead of plain identifiers
//! 3. **Definition / type-definition keywords** — the words that make
//!    the *following* identifier classify as Function or Class
//! 4. **Directive** — the word recognized after `#`
//!
//! [`TokenKind::KnownType`]: pyscan_core::TokenKind::KnownType

/// Keyword list of the Python-flavored profile.
///
/// Sorted by byte value (uppercase before lowercase) for binary search.
const PYTHON_KEYWORDS: &[&str] = &[
    "None", "True", "and", "as", "assert", "break", "class", "continue", "def", "del", "elif",
    "else", "except", "finally", "for", "from", "global", "if", "import", "in", "is", "lambda",
    "nonlocal", "not", "or", "pass", "raise", "return", "try", "while", "with", "yield",
];

/// A fixed, language-defined grammar profile.
///
/// Profiles are small tables of static strings and are freely copyable;
/// the scanner takes one by value. The tables are read-only after
/// construction, so a profile may be shared across any number of scans.
#[derive(Clone, Copy, Debug)]
pub struct LanguageProfile {
    keywords: &'static [&'static str],
    known_types: &'static [&'static str],
    definition_keyword: &'static str,
    type_keyword: &'static str,
    directive: &'static str,
}

impl LanguageProfile {
    /// Build a profile from its tables.
    ///
    /// `keywords` and `known_types` must be sorted by byte value — the
    /// lookup is a binary search. Violations are caught by a debug
    /// assertion at construction.
    pub fn new(
        keywords: &'static [&'static str],
        known_types: &'static [&'static str],
        definition_keyword: &'static str,
        type_keyword: &'static str,
        directive: &'static str,
    ) -> Self {
        debug_assert!(
            keywords.windows(2).all(|w| w[0] < w[1]),
            "keyword table must be sorted and free of duplicates"
        );
        debug_assert!(
            known_types.windows(2).all(|w| w[0] < w[1]),
            "known-type table must be sorted and free of duplicates"
        );
        Self {
            keywords,
            known_types,
            definition_keyword,
            type_keyword,
            directive,
        }
    }

    /// The Python-flavored profile: Python reserved words, `def` and
    /// `class` as definition keywords, and the `#import` directive.
    pub fn python() -> Self {
        Self::new(PYTHON_KEYWORDS, &[], "def", "class", "import")
    }

    /// Exact-membership test against the reserved-word table.
    #[inline]
    pub fn is_keyword(&self, text: &str) -> bool {
        self.keywords.binary_search(&text).is_ok()
    }

    /// Exact-membership test against the known-type table.
    #[inline]
    pub fn is_known_type(&self, text: &str) -> bool {
        self.known_types.binary_search(&text).is_ok()
    }

    /// Is `text` the keyword introducing a function definition?
    ///
    /// Compared case-insensitively: `DEF` introduces a definition in the
    /// Python profile just as `def` does, provided the keyword table
    /// recognized it first.
    #[inline]
    pub fn is_definition_keyword(&self, text: &str) -> bool {
        text.eq_ignore_ascii_case(self.definition_keyword)
    }

    /// Is `text` the keyword introducing a type/class definition?
    #[inline]
    pub fn is_type_keyword(&self, text: &str) -> bool {
        text.eq_ignore_ascii_case(self.type_keyword)
    }

    /// Is `word` (the identifier run after `#`, hash excluded) the
    /// recognized directive?
    #[inline]
    pub fn is_directive(&self, word: &str) -> bool {
        word == self.directive
    }
}

impl Default for LanguageProfile {
    fn default() -> Self {
        Self::python()
    }
}
