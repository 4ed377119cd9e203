//! Identifier classification model.
//!
//! Classification is a shallow heuristic, not scope resolution: an
//! identifier is tagged by the keyword two tokens back (skipping the
//! single whitespace token expected between a keyword and the name it
//! introduces). `def foo` makes `foo` a Function, `class Bar` makes
//! `Bar` a Class, anything else is a Variable.

/// Heuristic role of an identifier occurrence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IdentifierKind {
    /// Default: not introduced by a definition or type keyword.
    Variable,
    /// Named immediately after the profile's definition keyword.
    Function,
    /// Named immediately after the profile's type-definition keyword.
    Class,
}

/// One classification entry, appended per Identifier token at the time
/// it is scanned.
///
/// Entries are strictly lock-step with Identifier tokens: the *n*-th
/// entry belongs to the *n*-th Identifier token of the scan, so
/// consumers pair them by position, never by text match.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClassifiedIdentifier<'a> {
    /// The identifier's source text, borrowed from the input buffer.
    pub text: &'a str,
    /// The heuristic role assigned to this occurrence.
    pub kind: IdentifierKind,
}

/// How repeated occurrences of the same identifier name are classified.
///
/// Either way one entry is appended per occurrence — the lock-step
/// pairing contract with the token sequence always holds. The policy
/// only decides where a repeated name's kind comes from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DuplicateNamePolicy {
    /// Every occurrence re-derives its kind from its own context.
    /// A name introduced by `def` classifies as Function at the
    /// definition site and as Variable at later bare uses.
    #[default]
    Reclassify,
    /// A repeated name reuses the kind of its first occurrence, so a
    /// function name keeps highlighting as Function at call sites.
    ReuseFirst,
}
