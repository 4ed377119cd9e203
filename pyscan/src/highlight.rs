//! Editor-facing token queries.
//!
//! Small predicates a display layer needs beyond the raw token stream:
//! which kinds form matching bracket pairs, which kinds carry an
//! identifier name, and which kinds point at another buffer.

use pyscan_core::TokenKind;

/// Token-kind pairs that an editor should match against each other when
/// the caret sits on one of them.
pub fn matching_token_pairs() -> [(TokenKind, TokenKind); 3] {
    [
        (TokenKind::LeftCurly, TokenKind::RightCurly),
        (TokenKind::LeftParen, TokenKind::RightParen),
        (TokenKind::LeftBracket, TokenKind::RightBracket),
    ]
}

/// Does this kind carry an identifier name?
///
/// True only for [`TokenKind::Identifier`] — keywords and known types
/// are word-shaped but not names.
pub fn is_identifier(kind: TokenKind) -> bool {
    kind == TokenKind::Identifier
}

/// Does this token refer to another buffer the editor could jump to?
///
/// True for [`TokenKind::ImportModule`]: the module name of an import
/// directive names a file.
pub fn is_navigatable(kind: TokenKind) -> bool {
    kind == TokenKind::ImportModule
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_bracket_pairs() {
        let pairs = matching_token_pairs();
        assert_eq!(pairs.len(), 3);
        assert!(pairs.contains(&(TokenKind::LeftParen, TokenKind::RightParen)));
        assert!(pairs.contains(&(TokenKind::LeftCurly, TokenKind::RightCurly)));
        assert!(pairs.contains(&(TokenKind::LeftBracket, TokenKind::RightBracket)));
    }

    #[test]
    fn only_identifiers_are_identifiers() {
        assert!(is_identifier(TokenKind::Identifier));
        assert!(!is_identifier(TokenKind::Keyword));
        assert!(!is_identifier(TokenKind::KnownType));
        assert!(!is_identifier(TokenKind::ImportModule));
    }

    #[test]
    fn module_names_are_navigatable() {
        assert!(is_navigatable(TokenKind::ImportModule));
        assert!(!is_navigatable(TokenKind::ImportStatement));
        assert!(!is_navigatable(TokenKind::Identifier));
    }
}
