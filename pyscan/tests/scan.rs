//! End-to-end scanning properties over whole programs.
//!
//! Unit behavior lives next to each module; these tests exercise the
//! stream-level contracts: lossless coverage, position ordering, and
//! the pairing between Identifier tokens and classification entries.

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use pyscan::{
    DuplicateNamePolicy, IdentifierKind, LanguageProfile, Scanner, Token, TokenKind,
};

fn lex(source: &str) -> Vec<Token<'_>> {
    Scanner::new(source, LanguageProfile::python()).lex()
}

fn reassemble(tokens: &[Token<'_>]) -> String {
    tokens.iter().map(|t| t.text).collect()
}

#[test]
fn python_program_end_to_end() {
    let source = "\
#import math

class Greeter:
    def greet(self, name):
        message = \"hello, \\t\" + name
        count = 0x1F + 3.14e-2
        return message  // done
";
    let mut scanner = Scanner::new(source, LanguageProfile::python());
    let tokens = scanner.lex();

    assert_eq!(reassemble(&tokens), source);

    assert_eq!(tokens[0].kind, TokenKind::ImportStatement);
    assert_eq!(tokens[2].kind, TokenKind::ImportModule);
    assert_eq!(tokens[2].text, "math");

    let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
    assert!(kinds.contains(&TokenKind::Keyword));
    assert!(kinds.contains(&TokenKind::DoubleQuotedString));
    assert!(kinds.contains(&TokenKind::EscapeSequence));
    assert!(kinds.contains(&TokenKind::Integer));
    assert!(kinds.contains(&TokenKind::Float));
    assert!(kinds.contains(&TokenKind::Comment));

    let identifiers = scanner.identifiers();
    let by_text = |text: &str| {
        identifiers
            .iter()
            .find(|entry| entry.text == text)
            .unwrap_or_else(|| panic!("no classification entry for {text:?}"))
    };
    assert_eq!(by_text("Greeter").kind, IdentifierKind::Class);
    assert_eq!(by_text("greet").kind, IdentifierKind::Function);
    assert_eq!(by_text("name").kind, IdentifierKind::Variable);
    assert_eq!(by_text("message").kind, IdentifierKind::Variable);
}

#[test]
fn classification_entries_pair_with_identifier_tokens() {
    let source = "def f(a, b):\n    return a + b + f";
    let mut scanner = Scanner::new(source, LanguageProfile::python());
    let tokens = scanner.lex();

    let identifier_tokens: Vec<_> = tokens
        .iter()
        .filter(|t| t.kind == TokenKind::Identifier)
        .collect();
    let entries = scanner.identifiers();
    assert_eq!(identifier_tokens.len(), entries.len());
    for (token, entry) in identifier_tokens.iter().zip(entries) {
        assert_eq!(token.text, entry.text);
    }
}

#[test]
fn reuse_first_policy_is_stable_across_the_stream() {
    let source = "class C:\n    pass\n\nx = C()\ny = C()";
    let mut scanner =
        Scanner::new(source, LanguageProfile::python()).with_policy(DuplicateNamePolicy::ReuseFirst);
    scanner.lex();
    let c_kinds: Vec<_> = scanner
        .identifiers()
        .iter()
        .filter(|entry| entry.text == "C")
        .map(|entry| entry.kind)
        .collect();
    assert_eq!(c_kinds, vec![IdentifierKind::Class; 3]);
}

#[test]
fn spans_are_strictly_ordered() {
    let source = "def f():\n    return \"a\\nb\" + 0x1F  // tail\n";
    let tokens = lex(source);
    for window in tokens.windows(2) {
        assert!(
            window[0].end < window[1].start,
            "{:?} must end before {:?} starts",
            window[0],
            window[1]
        );
    }
    for token in &tokens {
        assert!(token.start <= token.end, "inverted span in {token:?}");
    }
}

#[test]
fn no_token_is_empty() {
    let source = "\"\\n\\t\" R\"(x)\" #import sys\n\\\n";
    for token in lex(source) {
        assert!(!token.text.is_empty(), "empty token {token:?}");
    }
}

#[test]
fn every_fixture_reassembles_exactly() {
    let fixtures = [
        "",
        "   \t \n ",
        "def foo(): pass",
        "#import sys\nprint(sys)",
        "#pragma once\n",
        "a <<= b >>= c != d == e",
        "s = \"unterminated",
        "r = R\"EOF(anything // not a comment)EOF\"",
        "r = R\"A(mismatched)B\"",
        "/* block\nspanning\nlines */ x",
        "// just a comment",
        "x = 1'000'000 + 0b10'1 + 0x1.8p3 + .5f",
        "line \\\ncontinued",
        "caf\u{e9} = \"\u{263a}\"",
        "'\\x41' '\\u0041' '\\U0001F600'",
        "weird \\ backslash",
        "1.5.2.5",
    ];
    for source in fixtures {
        let tokens = lex(source);
        assert_eq!(reassemble(&tokens), source, "fixture {source:?}");
    }
}

fn source_soup() -> impl Strategy<Value = String> {
    let fragment = prop_oneof![
        Just("def ".to_string()),
        Just("class ".to_string()),
        Just("foo".to_string()),
        Just("#import io".to_string()),
        Just("\"str\\n\"".to_string()),
        Just("\"open".to_string()),
        Just("'c'".to_string()),
        Just("R\"(raw)\"".to_string()),
        Just("// comment".to_string()),
        Just("/* block */".to_string()),
        Just("/*open".to_string()),
        Just("0x1F".to_string()),
        Just("3.14e-2f".to_string()),
        Just("<<=".to_string()),
        Just("->*".to_string()),
        Just("\n".to_string()),
        Just("\\\n".to_string()),
        Just("\u{e9}".to_string()),
        "[ -~]{0,5}",
    ];
    proptest::collection::vec(fragment, 0..24).prop_map(|parts| parts.concat())
}

proptest! {
    /// Concatenated token texts must reproduce the input exactly, no
    /// matter how fragments collide (a `"` landing inside an open
    /// string, a comment swallowing operators, and so on).
    #[test]
    fn lossless_over_generated_sources(source in source_soup()) {
        let tokens = lex(&source);
        prop_assert_eq!(reassemble(&tokens), source);
    }

    /// Spans never overlap and never go backwards.
    #[test]
    fn ordered_over_generated_sources(source in source_soup()) {
        let tokens = lex(&source);
        for window in tokens.windows(2) {
            prop_assert!(window[0].end < window[1].start);
        }
        for token in &tokens {
            prop_assert!(token.start <= token.end);
            prop_assert!(!token.text.is_empty());
        }
    }

    /// Classification entries stay lock-step with Identifier tokens.
    #[test]
    fn lock_step_over_generated_sources(source in source_soup()) {
        let mut scanner = Scanner::new(&source, LanguageProfile::python());
        let tokens = scanner.lex();
        let identifier_count = tokens
            .iter()
            .filter(|t| t.kind == TokenKind::Identifier)
            .count();
        prop_assert_eq!(identifier_count, scanner.identifiers().len());
    }

    /// Scanning arbitrary text never panics and never loses bytes.
    #[test]
    fn total_over_arbitrary_strings(source in "\\PC{0,64}") {
        let tokens = lex(&source);
        prop_assert_eq!(reassemble(&tokens), source);
    }
}
