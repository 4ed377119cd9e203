//! Single-pass hand-written scanner.
//!
//! One left-to-right pass over the buffer, dispatching on the first
//! byte of each construct. The scanner never fails on malformed input:
//! unterminated literals and comments are closed at end of input,
//! malformed escapes degrade to plain text, and unrecognized characters
//! become [`TokenKind::Unknown`] tokens so a live-editing consumer never
//! loses the rest of the buffer to one bad construct.
//!
//! Alongside the token sequence the scanner builds the identifier
//! classification list: one [`ClassifiedIdentifier`] per Identifier
//! token, in emission order.

use pyscan_core::{Cursor, Position, Token, TokenKind, EOF_BYTE};

use crate::classify::{ClassifiedIdentifier, DuplicateNamePolicy, IdentifierKind};
use crate::escape::{match_escape_sequence, match_string_prefix};
use crate::profile::LanguageProfile;

/// Space-class bytes, matching C `isspace`.
#[inline]
fn is_space(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | b'\r' | 0x0B | 0x0C)
}

#[inline]
fn is_ident_start(byte: u8) -> bool {
    byte.is_ascii_alphabetic() || byte == b'_' || byte == b'$'
}

#[inline]
fn is_ident_continue(byte: u8) -> bool {
    is_ident_start(byte) || byte.is_ascii_digit()
}

/// Snapshot of the cursor at the start of a multi-character token.
#[derive(Clone, Copy)]
struct TokenStart {
    index: usize,
    position: Position,
}

/// Stateful cursor over one input buffer, good for a single scan.
///
/// Construct a scanner per scan call: it owns mutable cursor state with
/// no internal synchronization, and a second [`lex()`](Scanner::lex)
/// call on the same instance finds the cursor already at end of input.
/// Token text and classification entries borrow the input buffer, which
/// must outlive them.
pub struct Scanner<'a> {
    input: &'a str,
    cursor: Cursor<'a>,
    profile: LanguageProfile,
    policy: DuplicateNamePolicy,
    /// Output indices of tokens holding the definition keyword (`def`).
    definition_keyword_indices: Vec<usize>,
    /// Output indices of tokens holding the type keyword (`class`).
    type_keyword_indices: Vec<usize>,
    identifiers: Vec<ClassifiedIdentifier<'a>>,
}

impl<'a> Scanner<'a> {
    /// Create a scanner over `input` using the given grammar profile.
    pub fn new(input: &'a str, profile: LanguageProfile) -> Self {
        Self {
            input,
            cursor: Cursor::new(input),
            profile,
            policy: DuplicateNamePolicy::default(),
            definition_keyword_indices: Vec::new(),
            type_keyword_indices: Vec::new(),
            identifiers: Vec::new(),
        }
    }

    /// Set how repeated identifier names are classified.
    pub fn with_policy(mut self, policy: DuplicateNamePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Scan the entire buffer into a token sequence.
    ///
    /// Tokens are produced in strictly increasing position order and
    /// partition the input: concatenating every token's text reproduces
    /// the buffer exactly.
    pub fn lex(&mut self) -> Vec<Token<'a>> {
        let mut tokens = Vec::new();
        while !self.cursor.is_eof() {
            let ch = self.cursor.current();
            if is_space(ch) {
                self.whitespace(&mut tokens);
            } else if ch == b'(' {
                self.emit_single(&mut tokens, TokenKind::LeftParen);
            } else if ch == b')' {
                self.emit_single(&mut tokens, TokenKind::RightParen);
            } else if ch == b'{' {
                self.emit_single(&mut tokens, TokenKind::LeftCurly);
            } else if ch == b'}' {
                self.emit_single(&mut tokens, TokenKind::RightCurly);
            } else if ch == b'[' {
                self.emit_single(&mut tokens, TokenKind::LeftBracket);
            } else if ch == b']' {
                self.emit_single(&mut tokens, TokenKind::RightBracket);
            } else if ch == b'<' {
                self.less(&mut tokens);
            } else if ch == b'>' {
                self.greater(&mut tokens);
            } else if ch == b',' {
                self.emit_single(&mut tokens, TokenKind::Comma);
            } else if ch == b'+' {
                self.plus(&mut tokens);
            } else if ch == b'-' {
                self.minus(&mut tokens);
            } else if ch == b'*' {
                self.emit_with_equals(&mut tokens, TokenKind::Asterisk, TokenKind::AsteriskEquals);
            } else if ch == b'%' {
                self.emit_with_equals(&mut tokens, TokenKind::Percent, TokenKind::PercentEquals);
            } else if ch == b'^' {
                self.emit_with_equals(&mut tokens, TokenKind::Caret, TokenKind::CaretEquals);
            } else if ch == b'!' {
                self.emit_with_equals(
                    &mut tokens,
                    TokenKind::ExclamationMark,
                    TokenKind::ExclamationMarkEquals,
                );
            } else if ch == b'=' {
                self.emit_with_equals(&mut tokens, TokenKind::Equals, TokenKind::EqualsEquals);
            } else if ch == b'&' {
                self.ampersand(&mut tokens);
            } else if ch == b'|' {
                self.pipe(&mut tokens);
            } else if ch == b'~' {
                self.emit_single(&mut tokens, TokenKind::Tilde);
            } else if ch == b'?' {
                self.emit_single(&mut tokens, TokenKind::QuestionMark);
            } else if ch == b':' {
                self.colon(&mut tokens);
            } else if ch == b';' {
                self.emit_single(&mut tokens, TokenKind::Semicolon);
            } else if ch == b'.' && !self.cursor.peek(1).is_ascii_digit() {
                self.dot(&mut tokens);
            } else if ch == b'#' {
                self.hash_directive(&mut tokens);
            } else if ch == b'/' && self.cursor.peek(1) == b'/' {
                self.line_comment(&mut tokens);
            } else if ch == b'/' && self.cursor.peek(1) == b'*' {
                self.block_comment(&mut tokens);
            } else if ch == b'/' {
                self.emit_with_equals(&mut tokens, TokenKind::Slash, TokenKind::SlashEquals);
            } else if self.try_double_quoted(&mut tokens)
                || self.try_raw(&mut tokens)
                || self.try_single_quoted(&mut tokens)
            {
                // literal arm consumed the construct
            } else if ch.is_ascii_digit() || (ch == b'.' && self.cursor.peek(1).is_ascii_digit()) {
                self.number(&mut tokens);
            } else if is_ident_start(ch) {
                self.identifier_or_keyword(&mut tokens);
            } else if ch == b'\\' && self.cursor.peek(1) == b'\n' {
                self.line_continuation(&mut tokens);
            } else {
                self.unknown(&mut tokens);
            }
        }
        tokens
    }

    /// The identifier classification list built during [`lex()`](Self::lex).
    ///
    /// One entry per Identifier token, in the same relative order as
    /// those tokens appear in the token sequence; consumers pair the
    /// *n*-th Identifier token with the *n*-th entry.
    pub fn identifiers(&self) -> &[ClassifiedIdentifier<'a>] {
        &self.identifiers
    }

    // ─── Emission primitives ────────────────────────────────────────

    fn emit_single(&mut self, tokens: &mut Vec<Token<'a>>, kind: TokenKind) {
        let position = self.cursor.position();
        let index = self.cursor.index();
        self.cursor.consume();
        tokens.push(Token::new(
            kind,
            position,
            position,
            self.cursor.slice(index, index + 1),
        ));
    }

    fn begin(&self) -> TokenStart {
        TokenStart {
            index: self.cursor.index(),
            position: self.cursor.position(),
        }
    }

    fn commit(&mut self, tokens: &mut Vec<Token<'a>>, start: TokenStart, kind: TokenKind) {
        tokens.push(Token::new(
            kind,
            start.position,
            self.cursor.previous_position(),
            self.cursor.slice(start.index, self.cursor.index()),
        ));
    }

    fn emit_with_equals(
        &mut self,
        tokens: &mut Vec<Token<'a>>,
        kind: TokenKind,
        equals_kind: TokenKind,
    ) {
        if self.cursor.peek(1) == b'=' {
            let start = self.begin();
            self.cursor.consume();
            self.cursor.consume();
            self.commit(tokens, start, equals_kind);
        } else {
            self.emit_single(tokens, kind);
        }
    }

    // ─── Whitespace ─────────────────────────────────────────────────

    fn whitespace(&mut self, tokens: &mut Vec<Token<'a>>) {
        let start = self.begin();
        while is_space(self.cursor.current()) {
            self.cursor.consume();
        }
        self.commit(tokens, start, TokenKind::Whitespace);
    }

    /// `\` directly before a newline joins the next physical line.
    /// Emitted as a Whitespace token so the stream stays a lossless
    /// partition of the input while remaining skippable for display.
    fn line_continuation(&mut self, tokens: &mut Vec<Token<'a>>) {
        let start = self.begin();
        self.cursor.consume();
        self.cursor.consume();
        self.commit(tokens, start, TokenKind::Whitespace);
    }

    // ─── Operator ladders ───────────────────────────────────────────

    fn less(&mut self, tokens: &mut Vec<Token<'a>>) {
        let start = self.begin();
        self.cursor.consume();
        if self.cursor.current() == b'<' {
            self.cursor.consume();
            if self.cursor.current() == b'=' {
                self.cursor.consume();
                self.commit(tokens, start, TokenKind::LessLessEquals);
                return;
            }
            self.commit(tokens, start, TokenKind::LessLess);
            return;
        }
        if self.cursor.current() == b'=' {
            self.cursor.consume();
            self.commit(tokens, start, TokenKind::LessEquals);
            return;
        }
        if self.cursor.current() == b'>' {
            self.cursor.consume();
            self.commit(tokens, start, TokenKind::LessGreater);
            return;
        }
        self.commit(tokens, start, TokenKind::Less);
    }

    fn greater(&mut self, tokens: &mut Vec<Token<'a>>) {
        let start = self.begin();
        self.cursor.consume();
        if self.cursor.current() == b'>' {
            self.cursor.consume();
            if self.cursor.current() == b'=' {
                self.cursor.consume();
                self.commit(tokens, start, TokenKind::GreaterGreaterEquals);
                return;
            }
            self.commit(tokens, start, TokenKind::GreaterGreater);
            return;
        }
        if self.cursor.current() == b'=' {
            self.cursor.consume();
            self.commit(tokens, start, TokenKind::GreaterEquals);
            return;
        }
        self.commit(tokens, start, TokenKind::Greater);
    }

    fn plus(&mut self, tokens: &mut Vec<Token<'a>>) {
        let start = self.begin();
        self.cursor.consume();
        if self.cursor.current() == b'=' {
            self.cursor.consume();
            self.commit(tokens, start, TokenKind::PlusEquals);
            return;
        }
        self.commit(tokens, start, TokenKind::Plus);
    }

    fn minus(&mut self, tokens: &mut Vec<Token<'a>>) {
        let start = self.begin();
        self.cursor.consume();
        if self.cursor.current() == b'=' {
            self.cursor.consume();
            self.commit(tokens, start, TokenKind::MinusEquals);
            return;
        }
        if self.cursor.current() == b'>' {
            self.cursor.consume();
            if self.cursor.current() == b'*' {
                self.cursor.consume();
                self.commit(tokens, start, TokenKind::ArrowAsterisk);
                return;
            }
            self.commit(tokens, start, TokenKind::Arrow);
            return;
        }
        self.commit(tokens, start, TokenKind::Minus);
    }

    fn ampersand(&mut self, tokens: &mut Vec<Token<'a>>) {
        let start = self.begin();
        self.cursor.consume();
        if self.cursor.current() == b'&' {
            self.cursor.consume();
            self.commit(tokens, start, TokenKind::AndAnd);
            return;
        }
        if self.cursor.current() == b'=' {
            self.cursor.consume();
            self.commit(tokens, start, TokenKind::AndEquals);
            return;
        }
        self.commit(tokens, start, TokenKind::And);
    }

    fn pipe(&mut self, tokens: &mut Vec<Token<'a>>) {
        let start = self.begin();
        self.cursor.consume();
        if self.cursor.current() == b'|' {
            self.cursor.consume();
            self.commit(tokens, start, TokenKind::PipePipe);
            return;
        }
        if self.cursor.current() == b'=' {
            self.cursor.consume();
            self.commit(tokens, start, TokenKind::PipeEquals);
            return;
        }
        self.commit(tokens, start, TokenKind::Pipe);
    }

    fn colon(&mut self, tokens: &mut Vec<Token<'a>>) {
        let start = self.begin();
        self.cursor.consume();
        if self.cursor.current() == b':' {
            self.cursor.consume();
            if self.cursor.current() == b'*' {
                self.cursor.consume();
                self.commit(tokens, start, TokenKind::ColonColonAsterisk);
                return;
            }
            self.commit(tokens, start, TokenKind::ColonColon);
            return;
        }
        self.commit(tokens, start, TokenKind::Colon);
    }

    fn dot(&mut self, tokens: &mut Vec<Token<'a>>) {
        let start = self.begin();
        self.cursor.consume();
        if self.cursor.current() == b'*' {
            self.cursor.consume();
            self.commit(tokens, start, TokenKind::DotAsterisk);
            return;
        }
        self.commit(tokens, start, TokenKind::Dot);
    }

    // ─── Directive ──────────────────────────────────────────────────

    /// `#` plus a maximal identifier-shaped run. Only the profile's
    /// directive word gets structure: one ImportStatement token, the
    /// intervening whitespace, then the module name as an ImportModule
    /// token. Any other `#`-run becomes a single Unknown token.
    fn hash_directive(&mut self, tokens: &mut Vec<Token<'a>>) {
        let start = self.begin();
        self.cursor.consume();
        if is_ident_start(self.cursor.current()) {
            while is_ident_continue(self.cursor.current()) {
                self.cursor.consume();
            }
        }
        let word = self.cursor.slice(start.index + 1, self.cursor.index());
        if self.profile.is_directive(word) {
            self.commit(tokens, start, TokenKind::ImportStatement);
            if is_space(self.cursor.current()) {
                let ws = self.begin();
                while is_space(self.cursor.current()) {
                    self.cursor.consume();
                }
                self.commit(tokens, ws, TokenKind::Whitespace);
            }
            if is_ident_start(self.cursor.current()) {
                let module = self.begin();
                while is_ident_continue(self.cursor.current()) {
                    self.cursor.consume();
                }
                self.commit(tokens, module, TokenKind::ImportModule);
            }
        } else {
            tracing::debug!(word, "unrecognized directive");
            self.commit(tokens, start, TokenKind::Unknown);
        }
    }

    // ─── Comments ───────────────────────────────────────────────────

    fn line_comment(&mut self, tokens: &mut Vec<Token<'a>>) {
        let start = self.begin();
        self.cursor.consume_line_remainder();
        self.commit(tokens, start, TokenKind::Comment);
    }

    fn block_comment(&mut self, tokens: &mut Vec<Token<'a>>) {
        let start = self.begin();
        self.cursor.consume();
        self.cursor.consume();
        let mut terminated = false;
        while self.cursor.current() != EOF_BYTE {
            if self.cursor.current() == b'*' && self.cursor.peek(1) == b'/' {
                terminated = true;
                break;
            }
            self.cursor.consume();
        }
        if terminated {
            self.cursor.consume();
            self.cursor.consume();
        }
        self.commit(tokens, start, TokenKind::Comment);
    }

    // ─── String literals ────────────────────────────────────────────

    fn try_double_quoted(&mut self, tokens: &mut Vec<Token<'a>>) -> bool {
        let prefix = match_string_prefix(&self.cursor, b'"');
        if prefix == 0 {
            return false;
        }
        self.quoted_string(tokens, prefix, b'"', TokenKind::DoubleQuotedString);
        true
    }

    fn try_single_quoted(&mut self, tokens: &mut Vec<Token<'a>>) -> bool {
        let prefix = match_string_prefix(&self.cursor, b'\'');
        if prefix == 0 {
            return false;
        }
        self.quoted_string(tokens, prefix, b'\'', TokenKind::SingleQuotedString);
        true
    }

    fn try_raw(&mut self, tokens: &mut Vec<Token<'a>>) -> bool {
        let prefix = match_string_prefix(&self.cursor, b'R');
        if prefix == 0 || self.cursor.peek(prefix) != b'"' {
            return false;
        }
        self.raw_string(tokens, prefix);
        true
    }

    /// Scan a quoted literal, splitting recognized escape sequences out
    /// into their own EscapeSequence tokens so they can be styled
    /// independently of the surrounding text.
    ///
    /// An unterminated literal is closed at end of input without error.
    fn quoted_string(
        &mut self,
        tokens: &mut Vec<Token<'a>>,
        prefix: usize,
        quote: u8,
        kind: TokenKind,
    ) {
        let mut start = self.begin();
        for _ in 0..prefix {
            self.cursor.consume();
        }
        loop {
            let byte = self.cursor.current();
            if byte == EOF_BYTE {
                break;
            }
            if byte == b'\\' {
                let escape = match_escape_sequence(&self.cursor);
                if escape > 0 {
                    if self.cursor.index() > start.index {
                        self.commit(tokens, start, kind);
                    }
                    let escape_start = self.begin();
                    for _ in 0..escape {
                        self.cursor.consume();
                    }
                    self.commit(tokens, escape_start, TokenKind::EscapeSequence);
                    start = self.begin();
                    continue;
                }
            }
            if self.cursor.consume() == quote {
                break;
            }
        }
        if self.cursor.index() > start.index {
            self.commit(tokens, start, kind);
        }
    }

    /// Scan a raw literal: the delimiter between `R"` and `(` must
    /// reappear between `)` and the closing `"`. No escape splitting.
    ///
    /// A candidate `"` whose preceding bytes do not spell `)` plus the
    /// delimiter does not terminate the literal; an unmatched delimiter
    /// therefore runs the literal to end of input.
    fn raw_string(&mut self, tokens: &mut Vec<Token<'a>>, prefix: usize) {
        let start = self.begin();
        for _ in 0..=prefix {
            self.cursor.consume();
        }
        let delimiter_start = self.cursor.index();
        while self.cursor.current() != EOF_BYTE && self.cursor.current() != b'(' {
            self.cursor.consume();
        }
        let delimiter = self.cursor.slice_from(delimiter_start);
        let bytes = self.input.as_bytes();
        while self.cursor.current() != EOF_BYTE {
            if self.cursor.consume() == b'"' {
                let index = self.cursor.index();
                let len = delimiter.len();
                if index >= len + 2
                    && bytes[index - 2 - len] == b')'
                    && &bytes[index - 1 - len..index - 1] == delimiter.as_bytes()
                {
                    break;
                }
            }
        }
        self.commit(tokens, start, TokenKind::RawString);
    }

    // ─── Numeric literals ───────────────────────────────────────────

    fn number(&mut self, tokens: &mut Vec<Token<'a>>) {
        let start = self.begin();
        let first = self.cursor.consume();
        let mut kind = if first == b'.' {
            TokenKind::Float
        } else {
            TokenKind::Integer
        };
        let mut is_hex = false;
        let mut is_binary = false;

        if first == b'0' && matches!(self.cursor.current(), b'b' | b'B') {
            self.cursor.consume();
            is_binary = true;
            loop {
                let ch = self.cursor.current();
                if ch == b'0' || ch == b'1' || (ch == b'\'' && self.cursor.peek(1) != b'\'') {
                    self.cursor.consume();
                } else {
                    break;
                }
            }
        } else {
            if first == b'0' && matches!(self.cursor.current(), b'x' | b'X') {
                self.cursor.consume();
                is_hex = true;
            }
            loop {
                let ch = self.cursor.current();
                let is_digit = if is_hex {
                    ch.is_ascii_hexdigit()
                } else {
                    ch.is_ascii_digit()
                };
                if is_digit || (ch == b'\'' && self.cursor.peek(1) != b'\'') {
                    self.cursor.consume();
                } else if ch == b'.' {
                    // A second dot ends the literal (it is a Dot operator)
                    if kind == TokenKind::Float {
                        break;
                    }
                    kind = TokenKind::Float;
                    self.cursor.consume();
                } else {
                    break;
                }
            }
        }

        if !is_binary {
            let exponent = self.match_exponent();
            if exponent > 0 {
                kind = TokenKind::Float;
                for _ in 0..exponent {
                    self.cursor.consume();
                }
            }
        }

        // Type suffix: any combination of u/U (integer only), f/F
        // (forces Float, disallowed after binary), l/L, in any order.
        let mut length = 0;
        loop {
            let ch = self.cursor.peek(length);
            if (ch == b'u' || ch == b'U') && kind == TokenKind::Integer {
                length += 1;
            } else if (ch == b'f' || ch == b'F') && !is_binary {
                kind = TokenKind::Float;
                length += 1;
            } else if ch == b'l' || ch == b'L' {
                length += 1;
            } else {
                break;
            }
        }
        for _ in 0..length {
            self.cursor.consume();
        }

        self.commit(tokens, start, kind);
    }

    /// Length of an exponent at the cursor (`e`/`E`/`p`/`P`, optional
    /// sign, one or more digits), or 0 when no full exponent is present.
    fn match_exponent(&self) -> usize {
        if !matches!(self.cursor.current(), b'e' | b'E' | b'p' | b'P') {
            return 0;
        }
        let mut length = 1;
        if matches!(self.cursor.peek(length), b'+' | b'-') {
            length += 1;
        }
        let mut digits = 0;
        while self.cursor.peek(length).is_ascii_digit() {
            length += 1;
            digits += 1;
        }
        if digits == 0 {
            return 0;
        }
        length
    }

    // ─── Identifiers & keywords ─────────────────────────────────────

    fn identifier_or_keyword(&mut self, tokens: &mut Vec<Token<'a>>) {
        let start = self.begin();
        while is_ident_continue(self.cursor.current()) {
            self.cursor.consume();
        }
        let text = self.cursor.slice_from(start.index);
        if self.profile.is_keyword(text) {
            self.commit(tokens, start, TokenKind::Keyword);
            if self.profile.is_definition_keyword(text) {
                self.definition_keyword_indices.push(tokens.len() - 1);
            }
            if self.profile.is_type_keyword(text) {
                self.type_keyword_indices.push(tokens.len() - 1);
            }
        } else if self.profile.is_known_type(text) {
            self.commit(tokens, start, TokenKind::KnownType);
        } else {
            // Two tokens back skips the whitespace between a definition
            // keyword and the name it introduces.
            let previous = tokens.len().checked_sub(2);
            self.commit(tokens, start, TokenKind::Identifier);
            let kind = self.classify_identifier(previous, text);
            tracing::trace!(identifier = text, kind = ?kind, "classified identifier");
            self.identifiers.push(ClassifiedIdentifier { text, kind });
        }
    }

    fn classify_identifier(&self, previous: Option<usize>, text: &str) -> IdentifierKind {
        if self.policy == DuplicateNamePolicy::ReuseFirst {
            if let Some(existing) = self.identifiers.iter().find(|entry| entry.text == text) {
                return existing.kind;
            }
        }
        match previous {
            Some(index) if self.definition_keyword_indices.contains(&index) => {
                IdentifierKind::Function
            }
            Some(index) if self.type_keyword_indices.contains(&index) => IdentifierKind::Class,
            _ => IdentifierKind::Variable,
        }
    }

    // ─── Fallback ───────────────────────────────────────────────────

    /// Any unrecognized character becomes a one-character Unknown token;
    /// scanning never aborts. The full UTF-8 character is consumed so
    /// the token slices on a character boundary.
    fn unknown(&mut self, tokens: &mut Vec<Token<'a>>) {
        let start = self.begin();
        tracing::debug!(byte = self.cursor.current(), "unrecognized character");
        let width = Cursor::utf8_char_width(self.cursor.current());
        for _ in 0..width {
            if self.cursor.is_eof() {
                break;
            }
            self.cursor.consume();
        }
        self.commit(tokens, start, TokenKind::Unknown);
    }
}
