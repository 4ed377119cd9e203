//! Token kinds and the borrowed token value.
//!
//! Every character of the input is covered by some token: whitespace and
//! comments are emitted as tokens rather than skipped, so concatenating
//! the `text` of all tokens in order reproduces the input exactly.

use crate::Position;

/// The closed set of token kinds the scanner can produce.
///
/// Operator kinds follow maximal munch: `<<=` is one [`LessLessEquals`]
/// token, never `<`, `<`, `=`.
///
/// [`LessLessEquals`]: TokenKind::LessLessEquals
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Unknown,
    Whitespace,
    ImportStatement,
    ImportModule,
    LeftParen,
    RightParen,
    LeftCurly,
    RightCurly,
    LeftBracket,
    RightBracket,
    Less,
    Greater,
    LessEquals,
    GreaterEquals,
    LessLess,
    GreaterGreater,
    LessLessEquals,
    GreaterGreaterEquals,
    LessGreater,
    Comma,
    Plus,
    PlusEquals,
    Minus,
    MinusEquals,
    Asterisk,
    AsteriskEquals,
    Slash,
    SlashEquals,
    Percent,
    PercentEquals,
    Caret,
    CaretEquals,
    ExclamationMark,
    ExclamationMarkEquals,
    Equals,
    EqualsEquals,
    And,
    AndAnd,
    AndEquals,
    Pipe,
    PipePipe,
    PipeEquals,
    Tilde,
    QuestionMark,
    Colon,
    ColonColon,
    ColonColonAsterisk,
    Semicolon,
    Dot,
    DotAsterisk,
    Arrow,
    ArrowAsterisk,
    DoubleQuotedString,
    SingleQuotedString,
    RawString,
    EscapeSequence,
    Comment,
    Integer,
    Float,
    Keyword,
    KnownType,
    Identifier,
    Eof,
}

impl TokenKind {
    /// The symbolic name of this kind, e.g. `"LessLessEquals"`.
    pub fn name(self) -> &'static str {
        match self {
            Self::Unknown => "Unknown",
            Self::Whitespace => "Whitespace",
            Self::ImportStatement => "ImportStatement",
            Self::ImportModule => "ImportModule",
            Self::LeftParen => "LeftParen",
            Self::RightParen => "RightParen",
            Self::LeftCurly => "LeftCurly",
            Self::RightCurly => "RightCurly",
            Self::LeftBracket => "LeftBracket",
            Self::RightBracket => "RightBracket",
            Self::Less => "Less",
            Self::Greater => "Greater",
            Self::LessEquals => "LessEquals",
            Self::GreaterEquals => "GreaterEquals",
            Self::LessLess => "LessLess",
            Self::GreaterGreater => "GreaterGreater",
            Self::LessLessEquals => "LessLessEquals",
            Self::GreaterGreaterEquals => "GreaterGreaterEquals",
            Self::LessGreater => "LessGreater",
            Self::Comma => "Comma",
            Self::Plus => "Plus",
            Self::PlusEquals => "PlusEquals",
            Self::Minus => "Minus",
            Self::MinusEquals => "MinusEquals",
            Self::Asterisk => "Asterisk",
            Self::AsteriskEquals => "AsteriskEquals",
            Self::Slash => "Slash",
            Self::SlashEquals => "SlashEquals",
            Self::Percent => "Percent",
            Self::PercentEquals => "PercentEquals",
            Self::Caret => "Caret",
            Self::CaretEquals => "CaretEquals",
            Self::ExclamationMark => "ExclamationMark",
            Self::ExclamationMarkEquals => "ExclamationMarkEquals",
            Self::Equals => "Equals",
            Self::EqualsEquals => "EqualsEquals",
            Self::And => "And",
            Self::AndAnd => "AndAnd",
            Self::AndEquals => "AndEquals",
            Self::Pipe => "Pipe",
            Self::PipePipe => "PipePipe",
            Self::PipeEquals => "PipeEquals",
            Self::Tilde => "Tilde",
            Self::QuestionMark => "QuestionMark",
            Self::Colon => "Colon",
            Self::ColonColon => "ColonColon",
            Self::ColonColonAsterisk => "ColonColonAsterisk",
            Self::Semicolon => "Semicolon",
            Self::Dot => "Dot",
            Self::DotAsterisk => "DotAsterisk",
            Self::Arrow => "Arrow",
            Self::ArrowAsterisk => "ArrowAsterisk",
            Self::DoubleQuotedString => "DoubleQuotedString",
            Self::SingleQuotedString => "SingleQuotedString",
            Self::RawString => "RawString",
            Self::EscapeSequence => "EscapeSequence",
            Self::Comment => "Comment",
            Self::Integer => "Integer",
            Self::Float => "Float",
            Self::Keyword => "Keyword",
            Self::KnownType => "KnownType",
            Self::Identifier => "Identifier",
            Self::Eof => "Eof",
        }
    }
}

/// A classified, positioned, text-bearing unit of the input.
///
/// `text` is a view into the original buffer and never copies; the
/// buffer must outlive every token derived from it. `end` is the
/// position of the token's *last* character (inclusive) — display
/// layers wanting an exclusive column must add one themselves.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Token<'a> {
    /// What lexical class this token belongs to.
    pub kind: TokenKind,
    /// Position of the first character.
    pub start: Position,
    /// Position of the last character (inclusive).
    pub end: Position,
    /// The exact source slice the token covers.
    pub text: &'a str,
}

impl<'a> Token<'a> {
    /// Construct a token from its parts.
    pub fn new(kind: TokenKind, start: Position, end: Position, text: &'a str) -> Self {
        Self {
            kind,
            start,
            end,
            text,
        }
    }
}
