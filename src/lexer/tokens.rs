use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Span;

lazy_static! {
    /// Keyword spellings in lexicon priority order. Every entry is matched as a
    /// whole word ahead of the generic `var` rule.
    pub static ref RESERVED_LOOKUP: Vec<(&'static str, TokenKind)> = vec![
        ("id", TokenKind::Id),
        ("print", TokenKind::Print),
        ("or", TokenKind::Or),
        ("and", TokenKind::And),
        ("not", TokenKind::Not),
        ("true", TokenKind::True),
        ("false", TokenKind::False),
        ("t", TokenKind::T),
        ("f", TokenKind::F),
        ("0", TokenKind::Zero),
        ("1", TokenKind::One),
    ];

    pub static ref OPERATOR_LOOKUP: HashMap<char, TokenKind> = {
        let mut map = HashMap::new();
        map.insert('!', TokenKind::Bang);
        map.insert('?', TokenKind::Question);
        map.insert('(', TokenKind::OpenParen);
        map.insert(')', TokenKind::CloseParen);
        map.insert('=', TokenKind::Assignment);
        map.insert('#', TokenKind::End);
        map
    };
}

/// Declaration order is the order expected sets are listed in error messages.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, PartialOrd, Ord)]
pub enum TokenKind {
    // Reserved
    Id,
    Print,
    Or,
    And,
    Not,

    OpenParen,
    Var,
    True,
    False,
    T,
    F,
    Zero,
    One,

    CloseParen,
    Assignment, // =
    Bang,       // !
    Question,   // ?

    End, // # or end of stream
}

impl TokenKind {
    /// The terminal as it is written in the grammar.
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenKind::Id => "id",
            TokenKind::Print => "print",
            TokenKind::Or => "or",
            TokenKind::And => "and",
            TokenKind::Not => "not",
            TokenKind::OpenParen => "(",
            TokenKind::Var => "var",
            TokenKind::True => "true",
            TokenKind::False => "false",
            TokenKind::T => "t",
            TokenKind::F => "f",
            TokenKind::Zero => "0",
            TokenKind::One => "1",
            TokenKind::CloseParen => ")",
            TokenKind::Assignment => "=",
            TokenKind::Bang => "!",
            TokenKind::Question => "?",
            TokenKind::End => "#",
        }
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {:?} {}", self.kind, self.value, self.span.start)
    }
}
