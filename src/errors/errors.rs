use std::fmt::Display;

use thiserror::Error;

use crate::{lexer::tokens::TokenKind, parser::grammar::Nonterminal, Position};

#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_impl(&self) -> &ErrorImpl {
        &self.internal_error
    }

    /// True for scanner failures, false for parser failures.
    pub fn is_lexical(&self) -> bool {
        matches!(self.internal_error, ErrorImpl::UnrecognisedCharacter { .. })
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedCharacter { .. } => "LexicalError",
            ErrorImpl::UnexpectedToken { .. } => "SyntaxError",
            ErrorImpl::UnexpectedTokenInRule { .. } => "SyntaxError",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnrecognisedCharacter { character } => ErrorTip::Suggestion(format!(
                "Unrecognised character {:?}, only letters, digits, whitespace and `! ? ( ) = #` are allowed",
                character
            )),
            ErrorImpl::UnexpectedToken { expected: TokenKind::CloseParen, found: TokenKind::End } => {
                ErrorTip::Suggestion(String::from("Input ended inside parentheses, is a `)` missing?"))
            }
            ErrorImpl::UnexpectedToken { expected, .. } => {
                ErrorTip::Suggestion(format!("Expected `{}` here", expected))
            }
            ErrorImpl::UnexpectedTokenInRule { expected, found, .. } => {
                if expected.contains(&TokenKind::Var) && is_reserved_word(*found) {
                    ErrorTip::Suggestion(format!(
                        "`{}` is a keyword and cannot be used as a variable name",
                        found
                    ))
                } else {
                    ErrorTip::None
                }
            }
        }
    }
}

fn is_reserved_word(kind: TokenKind) -> bool {
    matches!(
        kind,
        TokenKind::Id
            | TokenKind::Print
            | TokenKind::Or
            | TokenKind::And
            | TokenKind::Not
            | TokenKind::True
            | TokenKind::False
            | TokenKind::T
            | TokenKind::F
            | TokenKind::Zero
            | TokenKind::One
    )
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_lexical() {
            write!(
                f,
                "Scanner Error: at line {} char {}",
                self.position.line,
                self.position.column + 1
            )
        } else {
            write!(
                f,
                "Parser Error: {} at line {} char {}",
                self.internal_error,
                self.position.line,
                self.position.column + 1
            )
        }
    }
}

impl std::error::Error for Error {}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

/// Token kinds a rule would have accepted, in declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpectedSet(pub Vec<TokenKind>);

impl ExpectedSet {
    pub fn contains(&self, kind: &TokenKind) -> bool {
        self.0.contains(kind)
    }
}

impl Display for ExpectedSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names: Vec<&str> = self.0.iter().map(|kind| kind.as_str()).collect();
        write!(f, "{}", names.join(", "))
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("unrecognised character {character:?}")]
    UnrecognisedCharacter { character: char },
    #[error("found {found} instead of {expected}")]
    UnexpectedToken { expected: TokenKind, found: TokenKind },
    #[error("In rule {rule}: {expected} expected, found {found}")]
    UnexpectedTokenInRule {
        rule: Nonterminal,
        expected: ExpectedSet,
        found: TokenKind,
    },
}
