//! Parser state and the entry point of the recognizer.
//!
//! The parser holds the scanner and exactly one lookahead token. The
//! lookahead changes only through `expect`, which consumes a terminal the
//! grammar requires and pulls the next token from the scanner. Each
//! nonterminal is a free function in `stmt` or `expr` taking the parser;
//! the call stack of those functions is the parse stack.

use crate::{
    errors::errors::{Error, ErrorImpl},
    lexer::{
        lexer::Scanner,
        tokens::{Token, TokenKind},
    },
    Position,
};

use super::{
    grammar::{self, Nonterminal},
    stmt::parse_program,
};

/// The main parser structure that maintains parsing state.
pub struct Parser {
    /// Source of further tokens
    scanner: Scanner,
    /// The single token of lookahead
    lookahead: Token,
}

impl Parser {
    /// Creates a parser over `scanner`, pulling the first lookahead token.
    ///
    /// # Returns
    ///
    /// An Error if the first token cannot be scanned.
    pub fn new(mut scanner: Scanner) -> Result<Self, Error> {
        let lookahead = scanner.next_token()?;
        Ok(Parser { scanner, lookahead })
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.lookahead
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.lookahead.kind
    }

    /// Returns where the current token starts.
    pub fn get_position(&self) -> Position {
        self.lookahead.span.start.clone()
    }

    /// Consumes the current token if it is of the expected kind.
    ///
    /// # Arguments
    ///
    /// * `expected_kind` - The TokenKind the grammar requires here
    ///
    /// # Returns
    ///
    /// Returns Ok(Token) with the consumed token, otherwise an UnexpectedToken
    /// error positioned at the current token. A lexical error while pulling
    /// the next token is returned as is.
    pub fn expect(&mut self, expected_kind: TokenKind) -> Result<Token, Error> {
        let found = self.current_token_kind();
        if found != expected_kind {
            return Err(Error::new(
                ErrorImpl::UnexpectedToken {
                    expected: expected_kind,
                    found,
                },
                self.get_position(),
            ));
        }

        // Nothing is read past the end marker.
        let next = if found == TokenKind::End {
            self.lookahead.clone()
        } else {
            self.scanner.next_token()?
        };

        Ok(std::mem::replace(&mut self.lookahead, next))
    }

    /// Checks the lookahead on entry to `nonterminal`: it must be in the
    /// rule's FIRST set, or in its FOLLOW set if the rule can derive ε.
    pub fn check_entry(&self, nonterminal: Nonterminal) -> Result<(), Error> {
        let found = self.current_token_kind();
        tracing::trace!(rule = %nonterminal, lookahead = %found, "enter");

        if grammar::accepts(nonterminal, found) {
            Ok(())
        } else {
            Err(Error::new(
                ErrorImpl::UnexpectedTokenInRule {
                    rule: nonterminal,
                    expected: grammar::expected_at(nonterminal),
                    found,
                },
                self.get_position(),
            ))
        }
    }
}

/// Decides whether `source` is a program of the language.
///
/// # Arguments
///
/// * `source` - The full program text
/// * `file` - Name used in error positions, `shell` when None
///
/// # Returns
///
/// Ok(()) when the program is accepted, otherwise the first lexical or
/// syntax error.
pub fn parse(source: String, file: Option<String>) -> Result<(), Error> {
    let scanner = Scanner::new(source, file);
    tracing::debug!(file = %scanner.file(), "parsing");

    let mut parser = Parser::new(scanner)?;
    parse_program(&mut parser)?;

    tracing::debug!("accepted");
    Ok(())
}
