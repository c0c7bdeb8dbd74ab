//! Unit tests for error handling.
//!
//! This module contains tests for error types and the messages shown to users.

use crate::errors::errors::{Error, ErrorImpl, ErrorTip, ExpectedSet};
use crate::lexer::tokens::TokenKind;
use crate::parser::grammar::{expected_at, Nonterminal};
use crate::Position;
use std::rc::Rc;

#[test]
fn test_error_creation() {
    let error = Error::new(
        ErrorImpl::UnrecognisedCharacter { character: '@' },
        Position::new(1, 10, Rc::new("test.txt".to_string())),
    );

    assert_eq!(error.get_error_name(), "LexicalError");
    assert!(error.is_lexical());
}

#[test]
fn test_error_position() {
    let pos = Position::new(4, 2, Rc::new("test.txt".to_string()));
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            expected: TokenKind::Assignment,
            found: TokenKind::Print,
        },
        pos.clone(),
    );

    assert_eq!(error.get_position(), &pos);
    assert_eq!(error.get_error_name(), "SyntaxError");
    assert!(!error.is_lexical());
}

#[test]
fn test_scanner_error_message() {
    let error = Error::new(
        ErrorImpl::UnrecognisedCharacter { character: '&' },
        Position::new(3, 4, Rc::new("test.txt".to_string())),
    );

    assert_eq!(error.to_string(), "Scanner Error: at line 3 char 5");
}

#[test]
fn test_expect_error_message() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            expected: TokenKind::Assignment,
            found: TokenKind::Print,
        },
        Position::new(1, 2, Rc::new("test.txt".to_string())),
    );

    assert_eq!(
        error.to_string(),
        "Parser Error: found print instead of = at line 1 char 3"
    );
}

#[test]
fn test_rule_error_message() {
    let error = Error::new(
        ErrorImpl::UnexpectedTokenInRule {
            rule: Nonterminal::Expr,
            expected: expected_at(Nonterminal::Expr),
            found: TokenKind::End,
        },
        Position::new(1, 4, Rc::new("test.txt".to_string())),
    );

    assert_eq!(
        error.to_string(),
        "Parser Error: In rule Expr: not, (, var, true, false, t, f, 0, 1 expected, found # at line 1 char 5"
    );
}

#[test]
fn test_expected_set_display() {
    let expected = ExpectedSet(vec![TokenKind::Id, TokenKind::Var, TokenKind::Print]);
    assert_eq!(expected.to_string(), "id, var, print");
    assert!(expected.contains(&TokenKind::Var));
    assert!(!expected.contains(&TokenKind::End));
}

#[test]
fn test_error_tip_unrecognised_character() {
    let error = Error::new(
        ErrorImpl::UnrecognisedCharacter { character: '@' },
        Position::null(),
    );

    match error.get_tip() {
        ErrorTip::Suggestion(tip) => assert!(tip.contains("'@'")),
        _ => panic!("Expected suggestion tip"),
    }
}

#[test]
fn test_error_tip_missing_close_paren() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            expected: TokenKind::CloseParen,
            found: TokenKind::End,
        },
        Position::null(),
    );

    assert!(error.get_tip().to_string().contains("`)` missing"));
}

#[test]
fn test_error_tip_keyword_as_variable() {
    let error = Error::new(
        ErrorImpl::UnexpectedTokenInRule {
            rule: Nonterminal::Expr,
            expected: expected_at(Nonterminal::Expr),
            found: TokenKind::And,
        },
        Position::null(),
    );

    assert_eq!(
        error.get_tip().to_string(),
        "`and` is a keyword and cannot be used as a variable name"
    );
}

#[test]
fn test_error_tip_none() {
    let error = Error::new(
        ErrorImpl::UnexpectedTokenInRule {
            rule: Nonterminal::StmtList,
            expected: expected_at(Nonterminal::StmtList),
            found: TokenKind::CloseParen,
        },
        Position::null(),
    );

    assert!(matches!(error.get_tip(), ErrorTip::None));
}

#[test]
fn test_error_tip_display() {
    let tip = ErrorTip::Suggestion("Try this instead".to_string());
    assert_eq!(tip.to_string(), "Try this instead");

    let tip = ErrorTip::None;
    assert_eq!(tip.to_string(), "");
}

#[test]
fn test_error_tip_literal_as_variable() {
    let error = crate::parser::parser::parse("t = 1 #".to_string(), None).unwrap_err();

    assert_eq!(
        error.get_tip().to_string(),
        "`t` is a keyword and cannot be used as a variable name"
    );
}
