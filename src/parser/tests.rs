//! Unit tests for the parser module.
//!
//! This module contains tests for:
//! - Accepted programs (assignments, prints, chains, nesting)
//! - The position and shape of the first syntax error
//! - Lookahead handling in `expect`
//! - The grammar tables against the production table

use crate::{
    errors::errors::ErrorImpl,
    lexer::{lexer::Scanner, tokens::TokenKind},
};

use super::{
    grammar::{
        compute_first_sets, compute_follow_sets, expected_at, first, follow, is_nullable,
        ll1_conflicts, Nonterminal,
    },
    parser::{parse, Parser},
};

fn check(source: &str) -> Result<(), crate::errors::errors::Error> {
    parse(source.to_string(), Some("test.txt".to_string()))
}

#[test]
fn test_parse_assignment() {
    assert!(check("x = true #").is_ok());
}

#[test]
fn test_parse_print_with_grouping() {
    assert!(check("print (a and b) or not c #").is_ok());
}

#[test]
fn test_parse_end_marker_only() {
    assert!(check("#").is_ok());
}

#[test]
fn test_parse_empty_input() {
    assert!(check("").is_ok());
    assert!(check("  \n\t").is_ok());
}

#[test]
fn test_parse_without_end_marker() {
    assert!(check("x = t").is_ok());
}

#[test]
fn test_parse_id_keyword_as_target() {
    assert!(check("id = 1 #").is_ok());
}

#[test]
fn test_parse_statement_list() {
    let source = "x = t\ny = not x or f and (a or 0)\nprint y\n#";
    assert!(check(source).is_ok());
}

#[test]
fn test_parse_operator_chains() {
    assert!(check("x = a or b or c #").is_ok());
    assert!(check("x = a and b and c #").is_ok());
    assert!(check("x = a and b or c and not d or false #").is_ok());
}

#[test]
fn test_parse_all_literals() {
    assert!(check("print true or false or t or f or 0 or 1 #").is_ok());
}

#[test]
fn test_parse_nested_parentheses() {
    for depth in [1, 10, 100] {
        let source = format!("x = {}v{} #", "(".repeat(depth), ")".repeat(depth));
        assert!(check(&source).is_ok(), "depth {}", depth);
    }
}

#[test]
fn test_parse_is_repeatable() {
    let source = "print (a and b) or not c #";
    assert!(check(source).is_ok());
    assert!(check(source).is_ok());
}

#[test]
fn test_parse_text_after_end_marker_is_not_read() {
    assert!(check("x = t # @@@").is_ok());
}

#[test]
fn test_error_missing_expression() {
    let error = check("x = #").unwrap_err();

    assert_eq!(
        error.get_impl(),
        &ErrorImpl::UnexpectedTokenInRule {
            rule: Nonterminal::Expr,
            expected: expected_at(Nonterminal::Expr),
            found: TokenKind::End,
        }
    );
    assert_eq!(error.get_position().line, 1);
    assert_eq!(error.get_position().column, 4);
}

#[test]
fn test_error_dangling_and() {
    let error = check("x = a and #").unwrap_err();

    match error.get_impl() {
        ErrorImpl::UnexpectedTokenInRule { rule, expected, found } => {
            assert_eq!(*rule, Nonterminal::AndExpr);
            assert_eq!(*found, TokenKind::End);
            for kind in first(Nonterminal::NotExpr).iter().chain(first(Nonterminal::NotExprTail)) {
                assert!(expected.contains(kind));
            }
        }
        other => panic!("unexpected error {:?}", other),
    }
    assert_eq!(error.get_position().column, 10);
}

#[test]
fn test_error_missing_assignment() {
    let error = check("y print true #").unwrap_err();

    assert_eq!(
        error.get_impl(),
        &ErrorImpl::UnexpectedToken {
            expected: TokenKind::Assignment,
            found: TokenKind::Print,
        }
    );
    assert_eq!(error.get_position().column, 2);
    assert_eq!(
        error.to_string(),
        "Parser Error: found print instead of = at line 1 char 3"
    );
}

#[test]
fn test_error_missing_close_paren() {
    let error = check("x = ((a) #").unwrap_err();

    assert_eq!(
        error.get_impl(),
        &ErrorImpl::UnexpectedToken {
            expected: TokenKind::CloseParen,
            found: TokenKind::End,
        }
    );
    assert_eq!(error.get_position().column, 9);
}

#[test]
fn test_error_extra_close_paren() {
    let error = check("x = (a)) #").unwrap_err();

    match error.get_impl() {
        ErrorImpl::UnexpectedTokenInRule { rule, found, .. } => {
            assert_eq!(*rule, Nonterminal::StmtList);
            assert_eq!(*found, TokenKind::CloseParen);
        }
        other => panic!("unexpected error {:?}", other),
    }
    assert_eq!(error.get_position().column, 7);
}

#[test]
fn test_error_keyword_as_variable() {
    let error = check("x = and #").unwrap_err();
    assert!(matches!(
        error.get_impl(),
        ErrorImpl::UnexpectedTokenInRule { rule: Nonterminal::Expr, found: TokenKind::And, .. }
    ));

    let error = check("and = t #").unwrap_err();
    assert!(matches!(
        error.get_impl(),
        ErrorImpl::UnexpectedTokenInRule { rule: Nonterminal::Program, found: TokenKind::And, .. }
    ));
}

#[test]
fn test_error_double_not() {
    let error = check("x = not not a #").unwrap_err();

    assert!(matches!(
        error.get_impl(),
        ErrorImpl::UnexpectedTokenInRule { rule: Nonterminal::NotExprTail, found: TokenKind::Not, .. }
    ));
    assert_eq!(error.get_position().column, 8);
}

#[test]
fn test_error_operator_outside_grammar() {
    let error = check("x = !a #").unwrap_err();

    assert!(!error.is_lexical());
    assert!(matches!(
        error.get_impl(),
        ErrorImpl::UnexpectedTokenInRule { found: TokenKind::Bang, .. }
    ));
}

#[test]
fn test_error_position_on_later_line() {
    let error = check("x = t\nprint y and\n#").unwrap_err();

    assert_eq!(error.get_position().line, 3);
    assert_eq!(error.get_position().column, 0);
}

#[test]
fn test_lexical_error_during_parse() {
    let error = check("x = a & b #").unwrap_err();

    assert!(error.is_lexical());
    assert_eq!(error.get_position().column, 6);
    assert_eq!(error.to_string(), "Scanner Error: at line 1 char 7");
}

#[test]
fn test_lexical_error_in_first_token() {
    let error = check("@").unwrap_err();

    assert!(error.is_lexical());
    assert_eq!(error.get_position().column, 0);
}

#[test]
fn test_expect_advances_lookahead() {
    let mut parser = Parser::new(Scanner::new("x = t".to_string(), None)).unwrap();
    assert_eq!(parser.current_token_kind(), TokenKind::Var);

    let consumed = parser.expect(TokenKind::Var).unwrap();
    assert_eq!(consumed.value, "x");
    assert_eq!(parser.current_token_kind(), TokenKind::Assignment);
}

#[test]
fn test_failed_expect_keeps_lookahead() {
    let mut parser = Parser::new(Scanner::new("x = t".to_string(), None)).unwrap();

    assert!(parser.expect(TokenKind::Print).is_err());
    assert_eq!(parser.current_token_kind(), TokenKind::Var);
    assert_eq!(parser.current_token().value, "x");
}

#[test]
fn test_check_entry_uses_follow_for_nullable_rules() {
    let parser = Parser::new(Scanner::new(")".to_string(), None)).unwrap();

    assert!(parser.check_entry(Nonterminal::OrExprTail).is_ok());
    assert!(parser.check_entry(Nonterminal::AndExprTail).is_ok());
    assert!(parser.check_entry(Nonterminal::Expr).is_err());
    assert!(parser.check_entry(Nonterminal::NotExpr).is_err());
}

#[test]
fn test_first_sets_match_productions() {
    let (computed, nullable) = compute_first_sets();

    for nonterminal in Nonterminal::ALL {
        assert_eq!(first(nonterminal), &computed[&nonterminal], "FIRST({})", nonterminal);
        assert_eq!(is_nullable(nonterminal), nullable.contains(&nonterminal), "nullable {}", nonterminal);
    }
}

#[test]
fn test_follow_sets_match_productions() {
    let computed = compute_follow_sets();

    for nonterminal in Nonterminal::ALL {
        assert_eq!(follow(nonterminal), &computed[&nonterminal], "FOLLOW({})", nonterminal);
    }
}

#[test]
fn test_grammar_is_ll1() {
    assert!(ll1_conflicts().is_empty());
}

#[test]
fn test_expected_at_nullable_rule() {
    let expected = expected_at(Nonterminal::StmtList);
    assert_eq!(
        expected.0,
        vec![TokenKind::Id, TokenKind::Print, TokenKind::Var, TokenKind::End]
    );
}

#[test]
fn test_error_keyword_then_underscore_is_syntax_error() {
    let error = check("and_ = t #").unwrap_err();

    assert!(!error.is_lexical());
    assert_eq!(error.get_position().column, 0);
    assert!(error.to_string().ends_with("at line 1 char 1"));
}
