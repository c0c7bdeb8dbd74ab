use crate::{errors::errors::Error, lexer::tokens::TokenKind};

use super::{grammar::Nonterminal, parser::Parser};

/// Expr -> OrExpr OrExprTail
pub fn parse_expr(parser: &mut Parser) -> Result<(), Error> {
    parser.check_entry(Nonterminal::Expr)?;

    parse_or_expr(parser)?;
    parse_or_expr_tail(parser)
}

/// OrExprTail -> or OrExpr OrExprTail | ε
pub fn parse_or_expr_tail(parser: &mut Parser) -> Result<(), Error> {
    loop {
        parser.check_entry(Nonterminal::OrExprTail)?;

        match parser.current_token_kind() {
            TokenKind::Or => {
                parser.expect(TokenKind::Or)?;
                parse_or_expr(parser)?;
            }
            _ => return Ok(()),
        }
    }
}

/// OrExpr -> AndExpr AndExprTail
pub fn parse_or_expr(parser: &mut Parser) -> Result<(), Error> {
    parser.check_entry(Nonterminal::OrExpr)?;

    parse_and_expr(parser)?;
    parse_and_expr_tail(parser)
}

/// AndExprTail -> and AndExpr AndExprTail | ε
pub fn parse_and_expr_tail(parser: &mut Parser) -> Result<(), Error> {
    loop {
        parser.check_entry(Nonterminal::AndExprTail)?;

        match parser.current_token_kind() {
            TokenKind::And => {
                parser.expect(TokenKind::And)?;
                parse_and_expr(parser)?;
            }
            _ => return Ok(()),
        }
    }
}

/// AndExpr -> NotExpr NotExprTail
pub fn parse_and_expr(parser: &mut Parser) -> Result<(), Error> {
    parser.check_entry(Nonterminal::AndExpr)?;

    parse_not_expr(parser)?;
    parse_not_expr_tail(parser)
}

/// NotExpr -> not | ε
pub fn parse_not_expr(parser: &mut Parser) -> Result<(), Error> {
    parser.check_entry(Nonterminal::NotExpr)?;

    if parser.current_token_kind() == TokenKind::Not {
        parser.expect(TokenKind::Not)?;
    }

    Ok(())
}

/// NotExprTail -> ( Expr ) | var | true | false | t | f | 0 | 1
pub fn parse_not_expr_tail(parser: &mut Parser) -> Result<(), Error> {
    parser.check_entry(Nonterminal::NotExprTail)?;

    match parser.current_token_kind() {
        TokenKind::OpenParen => {
            parser.expect(TokenKind::OpenParen)?;
            parse_expr(parser)?;
            parser.expect(TokenKind::CloseParen)?;
        }
        literal => {
            parser.expect(literal)?;
        }
    }

    Ok(())
}
