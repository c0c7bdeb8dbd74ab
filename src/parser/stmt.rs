use crate::{errors::errors::Error, lexer::tokens::TokenKind, parser::expr::parse_expr};

use super::{grammar::Nonterminal, parser::Parser};

/// Program -> StmtList #
pub fn parse_program(parser: &mut Parser) -> Result<(), Error> {
    parser.check_entry(Nonterminal::Program)?;

    parse_stmt_list(parser)?;
    parser.expect(TokenKind::End)?;

    Ok(())
}

/// StmtList -> Stmt StmtList | ε
///
/// The recursion on `StmtList` is a loop; every iteration makes the same
/// one-token decision.
pub fn parse_stmt_list(parser: &mut Parser) -> Result<(), Error> {
    loop {
        parser.check_entry(Nonterminal::StmtList)?;

        match parser.current_token_kind() {
            TokenKind::Id | TokenKind::Var | TokenKind::Print => parse_stmt(parser)?,
            // FOLLOW(StmtList)
            _ => return Ok(()),
        }
    }
}

/// Stmt -> id = Expr | var = Expr | print Expr
pub fn parse_stmt(parser: &mut Parser) -> Result<(), Error> {
    parser.check_entry(Nonterminal::Stmt)?;

    match parser.current_token_kind() {
        TokenKind::Print => {
            parser.expect(TokenKind::Print)?;
        }
        target => {
            parser.expect(target)?;
            parser.expect(TokenKind::Assignment)?;
        }
    }

    parse_expr(parser)
}
