//! Predictive parser for the boolean statement language.
//!
//! This module contains an LL(1) recursive-descent recognizer. There is
//! one function per grammar nonterminal, and each picks its production
//! from the single lookahead token by checking it against the rule's
//! FIRST and FOLLOW sets. It handles:
//!
//! - Statement lists, assignments and `print` statements
//! - `or` / `and` chains, `not` and parenthesized expressions
//! - Reporting the first syntax error and stopping
//!
//! No tree is built; a successful parse only means the input belongs to
//! the language.

pub mod expr;
pub mod grammar;
pub mod parser;
pub mod stmt;

#[cfg(test)]
mod tests;
