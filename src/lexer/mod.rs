//! Lexical analysis module for the recognizer.
//!
//! This module contains the scanner that converts source text into a
//! stream of tokens for parsing. It handles:
//!
//! - Tokenization through an ordered lexicon of regex rules
//! - Keywords taking priority over variable names
//! - Token position tracking (line and column) for error reporting
//! - Whitespace skipping and the `#` end marker

pub mod lexer;
pub mod tokens;
