//! Error types and error handling for the recognizer.
//!
//! This module defines the single error type returned by the scanner and
//! the parser. It includes:
//!
//! - Error structures with source position information
//! - Lexical and syntax error variants
//! - The user-facing `Scanner Error` / `Parser Error` messages
//! - Tips shown next to the offending source line

pub mod errors;

#[cfg(test)]
mod tests;
