//! Utility macros for the recognizer.
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_RULE!` - Creates a lexicon rule from a pattern and an action

/// Creates a Token instance.
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Var, "x".to_string(), span);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $value:expr, $span:expr) => {
        Token {
            kind: $kind,
            value: $value,
            span: $span,
        }
    };
}

/// Creates a lexicon rule. The pattern is anchored at the scanner cursor.
///
/// # Arguments
///
/// * `$pattern` - Regex source, without the leading `^`
/// * `$action` - The `LexAction` taken on a match
///
/// # Example
///
/// ```ignore
/// MK_RULE!("[ \\t\\r\\n]+", LexAction::Ignore)
/// ```
#[macro_export]
macro_rules! MK_RULE {
    ($pattern:expr, $action:expr) => {
        LexRule {
            regex: Regex::new(&format!("^(?:{})", $pattern)).expect("lexicon pattern must compile"),
            action: $action,
        }
    };
}
