use std::rc::Rc;

use lazy_static::lazy_static;
use regex::Regex;

use crate::{errors::errors::{Error, ErrorImpl}, Position, Span, MK_RULE, MK_TOKEN};

use super::tokens::{Token, TokenKind, OPERATOR_LOOKUP, RESERVED_LOOKUP};

/// What the scanner does with the text a lexicon rule matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LexAction {
    Emit(TokenKind),
    /// Like `Emit`, but only when no letter or digit follows the match.
    Keyword(TokenKind),
    /// The token kind is looked up from the matched operator character.
    Operator,
    Ignore,
}

#[derive(Debug, Clone)]
pub struct LexRule {
    regex: Regex,
    action: LexAction,
}

impl LexRule {
    pub fn action(&self) -> LexAction {
        self.action
    }
}

lazy_static! {
    /// Rules are tried top to bottom; the first one matching a non-empty prefix wins.
    /// Keywords must stay ahead of the `var` rule or they would scan as variables.
    pub static ref LEXICON: Vec<LexRule> = {
        let mut rules = vec![
            MK_RULE!("[!?()=#]", LexAction::Operator),
            MK_RULE!("[ \\t\\r\\n]+", LexAction::Ignore),
        ];

        for (keyword, kind) in RESERVED_LOOKUP.iter() {
            rules.push(MK_RULE!(regex::escape(keyword), LexAction::Keyword(*kind)));
        }

        rules.push(MK_RULE!("[A-Za-z0-9]+", LexAction::Emit(TokenKind::Var)));
        rules
    };
}

/// Pull-based scanner over a single source text.
#[derive(Debug, Clone)]
pub struct Scanner {
    source: String,
    pos: usize,
    line: u32,
    column: u32,
    file: Rc<String>,
    finished: bool,
}

impl Scanner {
    pub fn new(source: String, file: Option<String>) -> Scanner {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("shell"))
        };

        Scanner {
            source,
            pos: 0,
            line: 1,
            column: 0,
            file: file_name,
            finished: false,
        }
    }

    /// Current cursor location. Called as `Scanner::position(self)` inside
    /// the scanner so it is not taken for `Iterator::position`.
    pub fn position(&self) -> Position {
        Position::new(self.line, self.column, Rc::clone(&self.file))
    }

    pub fn file(&self) -> Rc<String> {
        Rc::clone(&self.file)
    }

    fn remainder(&self) -> &str {
        &self.source[self.pos..]
    }

    fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    /// Returns the next token, skipping ignored text. At the end of the
    /// source an `End` token with an empty value is returned on every call.
    pub fn next_token(&mut self) -> Result<Token, Error> {
        loop {
            if self.at_eof() {
                let here = Scanner::position(self);
                tracing::trace!(position = %here, "end of input");
                return Ok(MK_TOKEN!(TokenKind::End, String::new(), Span { start: here.clone(), end: here }));
            }

            let (action, matched) = match self.match_rule() {
                Some(found) => found,
                None => {
                    let character = self.remainder().chars().next().unwrap_or('\0');
                    return Err(Error::new(ErrorImpl::UnrecognisedCharacter { character }, Scanner::position(self)));
                }
            };

            let start = Scanner::position(self);
            self.advance_over(&matched);

            let kind = match action {
                LexAction::Ignore => continue,
                LexAction::Emit(kind) | LexAction::Keyword(kind) => kind,
                LexAction::Operator => match matched.chars().next().and_then(|c| OPERATOR_LOOKUP.get(&c)) {
                    Some(kind) => *kind,
                    None => return Err(Error::new(ErrorImpl::UnrecognisedCharacter { character: matched.chars().next().unwrap_or('\0') }, start)),
                },
            };

            let token = MK_TOKEN!(kind, matched, Span { start, end: Scanner::position(self) });
            tracing::trace!(kind = %token.kind, value = %token.value, position = %token.span.start, "token");
            return Ok(token);
        }
    }

    fn match_rule(&self) -> Option<(LexAction, String)> {
        let remaining = self.remainder();

        for rule in LEXICON.iter() {
            let Some(found) = rule.regex.find(remaining) else {
                continue;
            };

            if found.as_str().is_empty() {
                continue;
            }

            if let LexAction::Keyword(_) = rule.action {
                let continues_word = remaining[found.end()..]
                    .chars()
                    .next()
                    .is_some_and(|c| c.is_ascii_alphanumeric());
                if continues_word {
                    continue;
                }
            }

            return Some((rule.action, found.as_str().to_string()));
        }

        None
    }

    fn advance_over(&mut self, text: &str) {
        for c in text.chars() {
            if c == '\n' {
                self.line += 1;
                self.column = 0;
            } else {
                self.column += 1;
            }
        }

        self.pos += text.len();
    }
}

impl Iterator for Scanner {
    type Item = Result<Token, Error>;

    /// Yields tokens up to and including the first `End`, or the first error.
    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        let result = self.next_token();
        match &result {
            Ok(token) if token.kind == TokenKind::End => self.finished = true,
            Err(_) => self.finished = true,
            Ok(_) => {}
        }

        Some(result)
    }
}

pub fn tokenize(source: String, file: Option<String>) -> Result<Vec<Token>, Error> {
    Scanner::new(source, file).collect()
}
