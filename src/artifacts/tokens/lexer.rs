use crate::artifacts::tokens::symbol_table::SymbolTable;
use crate::artifacts::tokens::token::{Token, TokenFlags, WHITESPACE_CODE};
use crate::error::NdiffResult;
use phf::phf_set;
use regex::Regex;
use std::cmp::Reverse;

/// Operators lexed as a single token instead of one token per character.
static PUNCTUATORS: phf::Set<&'static str> = phf_set! {
    "==", "!=", "<=", ">=", "->", "=>", "::", "&&", "||",
    "+=", "-=", "*=", "/=", "<<", ">>", "++", "--",
    "..", "...", "..=",
};

/// Splits text into tokens, assigning equivalence codes through a symbol
/// table that is shared by every input lexed with the same `Lexer`.
#[derive(Debug, Clone)]
pub struct Lexer {
    table: SymbolTable,
    pattern: Regex,
}

impl Lexer {
    pub fn new() -> NdiffResult<Self> {
        Self::with_table(SymbolTable::new())
    }

    pub fn with_table(table: SymbolTable) -> NdiffResult<Self> {
        Ok(Self {
            table,
            pattern: Regex::new(&token_pattern())?,
        })
    }

    pub fn tokenize(&mut self, text: &str) -> Vec<Token> {
        let mut tokens: Vec<Token> = Vec::new();
        let (mut line, mut column) = (1, 1);
        let mut line_has_content = false;

        for captures in self.pattern.captures_iter(text) {
            let Some(lexeme) = captures.get(0) else {
                continue;
            };
            let lexeme = lexeme.as_str();
            let is_whitespace = captures.name("ws").is_some();

            let mut flags = TokenFlags::empty();
            if is_whitespace {
                flags |= TokenFlags::WHITESPACE;
            }
            if !line_has_content {
                flags |= TokenFlags::START_OF_LINE;
            }
            if tokens.last().is_some_and(Token::is_whitespace) {
                flags |= TokenFlags::LEADING_SPACE;
            }

            let code = if is_whitespace {
                WHITESPACE_CODE
            } else {
                self.table.code_for(lexeme)
            };
            let offset = tokens.len();
            tokens.push(Token::new(lexeme.to_string(), code, offset, line, column).with_flags(flags));

            for ch in lexeme.chars() {
                if ch == '\n' {
                    line += 1;
                    column = 1;
                    line_has_content = false;
                } else {
                    column += 1;
                }
            }
            if !is_whitespace {
                line_has_content = true;
            }
        }

        log::debug!(
            "lexed {} tokens ({} distinct literals so far)",
            tokens.len(),
            self.table.len()
        );
        tokens
    }
}

fn token_pattern() -> String {
    let mut punctuators: Vec<&str> = PUNCTUATORS.iter().copied().collect();
    // longest first, so `...` wins over `..`
    punctuators.sort_by_key(|p| (Reverse(p.len()), *p));
    let punctuators = punctuators
        .into_iter()
        .map(regex::escape)
        .collect::<Vec<_>>()
        .join("|");

    format!(
        r"(?P<ws>\s+)|(?P<word>[A-Za-z_][A-Za-z0-9_]*)|(?P<num>[0-9]+(?:\.[0-9]+)?)|(?P<punct>{punctuators})|(?s:.)"
    )
}
