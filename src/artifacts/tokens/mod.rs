//! Tokens and lexing
//!
//! - `token`: the immutable `Token` unit and its positional flags
//! - `symbol_table`: per-comparison text to equivalence-code table
//! - `lexer`: regex-driven lexer producing full token streams, whitespace included

pub mod lexer;
pub mod symbol_table;
pub mod token;
