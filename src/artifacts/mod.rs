//! Comparison data structures and algorithms
//!
//! This module contains the core types and algorithms of the comparison:
//!
//! - `tokens`: Tokens, the shared symbol table and the lexer
//! - `suffix`: Suffix array and LCP construction over two code streams
//! - `anchors`: Anchor discovery, confusion filtering and ordering
//! - `diff`: Edit scripts, alignment oracles and the anchored pipeline
//! - `optimizer`: Lossless readability rewrites of edit scripts
//! - `core`: Shared utilities (pager wrapper, output target)

pub mod anchors;
pub mod core;
pub mod diff;
pub mod optimizer;
pub mod suffix;
pub mod tokens;
