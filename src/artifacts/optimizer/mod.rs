//! Lossless edit script rewriting
//!
//! - `lossless`: coincidental equality splitting and edit merging
//! - `line_bundling`: optional rewriting of edit-dense lines

pub mod line_bundling;
pub mod lossless;
