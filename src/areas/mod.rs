//! Comparison session components
//!
//! - `comparison`: one source/target comparison, its options and its output writer
//! - `workspace`: file system access for the compared inputs

pub mod comparison;
pub mod workspace;
