//! Porcelain commands (user-facing output)
//!
//! ## Commands
//!
//! - `diff`: Render the edit script as ed-style change hunks

pub mod diff;
