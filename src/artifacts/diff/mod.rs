//! Edit scripts and their assembly
//!
//! - `diff_block`: the Delete/Insert/Equal block model and script projections
//! - `ndiff`: the anchored comparison pipeline
//! - `oracle`: the alignment oracle seam used between anchors
//! - `myers`: in-process Myers' diff oracle
//! - `external_oracle`: oracle backed by an external `diff` program
//! - `whitespace`: re-expansion of compact scripts onto lexed streams
//! - `hunk`: ed-style change hunks for rendering

pub mod diff_block;
pub mod external_oracle;
pub mod hunk;
pub mod myers;
pub mod ndiff;
pub mod oracle;
pub mod whitespace;
