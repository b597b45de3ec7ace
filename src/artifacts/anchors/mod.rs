//! Anchor discovery and filtering
//!
//! - `anchor`: the `Anchor` value object (a run common to two places)
//! - `anchor_analysis`: maximal anchor extraction from a suffix array
//! - `threshold`: confusion thresholds (liberal and clustering policies)
//! - `ordering`: LCS reconciliation of source and target orderings

pub mod anchor;
pub mod anchor_analysis;
pub mod ordering;
pub mod threshold;
