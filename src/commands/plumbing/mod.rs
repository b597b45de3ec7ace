//! Plumbing commands (inspection of pipeline internals)
//!
//! - `anchors`: Print the anchors discovered between the two inputs

pub mod anchors;
