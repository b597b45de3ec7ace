//! Command implementations, organized into two categories:
//!
//! - `plumbing`: Low-level views of the comparison (discovered anchors)
//! - `porcelain`: User-facing output (ed-style diff)

pub mod plumbing;
pub mod porcelain;
