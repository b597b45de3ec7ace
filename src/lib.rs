pub mod areas;
pub mod artifacts;
pub mod commands;
pub mod error;
