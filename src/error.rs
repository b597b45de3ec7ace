//! Error types for ndiff
//!
//! Every failure in the comparison pipeline is propagated to the caller. Nothing
//! here is retried or masked, since a silently repaired script could lose tokens.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum NdiffError {
    /// An input path could not be opened or read as text
    #[error("cannot read {}: {source}", path.display())]
    InputUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The out-of-process alignment oracle could not be started
    #[error("failed to run alignment program `{program}`: {source}")]
    OracleSpawn {
        program: String,
        #[source]
        source: io::Error,
    },

    /// The alignment oracle produced output that does not cover its segment
    #[error("alignment oracle returned a malformed script: {message}")]
    OracleMalformed { message: String },

    #[error("invalid token pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

pub type NdiffResult<T> = Result<T, NdiffError>;

impl NdiffError {
    pub fn input_unavailable(path: impl Into<PathBuf>, source: io::Error) -> Self {
        NdiffError::InputUnavailable {
            path: path.into(),
            source,
        }
    }

    pub fn oracle_spawn(program: impl Into<String>, source: io::Error) -> Self {
        NdiffError::OracleSpawn {
            program: program.into(),
            source,
        }
    }

    pub fn oracle_malformed(message: impl Into<String>) -> Self {
        NdiffError::OracleMalformed {
            message: message.into(),
        }
    }
}
