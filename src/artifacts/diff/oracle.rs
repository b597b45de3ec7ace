use crate::artifacts::diff::diff_block::{
    DiffBlock, EditScript, push_coalesced, source_side, target_side,
};
use crate::artifacts::diff::external_oracle::ExternalDiffOracle;
use crate::artifacts::diff::myers::MyersOracle;
use crate::artifacts::tokens::token::Token;
use crate::error::{NdiffError, NdiffResult};
use clap::ValueEnum;

/// A general-purpose aligner used between consecutive anchors.
///
/// Implementations must return a script whose source side is exactly
/// `source` and whose target side is exactly `target`.
pub trait AlignmentOracle {
    fn align(&self, source: &[Token], target: &[Token]) -> NdiffResult<EditScript>;

    /// Short name used in log lines.
    fn name(&self) -> &str;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OracleKind {
    /// In-process Myers diff
    #[default]
    Myers,
    /// An external program speaking the classic `diff` normal format
    External,
}

impl OracleKind {
    pub fn build(self, diff_program: &str) -> Box<dyn AlignmentOracle> {
        match self {
            OracleKind::Myers => Box::new(MyersOracle),
            OracleKind::External => Box::new(ExternalDiffOracle::new(diff_program.to_string())),
        }
    }
}

/// Drops empty blocks and fuses neighbours, then checks that the script
/// rebuilds both sides of the segment it was asked to align.
pub fn validate_segment(
    script: EditScript,
    source: &[Token],
    target: &[Token],
) -> NdiffResult<EditScript> {
    let mut cleaned = EditScript::with_capacity(script.len());
    for block in script {
        push_coalesced(&mut cleaned, block);
    }

    if source_side(&cleaned) != source {
        return Err(NdiffError::oracle_malformed(format!(
            "source side does not match the {} token segment",
            source.len()
        )));
    }
    if target_side(&cleaned) != target {
        return Err(NdiffError::oracle_malformed(format!(
            "target side does not match the {} token segment",
            target.len()
        )));
    }

    Ok(cleaned)
}

/// Aligns one segment, emitting whole-segment edits without consulting the
/// oracle when either side is empty.
pub fn align_segment(
    oracle: &dyn AlignmentOracle,
    source: &[Token],
    target: &[Token],
) -> NdiffResult<EditScript> {
    match (source.is_empty(), target.is_empty()) {
        (true, true) => Ok(EditScript::new()),
        (false, true) => Ok(vec![DiffBlock::delete(source)]),
        (true, false) => Ok(vec![DiffBlock::insert(target)]),
        (false, false) => {
            log::trace!(
                "{} aligning {} x {} tokens",
                oracle.name(),
                source.len(),
                target.len()
            );
            validate_segment(oracle.align(source, target)?, source, target)
        }
    }
}
