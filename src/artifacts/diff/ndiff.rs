//! Anchored token comparison
//!
//! ## Pipeline
//!
//! 1. Whitespace tokens are set aside; the comparison runs on the compact
//!    streams and identical compact streams short-circuit to one Equal block.
//! 2. The common prefix, then the common suffix of what remains, are stripped
//!    by positional comparison.
//! 3. Anchors are discovered on the middle streams. Each anchor becomes an
//!    Equal block and the segments between consecutive anchors are handed to
//!    the alignment oracle. Without anchors the whole middle is one segment.
//! 4. Prefix and suffix come back as Equal blocks, the optimizer runs, and
//!    the compact script is re-expanded onto the lexed streams so that every
//!    block carries its interior whitespace.
//!
//! Every stage preserves the round-trip property: the Delete and Equal
//! tokens of a script spell the source stream, and the Insert and Equal
//! tokens spell the target stream.

use crate::artifacts::anchors::anchor::Anchor;
use crate::artifacts::anchors::anchor_analysis::AnchorAnalysis;
use crate::artifacts::anchors::threshold::ConfusionPolicy;
use crate::artifacts::diff::diff_block::{DiffBlock, EditScript, push_coalesced};
use crate::artifacts::diff::oracle::{AlignmentOracle, OracleKind, align_segment};
use crate::artifacts::diff::whitespace::WhitespaceRestorer;
use crate::artifacts::optimizer::lossless::LosslessOptimizer;
use crate::artifacts::tokens::token::Token;
use crate::error::NdiffResult;
use derive_new::new;

#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct DiffOptions {
    pub policy: ConfusionPolicy,
    pub oracle: OracleKind,
    pub diff_program: String,
    pub optimize: bool,
    pub bundle_lines: bool,
}

impl Default for DiffOptions {
    fn default() -> Self {
        Self {
            policy: ConfusionPolicy::default(),
            oracle: OracleKind::default(),
            diff_program: "diff".to_string(),
            optimize: true,
            bundle_lines: false,
        }
    }
}

/// Everything one comparison produces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffOutcome {
    /// Script over the whitespace-stripped streams.
    pub script: EditScript,
    /// The same script with interior whitespace restored.
    pub restored: EditScript,
    /// Anchors used, as indices into the whitespace-stripped streams.
    pub anchors: Vec<Anchor>,
    pub prefix: usize,
    pub suffix: usize,
}

impl DiffOutcome {
    pub fn has_changes(&self) -> bool {
        self.script.iter().any(DiffBlock::is_edit)
    }
}

#[derive(new)]
pub struct Ndiff {
    oracle: Box<dyn AlignmentOracle>,
    analysis: AnchorAnalysis,
    optimizer: Option<LosslessOptimizer>,
}

impl Ndiff {
    pub fn from_options(options: &DiffOptions) -> Self {
        Self::new(
            options.oracle.build(&options.diff_program),
            AnchorAnalysis::new(options.policy),
            options
                .optimize
                .then(|| LosslessOptimizer::new(options.bundle_lines)),
        )
    }

    /// Compares two lexed streams, whitespace tokens included.
    pub fn compare(&self, source_full: &[Token], target_full: &[Token]) -> NdiffResult<DiffOutcome> {
        let source = discard_whitespace(source_full);
        let target = discard_whitespace(target_full);

        let mut outcome = self.compare_compact(&source, &target)?;
        outcome.restored =
            WhitespaceRestorer::new(source_full, &source, target_full, &target).restore(&outcome.script);

        Ok(outcome)
    }

    /// The edit script of two whitespace-free streams.
    pub fn compute_script(&self, source: &[Token], target: &[Token]) -> NdiffResult<EditScript> {
        Ok(self.compare_compact(source, target)?.script)
    }

    fn compare_compact(&self, source: &[Token], target: &[Token]) -> NdiffResult<DiffOutcome> {
        if source == target {
            log::debug!("streams are identical ({} tokens)", source.len());
            let script = if source.is_empty() {
                EditScript::new()
            } else {
                vec![DiffBlock::equal(source)]
            };
            return Ok(DiffOutcome {
                script,
                restored: EditScript::new(),
                anchors: Vec::new(),
                prefix: 0,
                suffix: 0,
            });
        }

        let prefix = common_prefix(source, target);
        let suffix = common_suffix(&source[prefix..], &target[prefix..]);
        let middle_source = &source[prefix..source.len() - suffix];
        let middle_target = &target[prefix..target.len() - suffix];
        log::debug!(
            "stripped {prefix} prefix and {suffix} suffix tokens, {} x {} tokens remain",
            middle_source.len(),
            middle_target.len()
        );

        let anchors = self.analysis.find_anchors(middle_source, middle_target);

        let mut script = EditScript::new();
        push_coalesced(&mut script, DiffBlock::equal(&source[..prefix]));
        for block in self.compare_between_anchors(&anchors, middle_source, middle_target)? {
            push_coalesced(&mut script, block);
        }
        push_coalesced(&mut script, DiffBlock::equal(&source[source.len() - suffix..]));

        if let Some(optimizer) = &self.optimizer {
            script = optimizer.optimize(script);
        }

        Ok(DiffOutcome {
            script,
            restored: EditScript::new(),
            anchors: anchors.iter().map(|anchor| anchor.shifted(prefix)).collect(),
            prefix,
            suffix,
        })
    }

    /// Splices one Equal block per anchor between oracle-aligned segments.
    fn compare_between_anchors(
        &self,
        anchors: &[Anchor],
        source: &[Token],
        target: &[Token],
    ) -> NdiffResult<EditScript> {
        if anchors.is_empty() {
            log::debug!("no anchors, aligning the whole range");
        }

        let mut script = EditScript::new();
        let (mut i, mut j) = (0, 0);

        for anchor in anchors {
            let segment = align_segment(
                self.oracle.as_ref(),
                &source[i..anchor.source_start()],
                &target[j..anchor.target_start()],
            )?;
            script.extend(segment);
            script.push(DiffBlock::equal(&source[anchor.source_range()]));
            (i, j) = (anchor.source_end(), anchor.target_end());
        }
        script.extend(align_segment(self.oracle.as_ref(), &source[i..], &target[j..])?);

        Ok(script)
    }

    /// Anchors between two whitespace-free streams, relative to the streams
    /// themselves rather than to their common-prefix-stripped middles.
    pub fn anchors(&self, source: &[Token], target: &[Token]) -> NdiffResult<Vec<Anchor>> {
        Ok(self.compare_compact(source, target)?.anchors)
    }
}

pub fn discard_whitespace(tokens: &[Token]) -> Vec<Token> {
    tokens
        .iter()
        .filter(|token| !token.is_whitespace())
        .cloned()
        .collect()
}

pub fn common_prefix(a: &[Token], b: &[Token]) -> usize {
    a.iter().zip(b).take_while(|(x, y)| x == y).count()
}

pub fn common_suffix(a: &[Token], b: &[Token]) -> usize {
    a.iter()
        .rev()
        .zip(b.iter().rev())
        .take_while(|(x, y)| x == y)
        .count()
}
