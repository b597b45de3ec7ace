//! Anchor discovery
//!
//! Walks the LCP values of a `SuffixArray` from the longest down. Each value
//! names two suffixes that share a prefix of that length; depending on which
//! stream each suffix starts in, the shared run becomes a self-anchor of the
//! source, a self-anchor of the target, or a cross-anchor candidate. A
//! candidate is only accepted when it is maximal, i.e. it does not overlap an
//! anchor already accepted into the same list.

use crate::artifacts::anchors::anchor::Anchor;
use crate::artifacts::anchors::ordering::reconcile_orderings;
use crate::artifacts::anchors::threshold::ConfusionPolicy;
use crate::artifacts::suffix::suffix_array::SuffixArray;
use crate::artifacts::tokens::token::{Token, codes};
use derive_new::new;
use std::collections::HashMap;

/// Per-candidate tracing, compiled in only with the `debug_anchors` feature.
macro_rules! trace_candidate {
    ($($arg:tt)*) => {
        #[cfg(feature = "debug_anchors")]
        {
            log::trace!($($arg)*);
        }
    };
}

/// Maximal anchors of every class, before any filtering.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnchorClasses {
    pub source_self: Vec<Anchor>,
    pub target_self: Vec<Anchor>,
    pub cross: Vec<Anchor>,
}

#[derive(Debug, Clone, Copy, Default, new)]
pub struct AnchorAnalysis {
    policy: ConfusionPolicy,
}

impl AnchorAnalysis {
    /// Cross-anchors between the two streams, filtered and ordered so that
    /// they neither overlap nor cross in either stream.
    pub fn find_anchors(&self, source: &[Token], target: &[Token]) -> Vec<Anchor> {
        self.find_anchors_in_codes(&codes(source), &codes(target))
    }

    pub fn find_anchors_in_codes(&self, source: &[u32], target: &[u32]) -> Vec<Anchor> {
        let suffix_array = SuffixArray::new(source, target);
        let classes = discover_anchors(&suffix_array);

        log::debug!(
            "found {} cross-anchors, {} source self-anchors, {} target self-anchors",
            classes.cross.len(),
            classes.source_self.len(),
            classes.target_self.len()
        );

        let kept = self.discard_confusing_anchors(&classes);
        reconcile_orderings(&kept)
    }

    /// Drops every cross-anchor shorter than the policy's threshold.
    pub fn discard_confusing_anchors(&self, classes: &AnchorClasses) -> Vec<Anchor> {
        let threshold =
            self.policy
                .threshold(&classes.source_self, &classes.target_self, &classes.cross);

        let kept: Vec<Anchor> = classes
            .cross
            .iter()
            .copied()
            .filter(|anchor| anchor.len() >= threshold)
            .collect();

        log::debug!(
            "{:?} threshold {threshold} keeps {} of {} cross-anchors",
            self.policy,
            kept.len(),
            classes.cross.len()
        );
        kept
    }
}

/// Classifies every significant LCP value, longest first.
pub fn discover_anchors(suffix_array: &SuffixArray) -> AnchorClasses {
    let mut classes = AnchorClasses::default();
    let source_len = suffix_array.source_len();
    let target_offset = suffix_array.target_offset();

    for (rank, len) in LongestFirst::new(suffix_array) {
        let x = suffix_array.idx_at(rank);
        let y = suffix_array.idx_at(rank - 1);
        let in_source = |pos: usize| pos < source_len;

        let (candidate, accepted) = match (in_source(x), in_source(y)) {
            (true, true) => (
                Anchor::new(x.min(y), x.max(y), len),
                &mut classes.source_self,
            ),
            (false, false) => {
                let (x, y) = (x - target_offset, y - target_offset);
                (
                    Anchor::new(x.min(y), x.max(y), len),
                    &mut classes.target_self,
                )
            }
            (true, false) => (Anchor::new(x, y - target_offset, len), &mut classes.cross),
            (false, true) => (Anchor::new(y, x - target_offset, len), &mut classes.cross),
        };

        if is_maximal(&candidate, accepted) {
            trace_candidate!("accepted {candidate} from rank {rank}");
            accepted.push(candidate);
        } else {
            trace_candidate!("rejected {candidate} from rank {rank}");
        }
    }

    classes
}

/// True when no accepted anchor shares a position with the candidate.
pub fn is_maximal(candidate: &Anchor, accepted: &[Anchor]) -> bool {
    !accepted.iter().any(|anchor| anchor.overlaps(candidate))
}

/// Yields `(rank, lcp)` for every significant LCP slot, consuming the values of
/// `SuffixArray::ordered_lcps` from the largest down. Equal values are taken
/// in slot order; a consumed slot is never matched again.
struct LongestFirst<'s> {
    lcps: Vec<Option<usize>>,
    ordered: std::iter::Rev<std::slice::Iter<'s, usize>>,
    cursors: HashMap<usize, usize>,
}

impl<'s> LongestFirst<'s> {
    fn new(suffix_array: &'s SuffixArray) -> Self {
        Self {
            lcps: suffix_array.lcps().iter().copied().map(Some).collect(),
            ordered: suffix_array.ordered_lcps().iter().rev(),
            cursors: HashMap::new(),
        }
    }
}

impl Iterator for LongestFirst<'_> {
    type Item = (usize, usize);

    fn next(&mut self) -> Option<Self::Item> {
        let &len = self.ordered.next()?;
        let cursor = self.cursors.entry(len).or_insert(0);

        let Some(rank) = (*cursor..self.lcps.len()).find(|&r| self.lcps[r] == Some(len)) else {
            unreachable!("ordered LCP value {len} has no unconsumed slot");
        };

        *cursor = rank + 1;
        self.lcps[rank] = None;
        Some((rank, len))
    }
}
