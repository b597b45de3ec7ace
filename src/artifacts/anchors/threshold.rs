//! Confusion thresholds
//!
//! Short common runs show up between any two files of the same language by
//! chance. Self-anchors measure how long such chance repeats get inside each
//! file; cross-anchors shorter than the threshold derived from them are
//! discarded.

use crate::artifacts::anchors::anchor::Anchor;
use clap::ValueEnum;

/// Upper bound on Lloyd iterations; integer means can settle into a 2-cycle.
const MAX_LLOYD_ITERATIONS: usize = 64;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ConfusionPolicy {
    /// Longest self-anchor of either stream
    #[default]
    Liberal,
    /// 1-D Lloyd (k-means, k = 2) cut over every anchor length
    Clustering,
}

impl ConfusionPolicy {
    pub fn threshold(
        &self,
        source_self: &[Anchor],
        target_self: &[Anchor],
        cross: &[Anchor],
    ) -> usize {
        match self {
            ConfusionPolicy::Liberal => liberal_threshold(source_self, target_self),
            ConfusionPolicy::Clustering => {
                let lengths: Vec<usize> = source_self
                    .iter()
                    .chain(target_self)
                    .chain(cross)
                    .map(Anchor::len)
                    .collect();
                let start = cross.iter().map(Anchor::len).max().unwrap_or(0);
                clustering_threshold(&lengths, start)
            }
        }
    }
}

pub fn liberal_threshold(source_self: &[Anchor], target_self: &[Anchor]) -> usize {
    let longest = |anchors: &[Anchor]| anchors.iter().map(Anchor::len).max().unwrap_or(0);
    longest(source_self).max(longest(target_self))
}

/// Iterates `t = (mean(len <= t) + mean(len > t)) / 2` from `start` until it
/// stops moving.
pub fn clustering_threshold(lengths: &[usize], start: usize) -> usize {
    let mut threshold = start;

    for _ in 0..MAX_LLOYD_ITERATIONS {
        let (mut below_sum, mut below_count) = (0, 0);
        let (mut above_sum, mut above_count) = (0, 0);
        for &len in lengths {
            if len > threshold {
                above_sum += len;
                above_count += 1;
            } else {
                below_sum += len;
                below_count += 1;
            }
        }

        let below_mean = if below_count > 0 { below_sum / below_count } else { 0 };
        let above_mean = if above_count > 0 { above_sum / above_count } else { 0 };
        let next = (below_mean + above_mean) / 2;

        if next == threshold {
            return threshold;
        }
        threshold = next;
    }

    log::warn!("clustering threshold did not settle, using {threshold}");
    threshold
}
