use derive_new::new;
use std::fmt::Display;
use std::ops::Range;

/// A run of `len` tokens found at `source` in one stream and at `target` in
/// the other (or at two places of the same stream, for self-anchors).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, new)]
pub struct Anchor {
    source: usize,
    target: usize,
    len: usize,
}

impl Anchor {
    pub fn source_start(&self) -> usize {
        self.source
    }

    pub fn target_start(&self) -> usize {
        self.target
    }

    pub fn source_end(&self) -> usize {
        self.source + self.len
    }

    pub fn target_end(&self) -> usize {
        self.target + self.len
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn source_range(&self) -> Range<usize> {
        self.source..self.source_end()
    }

    pub fn target_range(&self) -> Range<usize> {
        self.target..self.target_end()
    }

    /// Moves both occurrences forward by `delta` positions.
    pub fn shifted(&self, delta: usize) -> Self {
        Self::new(self.source + delta, self.target + delta, self.len)
    }

    /// True when the two anchors share a position in either coordinate space.
    pub fn overlaps(&self, other: &Anchor) -> bool {
        ranges_overlap(&self.source_range(), &other.source_range())
            || ranges_overlap(&self.target_range(), &other.target_range())
    }
}

impl Display for Anchor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{},{}", self.source, self.target, self.len)
    }
}

fn ranges_overlap(a: &Range<usize>, b: &Range<usize>) -> bool {
    a.start < b.end && b.start < a.end
}
