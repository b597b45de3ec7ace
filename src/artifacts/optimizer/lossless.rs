//! Readability passes over an assembled edit script
//!
//! Both passes rewrite blocks without changing what the script covers: the
//! Delete and Equal tokens still spell the source stream, and the Insert and
//! Equal tokens still spell the target stream.
//!
//! ## Splitting coincidental equalities
//!
//! A short Equal block sandwiched between two larger edit groups is usually a
//! chance match (a shared `;` or `)`) rather than a real synchronization
//! point. An Equal block is coincidental when its length is at most
//! `max(deletes, inserts)` of the edit group right before it AND at most
//! `max(deletes, inserts)` of the edit group right after it. It is rewritten
//! as a Delete and an Insert of the same tokens, which joins its two
//! neighbouring groups into one larger group. That larger group may in turn
//! make the Equal block before it coincidental, so the check is repeated
//! backwards until it no longer fires.
//!
//! The pass is a fold over the input with a stack of segments; only the top
//! three segments (edits, equal, edits) are ever inspected.
//!
//! ## Merging edits between equalities
//!
//! Any run of edit blocks between two Equal blocks becomes one Delete block
//! (every deleted token, in order) followed by one Insert block (every
//! inserted token, in order). Adjacent Equal blocks are fused.
//!
//! ## Line bundling
//!
//! Optional, see `line_bundling`.

use crate::artifacts::diff::diff_block::{DiffBlock, EditScript, Operation, push_coalesced};
use crate::artifacts::optimizer::line_bundling::bundle_dense_lines;
use crate::artifacts::tokens::token::Token;
use derive_new::new;

#[derive(Debug, Clone, Copy, Default, new)]
pub struct LosslessOptimizer {
    bundle_lines: bool,
}

impl LosslessOptimizer {
    pub fn optimize(&self, script: EditScript) -> EditScript {
        let before = script.len();
        let mut script = merge_coincidental_equalities(split_coincidental_equalities(script));

        if self.bundle_lines {
            script = merge_coincidental_equalities(bundle_dense_lines(script));
        }

        log::debug!("optimizer rewrote {before} blocks into {}", script.len());
        script
    }
}

#[derive(Debug)]
enum Segment {
    Equal(DiffBlock),
    Edits {
        blocks: Vec<DiffBlock>,
        deletes: usize,
        inserts: usize,
    },
}

impl Segment {
    fn edits(block: DiffBlock) -> Self {
        let mut segment = Segment::Edits {
            blocks: Vec::new(),
            deletes: 0,
            inserts: 0,
        };
        segment.absorb(block);
        segment
    }

    /// Appends an edit block to an edit group.
    fn absorb(&mut self, block: DiffBlock) {
        if let Segment::Edits {
            blocks,
            deletes,
            inserts,
        } = self
        {
            match block.operation() {
                Operation::Delete => *deletes += block.len(),
                Operation::Insert => *inserts += block.len(),
                Operation::Equal => unreachable!("equal blocks are never absorbed into edits"),
            }
            blocks.push(block);
        }
    }

    fn weight(&self) -> Option<usize> {
        match self {
            Segment::Edits {
                deletes, inserts, ..
            } => Some(*deletes.max(inserts)),
            Segment::Equal(_) => None,
        }
    }
}

/// Rewrites every coincidental Equal block as a Delete and an Insert of the
/// same tokens.
pub fn split_coincidental_equalities(script: EditScript) -> EditScript {
    let mut stack: Vec<Segment> = Vec::with_capacity(script.len());
    let mut splits = 0;

    for block in script.into_iter().filter(|b| !b.is_empty()) {
        if block.is_edit() {
            match stack.last_mut() {
                Some(top @ Segment::Edits { .. }) => top.absorb(block),
                _ => stack.push(Segment::edits(block)),
            }
        } else {
            splits += collapse_coincidental(&mut stack);
            stack.push(Segment::Equal(block));
        }
    }
    splits += collapse_coincidental(&mut stack);

    if splits > 0 {
        log::debug!("split {splits} coincidental equalities");
    }

    let mut optimized = EditScript::new();
    for segment in stack {
        match segment {
            Segment::Equal(block) => push_coalesced(&mut optimized, block),
            Segment::Edits { blocks, .. } => {
                for block in blocks {
                    push_coalesced(&mut optimized, block);
                }
            }
        }
    }
    optimized
}

/// While the stack ends in `edits, equal, edits` with a coincidental equal,
/// folds the three into one edit group. Returns the number of folds.
fn collapse_coincidental(stack: &mut Vec<Segment>) -> usize {
    let mut folds = 0;

    while let [.., left, Segment::Equal(equal), right] = stack.as_slice() {
        let (Some(before), Some(after)) = (left.weight(), right.weight()) else {
            break;
        };
        if equal.len() > before || equal.len() > after {
            break;
        }

        let (Some(right), Some(Segment::Equal(equal)), Some(mut left)) =
            (stack.pop(), stack.pop(), stack.pop())
        else {
            unreachable!("stack holds at least three segments");
        };

        left.absorb(DiffBlock::delete(equal.tokens()));
        left.absorb(DiffBlock::insert(equal.into_tokens()));
        if let Segment::Edits { blocks, .. } = right {
            for block in blocks {
                left.absorb(block);
            }
        }

        stack.push(left);
        folds += 1;
    }

    folds
}

/// Collapses every run of edit blocks between two Equal blocks into one
/// Delete followed by one Insert, and fuses adjacent Equal blocks.
pub fn merge_coincidental_equalities(script: EditScript) -> EditScript {
    let mut merged = EditScript::with_capacity(script.len());
    let mut deleted = Vec::new();
    let mut inserted = Vec::new();

    for block in script {
        match block.operation() {
            Operation::Delete => deleted.extend(block.into_tokens()),
            Operation::Insert => inserted.extend(block.into_tokens()),
            Operation::Equal => {
                flush_edits(&mut merged, &mut deleted, &mut inserted);
                push_coalesced(&mut merged, block);
            }
        }
    }
    flush_edits(&mut merged, &mut deleted, &mut inserted);

    merged
}

fn flush_edits(
    merged: &mut EditScript,
    deleted: &mut Vec<Token>,
    inserted: &mut Vec<Token>,
) {
    push_coalesced(merged, DiffBlock::delete(std::mem::take(deleted)));
    push_coalesced(merged, DiffBlock::insert(std::mem::take(inserted)));
}
