use crate::artifacts::diff::diff_block::{DiffBlock, EditScript, Operation};
use crate::artifacts::tokens::token::Token;
use derive_new::new;

/// Maps a script over whitespace-stripped streams back onto the lexed
/// streams, so that every block carries the whitespace between its first and
/// last token.
///
/// Blocks are walked with one cursor per compact stream: Delete and Equal
/// runs are taken from the source, Insert runs from the target, whatever
/// tokens the blocks themselves happen to hold.
#[derive(Debug, Clone, Copy, new)]
pub struct WhitespaceRestorer<'s> {
    source_full: &'s [Token],
    source_compact: &'s [Token],
    target_full: &'s [Token],
    target_compact: &'s [Token],
}

impl WhitespaceRestorer<'_> {
    pub fn restore(&self, script: &[DiffBlock]) -> EditScript {
        let (mut i, mut j) = (0, 0);
        let mut restored = EditScript::with_capacity(script.len());

        for block in script {
            let len = block.len();
            let tokens = match block.operation() {
                Operation::Delete => {
                    i += len;
                    span(self.source_full, &self.source_compact[i - len..i])
                }
                Operation::Insert => {
                    j += len;
                    span(self.target_full, &self.target_compact[j - len..j])
                }
                Operation::Equal => {
                    i += len;
                    j += len;
                    span(self.source_full, &self.source_compact[i - len..i])
                }
            };
            restored.push(DiffBlock::new(block.operation(), tokens));
        }

        restored
    }
}

/// The lexed tokens from the first to the last token of `run`, inclusive.
fn span(full: &[Token], run: &[Token]) -> Vec<Token> {
    match (run.first(), run.last()) {
        (Some(first), Some(last)) => full[first.offset()..=last.offset()].to_vec(),
        _ => Vec::new(),
    }
}
