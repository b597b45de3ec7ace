use crate::artifacts::diff::diff_block::{
    DiffBlock, EditScript, push_coalesced, source_side, target_side,
};
use crate::artifacts::tokens::token::Token;

/// Share of edited tokens, in quarters, above which a line is rewritten whole.
const DENSE_QUARTERS: usize = 3;

/// Rewrites lines that are mostly edits as a single Delete of the line's
/// source side followed by a single Insert of its target side.
///
/// Blocks are grouped by source line. Delete and Equal blocks sit on the line
/// of their first token; an Insert sits on the last source line consumed
/// before it, whatever lines its own tokens come from. Only groups mixing
/// Equal and edit blocks are candidates; a group is dense when at least 75%
/// of its tokens sit in edit blocks.
pub fn bundle_dense_lines(script: EditScript) -> EditScript {
    let lines = source_lines(&script);
    let mut bundled = EditScript::with_capacity(script.len());
    let mut bundles = 0;

    let mut start = 0;
    while start < script.len() {
        let end = (start..script.len())
            .find(|&i| lines[i] != lines[start])
            .unwrap_or(script.len());
        let group = &script[start..end];
        start = end;

        if is_dense(group) {
            push_coalesced(&mut bundled, DiffBlock::delete(source_side(group)));
            push_coalesced(&mut bundled, DiffBlock::insert(target_side(group)));
            bundles += 1;
        } else {
            for block in group {
                push_coalesced(&mut bundled, block.clone());
            }
        }
    }

    if bundles > 0 {
        log::debug!("bundled {bundles} edit-dense lines");
    }
    bundled
}

fn source_lines(script: &[DiffBlock]) -> Vec<Option<usize>> {
    let mut cursor = None;
    script
        .iter()
        .map(|block| {
            if block.operation().consumes_source() {
                cursor = block.first().map(Token::line).or(cursor);
            }
            cursor
        })
        .collect()
}

fn is_dense(group: &[DiffBlock]) -> bool {
    let (edits, total) = group.iter().fold((0, 0), |(edits, total), block| {
        let edited = if block.is_edit() { block.len() } else { 0 };
        (edits + edited, total + block.len())
    });
    let mixed = edits > 0 && edits < total;

    mixed && edits * 4 >= total * DENSE_QUARTERS
}
