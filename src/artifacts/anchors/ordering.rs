use crate::artifacts::anchors::anchor::Anchor;

/// Orders anchors consistently in both streams.
///
/// When sorting by source and by target position disagree, some anchors were
/// transposed between the streams. Only the longest common subsequence of the
/// two orderings survives; the rest cannot be expressed as sequential splits.
pub fn reconcile_orderings(anchors: &[Anchor]) -> Vec<Anchor> {
    let mut by_source = anchors.to_vec();
    by_source.sort_by_key(|anchor| (anchor.source_start(), anchor.target_start()));

    let mut by_target = anchors.to_vec();
    by_target.sort_by_key(|anchor| (anchor.target_start(), anchor.source_start()));

    if by_source == by_target {
        return by_source;
    }

    let aligned = align_anchors(&by_source, &by_target);
    log::debug!(
        "dropped {} transposed anchors while reconciling orderings",
        anchors.len() - aligned.len()
    );
    aligned
}

/// Longest common subsequence of two permutations of the same anchors.
pub fn align_anchors(perm0: &[Anchor], perm1: &[Anchor]) -> Vec<Anchor> {
    let (n, m) = (perm0.len(), perm1.len());

    // table[i][j] = LCS length of perm0[i..] and perm1[j..]
    let mut table = vec![vec![0usize; m + 1]; n + 1];
    for i in (0..n).rev() {
        for j in (0..m).rev() {
            table[i][j] = if perm0[i] == perm1[j] {
                table[i + 1][j + 1] + 1
            } else {
                table[i + 1][j].max(table[i][j + 1])
            };
        }
    }

    let mut common = Vec::with_capacity(table[0][0]);
    let (mut i, mut j) = (0, 0);
    while i < n && j < m {
        if perm0[i] == perm1[j] {
            common.push(perm0[i]);
            i += 1;
            j += 1;
        } else if table[i][j + 1] < table[i + 1][j] {
            i += 1;
        } else {
            j += 1;
        }
    }

    common
}
