use crate::artifacts::diff::diff_block::{DiffBlock, EditScript, Operation, push_coalesced};
use crate::artifacts::diff::oracle::AlignmentOracle;
use crate::artifacts::tokens::token::{Token, codes};
use crate::error::NdiffResult;
use derive_new::new;
use similar::{Algorithm, DiffOp, capture_diff_slices};
use std::hash::Hash;
use std::iter::repeat_n;

/// Myers' shortest edit script over two slices.
///
/// The search runs in linear space (divide and conquer on the middle snake),
/// so two unrelated inputs of many thousands of elements stay cheap. Every
/// run of edits between two equalities is reported as its deletions followed
/// by its insertions.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct MyersDiff<'d, T> {
    a: &'d [T],
    b: &'d [T],
}

impl<T: Eq + Hash + Ord> MyersDiff<'_, T> {
    /// One operation per element of either side, in stream order.
    pub fn operations(&self) -> Vec<Operation> {
        let mut operations = Vec::with_capacity(self.a.len() + self.b.len());
        let (mut deleted, mut inserted) = (0, 0);

        for op in capture_diff_slices(Algorithm::Myers, self.a, self.b) {
            match op {
                DiffOp::Equal { len, .. } => {
                    flush_edits(&mut operations, &mut deleted, &mut inserted);
                    operations.extend(repeat_n(Operation::Equal, len));
                }
                DiffOp::Delete { old_len, .. } => deleted += old_len,
                DiffOp::Insert { new_len, .. } => inserted += new_len,
                DiffOp::Replace {
                    old_len, new_len, ..
                } => {
                    deleted += old_len;
                    inserted += new_len;
                }
            }
        }
        flush_edits(&mut operations, &mut deleted, &mut inserted);

        operations
    }
}

fn flush_edits(operations: &mut Vec<Operation>, deleted: &mut usize, inserted: &mut usize) {
    operations.extend(repeat_n(Operation::Delete, *deleted));
    operations.extend(repeat_n(Operation::Insert, *inserted));
    *deleted = 0;
    *inserted = 0;
}

/// The in-process alignment oracle: Myers' diff with per-token steps grouped
/// into maximal same-operation blocks.
#[derive(Debug, Clone, Copy, Default)]
pub struct MyersOracle;

impl AlignmentOracle for MyersOracle {
    fn align(&self, source: &[Token], target: &[Token]) -> NdiffResult<EditScript> {
        let mut script = EditScript::new();
        let (mut i, mut j) = (0, 0);

        let (source_codes, target_codes) = (codes(source), codes(target));

        for operation in MyersDiff::new(&source_codes, &target_codes).operations() {
            let token = match operation {
                Operation::Delete => {
                    i += 1;
                    source[i - 1].clone()
                }
                Operation::Insert => {
                    j += 1;
                    target[j - 1].clone()
                }
                Operation::Equal => {
                    i += 1;
                    j += 1;
                    source[i - 1].clone()
                }
            };
            push_coalesced(&mut script, DiffBlock::new(operation, vec![token]));
        }

        Ok(script)
    }

    fn name(&self) -> &str {
        "myers"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::artifacts::diff::diff_block::{source_side, target_side};
    use crate::artifacts::diff::diff_block::Operation::{Delete, Equal, Insert};
    use crate::artifacts::tokens::lexer::Lexer;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn string_inputs() -> (Vec<char>, Vec<char>) {
        ("abcabba".chars().collect(), "cbabac".chars().collect())
    }

    fn apply(operations: &[Operation], a: &[char], b: &[char]) -> (String, String) {
        let (mut i, mut j) = (0, 0);
        let (mut kept, mut built) = (String::new(), String::new());
        for operation in operations {
            match operation {
                Delete => {
                    kept.push(a[i]);
                    i += 1;
                }
                Insert => {
                    built.push(b[j]);
                    j += 1;
                }
                Equal => {
                    assert_eq!(a[i], b[j]);
                    kept.push(a[i]);
                    built.push(b[j]);
                    i += 1;
                    j += 1;
                }
            }
        }
        (kept, built)
    }

    #[rstest]
    fn shortest_edit_of_strings(string_inputs: (Vec<char>, Vec<char>)) {
        let (a, b) = string_inputs;

        let operations = MyersDiff::new(&a, &b).operations();

        let edits = operations.iter().filter(|op| **op != Equal).count();
        assert_eq!(edits, 5);
        assert_eq!(
            apply(&operations, &a, &b),
            ("abcabba".to_string(), "cbabac".to_string())
        );
    }

    #[test]
    fn deletions_precede_insertions_between_equalities() {
        let (a, b): (Vec<char>, Vec<char>) = ("xaby".chars().collect(), "xcdy".chars().collect());

        assert_eq!(
            MyersDiff::new(&a, &b).operations(),
            vec![Equal, Delete, Delete, Insert, Insert, Equal]
        );
    }

    #[test]
    fn unrelated_long_streams_align_without_quadratic_memory() {
        let a: Vec<u32> = (0..4_000).collect();
        let b: Vec<u32> = (4_000..8_000).collect();

        let operations = MyersDiff::new(&a, &b).operations();

        let mut expected = vec![Delete; 4_000];
        expected.extend(vec![Insert; 4_000]);
        assert_eq!(operations, expected);
    }

    #[rstest]
    #[case("", "abc", vec![Insert, Insert, Insert])]
    #[case("abc", "", vec![Delete, Delete, Delete])]
    #[case("abc", "abc", vec![Equal, Equal, Equal])]
    #[case("", "", vec![])]
    fn degenerate_inputs(#[case] a: &str, #[case] b: &str, #[case] expected: Vec<Operation>) {
        let (a, b): (Vec<char>, Vec<char>) = (a.chars().collect(), b.chars().collect());

        assert_eq!(MyersDiff::new(&a, &b).operations(), expected);
    }

    #[test]
    fn oracle_groups_steps_into_blocks() {
        let mut lexer = Lexer::new().unwrap();
        let source = lexer.tokenize("b");
        let target = lexer.tokenize("x");

        let script = MyersOracle.align(&source, &target).unwrap();

        assert_eq!(
            script,
            vec![DiffBlock::delete(source.clone()), DiffBlock::insert(target.clone())]
        );
    }

    #[test]
    fn oracle_aligns_rewritten_inputs_as_one_change() {
        let mut lexer = Lexer::new().unwrap();
        let words = |prefix: &str| {
            (0..3_000)
                .map(|i| format!("{prefix}{i}"))
                .collect::<Vec<_>>()
                .join(" ")
        };
        let compact = |tokens: Vec<Token>| -> Vec<Token> {
            tokens.into_iter().filter(|token| !token.is_whitespace()).collect()
        };
        let source = compact(lexer.tokenize(&words("old_")));
        let target = compact(lexer.tokenize(&words("new_")));

        let script = MyersOracle.align(&source, &target).unwrap();

        assert_eq!(script, vec![DiffBlock::delete(source), DiffBlock::insert(target)]);
    }

    proptest! {
        #[test]
        fn oracle_script_round_trips(
            a in prop::collection::vec("[abc]", 0..25),
            b in prop::collection::vec("[abc]", 0..25),
        ) {
            let mut lexer = Lexer::new().unwrap();
            let source = lexer.tokenize(&a.concat());
            let target = lexer.tokenize(&b.concat());

            let script = MyersOracle.align(&source, &target).unwrap();

            prop_assert_eq!(source_side(&script), source);
            prop_assert_eq!(target_side(&script), target);
            prop_assert!(script.windows(2).all(|w| w[0].operation() != w[1].operation()));
        }
    }
}
