use crate::common::command::{comparison_dir, ndiff_stdout};
use crate::common::file::write_pair;
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
#[case::shared_run("a b c d e", "a x c d y", "2,2,2\n1 anchor\n")]
#[case::disjoint("a b c", "x y z", "0 anchors\n")]
#[case::identical("a b c", "a b c", "0 anchors\n")]
#[case::whitespace_is_ignored("p q\n r s t u v", "p z r   s t u w", "2,2,4\n1 anchor\n")]
fn show_anchors_between_files(
    comparison_dir: TempDir,
    #[case] source: &str,
    #[case] target: &str,
    #[case] expected_output: &str,
) {
    write_pair(comparison_dir.path(), source, target);

    let actual_output = ndiff_stdout(comparison_dir.path(), &["--show-anchors"]);

    pretty_assertions::assert_eq!(actual_output, expected_output);
}
