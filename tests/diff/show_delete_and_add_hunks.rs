use crate::common::command::{comparison_dir, ndiff_stdout};
use crate::common::file::write_pair;
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn show_add_hunk_for_appended_line(comparison_dir: TempDir) {
    write_pair(comparison_dir.path(), "alpha\n", "alpha\nbeta gamma\n");

    let actual_output = ndiff_stdout(comparison_dir.path(), &[]);

    pretty_assertions::assert_eq!(actual_output, "2,1a2,6\n> beta gamma\n");
}

#[rstest]
fn show_delete_hunk_for_removed_word(comparison_dir: TempDir) {
    write_pair(comparison_dir.path(), "one two three", "one three");

    let actual_output = ndiff_stdout(comparison_dir.path(), &[]);

    pretty_assertions::assert_eq!(actual_output, "1,5d1,5\n< two\n");
}

#[rstest]
fn show_multi_line_delete_with_its_layout(comparison_dir: TempDir) {
    write_pair(
        comparison_dir.path(),
        "start\nfirst line\n  second line\nend\n",
        "start\nend\n",
    );

    let actual_output = ndiff_stdout(comparison_dir.path(), &[]);

    pretty_assertions::assert_eq!(
        actual_output,
        "2,1d3,10\n< first line\n<   second line\n"
    );
}
