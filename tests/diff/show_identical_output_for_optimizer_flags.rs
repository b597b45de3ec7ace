use crate::common::command::{comparison_dir, ndiff_stdout, source_program, target_program};
use crate::common::file::write_pair;
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
#[case(&["--no-optimize"])]
#[case(&["--bundle-lines"])]
#[case(&["--threshold", "clustering"])]
fn show_identical_output_for_optimizer_flags(
    comparison_dir: TempDir,
    source_program: String,
    target_program: String,
    #[case] flags: &[&str],
) {
    write_pair(comparison_dir.path(), &source_program, &target_program);

    let default_output = ndiff_stdout(comparison_dir.path(), &[]);
    let flagged_output = ndiff_stdout(comparison_dir.path(), flags);

    pretty_assertions::assert_eq!(flagged_output, default_output);
}
