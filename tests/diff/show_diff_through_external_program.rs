use crate::common::command::{comparison_dir, ndiff_stdout, run_ndiff_command};
use crate::common::file::write_pair;
use assert_fs::TempDir;
use predicates::prelude::*;
use rstest::rstest;

#[rstest]
fn show_diff_through_external_program(comparison_dir: TempDir) {
    write_pair(
        comparison_dir.path(),
        "a b c d e f",
        "a x c d e y",
    );

    let external = ndiff_stdout(comparison_dir.path(), &["--oracle", "external"]);
    let internal = ndiff_stdout(comparison_dir.path(), &[]);

    pretty_assertions::assert_eq!(external, internal);
    pretty_assertions::assert_eq!(
        external,
        "1,3c1,3\n< b\n---\n> x\n1,11c1,11\n< f\n---\n> y\n"
    );
}

#[rstest]
fn fail_when_external_program_is_missing(comparison_dir: TempDir) {
    write_pair(comparison_dir.path(), "a b c", "a x c");

    run_ndiff_command(
        comparison_dir.path(),
        &[
            "source.txt",
            "target.txt",
            "--oracle",
            "external",
            "--diff-program",
            "ndiff-missing-diff-program",
        ],
    )
    .assert()
    .failure()
    .stderr(predicate::str::contains("failed to run alignment program"));
}
