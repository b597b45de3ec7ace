use crate::common::command::{comparison_dir, ndiff_stdout, source_program, target_program};
use crate::common::file::write_pair;
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn show_change_hunk_for_substituted_token(
    comparison_dir: TempDir,
    source_program: String,
    target_program: String,
) -> Result<(), Box<dyn std::error::Error>> {
    write_pair(comparison_dir.path(), &source_program, &target_program);

    let expected_output = "3,5c3,5\n< println\n---\n> eprintln\n".to_string();
    let actual_output = ndiff_stdout(comparison_dir.path(), &[]);

    pretty_assertions::assert_eq!(actual_output, expected_output);

    Ok(())
}

#[rstest]
#[case("let x = 1;\n", "let x = 2;\n", "1,9c1,9\n< 1\n---\n> 2\n")]
#[case("a b c d e", "a x c d y", "1,3c1,3\n< b\n---\n> x\n1,9c1,9\n< e\n---\n> y\n")]
fn show_change_hunks_for_small_inputs(
    comparison_dir: TempDir,
    #[case] source: &str,
    #[case] target: &str,
    #[case] expected_output: &str,
) {
    write_pair(comparison_dir.path(), source, target);

    let actual_output = ndiff_stdout(comparison_dir.path(), &[]);

    pretty_assertions::assert_eq!(actual_output, expected_output);
}
