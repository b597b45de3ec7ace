use assert_cmd::Command;
use assert_fs::TempDir;
use rstest::fixture;
use std::path::Path;

#[fixture]
pub fn comparison_dir() -> TempDir {
    crate::common::redirect_temp_dir();
    TempDir::new().expect("Failed to create temp dir")
}

#[fixture]
pub fn source_program() -> String {
    r#"fn main() {
    let s = String::new();
    println!("Done");
}
"#
    .to_string()
}

#[fixture]
pub fn target_program() -> String {
    r#"fn main() {
    let s = String::new();
    eprintln!("Done");
}
"#
    .to_string()
}

pub fn run_ndiff_command(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("ndiff").expect("Failed to find ndiff binary");
    cmd.env_remove("RUST_LOG");
    cmd.env_remove("TMPDIR");
    cmd.current_dir(dir);
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}

/// Runs ndiff on `source.txt` and `target.txt` and returns its stdout.
pub fn ndiff_stdout(dir: &Path, extra_args: &[&str]) -> String {
    let mut args = vec!["source.txt", "target.txt"];
    args.extend_from_slice(extra_args);

    let output = run_ndiff_command(dir, &args).assert().success();
    String::from_utf8(output.get_output().stdout.clone()).expect("stdout is not UTF-8")
}
