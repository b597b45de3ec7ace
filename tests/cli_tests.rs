use assert_fs::prelude::{FileWriteStr, PathChild};
use fake::Fake;
use fake::faker::lorem::en::Words;
use predicates::prelude::*;

mod common;

use common::command::run_ndiff_command;

#[test]
fn identical_files_print_nothing() -> Result<(), Box<dyn std::error::Error>> {
    common::redirect_temp_dir();
    let dir = assert_fs::TempDir::new()?;
    let content = Words(5..10).fake::<Vec<String>>().join(" ");
    dir.child("a.txt").write_str(&content)?;
    dir.child("b.txt").write_str(&content)?;

    run_ndiff_command(dir.path(), &["a.txt", "b.txt"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    Ok(())
}

#[test]
fn reformatting_alone_is_not_a_change() -> Result<(), Box<dyn std::error::Error>> {
    common::redirect_temp_dir();
    let dir = assert_fs::TempDir::new()?;
    let words = Words(5..10).fake::<Vec<String>>();
    dir.child("a.txt").write_str(&words.join(" "))?;
    dir.child("b.txt").write_str(&words.join("\n\t"))?;

    run_ndiff_command(dir.path(), &["a.txt", "b.txt"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    Ok(())
}

#[test]
fn appended_word_is_reported_as_an_addition() -> Result<(), Box<dyn std::error::Error>> {
    common::redirect_temp_dir();
    let dir = assert_fs::TempDir::new()?;
    let content = Words(5..10).fake::<Vec<String>>().join(" ");
    dir.child("a.txt").write_str(&content)?;
    dir.child("b.txt").write_str(&format!("{content} zzappended"))?;

    run_ndiff_command(dir.path(), &["a.txt", "b.txt"])
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"^1,\d+a1,\d+\n> zzappended\n$")?);

    Ok(())
}

#[test]
fn missing_input_fails() -> Result<(), Box<dyn std::error::Error>> {
    common::redirect_temp_dir();
    let dir = assert_fs::TempDir::new()?;
    dir.child("a.txt").write_str("present")?;

    run_ndiff_command(dir.path(), &["a.txt", "missing.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot read"))
        .stderr(predicate::str::contains("missing.txt"));

    Ok(())
}

#[test]
fn missing_arguments_are_rejected() -> Result<(), Box<dyn std::error::Error>> {
    common::redirect_temp_dir();
    let dir = assert_fs::TempDir::new()?;

    run_ndiff_command(dir.path(), &["only-one.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("<TARGET>"));

    Ok(())
}

#[test]
fn color_can_be_forced() -> Result<(), Box<dyn std::error::Error>> {
    common::redirect_temp_dir();
    let dir = assert_fs::TempDir::new()?;
    dir.child("a.txt").write_str("let x = 1;")?;
    dir.child("b.txt").write_str("let x = 2;")?;

    run_ndiff_command(dir.path(), &["a.txt", "b.txt", "--color", "always"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\u{1b}["));

    run_ndiff_command(dir.path(), &["a.txt", "b.txt", "--color", "never"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\u{1b}[").not());

    Ok(())
}
