use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;

fn n00p() -> Command {
    Command::cargo_bin("n00p").unwrap()
}

fn init_repo(dir: &Path) {
    let run = |args: &[&str]| {
        let output = std::process::Command::new("git")
            .args(args)
            .current_dir(dir)
            .env("GIT_AUTHOR_NAME", "Test")
            .env("GIT_AUTHOR_EMAIL", "test@test.com")
            .env("GIT_COMMITTER_NAME", "Test")
            .env("GIT_COMMITTER_EMAIL", "test@test.com")
            .output()
            .expect("failed to run git");
        assert!(
            output.status.success(),
            "git {:?} failed: {}",
            args,
            String::from_utf8_lossy(&output.stderr)
        );
    };

    run(&["init"]);
    run(&["commit", "--allow-empty", "-m", "initial"]);
}

#[test]
fn help_exits_zero() {
    n00p().arg("--help").assert().success();
}

#[test]
fn no_args_shows_usage_and_fails() {
    n00p()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn unknown_subcommand_fails_without_output() {
    n00p()
        .arg("foo")
        .assert()
        .failure()
        .stdout(predicate::str::is_empty());
}

#[test]
fn packages_lists_sorted_directories_only() {
    let tmp = tempfile::tempdir().unwrap();
    let pkgs = tmp.path().join("packages");
    std::fs::create_dir_all(pkgs.join("b")).unwrap();
    std::fs::create_dir_all(pkgs.join("a")).unwrap();
    std::fs::write(pkgs.join("notadir"), "stray file").unwrap();

    n00p()
        .args(["--root", tmp.path().to_str().unwrap(), "packages"])
        .assert()
        .success()
        .stdout("- a\n- b\n");
}

#[test]
fn packages_missing_dir_reports_and_succeeds() {
    let tmp = tempfile::tempdir().unwrap();

    n00p()
        .args(["--root", tmp.path().to_str().unwrap(), "packages"])
        .assert()
        .success()
        .stdout("No packages directory found.\n");
}

#[test]
fn packages_empty_dir_prints_nothing() {
    let tmp = tempfile::tempdir().unwrap();
    std::fs::create_dir_all(tmp.path().join("packages")).unwrap();

    n00p()
        .args(["--root", tmp.path().to_str().unwrap(), "packages"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn packages_json_output() {
    let tmp = tempfile::tempdir().unwrap();
    std::fs::create_dir_all(tmp.path().join("packages").join("web")).unwrap();

    n00p()
        .args(["--root", tmp.path().to_str().unwrap(), "--json", "packages"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"packages\""))
        .stdout(predicate::str::contains("\"web\""));
}

#[test]
fn status_relays_git_output_in_repo() {
    let tmp = tempfile::tempdir().unwrap();
    init_repo(tmp.path());

    n00p()
        .args(["--root", tmp.path().to_str().unwrap(), "status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("##"));
}

#[test]
fn status_fails_outside_repo() {
    let tmp = tempfile::tempdir().unwrap();

    n00p()
        .args(["--root", tmp.path().to_str().unwrap(), "status"])
        .assert()
        .failure();
}
