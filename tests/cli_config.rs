use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn blogsearch(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("blogsearch").unwrap();
    cmd.env("BLOGSEARCH_HOME", home.path()).arg("--no-color");
    cmd
}

#[test]
fn shows_defaults() {
    let home = tempfile::tempdir().unwrap();
    blogsearch(&home)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("page-size = 5"));
}

#[test]
fn set_page_size_changes_listing() {
    let home = tempfile::tempdir().unwrap();
    blogsearch(&home)
        .args(["config", "page-size", "7"])
        .assert()
        .success()
        .stdout(predicate::str::contains("page-size set to 7"));

    blogsearch(&home)
        .args(["config", "page-size"])
        .assert()
        .success()
        .stdout("7\n");

    blogsearch(&home)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Building APIs"))
        .stdout(predicate::str::contains("page 1 of 2"));
}

#[test]
fn invalid_values_are_reported() {
    let home = tempfile::tempdir().unwrap();
    blogsearch(&home)
        .args(["config", "page-size", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid page size"));

    blogsearch(&home)
        .args(["config", "page-size", "lots"])
        .assert()
        .success()
        .stdout(predicate::str::contains("page-size must be a number"));

    blogsearch(&home)
        .args(["config", "colour"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Unknown config key: colour"));

    blogsearch(&home)
        .arg("config")
        .assert()
        .stdout(predicate::str::contains("page-size = 5"));
}

#[test]
fn unusable_config_can_be_repaired() {
    let home = tempfile::tempdir().unwrap();
    std::fs::write(home.path().join("config.json"), r#"{"page_size":0}"#).unwrap();

    blogsearch(&home)
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid page size"));

    blogsearch(&home)
        .args(["list", "-n", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("page 1 of 3"));

    blogsearch(&home)
        .args(["config", "page-size", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("page-size set to 5"));

    blogsearch(&home)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("React Basics"))
        .stdout(predicate::str::contains("14 posts · page 1 of 3"));
}
