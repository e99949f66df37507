use assert_cmd::Command;
use predicates::prelude::*;

fn browse(input: &str) -> assert_cmd::assert::Assert {
    let home = tempfile::tempdir().unwrap();
    Command::cargo_bin("blogsearch")
        .unwrap()
        .env("BLOGSEARCH_HOME", home.path())
        .args(["--no-color", "browse"])
        .write_stdin(input)
        .assert()
}

#[test]
fn walks_pages_and_filters() {
    browse("next\nnext\nnext\nprev\nsearch hooks\nquit\n")
        .success()
        .stdout(predicate::str::contains("1 [2] 3"))
        .stdout(predicate::str::contains("1 2 [3]"))
        .stdout(predicate::str::contains("Search: \"hooks\""))
        .stdout(predicate::str::contains("1 post · page 1 of 1"));
}

#[test]
fn category_then_reset() {
    browse("c CSS\nreset\n")
        .success()
        .stdout(predicate::str::contains("Category: CSS"))
        .stdout(predicate::str::contains("4 posts · page 1 of 1"))
        .stdout(predicate::str::contains("14 posts · page 1 of 3"));
}

#[test]
fn bad_input_is_not_fatal() {
    browse("category Elixir\nfrobnicate\npage 99\n2\n")
        .success()
        .stdout(predicate::str::contains("Unknown category: Elixir"))
        .stdout(predicate::str::contains("Unknown command: frobnicate"))
        .stdout(predicate::str::contains("1 [2] 3"));
}

#[test]
fn ends_at_end_of_input() {
    browse("").success().stdout(predicate::str::contains("React Basics"));
}
