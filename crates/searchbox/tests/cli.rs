use assert_cmd::Command;
use predicates::prelude::*;

fn searchbox() -> Command {
  let mut cmd = Command::cargo_bin("searchbox").unwrap();
  cmd.env_remove("RUST_LOG").env("SEARCHBOX_SERVER_URL", "http://127.0.0.1:1");
  cmd
}

#[test]
fn test_help_lists_commands() {
  searchbox()
    .arg("--help")
    .assert()
    .success()
    .stdout(predicate::str::contains("suggest"))
    .stdout(predicate::str::contains("interactive"));
}

#[test]
fn test_short_suggest_makes_no_request() {
  searchbox()
    .args(["suggest", " a "])
    .assert()
    .success()
    .stdout(predicate::str::contains("No suggestions"))
    .stderr(predicate::str::contains("error fetching suggestions").not());
}

#[test]
fn test_unreachable_server_degrades_silently() {
  searchbox()
    .args(["--debounce-ms", "0", "suggest", "cats"])
    .assert()
    .success()
    .stdout(predicate::str::contains("No suggestions"))
    .stderr(predicate::str::contains("error fetching suggestions"));
}

#[test]
fn test_feedback_requires_rating() {
  searchbox().args(["feedback", "42"]).assert().failure();
}

#[test]
fn test_invalid_server_url_fails() {
  searchbox()
    .args(["--server", "not a url", "search", "rust"])
    .assert()
    .failure()
    .stderr(predicate::str::contains("Failed to create client"));
}
