//! End-to-end tests for the `keytrace patterns` command.

use assert_cmd::Command;
use predicates::prelude::*;

fn keytrace() -> Command {
    Command::new(env!("CARGO_BIN_EXE_keytrace"))
}

#[test]
fn patterns_lists_signatures() {
    keytrace()
        .args(["patterns"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Stripe Live Key"))
        .stdout(predicate::str::contains("AWS Access Key ID"))
        .stdout(predicate::str::contains("GitHub Personal Access Token"));
}

#[test]
fn patterns_reports_signature_count() {
    keytrace()
        .args(["patterns"])
        .assert()
        .success()
        .stdout(predicate::str::contains("16 signatures"));
}

#[test]
fn patterns_verbose_shows_regexes() {
    keytrace()
        .args(["patterns", "--verbose"])
        .assert()
        .success()
        .stdout(predicate::str::contains("sk_live_"))
        .stdout(predicate::str::contains("regex"));
}

#[test]
fn patterns_marks_context_dependent_signatures() {
    keytrace()
        .args(["patterns"])
        .assert()
        .success()
        .stdout(predicate::str::contains("context required"));
}

#[test]
fn patterns_alias_works() {
    keytrace()
        .args(["p"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Stripe Live Key"));
}
