//! Integration tests for the bm CLI commands.
#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use assert_cmd::Command;
use predicates::prelude::*;

fn bm() -> Command {
    let mut cmd = Command::cargo_bin("bm").unwrap();
    cmd.env("NO_COLOR", "1").env_remove("RUST_LOG");
    cmd
}

fn stdout_of(args: &[&str]) -> String {
    let output = bm().args(args).output().unwrap();
    assert!(output.status.success());
    String::from_utf8(output.stdout).unwrap()
}

// ---------------------------------------------------------------------------
// cast
// ---------------------------------------------------------------------------

#[test]
fn cast_prints_formatted_line() {
    bm().args(["--seed", "1", "cast"])
        .assert()
        .success()
        .stdout(predicate::str::contains("I Ching Hexagram "));
}

#[test]
fn cast_with_seed_is_reproducible() {
    let first = stdout_of(&["--seed", "7", "cast"]);
    let second = stdout_of(&["--seed", "7", "cast"]);
    assert_eq!(first, second);
}

#[test]
fn cast_enhanced_draws_lines() {
    bm().args(["--seed", "3", "cast"])
        .assert()
        .success()
        .stdout(predicate::str::contains("━━━").and(predicate::str::contains("judgment:")));
}

#[test]
fn cast_classic_omits_detail() {
    bm().args(["--classic", "--seed", "3", "cast"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("I Ching Hexagram")
                .and(predicate::str::contains("judgment:").not()),
        );
}

#[test]
fn cast_json_has_base_fields() {
    let out = stdout_of(&["--json", "--seed", "11", "cast"]);
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(value["success"], true);
    let number = value["hexagram_number"].as_u64().unwrap();
    assert!((1..=64).contains(&number));
    assert!(
        value["formatted_text"]
            .as_str()
            .unwrap()
            .starts_with("I Ching Hexagram ")
    );
    assert_eq!(value["detail"]["lines"].as_array().unwrap().len(), 6);
    assert_eq!(value["enhanced"], true);
    assert_eq!(value["changing_lines"], value["detail"]["changing_lines"]);
}

#[test]
fn cast_json_classic_has_no_detail() {
    let out = stdout_of(&["--json", "--classic", "--seed", "11", "cast"]);
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert!(value.get("detail").is_none());
    assert_eq!(value["enhanced"], false);
}

#[test]
fn engine_flag_selects_classic() {
    let out = stdout_of(&["--json", "--engine", "minimal", "--seed", "11", "cast"]);
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(value["enhanced"], false);
}

#[test]
fn unknown_engine_is_rejected() {
    bm().args(["--engine", "turbo", "cast"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown engine 'turbo'"));
}

#[test]
fn cast_rejects_blank_query() {
    bm().args(["cast", "--query", ""])
        .assert()
        .failure()
        .stderr(predicate::str::contains("usage: cast --query"));
}

#[test]
fn cast_with_query_augments() {
    bm().args(["--seed", "5", "cast", "--query", "Is this the right path?"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Is this the right path?")
                .and(predicate::str::contains("[Bibliomantic consultation]")),
        );
}

// ---------------------------------------------------------------------------
// ask
// ---------------------------------------------------------------------------

#[test]
fn ask_keeps_query() {
    bm().args(["--seed", "9", "ask", "Should I move?"])
        .assert()
        .success()
        .stdout(
            predicate::str::starts_with("Should I move?")
                .and(predicate::str::contains("I Ching Hexagram ")),
        );
}

#[test]
fn ask_rejects_blank_query() {
    bm().args(["ask", "   "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("usage: ask"));
}

#[test]
fn ask_json() {
    let out = stdout_of(&["--json", "--seed", "9", "ask", "Where next?"]);
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert!(
        value["augmented_text"]
            .as_str()
            .unwrap()
            .contains("Where next?")
    );
    assert!(value["info"]["hexagram_number"].is_u64());
}

// ---------------------------------------------------------------------------
// show
// ---------------------------------------------------------------------------

#[test]
fn show_the_creative() {
    bm().args(["show", "1"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("The Creative")
                .and(predicate::str::contains("乾"))
                .and(predicate::str::contains("I Ching Hexagram 1 - The Creative: ")),
        );
}

#[test]
fn show_classic_reading() {
    bm().args(["--classic", "show", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("creative force"));
}

#[test]
fn show_last_hexagram() {
    bm().args(["show", "64"])
        .assert()
        .success()
        .stdout(predicate::str::contains("I Ching Hexagram 64 - "));
}

#[test]
fn show_rejects_out_of_range() {
    bm().args(["show", "65"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid hexagram number 65"));

    bm().args(["show", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid hexagram number 0"));
}

#[test]
fn show_rejects_non_number() {
    bm().args(["show", "creative"]).assert().failure();
}

// ---------------------------------------------------------------------------
// stats
// ---------------------------------------------------------------------------

#[test]
fn stats_text() {
    bm().args(["stats"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("64")
                .and(predicate::str::contains("three-coin"))
                .and(predicate::str::contains("operational")),
        );
}

#[test]
fn stats_json_reports_engine() {
    let out = stdout_of(&["--json", "--classic", "stats"]);
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(value["total_hexagrams"], 64);
    assert_eq!(value["total_trigrams"], 8);
    assert_eq!(value["engine"], "classic");
    assert_eq!(value["system_status"], "operational");
}

// ---------------------------------------------------------------------------
// trigrams
// ---------------------------------------------------------------------------

#[test]
fn trigrams_table() {
    bm().args(["trigrams"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Heaven")
                .and(predicate::str::contains("☰"))
                .and(predicate::str::contains("☷"))
                .and(predicate::str::contains("8 trigrams")),
        );
}

#[test]
fn trigrams_filter_by_name() {
    bm().args(["trigrams", "water"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Water")
                .and(predicate::str::contains("Heaven").not())
                .and(predicate::str::contains("trigrams").not()),
        );
}

#[test]
fn trigrams_filter_by_symbol_json() {
    let out = stdout_of(&["--json", "trigrams", "☷"]);
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(value, serde_json::json!(["earth"]));
}

#[test]
fn trigrams_unknown_name() {
    bm().args(["trigrams", "volcano"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown trigram 'volcano'"));
}

#[test]
fn trigrams_json() {
    let out = stdout_of(&["--json", "trigrams"]);
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(value.as_array().unwrap().len(), 8);
    assert_eq!(value[0], "heaven");
}
