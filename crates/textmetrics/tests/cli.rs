//! `textmetrics analyze` run as a subprocess.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;

/// The binary, logging to a scratch directory and ignoring the caller's `RUST_LOG`.
#[allow(deprecated)]
fn textmetrics() -> Command {
    let mut cmd = Command::cargo_bin("textmetrics").unwrap();
    cmd.env("TEXTMETRICS_LOG_DIR", std::env::temp_dir().join("textmetrics-tests"))
        .env_remove("RUST_LOG");
    cmd
}

/// Metrics for `text` passed with `--text`.
fn metrics(text: &str) -> Value {
    metrics_from(textmetrics().args(["analyze", "--json", "--text", text]))
}

fn metrics_from(cmd: &mut Command) -> Value {
    let output = cmd.output().unwrap();
    assert!(
        output.status.success(),
        "analyze failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).unwrap()
}

// =============================================================================
// Metrics
// =============================================================================

#[test]
fn json_has_exactly_four_keys() {
    let json = metrics("This is great.");
    let mut keys: Vec<&str> = json.as_object().unwrap().keys().map(String::as_str).collect();
    keys.sort_unstable();
    assert_eq!(
        keys,
        ["readability_score", "sentence_count", "sentiment_score", "word_count"]
    );
}

#[test]
fn positive_sentence() {
    let json = metrics("This is great.");
    assert_eq!(json["word_count"], 3.0);
    assert_eq!(json["sentence_count"], 1.0);
    assert_eq!(json["readability_score"], 1.0);
    assert_eq!(json["sentiment_score"], 1.0);
}

#[test]
fn unpunctuated_text_counts_one_sentence() {
    let json = metrics("Hello world");
    assert_eq!(json["word_count"], 2.0);
    assert_eq!(json["sentence_count"], 1.0);
    assert_eq!(json["sentiment_score"], 0.5);
}

#[test]
fn every_terminator_counts() {
    assert_eq!(metrics("A!B!")["sentence_count"], 2.0);
    assert_eq!(metrics("Wait... what?!")["sentence_count"], 5.0);
}

#[test]
fn sentiment_ignores_case_and_punctuation() {
    let json = metrics("GREAT! (Love) it, but: \"problem\".");
    // 2 positive, 1 negative
    assert!((json["sentiment_score"].as_f64().unwrap() - 2.0 / 3.0).abs() < 1e-12);
}

#[test]
fn long_sentence_has_zero_readability() {
    let text = format!("{}.", "word ".repeat(30).trim_end());
    assert_eq!(metrics(&text)["readability_score"], 0.0);
}

#[test]
fn whitespace_only_text_takes_the_no_sentence_branch() {
    let json = metrics(" \t\n ");
    assert_eq!(json["word_count"], 0.0);
    assert_eq!(json["sentence_count"], 0.0);
    assert_eq!(json["readability_score"], 0.5);
}

#[test]
fn text_output_labels_each_metric() {
    textmetrics()
        .args(["--color", "never", "analyze", "--text", "Hello world"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Words:"))
        .stdout(predicate::str::contains("Sentences:"))
        .stdout(predicate::str::contains("Readability:"))
        .stdout(predicate::str::contains("0.50 (neutral)"));
}

// =============================================================================
// Input sources
// =============================================================================

#[test]
fn reads_a_file() {
    let tmp = tempfile::NamedTempFile::new().unwrap();
    std::fs::write(tmp.path(), "Bad, terrible, awful").unwrap();

    let json = metrics_from(
        textmetrics()
            .args(["analyze", "--json"])
            .arg(tmp.path()),
    );
    assert_eq!(json["word_count"], 3.0);
    assert_eq!(json["sentiment_score"], 0.0);
}

#[test]
fn reads_stdin_without_a_file() {
    let json = metrics_from(
        textmetrics()
            .args(["analyze", "--json"])
            .write_stdin("I love it. I hate it."),
    );
    assert_eq!(json["sentence_count"], 2.0);
    assert_eq!(json["sentiment_score"], 0.5);
}

#[test]
fn empty_stdin_gives_empty_metrics() {
    let json = metrics_from(textmetrics().args(["analyze", "-", "--json"]).write_stdin(""));
    assert_eq!(json["word_count"], 0.0);
    assert_eq!(json["readability_score"], 0.0);
    assert_eq!(json["sentiment_score"], 0.5);
}

#[test]
fn invalid_utf8_file_is_still_analyzed() {
    let tmp = tempfile::NamedTempFile::new().unwrap();
    std::fs::write(tmp.path(), b"Caf\xe9 food was good.").unwrap();

    let json = metrics_from(
        textmetrics()
            .args(["analyze", "--json"])
            .arg(tmp.path()),
    );
    assert_eq!(json["word_count"], 4.0);
    assert_eq!(json["sentiment_score"], 1.0);
}

#[test]
fn stdin_over_limit_mid_character_reports_size() {
    let tmp = tempfile::TempDir::new().unwrap();
    std::fs::write(tmp.path().join(".textmetrics.toml"), "max_input_bytes = 2\n").unwrap();

    // 6 bytes; the 3-byte read cap splits the second character
    textmetrics()
        .arg("-C")
        .arg(tmp.path())
        .args(["analyze", "-"])
        .write_stdin("\u{e9}\u{e9}\u{e9}")
        .assert()
        .failure()
        .stderr(predicate::str::contains("input too large"))
        .stderr(predicate::str::contains("limit: 2 bytes"));
}

#[test]
fn file_and_text_are_exclusive() {
    textmetrics()
        .args(["analyze", "notes.txt", "--text", "hi"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}

#[test]
fn missing_file_names_the_path() {
    textmetrics()
        .args(["analyze", "/definitely/not/here.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read /definitely/not/here.txt"));
}

// =============================================================================
// Thresholds
// =============================================================================

#[test]
fn sentiment_below_threshold_fails() {
    textmetrics()
        .args(["analyze", "--text", "This is a problem.", "--min-sentiment", "0.5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("<text>: sentiment 0.00 is below 0.50"));
}

#[test]
fn both_failing_thresholds_are_reported() {
    let text = format!("{} wrong", "word ".repeat(30));
    textmetrics()
        .args(["analyze", "--text", &text])
        .args(["--min-sentiment", "0.5", "--min-readability", "0.5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("readability 0.00 is below 0.50"))
        .stderr(predicate::str::contains("sentiment 0.00 is below 0.50"));
}

#[test]
fn json_is_printed_even_when_a_threshold_fails() {
    let output = textmetrics()
        .args(["analyze", "--json", "--text", "Awful.", "--min-sentiment", "0.9"])
        .output()
        .unwrap();
    assert!(!output.status.success());
    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["sentiment_score"], 0.0);
}

#[test]
fn passing_thresholds_print_pass() {
    textmetrics()
        .args(["--color", "never", "analyze", "--text", "I love it."])
        .args(["--min-sentiment", "0.5", "--min-readability", "0.5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("<text> meets all thresholds"));
}

#[test]
fn threshold_flag_outside_unit_range_is_rejected() {
    textmetrics()
        .args(["analyze", "--text", "hi", "--min-readability", "2"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("2 is not between 0 and 1"));
}

// =============================================================================
// Other commands
// =============================================================================

#[test]
fn no_subcommand_prints_usage() {
    textmetrics()
        .assert()
        .code(2)
        .stderr(predicate::str::contains("analyze"));
}

#[test]
fn version_only_is_bare() {
    textmetrics()
        .arg("--version-only")
        .assert()
        .success()
        .stdout(format!("{}\n", env!("CARGO_PKG_VERSION")));
}

#[test]
fn info_json_reports_default_limit() {
    let tmp = tempfile::TempDir::new().unwrap();
    let json = metrics_from(
        textmetrics()
            .arg("-C")
            .arg(tmp.path())
            .args(["info", "--json"]),
    );
    assert_eq!(json["name"], "textmetrics");
    assert_eq!(json["config"]["max_input_bytes"], 5 * 1024 * 1024);
}
