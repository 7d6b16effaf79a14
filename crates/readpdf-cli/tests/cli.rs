//! End-to-end tests for the `read-pdf` binary, driven by form-feed text inputs.

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Command isolated from any user configuration.
fn read_pdf(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("read-pdf").unwrap();
    cmd.env("XDG_CONFIG_HOME", home.path().join("config"))
        .env("HOME", home.path());
    cmd
}

fn write_doc(dir: &Path, name: &str, pages: &[String]) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, pages.join("\u{000C}")).unwrap();
    path
}

fn toc_page() -> String {
    let mut page = String::from("Table of Contents\n");
    for n in 1..=6 {
        page.push_str(&format!("Section {n} .......... {}\n", 1 + n % 3));
    }
    page
}

fn book(dir: &Path) -> PathBuf {
    write_doc(
        dir,
        "book.txt",
        &[
            "A Book Title\nby Someone".to_string(),
            toc_page(),
            "Chapter one starts here. See Table 2 for the alpha results.".to_string(),
        ],
    )
}

fn prose(dir: &Path) -> PathBuf {
    write_doc(
        dir,
        "prose.txt",
        &[
            "It was a quiet morning and nothing much happened.".to_string(),
            "The afternoon was equally uneventful.".to_string(),
        ],
    )
}

#[test]
fn test_text_prints_every_page_with_markers() {
    let tmp = TempDir::new().unwrap();
    let input = book(tmp.path());

    read_pdf(&tmp)
        .arg("text")
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("<!-- PAGE 1 -->\nA Book Title\n"))
        .stdout(predicate::str::contains("<!-- PAGE 2 -->\nTable of Contents\n"))
        .stdout(predicate::str::contains("<!-- PAGE 3 -->\nChapter one"));
}

#[test]
fn test_text_toc_filter_and_metadata() {
    let tmp = TempDir::new().unwrap();
    let input = book(tmp.path());
    let meta_path = tmp.path().join("meta.json");

    read_pdf(&tmp)
        .arg("text")
        .arg(&input)
        .arg("--toc")
        .arg("--meta-json-out")
        .arg(&meta_path)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("<!-- PAGE 2 -->\n"))
        .stdout(predicate::str::contains("PAGE 1").not())
        .stdout(predicate::str::contains("PAGE 3").not());

    let meta: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&meta_path).unwrap()).unwrap();
    assert_eq!(meta["filter"], "toc");
    assert_eq!(meta["engine"], "form-feed-text");
    assert_eq!(meta["selected_pages"], serde_json::json!([2]));
}

#[test]
fn test_text_toc_filter_without_matches_exits_4() {
    let tmp = TempDir::new().unwrap();
    let input = prose(tmp.path());

    read_pdf(&tmp)
        .args(["text", "--filter", "toc"])
        .arg(&input)
        .assert()
        .code(4)
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_missing_input_is_rejected() {
    let tmp = TempDir::new().unwrap();

    read_pdf(&tmp)
        .arg("text")
        .arg(tmp.path().join("nope.pdf"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("input not found"));
}

#[test]
fn test_output_budget_truncates_stdout() {
    let tmp = TempDir::new().unwrap();
    let long_page = "lorem ipsum dolor sit amet ".repeat(2_000);
    let input = write_doc(tmp.path(), "long.txt", &[long_page]);

    read_pdf(&tmp)
        .args(["--max-output-tokens", "50", "text"])
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("[read-pdf output truncated]"))
        .stdout(predicate::str::contains("Estimated total tokens for this response: "))
        .stdout(predicate::str::contains("Configured max output tokens: 50."));
}

#[test]
fn test_zero_output_budget_disables_truncation() {
    let tmp = TempDir::new().unwrap();
    let long_page = "lorem ipsum dolor sit amet ".repeat(2_000);
    let input = write_doc(tmp.path(), "long.txt", &[long_page]);

    read_pdf(&tmp)
        .args(["--max-output-tokens", "0", "text"])
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("output truncated").not());
}

#[test]
fn test_pages_table_candidates() {
    let tmp = TempDir::new().unwrap();
    let input = book(tmp.path());

    let output = read_pdf(&tmp)
        .args(["pages", "--kind", "table"])
        .arg(&input)
        .output()
        .unwrap();
    assert!(output.status.success());

    let record: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(record["tool"], "read-pdf");
    assert_eq!(record["mode"], "table-pages");
    assert_eq!(record["best_effort"], true);
    assert_eq!(record["pdf_page_count"], 3);
    assert_eq!(record["pages"], serde_json::json!([3]));
}

#[test]
fn test_pages_toc_candidates() {
    let tmp = TempDir::new().unwrap();
    let input = book(tmp.path());

    read_pdf(&tmp)
        .arg("pages")
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""mode":"toc-pages""#))
        .stdout(predicate::str::contains(r#""pages":[2]"#));
}

#[test]
fn test_search_emits_json_lines() {
    let tmp = TempDir::new().unwrap();
    let input = book(tmp.path());

    let output = read_pdf(&tmp)
        .args(["search", "--regex", "alpha", "--context-words", "2"])
        .arg(&input)
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let records: Vec<serde_json::Value> = stdout
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["mode"], "search");
    assert_eq!(records[0]["page"], 3);
    assert_eq!(records[0]["match"], "alpha");
    assert_eq!(records[0]["context_before"], "for the");
    assert_eq!(records[0]["context_after"], "results.");
}

#[test]
fn test_search_rejects_invalid_regex() {
    let tmp = TempDir::new().unwrap();
    let input = book(tmp.path());

    read_pdf(&tmp)
        .args(["search", "--regex", "(unclosed"])
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid regex"));
}

#[test]
fn test_truncate_rejects_negative_budget() {
    let tmp = TempDir::new().unwrap();
    let input = tmp.path().join("in.txt");
    fs::write(&input, "some text").unwrap();

    read_pdf(&tmp)
        .arg("truncate")
        .arg("--input")
        .arg(&input)
        .args(["--max-tokens", "-5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("max tokens must be >= 0"));
}

#[test]
fn test_truncate_file() {
    let tmp = TempDir::new().unwrap();
    let input = tmp.path().join("in.txt");
    fs::write(&input, "token ".repeat(10_000)).unwrap();

    read_pdf(&tmp)
        .arg("truncate")
        .arg("--input")
        .arg(&input)
        .args(["--max-tokens", "50"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("token"))
        .stdout(predicate::str::contains("[read-pdf output truncated]"));

    read_pdf(&tmp)
        .arg("truncate")
        .arg("--input")
        .arg(&input)
        .args(["--max-tokens", "0"])
        .assert()
        .success()
        .stdout("token ".repeat(10_000));
}

#[test]
fn test_batch_with_summary() {
    let tmp = TempDir::new().unwrap();
    book(tmp.path());
    prose(tmp.path());
    let summary = tmp.path().join("summary.csv");

    let output = read_pdf(&tmp)
        .arg("batch")
        .arg(format!("{}/*.txt", tmp.path().display()))
        .arg("--summary")
        .arg(&summary)
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let records: Vec<serde_json::Value> = stdout
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    assert_eq!(records.len(), 2);
    assert!(records[0]["path"].as_str().unwrap().ends_with("book.txt"));
    assert_eq!(records[0]["pages"], serde_json::json!([2]));
    assert_eq!(records[1]["pages"], serde_json::json!([]));
    assert!(records[1]["error"].is_null());

    let csv = fs::read_to_string(&summary).unwrap();
    assert!(csv.starts_with("filename,status,pages,processing_time_ms,error\n"));
    assert!(csv.contains("book.txt,success,2,"));
}

#[test]
fn test_config_init_and_get() {
    let tmp = TempDir::new().unwrap();
    let config = tmp.path().join("read-pdf.json");

    read_pdf(&tmp)
        .arg("--config")
        .arg(&config)
        .args(["config", "init"])
        .assert()
        .success();
    assert!(config.exists());

    read_pdf(&tmp)
        .arg("--config")
        .arg(&config)
        .args(["config", "set", "search.context_words", "3"])
        .assert()
        .success();

    read_pdf(&tmp)
        .arg("--config")
        .arg(&config)
        .args(["config", "get", "search.context_words"])
        .assert()
        .success()
        .stdout("3\n");
}

#[test]
fn test_expected_pages_fill_missing_pages() {
    let tmp = TempDir::new().unwrap();
    let input = book(tmp.path());
    let meta_path = tmp.path().join("meta.json");

    read_pdf(&tmp)
        .arg("text")
        .arg(&input)
        .args(["--expected-pages", "5", "--meta-json-out"])
        .arg(&meta_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("<!-- PAGE 4 -->\n\n<!-- PAGE 5 -->\n\n"));

    let meta: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&meta_path).unwrap()).unwrap();
    assert_eq!(meta["selected_pages"], serde_json::json!([1, 2, 3, 4, 5]));
}

#[test]
fn test_truncate_replaces_invalid_utf8() {
    let tmp = TempDir::new().unwrap();
    let input = tmp.path().join("in.txt");
    let mut bytes = "plain words ".repeat(50).into_bytes();
    bytes.push(0xff);
    fs::write(&input, &bytes).unwrap();

    read_pdf(&tmp)
        .arg("truncate")
        .arg("--input")
        .arg(&input)
        .args(["--max-tokens", "10"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("plain"))
        .stdout(predicate::str::contains("[read-pdf output truncated]"));

    read_pdf(&tmp)
        .arg("truncate")
        .arg("--input")
        .arg(&input)
        .args(["--max-tokens", "0"])
        .assert()
        .success()
        .stdout(predicate::str::ends_with("words \u{FFFD}"));
}

#[test]
fn test_config_set_rejects_unknown_and_mistyped_values() {
    let tmp = TempDir::new().unwrap();
    let config = tmp.path().join("read-pdf.json");

    read_pdf(&tmp)
        .arg("--config")
        .arg(&config)
        .args(["config", "set", "toc.thresholds.typo", "5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown configuration key"));

    read_pdf(&tmp)
        .arg("--config")
        .arg(&config)
        .args(["config", "set", "toc.thresholds.hinted_min_nav", "many"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid value"));

    assert!(!config.exists());
}
