//! CLI integration tests using assert_cmd.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn wordquiz(dir: &Path) -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("wordquiz").unwrap();
    // Keep user-level config out of the way.
    cmd.current_dir(dir).env("HOME", dir).env_remove("RUST_LOG");
    cmd
}

fn sample_vocabulary() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../../vocab/problems.csv")
}

/// Lowercased first letters of every usable term in the sample vocabulary.
fn sample_hints() -> HashSet<String> {
    let content = std::fs::read_to_string(sample_vocabulary()).unwrap();
    content
        .lines()
        .skip(1)
        .filter_map(|line| {
            let mut fields = line.split(',');
            let word = fields.next()?.trim();
            let meaning = fields.next()?.trim();
            if word.is_empty() || meaning.is_empty() {
                return None;
            }
            word.chars().next().map(|c| c.to_lowercase().collect())
        })
        .collect()
}

fn hints_in(html: &str) -> Vec<String> {
    html.split("<td class=\"first-letter\">")
        .skip(1)
        .map(|rest| rest.split("</td>").next().unwrap_or_default().to_string())
        .collect()
}

fn row_count(html: &str) -> usize {
    html.matches("<td class=\"number\">").count()
}

fn read(path: PathBuf) -> String {
    std::fs::read_to_string(&path).unwrap_or_else(|e| panic!("{}: {e}", path.display()))
}

#[test]
fn generates_requested_sheets_from_prompt() {
    let dir = TempDir::new().unwrap();

    wordquiz(dir.path())
        .arg("generate")
        .arg("--source")
        .arg(sample_vocabulary())
        .write_stdin("3\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Loaded 50 words"))
        .stdout(predicate::str::contains("Skipped 2 row(s)"))
        .stdout(predicate::str::contains("Quiz sheet 3 written"))
        .stdout(predicate::str::contains("3 quiz sheet(s) generated"));

    let pool_hints = sample_hints();
    for n in 1..=3 {
        let html = read(dir.path().join(format!("output/quiz_{n}.html")));
        assert_eq!(row_count(&html), 20);
        let hints = hints_in(&html);
        assert_eq!(hints.len(), 20);
        assert!(hints.iter().all(|h| pool_hints.contains(h)), "{hints:?}");
    }
    assert!(!dir.path().join("output/quiz_4.html").exists());
}

#[test]
fn invalid_counts_are_reprompted() {
    let dir = TempDir::new().unwrap();

    let assert = wordquiz(dir.path())
        .arg("generate")
        .arg("--source")
        .arg(sample_vocabulary())
        .write_stdin("abc\n-1\n5\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Please enter a valid number."))
        .stdout(predicate::str::contains(
            "At least one quiz sheet must be generated.",
        ));

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert_eq!(stdout.matches("Number of quiz sheets to generate").count(), 3);

    let written = std::fs::read_dir(dir.path().join("output")).unwrap().count();
    assert_eq!(written, 5);
}

#[test]
fn small_pool_caps_sheet_size() {
    let dir = TempDir::new().unwrap();
    let source = dir.path().join("five.csv");
    std::fs::write(
        &source,
        "word,meaning(KOR)\nOne,하나\nTwo,둘\nThree,셋\nFour,넷\nFive,다섯\n",
    )
    .unwrap();

    wordquiz(dir.path())
        .args(["generate", "--count", "1", "--items", "100", "--source"])
        .arg(&source)
        .assert()
        .success();

    let html = read(dir.path().join("output/quiz_1.html"));
    assert_eq!(row_count(&html), 5);
    let mut hints = hints_in(&html);
    hints.sort();
    assert_eq!(hints, vec!["f", "f", "o", "t", "t"]);
}

#[test]
fn markup_in_meanings_is_escaped() {
    let dir = TempDir::new().unwrap();
    let source = dir.path().join("markup.csv");
    std::fs::write(&source, "word,meaning(KOR)\nTag,\"<b>굵게</b> & more\"\n").unwrap();

    wordquiz(dir.path())
        .args(["generate", "--count", "1", "--source"])
        .arg(&source)
        .assert()
        .success();

    let html = read(dir.path().join("output/quiz_1.html"));
    assert!(html.contains("&lt;b&gt;굵게&lt;/b&gt; &amp; more"));
    assert!(!html.contains("<b>"));
}

#[test]
fn missing_source_is_reported() {
    let dir = TempDir::new().unwrap();

    wordquiz(dir.path())
        .write_stdin("2\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("vocabulary file not found"))
        .stderr(predicate::str::contains("problems.csv"))
        .stderr(predicate::str::contains("panicked").not());

    assert!(!dir.path().join("output").exists());
}

#[test]
fn header_without_meaning_column_is_reported() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("problems.csv"), "word,definition\nApple,사과\n").unwrap();

    wordquiz(dir.path())
        .args(["generate", "--count", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing required column(s): meaning(KOR)"));
}

#[test]
fn table_without_usable_rows_is_reported() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("problems.csv"), "word,meaning(KOR)\nrun,\n,달리다\n").unwrap();

    wordquiz(dir.path())
        .write_stdin("1\n")
        .assert()
        .failure()
        .stdout(predicate::str::contains("Loaded 0 words"))
        .stderr(predicate::str::contains("no rows with both a word and a meaning"));

    assert!(!dir.path().join("output").exists());
}

#[test]
fn end_of_input_cancels_without_output() {
    let dir = TempDir::new().unwrap();

    wordquiz(dir.path())
        .arg("generate")
        .arg("--source")
        .arg(sample_vocabulary())
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("Cancelled"));

    assert!(!dir.path().join("output").exists());
}

#[test]
fn seeded_runs_are_reproducible() {
    let first = TempDir::new().unwrap();
    let second = TempDir::new().unwrap();

    for dir in [&first, &second] {
        wordquiz(dir.path())
            .args(["generate", "--count", "2", "--seed", "7", "--source"])
            .arg(sample_vocabulary())
            .assert()
            .success();
    }

    for n in 1..=2 {
        let name = format!("output/quiz_{n}.html");
        assert_eq!(
            read(first.path().join(&name)),
            read(second.path().join(&name))
        );
    }
}

#[test]
fn all_formats_write_html_and_json() {
    let dir = TempDir::new().unwrap();

    wordquiz(dir.path())
        .args(["generate", "--count", "1", "--format", "all", "--output", "sheets"])
        .arg("--source")
        .arg(sample_vocabulary())
        .assert()
        .success();

    assert!(dir.path().join("sheets/quiz_1.html").exists());
    let json: serde_json::Value =
        serde_json::from_str(&read(dir.path().join("sheets/quiz_1.json"))).unwrap();
    assert_eq!(json["item_count"], 20);
}

#[test]
fn unknown_format_is_rejected() {
    let dir = TempDir::new().unwrap();

    wordquiz(dir.path())
        .args(["generate", "--count", "1", "--format", "pdf", "--source"])
        .arg(sample_vocabulary())
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown output format 'pdf'"));
}

#[test]
fn non_positive_count_flag_is_rejected() {
    let dir = TempDir::new().unwrap();

    wordquiz(dir.path())
        .args(["generate", "--count", "0"])
        .assert()
        .failure();
}

#[test]
fn zero_items_flag_names_words_per_sheet() {
    let dir = TempDir::new().unwrap();

    wordquiz(dir.path())
        .args(["generate", "--count", "1", "--items", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("at least one word"))
        .stderr(predicate::str::contains("document").not());
}

#[test]
fn huge_count_at_prompt_fails_cleanly() {
    let dir = TempDir::new().unwrap();
    // A directory in place of the first sheet makes the first write fail.
    std::fs::create_dir_all(dir.path().join("output/quiz_1.html")).unwrap();

    wordquiz(dir.path())
        .arg("generate")
        .arg("--source")
        .arg(sample_vocabulary())
        .write_stdin("9223372036854775807\n")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("failed to write"))
        .stderr(predicate::str::contains("panicked").not());
}

#[test]
fn validate_sample_vocabulary() {
    let dir = TempDir::new().unwrap();

    wordquiz(dir.path())
        .arg("validate")
        .arg("--source")
        .arg(sample_vocabulary())
        .assert()
        .success()
        .stdout(predicate::str::contains("Usable words"))
        .stdout(predicate::str::contains("50"))
        .stdout(predicate::str::contains("All words valid"));
}

#[test]
fn validate_reports_duplicates() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("problems.csv"),
        "word,meaning(KOR)\nApple,사과\napple,사과나무\n",
    )
    .unwrap();

    wordquiz(dir.path())
        .arg("validate")
        .assert()
        .success()
        .stdout(predicate::str::contains("duplicate term"))
        .stdout(predicate::str::contains("1 warning(s) found"));
}

#[test]
fn init_then_generate_with_defaults() {
    let dir = TempDir::new().unwrap();

    wordquiz(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created wordquiz.toml"))
        .stdout(predicate::str::contains("Created problems.csv"));

    wordquiz(dir.path())
        .write_stdin("2\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Loaded 10 words from problems.csv"));

    for n in 1..=2 {
        let html = read(dir.path().join(format!("output/quiz_{n}.html")));
        assert_eq!(row_count(&html), 10);
        assert!(html.contains(&format!("영어 단어 퀴즈 #{n}")));
    }
}

#[test]
fn init_skips_existing() {
    let dir = TempDir::new().unwrap();

    wordquiz(dir.path()).arg("init").assert().success();

    wordquiz(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));
}

#[test]
fn help_output() {
    let dir = TempDir::new().unwrap();
    wordquiz(dir.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Printable vocabulary quiz sheet generator"));
}

#[test]
fn version_output() {
    let dir = TempDir::new().unwrap();
    wordquiz(dir.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("wordquiz"));
}
