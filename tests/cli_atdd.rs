#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::io::Write;
use tempfile::TempDir;
use zip::write::FileOptions;

const REASONED_DECISION: &str = "\
En primer lugar, el tribunal identifica los indicios: H1 la huida, H2 el arma y H3 el móvil.
Estos hechos indiciarios, considerados en su conjunto, se refuerzan mutuamente.

En segundo lugar, la defensa propuso una hipótesis alternativa y otra versión de los hechos;
se examinaron otras explicaciones razonables. Esta hipótesis queda descartada porque no es
verosímil y carece de apoyo probatorio.

Finalmente, rige la presunción de inocencia y el estándar probatorio de duda razonable.
En suma, en el presente caso la condena se sostiene.
";

fn ici_in(dir: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("ici").expect("binary should compile");
    cmd.current_dir(dir).env("HOME", dir).env_remove("RUST_LOG");
    cmd
}

#[test]
fn evaluate_text_without_signals_lands_in_lowest_band() {
    let dir = TempDir::new().expect("temp dir should be created");
    ici_in(dir.path())
        .args(["evaluate", "--text", "El acusado compareció.", "--format", "json"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("\"index_raw\": 28.4"))
        .stdout(predicate::str::contains("\"index_adjusted\": 20.9"))
        .stdout(predicate::str::contains("\"band\": \"very_high\""))
        .stdout(predicate::str::contains("C5 muy bajo"));
}

#[test]
fn evaluate_file_renders_markdown_report() {
    let dir = TempDir::new().expect("temp dir should be created");
    fs::write(dir.path().join("sentencia.txt"), REASONED_DECISION).expect("decision should write");

    ici_in(dir.path())
        .args(["evaluate", "sentencia.txt"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("# Informe de Auditoría Indiciaria (ICI)"))
        .stdout(predicate::str::contains("| C5 | Hipótesis alternativas | 80 |"))
        .stdout(predicate::str::contains("C5 muy bajo").not());
}

#[test]
fn evaluate_reads_stdin() {
    let dir = TempDir::new().expect("temp dir should be created");
    ici_in(dir.path())
        .args(["evaluate", "-", "-f", "json"])
        .write_stdin("Rige la presunción de inocencia.")
        .assert()
        .code(0)
        .stdout(predicate::str::contains("\"source\": \"<stdin>\""))
        .stdout(predicate::str::contains("\"C6\": 55"));
}

#[test]
fn evaluate_rejects_blank_input() {
    let dir = TempDir::new().expect("temp dir should be created");
    ici_in(dir.path())
        .args(["evaluate", "-"])
        .write_stdin("   \n\n\t ")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("no text to analyze"));
}

#[test]
fn evaluate_rejects_unsupported_documents() {
    let dir = TempDir::new().expect("temp dir should be created");
    fs::write(dir.path().join("sentencia.odt"), b"PK\x03\x04").expect("odt should write");

    ici_in(dir.path())
        .args(["evaluate", "sentencia.odt"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("unsupported document format 'odt'"));
}

#[test]
fn evaluate_reads_word_documents() {
    let dir = TempDir::new().expect("temp dir should be created");
    let paragraphs = REASONED_DECISION
        .split("\n\n")
        .map(|paragraph| format!("<w:p><w:r><w:t>{paragraph}</w:t></w:r></w:p>"))
        .collect::<String>();
    let document = format!(
        r#"<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:body>{paragraphs}</w:body></w:document>"#
    );
    let mut zip = zip::ZipWriter::new(
        fs::File::create(dir.path().join("sentencia.docx")).expect("docx should create"),
    );
    zip.start_file("word/document.xml", FileOptions::default())
        .expect("start document");
    zip.write_all(document.as_bytes()).expect("write document");
    zip.finish().expect("finish docx");

    ici_in(dir.path())
        .args(["evaluate", "sentencia.docx", "-f", "json"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("\"C5\": 80"))
        .stdout(predicate::str::contains("\"penalty\": 0.0"));
}

#[test]
fn evaluate_rejects_corrupt_word_documents() {
    let dir = TempDir::new().expect("temp dir should be created");
    fs::write(dir.path().join("sentencia.docx"), b"PK\x03\x04").expect("docx should write");

    ici_in(dir.path())
        .args(["evaluate", "sentencia.docx"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("could not be decoded"));
}

#[test]
fn evaluate_directory_skips_unsupported_files_with_warning_exit() {
    let dir = TempDir::new().expect("temp dir should be created");
    let docs = dir.path().join("sentencias");
    fs::create_dir_all(&docs).expect("docs dir should create");
    fs::write(docs.join("a.txt"), REASONED_DECISION).expect("a should write");
    fs::write(docs.join("b.txt"), "El acusado compareció.").expect("b should write");
    fs::write(docs.join("c.pdf"), b"%PDF-1.7").expect("c should write");

    ici_in(dir.path())
        .args(["evaluate", "sentencias", "--format", "json"])
        .assert()
        .code(1)
        .stdout(predicate::str::starts_with("["))
        .stdout(predicate::str::contains("a.txt"))
        .stdout(predicate::str::contains("b.txt"))
        .stderr(predicate::str::contains("skipping document"));
}

#[test]
fn evaluate_fail_under_returns_blocking() {
    let dir = TempDir::new().expect("temp dir should be created");
    ici_in(dir.path())
        .args(["evaluate", "--text", "El acusado compareció.", "--fail-under", "55"])
        .assert()
        .code(2);
}

#[test]
fn evaluate_writes_report_file() {
    let dir = TempDir::new().expect("temp dir should be created");
    fs::write(dir.path().join("sentencia.txt"), REASONED_DECISION).expect("decision should write");

    ici_in(dir.path())
        .args(["evaluate", "sentencia.txt", "-f", "json", "-o", "informe.json"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("report file:"));

    let written = fs::read_to_string(dir.path().join("informe.json")).expect("report should exist");
    let value: serde_json::Value = serde_json::from_str(&written).expect("report should be json");
    assert_eq!(value["evaluation"]["criteria"]["C5"], 80);
    assert_eq!(value["text_sha256"].as_str().map(str::len), Some(64));
}

#[test]
fn aggregate_applies_penalty_and_defaults() {
    let dir = TempDir::new().expect("temp dir should be created");
    fs::write(dir.path().join("scores.json"), r#"{"criteria": {"C5": 0}}"#)
        .expect("scores should write");

    // C5 weighs 0.16; every other criterion takes its absent score.
    ici_in(dir.path())
        .args(["aggregate", "scores.json", "--format", "json"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("\"index_raw\": 25.2"))
        .stdout(predicate::str::contains("\"penalty\": 15.0"))
        .stdout(predicate::str::contains("\"index_adjusted\": 10.2"));
}

#[test]
fn aggregate_rejects_non_numeric_scores() {
    let dir = TempDir::new().expect("temp dir should be created");
    ici_in(dir.path())
        .args(["aggregate", "-"])
        .write_stdin(r#"{"C1": 50, "C7": "alto"}"#)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("criterion C7 is not numeric"));
}

#[test]
fn repo_config_changes_the_aggregation_scheme() {
    let dir = TempDir::new().expect("temp dir should be created");
    fs::write(dir.path().join("ici.toml"), "[aggregation]\nscheme = \"mean\"\n")
        .expect("config should write");

    ici_in(dir.path())
        .args(["aggregate", "-", "-f", "json"])
        .write_stdin(r#"{"C1": 80, "C5": 60}"#)
        .assert()
        .code(0)
        .stdout(predicate::str::contains("\"index_raw\": 70.0"));
}

#[test]
fn invalid_config_is_a_runtime_failure() {
    let dir = TempDir::new().expect("temp dir should be created");
    fs::write(dir.path().join("ici.toml"), "[aggregation.weights]\nC1 = 0.5\n")
        .expect("config should write");

    ici_in(dir.path())
        .arg("criteria")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("must sum to 1.0"));
}

#[test]
fn criteria_lists_weights() {
    let dir = TempDir::new().expect("temp dir should be created");
    ici_in(dir.path())
        .arg("criteria")
        .assert()
        .code(0)
        .stdout(predicate::str::contains("C5"))
        .stdout(predicate::str::contains("weight 0.16"))
        .stdout(predicate::str::contains("C12"));
}
