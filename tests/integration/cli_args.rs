//! Binary-level argument validation tests.

use assert_cmd::Command;
use lopdf::Document;
use predicates::prelude::*;
use tempfile::TempDir;

use crate::common::{page_widths, sample_pdf, title_of};

fn pdfedit() -> Command {
    Command::cargo_bin("pdfedit").unwrap()
}

#[test]
fn test_rejects_both_mode_flags() {
    let dir = TempDir::new().unwrap();
    let a = sample_pdf(dir.path(), "a.pdf", &[612], None);

    pdfedit()
        .args(["--pdfs", &a.display().to_string(), "--merge", "--rename"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}

#[test]
fn test_rejects_missing_mode_flag() {
    let dir = TempDir::new().unwrap();
    let a = sample_pdf(dir.path(), "a.pdf", &[612], None);

    pdfedit()
        .args(["--pdfs", &a.display().to_string()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}

#[test]
fn test_merge_requires_output_path() {
    let dir = TempDir::new().unwrap();
    let a = sample_pdf(dir.path(), "a.pdf", &[612], None);
    let b = sample_pdf(dir.path(), "b.pdf", &[612], None);

    pdfedit()
        .args([
            "--pdfs",
            &a.display().to_string(),
            &b.display().to_string(),
            "--merge",
        ])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("requires an output path"));
}

#[test]
fn test_merge_rejects_single_input() {
    let dir = TempDir::new().unwrap();
    let a = sample_pdf(dir.path(), "a.pdf", &[612], None);
    let out = dir.path().join("out.pdf");

    pdfedit()
        .args([
            "--pdfs",
            &a.display().to_string(),
            "--merge",
            "-o",
            &out.display().to_string(),
        ])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("at least two"));

    assert!(!out.exists());
}

#[test]
fn test_merge_rejects_non_pdf_output() {
    let dir = TempDir::new().unwrap();
    let a = sample_pdf(dir.path(), "a.pdf", &[612], None);
    let b = sample_pdf(dir.path(), "b.pdf", &[612], None);
    let out = dir.path().join("out.docx");

    pdfedit()
        .args([
            "--pdfs",
            &a.display().to_string(),
            &b.display().to_string(),
            "--merge",
            "-o",
            &out.display().to_string(),
        ])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains(".pdf"));

    assert!(!out.exists());
}

#[test]
fn test_rejects_missing_input_file() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("missing.pdf");

    pdfedit()
        .args(["--pdfs", &missing.display().to_string(), "--rename"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("file not found"));
}

#[test]
fn test_rejects_input_without_pdf_suffix() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("notes.txt");
    std::fs::write(&path, b"hello").unwrap();

    pdfedit()
        .args(["--pdfs", &path.display().to_string(), "--rename"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains(".pdf"));
}

#[test]
fn test_merge_end_to_end() {
    let dir = TempDir::new().unwrap();
    let a = sample_pdf(dir.path(), "a.pdf", &[101], None);
    let b = sample_pdf(dir.path(), "b.pdf", &[201], None);
    let out = dir.path().join("out.pdf");

    pdfedit()
        .args([
            "--pdfs",
            &a.display().to_string(),
            &b.display().to_string(),
            "--merge",
            "-o",
            &out.display().to_string(),
            "--quiet",
        ])
        .assert()
        .success();

    let doc = Document::load(&out).unwrap();
    assert_eq!(page_widths(&doc), vec![101, 201]);
}

#[test]
fn test_rename_end_to_end() {
    let dir = TempDir::new().unwrap();
    let path = sample_pdf(dir.path(), "monthly summary.pdf", &[612], Some("Old"));

    pdfedit()
        .args(["--pdfs", &path.display().to_string(), "--rename", "--quiet"])
        .assert()
        .success();

    assert_eq!(title_of(&path), Some("monthly summary".to_string()));
}

#[test]
fn test_broken_pdf_exits_with_parse_code() {
    let dir = TempDir::new().unwrap();
    let broken = dir.path().join("broken.pdf");
    std::fs::write(&broken, b"not a pdf at all").unwrap();

    pdfedit()
        .args(["--pdfs", &broken.display().to_string(), "--rename"])
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("failed to load PDF"));
}
