use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;

fn cmd() -> Command {
    Command::cargo_bin("chapter-split").unwrap()
}

#[test]
fn test_empty_input_produces_empty_output() {
    cmd()
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_single_chapter_round_trip() {
    cmd()
        .write_stdin("x\t1\t1\ty\tfoo\nx\t1\t1\ty\tbar\n")
        .assert()
        .success()
        .stdout("101\tfoo\\nbar\n");
}

#[test]
fn test_adjacency_grouping() {
    // (1,1) (1,1) (1,2) (1,1) -> three groups; the trailing (1,1) is a
    // fresh group, not merged with the first.
    let input = "0\t1\t1\t1\ta\n0\t1\t1\t2\tb\n0\t1\t2\t1\tc\n0\t1\t1\t3\td\n";
    cmd()
        .write_stdin(input)
        .assert()
        .success()
        .stdout("101\ta\\nb\n102\tc\n101\td\n");
}

#[test]
fn test_composite_id_zero_padding() {
    let input = "0\t12\t3\t1\tverse one\n0\t12\t3\t2\tverse two\n";
    cmd()
        .write_stdin(input)
        .assert()
        .success()
        .stdout("1203\tverse one\\nverse two\n");
}

#[test]
fn test_malformed_line_fails_nonzero() {
    cmd()
        .write_stdin("too\tfew\tfields\n")
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("tab-separated fields"));
}

#[test]
fn test_non_integer_chapter_fails_nonzero() {
    cmd()
        .write_stdin("0\t1\tone\t1\ttext\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a valid integer"));
}

#[test]
fn test_output_before_failure_is_kept() {
    // The first chapter closes when the (1,2) record arrives, so it is
    // written before the malformed third line aborts the run.
    let input = "0\t1\t1\t1\ta\n0\t1\t2\t1\tb\nbroken line\n";
    cmd()
        .write_stdin(input)
        .assert()
        .failure()
        .stdout("101\ta\n")
        .stderr(predicate::str::contains("line 3"));
}

#[test]
fn test_reads_from_file_argument() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "0\t5\t32\t1\tfirst\n0\t5\t32\t2\tsecond\n").unwrap();

    cmd()
        .arg(file.path())
        .assert()
        .success()
        .stdout("532\tfirst\\nsecond\n");
}

#[test]
fn test_missing_file_fails() {
    cmd()
        .arg("no-such-file.tsv")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read"));
}

#[test]
fn test_debug_reports_chapter_count() {
    cmd()
        .arg("--debug")
        .write_stdin("0\t1\t1\t1\ta\n0\t1\t2\t1\tb\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("Chapters: 2"));
}
