use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const UNFORMATTED: &str = "options{A=1;B=2;}";
const FORMATTED: &str = "options {\n\tA = 1;\n\tB = 2;\n}\n";

/// A scratch directory holding one grammar file, also used as the working directory so
/// no stray project configuration is picked up
fn workspace(contents: &str) -> (TempDir, std::path::PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("grammar.jj");
    fs::write(&path, contents).unwrap();
    (dir, path)
}

#[test]
fn formats_stdin_to_stdout() {
    let dir = tempfile::tempdir().unwrap();
    let mut cmd = cargo_bin_cmd!("jjformat");
    cmd.current_dir(dir.path()).write_stdin(UNFORMATTED);
    cmd.assert().success().stdout(FORMATTED);
}

#[test]
fn formats_file_argument() {
    let (dir, path) = workspace(UNFORMATTED);
    let mut cmd = cargo_bin_cmd!("jjformat");
    cmd.current_dir(dir.path()).arg(&path);
    cmd.assert().success().stdout(FORMATTED);
}

#[test]
fn check_reports_unformatted_files() {
    let (dir, path) = workspace(UNFORMATTED);
    let mut cmd = cargo_bin_cmd!("jjformat");
    cmd.current_dir(dir.path()).arg(&path).arg("--check");
    cmd.assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("not formatted"));
}

#[test]
fn check_accepts_formatted_files() {
    let (dir, path) = workspace(FORMATTED);
    let mut cmd = cargo_bin_cmd!("jjformat");
    cmd.current_dir(dir.path()).arg(&path).arg("--check");
    cmd.assert().success().stdout(predicate::str::is_empty());
}

#[test]
fn in_place_rewrites_the_file() {
    let (dir, path) = workspace(UNFORMATTED);
    let mut cmd = cargo_bin_cmd!("jjformat");
    cmd.current_dir(dir.path()).arg(&path).arg("--in-place");
    cmd.assert().success().stdout(predicate::str::is_empty());
    assert_eq!(fs::read_to_string(&path).unwrap(), FORMATTED);
}

#[test]
fn in_place_requires_a_path() {
    let mut cmd = cargo_bin_cmd!("jjformat");
    cmd.arg("--in-place").write_stdin(UNFORMATTED);
    cmd.assert().failure();
}

#[test]
fn lines_prints_the_replacement_for_a_range() {
    let (dir, path) = workspace(FORMATTED);
    let mut cmd = cargo_bin_cmd!("jjformat");
    cmd.current_dir(dir.path()).arg(&path).args(["--lines", "2:3"]);
    cmd.assert().success().stdout("\tA = 1;\n\tB = 2;\n");
}

#[test]
fn lines_rejects_inverted_ranges() {
    let (dir, path) = workspace(FORMATTED);
    let mut cmd = cargo_bin_cmd!("jjformat");
    cmd.current_dir(dir.path()).arg(&path).args(["--lines", "3:2"]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("invalid line range"));
}

#[test]
fn tokens_dumps_json() {
    let dir = tempfile::tempdir().unwrap();
    let mut cmd = cargo_bin_cmd!("jjformat");
    cmd.current_dir(dir.path()).arg("--tokens").write_stdin("options // c\n{}");
    cmd.assert().success().stdout(
        predicate::str::contains("\"image\": \"options\"")
            .and(predicate::str::contains("\"image\": \"// c\""))
            .and(predicate::str::contains("\"begin_line\": 2")),
    );
}

#[test]
fn empty_input_has_nothing_to_format() {
    let dir = tempfile::tempdir().unwrap();
    let mut cmd = cargo_bin_cmd!("jjformat");
    cmd.current_dir(dir.path()).write_stdin("  \n// only a comment\n");
    cmd.assert()
        .code(2)
        .stderr(predicate::str::contains("jjformat: nothing to format"));
}

#[test]
fn untokenizable_input_fails() {
    let dir = tempfile::tempdir().unwrap();
    let mut cmd = cargo_bin_cmd!("jjformat");
    cmd.current_dir(dir.path()).write_stdin("options { A = ` }");
    cmd.assert()
        .code(2)
        .stderr(predicate::str::contains("unexpected input"));
}

#[test]
fn missing_files_fail() {
    let dir = tempfile::tempdir().unwrap();
    let mut cmd = cargo_bin_cmd!("jjformat");
    cmd.current_dir(dir.path()).arg("absent.jj");
    cmd.assert()
        .code(2)
        .stderr(predicate::str::contains("cannot read absent.jj"));
}

#[test]
fn command_line_overrides_indent_and_line_ending() {
    let dir = tempfile::tempdir().unwrap();
    let mut cmd = cargo_bin_cmd!("jjformat");
    cmd.current_dir(dir.path())
        .args(["--indent", "  ", "--line-ending", "crlf"])
        .write_stdin("options{A=1;}");
    cmd.assert().success().stdout("options {\r\n  A = 1;\r\n}\r\n");
}

#[test]
fn automatic_line_ending_follows_the_source() {
    let dir = tempfile::tempdir().unwrap();
    let mut cmd = cargo_bin_cmd!("jjformat");
    cmd.current_dir(dir.path()).write_stdin("options{\r\nA=1;}");
    cmd.assert().success().stdout("options {\r\n\tA = 1;\r\n}\r\n");
}

#[test]
fn project_and_explicit_configuration_files() {
    let (dir, path) = workspace(UNFORMATTED);
    fs::write(dir.path().join("jjformat.toml"), "[formatting]\nindent_unit = \"  \"\n").unwrap();

    let mut cmd = cargo_bin_cmd!("jjformat");
    cmd.current_dir(dir.path()).arg(&path);
    cmd.assert()
        .success()
        .stdout("options {\n  A = 1;\n  B = 2;\n}\n");

    let explicit = dir.path().join("wide.toml");
    fs::write(&explicit, "[formatting]\nindent_unit = \"    \"\n").unwrap();
    let mut cmd = cargo_bin_cmd!("jjformat");
    cmd.current_dir(dir.path()).arg(&path).arg("--config").arg(&explicit);
    cmd.assert()
        .success()
        .stdout("options {\n    A = 1;\n    B = 2;\n}\n");
}

#[test]
fn bad_configuration_fails() {
    let (dir, path) = workspace(UNFORMATTED);
    let config = dir.path().join("bad.toml");
    fs::write(&config, "[formatting]\nline_ending = \"mac\"\n").unwrap();
    let mut cmd = cargo_bin_cmd!("jjformat");
    cmd.current_dir(dir.path()).arg(&path).arg("--config").arg(&config);
    cmd.assert()
        .code(2)
        .stderr(predicate::str::contains("configuration error"));
}
