use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use std::time::{SystemTime, UNIX_EPOCH};

struct TestDir {
    path: PathBuf,
}

impl TestDir {
    fn new(tag: &str) -> Self {
        let ts = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0, |d| d.as_nanos());
        let path =
            std::env::temp_dir().join(format!("glyphplot_cli_{tag}_{}_{}", std::process::id(), ts));
        fs::create_dir_all(&path).expect("create temp test dir");
        Self { path }
    }
}

impl Drop for TestDir {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.path);
    }
}

fn run_glyphplot(args: &[&str], cwd: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_glyphplot"))
        .args(args)
        .current_dir(cwd)
        .output()
        .expect("run glyphplot")
}

#[test]
fn empty_font_dir_fails_with_message() {
    let dir = TestDir::new("empty_dir");
    let fonts = dir.path.join("fonts");
    fs::create_dir_all(&fonts).expect("create fonts dir");

    let output = run_glyphplot(
        &["SomeFamily", "--font-dir", fonts.to_str().expect("utf8 path")],
        &dir.path,
    );

    assert!(!output.status.success(), "expected failure: {output:?}");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("no fonts found"),
        "expected empty-catalog message, got: {stderr}"
    );
    assert!(
        !dir.path.join("out.txt").exists(),
        "no output file should be written on failure"
    );
}

#[test]
fn missing_font_dir_warns_then_fails() {
    let dir = TestDir::new("missing_dir");
    let missing = dir.path.join("does-not-exist");

    let output = run_glyphplot(
        &["SomeFamily", "--font-dir", missing.to_str().expect("utf8 path")],
        &dir.path,
    );

    assert!(!output.status.success(), "expected failure: {output:?}");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Warning: cannot read font directory"),
        "expected scan warning, got: {stderr}"
    );
}

#[test]
fn unknown_family_reports_not_found() {
    let dir = TestDir::new("unknown_family");
    let fonts = dir.path.join("fonts");
    fs::create_dir_all(&fonts).expect("create fonts dir");
    // A file with a font extension but junk content: loaded with a warning,
    // never registered, so the family cannot resolve.
    fs::write(fonts.join("junk.ttf"), b"junk").expect("write junk font");

    let output = run_glyphplot(
        &["JunkFamily", "--font-dir", fonts.to_str().expect("utf8 path")],
        &dir.path,
    );

    assert!(!output.status.success(), "expected failure: {output:?}");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Warning: failed to load font"),
        "expected load warning, got: {stderr}"
    );
    assert!(
        stderr.contains("no fonts found"),
        "catalog stays empty after a failed load, got: {stderr}"
    );
}
