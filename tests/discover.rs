use std::fs;

use junit_composer::{compose_suites, discover, expand_targets};
use tempfile::TempDir;

fn reports_dir() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir(dir.path().join("nested")).unwrap();

    fs::write(
        dir.path().join("b.junit"),
        r#"<testsuite name="b" tests="2" failures="1" errors="0"/>"#,
    )
    .unwrap();
    fs::write(
        dir.path().join("nested/a.JUNIT.xml"),
        r#"<testsuites><testsuite name="a" tests="3" failures="0" errors="1"/></testsuites>"#,
    )
    .unwrap();
    fs::write(dir.path().join("c.xml"), "<unrelated/>").unwrap();
    fs::write(dir.path().join("junit.txt"), "not a report").unwrap();

    dir
}

#[test]
fn finds_reports_recursively_and_case_insensitively() {
    let dir = reports_dir();
    let root = dir.path().canonicalize().unwrap();

    assert_eq!(
        discover(dir.path()).unwrap(),
        [root.join("b.junit"), root.join("nested/a.JUNIT.xml")],
    );
}

#[test]
fn empty_directory_has_no_reports() {
    let dir = tempfile::tempdir().unwrap();
    assert!(discover(dir.path()).unwrap().is_empty());
}

#[test]
fn missing_directory_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    assert!(discover(dir.path().join("absent")).is_err());
}

#[test]
fn directory_targets_compose_in_discovery_order() {
    let dir = reports_dir();

    let targets = expand_targets([dir.path()]).unwrap();
    let report = compose_suites(&targets).unwrap();

    let b = report.find(r#"name="b""#).unwrap();
    let a = report.find(r#"name="a""#).unwrap();
    assert!(b < a);
    assert!(report.contains(r#"<testsuites tests="5" failures="1" errors="1">"#));
}
