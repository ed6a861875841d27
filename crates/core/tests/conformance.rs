//! Conformance suite for the syntax validator.
//!
//! - `conformance/positive/<name>.robot` -- must validate and consume every token
//! - `conformance/negative/<name>.robot` -- must fail as described by
//!   `<name>.expected-error.json` (`kind`, `line`, offending `token`)

use std::path::{Path, PathBuf};

use robocheck_core::{check_file, lexer, CheckError};

fn conformance_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../../conformance")
}

fn collect_sources(dir: &Path) -> Vec<PathBuf> {
    let mut paths: Vec<_> = std::fs::read_dir(dir)
        .unwrap_or_else(|e| panic!("cannot list {}: {}", dir.display(), e))
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| p.extension().is_some_and(|e| e == "robot"))
        .collect();
    paths.sort();
    paths
}

#[test]
fn positive_programs_validate() {
    let sources = collect_sources(&conformance_root().join("positive"));
    assert!(!sources.is_empty(), "no positive fixtures found");

    let mut failures = Vec::new();
    for path in &sources {
        match check_file(path) {
            Ok(summary) => {
                let src = std::fs::read_to_string(path).unwrap();
                let expected = lexer::lex(&src).len();
                if summary.tokens != expected {
                    failures.push(format!(
                        "{}: consumed {} of {} tokens",
                        path.display(),
                        summary.tokens,
                        expected
                    ));
                }
            }
            Err(e) => failures.push(format!("{}: {}", path.display(), e)),
        }
    }
    assert!(failures.is_empty(), "positive failures:\n{}", failures.join("\n"));
}

#[test]
fn negative_programs_fail_as_expected() {
    let sources = collect_sources(&conformance_root().join("negative"));
    assert!(!sources.is_empty(), "no negative fixtures found");

    let mut failures = Vec::new();
    for path in &sources {
        let expected_path = path.with_extension("expected-error.json");
        let expected_str = std::fs::read_to_string(&expected_path)
            .unwrap_or_else(|e| panic!("missing {}: {}", expected_path.display(), e));
        let expected: serde_json::Value = serde_json::from_str(&expected_str)
            .unwrap_or_else(|e| panic!("invalid JSON in {}: {}", expected_path.display(), e));

        let err = match check_file(path) {
            Ok(_) => {
                failures.push(format!("{}: validated but should fail", path.display()));
                continue;
            }
            Err(CheckError::Syntax(e)) => e,
            Err(other) => panic!("{}: {}", path.display(), other),
        };

        let actual = err.to_json_value();
        let token = err.kind.offending_token();
        let matches = actual["kind"] == expected["kind"]
            && actual["line"] == expected["line"]
            && token == expected["token"].as_str();
        if !matches {
            failures.push(format!(
                "{}: expected {} but got {} ({:?})",
                path.display(),
                expected,
                actual,
                token
            ));
        }
    }
    assert!(failures.is_empty(), "negative failures:\n{}", failures.join("\n"));
}

#[test]
fn validation_is_deterministic() {
    for path in collect_sources(&conformance_root().join("negative")) {
        let first = check_file(&path).map_err(|e| e.to_string());
        let second = check_file(&path).map_err(|e| e.to_string());
        assert_eq!(first, second, "{}", path.display());
    }
}
