//! Check pipeline: read source -> tokenize -> validate.

use std::path::Path;
use tracing::debug;

use crate::error::{CheckError, SyntaxError};
use crate::lexer::{self, Token};
use crate::source::{FileSystemProvider, SourceProvider};
use crate::symbols::Summary;
use crate::validator;

/// Validate program text already in memory.
pub fn check_source(src: &str) -> Result<Summary, SyntaxError> {
    let tokens = lexer::lex(src);
    debug!(tokens = tokens.len(), "tokenized");
    validator::validate(&tokens)
}

/// Read `path` from the filesystem and validate it.
pub fn check_file(path: &Path) -> Result<Summary, CheckError> {
    check_file_with_provider(path, &FileSystemProvider)
}

pub fn check_file_with_provider(
    path: &Path,
    provider: &dyn SourceProvider,
) -> Result<Summary, CheckError> {
    let src = read(path, provider)?;
    Ok(check_source(&src)?)
}

/// Read `path` and return its normalized token stream without validating.
pub fn load_tokens(path: &Path) -> Result<Vec<Token>, CheckError> {
    let src = read(path, &FileSystemProvider)?;
    Ok(lexer::lex(&src))
}

fn read(path: &Path, provider: &dyn SourceProvider) -> Result<String, CheckError> {
    debug!(path = %path.display(), "reading source");
    provider
        .read_source(path)
        .map_err(|source| CheckError::FileAccess {
            path: path.to_owned(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SyntaxErrorKind;
    use crate::source::InMemoryProvider;

    #[test]
    fn missing_file_is_file_access() {
        let provider = InMemoryProvider::default();
        let err = check_file_with_provider(Path::new("gone.robot"), &provider).unwrap_err();
        assert!(matches!(err, CheckError::FileAccess { .. }));
    }

    #[test]
    fn syntax_errors_pass_through() {
        let provider = InMemoryProvider::default().with_file("bad.robot", "| x | [ move: x tothe: #up . ]");
        match check_file_with_provider(Path::new("bad.robot"), &provider) {
            Err(CheckError::Syntax(e)) => assert_eq!(
                e.kind,
                SyntaxErrorKind::InvalidArgument {
                    command: "move:".into(),
                    token: "#up".into()
                }
            ),
            other => panic!("expected a syntax error, got {other:?}"),
        }
    }

    #[test]
    fn valid_file_returns_summary() {
        let provider = InMemoryProvider::default()
            .with_file("ok.robot", "| a |\nproc hop :n [ jump: n . ]\n[ hop a . ]");
        let summary = check_file_with_provider(Path::new("ok.robot"), &provider).unwrap();
        assert_eq!(summary.variables, vec!["a", "n"]);
        assert_eq!(summary.procedures["hop"], vec!["n"]);
    }
}
