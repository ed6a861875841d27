use serde::Serialize;
use serde_json::{json, Value};
use std::path::PathBuf;

use crate::lexer::Token;

/// What went wrong at the offending token. One variant per grammar rule
/// family; the first violation aborts the pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SyntaxErrorKind {
    /// A top-level token matched none of `|`, `proc`, `[` or a line number.
    #[error("unexpected token '{token}'")]
    UnexpectedToken { token: String },

    /// The token stream ended while a production still needed input.
    #[error("unexpected end of input, expected {expected}")]
    UnexpectedEof { expected: String },

    /// A literal required by the grammar was not the next token.
    #[error("expected '{expected}', found '{found}'")]
    Expected { expected: String, found: String },

    /// A command, call or predicate argument failed its type or membership check.
    #[error("invalid argument '{token}' in '{command}'")]
    InvalidArgument { command: String, token: String },

    /// The right-hand side of `:=` is neither a declared name nor a number.
    #[error("invalid value '{value}' assigned to '{variable}'")]
    InvalidAssignment { variable: String, value: String },

    /// A statement started with a token that is not a variable, procedure,
    /// command, control keyword or declaration.
    #[error("unknown instruction '{token}'")]
    UnknownInstruction { token: String },

    #[error("unrecognized condition '{token}'")]
    UnrecognizedCondition { token: String },

    #[error("unrecognized expression '{token}' in condition '{condition}'")]
    UnrecognizedExpression { condition: String, token: String },

    /// A procedure parameter list that is not a run of `marker name` pairs.
    #[error("invalid parameter '{token}' in declaration of '{procedure}'")]
    InvalidParameter { procedure: String, token: String },

    /// Control-structure bodies nested past the validator's depth limit.
    #[error("blocks nested deeper than {limit} levels")]
    NestingTooDeep { limit: usize },
}

impl SyntaxErrorKind {
    /// The token the error is about, if it names one.
    pub fn offending_token(&self) -> Option<&str> {
        match self {
            SyntaxErrorKind::UnexpectedEof { .. } | SyntaxErrorKind::NestingTooDeep { .. } => None,
            SyntaxErrorKind::Expected { found, .. } => Some(found),
            SyntaxErrorKind::InvalidAssignment { value, .. } => Some(value),
            SyntaxErrorKind::UnexpectedToken { token }
            | SyntaxErrorKind::InvalidArgument { token, .. }
            | SyntaxErrorKind::UnknownInstruction { token }
            | SyntaxErrorKind::UnrecognizedCondition { token }
            | SyntaxErrorKind::UnrecognizedExpression { token, .. }
            | SyntaxErrorKind::InvalidParameter { token, .. } => Some(token),
        }
    }
}

/// A syntax error located at a source line.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("line {line}: {kind}")]
pub struct SyntaxError {
    pub kind: SyntaxErrorKind,
    pub line: u32,
}

impl SyntaxError {
    pub fn new(kind: SyntaxErrorKind, line: u32) -> Self {
        SyntaxError { kind, line }
    }

    /// Error reported against the line of `token`.
    pub fn at(token: &Token, kind: SyntaxErrorKind) -> Self {
        SyntaxError::new(kind, token.line)
    }

    /// Serialize to a flat JSON object: the kind-specific fields plus
    /// `line` and the rendered `message`.
    pub fn to_json_value(&self) -> Value {
        let mut value = serde_json::to_value(&self.kind).unwrap_or_else(|_| json!({}));
        if let Value::Object(map) = &mut value {
            map.insert("line".to_owned(), json!(self.line));
            map.insert("message".to_owned(), json!(self.kind.to_string()));
        }
        value
    }
}

/// Top-level failure of a check: either the source could not be obtained
/// or it was read and is syntactically invalid.
#[derive(Debug, thiserror::Error)]
pub enum CheckError {
    #[error("cannot read '{}': {source}", .path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Syntax(#[from] SyntaxError),
}

impl CheckError {
    pub fn to_json_value(&self) -> Value {
        match self {
            CheckError::FileAccess { path, .. } => json!({
                "kind": "file_access",
                "path": path.display().to_string(),
                "message": self.to_string(),
            }),
            CheckError::Syntax(e) => e.to_json_value(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_line_and_token() {
        let e = SyntaxError::new(
            SyntaxErrorKind::InvalidArgument {
                command: "move:".into(),
                token: "#up".into(),
            },
            3,
        );
        assert_eq!(e.to_string(), "line 3: invalid argument '#up' in 'move:'");
    }

    #[test]
    fn json_value_is_flat_and_tagged() {
        let e = SyntaxError::new(
            SyntaxErrorKind::Expected {
                expected: "]".into(),
                found: ".".into(),
            },
            7,
        );
        let v = e.to_json_value();
        assert_eq!(v["kind"], "expected");
        assert_eq!(v["expected"], "]");
        assert_eq!(v["found"], ".");
        assert_eq!(v["line"], 7);
        assert_eq!(v["message"], "expected ']', found '.'");
    }

    #[test]
    fn eof_names_no_token() {
        let kind = SyntaxErrorKind::UnexpectedEof {
            expected: "']'".into(),
        };
        assert_eq!(kind.offending_token(), None);
    }

    #[test]
    fn nesting_limit_json_carries_limit() {
        let v = SyntaxError::new(SyntaxErrorKind::NestingTooDeep { limit: 128 }, 4).to_json_value();
        assert_eq!(v["kind"], "nesting_too_deep");
        assert_eq!(v["limit"], 128);
        assert_eq!(v["message"], "blocks nested deeper than 128 levels");
    }

    #[test]
    fn file_access_json_carries_path() {
        let e = CheckError::FileAccess {
            path: PathBuf::from("missing.robot"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        let v = e.to_json_value();
        assert_eq!(v["kind"], "file_access");
        assert_eq!(v["path"], "missing.robot");
        assert!(v["message"].as_str().unwrap().contains("missing.robot"));
    }
}
