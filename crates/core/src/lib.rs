//! robocheck-core: syntax validator for the robot-control language.
//!
//! Source text is tokenized ([`lexer`]) and walked top-down by a
//! recursive-descent validator that consults static grammar tables
//! ([`grammar`]) and a flat symbol table ([`symbols`]). The first violated
//! rule ends the pass; nothing is built or executed.
//!
//! # Public API
//!
//! - [`check_source()`] -- validate text in memory
//! - [`check_file()`] -- read a file and validate it
//! - [`SyntaxError`] / [`CheckError`] -- failure types
//! - [`Summary`] -- what a successful pass declared

pub mod check;
pub mod cursor;
pub mod error;
pub mod grammar;
pub mod lexer;
pub mod source;
pub mod symbols;
pub mod validator;

// ── Convenience re-exports ───────────────────────────────────────────

pub use check::{check_file, check_file_with_provider, check_source, load_tokens};
pub use error::{CheckError, SyntaxError, SyntaxErrorKind};
pub use lexer::Token;
pub use symbols::Summary;
