//! Recursive-descent syntax validator.
//! One method per production; each consumes its tokens and returns `Ok(())`
//! or the first violation. Nothing is built: the only state is the cursor
//! and the symbol table.
use tracing::{debug, trace};

use crate::cursor::Cursor;
use crate::error::{SyntaxError, SyntaxErrorKind};
use crate::grammar::{self, Command, Control};
use crate::lexer::Token;
use crate::symbols::{Param, Signature, Summary, SymbolTable};

mod commands;
mod control;

/// Maximum nesting of control-structure bodies.
const MAX_DEPTH: usize = 128;

// ──────────────────────────────────────────────
// Validator
// ──────────────────────────────────────────────

struct Validator<'a> {
    cursor: Cursor<'a>,
    symbols: SymbolTable,
    /// Control-structure bodies currently open.
    depth: usize,
}

/// Parameter-list state while reading a procedure header.
enum Awaiting {
    /// Between parameters: a marker or `[` comes next.
    Marker,
    /// A parameter name comes next, preceded by this call-site marker.
    Name(Option<String>),
}

impl<'a> Validator<'a> {
    fn new(tokens: &'a [Token]) -> Self {
        Validator {
            cursor: Cursor::new(tokens),
            symbols: SymbolTable::new(),
            depth: 0,
        }
    }

    fn validate_program(&mut self) -> Result<(), SyntaxError> {
        while let Some(token) = self.cursor.advance() {
            match token.text.as_str() {
                _ if token.is_numeric() => continue,
                grammar::DECL_BAR => {
                    debug!(line = token.line, "declaration block");
                    self.validate_declarations()?;
                }
                grammar::PROC => self.validate_procedure()?,
                grammar::OPEN_BLOCK => {
                    debug!(line = token.line, "main block");
                    self.validate_block()?;
                    self.cursor.expect(grammar::CLOSE_BLOCK)?;
                }
                other => {
                    return Err(SyntaxError::at(
                        token,
                        SyntaxErrorKind::UnexpectedToken {
                            token: other.to_owned(),
                        },
                    ))
                }
            }
        }
        Ok(())
    }

    /// Names up to the closing `|`; the opening bar is already consumed.
    fn validate_declarations(&mut self) -> Result<(), SyntaxError> {
        loop {
            let token = self.cursor.next_token("closing '|'")?;
            match token.text.as_str() {
                grammar::DECL_BAR => return Ok(()),
                grammar::SEPARATOR => continue,
                name => self.symbols.declare_variable(name),
            }
        }
    }

    fn validate_procedure(&mut self) -> Result<(), SyntaxError> {
        let name_token = self.cursor.next_token("procedure name")?;
        let name = name_token.text.as_str();
        if grammar::is_structural(name) {
            return Err(SyntaxError::at(
                name_token,
                SyntaxErrorKind::Expected {
                    expected: "procedure name".to_owned(),
                    found: name.to_owned(),
                },
            ));
        }

        let signature = self.validate_parameters(name)?;
        debug!(
            line = name_token.line,
            procedure = name,
            arity = signature.arity(),
            "procedure declared"
        );
        self.symbols.define_procedure(name, signature);

        self.cursor.expect(grammar::OPEN_BLOCK)?;
        self.validate_block()?;
        self.cursor.expect(grammar::CLOSE_BLOCK)?;
        Ok(())
    }

    /// Reads `marker name` pairs up to (not including) the body's `[`.
    /// A keyword-style procedure name (`putcb:`) is itself the marker of the
    /// first parameter.
    fn validate_parameters(&mut self, procedure: &str) -> Result<Signature, SyntaxError> {
        let mut params = Vec::new();
        let mut awaiting = if procedure.ends_with(':') {
            Awaiting::Name(None)
        } else {
            Awaiting::Marker
        };

        loop {
            let Some(token) = self.cursor.peek() else {
                return Err(self.cursor.eof("procedure body '['"));
            };
            let invalid = || {
                SyntaxError::at(
                    token,
                    SyntaxErrorKind::InvalidParameter {
                        procedure: procedure.to_owned(),
                        token: token.text.clone(),
                    },
                )
            };

            if token.is(grammar::OPEN_BLOCK) {
                // A keyword name with no parameters at all is fine; a
                // dangling marker is not.
                match awaiting {
                    Awaiting::Name(_) if !params.is_empty() || !procedure.ends_with(':') => {
                        return Err(invalid());
                    }
                    _ => break,
                }
            }
            self.cursor.advance();

            awaiting = match awaiting {
                Awaiting::Name(marker) => {
                    if token.text.ends_with(':') || grammar::is_structural(&token.text) {
                        return Err(invalid());
                    }
                    params.push(Param {
                        marker,
                        name: token.text.clone(),
                    });
                    Awaiting::Marker
                }
                Awaiting::Marker if token.is(grammar::PARAM_MARKER) => Awaiting::Name(None),
                Awaiting::Marker if token.text.ends_with(':') => {
                    Awaiting::Name(Some(token.text.clone()))
                }
                Awaiting::Marker => return Err(invalid()),
            };
        }

        Ok(Signature { params })
    }

    /// Statements up to a `]`, which is left for the caller to consume.
    fn validate_block(&mut self) -> Result<(), SyntaxError> {
        loop {
            match self.cursor.peek() {
                None => return Err(self.cursor.eof("closing ']'")),
                Some(token) if token.is(grammar::CLOSE_BLOCK) => return Ok(()),
                Some(_) => self.validate_statement()?,
            }
        }
    }

    /// `[ block ]` as the body of a control structure branch.
    /// Fails with `NestingTooDeep` past `MAX_DEPTH` open bodies.
    fn validate_body(&mut self) -> Result<(), SyntaxError> {
        let open = self.cursor.expect(grammar::OPEN_BLOCK)?;
        if self.depth >= MAX_DEPTH {
            return Err(SyntaxError::at(
                open,
                SyntaxErrorKind::NestingTooDeep { limit: MAX_DEPTH },
            ));
        }
        self.depth += 1;
        self.validate_block()?;
        self.cursor.expect(grammar::CLOSE_BLOCK)?;
        self.depth -= 1;
        Ok(())
    }

    fn validate_statement(&mut self) -> Result<(), SyntaxError> {
        let token = self.cursor.next_token("statement")?;
        let word = token.text.as_str();
        trace!(line = token.line, token = word, "statement");

        if self.symbols.is_variable(word) {
            return self.validate_assignment(token);
        }
        if let Some(signature) = self.symbols.procedure(word).cloned() {
            return self.validate_call(token, &signature);
        }
        if let Some(command) = Command::from_keyword(word) {
            return self.validate_command(command);
        }
        if let Some(control) = Control::from_keyword(word) {
            return self.validate_control(control);
        }
        if token.is(grammar::DECL_BAR) {
            return self.validate_declarations();
        }
        Err(SyntaxError::at(
            token,
            SyntaxErrorKind::UnknownInstruction {
                token: word.to_owned(),
            },
        ))
    }

    fn validate_assignment(&mut self, target: &Token) -> Result<(), SyntaxError> {
        self.cursor.expect(grammar::ASSIGN)?;
        let value = self.cursor.next_token("assigned value")?;
        if !self.symbols.is_value(&value.text) {
            return Err(SyntaxError::at(
                value,
                SyntaxErrorKind::InvalidAssignment {
                    variable: target.text.clone(),
                    value: value.text.clone(),
                },
            ));
        }
        self.expect_terminator()
    }

    /// Call sites repeat keyword markers and give one value per parameter.
    fn validate_call(&mut self, name: &Token, signature: &Signature) -> Result<(), SyntaxError> {
        for param in &signature.params {
            if let Some(marker) = &param.marker {
                self.cursor.expect(marker)?;
            }
            let arg = self.cursor.next_token("argument")?;
            if !self.symbols.is_value(&arg.text) {
                return Err(SyntaxError::at(
                    arg,
                    SyntaxErrorKind::InvalidArgument {
                        command: name.text.clone(),
                        token: arg.text.clone(),
                    },
                ));
            }
        }
        self.expect_terminator()
    }

    /// A statement ends at `.`, or at the block's `]` without one. The `]`
    /// belongs to the enclosing block, so it is pushed back.
    fn expect_terminator(&mut self) -> Result<(), SyntaxError> {
        match self.cursor.advance() {
            Some(token) if token.is(grammar::TERMINATOR) => Ok(()),
            Some(token) if token.is(grammar::CLOSE_BLOCK) => {
                self.cursor.retreat();
                Ok(())
            }
            Some(token) => Err(SyntaxError::at(
                token,
                SyntaxErrorKind::Expected {
                    expected: grammar::TERMINATOR.to_owned(),
                    found: token.text.clone(),
                },
            )),
            None => Err(self.cursor.eof("'.'")),
        }
    }
}

/// Validate a token stream as a complete program.
///
/// On success every token has been consumed; the returned [`Summary`] lists
/// what was declared.
pub fn validate(tokens: &[Token]) -> Result<Summary, SyntaxError> {
    let mut v = Validator::new(tokens);
    v.validate_program()?;
    let summary = v.symbols.summary(v.cursor.position());
    debug!(
        tokens = summary.tokens,
        variables = summary.variables.len(),
        procedures = summary.procedures.len(),
        "syntax correct"
    );
    Ok(summary)
}

// ──────────────────────────────────────────────
// Tests
// ──────────────────────────────────────────────
