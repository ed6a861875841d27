use super::commands::Role;
use super::Validator;
use crate::error::{SyntaxError, SyntaxErrorKind};
use crate::grammar::{self, Control, Predicate};

impl<'a> Validator<'a> {
    pub(super) fn validate_control(&mut self, control: Control) -> Result<(), SyntaxError> {
        match control {
            Control::If => {
                self.validate_condition()?;
                self.cursor.expect_one_of(grammar::THEN)?;
                self.validate_body()?;
                self.cursor.expect_one_of(grammar::ELSE)?;
                self.validate_body()?;
            }
            Control::While => {
                self.validate_condition()?;
                self.cursor.expect_one_of(grammar::DO)?;
                self.validate_body()?;
            }
            Control::Repeat => {
                self.validate_count(control)?;
                self.validate_body()?;
            }
            Control::For => {
                self.validate_count(control)?;
                self.cursor.expect(grammar::REPEAT_BODY)?;
                self.validate_body()?;
            }
        }
        if self.cursor.peek_is(grammar::TERMINATOR) {
            self.cursor.advance();
        }
        Ok(())
    }

    /// `not:` any number of times, then a predicate and its arguments.
    fn validate_condition(&mut self) -> Result<(), SyntaxError> {
        let mut token = self.cursor.next_token("condition")?;
        while token.is(grammar::NEGATION) {
            token = self.cursor.next_token("condition")?;
        }
        let Some(predicate) = Predicate::from_keyword(&token.text) else {
            return Err(SyntaxError::at(
                token,
                SyntaxErrorKind::UnrecognizedCondition {
                    token: token.text.clone(),
                },
            ));
        };
        self.validate_shape(predicate.keyword(), &predicate.shape(), Role::Condition)
    }

    fn validate_count(&mut self, control: Control) -> Result<(), SyntaxError> {
        let token = self.cursor.next_token("repeat count")?;
        if self.symbols.is_value(&token.text) {
            return Ok(());
        }
        Err(SyntaxError::at(
            token,
            SyntaxErrorKind::InvalidArgument {
                command: control.keyword().to_owned(),
                token: token.text.clone(),
            },
        ))
    }
}
