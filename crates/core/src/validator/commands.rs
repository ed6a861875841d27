use super::Validator;
use crate::error::{SyntaxError, SyntaxErrorKind};
use crate::grammar::{Command, Operand, Qualifier, Shape};
use crate::lexer::Token;

/// Who owns the arguments being checked. Conditions report bad qualifiers
/// and prepositions as unrecognized expressions rather than bad arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Role {
    Command,
    Condition,
}

impl Role {
    fn reject(self, owner: &str, token: &Token, value_expected: bool) -> SyntaxError {
        let kind = match self {
            Role::Condition if !value_expected => SyntaxErrorKind::UnrecognizedExpression {
                condition: owner.to_owned(),
                token: token.text.clone(),
            },
            _ => SyntaxErrorKind::InvalidArgument {
                command: owner.to_owned(),
                token: token.text.clone(),
            },
        };
        SyntaxError::at(token, kind)
    }
}

impl<'a> Validator<'a> {
    pub(super) fn validate_command(&mut self, command: Command) -> Result<(), SyntaxError> {
        self.validate_shape(command.keyword(), &command.shape(), Role::Command)?;
        self.expect_terminator()
    }

    /// Leading operand, then at most one preposition with its operand.
    pub(super) fn validate_shape(
        &mut self,
        owner: &str,
        shape: &Shape,
        role: Role,
    ) -> Result<(), SyntaxError> {
        if let Some(operand) = shape.leading {
            self.take_operand(owner, operand, role)?;
        }
        if shape.prepositions.is_empty() {
            return Ok(());
        }

        let token = if shape.preposition_required {
            self.cursor.next_token("preposition")?
        } else {
            match self.cursor.advance() {
                Some(token) => token,
                None => return Ok(()),
            }
        };
        match shape.rule_for(&token.text) {
            Some(rule) => self.take_operand(owner, rule.operand, role),
            None if !shape.preposition_required => {
                // Read one past the command; hand it back to the terminator check.
                self.cursor.retreat();
                Ok(())
            }
            None => Err(role.reject(owner, token, false)),
        }
    }

    fn take_operand(&mut self, owner: &str, operand: Operand, role: Role) -> Result<(), SyntaxError> {
        let token = self.cursor.next_token("argument")?;
        let accepted = match operand {
            Operand::Value => self.symbols.is_value(&token.text),
            Operand::Qualifier(set) => {
                Qualifier::from_keyword(&token.text).is_some_and(|q| set.contains(&q))
            }
        };
        if accepted {
            Ok(())
        } else {
            Err(role.reject(owner, token, operand == Operand::Value))
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::error::SyntaxErrorKind;
    use crate::lexer::lex;
    use crate::validator::validate;

    fn ok(src: &str) {
        if let Err(e) = validate(&lex(src)) {
            panic!("{src:?} should validate, got {e}");
        }
    }

    fn invalid_argument(src: &str) -> (String, String) {
        match validate(&lex(src)).map_err(|e| e.kind) {
            Err(SyntaxErrorKind::InvalidArgument { command, token }) => (command, token),
            other => panic!("{src:?}: expected InvalidArgument, got {other:?}"),
        }
    }

    #[test]
    fn every_command_in_its_canonical_form() {
        ok("| n | [
            move: n tothe: #front .
            move: 2 indir: #north .
            move: 1 .
            jump: n tothe: #back .
            jump: 3 indir: #west .
            jump: 1 .
            turn: #around .
            face: #east .
            put: n oftype: #chips .
            pick: 2 oftype: #balloons .
            goto: 1 with: n .
            nop .
            putchips: 1 andballoons: 2 .
            pickchips: n andballoons: n .
            putballoons: 1 andchips: 2 .
            pickballoons: 3 andchips: 4
        ]");
    }

    #[test]
    fn relative_direction_after_indir_is_rejected() {
        assert_eq!(
            invalid_argument("[ move: 1 indir: #front . ]"),
            ("move:".into(), "#front".into())
        );
    }

    #[test]
    fn compass_direction_after_tothe_is_rejected() {
        assert_eq!(
            invalid_argument("[ jump: 1 tothe: #north . ]"),
            ("jump:".into(), "#north".into())
        );
    }

    #[test]
    fn unknown_qualifier_is_rejected() {
        assert_eq!(
            invalid_argument("| x | [ move: x tothe: #up . ]"),
            ("move:".into(), "#up".into())
        );
    }

    #[test]
    fn undeclared_magnitude_is_rejected() {
        assert_eq!(
            invalid_argument("[ move: steps . ]"),
            ("move:".into(), "steps".into())
        );
    }

    #[test]
    fn put_requires_object_type() {
        assert_eq!(
            invalid_argument("[ put: 1 tothe: #front . ]"),
            ("put:".into(), "tothe:".into())
        );
        assert_eq!(
            invalid_argument("[ pick: 1 oftype: #north . ]"),
            ("pick:".into(), "#north".into())
        );
    }

    #[test]
    fn turn_rejects_compass_and_face_rejects_around() {
        assert_eq!(
            invalid_argument("[ turn: #north . ]"),
            ("turn:".into(), "#north".into())
        );
        assert_eq!(
            invalid_argument("[ face: #around . ]"),
            ("face:".into(), "#around".into())
        );
    }

    #[test]
    fn goto_second_value_must_be_declared() {
        assert_eq!(
            invalid_argument("[ goto: 1 with: y . ]"),
            ("goto:".into(), "y".into())
        );
    }

    #[test]
    fn move_without_direction_stops_before_next_statement() {
        ok("[ move: 1 . turn: #left ]");
        ok("[ move: 1 ]");
    }

    #[test]
    fn move_without_terminator_runs_into_next_command() {
        let err = validate(&lex("[ move: 1 turn: #left . ]")).unwrap_err();
        assert_eq!(
            err.kind,
            SyntaxErrorKind::Expected {
                expected: ".".into(),
                found: "turn:".into()
            }
        );
    }

    #[test]
    fn nop_takes_no_arguments() {
        let err = validate(&lex("[ nop 1 . ]")).unwrap_err();
        assert_eq!(
            err.kind,
            SyntaxErrorKind::Expected {
                expected: ".".into(),
                found: "1".into()
            }
        );
    }

    #[test]
    fn command_cut_off_by_end_of_input() {
        let err = validate(&lex("[ put: 1")).unwrap_err();
        assert!(matches!(err.kind, SyntaxErrorKind::UnexpectedEof { .. }));
    }
}
