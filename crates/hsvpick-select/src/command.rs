//! Console numeric entry
//!
//! The host console layer collects digit strings and hands them over here
//! once the user presses Enter. A command either parses completely and is
//! applied through the session's clamping setters, or it is discarded as a
//! whole - a malformed triple never updates any field.

use crate::error::{SelectError, SelectResult};
use crate::session::Session;

/// A single editable field of the color range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Hue,
    Sat,
    Val,
    RangeHue,
    RangeSat,
    RangeVal,
}

/// A parsed console edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Overwrite one field.
    SetField(Field, i32),
    /// Overwrite the full H,S,V center.
    SetColor(i32, i32, i32),
    /// Overwrite all three tolerances.
    SetRange(i32, i32, i32),
}

/// Parse a single integer from console text.
pub fn parse_scalar(text: &str) -> SelectResult<i32> {
    let tokens: Vec<&str> = text.split_whitespace().collect();
    if tokens.len() != 1 {
        return Err(SelectError::WrongTokenCount {
            expected: 1,
            got: tokens.len(),
        });
    }
    parse_token(tokens[0])
}

/// Parse exactly three whitespace-separated integers from console text.
///
/// Any other token count discards the pending edit.
pub fn parse_triple(text: &str) -> SelectResult<(i32, i32, i32)> {
    let tokens: Vec<&str> = text.split_whitespace().collect();
    if tokens.len() != 3 {
        return Err(SelectError::WrongTokenCount {
            expected: 3,
            got: tokens.len(),
        });
    }
    Ok((
        parse_token(tokens[0])?,
        parse_token(tokens[1])?,
        parse_token(tokens[2])?,
    ))
}

fn parse_token(token: &str) -> SelectResult<i32> {
    token
        .parse::<i32>()
        .map_err(|_| SelectError::InvalidNumber(token.to_string()))
}

/// Parse a console entry for one field.
pub fn parse_field_command(field: Field, text: &str) -> SelectResult<Command> {
    Ok(Command::SetField(field, parse_scalar(text)?))
}

/// Parse a console entry for the full center color.
pub fn parse_color_command(text: &str) -> SelectResult<Command> {
    let (h, s, v) = parse_triple(text)?;
    Ok(Command::SetColor(h, s, v))
}

/// Parse a console entry for the full tolerance triple.
pub fn parse_range_command(text: &str) -> SelectResult<Command> {
    let (h, s, v) = parse_triple(text)?;
    Ok(Command::SetRange(h, s, v))
}

impl Session {
    /// Apply a parsed console command.
    ///
    /// Pushes the pre-mutation range to the undo history first; values are
    /// clamped silently by the field setters. Any accumulation in progress
    /// ends.
    pub fn apply_command(&mut self, command: Command) {
        self.push_history();
        let range = self.current_mut();
        match command {
            Command::SetField(Field::Hue, value) => range.set_h(value),
            Command::SetField(Field::Sat, value) => range.set_s(value),
            Command::SetField(Field::Val, value) => range.set_v(value),
            Command::SetField(Field::RangeHue, value) => range.set_range_h(value),
            Command::SetField(Field::RangeSat, value) => range.set_range_s(value),
            Command::SetField(Field::RangeVal, value) => range.set_range_v(value),
            Command::SetColor(h, s, v) => {
                range.set_h(h);
                range.set_s(s);
                range.set_v(v);
            }
            Command::SetRange(h, s, v) => {
                range.set_range_h(h);
                range.set_range_s(s);
                range.set_range_v(v);
            }
        }
        self.end_accumulation();
        log::debug!("applied console command {command:?}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hsvpick_core::ColorRange;

    #[test]
    fn test_parse_scalar() {
        assert_eq!(parse_scalar("42").unwrap(), 42);
        assert_eq!(parse_scalar("  7 ").unwrap(), 7);
        assert!(matches!(
            parse_scalar(""),
            Err(SelectError::WrongTokenCount { expected: 1, got: 0 })
        ));
        assert!(matches!(
            parse_scalar("1 2"),
            Err(SelectError::WrongTokenCount { expected: 1, got: 2 })
        ));
        assert!(matches!(
            parse_scalar("abc"),
            Err(SelectError::InvalidNumber(_))
        ));
    }

    #[test]
    fn test_parse_triple() {
        assert_eq!(parse_triple("90 240 200").unwrap(), (90, 240, 200));
        assert!(matches!(
            parse_triple("90 240"),
            Err(SelectError::WrongTokenCount { expected: 3, got: 2 })
        ));
        assert!(matches!(
            parse_triple("90 240 200 7"),
            Err(SelectError::WrongTokenCount { expected: 3, got: 4 })
        ));
        assert!(matches!(
            parse_triple("90 x 200"),
            Err(SelectError::InvalidNumber(_))
        ));
    }

    #[test]
    fn test_malformed_input_leaves_session_untouched() {
        let mut session = Session::new();
        let before = *session.current();
        // Parsing fails, so no command exists to apply - nothing changed,
        // not even partially.
        assert!(parse_color_command("12 34").is_err());
        assert_eq!(*session.current(), before);
        assert_eq!(session.history_len(), 0);
    }

    #[test]
    fn test_apply_set_color() {
        let mut session = Session::new();
        let command = parse_color_command("10 20 30").unwrap();
        session.apply_command(command);
        let c = session.current();
        assert_eq!((c.h(), c.s(), c.v()), (10, 20, 30));
        // Tolerances untouched
        assert_eq!(c.range_h(), 10);
        assert_eq!(session.history_len(), 1);
    }

    #[test]
    fn test_apply_set_range_clamps() {
        let mut session = Session::new();
        let command = parse_range_command("500 300 -2").unwrap();
        session.apply_command(command);
        let c = session.current();
        assert_eq!(
            (c.range_h(), c.range_s(), c.range_v()),
            (179, 255, 0)
        );
    }

    #[test]
    fn test_apply_single_field() {
        let mut session = Session::new();
        session.apply_command(parse_field_command(Field::Sat, "99").unwrap());
        assert_eq!(session.current().s(), 99);
        session.undo();
        assert_eq!(*session.current(), ColorRange::default());
    }
}
