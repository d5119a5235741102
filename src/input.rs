//! Line-oriented command parsing.
//!
//! Accepts the single-letter shortcuts (`u`, `d`, `l`, `r`), the full
//! direction words, and the ANSI arrow-key escape sequences a terminal sends
//! when the arrow keys are pressed before Enter.

use crate::engine::Direction;

/// A parsed line of player input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Move(Direction),
    Quit,
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum InputError {
    #[error("unrecognized input: {0:?}")]
    Unrecognized(String),
}

/// Parse one line of input, ignoring surrounding whitespace.
pub fn parse_command(line: &str) -> Result<Command, InputError> {
    let trimmed = line.trim();
    let cmd = match trimmed {
        "u" | "U" | "\x1b[A" => Command::Move(Direction::Up),
        "d" | "D" | "\x1b[B" => Command::Move(Direction::Down),
        "r" | "R" | "\x1b[C" => Command::Move(Direction::Right),
        "l" | "L" | "\x1b[D" => Command::Move(Direction::Left),
        "q" | "Q" => Command::Quit,
        word => match word.to_ascii_lowercase().as_str() {
            "up" => Command::Move(Direction::Up),
            "down" => Command::Move(Direction::Down),
            "right" => Command::Move(Direction::Right),
            "left" => Command::Move(Direction::Left),
            "quit" | "exit" => Command::Quit,
            _ => return Err(InputError::Unrecognized(trimmed.to_string())),
        },
    };
    Ok(cmd)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letters_and_arrows() {
        assert_eq!(parse_command("u\n"), Ok(Command::Move(Direction::Up)));
        assert_eq!(parse_command("D"), Ok(Command::Move(Direction::Down)));
        assert_eq!(parse_command("  r "), Ok(Command::Move(Direction::Right)));
        assert_eq!(parse_command("\x1b[D\n"), Ok(Command::Move(Direction::Left)));
        assert_eq!(parse_command("\x1b[A"), Ok(Command::Move(Direction::Up)));
    }

    #[test]
    fn words_any_case() {
        assert_eq!(parse_command("Left"), Ok(Command::Move(Direction::Left)));
        assert_eq!(parse_command("DOWN"), Ok(Command::Move(Direction::Down)));
        assert_eq!(parse_command("quit"), Ok(Command::Quit));
        assert_eq!(parse_command("q"), Ok(Command::Quit));
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!(
            parse_command("x"),
            Err(InputError::Unrecognized("x".to_string()))
        );
        assert!(parse_command("").is_err());
    }
}
