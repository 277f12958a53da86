//! Parsing of typed moves.

use derive_more::{Display, Error};
use tracing::instrument;

/// A line of player input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// Place a mark at column `x`, row `y`.
    Move {
        /// Column.
        x: usize,
        /// Row.
        y: usize,
    },
    /// Leave the session.
    Quit,
}

/// Input that could not be understood.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum InputError {
    /// Not exactly two coordinates.
    #[display("Expected two coordinates like `1 2` or `1,2`, got {found}")]
    WrongArity {
        /// Number of tokens found.
        found: usize,
    },

    /// A coordinate was not a non-negative integer.
    #[display("`{token}` is not a valid coordinate")]
    NotANumber {
        /// Offending token.
        token: String,
    },
}

/// Parses a line as a move (`x y` or `x,y`) or `quit`/`exit`.
///
/// Returns `Ok(None)` for a blank line.
#[instrument]
pub fn parse_input(line: &str) -> Result<Option<Input>, InputError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    if line.eq_ignore_ascii_case("quit") || line.eq_ignore_ascii_case("exit") {
        return Ok(Some(Input::Quit));
    }

    let (x, y) = parse_coordinates(line)?;
    Ok(Some(Input::Move { x, y }))
}

/// Parses `x y` or `x,y` into a column and row.
#[instrument]
pub fn parse_coordinates(s: &str) -> Result<(usize, usize), InputError> {
    let tokens: Vec<&str> = s
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|t| !t.is_empty())
        .collect();

    let [x, y] = tokens.as_slice() else {
        return Err(InputError::WrongArity {
            found: tokens.len(),
        });
    };

    Ok((parse_coordinate(x)?, parse_coordinate(y)?))
}

fn parse_coordinate(token: &str) -> Result<usize, InputError> {
    token.parse().map_err(|_| InputError::NotANumber {
        token: token.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_space_and_comma() {
        assert_eq!(parse_coordinates("1 2"), Ok((1, 2)));
        assert_eq!(parse_coordinates("1,2"), Ok((1, 2)));
        assert_eq!(parse_coordinates(" 0 , 2 "), Ok((0, 2)));
    }

    #[test]
    fn test_out_of_range_is_still_parsed() {
        // Bounds belong to the game, not the parser.
        assert_eq!(parse_coordinates("5 9"), Ok((5, 9)));
    }

    #[test]
    fn test_wrong_arity() {
        assert_eq!(
            parse_coordinates("1"),
            Err(InputError::WrongArity { found: 1 })
        );
        assert_eq!(
            parse_coordinates("1 2 3"),
            Err(InputError::WrongArity { found: 3 })
        );
    }

    #[test]
    fn test_negative_rejected() {
        assert_eq!(
            parse_coordinates("-1 0"),
            Err(InputError::NotANumber {
                token: "-1".to_string()
            })
        );
    }

    #[test]
    fn test_parse_input_commands() {
        assert_eq!(parse_input("   \n"), Ok(None));
        assert_eq!(parse_input("QUIT\n"), Ok(Some(Input::Quit)));
        assert_eq!(parse_input("exit"), Ok(Some(Input::Quit)));
        assert_eq!(parse_input("2,1\n"), Ok(Some(Input::Move { x: 2, y: 1 })));
    }
}
