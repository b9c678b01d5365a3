use std::num::IntErrorKind;
use std::str::FromStr;

use thiserror::Error;

use crate::dial::DIAL_SIZE;

/// Largest distance a single command may carry; keeps the unwrapped
/// destination inside `i64`.
pub const MAX_MAGNITUDE: u64 = (i64::MAX - DIAL_SIZE) as u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'L' => Some(Direction::Left),
            'R' => Some(Direction::Right),
            _ => None,
        }
    }
}

/// One rotation read from a line such as `R21` or `l67`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Command {
    pub direction: Direction,
    pub magnitude: u64,
}

#[derive(Debug, PartialEq, Error)]
pub enum ParseError {
    #[error("line too short")]
    TooShort,
    #[error("unknown direction '{0}'")]
    UnknownDirection(char),
    #[error("non-integer rotation '{0}'")]
    InvalidMagnitude(String),
    #[error("rotation '{0}' is too large")]
    MagnitudeTooLarge(String),
    #[error("line is not valid UTF-8")]
    InvalidUtf8,
}

impl Command {
    /// Signed distance of the move: positive for right, negative for left.
    ///
    /// Parsed commands never exceed `MAX_MAGNITUDE`, so the cast is lossless.
    pub fn delta(&self) -> i64 {
        match self.direction {
            Direction::Left => -(self.magnitude as i64),
            Direction::Right => self.magnitude as i64,
        }
    }
}

impl FromStr for Command {
    type Err = ParseError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut chars = line.chars();
        let first = chars.next().ok_or(ParseError::TooShort)?;
        let rest = chars.as_str();
        if rest.is_empty() {
            return Err(ParseError::TooShort);
        }

        let direction = Direction::from_char(first).ok_or(ParseError::UnknownDirection(first))?;
        // u64 parsing also accepts a leading '+', which is still non-negative.
        let magnitude = match rest.parse::<u64>() {
            Ok(n) if n <= MAX_MAGNITUDE => n,
            Ok(_) => return Err(ParseError::MagnitudeTooLarge(rest.to_string())),
            Err(err) if *err.kind() == IntErrorKind::PosOverflow => {
                return Err(ParseError::MagnitudeTooLarge(rest.to_string()))
            }
            Err(_) => return Err(ParseError::InvalidMagnitude(rest.to_string())),
        };

        Ok(Self {
            direction,
            magnitude,
        })
    }
}
