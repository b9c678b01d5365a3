use std::io::BufRead;

use thiserror::Error;
use tracing::{debug, trace, warn};

use crate::command::{Command, ParseError};
use crate::dial::{Dial, Step, DIAL_SIZE};

#[derive(Debug, PartialEq, Error)]
pub enum RuntimeError {
    #[error("io err: {0}")]
    Io(String),
}

/// Totals reported once the input is exhausted.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Counters {
    /// Commands that left the needle exactly on 0.
    pub zero_landings: u64,
    /// Times the needle passed 0, counting every lap.
    pub total_crossings: u64,
}

#[derive(Debug, Default)]
pub struct Interpreter {
    dial: Dial,
    counters: Counters,
}

impl Interpreter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_dial(dial: Dial) -> Self {
        Self {
            dial,
            counters: Counters::default(),
        }
    }

    pub fn dial(&self) -> &Dial {
        &self.dial
    }

    pub fn counters(&self) -> Counters {
        self.counters
    }

    /// Applies a single input line.
    ///
    /// Returns `Ok(None)` for lines that are ignored outright (blank or a
    /// lone character). A malformed command leaves the dial and the counters
    /// untouched.
    pub fn execute_line(&mut self, line: &str) -> Result<Option<Step>, ParseError> {
        let line = line.trim();
        let cmd = match line.parse::<Command>() {
            Ok(cmd) => cmd,
            Err(ParseError::TooShort) => return Ok(None),
            Err(err) => return Err(err),
        };

        let step = self.dial.apply(&cmd);
        self.counters.total_crossings += step.crossings;
        if step.position == 0 {
            self.counters.zero_landings += 1;
        }
        trace!(line, position = step.position, crossings = step.crossings, "applied");

        Ok(Some(step))
    }

    /// Runs every line of `read` through the dial and returns the final totals.
    pub fn execute(mut self, read: &mut dyn BufRead) -> Result<Counters, RuntimeError> {
        debug!(
            start = self.dial.position(),
            size = DIAL_SIZE,
            "starting dial"
        );

        // Lines are read as bytes so a stray non-UTF-8 line is skipped, not fatal.
        let mut buf = Vec::new();
        let mut lineno = 0usize;
        loop {
            buf.clear();
            let n = read
                .read_until(b'\n', &mut buf)
                .map_err(|err| RuntimeError::Io(err.to_string()))?;
            if n == 0 {
                break;
            }
            lineno += 1;

            let result = std::str::from_utf8(&buf)
                .map_err(|_| ParseError::InvalidUtf8)
                .and_then(|line| self.execute_line(line));
            if let Err(err) = result {
                let line = String::from_utf8_lossy(&buf);
                warn!(lineno, line = line.trim(), "skipping malformed line: {err}");
            }
        }

        Ok(self.counters)
    }
}
