use crate::command::{Command, Direction};

/// Number of positions on the dial, 0..=99.
pub const DIAL_SIZE: i64 = 100;

/// Where the needle points before any command is applied.
pub const START_POSITION: i64 = 50;

// Only the distance within one lap moves the needle, so any u64 is safe here.
fn lap_remainder(n: u64) -> i64 {
    (n % DIAL_SIZE as u64) as i64
}

pub fn right_turn(position: i64, n: u64) -> i64 {
    (position + lap_remainder(n)).rem_euclid(DIAL_SIZE)
}

pub fn left_turn(position: i64, n: u64) -> i64 {
    (position - lap_remainder(n)).rem_euclid(DIAL_SIZE)
}

/// Counts how many times a move of `delta` from `position` passes the 0 mark.
///
/// The dial is unrolled onto the number line in buckets of `DIAL_SIZE`; each
/// bucket boundary between the start and the unwrapped destination is one
/// crossing. Moving left, both ends shift down by one so that leaving 0 does
/// not count while landing on 0 does.
pub fn wraps(position: i64, delta: i64) -> u64 {
    let target = position + delta;
    let clicks = if delta > 0 {
        target.div_euclid(DIAL_SIZE) - position.div_euclid(DIAL_SIZE)
    } else {
        (position - 1).div_euclid(DIAL_SIZE) - (target - 1).div_euclid(DIAL_SIZE)
    };
    clicks.unsigned_abs()
}

/// Outcome of applying one command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub position: i64,
    pub crossings: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dial {
    position: i64,
}

impl Default for Dial {
    fn default() -> Self {
        Self {
            position: START_POSITION,
        }
    }
}

impl Dial {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts the needle at `position`, taken modulo the dial size.
    pub fn at(position: i64) -> Self {
        Self {
            position: position.rem_euclid(DIAL_SIZE),
        }
    }

    pub fn position(&self) -> i64 {
        self.position
    }

    pub fn apply(&mut self, cmd: &Command) -> Step {
        // crossings depend on where the needle was before the move
        let crossings = wraps(self.position, cmd.delta());
        self.position = match cmd.direction {
            Direction::Left => left_turn(self.position, cmd.magnitude),
            Direction::Right => right_turn(self.position, cmd.magnitude),
        };

        Step {
            position: self.position,
            crossings,
        }
    }
}
