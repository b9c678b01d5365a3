//! Circular dial driven by `L`/`R` rotation commands, counting zero landings and crossings.

pub mod command;
pub mod dial;
pub mod interpreter;
