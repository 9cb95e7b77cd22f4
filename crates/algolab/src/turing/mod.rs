//! Two-tape Turing machine interpreter.
//!
//! Machines are described by a YAML transition table (states, symbols, head
//! moves) and compiled into a dense rule lookup before execution. Tapes are
//! unbounded in both directions and stored sparsely.
//!
//! The classic demo, big-endian binary addition with the sum left on tape 2,
//! ships as a built-in table.

mod machine;
mod tape;

pub use machine::{Machine, Move, Run, StateId, TmError};
pub use tape::{SparseTape, BLANK};

/// Built-in machine: big-endian binary addition, `A` on tape 1 and `B` on
/// tape 2, result replacing tape 2.
pub fn binary_addition() -> Result<Machine, TmError> {
    Machine::from_yaml(include_str!("binary_addition.yaml"))
}

#[cfg(test)]
mod tests;
