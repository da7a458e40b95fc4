use crate::prelude::*;

use thiserror::Error;

/// Fatal configuration problems, reported when a request is built. A search
/// that merely finds nothing is not an error; see `Outcome::NotFound`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("initial state is empty")]
    EmptyState,

    #[error("cube value {value} is outside the cyclic alphabet 1..={size}")]
    ValueOutsideAlphabet { value: u8, size: u8 },

    #[error("attack {attack} targets cube {position}, but the state has {cubes} cubes")]
    TargetOutOfRange {
        attack: Attack,
        position: usize,
        cubes: usize,
    },

    #[error("attack {0} is declared more than once")]
    DuplicateAttack(Attack),

    #[error("unparsable cube value {0:?}")]
    BadValue(String),
}

/// Failures while a search is running, distinct from both configuration
/// errors and the normal `NotFound` outcome.
#[derive(Error, Debug)]
pub enum SolveError {
    #[error("a worker panicked while evaluating attack sequences")]
    WorkerPanicked,
}
