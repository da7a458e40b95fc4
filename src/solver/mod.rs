use crate::prelude::*;

use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

mod serial;
pub use serial::*;

mod threaded;
pub use threaded::*;

/// How one depth's candidates are fanned out for evaluation.
///
/// `Serial` evaluates candidates in enumeration order, so the winner is
/// always the lexicographically earliest solution at the winning depth.
/// `Threaded` hands chunks to a pool of workers and accepts the first
/// reported match, which need not be the lexicographically earliest one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, enum_iterator::Sequence)]
pub enum Strategy {
    Serial,
    Threaded,
}

/// Cooperative abort signal, shared with in-flight workers. Workers observe
/// it between chunks, the driver between depths.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        CancelToken::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// A goal-reaching candidate, as reported by a dispatcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Found {
    pub attacks: Sequence,
    pub state: CubeState,
}

/// Terminal result of a search. `NotFound` means the budget was spent
/// without a match; it is a normal outcome, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Solved {
        attacks: Vec<Attack>,
        state: CubeState,
    },
    NotFound,
}

impl Outcome {
    pub fn is_solved(&self) -> bool {
        matches!(self, Outcome::Solved { .. })
    }
}

pub trait Dispatch {
    /// Evaluates one depth's candidates, returning the accepted match if any.
    fn dispatch(
        &self,
        request: &SearchRequest,
        work: Chunks<'_>,
        cancel: &CancelToken,
    ) -> Result<Option<Found>, SolveError>;
}

pub struct Solver {
    strategy: Strategy,
    workers: usize,
    chunk_size: usize,
}

impl Solver {
    pub const DEFAULT_WORKERS: usize = 10;
    pub const DEFAULT_CHUNK_SIZE: usize = 128;

    pub fn new(strategy: Strategy) -> Self {
        Solver {
            strategy,
            workers: Self::DEFAULT_WORKERS,
            chunk_size: Self::DEFAULT_CHUNK_SIZE,
        }
    }

    pub fn with_workers(mut self, workers: usize) -> Self {
        assert!(workers > 0, "the pool needs at least one worker");
        self.workers = workers;
        self
    }

    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        assert!(chunk_size > 0, "chunks must hold at least one candidate");
        self.chunk_size = chunk_size;
        self
    }

    pub fn solve(&self, request: &SearchRequest) -> Result<Outcome, SolveError> {
        self.solve_with_cancel(request, &CancelToken::new())
    }

    /// Iterative deepening: every length-1 sequence, then every length-2
    /// sequence, and so on up to the step budget, so the first match found is
    /// also a shortest one. Deeper depths are never touched once a depth
    /// produces a winner.
    pub fn solve_with_cancel(
        &self,
        request: &SearchRequest,
        cancel: &CancelToken,
    ) -> Result<Outcome, SolveError> {
        log::info!("Searching for a solution from state [{}]", request.initial());

        if request.initial().is_uniform() {
            log::info!("Initial state is already uniform");
            return Ok(Outcome::Solved {
                attacks: Vec::new(),
                state: request.initial().clone(),
            });
        }

        let dispatch: Box<dyn Dispatch> = match self.strategy {
            Strategy::Serial => Box::new(Serial),
            Strategy::Threaded => Box::new(Threaded::new(self.workers)),
        };

        let ids = request.attacks().ids();
        for depth in 1..=request.max_steps() {
            if cancel.is_cancelled() {
                log::info!("Search cancelled before depth {}", depth);
                return Ok(Outcome::NotFound);
            }
            log::debug!("Trying sequences of {} attacks", depth);

            let work = Sequences::with_depth(&ids, depth as usize).chunks(self.chunk_size);
            if let Some(found) = dispatch.dispatch(request, work, cancel)? {
                log::info!(
                    "Solution found: attacks {:?} -> final state [{}]",
                    found.attacks,
                    found.state
                );
                return Ok(Outcome::Solved {
                    attacks: found.attacks.to_vec(),
                    state: found.state,
                });
            }
        }

        log::warn!("No solution within {} attacks", request.max_steps());
        Ok(Outcome::NotFound)
    }
}
