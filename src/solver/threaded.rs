use crate::prelude::*;

use std::sync::{
    atomic::{AtomicBool, Ordering},
    mpsc::{self, Sender},
    Mutex,
};
use std::thread;

/// Bounded pool of worker threads pulling chunks off a shared queue. The
/// first match reported wins; once the stop flag is raised no worker picks
/// up another chunk, though a chunk already in hand may finish.
pub struct Threaded {
    workers: usize,
}

impl Threaded {
    pub fn new(workers: usize) -> Self {
        assert!(workers > 0, "the pool needs at least one worker");
        Threaded { workers }
    }
}

impl Dispatch for Threaded {
    fn dispatch(
        &self,
        request: &SearchRequest,
        work: Chunks<'_>,
        cancel: &CancelToken,
    ) -> Result<Option<Found>, SolveError> {
        let queue = Mutex::new(work);
        let stop = AtomicBool::new(false);
        let (tx, rx) = mpsc::channel();

        let panicked = thread::scope(|scope| {
            let handles: Vec<_> = (0..self.workers)
                .map(|_| {
                    let tx = tx.clone();
                    scope.spawn(|| worker(request, &queue, &stop, cancel, tx))
                })
                .collect();

            handles
                .into_iter()
                .map(|handle| handle.join())
                .filter(Result::is_err)
                .count()
        });
        drop(tx);

        if panicked > 0 {
            return Err(SolveError::WorkerPanicked);
        }

        // Channel order is send order, so this is the first reported match.
        Ok(rx.try_iter().next())
    }
}

fn worker(
    request: &SearchRequest,
    queue: &Mutex<Chunks<'_>>,
    stop: &AtomicBool,
    cancel: &CancelToken,
    matches: Sender<Found>,
) {
    loop {
        if stop.load(Ordering::Relaxed) || cancel.is_cancelled() {
            return;
        }

        let chunk = match queue.lock() {
            Ok(mut queue) => queue.next(),
            // A worker panicked holding the lock; the join reports it.
            Err(_) => return,
        };
        let Some(chunk) = chunk else { return };

        for attacks in chunk {
            let state = request
                .initial()
                .clone()
                .apply_all(request.attacks(), attacks.iter().copied());
            if state.is_uniform() {
                stop.store(true, Ordering::Relaxed);
                let _ = matches.send(Found { attacks, state });
                return;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn a_single_worker_pool_is_deterministic() {
        let solver = Solver::new(Strategy::Threaded).with_workers(1);
        let first = solver.solve(&request_with_state("2 1 1 3", 10)).unwrap();
        let second = solver.solve(&request_with_state("2 1 1 3", 10)).unwrap();
        assert_eq!(first, second);
        assert!(first.is_solved());
    }

    #[test]
    fn more_workers_than_chunks_is_fine() {
        let solver = Solver::new(Strategy::Threaded)
            .with_workers(16)
            .with_chunk_size(2);
        let outcome = solver.solve(&request_with_state("2 1 1 3", 10)).unwrap();
        match outcome {
            Outcome::Solved { attacks, state } => {
                assert_eq!(attacks.len(), 3);
                assert!(state.is_uniform());
            }
            Outcome::NotFound => panic!("the reference puzzle is solvable"),
        }
    }

    #[test]
    fn reports_exhaustion_when_no_candidate_matches() {
        let request = request_with_state("2 1 1 3", 10);
        let ids = request.attacks().ids();
        let work = Sequences::with_depth(&ids, 1).chunks(1);

        let found = Threaded::new(4)
            .dispatch(&request, work, &CancelToken::new())
            .unwrap();
        assert_eq!(found, None);
    }
}
