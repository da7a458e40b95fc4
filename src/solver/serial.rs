use crate::prelude::*;

/// Single-worker dispatcher. Candidates are evaluated in enumeration order,
/// so a match is always the lexicographically earliest at its depth and
/// repeated runs return the same winner.
pub struct Serial;

impl Dispatch for Serial {
    fn dispatch(
        &self,
        request: &SearchRequest,
        work: Chunks<'_>,
        cancel: &CancelToken,
    ) -> Result<Option<Found>, SolveError> {
        for chunk in work {
            if cancel.is_cancelled() {
                return Ok(None);
            }
            for attacks in chunk {
                let state = request
                    .initial()
                    .clone()
                    .apply_all(request.attacks(), attacks.iter().copied());
                if state.is_uniform() {
                    return Ok(Some(Found { attacks, state }));
                }
            }
        }
        Ok(None)
    }
}
