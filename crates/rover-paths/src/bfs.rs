use std::collections::VecDeque;

use crate::request::{SearchError, SearchRequest};
use crate::result::SearchResult;
use crate::search::Expansion;
use crate::state::State;

/// Breadth-first search over expanded states.
///
/// Finds a path with the fewest moves, which is not necessarily the one
/// that leaves the most battery. A state is enqueued at most once.
pub fn breadth_first(req: &SearchRequest<'_>) -> Result<SearchResult, SearchError> {
    let space = req.state_space()?;
    let start = State::new(req.start, req.battery);
    let mut run = Expansion::new("breadth-first", start);
    let mut queue = VecDeque::from([start]);
    let mut buf = Vec::with_capacity(4);

    while let Some(s) = queue.pop_front() {
        if !run.finalize(s) {
            continue;
        }
        if space.is_goal(s.pos) {
            return Ok(run.success(s));
        }

        buf.clear();
        space.successors(s, &mut buf);
        for &next in buf.iter() {
            if !run.is_visited(&next) && !run.is_discovered(&next) {
                queue.push_back(next);
                run.discover(next, s);
            }
        }
    }

    Ok(run.exhausted())
}
