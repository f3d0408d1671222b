use crate::request::{SearchError, SearchRequest};
use crate::result::SearchResult;
use crate::search::Expansion;
use crate::state::State;

/// Exhaustive iterative depth-first search.
///
/// Returns at the first goal state popped from the stack, which is not
/// necessarily the shortest or cheapest. Stale stack entries are skipped on
/// pop.
pub fn depth_first(req: &SearchRequest<'_>) -> Result<SearchResult, SearchError> {
    let space = req.state_space()?;
    let start = State::new(req.start, req.battery);
    let mut run = Expansion::new("depth-first", start);
    let mut stack = vec![start];
    let mut buf = Vec::with_capacity(4);

    while let Some(s) = stack.pop() {
        if !run.finalize(s) {
            continue;
        }
        if space.is_goal(s.pos) {
            return Ok(run.success(s));
        }

        buf.clear();
        space.successors(s, &mut buf);
        // Reversed so the canonical first direction ends on top of the stack.
        for &next in buf.iter().rev() {
            if !run.is_visited(&next) {
                stack.push(next);
                run.discover(next, s);
            }
        }
    }

    Ok(run.exhausted())
}
