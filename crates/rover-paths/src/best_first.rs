use crate::queue::MinQueue;
use crate::request::{SearchError, SearchRequest};
use crate::result::SearchResult;
use crate::search::Expansion;
use crate::state::State;

/// Greedy best-first search ordered by the heuristic alone.
///
/// The priority of a state is its Manhattan distance to the nearest goal
/// cell, fixed when the state is first discovered. Accumulated cost is
/// ignored, so the path found is not guaranteed to be optimal.
pub fn best_first(req: &SearchRequest<'_>) -> Result<SearchResult, SearchError> {
    let space = req.state_space()?;
    let start = State::new(req.start, req.battery);
    let mut run = Expansion::new("best-first", start);
    let mut open = MinQueue::new();
    open.push(start, space.heuristic(start.pos));
    let mut buf = Vec::with_capacity(4);

    while let Some(s) = open.pop() {
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
                run.discover(next, s);
                open.push(next, space.heuristic(next.pos));
            }
        }
    }

    Ok(run.exhausted())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rover_core::{Pos, TerrainGrid};

    #[test]
    fn heads_straight_for_the_goal() {
        let grid = TerrainGrid::parse("FF\nFG").unwrap();
        let req = SearchRequest::new(&grid, Pos::new(0, 0), 4);
        let r = best_first(&req).unwrap();
        // Both first moves tie at distance 1; either way the goal is next.
        assert_eq!(r.nodes_expanded, 3);
        assert_eq!(r.path.len(), 3);
        assert_eq!(r.goal(), Some(Pos::new(1, 1)));
        assert_eq!(r.final_battery, Some(0));
    }

    #[test]
    fn prefers_nearest_of_several_goals() {
        let grid = TerrainGrid::parse("GFFFFF\nFFFFFF\nFFFFFG").unwrap();
        let req = SearchRequest::new(&grid, Pos::new(2, 3), 20);
        let r = best_first(&req).unwrap();
        assert_eq!(r.goal(), Some(Pos::new(2, 5)));
        assert_eq!(
            r.path,
            vec![Pos::new(2, 3), Pos::new(2, 4), Pos::new(2, 5)]
        );
        assert_eq!(r.final_battery, Some(16));
    }

    #[test]
    fn greedy_ignores_hill_cost() {
        let grid = TerrainGrid::parse("FHG\nFFF").unwrap();
        let req = SearchRequest::new(&grid, Pos::new(0, 0), 20);
        let r = best_first(&req).unwrap();
        assert_eq!(r.path, vec![Pos::new(0, 0), Pos::new(0, 1), Pos::new(0, 2)]);
        assert_eq!(r.final_battery, Some(14));
    }

    #[test]
    fn fallback_goal_only_guides() {
        let grid = TerrainGrid::parse("FFF\nFFF").unwrap();
        let req = SearchRequest::new(&grid, Pos::new(0, 0), 4).with_goal(Pos::new(1, 2));
        let r = best_first(&req).unwrap();
        assert!(r.path.is_empty());
        assert_eq!(r.final_battery, None);
        assert_eq!(r.nodes_expanded, 6);
    }
}
