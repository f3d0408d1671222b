use std::collections::HashMap;

use rover_core::Pos;

use crate::state::State;

/// Predecessor map: each discovered state's parent, `None` for the start.
pub type Parents = HashMap<State, Option<State>>;

/// Walk the predecessor map back from `goal` and return the cells from the
/// start to `goal`, inclusive.
pub fn reconstruct_path(parents: &Parents, goal: State) -> Vec<Pos> {
    let mut path = Vec::new();
    let mut cur = Some(goal);
    while let Some(s) = cur {
        path.push(s.pos);
        cur = parents.get(&s).copied().flatten();
    }
    path.reverse();
    path
}
