use std::fmt;

use rover_core::{Pos, TerrainGrid, manhattan};

/// An expanded search state: a cell plus the battery left on arrival.
///
/// The same cell reached with different battery levels is a different
/// state. `State` is also the identity key of the visited set and the
/// predecessor map.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct State {
    pub pos: Pos,
    pub battery: i32,
}

impl State {
    #[inline]
    pub const fn new(pos: Pos, battery: i32) -> Self {
        Self { pos, battery }
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} @{}", self.pos, self.battery)
    }
}

/// The expanded state graph over one grid snapshot.
///
/// Built through [`SearchRequest::state_space`](crate::SearchRequest::state_space),
/// which guarantees there is at least one heuristic target.
#[derive(Clone, Debug)]
pub struct StateSpace<'a> {
    grid: &'a TerrainGrid,
    /// Goal cells of the grid, or the fallback goal when the grid has none.
    targets: Vec<Pos>,
}

impl<'a> StateSpace<'a> {
    pub(crate) fn new(grid: &'a TerrainGrid, fallback: Option<Pos>) -> Self {
        let mut targets = grid.goals();
        if targets.is_empty() {
            targets.extend(fallback);
        }
        Self { grid, targets }
    }

    #[inline]
    pub fn grid(&self) -> &'a TerrainGrid {
        self.grid
    }

    /// The cells the heuristic measures distance to.
    pub fn targets(&self) -> &[Pos] {
        &self.targets
    }

    /// Adjacent cells in canonical order (up, down, left, right), without
    /// any bounds check.
    #[inline]
    pub fn neighbors(&self, p: Pos) -> [Pos; 4] {
        p.neighbors_4()
    }

    /// Battery left after entering `p` with `battery`, if the move is legal:
    /// `p` is on the grid, passable, and the battery does not go negative.
    #[inline]
    pub fn arrival(&self, p: Pos, battery: i32) -> Option<i32> {
        let cost = self.grid.at(p)?.cost()?;
        let left = battery - cost;
        (left >= 0).then_some(left)
    }

    #[inline]
    pub fn feasible(&self, p: Pos, battery: i32) -> bool {
        self.arrival(p, battery).is_some()
    }

    /// Append the feasible successors of `s` into `buf`, in canonical
    /// neighbour order. The caller clears `buf` before calling.
    pub fn successors(&self, s: State, buf: &mut Vec<State>) {
        for p in self.neighbors(s.pos) {
            if let Some(left) = self.arrival(p, s.battery) {
                buf.push(State::new(p, left));
            }
        }
    }

    /// Whether `p` holds a goal marker. Any goal cell accepts.
    #[inline]
    pub fn is_goal(&self, p: Pos) -> bool {
        self.grid.is_goal(p)
    }

    /// Manhattan distance from `p` to the nearest target.
    pub fn heuristic(&self, p: Pos) -> i32 {
        self.targets
            .iter()
            .map(|&t| manhattan(p, t))
            .min()
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rover_core::TerrainGrid;
    use std::collections::HashSet;

    #[test]
    fn state_identity_includes_battery() {
        let a = State::new(Pos::new(1, 2), 5);
        let b = State::new(Pos::new(1, 2), 3);
        let c = State::new(Pos::new(1, 2), 5);
        let set: HashSet<State> = [a, b, c].into_iter().collect();
        assert_eq!(set.len(), 2);
        assert_ne!(a, b);
        // No field aliasing between coordinates and battery.
        assert_ne!(State::new(Pos::new(1, 23), 4), State::new(Pos::new(12, 3), 4));
    }

    #[test]
    fn feasibility() {
        let grid = TerrainGrid::parse("FHD\nFFG").unwrap();
        let space = StateSpace::new(&grid, None);
        assert_eq!(space.arrival(Pos::new(0, 0), 2), Some(0));
        assert_eq!(space.arrival(Pos::new(0, 1), 3), None);
        assert_eq!(space.arrival(Pos::new(0, 1), 4), Some(0));
        assert!(!space.feasible(Pos::new(0, 2), 100));
        assert!(!space.feasible(Pos::new(-1, 0), 100));
        assert!(!space.feasible(Pos::new(0, 3), 100));
    }

    #[test]
    fn successors_in_canonical_order() {
        let grid = TerrainGrid::parse("FFF\nFHF\nFDF").unwrap();
        let space = StateSpace::new(&grid, None);
        let mut buf = Vec::new();
        space.successors(State::new(Pos::new(1, 1), 10), &mut buf);
        assert_eq!(
            buf,
            vec![
                State::new(Pos::new(0, 1), 8),
                State::new(Pos::new(1, 0), 8),
                State::new(Pos::new(1, 2), 8),
            ]
        );
        buf.clear();
        space.successors(State::new(Pos::new(0, 0), 1), &mut buf);
        assert!(buf.is_empty());
    }

    #[test]
    fn heuristic_nearest_goal() {
        let grid = TerrainGrid::parse("GFFF\nFFFF\nFFFG").unwrap();
        let space = StateSpace::new(&grid, Some(Pos::new(1, 1)));
        assert_eq!(space.targets(), &[Pos::new(0, 0), Pos::new(2, 3)]);
        assert_eq!(space.heuristic(Pos::new(0, 1)), 1);
        assert_eq!(space.heuristic(Pos::new(2, 2)), 1);
        assert_eq!(space.heuristic(Pos::new(1, 2)), 2);
    }

    #[test]
    fn heuristic_falls_back_to_supplied_goal() {
        let grid = TerrainGrid::parse("FFF\nFFF").unwrap();
        let space = StateSpace::new(&grid, Some(Pos::new(1, 2)));
        assert_eq!(space.heuristic(Pos::new(0, 0)), 3);
        assert!(!space.is_goal(Pos::new(1, 2)));
    }
}
