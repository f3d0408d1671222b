use rover_core::Pos;

use crate::state::State;

/// Outcome of one search run.
///
/// A run that finds no goal is still a successful computation: `path` is
/// empty and `final_battery` is `None`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchResult {
    /// Every state finalized by the run, in processing order.
    pub visited_order: Vec<State>,
    /// Cells from start to goal inclusive.
    pub path: Vec<Pos>,
    /// Always `visited_order.len()`.
    pub nodes_expanded: usize,
    /// Battery left on arrival at the goal.
    pub final_battery: Option<i32>,
}

impl SearchResult {
    pub(crate) fn found(visited_order: Vec<State>, path: Vec<Pos>, final_battery: i32) -> Self {
        Self {
            nodes_expanded: visited_order.len(),
            visited_order,
            path,
            final_battery: Some(final_battery),
        }
    }

    pub(crate) fn exhausted(visited_order: Vec<State>) -> Self {
        Self {
            nodes_expanded: visited_order.len(),
            visited_order,
            path: Vec::new(),
            final_battery: None,
        }
    }

    /// Whether a goal was reached.
    #[inline]
    pub fn is_found(&self) -> bool {
        !self.path.is_empty()
    }

    /// The goal cell reached, if any.
    pub fn goal(&self) -> Option<Pos> {
        self.path.last().copied()
    }

    /// One-line status report.
    pub fn summary(&self) -> String {
        let battery = match self.final_battery {
            Some(b) => b.to_string(),
            None => "N/A".to_string(),
        };
        format!(
            "Nodes expanded: {} | Path length: {} | Final battery: {}",
            self.nodes_expanded,
            self.path.len(),
            battery
        )
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn result_round_trip() {
        let r = SearchResult::found(
            vec![State::new(Pos::new(0, 0), 4), State::new(Pos::new(1, 0), 2)],
            vec![Pos::new(0, 0), Pos::new(1, 0)],
            2,
        );
        let json = serde_json::to_string(&r).unwrap();
        let back: SearchResult = serde_json::from_str(&json).unwrap();
        assert_eq!(r, back);

        let none = SearchResult::exhausted(Vec::new());
        let json = serde_json::to_value(&none).unwrap();
        assert!(json["final_battery"].is_null());
    }
}
