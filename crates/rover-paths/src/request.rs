use std::fmt;

use rover_core::{Bounds, Pos, TerrainGrid};

use crate::state::StateSpace;

/// Input shared by all search strategies.
///
/// The grid is borrowed, so it cannot change while a search runs.
#[derive(Clone, Copy, Debug)]
pub struct SearchRequest<'a> {
    pub grid: &'a TerrainGrid,
    pub start: Pos,
    /// Heuristic target used only when the grid has no goal cell.
    pub goal: Option<Pos>,
    pub battery: i32,
}

impl<'a> SearchRequest<'a> {
    pub fn new(grid: &'a TerrainGrid, start: Pos, battery: i32) -> Self {
        Self {
            grid,
            start,
            goal: None,
            battery,
        }
    }

    /// Set the fallback goal.
    pub fn with_goal(mut self, goal: Pos) -> Self {
        self.goal = Some(goal);
        self
    }

    /// Check the request before any search begins.
    pub fn validate(&self) -> Result<(), SearchError> {
        let bounds = self.grid.bounds();
        if !bounds.contains(self.start) {
            return Err(SearchError::StartOutOfBounds {
                start: self.start,
                bounds,
            });
        }
        if let Some(goal) = self.goal {
            if !bounds.contains(goal) {
                return Err(SearchError::GoalOutOfBounds { goal, bounds });
            }
        }
        if self.battery < 0 {
            return Err(SearchError::NegativeBattery(self.battery));
        }
        if self.goal.is_none() && self.grid.goals().is_empty() {
            return Err(SearchError::NoGoal);
        }
        Ok(())
    }

    /// Validate the request and build its state space.
    pub fn state_space(&self) -> Result<StateSpace<'a>, SearchError> {
        self.validate()?;
        Ok(StateSpace::new(self.grid, self.goal))
    }
}

/// Reasons a request is rejected before searching.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    StartOutOfBounds { start: Pos, bounds: Bounds },
    GoalOutOfBounds { goal: Pos, bounds: Bounds },
    NegativeBattery(i32),
    /// The grid has no goal cell and no fallback goal was given.
    NoGoal,
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StartOutOfBounds { start, bounds } => {
                write!(f, "start {start} is outside the {bounds} grid")
            }
            Self::GoalOutOfBounds { goal, bounds } => {
                write!(f, "goal {goal} is outside the {bounds} grid")
            }
            Self::NegativeBattery(b) => write!(f, "initial battery must not be negative, got {b}"),
            Self::NoGoal => write!(f, "grid has no goal cell and no fallback goal was given"),
        }
    }
}

impl std::error::Error for SearchError {}
