use std::fmt;

use rover_core::{Pos, TerrainGrid};

/// Replay `path` from `battery` and return the battery left at its end.
///
/// The first cell is where the rover already stands and costs nothing.
/// Every later cell must be on the grid, adjacent to the one before it,
/// passable, and affordable with the battery left.
pub fn audit_path(grid: &TerrainGrid, path: &[Pos], battery: i32) -> Result<i32, PathAuditError> {
    let Some(&first) = path.first() else {
        return Err(PathAuditError::Empty);
    };
    if grid.at(first).is_none() {
        return Err(PathAuditError::OffGrid { step: 0, pos: first });
    }

    let mut left = battery;
    for (step, w) in path.windows(2).enumerate() {
        let (from, to) = (w[0], w[1]);
        let step = step + 1;
        let terrain = grid
            .at(to)
            .ok_or(PathAuditError::OffGrid { step, pos: to })?;
        if !from.is_adjacent(to) {
            return Err(PathAuditError::NotAdjacent { step, from, to });
        }
        let cost = terrain
            .cost()
            .ok_or(PathAuditError::Impassable { step, pos: to })?;
        left -= cost;
        if left < 0 {
            return Err(PathAuditError::OutOfBattery { step, pos: to });
        }
    }
    Ok(left)
}

/// Why a path replay failed. `step` is the index into the path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathAuditError {
    Empty,
    OffGrid { step: usize, pos: Pos },
    NotAdjacent { step: usize, from: Pos, to: Pos },
    Impassable { step: usize, pos: Pos },
    OutOfBattery { step: usize, pos: Pos },
}

impl fmt::Display for PathAuditError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "path is empty"),
            Self::OffGrid { step, pos } => write!(f, "step {step}: {pos} is off the grid"),
            Self::NotAdjacent { step, from, to } => {
                write!(f, "step {step}: {from} and {to} are not adjacent")
            }
            Self::Impassable { step, pos } => write!(f, "step {step}: {pos} is impassable"),
            Self::OutOfBattery { step, pos } => {
                write!(f, "step {step}: battery runs out entering {pos}")
            }
        }
    }
}

impl std::error::Error for PathAuditError {}
