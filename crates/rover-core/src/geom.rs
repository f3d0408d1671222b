//! Geometry primitives: [`Pos`] and [`Bounds`].
//!
//! Coordinates are zero-based `(row, col)` pairs in row-major order, with
//! rows growing downward.

use std::fmt;

// ---------------------------------------------------------------------------
// Pos
// ---------------------------------------------------------------------------

/// A grid coordinate. Signed so that off-grid neighbours can be represented
/// and rejected by a bounds check instead of wrapping.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pos {
    pub row: i32,
    pub col: i32,
}

impl Pos {
    /// The top-left cell.
    pub const ORIGIN: Self = Self { row: 0, col: 0 };

    /// Create a new position.
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Return a position shifted by (drow, dcol).
    #[inline]
    pub const fn shift(self, drow: i32, dcol: i32) -> Self {
        Self {
            row: self.row + drow,
            col: self.col + dcol,
        }
    }

    /// The four axis-aligned neighbours in canonical exploration order:
    /// up, down, left, right.
    #[inline]
    pub const fn neighbors_4(self) -> [Pos; 4] {
        [
            self.shift(-1, 0),
            self.shift(1, 0),
            self.shift(0, -1),
            self.shift(0, 1),
        ]
    }

    /// Whether `other` differs from `self` by exactly one row or one column.
    #[inline]
    pub fn is_adjacent(self, other: Pos) -> bool {
        matches!(
            (self.row.abs_diff(other.row), self.col.abs_diff(other.col)),
            (0, 1) | (1, 0)
        )
    }
}

impl PartialOrd for Pos {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Pos {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.row.cmp(&other.row).then(self.col.cmp(&other.col))
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Manhattan (L1) distance between two positions, saturating at `i32::MAX`.
#[inline]
pub fn manhattan(a: Pos, b: Pos) -> i32 {
    let d = a.row.abs_diff(b.row).saturating_add(a.col.abs_diff(b.col));
    i32::try_from(d).unwrap_or(i32::MAX)
}

// ---------------------------------------------------------------------------
// Bounds
// ---------------------------------------------------------------------------

/// Extent of a grid anchored at the origin: rows `[0, rows)` and
/// columns `[0, cols)`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds {
    pub rows: i32,
    pub cols: i32,
}

impl Bounds {
    #[inline]
    pub const fn new(rows: i32, cols: i32) -> Self {
        Self { rows, cols }
    }

    /// Whether `p` lies inside the grid.
    #[inline]
    pub fn contains(self, p: Pos) -> bool {
        p.row >= 0 && p.col >= 0 && p.row < self.rows && p.col < self.cols
    }

    /// Total number of cells.
    #[inline]
    pub fn len(self) -> usize {
        if self.is_empty() {
            return 0;
        }
        (self.rows as usize) * (self.cols as usize)
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.rows <= 0 || self.cols <= 0
    }

    /// Flat row-major index of `p`, or `None` if out of bounds.
    #[inline]
    pub fn index(self, p: Pos) -> Option<usize> {
        if !self.contains(p) {
            return None;
        }
        Some(p.row as usize * self.cols as usize + p.col as usize)
    }

    /// Row-major iterator over every position in the grid.
    pub fn iter(self) -> impl Iterator<Item = Pos> {
        let cols = self.cols.max(0);
        (0..self.rows.max(0)).flat_map(move |row| (0..cols).map(move |col| Pos::new(row, col)))
    }
}

impl fmt::Display for Bounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neighbors_canonical_order() {
        let p = Pos::new(2, 3);
        assert_eq!(
            p.neighbors_4(),
            [Pos::new(1, 3), Pos::new(3, 3), Pos::new(2, 2), Pos::new(2, 4)]
        );
    }

    #[test]
    fn adjacency_excludes_diagonals() {
        let p = Pos::new(1, 1);
        assert!(p.is_adjacent(Pos::new(0, 1)));
        assert!(p.is_adjacent(Pos::new(1, 2)));
        assert!(!p.is_adjacent(Pos::new(2, 2)));
        assert!(!p.is_adjacent(p));
        assert!(!Pos::new(0, 0).is_adjacent(Pos::new(i32::MIN, 0)));
        assert!(!Pos::new(i32::MAX, 0).is_adjacent(Pos::new(i32::MIN, 1)));
    }

    #[test]
    fn manhattan_distance() {
        assert_eq!(manhattan(Pos::new(0, 0), Pos::new(5, 5)), 10);
        assert_eq!(manhattan(Pos::new(3, 1), Pos::new(1, 4)), 5);
    }

    #[test]
    fn manhattan_saturates_far_apart() {
        assert_eq!(manhattan(Pos::new(0, 0), Pos::new(i32::MIN, 0)), i32::MAX);
        assert_eq!(
            manhattan(Pos::new(i32::MAX, i32::MAX), Pos::new(i32::MIN, i32::MIN)),
            i32::MAX
        );
        assert_eq!(manhattan(Pos::new(-2, 0), Pos::new(1, 0)), 3);
    }

    #[test]
    fn ordering_is_row_major() {
        let mut v = vec![Pos::new(1, 0), Pos::new(0, 2), Pos::new(0, 1)];
        v.sort();
        assert_eq!(v, vec![Pos::new(0, 1), Pos::new(0, 2), Pos::new(1, 0)]);
    }

    #[test]
    fn bounds_contains_and_index() {
        let b = Bounds::new(2, 3);
        assert!(b.contains(Pos::new(1, 2)));
        assert!(!b.contains(Pos::new(2, 0)));
        assert!(!b.contains(Pos::new(0, -1)));
        assert_eq!(b.index(Pos::new(1, 2)), Some(5));
        assert_eq!(b.index(Pos::new(0, 3)), None);
        assert_eq!(b.len(), 6);
    }

    #[test]
    fn bounds_iter_row_major() {
        let pts: Vec<Pos> = Bounds::new(2, 2).iter().collect();
        assert_eq!(
            pts,
            vec![Pos::new(0, 0), Pos::new(0, 1), Pos::new(1, 0), Pos::new(1, 1)]
        );
        assert_eq!(Bounds::new(0, 4).iter().count(), 0);
    }

    #[test]
    fn display() {
        assert_eq!(Pos::new(4, 7).to_string(), "(4, 7)");
        assert_eq!(Bounds::new(6, 5).to_string(), "6x5");
    }
}
