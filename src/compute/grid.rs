//! Bounded Game of Life grid.
//!
//! A [`Grid`] is one generation: a fixed-size boolean array plus a cached
//! live-cell count. Edges are hard boundaries; there is no wraparound.

use crate::schema::LiveCountPolicy;

use super::Transition;

/// Errors raised by grid construction and cell addressing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    #[error("Grid dimensions must be non-negative, got {rows}x{columns}")]
    InvalidDimensions { rows: i64, columns: i64 },
    #[error("Cell ({row}, {column}) is outside the {rows}x{columns} grid")]
    IndexOutOfRange {
        row: i64,
        column: i64,
        rows: usize,
        columns: usize,
    },
}

/// One generation of the automaton.
///
/// Cells are stored row-major: `cells[row * columns + column]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    columns: usize,
    live_cells: usize,
    cells: Vec<bool>,
}

impl Grid {
    /// Create an all-dead grid.
    ///
    /// Zero rows or columns are valid and give an empty grid.
    pub fn new(rows: i64, columns: i64) -> Result<Self, GridError> {
        let invalid = || GridError::InvalidDimensions { rows, columns };
        let r = usize::try_from(rows).map_err(|_| invalid())?;
        let c = usize::try_from(columns).map_err(|_| invalid())?;
        let size = r.checked_mul(c).ok_or_else(invalid)?;

        Ok(Self {
            rows: r,
            columns: c,
            live_cells: 0,
            cells: vec![false; size],
        })
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Cached live-cell count.
    #[inline]
    pub fn live_cells(&self) -> usize {
        self.live_cells
    }

    /// Row-major cell states.
    #[inline]
    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    /// Count live cells by scanning the array, ignoring the cached count.
    pub fn count_live_cells(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    /// Whether the cell at `(row, column)` is alive.
    pub fn is_alive(&self, row: i64, column: i64) -> Result<bool, GridError> {
        let i = self.checked_index(row, column)?;
        Ok(self.cells[i])
    }

    /// Live cell coordinates in row-major order.
    pub fn live_coordinates(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let columns = self.columns;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, alive)| **alive)
            .map(move |(i, _)| (i / columns, i % columns))
    }

    /// Mark the given cells alive, keeping an exact live count.
    pub fn seed(&mut self, cells: &[(i64, i64)]) -> Result<(), GridError> {
        self.seed_with_policy(cells, LiveCountPolicy::Distinct)
    }

    /// Mark the given cells alive, updating the live count per `policy`.
    ///
    /// All coordinates are checked before any cell changes, so an
    /// out-of-range coordinate leaves the grid as it was.
    pub fn seed_with_policy(
        &mut self,
        cells: &[(i64, i64)],
        policy: LiveCountPolicy,
    ) -> Result<(), GridError> {
        let indices = cells
            .iter()
            .map(|&(row, column)| self.checked_index(row, column))
            .collect::<Result<Vec<_>, _>>()?;

        let mut newly_alive = 0;
        for i in indices {
            if !self.cells[i] {
                self.cells[i] = true;
                newly_alive += 1;
            }
        }

        self.live_cells = match policy {
            LiveCountPolicy::Distinct => self.live_cells + newly_alive,
            // Duplicates inflate the count.
            LiveCountPolicy::Supplied => cells.len(),
        };

        log::trace!(
            "Seeded {} coordinates ({} new) into {}x{} grid, live count {}",
            cells.len(),
            newly_alive,
            self.rows,
            self.columns,
            self.live_cells
        );
        Ok(())
    }

    /// Number of live cells in the Moore neighborhood of `(row, column)`.
    pub fn count_live_neighbors(&self, row: i64, column: i64) -> Result<u8, GridError> {
        self.checked_index(row, column)?;
        Ok(self.neighbors_at(row as usize, column as usize))
    }

    /// Compute the next generation as a new grid.
    ///
    /// Every decision reads `self` only; the returned grid owns a fresh copy
    /// of the cells.
    pub fn next_generation(&self) -> Grid {
        if self.live_cells == 0 {
            return self.clone();
        }

        let mut next = Grid {
            rows: self.rows,
            columns: self.columns,
            live_cells: self.live_cells,
            cells: self.cells.clone(),
        };

        for row in 0..self.rows {
            for column in 0..self.columns {
                let i = self.idx(row, column);
                match Transition::of(self.cells[i], self.neighbors_at(row, column)) {
                    Transition::Born => {
                        next.cells[i] = true;
                        next.live_cells += 1;
                    }
                    Transition::Died => {
                        next.cells[i] = false;
                        // A supplied count may undershoot the real one.
                        next.live_cells = next.live_cells.saturating_sub(1);
                    }
                    Transition::Unchanged => {}
                }
            }
        }

        next
    }

    /// Convert (row, column) to flat index.
    #[inline]
    fn idx(&self, row: usize, column: usize) -> usize {
        row * self.columns + column
    }

    fn checked_index(&self, row: i64, column: i64) -> Result<usize, GridError> {
        match (usize::try_from(row), usize::try_from(column)) {
            (Ok(r), Ok(c)) if r < self.rows && c < self.columns => Ok(self.idx(r, c)),
            _ => Err(GridError::IndexOutOfRange {
                row,
                column,
                rows: self.rows,
                columns: self.columns,
            }),
        }
    }

    /// Neighbor count for an already validated cell.
    fn neighbors_at(&self, row: usize, column: usize) -> u8 {
        let row_end = (row + 1).min(self.rows - 1);
        let column_end = (column + 1).min(self.columns - 1);

        let mut count = 0;
        for r in row.saturating_sub(1)..=row_end {
            for c in column.saturating_sub(1)..=column_end {
                if (r, c) != (row, column) && self.cells[self.idx(r, c)] {
                    count += 1;
                }
            }
        }
        count
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn seeded(rows: i64, columns: i64, cells: &[(i64, i64)]) -> Grid {
        let mut grid = Grid::new(rows, columns).unwrap();
        grid.seed(cells).unwrap();
        grid
    }

    fn live(grid: &Grid) -> Vec<(usize, usize)> {
        grid.live_coordinates().collect()
    }

    #[test]
    fn test_new_grid_is_dead() {
        let grid = Grid::new(2, 3).unwrap();

        assert_eq!(grid.rows(), 2);
        assert_eq!(grid.columns(), 3);
        assert_eq!(grid.live_cells(), 0);
        for r in 0..2 {
            for c in 0..3 {
                assert!(!grid.is_alive(r, c).unwrap());
            }
        }
    }

    #[test]
    fn test_negative_dimensions_rejected() {
        assert_eq!(
            Grid::new(2, -2),
            Err(GridError::InvalidDimensions {
                rows: 2,
                columns: -2
            })
        );
        assert!(Grid::new(-1, 0).is_err());
    }

    #[test]
    fn test_zero_dimensions_allowed() {
        let grid = Grid::new(0, 9).unwrap();
        assert_eq!(grid.rows(), 0);
        assert_eq!(grid.live_coordinates().count(), 0);
        assert_eq!(grid.next_generation(), grid);
    }

    #[test]
    fn test_seed_marks_cells() {
        let grid = seeded(3, 4, &[(0, 0), (2, 3), (1, 2)]);

        assert!(grid.is_alive(0, 0).unwrap());
        assert!(grid.is_alive(2, 3).unwrap());
        assert!(grid.is_alive(1, 2).unwrap());
        assert!(!grid.is_alive(1, 1).unwrap());
        assert_eq!(grid.live_cells(), 3);
    }

    #[test]
    fn test_seed_duplicates_distinct_policy() {
        let grid = seeded(3, 3, &[(1, 1), (1, 1), (0, 2)]);
        assert_eq!(grid.live_cells(), 2);
        assert_eq!(grid.live_cells(), grid.count_live_cells());
    }

    #[test]
    fn test_seed_duplicates_supplied_policy() {
        let mut grid = Grid::new(3, 3).unwrap();
        grid.seed_with_policy(&[(1, 1), (1, 1), (0, 2)], LiveCountPolicy::Supplied)
            .unwrap();

        assert_eq!(grid.live_cells(), 3);
        assert_eq!(grid.count_live_cells(), 2);
    }

    #[test]
    fn test_supplied_undercount_saturates_on_step() {
        let mut grid = seeded(5, 5, &[(0, 0), (0, 4), (4, 0)]);
        grid.seed_with_policy(&[(0, 0)], LiveCountPolicy::Supplied)
            .unwrap();
        assert_eq!(grid.live_cells(), 1);
        assert_eq!(grid.count_live_cells(), 3);

        let next = grid.next_generation();
        assert_eq!(next.live_cells(), 0);
        assert_eq!(next.count_live_cells(), 0);
    }

    #[test]
    fn test_seed_out_of_range_leaves_grid_untouched() {
        let mut grid = Grid::new(3, 3).unwrap();

        for bad in [(-1, 0), (0, -1), (3, 0), (0, 3)] {
            let err = grid.seed(&[(0, 0), bad]).unwrap_err();
            assert!(matches!(err, GridError::IndexOutOfRange { .. }), "{:?}", bad);
        }
        assert_eq!(grid, Grid::new(3, 3).unwrap());
    }

    #[test]
    fn test_count_neighbors_out_of_range() {
        let grid = Grid::new(3, 3).unwrap();
        assert!(grid.count_live_neighbors(3, 1).is_err());
        assert!(grid.count_live_neighbors(1, -1).is_err());
        assert!(Grid::new(0, 0).unwrap().count_live_neighbors(0, 0).is_err());
    }

    #[test]
    fn test_count_neighbors_excludes_center() {
        let full: Vec<(i64, i64)> = (0..3).flat_map(|r| (0..3).map(move |c| (r, c))).collect();
        let grid = seeded(3, 3, &full);

        assert_eq!(grid.count_live_neighbors(1, 1).unwrap(), 8);
        assert_eq!(grid.count_live_neighbors(0, 0).unwrap(), 3);
        assert_eq!(grid.count_live_neighbors(0, 1).unwrap(), 5);
    }

    #[test]
    fn test_edges_do_not_wrap() {
        let grid = seeded(3, 3, &[(0, 2), (2, 0), (2, 2)]);
        assert_eq!(grid.count_live_neighbors(0, 0).unwrap(), 0);
    }

    #[test]
    fn test_dead_grid_is_fixed_point() {
        let grid = Grid::new(4, 4).unwrap();
        assert_eq!(grid.next_generation(), grid);
    }

    #[test]
    fn test_blinker_oscillates() {
        let grid = seeded(3, 3, &[(1, 0), (1, 1), (1, 2)]);
        let next = grid.next_generation();

        assert_eq!(live(&next), vec![(0, 1), (1, 1), (2, 1)]);
        assert_eq!(next.live_cells(), 3);
        assert_eq!(next.next_generation(), grid);
    }

    #[test]
    fn test_lone_cell_dies() {
        let grid = seeded(3, 3, &[(1, 1)]);
        let next = grid.next_generation();

        assert_eq!(next.live_cells(), 0);
        assert_eq!(next.count_live_cells(), 0);
    }

    #[test]
    fn test_mixed_transitions() {
        let grid = seeded(3, 3, &[(0, 0), (1, 0), (2, 0), (2, 1), (2, 2), (1, 2)]);
        let next = grid.next_generation();

        assert_eq!(next.live_cells(), 5);
        assert!(!next.is_alive(0, 0).unwrap());
        assert!(next.is_alive(1, 0).unwrap());
        assert!(next.is_alive(1, 2).unwrap());
        assert!(next.is_alive(0, 1).unwrap());
        assert!(!next.is_alive(2, 1).unwrap());
    }

    #[test]
    fn test_predecessor_unchanged() {
        let grid = seeded(3, 3, &[(1, 0), (1, 1), (1, 2)]);
        let before = grid.clone();
        let _ = grid.next_generation();
        assert_eq!(grid, before);
    }

    fn grid_strategy() -> impl Strategy<Value = Grid> {
        (1i64..10, 1i64..10).prop_flat_map(|(rows, columns)| {
            prop::collection::vec((0..rows, 0..columns), 0..40)
                .prop_map(move |cells| seeded(rows, columns, &cells))
        })
    }

    proptest! {
        #[test]
        fn prop_neighbor_count_matches_brute_force(grid in grid_strategy()) {
            for r in 0..grid.rows() as i64 {
                for c in 0..grid.columns() as i64 {
                    let mut expected = 0;
                    for dr in -1..=1 {
                        for dc in -1..=1 {
                            if (dr, dc) != (0, 0) && grid.is_alive(r + dr, c + dc).unwrap_or(false) {
                                expected += 1;
                            }
                        }
                    }
                    let n = grid.count_live_neighbors(r, c).unwrap();
                    prop_assert!(n <= 8);
                    prop_assert_eq!(n, expected);
                }
            }
        }

        #[test]
        fn prop_step_keeps_exact_count(grid in grid_strategy()) {
            let next = grid.next_generation();
            prop_assert_eq!(next.live_cells(), next.count_live_cells());
            prop_assert_eq!(next.rows(), grid.rows());
            prop_assert_eq!(next.columns(), grid.columns());
        }

        #[test]
        fn prop_step_is_deterministic(grid in grid_strategy()) {
            prop_assert_eq!(grid.next_generation(), grid.next_generation());
        }
    }
}
