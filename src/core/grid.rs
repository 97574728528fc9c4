//! The 3×9 scoring grid and link detection.
//!
//! ## Grid
//!
//! Three rows (one per [`GridHeight`]) of exactly [`COLUMNS`] optional
//! placements. The dimensions are part of the type, so a grid can never
//! hold a short or ragged row.
//!
//! ## Links
//!
//! A link is three consecutive occupied cells in one row. Rows are scanned
//! left to right and matches never overlap: once a link is found at column
//! `i` the scan resumes at `i + 3`. Six occupied cells in a row therefore
//! make exactly two links.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::piece::{GridHeight, Placement};

/// Number of tiers.
pub const HEIGHTS: usize = 3;

/// Number of columns in every row.
pub const COLUMNS: usize = 9;

/// Cells needed to form one link.
pub const LINK_LENGTH: usize = 3;

/// Upper bound on links in a full grid.
pub const MAX_LINKS: usize = HEIGHTS * (COLUMNS / LINK_LENGTH);

/// One row of the grid.
pub type Row = [Option<Placement>; COLUMNS];

/// A detected link: its row and the column of its leftmost cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Link {
    pub height: GridHeight,
    pub column: usize,
}

impl Link {
    /// Create a link starting at `column`.
    #[must_use]
    pub const fn new(height: GridHeight, column: usize) -> Self {
        Self { height, column }
    }

    /// Columns covered by this link.
    pub fn columns(&self) -> std::ops::Range<usize> {
        self.column..self.column + LINK_LENGTH
    }
}

/// Placement state for the whole grid.
///
/// `Clone` copies every row; since placements are `Copy` and never mutated
/// in place, a clone is a fully independent snapshot.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Grid {
    rows: [Row; HEIGHTS],
}

impl Grid {
    /// Create a grid with all 27 cells empty.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a grid from rows in Low, Mid, High order.
    #[must_use]
    pub const fn from_rows(rows: [Row; HEIGHTS]) -> Self {
        Self { rows }
    }

    /// Get one row.
    #[must_use]
    pub fn row(&self, height: GridHeight) -> &Row {
        &self.rows[height.index()]
    }

    /// Get the occupant of a cell.
    ///
    /// # Panics
    ///
    /// Panics if `column >= COLUMNS`.
    #[must_use]
    pub fn get(&self, height: GridHeight, column: usize) -> Option<&Placement> {
        self.rows[height.index()][column].as_ref()
    }

    /// Replace the occupant of a cell, returning the previous one.
    ///
    /// # Panics
    ///
    /// Panics if `column >= COLUMNS`.
    pub fn set(
        &mut self,
        height: GridHeight,
        column: usize,
        placement: Option<Placement>,
    ) -> Option<Placement> {
        std::mem::replace(&mut self.rows[height.index()][column], placement)
    }

    /// Empty every cell.
    pub fn clear(&mut self) {
        *self = Self::new();
    }

    /// Iterate over every cell as (height, column, occupant).
    pub fn cells(&self) -> impl Iterator<Item = (GridHeight, usize, Option<&Placement>)> + '_ {
        GridHeight::ALL.into_iter().flat_map(move |height| {
            self.row(height)
                .iter()
                .enumerate()
                .map(move |(column, cell)| (height, column, cell.as_ref()))
        })
    }

    /// Iterate over occupied cells only.
    pub fn placements(&self) -> impl Iterator<Item = (GridHeight, usize, &Placement)> + '_ {
        self.cells()
            .filter_map(|(height, column, cell)| cell.map(|p| (height, column, p)))
    }

    /// Number of occupied cells.
    #[must_use]
    pub fn occupied_count(&self) -> usize {
        self.placements().count()
    }

    /// Check whether every cell is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.iter().flatten().all(Option::is_none)
    }

    /// Lazily scan for links, row by row in Low, Mid, High order.
    ///
    /// Calling this again restarts the scan from the beginning.
    ///
    /// ```
    /// use rust_chargeup::core::{GamePiece, Grid, GridHeight, Link, Placement, TeamId};
    ///
    /// let mut grid = Grid::new();
    /// for column in 0..6 {
    ///     grid.set(GridHeight::Mid, column, Some(Placement::new(GamePiece::Cone, TeamId::new(0))));
    /// }
    ///
    /// let links: Vec<_> = grid.links().collect();
    /// assert_eq!(links, vec![Link::new(GridHeight::Mid, 0), Link::new(GridHeight::Mid, 3)]);
    /// ```
    #[must_use]
    pub fn links(&self) -> Links<'_> {
        Links {
            grid: self,
            row: 0,
            column: 0,
        }
    }

    /// Collect every link in scan order.
    #[must_use]
    pub fn link_positions(&self) -> SmallVec<[Link; MAX_LINKS]> {
        self.links().collect()
    }
}

/// Iterator over the links of a grid. See [`Grid::links`].
#[derive(Clone, Debug)]
pub struct Links<'a> {
    grid: &'a Grid,
    row: usize,
    column: usize,
}

impl Iterator for Links<'_> {
    type Item = Link;

    fn next(&mut self) -> Option<Link> {
        while self.row < HEIGHTS {
            let height = GridHeight::ALL[self.row];
            let cells = self.grid.row(height);

            while self.column + LINK_LENGTH <= COLUMNS {
                let start = self.column;
                if cells[start..start + LINK_LENGTH].iter().all(Option::is_some) {
                    self.column += LINK_LENGTH;
                    return Some(Link::new(height, start));
                }
                self.column += 1;
            }

            self.row += 1;
            self.column = 0;
        }
        None
    }
}

impl std::iter::FusedIterator for Links<'_> {}
