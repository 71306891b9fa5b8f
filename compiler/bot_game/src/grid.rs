//! Toroidal board geometry.
//!
//! Rows are the first coordinate. Both axes wrap: stepping off one edge
//! lands on the opposite one.

use std::fmt;

use rand::Rng;

use crate::UnitId;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Location {
    pub row: usize,
    pub col: usize,
}

impl Location {
    pub const fn new(row: usize, col: usize) -> Self {
        Location { row, col }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.row, self.col)
    }
}

/// Tile occupancy for a `rows x cols` torus.
#[derive(Clone, Debug)]
pub struct Grid {
    rows: usize,
    cols: usize,
    tiles: Vec<Option<UnitId>>,
}

impl Grid {
    /// # Panics
    /// Panics if either side is zero.
    pub fn new(rows: usize, cols: usize) -> Self {
        assert!(rows > 0 && cols > 0, "grid sides must be non-zero");
        Grid {
            rows,
            cols,
            tiles: vec![None; rows * cols],
        }
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    fn index(&self, loc: Location) -> usize {
        loc.row * self.cols + loc.col
    }

    /// The unit standing on `loc`, if any.
    pub fn get(&self, loc: Location) -> Option<UnitId> {
        self.tiles.get(self.index(loc)).copied().flatten()
    }

    #[inline]
    pub fn is_free(&self, loc: Location) -> bool {
        self.get(loc).is_none()
    }

    pub(crate) fn place(&mut self, loc: Location, unit: UnitId) {
        let index = self.index(loc);
        if let Some(tile) = self.tiles.get_mut(index) {
            *tile = Some(unit);
        }
    }

    pub(crate) fn clear(&mut self, loc: Location) {
        let index = self.index(loc);
        if let Some(tile) = self.tiles.get_mut(index) {
            *tile = None;
        }
    }

    /// The eight surrounding tiles, row by row from the top left.
    pub fn neighbours(&self, loc: Location) -> [Location; 8] {
        let rows = [
            (loc.row + self.rows - 1) % self.rows,
            loc.row,
            (loc.row + 1) % self.rows,
        ];
        let cols = [
            (loc.col + self.cols - 1) % self.cols,
            loc.col,
            (loc.col + 1) % self.cols,
        ];

        let mut out = [loc; 8];
        let mut slot = 0;
        for (i, &row) in rows.iter().enumerate() {
            for (j, &col) in cols.iter().enumerate() {
                if i == 1 && j == 1 {
                    continue;
                }
                out[slot] = Location { row, col };
                slot += 1;
            }
        }
        out
    }

    /// Fewest king moves between two tiles, wrapping around both axes.
    pub fn distance(&self, a: Location, b: Location) -> usize {
        fn axis(a: usize, b: usize, len: usize) -> usize {
            let d = a.abs_diff(b);
            d.min(len - d)
        }
        axis(a.row, b.row, self.rows).max(axis(a.col, b.col, self.cols))
    }

    pub fn random_location(&self, rng: &mut impl Rng) -> Location {
        Location {
            row: rng.gen_range(0..self.rows),
            col: rng.gen_range(0..self.cols),
        }
    }

    /// Every tile, row by row.
    pub fn rows_iter(&self) -> impl Iterator<Item = &[Option<UnitId>]> {
        self.tiles.chunks(self.cols)
    }
}

#[cfg(test)]
mod tests;
