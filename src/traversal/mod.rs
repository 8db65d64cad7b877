//! Traversal orders and the cursor state machine behind every matrix iterator.
//!
//! A [`Cursor`] is a signed `(row, col)` pair tagged with a [`TraversalType`].
//! Each order has a start position, a step rule and a "one past end" sentinel:
//!
//! | Order          | Start        | Step                                  | End sentinel        |
//! |----------------|--------------|---------------------------------------|---------------------|
//! | `Row`          | `(0, 0)`     | `col += 1`, wrapping to the next row  | `(rows, 0)`         |
//! | `Column`       | `(0, 0)`     | `row += 1`, wrapping to the next col  | `(0, cols)`         |
//! | `Diagonal`     | `(0, 0)`     | `row += 1, col += 1`                  | `(L, L)`            |
//! | `AntiDiagonal` | `(0, cols-1)`| `row += 1, col -= 1`                  | `(L, cols - L - 1)` |
//!
//! where `L = min(rows, cols)`. Every sentinel lies outside the matrix; for an
//! anti-diagonal over a tall matrix the sentinel column is `-1`, which is why the
//! coordinates are signed. On an empty matrix the start is the sentinel itself.

mod iter;

pub use iter::{Iter, IterMut};

use serde::{Deserialize, Serialize};

/// The order in which an iterator visits cells.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TraversalType {
    /// Row-major: left to right, top to bottom.
    #[default]
    Row,
    /// Column-major: top to bottom, left to right.
    Column,
    /// The main diagonal `(i, i)`.
    Diagonal,
    /// The anti-diagonal `(i, cols - 1 - i)`.
    AntiDiagonal,
}

impl TraversalType {
    /// All four orders.
    pub const ALL: [TraversalType; 4] = [
        TraversalType::Row,
        TraversalType::Column,
        TraversalType::Diagonal,
        TraversalType::AntiDiagonal,
    ];
}

/// A position in a traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cursor {
    /// Traversal order this cursor steps through.
    pub order: TraversalType,
    /// Current row; may be out of range.
    pub row: i64,
    /// Current column; may be out of range.
    pub col: i64,
}

impl Cursor {
    /// Creates a cursor at an arbitrary position.
    #[inline(always)]
    pub const fn new(order: TraversalType, row: i64, col: i64) -> Self {
        Self { order, row, col }
    }

    /// The first position of `order` over a `rows x cols` matrix.
    pub fn begin(order: TraversalType, rows: u32, cols: u32) -> Self {
        if rows == 0 || cols == 0 {
            return Self::end(order, rows, cols);
        }
        match order {
            TraversalType::AntiDiagonal => Self::new(order, 0, i64::from(cols) - 1),
            _ => Self::new(order, 0, 0),
        }
    }

    /// The "one past end" sentinel of `order` over a `rows x cols` matrix.
    pub fn end(order: TraversalType, rows: u32, cols: u32) -> Self {
        let (rows, cols) = (i64::from(rows), i64::from(cols));
        let l = rows.min(cols);
        match order {
            TraversalType::Row => Self::new(order, rows, 0),
            TraversalType::Column => Self::new(order, 0, cols),
            TraversalType::Diagonal => Self::new(order, l, l),
            TraversalType::AntiDiagonal => Self::new(order, l, cols - l - 1),
        }
    }

    /// Moves one step along the order. Never fails; the result may be out of range.
    pub fn advance(&mut self, rows: u32, cols: u32) {
        match self.order {
            TraversalType::Row => {
                self.col += 1;
                if self.col == i64::from(cols) {
                    self.col = 0;
                    self.row += 1;
                }
            }
            TraversalType::Column => {
                self.row += 1;
                if self.row == i64::from(rows) {
                    self.row = 0;
                    self.col += 1;
                }
            }
            TraversalType::Diagonal => {
                self.row += 1;
                self.col += 1;
            }
            TraversalType::AntiDiagonal => {
                self.row += 1;
                self.col -= 1;
            }
        }
    }

    /// Returns `true` if the cursor addresses a cell of a `rows x cols` matrix.
    #[inline]
    pub fn in_bounds(&self, rows: u32, cols: u32) -> bool {
        self.coords(rows, cols).is_some()
    }

    /// The cell addressed by the cursor, or `None` if it is out of range.
    #[inline]
    pub fn coords(&self, rows: u32, cols: u32) -> Option<(u32, u32)> {
        let row = u32::try_from(self.row).ok().filter(|&r| r < rows)?;
        let col = u32::try_from(self.col).ok().filter(|&c| c < cols)?;
        Some((row, col))
    }

    /// Number of cells this cursor visits before it leaves the matrix,
    /// including the current one. Zero when out of range.
    pub fn remaining(&self, rows: u32, cols: u32) -> usize {
        let Some((row, col)) = self.coords(rows, cols) else {
            return 0;
        };
        let (row, col, rows, cols) = (row as usize, col as usize, rows as usize, cols as usize);
        match self.order {
            TraversalType::Row => rows * cols - (row * cols + col),
            TraversalType::Column => rows * cols - (col * rows + row),
            TraversalType::Diagonal => (rows - row).min(cols - col),
            TraversalType::AntiDiagonal => (rows - row).min(col + 1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn walk(order: TraversalType, rows: u32, cols: u32) -> Vec<(i64, i64)> {
        let mut cursor = Cursor::begin(order, rows, cols);
        let end = Cursor::end(order, rows, cols);
        let mut seen = Vec::new();
        while cursor != end {
            assert!(cursor.in_bounds(rows, cols), "{cursor:?} escaped before the sentinel");
            seen.push((cursor.row, cursor.col));
            cursor.advance(rows, cols);
        }
        seen
    }

    #[test]
    fn test_sentinels() {
        assert_eq!(Cursor::end(TraversalType::Row, 3, 4), Cursor::new(TraversalType::Row, 3, 0));
        assert_eq!(Cursor::end(TraversalType::Column, 3, 4), Cursor::new(TraversalType::Column, 0, 4));
        assert_eq!(Cursor::end(TraversalType::Diagonal, 3, 4), Cursor::new(TraversalType::Diagonal, 3, 3));
        assert_eq!(
            Cursor::end(TraversalType::AntiDiagonal, 3, 4),
            Cursor::new(TraversalType::AntiDiagonal, 3, 0)
        );
        // Tall anti-diagonal: the sentinel column goes negative.
        assert_eq!(
            Cursor::end(TraversalType::AntiDiagonal, 4, 2),
            Cursor::new(TraversalType::AntiDiagonal, 2, -1)
        );
    }

    #[test]
    fn test_walk_orders() {
        assert_eq!(walk(TraversalType::Row, 2, 2), vec![(0, 0), (0, 1), (1, 0), (1, 1)]);
        assert_eq!(walk(TraversalType::Column, 2, 3), vec![(0, 0), (1, 0), (0, 1), (1, 1), (0, 2), (1, 2)]);
        assert_eq!(walk(TraversalType::Diagonal, 2, 5), vec![(0, 0), (1, 1)]);
        assert_eq!(walk(TraversalType::AntiDiagonal, 3, 4), vec![(0, 3), (1, 2), (2, 1)]);
        assert_eq!(walk(TraversalType::AntiDiagonal, 4, 2), vec![(0, 1), (1, 0)]);
    }

    #[test]
    fn test_empty_matrix_begin_is_end() {
        for order in TraversalType::ALL {
            for (rows, cols) in [(0, 0), (0, 3), (3, 0)] {
                assert_eq!(Cursor::begin(order, rows, cols), Cursor::end(order, rows, cols));
                assert!(walk(order, rows, cols).is_empty());
            }
        }
    }

    #[test]
    fn test_remaining_matches_walk() {
        for order in TraversalType::ALL {
            for (rows, cols) in [(1, 1), (2, 3), (3, 2), (4, 4), (1, 5)] {
                let mut cursor = Cursor::begin(order, rows, cols);
                let total = walk(order, rows, cols).len();
                assert_eq!(cursor.remaining(rows, cols), total);
                cursor.advance(rows, cols);
                assert_eq!(cursor.remaining(rows, cols), total - 1);
                assert_eq!(Cursor::end(order, rows, cols).remaining(rows, cols), 0);
            }
        }
    }

    #[test]
    fn test_cursor_serde() {
        let cursor = Cursor::new(TraversalType::AntiDiagonal, 2, -1);
        let json = serde_json::to_string(&cursor).unwrap();
        assert_eq!(json, r#"{"order":"AntiDiagonal","row":2,"col":-1}"#);
        let back: Cursor = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cursor);
    }
}
