//! Sub-block copies, pastes and line extraction.
//!
//! Range ends are signed: `-1` stands for the natural limit (the row count, the
//! column count, or `min(rows, cols)` for the diagonals). Any other negative end
//! is rejected.

use super::{coords::to_index, Matrix};
use crate::error::{MatrixError, Result};
use crate::storage::Element;
use crate::trace::trace_event;
use crate::traversal::TraversalType;

/// Resolves a signed end bound against `limit`.
fn resolve_end(end: i64, limit: u32, context: &'static str) -> Result<u32> {
    if end == -1 {
        return Ok(limit);
    }
    match u32::try_from(end) {
        Ok(e) if e <= limit => Ok(e),
        _ => Err(MatrixError::out_of_range(context)),
    }
}

/// Validates `start..end` against `limit`, with `end == -1` meaning `limit`.
fn resolve_range(start: i64, end: i64, limit: u32, context: &'static str) -> Result<(u32, u32)> {
    let s = u32::try_from(start).map_err(|_| MatrixError::out_of_range(context))?;
    let e = resolve_end(end, limit, context)?;
    if s > e {
        return Err(MatrixError::out_of_range(context));
    }
    Ok((s, e))
}

impl<T: Element> Matrix<T> {
    /// Deep copy of the block `[start_row, end_row) x [start_col, end_col)`.
    ///
    /// # Errors
    /// [`MatrixError::OutOfRange`] if a bound exceeds the matrix, an end is
    /// negative other than `-1`, or a start is past its end.
    pub fn copy(&self, start_row: u32, start_col: u32, end_row: i64, end_col: i64) -> Result<Self> {
        let r_end = resolve_end(end_row, self.rows, "copy row range")?;
        let c_end = resolve_end(end_col, self.cols, "copy column range")?;
        if start_row > self.rows || start_row > r_end {
            return Err(MatrixError::out_of_range("copy row range"));
        }
        if start_col > self.cols || start_col > c_end {
            return Err(MatrixError::out_of_range("copy column range"));
        }

        let (h, w) = (r_end - start_row, c_end - start_col);
        let mut data = super::try_alloc(h as usize * w as usize)?;
        for r in start_row..r_end {
            let first = to_index(r, start_col, self.cols);
            data.extend_from_slice(&self.data[first..first + w as usize]);
        }
        Ok(Self::from_storage_vec(h, w, data))
    }

    /// Deep copy of the whole matrix.
    pub fn copy_all(&self) -> Self {
        self.clone()
    }

    /// Writes `source` into this matrix with its top-left cell at
    /// `(dest_row, dest_col)`. An empty source is a no-op.
    ///
    /// # Errors
    /// [`MatrixError::OutOfRange`] if the block would leave the matrix; nothing is
    /// written in that case.
    pub fn paste(&mut self, source: &Self, dest_row: u32, dest_col: u32) -> Result<()> {
        let (h, w) = source.shape();
        if h == 0 || w == 0 {
            return Ok(());
        }
        if dest_row > self.rows || dest_col > self.cols {
            return Err(MatrixError::out_of_range("paste start"));
        }
        if h > self.rows - dest_row || w > self.cols - dest_col {
            return Err(MatrixError::out_of_range("paste extent"));
        }

        let w = w as usize;
        for (i, src) in source.data.chunks_exact(w).enumerate() {
            // `i < h <= rows - dest_row`, so the row stays in range.
            #[allow(clippy::cast_possible_truncation)]
            let first = to_index(dest_row + i as u32, dest_col, self.cols);
            self.data[first..first + w].clone_from_slice(src);
        }
        Ok(())
    }

    /// Copies the block `[src_row, end_row) x [src_col, end_col)` of this matrix
    /// onto itself at `(dest_row, dest_col)`. Overlapping blocks are handled by
    /// snapshotting the source first.
    ///
    /// # Errors
    /// As [`Matrix::copy`] for the source block and [`Matrix::paste`] for the
    /// destination.
    pub fn paste_within(
        &mut self,
        src_row: u32,
        src_col: u32,
        end_row: i64,
        end_col: i64,
        dest_row: u32,
        dest_col: u32,
    ) -> Result<()> {
        let snapshot = self.copy(src_row, src_col, end_row, end_col)?;
        trace_event!(
            debug,
            rows = snapshot.rows,
            cols = snapshot.cols,
            "self-paste through snapshot"
        );
        self.paste(&snapshot, dest_row, dest_col)
    }

    /// Pastes the whole matrix onto itself at `(dest_row, dest_col)`.
    ///
    /// # Errors
    /// [`MatrixError::OutOfRange`] unless the matrix is empty or the offset is `(0, 0)`.
    pub fn paste_self(&mut self, dest_row: u32, dest_col: u32) -> Result<()> {
        self.paste_within(0, 0, -1, -1, dest_row, dest_col)
    }

    /// Values of row `row` over columns `[start, end)`.
    ///
    /// # Errors
    /// [`MatrixError::OutOfRange`] if the row does not exist, `start` is negative,
    /// or the range is invalid.
    pub fn get_row(&self, row: u32, start: i64, end: i64) -> Result<Vec<T>> {
        if row >= self.rows {
            return Err(MatrixError::out_of_range("row index"));
        }
        let (s, e) = resolve_range(start, end, self.cols, "row slice")?;
        let first = to_index(row, 0, self.cols);
        Ok(self.data[first + s as usize..first + e as usize]
            .iter()
            .map(T::from_storage)
            .collect())
    }

    /// Values of column `col` over rows `[start, end)`.
    ///
    /// # Errors
    /// [`MatrixError::OutOfRange`] if the column does not exist, `start` is
    /// negative, or the range is invalid.
    pub fn get_column(&self, col: u32, start: i64, end: i64) -> Result<Vec<T>> {
        if col >= self.cols {
            return Err(MatrixError::out_of_range("column index"));
        }
        let (s, e) = resolve_range(start, end, self.rows, "column slice")?;
        Ok((s..e)
            .map(|r| T::from_storage(&self.data[to_index(r, col, self.cols)]))
            .collect())
    }

    /// Values of the main diagonal over `[start, end)`. A negative `start` is
    /// clamped to zero.
    ///
    /// # Errors
    /// [`MatrixError::OutOfRange`] if the range is invalid.
    pub fn get_diagonal(&self, start: i64, end: i64) -> Result<Vec<T>> {
        let limit = self.rows.min(self.cols);
        let (s, e) = resolve_range(start.max(0), end, limit, "diagonal slice")?;
        Ok((s..e)
            .map(|i| T::from_storage(&self.data[to_index(i, i, self.cols)]))
            .collect())
    }

    /// Values of the anti-diagonal `(i, cols - 1 - i)` over `[start, end)`. A
    /// negative `start` is clamped to zero.
    ///
    /// # Errors
    /// [`MatrixError::OutOfRange`] if the range is invalid.
    pub fn get_anti_diagonal(&self, start: i64, end: i64) -> Result<Vec<T>> {
        let limit = self.rows.min(self.cols);
        let (s, e) = resolve_range(start.max(0), end, limit, "anti-diagonal slice")?;
        Ok((s..e)
            .map(|i| T::from_storage(&self.data[to_index(i, self.cols - 1 - i, self.cols)]))
            .collect())
    }

    /// All values of row `row`.
    ///
    /// # Errors
    /// [`MatrixError::OutOfRange`] if the row does not exist.
    pub fn row_values(&self, row: u32) -> Result<Vec<T>> {
        self.get_row(row, 0, -1)
    }

    /// All values of column `col`.
    ///
    /// # Errors
    /// [`MatrixError::OutOfRange`] if the column does not exist.
    pub fn column_values(&self, col: u32) -> Result<Vec<T>> {
        self.get_column(col, 0, -1)
    }

    /// The main diagonal.
    pub fn diagonal(&self) -> Vec<T> {
        self.line(TraversalType::Diagonal)
    }

    /// The anti-diagonal.
    pub fn anti_diagonal(&self) -> Vec<T> {
        self.line(TraversalType::AntiDiagonal)
    }

    fn line(&self, order: TraversalType) -> Vec<T> {
        self.iter_order(order)
            .map(|(r, c, _)| T::from_storage(&self.data[to_index(r, c, self.cols)]))
            .collect()
    }
}
