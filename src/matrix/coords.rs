//! Row-major mapping between linear storage indices and `(row, col)` pairs.

use crate::error::{MatrixError, Result};

/// Linear index of `(row, col)` in a buffer with `cols` columns.
///
/// No bounds check is performed; callers validate the coordinates.
#[inline(always)]
pub const fn to_index(row: u32, col: u32, cols: u32) -> usize {
    row as usize * cols as usize + col as usize
}

/// `(row, col)` of a linear index in a `rows x cols` buffer.
///
/// # Errors
/// [`MatrixError::OutOfRange`] if `cols == 0` or `linear >= rows * cols`.
#[allow(clippy::cast_possible_truncation)]
pub fn to_coords(linear: usize, rows: u32, cols: u32) -> Result<(u32, u32)> {
    if cols == 0 || linear >= rows as usize * cols as usize {
        return Err(MatrixError::out_of_range("linear index"));
    }
    let cols = cols as usize;
    // Both quotients are bounded by `rows` and `cols`, so they fit in u32.
    Ok(((linear / cols) as u32, (linear % cols) as u32))
}
