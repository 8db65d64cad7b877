use super::Matrix;
use crate::error::{MatrixError, Result};
use crate::storage::{MathArithmetic, Plain};

impl<T: MathArithmetic> Matrix<T> {
    /// Sum of all cells; zero for an empty matrix.
    ///
    /// Floats use compensated summation; integers wrap on overflow.
    pub fn sum(&self) -> T {
        T::accumulate(&self.data)
    }
}

/// Linear index of the first cell that no later cell strictly beats.
fn extreme_index<S>(cells: &[S], op: &'static str, beats: impl Fn(&S, &S) -> bool) -> Result<usize> {
    let (first, rest) = cells.split_first().ok_or(MatrixError::EmptyMatrix { op })?;
    let mut best = (0, first);
    for (i, cell) in rest.iter().enumerate() {
        if beats(cell, best.1) {
            best = (i + 1, cell);
        }
    }
    Ok(best.0)
}

impl<T: Plain + PartialOrd> Matrix<T> {
    /// Smallest cell. Ties keep the first in row-major order.
    ///
    /// # Errors
    /// [`MatrixError::EmptyMatrix`] if the matrix has no cells.
    pub fn min(&self) -> Result<T> {
        let i = extreme_index(&self.data, "min", |a, b| a < b)?;
        Ok(self.data[i].clone())
    }

    /// Largest cell. Ties keep the first in row-major order.
    ///
    /// # Errors
    /// [`MatrixError::EmptyMatrix`] if the matrix has no cells.
    pub fn max(&self) -> Result<T> {
        let i = extreme_index(&self.data, "max", |a, b| a > b)?;
        Ok(self.data[i].clone())
    }

    /// `(row, col)` of the first smallest cell.
    ///
    /// # Errors
    /// [`MatrixError::EmptyMatrix`] if the matrix has no cells.
    pub fn argmin(&self) -> Result<(u32, u32)> {
        let i = extreme_index(&self.data, "argmin", |a, b| a < b)?;
        self.to_coords(i)
    }

    /// `(row, col)` of the first largest cell.
    ///
    /// # Errors
    /// [`MatrixError::EmptyMatrix`] if the matrix has no cells.
    pub fn argmax(&self) -> Result<(u32, u32)> {
        let i = extreme_index(&self.data, "argmax", |a, b| a > b)?;
        self.to_coords(i)
    }
}

// Cells hold only 0 or 1, so the bytes order the same way `false < true` does.
impl Matrix<bool> {
    /// `false` if any cell is unset.
    ///
    /// # Errors
    /// [`MatrixError::EmptyMatrix`] if the matrix has no cells.
    pub fn min(&self) -> Result<bool> {
        let i = extreme_index(&self.data, "min", |a, b| a < b)?;
        Ok(self.data[i] != 0)
    }

    /// `true` if any cell is set.
    ///
    /// # Errors
    /// [`MatrixError::EmptyMatrix`] if the matrix has no cells.
    pub fn max(&self) -> Result<bool> {
        let i = extreme_index(&self.data, "max", |a, b| a > b)?;
        Ok(self.data[i] != 0)
    }

    /// `(row, col)` of the first `false` cell, or `(0, 0)` when all are set.
    ///
    /// # Errors
    /// [`MatrixError::EmptyMatrix`] if the matrix has no cells.
    pub fn argmin(&self) -> Result<(u32, u32)> {
        let i = extreme_index(&self.data, "argmin", |a, b| a < b)?;
        self.to_coords(i)
    }

    /// `(row, col)` of the first `true` cell, or `(0, 0)` when none is set.
    ///
    /// # Errors
    /// [`MatrixError::EmptyMatrix`] if the matrix has no cells.
    pub fn argmax(&self) -> Result<(u32, u32)> {
        let i = extreme_index(&self.data, "argmax", |a, b| a > b)?;
        self.to_coords(i)
    }
}
