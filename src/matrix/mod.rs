//! `Matrix`: a dense, row-major 2D container over any [`Element`] type.
//!
//! The matrix owns a single flat buffer of `rows * cols` storage cells. Row views
//! and traversal iterators borrow into it; operators and reductions walk the
//! buffer directly.
//!
//! Element access comes in the element type's access form:
//!
//! - ordinary types hand out `&T` / `&mut T` and support `m[(row, col)]`;
//! - `Matrix<bool>` hands out plain `bool` values and [`BoolRef`](crate::BoolRef)
//!   proxies, since its cells are bytes.

mod bytes;
pub mod coords;
mod logical;
mod ops;
mod reduce;
mod serde_impl;
mod slice;

#[cfg(test)]
mod tests;

use crate::error::{AllocError, MatrixError, Result};
use crate::storage::{Element, Plain};
use crate::trace::trace_event;
use crate::view::{RowView, RowViewMut};
use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::ops::{Index, IndexMut};

/// A dense `rows x cols` matrix.
pub struct Matrix<T: Element> {
    pub(crate) data: Vec<T::Storage>,
    pub(crate) rows: u32,
    pub(crate) cols: u32,
}

/// Allocates room for `cells` storage cells, surfacing allocation failure.
pub(crate) fn try_alloc<S>(cells: usize) -> Result<Vec<S>> {
    let mut buf = Vec::new();
    buf.try_reserve_exact(cells).map_err(|_| {
        trace_event!(warn, cells, "matrix buffer allocation failed");
        AllocError { cells }
    })?;
    Ok(buf)
}

#[inline]
fn cell_count(rows: u32, cols: u32) -> usize {
    rows as usize * cols as usize
}

impl<T: Element> Matrix<T> {
    /// Creates a `rows x cols` matrix with every cell set to `T::default()`.
    ///
    /// # Panics
    /// Aborts like any `Vec` allocation if memory is exhausted; use
    /// [`Matrix::try_new`] to observe the failure instead.
    pub fn new(rows: u32, cols: u32) -> Self {
        Self::filled(rows, cols, T::default())
    }

    /// Like [`Matrix::new`], but reports allocation failure.
    ///
    /// # Errors
    /// [`MatrixError::Alloc`] if the buffer cannot be allocated.
    pub fn try_new(rows: u32, cols: u32) -> Result<Self> {
        let n = cell_count(rows, cols);
        let mut data = try_alloc(n)?;
        data.resize(n, T::default().into_storage());
        Ok(Self { data, rows, cols })
    }

    /// Creates a matrix with every cell set to `value`.
    pub fn filled(rows: u32, cols: u32, value: T) -> Self {
        Self {
            data: vec![value.into_storage(); cell_count(rows, cols)],
            rows,
            cols,
        }
    }

    /// Creates a matrix from row-major values.
    ///
    /// # Errors
    /// [`MatrixError::LengthMismatch`] if `values.len() != rows * cols`.
    pub fn from_vec(rows: u32, cols: u32, values: Vec<T>) -> Result<Self> {
        let expected = cell_count(rows, cols);
        if values.len() != expected {
            return Err(MatrixError::LengthMismatch {
                expected,
                found: values.len(),
            });
        }
        Ok(Self {
            data: values.into_iter().map(T::into_storage).collect(),
            rows,
            cols,
        })
    }

    /// Creates a matrix from a slice of equally long rows.
    ///
    /// # Errors
    /// [`MatrixError::RaggedRows`] if a row differs in length from the first, or
    /// [`MatrixError::OutOfRange`] if a dimension does not fit in `u32`.
    pub fn from_rows(rows: &[Vec<T>]) -> Result<Self> {
        let width = rows.first().map_or(0, Vec::len);
        for (row, values) in rows.iter().enumerate() {
            if values.len() != width {
                return Err(MatrixError::RaggedRows {
                    row,
                    expected: width,
                    found: values.len(),
                });
            }
        }
        let n_rows = u32::try_from(rows.len()).map_err(|_| MatrixError::out_of_range("row count"))?;
        let n_cols = u32::try_from(width).map_err(|_| MatrixError::out_of_range("column count"))?;
        let mut data = try_alloc(rows.len() * width)?;
        data.extend(rows.iter().flatten().cloned().map(T::into_storage));
        Ok(Self {
            data,
            rows: n_rows,
            cols: n_cols,
        })
    }

    /// Creates a matrix by calling `f(row, col)` for every cell in row-major order.
    pub fn from_fn(rows: u32, cols: u32, mut f: impl FnMut(u32, u32) -> T) -> Self {
        let mut data = Vec::with_capacity(cell_count(rows, cols));
        for r in 0..rows {
            for c in 0..cols {
                data.push(f(r, c).into_storage());
            }
        }
        Self { data, rows, cols }
    }

    #[inline(always)]
    pub(crate) fn from_storage_vec(rows: u32, cols: u32, data: Vec<T::Storage>) -> Self {
        debug_assert_eq!(data.len(), cell_count(rows, cols));
        Self { data, rows, cols }
    }

    /// Number of rows.
    #[inline(always)]
    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Number of columns.
    #[inline(always)]
    pub fn cols(&self) -> u32 {
        self.cols
    }

    /// `(rows, cols)`.
    #[inline(always)]
    pub fn shape(&self) -> (u32, u32) {
        (self.rows, self.cols)
    }

    /// Number of cells, `rows * cols`.
    #[inline(always)]
    pub fn size(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if either dimension is zero.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.rows == 0 || self.cols == 0
    }

    /// The raw storage buffer in row-major order.
    #[inline(always)]
    pub fn storage(&self) -> &[T::Storage] {
        &self.data
    }

    /// Consumes the matrix, returning its values in row-major order.
    pub fn into_vec(self) -> Vec<T> {
        self.data.iter().map(T::from_storage).collect()
    }

    /// Linear index of `(row, col)`. Unchecked; see [`coords::to_index`].
    #[inline(always)]
    pub fn to_index(&self, row: u32, col: u32) -> usize {
        coords::to_index(row, col, self.cols)
    }

    /// `(row, col)` of a linear index.
    ///
    /// # Errors
    /// [`MatrixError::OutOfRange`] if `linear >= self.size()`.
    #[inline]
    pub fn to_coords(&self, linear: usize) -> Result<(u32, u32)> {
        coords::to_coords(linear, self.rows, self.cols)
    }

    #[inline]
    fn checked_index(&self, row: u32, col: u32) -> Result<usize> {
        if row >= self.rows || col >= self.cols {
            return Err(MatrixError::out_of_range("matrix element"));
        }
        Ok(self.to_index(row, col))
    }

    #[inline]
    fn row_range(&self, row: u32) -> Result<core::ops::Range<usize>> {
        if row >= self.rows {
            return Err(MatrixError::out_of_range("matrix row"));
        }
        let start = self.to_index(row, 0);
        Ok(start..start + self.cols as usize)
    }

    /// Shared view of row `row`.
    ///
    /// # Errors
    /// [`MatrixError::OutOfRange`] if `row >= self.rows()`.
    pub fn row(&self, row: u32) -> Result<RowView<'_, T>> {
        let range = self.row_range(row)?;
        Ok(RowView::new(&self.data[range]))
    }

    /// Exclusive view of row `row`.
    ///
    /// # Errors
    /// [`MatrixError::OutOfRange`] if `row >= self.rows()`.
    pub fn row_mut(&mut self, row: u32) -> Result<RowViewMut<'_, T>> {
        let range = self.row_range(row)?;
        Ok(RowViewMut::new(&mut self.data[range]))
    }

    /// Shared access to `(row, col)`.
    ///
    /// # Errors
    /// [`MatrixError::OutOfRange`] if the cell is outside the matrix.
    #[inline]
    pub fn get(&self, row: u32, col: u32) -> Result<T::ConstRef<'_>> {
        let i = self.checked_index(row, col)?;
        Ok(T::cell_ref(&self.data[i]))
    }

    /// Exclusive access to `(row, col)`.
    ///
    /// # Errors
    /// [`MatrixError::OutOfRange`] if the cell is outside the matrix.
    #[inline]
    pub fn get_mut(&mut self, row: u32, col: u32) -> Result<T::Ref<'_>> {
        let i = self.checked_index(row, col)?;
        Ok(T::cell_mut(&mut self.data[i]))
    }

    /// Owned copy of `(row, col)`.
    ///
    /// # Errors
    /// [`MatrixError::OutOfRange`] if the cell is outside the matrix.
    #[inline]
    pub fn value(&self, row: u32, col: u32) -> Result<T> {
        let i = self.checked_index(row, col)?;
        Ok(T::from_storage(&self.data[i]))
    }

    /// Overwrites `(row, col)`.
    ///
    /// # Errors
    /// [`MatrixError::OutOfRange`] if the cell is outside the matrix.
    pub fn set(&mut self, row: u32, col: u32, value: T) -> Result<()> {
        let i = self.checked_index(row, col)?;
        self.data[i] = value.into_storage();
        Ok(())
    }

    /// Overwrites every cell with `value`.
    pub fn fill(&mut self, value: T) {
        let cell = value.into_storage();
        self.data.fill(cell);
    }

    /// Returns `true` if `pred` holds for every cell. Vacuously true when empty.
    ///
    /// Cells are visited in storage order and the scan stops at the first failure.
    pub fn all(&self, mut pred: impl FnMut(&T) -> bool) -> bool {
        self.data.iter().all(|cell| T::with_value(cell, &mut pred))
    }

    /// Returns `true` if `pred` holds for at least one cell. False when empty.
    pub fn any_of(&self, mut pred: impl FnMut(&T) -> bool) -> bool {
        self.data.iter().any(|cell| T::with_value(cell, &mut pred))
    }

    /// Returns `true` if `pred` holds for no cell. True when empty.
    pub fn none_of(&self, pred: impl FnMut(&T) -> bool) -> bool {
        !self.any_of(pred)
    }

    /// Builds a same-shape matrix holding `if_true` where `pred` holds and
    /// `if_false` elsewhere.
    ///
    /// # Errors
    /// [`MatrixError::Alloc`] if the result cannot be allocated.
    pub fn select(&self, mut pred: impl FnMut(&T) -> bool, if_true: T, if_false: T) -> Result<Self> {
        let (yes, no) = (if_true.into_storage(), if_false.into_storage());
        let mut data = try_alloc(self.data.len())?;
        data.extend(self.data.iter().map(|cell| {
            if T::with_value(cell, &mut pred) {
                yes.clone()
            } else {
                no.clone()
            }
        }));
        Ok(Self::from_storage_vec(self.rows, self.cols, data))
    }

    /// Applies `f` to every cell, producing a matrix of another element type.
    pub fn map<U: Element>(&self, mut f: impl FnMut(&T) -> U) -> Matrix<U> {
        let data = self
            .data
            .iter()
            .map(|cell| T::with_value(cell, &mut f).into_storage())
            .collect();
        Matrix::from_storage_vec(self.rows, self.cols, data)
    }
}

impl<T: Plain> Matrix<T> {
    /// The cells as a row-major slice.
    #[inline(always)]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// The cells as a mutable row-major slice.
    #[inline(always)]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }
}

impl<T: Element> Clone for Matrix<T> {
    fn clone(&self) -> Self {
        Self {
            data: self.data.clone(),
            rows: self.rows,
            cols: self.cols,
        }
    }
}

impl<T: Element> Default for Matrix<T> {
    /// An empty `0 x 0` matrix.
    fn default() -> Self {
        Self {
            data: Vec::new(),
            rows: 0,
            cols: 0,
        }
    }
}

impl<T: Plain> Index<(u32, u32)> for Matrix<T> {
    type Output = T;

    /// # Panics
    /// Panics if `(row, col)` is outside the matrix.
    #[track_caller]
    fn index(&self, (row, col): (u32, u32)) -> &T {
        match self.checked_index(row, col) {
            Ok(i) => &self.data[i],
            Err(e) => panic!("{e}"),
        }
    }
}

impl<T: Plain> IndexMut<(u32, u32)> for Matrix<T> {
    #[track_caller]
    fn index_mut(&mut self, (row, col): (u32, u32)) -> &mut T {
        match self.checked_index(row, col) {
            Ok(i) => &mut self.data[i],
            Err(e) => panic!("{e}"),
        }
    }
}

impl<T: Element> PartialEq for Matrix<T> {
    fn eq(&self, other: &Self) -> bool {
        self.shape() == other.shape() && self.data == other.data
    }
}

impl<T: Element> Eq for Matrix<T> where T::Storage: Eq {}

impl<T: Element> Hash for Matrix<T>
where
    T::Storage: Hash,
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.rows.hash(state);
        self.cols.hash(state);
        self.data.hash(state);
    }
}

impl<T: Element> PartialOrd for Matrix<T>
where
    T::Storage: PartialOrd,
{
    /// Orders by row count, then column count, then the first differing cell in
    /// row-major order.
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match self.shape().cmp(&other.shape()) {
            Ordering::Equal => self.data.partial_cmp(&other.data),
            ord => Some(ord),
        }
    }
}

impl<T: Element> fmt::Debug for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        struct Rows<'a, T: Element>(&'a Matrix<T>);

        impl<T: Element> fmt::Debug for Rows<'_, T> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                let m = self.0;
                let mut list = f.debug_list();
                if m.cols > 0 {
                    for row in m.data.chunks(m.cols as usize) {
                        list.entry(&RowView::<T>::new(row));
                    }
                }
                list.finish()
            }
        }

        f.debug_struct("Matrix")
            .field("rows", &self.rows)
            .field("cols", &self.cols)
            .field("data", &Rows(self))
            .finish()
    }
}

impl<T: Element + fmt::Display> fmt::Display for Matrix<T> {
    /// One line per row, cells separated by a single space.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.cols == 0 {
            return Ok(());
        }
        for (r, row) in self.data.chunks(self.cols as usize).enumerate() {
            if r > 0 {
                writeln!(f)?;
            }
            for (c, cell) in row.iter().enumerate() {
                if c > 0 {
                    f.write_str(" ")?;
                }
                T::with_value(cell, |v| fmt::Display::fmt(v, f))?;
            }
        }
        Ok(())
    }
}
