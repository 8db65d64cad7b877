//! Borrowed views over a single matrix row.
//!
//! A row is a contiguous run of storage cells, so both views are thin wrappers
//! around a slice. Indexing yields the element type's access form: `&T` / `&mut T`
//! for ordinary types and `bool` / [`BoolRef`](super::BoolRef) for booleans.

use crate::error::{MatrixError, Result};
use crate::storage::{Element, Plain};
use core::fmt;

/// Shared view of one row.
pub struct RowView<'a, T: Element> {
    cells: &'a [T::Storage],
}

/// Exclusive view of one row.
pub struct RowViewMut<'a, T: Element> {
    cells: &'a mut [T::Storage],
}

impl<'a, T: Element> RowView<'a, T> {
    #[inline(always)]
    pub(crate) fn new(cells: &'a [T::Storage]) -> Self {
        Self { cells }
    }

    /// Number of cells in the row.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns `true` if the row has no cells.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Returns the element at `col`.
    ///
    /// # Errors
    /// [`MatrixError::OutOfRange`] if `col >= self.len()`.
    #[inline]
    pub fn get(&self, col: usize) -> Result<T::ConstRef<'a>> {
        let cells: &'a [T::Storage] = self.cells;
        cells
            .get(col)
            .map(T::cell_ref)
            .ok_or(MatrixError::out_of_range("row view column"))
    }

    /// Returns an owned copy of the element at `col`.
    ///
    /// # Errors
    /// [`MatrixError::OutOfRange`] if `col >= self.len()`.
    #[inline]
    pub fn value(&self, col: usize) -> Result<T> {
        self.cells
            .get(col)
            .map(T::from_storage)
            .ok_or(MatrixError::out_of_range("row view column"))
    }

    /// Iterates over the row's values.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = T> + 'a {
        self.cells.iter().map(T::from_storage)
    }

    /// Raw storage cells of the row.
    #[inline(always)]
    pub fn storage(&self) -> &'a [T::Storage] {
        self.cells
    }
}

impl<'a, T: Plain> RowView<'a, T> {
    /// The row as a plain slice.
    #[inline(always)]
    pub fn as_slice(&self) -> &'a [T] {
        self.cells
    }
}

impl<T: Element> Clone for RowView<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Element> Copy for RowView<'_, T> {}

impl<T: Element> fmt::Debug for RowView<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<'a, T: Element> RowViewMut<'a, T> {
    #[inline(always)]
    pub(crate) fn new(cells: &'a mut [T::Storage]) -> Self {
        Self { cells }
    }

    /// Number of cells in the row.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns `true` if the row has no cells.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Returns the element at `col`.
    ///
    /// # Errors
    /// [`MatrixError::OutOfRange`] if `col >= self.len()`.
    #[inline]
    pub fn get(&self, col: usize) -> Result<T::ConstRef<'_>> {
        self.cells
            .get(col)
            .map(T::cell_ref)
            .ok_or(MatrixError::out_of_range("row view column"))
    }

    /// Returns exclusive access to the element at `col`.
    ///
    /// # Errors
    /// [`MatrixError::OutOfRange`] if `col >= self.len()`.
    #[inline]
    pub fn get_mut(&mut self, col: usize) -> Result<T::Ref<'_>> {
        self.cells
            .get_mut(col)
            .map(T::cell_mut)
            .ok_or(MatrixError::out_of_range("row view column"))
    }

    /// Overwrites the element at `col`.
    ///
    /// # Errors
    /// [`MatrixError::OutOfRange`] if `col >= self.len()`.
    pub fn set(&mut self, col: usize, value: T) -> Result<()> {
        let cell = self
            .cells
            .get_mut(col)
            .ok_or(MatrixError::out_of_range("row view column"))?;
        *cell = value.into_storage();
        Ok(())
    }

    /// Overwrites every cell of the row.
    pub fn fill(&mut self, value: T) {
        let cell = value.into_storage();
        self.cells.fill(cell);
    }

    /// Iterates over the row's values.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = T> + '_ {
        self.cells.iter().map(T::from_storage)
    }

    /// Raw storage cells of the row.
    #[inline(always)]
    pub fn storage(&self) -> &[T::Storage] {
        self.cells
    }

    /// Downgrades to a shared view.
    #[inline(always)]
    pub fn as_view(&self) -> RowView<'_, T> {
        RowView::new(self.cells)
    }
}

impl<T: Plain> RowViewMut<'_, T> {
    /// The row as a plain slice.
    #[inline(always)]
    pub fn as_slice(&self) -> &[T] {
        self.cells
    }

    /// The row as a mutable slice.
    #[inline(always)]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self.cells
    }
}

impl<T: Element> fmt::Debug for RowViewMut<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
