use super::{Cursor, TraversalType};
use crate::error::{MatrixError, Result};
use crate::matrix::coords::to_index;
use crate::matrix::Matrix;
use crate::storage::Element;
use core::fmt;
use core::iter::FusedIterator;
use core::marker::PhantomData;

/// Shared traversal over a matrix, yielding `(row, col, value)`.
///
/// Each item's third component is `T::ConstRef<'a>`: `&T` for ordinary element
/// types, a plain `bool` for `Matrix<bool>`.
pub struct Iter<'a, T: Element> {
    matrix: &'a Matrix<T>,
    cursor: Cursor,
    end: Cursor,
}

impl<'a, T: Element> Iter<'a, T> {
    pub(crate) fn new(matrix: &'a Matrix<T>, cursor: Cursor) -> Self {
        let end = Cursor::end(cursor.order, matrix.rows, matrix.cols);
        Self { matrix, cursor, end }
    }

    /// Current position.
    #[inline(always)]
    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// Traversal order.
    #[inline(always)]
    pub fn order(&self) -> TraversalType {
        self.cursor.order
    }

    /// Returns `true` once the cursor sits on the end sentinel.
    #[inline(always)]
    pub fn is_end(&self) -> bool {
        self.cursor == self.end
    }

    /// Dereferences the current position without moving.
    ///
    /// # Errors
    /// [`MatrixError::OutOfRange`] if the cursor is outside the matrix, which
    /// includes the end sentinel.
    pub fn get(&self) -> Result<(u32, u32, T::ConstRef<'a>)> {
        let m: &'a Matrix<T> = self.matrix;
        let (row, col) = self
            .cursor
            .coords(m.rows, m.cols)
            .ok_or(MatrixError::out_of_range("iterator dereference"))?;
        let cell = &m.data[to_index(row, col, m.cols)];
        Ok((row, col, T::cell_ref(cell)))
    }

    /// Steps the cursor once without dereferencing. Stepping past the end
    /// sentinel is allowed; dereferencing there fails.
    #[inline]
    pub fn advance(&mut self) {
        self.cursor.advance(self.matrix.rows, self.matrix.cols);
    }
}

impl<'a, T: Element> Iterator for Iter<'a, T> {
    type Item = (u32, u32, T::ConstRef<'a>);

    fn next(&mut self) -> Option<Self::Item> {
        if self.is_end() {
            return None;
        }
        match self.get() {
            Ok(item) => {
                self.advance();
                Some(item)
            }
            Err(_) => {
                // Off the traversal path; park on the sentinel.
                self.cursor = self.end;
                None
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = if self.is_end() {
            0
        } else {
            self.cursor.remaining(self.matrix.rows, self.matrix.cols)
        };
        (n, Some(n))
    }
}

impl<T: Element> ExactSizeIterator for Iter<'_, T> {}

impl<T: Element> FusedIterator for Iter<'_, T> {}

impl<T: Element> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            matrix: self.matrix,
            cursor: self.cursor,
            end: self.end,
        }
    }
}

impl<T: Element> PartialEq for Iter<'_, T> {
    /// Two iterators are equal when they walk the same matrix in the same order
    /// and sit on the same position.
    fn eq(&self, other: &Self) -> bool {
        core::ptr::eq(self.matrix, other.matrix) && self.cursor == other.cursor
    }
}

impl<T: Element> Eq for Iter<'_, T> {}

impl<T: Element> fmt::Debug for Iter<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Iter")
            .field("cursor", &self.cursor)
            .field("end", &self.end)
            .finish_non_exhaustive()
    }
}

/// Exclusive traversal over a matrix, yielding `(row, col, access)`.
///
/// The access component is `&mut T` for ordinary element types and a
/// [`BoolRef`](crate::BoolRef) for `Matrix<bool>`. Every traversal order visits a
/// cell at most once, so the yielded references never alias.
pub struct IterMut<'a, T: Element> {
    ptr: *mut T::Storage,
    rows: u32,
    cols: u32,
    cursor: Cursor,
    end: Cursor,
    _marker: PhantomData<&'a mut Matrix<T>>,
}

unsafe impl<T: Element> Send for IterMut<'_, T> where T::Storage: Send {}
unsafe impl<T: Element> Sync for IterMut<'_, T> where T::Storage: Sync {}

impl<'a, T: Element> IterMut<'a, T> {
    pub(crate) fn new(matrix: &'a mut Matrix<T>, cursor: Cursor) -> Self {
        let (rows, cols) = (matrix.rows, matrix.cols);
        Self {
            ptr: matrix.data.as_mut_ptr(),
            rows,
            cols,
            cursor,
            end: Cursor::end(cursor.order, rows, cols),
            _marker: PhantomData,
        }
    }

    /// Current position.
    #[inline(always)]
    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// Traversal order.
    #[inline(always)]
    pub fn order(&self) -> TraversalType {
        self.cursor.order
    }

    /// Returns `true` once the cursor sits on the end sentinel.
    #[inline(always)]
    pub fn is_end(&self) -> bool {
        self.cursor == self.end
    }

    /// Exclusive access to the current cell without moving.
    ///
    /// # Errors
    /// [`MatrixError::OutOfRange`] if the cursor is outside the matrix.
    pub fn get_mut(&mut self) -> Result<(u32, u32, T::Ref<'_>)> {
        let (row, col) = self
            .cursor
            .coords(self.rows, self.cols)
            .ok_or(MatrixError::out_of_range("iterator dereference"))?;
        // SAFETY: `coords` bounds-checked the position and the returned borrow is
        // tied to `&mut self`, so no other access through this iterator is live.
        let cell = unsafe { &mut *self.ptr.add(to_index(row, col, self.cols)) };
        Ok((row, col, T::cell_mut(cell)))
    }

    /// Shared access to the current cell without moving.
    ///
    /// # Errors
    /// [`MatrixError::OutOfRange`] if the cursor is outside the matrix.
    pub fn get(&self) -> Result<(u32, u32, T::ConstRef<'_>)> {
        let (row, col) = self
            .cursor
            .coords(self.rows, self.cols)
            .ok_or(MatrixError::out_of_range("iterator dereference"))?;
        // SAFETY: bounds-checked above.
        let cell = unsafe { &*self.ptr.add(to_index(row, col, self.cols)) };
        Ok((row, col, T::cell_ref(cell)))
    }

    /// Steps the cursor once without dereferencing.
    #[inline]
    pub fn advance(&mut self) {
        self.cursor.advance(self.rows, self.cols);
    }
}

impl<'a, T: Element> Iterator for IterMut<'a, T> {
    type Item = (u32, u32, T::Ref<'a>);

    fn next(&mut self) -> Option<Self::Item> {
        if self.is_end() {
            return None;
        }
        let Some((row, col)) = self.cursor.coords(self.rows, self.cols) else {
            self.cursor = self.end;
            return None;
        };
        self.advance();
        // SAFETY: in bounds, and the cursor only moves forward along an order, so
        // this cell is never yielded again for the lifetime `'a`.
        let cell: &'a mut T::Storage = unsafe { &mut *self.ptr.add(to_index(row, col, self.cols)) };
        Some((row, col, T::cell_mut(cell)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = if self.is_end() {
            0
        } else {
            self.cursor.remaining(self.rows, self.cols)
        };
        (n, Some(n))
    }
}

impl<T: Element> ExactSizeIterator for IterMut<'_, T> {}

impl<T: Element> FusedIterator for IterMut<'_, T> {}

impl<T: Element> fmt::Debug for IterMut<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IterMut")
            .field("cursor", &self.cursor)
            .field("end", &self.end)
            .finish_non_exhaustive()
    }
}

impl<T: Element> Matrix<T> {
    /// Iterator positioned at the first cell of `order`.
    pub fn begin(&self, order: TraversalType) -> Iter<'_, T> {
        Iter::new(self, Cursor::begin(order, self.rows, self.cols))
    }

    /// Iterator positioned on the end sentinel of `order`.
    pub fn end(&self, order: TraversalType) -> Iter<'_, T> {
        Iter::new(self, Cursor::end(order, self.rows, self.cols))
    }

    /// Iterator starting at an arbitrary cursor.
    pub fn iter_at(&self, cursor: Cursor) -> Iter<'_, T> {
        Iter::new(self, cursor)
    }

    /// Row-major traversal.
    pub fn iter(&self) -> Iter<'_, T> {
        self.begin(TraversalType::Row)
    }

    /// Traversal in the given order.
    pub fn iter_order(&self, order: TraversalType) -> Iter<'_, T> {
        self.begin(order)
    }

    /// Exclusive row-major traversal.
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        self.iter_mut_order(TraversalType::Row)
    }

    /// Exclusive traversal in the given order. The end sentinel is fixed when
    /// the iterator is created.
    pub fn iter_mut_order(&mut self, order: TraversalType) -> IterMut<'_, T> {
        let cursor = Cursor::begin(order, self.rows, self.cols);
        IterMut::new(self, cursor)
    }

    /// Exclusive iterator starting at an arbitrary cursor.
    pub fn iter_mut_at(&mut self, cursor: Cursor) -> IterMut<'_, T> {
        IterMut::new(self, cursor)
    }
}

impl<'a, T: Element> IntoIterator for &'a Matrix<T> {
    type Item = (u32, u32, T::ConstRef<'a>);
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<'a, T: Element> IntoIterator for &'a mut Matrix<T> {
    type Item = (u32, u32, T::Ref<'a>);
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> IterMut<'a, T> {
        self.iter_mut()
    }
}
