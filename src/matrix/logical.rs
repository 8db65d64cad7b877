//! Boolean mask operations on `Matrix<bool>`.
//!
//! Cells are bytes holding 0 or 1, so the logical operators reduce to byte-wise
//! `&`, `|` and `^`.

use super::ops::{map_cells, zip_cells};
use super::Matrix;
use crate::error::Result;

impl Matrix<bool> {
    fn logical_zip(&self, rhs: &Self, op: &'static str, f: fn(u8, u8) -> u8) -> Result<Self> {
        self.check_shape(rhs, op)?;
        let data = zip_cells(&self.data, &rhs.data, f)?;
        Ok(Self::from_storage_vec(self.rows, self.cols, data))
    }

    fn logical_map(&self, f: impl Fn(u8) -> u8 + Send + Sync) -> Result<Self> {
        let data = map_cells(&self.data, f)?;
        Ok(Self::from_storage_vec(self.rows, self.cols, data))
    }

    /// Cell-wise logical and.
    ///
    /// # Errors
    /// [`MatrixError::DimensionMismatch`](crate::MatrixError::DimensionMismatch)
    /// if the shapes differ.
    pub fn logical_and(&self, rhs: &Self) -> Result<Self> {
        self.logical_zip(rhs, "logical and", |a, b| a & b)
    }

    /// Cell-wise logical or.
    ///
    /// # Errors
    /// [`MatrixError::DimensionMismatch`](crate::MatrixError::DimensionMismatch)
    /// if the shapes differ.
    pub fn logical_or(&self, rhs: &Self) -> Result<Self> {
        self.logical_zip(rhs, "logical or", |a, b| a | b)
    }

    /// Cell-wise logical xor.
    ///
    /// # Errors
    /// [`MatrixError::DimensionMismatch`](crate::MatrixError::DimensionMismatch)
    /// if the shapes differ.
    pub fn logical_xor(&self, rhs: &Self) -> Result<Self> {
        self.logical_zip(rhs, "logical xor", |a, b| a ^ b)
    }

    /// Every cell and `rhs`.
    ///
    /// # Errors
    /// Only allocation failure.
    pub fn logical_and_scalar(&self, rhs: bool) -> Result<Self> {
        let s = u8::from(rhs);
        self.logical_map(move |a| a & s)
    }

    /// Every cell or `rhs`.
    ///
    /// # Errors
    /// Only allocation failure.
    pub fn logical_or_scalar(&self, rhs: bool) -> Result<Self> {
        let s = u8::from(rhs);
        self.logical_map(move |a| a | s)
    }

    /// Every cell xor `rhs`.
    ///
    /// # Errors
    /// Only allocation failure.
    pub fn logical_xor_scalar(&self, rhs: bool) -> Result<Self> {
        let s = u8::from(rhs);
        self.logical_map(move |a| a ^ s)
    }

    /// Cell-wise negation.
    ///
    /// # Errors
    /// Only allocation failure.
    pub fn logical_not(&self) -> Result<Self> {
        self.logical_map(|a| a ^ 1)
    }

    /// Number of `true` cells.
    pub fn count_true(&self) -> usize {
        self.data.iter().filter(|&&b| b != 0).count()
    }

    /// Returns `true` if at least one cell is `true`. False for an empty matrix.
    pub fn any(&self) -> bool {
        self.data.iter().any(|&b| b != 0)
    }

    /// Returns `true` if no cell is `true`. True for an empty matrix.
    pub fn none(&self) -> bool {
        !self.any()
    }
}
