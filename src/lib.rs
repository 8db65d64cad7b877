//! # `densemat` - Dense Typed Matrices
//!
//! A generic, dense 2-D container over arbitrary element types, with bounds-checked
//! access, four traversal orders, element-wise operators gated by element type and
//! a raw byte-stream snapshot format.
//!
//! ## Storage
//!
//! A [`Matrix<T>`] owns one flat, row-major buffer of `rows * cols` storage cells.
//! Every element type names its cell type through [`Element::Storage`]:
//!
//! - `bool` is stored one per byte, holding only 0 or 1, so a single cell can be
//!   borrowed. Writable access goes through the [`BoolRef`] proxy.
//! - Every other type is stored as itself and can be borrowed as `&T` / `&mut T`.
//!
//! ## Traversal
//!
//! Iterators walk a matrix in [`TraversalType::Row`], `Column`, `Diagonal` or
//! `AntiDiagonal` order. Positions are signed [`Cursor`]s, and each order ends on
//! its own out-of-range sentinel (see [`traversal`]).
//!
//! ## Operators
//!
//! Element types opt into operator groups through capability traits:
//!
//! - [`MathArithmetic`] (integers and floats): `+ - * /`, `sum`;
//! - [`MathIntegral`] (integers): additionally `%`, bitwise operators and shifts;
//! - `Matrix<bool>`: `logical_and`, `logical_or`, `logical_xor`, `logical_not` and
//!   the mask reductions.
//!
//! Every operator has a fallible `try_*` form returning [`Result`]; the
//! `core::ops` impls panic with the error message instead.
//!
//! ## Features
//!
//! - `parallel`: run element-wise kernels on rayon's thread pool.
//! - `tracing`: emit `tracing` events for allocation failures, rejected byte
//!   streams and self-pastes.
//!
//! ## Example
//!
//! ```rust
//! use densemat::{Matrix, TraversalType};
//!
//! let a = Matrix::from_rows(&[vec![1, 2], vec![3, 4]]).unwrap();
//! let b = Matrix::from_rows(&[vec![5, 6], vec![7, 8]]).unwrap();
//! let c = &a + &b;
//! assert_eq!(c.into_vec(), vec![6, 8, 10, 12]);
//!
//! let anti: Vec<(u32, u32)> = a
//!     .iter_order(TraversalType::AntiDiagonal)
//!     .map(|(r, c, _)| (r, c))
//!     .collect();
//! assert_eq!(anti, vec![(0, 1), (1, 0)]);
//!
//! let mut mask = Matrix::<bool>::new(2, 2);
//! mask.get_mut(0, 1).unwrap().set(true);
//! assert_eq!(mask.count_true(), 1);
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod error;
pub mod matrix;
pub mod storage;
pub mod traversal;
pub mod view;

mod trace;

pub use error::{AllocError, ByteStreamError, ErrorKind, MatrixError, Result};
pub use matrix::coords::{to_coords, to_index};
pub use matrix::Matrix;
pub use storage::{Element, MathArithmetic, MathIntegral, Plain};
pub use traversal::{Cursor, Iter, IterMut, TraversalType};
pub use view::{BoolRef, RowView, RowViewMut};
