//! Storage model: how a logical element type is laid out in a matrix buffer.
//!
//! Every element type `T` names a physical cell type [`Element::Storage`]. For all
//! types except `bool` the cell *is* the element, stored contiguously and
//! byte-identical to `T`. Booleans are stored one per byte (`u8`) so that a
//! stable reference to a single cell exists; only the values 0 and 1 are ever
//! written. Element access goes through [`Element::Ref`] / [`Element::ConstRef`],
//! which are `&mut T` / `&T` for ordinary types and [`BoolRef`] / `bool` for
//! booleans.

pub mod capability;
pub(crate) mod codec;

use crate::error::Result;
use crate::view::BoolRef;
use core::fmt::Debug;

pub use capability::{MathArithmetic, MathIntegral};

/// A type that can be stored in a [`Matrix`](crate::Matrix).
pub trait Element: Clone + Default + PartialEq + Debug + 'static {
    /// Physical cell type.
    type Storage: Clone + Default + PartialEq + Debug + 'static;

    /// Exclusive element access (`&mut T`, or [`BoolRef`] for `bool`).
    type Ref<'a>
    where
        Self: 'a;

    /// Shared element access (`&T`, or a plain `bool`).
    type ConstRef<'a>
    where
        Self: 'a;

    /// Converts a value into its storage cell.
    fn into_storage(self) -> Self::Storage;

    /// Reads a value out of a storage cell.
    fn from_storage(cell: &Self::Storage) -> Self;

    /// Shared access to a cell.
    fn cell_ref<'a>(cell: &'a Self::Storage) -> Self::ConstRef<'a>;

    /// Exclusive access to a cell.
    fn cell_mut<'a>(cell: &'a mut Self::Storage) -> Self::Ref<'a>;

    /// Runs `f` against the value held by `cell` without cloning it where possible.
    fn with_value<R>(cell: &Self::Storage, f: impl FnOnce(&Self) -> R) -> R;

    /// Restores the storage invariant after a raw restore.
    #[inline(always)]
    fn sanitize(_cell: &mut Self::Storage) {}

    /// Appends the byte-stream form of `cells` to `out`.
    fn encode_cells(cells: &[Self::Storage], out: &mut Vec<u8>);

    /// Overwrites `cells` from a byte stream.
    ///
    /// Either every cell is written or, on error, none is.
    fn decode_cells(bytes: &[u8], cells: &mut [Self::Storage]) -> Result<()>;
}

/// Element types whose storage cell is the element itself (everything but `bool`).
///
/// These types can be borrowed directly as `&T` / `&mut T` and indexed with
/// `matrix[(row, col)]`.
pub trait Plain: Element<Storage = Self> {}

impl Element for bool {
    type Storage = u8;
    type Ref<'a> = BoolRef<'a>;
    type ConstRef<'a> = bool;

    #[inline(always)]
    fn into_storage(self) -> u8 {
        u8::from(self)
    }

    #[inline(always)]
    fn from_storage(cell: &u8) -> bool {
        *cell != 0
    }

    #[inline(always)]
    fn cell_ref<'a>(cell: &'a u8) -> bool {
        *cell != 0
    }

    #[inline(always)]
    fn cell_mut<'a>(cell: &'a mut u8) -> BoolRef<'a> {
        BoolRef::new(cell)
    }

    #[inline(always)]
    fn with_value<R>(cell: &u8, f: impl FnOnce(&bool) -> R) -> R {
        f(&(*cell != 0))
    }

    #[inline(always)]
    fn sanitize(cell: &mut u8) {
        *cell = u8::from(*cell != 0);
    }

    fn encode_cells(cells: &[u8], out: &mut Vec<u8>) {
        codec::encode_pod(cells, out);
    }

    fn decode_cells(bytes: &[u8], cells: &mut [u8]) -> Result<()> {
        codec::decode_pod(bytes, cells)?;
        cells.iter_mut().for_each(Self::sanitize);
        Ok(())
    }
}

macro_rules! plain_element {
    ($($t:ty),* $(,)?) => {$(
        impl Element for $t {
            type Storage = $t;
            type Ref<'a> = &'a mut $t;
            type ConstRef<'a> = &'a $t;

            #[inline(always)]
            fn into_storage(self) -> $t {
                self
            }

            #[inline(always)]
            fn from_storage(cell: &$t) -> $t {
                *cell
            }

            #[inline(always)]
            fn cell_ref<'a>(cell: &'a $t) -> &'a $t {
                cell
            }

            #[inline(always)]
            fn cell_mut<'a>(cell: &'a mut $t) -> &'a mut $t {
                cell
            }

            #[inline(always)]
            fn with_value<R>(cell: &$t, f: impl FnOnce(&$t) -> R) -> R {
                f(cell)
            }

            fn encode_cells(cells: &[$t], out: &mut Vec<u8>) {
                codec::encode_pod(cells, out);
            }

            fn decode_cells(bytes: &[u8], cells: &mut [$t]) -> Result<()> {
                codec::decode_pod(bytes, cells)
            }
        }

        impl Plain for $t {}
    )*};
}

plain_element!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

impl Element for char {
    type Storage = char;
    type Ref<'a> = &'a mut char;
    type ConstRef<'a> = &'a char;

    #[inline(always)]
    fn into_storage(self) -> char {
        self
    }

    #[inline(always)]
    fn from_storage(cell: &char) -> char {
        *cell
    }

    #[inline(always)]
    fn cell_ref<'a>(cell: &'a char) -> &'a char {
        cell
    }

    #[inline(always)]
    fn cell_mut<'a>(cell: &'a mut char) -> &'a mut char {
        cell
    }

    #[inline(always)]
    fn with_value<R>(cell: &char, f: impl FnOnce(&char) -> R) -> R {
        f(cell)
    }

    fn encode_cells(cells: &[char], out: &mut Vec<u8>) {
        codec::encode_pod(cells, out);
    }

    fn decode_cells(bytes: &[u8], cells: &mut [char]) -> Result<()> {
        codec::decode_chars(bytes, cells)
    }
}

impl Plain for char {}

impl Element for String {
    type Storage = String;
    type Ref<'a> = &'a mut String;
    type ConstRef<'a> = &'a String;

    #[inline(always)]
    fn into_storage(self) -> String {
        self
    }

    #[inline]
    fn from_storage(cell: &String) -> String {
        cell.clone()
    }

    #[inline(always)]
    fn cell_ref<'a>(cell: &'a String) -> &'a String {
        cell
    }

    #[inline(always)]
    fn cell_mut<'a>(cell: &'a mut String) -> &'a mut String {
        cell
    }

    #[inline(always)]
    fn with_value<R>(cell: &String, f: impl FnOnce(&String) -> R) -> R {
        f(cell)
    }

    fn encode_cells(cells: &[String], out: &mut Vec<u8>) {
        codec::encode_strings(cells, out);
    }

    fn decode_cells(bytes: &[u8], cells: &mut [String]) -> Result<()> {
        codec::decode_strings(bytes, cells)
    }
}

impl Plain for String {}
