//! Error types shared by every matrix operation.
//!
//! Errors are plain enums with hand-written `Display` impls. Each variant maps to
//! one [`ErrorKind`], which is what most callers match on.

use core::fmt;

/// Convenience alias used throughout the crate.
pub type Result<T> = core::result::Result<T, MatrixError>;

/// The error type for allocation failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AllocError {
    /// Number of cells that were requested.
    pub cells: usize,
}

impl fmt::Display for AllocError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "memory allocation failed for {} cells", self.cells)
    }
}

impl std::error::Error for AllocError {}

/// Coarse classification of a [`MatrixError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Index, slice bound or iterator position outside the matrix.
    OutOfRange,
    /// Operands whose shapes or lengths do not agree.
    InvalidArgument,
    /// Division or modulus by zero.
    Arithmetic,
    /// A well-formed call that cannot produce a value (empty reductions,
    /// malformed byte streams).
    Runtime,
    /// The storage buffer could not be allocated.
    Allocation,
}

/// Why a byte stream was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ByteStreamError {
    /// The stream length does not match `rows * cols * size_of::<Storage>()`.
    Length {
        /// Bytes required by the current shape.
        expected: usize,
        /// Bytes supplied.
        found: usize,
    },
    /// A string stream holds a different number of NUL-terminated cells.
    CellCount {
        /// Cells required by the current shape.
        expected: usize,
        /// Terminated cells found in the stream.
        found: usize,
    },
    /// A string stream has bytes after its last NUL terminator.
    MissingTerminator,
    /// A string cell is not valid UTF-8.
    InvalidUtf8 {
        /// Row-major index of the offending cell.
        cell: usize,
    },
    /// A `char` cell holds a value that is not a Unicode scalar value.
    InvalidChar {
        /// Row-major index of the offending cell.
        cell: usize,
        /// The raw 32-bit value.
        value: u32,
    },
}

impl fmt::Display for ByteStreamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Length { expected, found } => {
                write!(f, "invalid byte stream size: expected {expected} bytes, found {found}")
            }
            Self::CellCount { expected, found } => {
                write!(f, "invalid byte stream size: expected {expected} cells, found {found}")
            }
            Self::MissingTerminator => f.write_str("byte stream does not end with a NUL terminator"),
            Self::InvalidUtf8 { cell } => write!(f, "cell {cell} is not valid UTF-8"),
            Self::InvalidChar { cell, value } => {
                write!(f, "cell {cell} holds {value:#x}, which is not a valid char")
            }
        }
    }
}

/// Errors returned by matrix operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatrixError {
    /// An index or range lies outside the matrix.
    OutOfRange {
        /// What was being indexed.
        context: &'static str,
    },
    /// A binary operation received matrices of different shapes.
    DimensionMismatch {
        /// Operation name.
        op: &'static str,
        /// `(rows, cols)` of the left operand.
        lhs: (u32, u32),
        /// `(rows, cols)` of the right operand.
        rhs: (u32, u32),
    },
    /// A row passed to `from_rows` has a different length than the first.
    RaggedRows {
        /// Offending row.
        row: usize,
        /// Length of the first row.
        expected: usize,
        /// Length of the offending row.
        found: usize,
    },
    /// A flat buffer does not hold `rows * cols` values.
    LengthMismatch {
        /// `rows * cols`.
        expected: usize,
        /// Length supplied.
        found: usize,
    },
    /// A divisor element or scalar is zero.
    DivisionByZero,
    /// A modulus element or scalar is zero.
    ModulusByZero,
    /// A reduction without an identity was called on an empty matrix.
    EmptyMatrix {
        /// Operation name.
        op: &'static str,
    },
    /// A byte stream could not be restored.
    ByteStream(ByteStreamError),
    /// The storage buffer could not be allocated.
    Alloc(AllocError),
}

impl MatrixError {
    /// Returns the coarse kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::OutOfRange { .. } => ErrorKind::OutOfRange,
            Self::DimensionMismatch { .. } | Self::RaggedRows { .. } | Self::LengthMismatch { .. } => {
                ErrorKind::InvalidArgument
            }
            Self::DivisionByZero | Self::ModulusByZero => ErrorKind::Arithmetic,
            Self::EmptyMatrix { .. } | Self::ByteStream(_) => ErrorKind::Runtime,
            Self::Alloc(_) => ErrorKind::Allocation,
        }
    }

    #[inline]
    pub(crate) const fn out_of_range(context: &'static str) -> Self {
        Self::OutOfRange { context }
    }
}

impl fmt::Display for MatrixError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange { context } => write!(f, "out of range: {context}"),
            Self::DimensionMismatch { op, lhs, rhs } => write!(
                f,
                "matrix dimensions must match for {op}: {}x{} vs {}x{}",
                lhs.0, lhs.1, rhs.0, rhs.1
            ),
            Self::RaggedRows { row, expected, found } => {
                write!(f, "row {row} has {found} values, expected {expected}")
            }
            Self::LengthMismatch { expected, found } => {
                write!(f, "buffer holds {found} values, expected {expected}")
            }
            Self::DivisionByZero => f.write_str("division by zero encountered"),
            Self::ModulusByZero => f.write_str("modulus by zero encountered"),
            Self::EmptyMatrix { op } => write!(f, "Matrix::{op}() on empty matrix"),
            Self::ByteStream(e) => e.fmt(f),
            Self::Alloc(e) => e.fmt(f),
        }
    }
}

impl std::error::Error for MatrixError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Alloc(e) => Some(e),
            _ => None,
        }
    }
}

impl From<AllocError> for MatrixError {
    fn from(e: AllocError) -> Self {
        Self::Alloc(e)
    }
}

impl From<ByteStreamError> for MatrixError {
    fn from(e: ByteStreamError) -> Self {
        Self::ByteStream(e)
    }
}
