//! Raw byte-stream snapshots.
//!
//! Fixed-size cells are dumped as the native-endian storage buffer, so a stream
//! is only meaningful on the same platform that produced it. String cells are
//! written as UTF-8 followed by a NUL terminator each.

use super::Matrix;
use crate::error::Result;
use crate::storage::Element;
use crate::trace::trace_event;

impl<T: Element> Matrix<T> {
    /// Encodes every cell in row-major order.
    pub fn to_byte_stream(&self) -> Vec<u8> {
        let mut out = Vec::new();
        T::encode_cells(&self.data, &mut out);
        out
    }

    /// Overwrites every cell from a stream produced by
    /// [`Matrix::to_byte_stream`] for a matrix of the same shape.
    ///
    /// # Errors
    /// [`MatrixError::ByteStream`](crate::MatrixError::ByteStream) if the stream
    /// does not match the current shape or holds invalid cells. The matrix is
    /// unchanged on error.
    pub fn init_from_byte_stream(&mut self, bytes: &[u8]) -> Result<()> {
        T::decode_cells(bytes, &mut self.data).map_err(|e| {
            trace_event!(debug, rows = self.rows, cols = self.cols, error = %e, "byte stream rejected");
            e
        })
    }

    /// Builds a `rows x cols` matrix from a byte stream.
    ///
    /// # Errors
    /// As [`Matrix::init_from_byte_stream`], plus allocation failure.
    pub fn from_byte_stream(rows: u32, cols: u32, bytes: &[u8]) -> Result<Self> {
        let mut m = Self::try_new(rows, cols)?;
        m.init_from_byte_stream(bytes)?;
        Ok(m)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ByteStreamError, ErrorKind, MatrixError};

    #[test]
    fn test_pod_stream_length() {
        let m = Matrix::from_rows(&[vec![1u32, 2], vec![3, 4]]).unwrap();
        let bytes = m.to_byte_stream();
        assert_eq!(bytes.len(), 16);
        assert_eq!(Matrix::<u32>::from_byte_stream(2, 2, &bytes).unwrap(), m);
        let err = Matrix::<u32>::from_byte_stream(2, 2, &bytes[..15]).unwrap_err();
        assert_eq!(err, MatrixError::ByteStream(ByteStreamError::Length { expected: 16, found: 15 }));
    }

    #[test]
    fn test_bool_stream_is_one_byte_per_cell() {
        let mut m = Matrix::<bool>::new(1, 3);
        m.set(0, 1, true).unwrap();
        assert_eq!(m.to_byte_stream(), vec![0, 1, 0]);
        let back = Matrix::<bool>::from_byte_stream(1, 3, &[2, 0, 255]).unwrap();
        assert_eq!(back.storage(), &[1, 0, 1]);
    }

    #[test]
    fn test_string_stream_layout() {
        let m = Matrix::from_rows(&[
            vec!["hello".to_string(), String::new()],
            vec!["x".to_string(), "end".to_string()],
        ])
        .unwrap();
        let bytes = m.to_byte_stream();
        assert_eq!(bytes, b"hello\0\0x\0end\0");
        assert_eq!(Matrix::<String>::from_byte_stream(2, 2, &bytes).unwrap(), m);
    }

    #[test]
    fn test_embedded_nul_breaks_cell_count() {
        let m = Matrix::filled(1, 1, "a\0b".to_string());
        let bytes = m.to_byte_stream();
        assert_eq!(bytes, b"a\0b\0");
        let err = Matrix::<String>::from_byte_stream(1, 1, &bytes).unwrap_err();
        assert_eq!(
            err,
            MatrixError::ByteStream(ByteStreamError::CellCount { expected: 1, found: 2 })
        );
    }

    #[test]
    fn test_failed_restore_leaves_matrix_unchanged() {
        let mut m = Matrix::filled(1, 2, "keep".to_string());
        let err = m.init_from_byte_stream(b"a\0b").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Runtime);
        assert_eq!(m, Matrix::filled(1, 2, "keep".to_string()));
    }

    #[test]
    fn test_empty_matrix_stream() {
        let m = Matrix::<f64>::new(0, 4);
        assert!(m.to_byte_stream().is_empty());
        assert_eq!(Matrix::<f64>::from_byte_stream(0, 4, &[]).unwrap(), m);
        assert!(Matrix::<String>::from_byte_stream(0, 0, &[]).is_ok());
    }
}
