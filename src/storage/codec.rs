//! Byte-stream encoders and decoders for storage cells.
//!
//! Fixed-size cells are copied as raw native-endian bytes through `zerocopy`.
//! Strings are written as their UTF-8 bytes followed by a NUL, one after another.

use crate::error::{ByteStreamError, Result};
use zerocopy::{AsBytes, FromBytes};

/// Appends the raw bytes of `cells`.
#[inline]
pub(crate) fn encode_pod<S: AsBytes>(cells: &[S], out: &mut Vec<u8>) {
    out.extend_from_slice(cells.as_bytes());
}

/// Overwrites `cells` with `bytes`, which must be exactly as long as the buffer.
pub(crate) fn decode_pod<S: AsBytes + FromBytes>(bytes: &[u8], cells: &mut [S]) -> Result<()> {
    let dst = cells.as_bytes_mut();
    if dst.len() != bytes.len() {
        return Err(ByteStreamError::Length {
            expected: dst.len(),
            found: bytes.len(),
        }
        .into());
    }
    dst.copy_from_slice(bytes);
    Ok(())
}

/// `char` is not `FromBytes`: every 32-bit word is validated before any cell is written.
pub(crate) fn decode_chars(bytes: &[u8], cells: &mut [char]) -> Result<()> {
    const WIDTH: usize = core::mem::size_of::<char>();

    let expected = cells.len() * WIDTH;
    if bytes.len() != expected {
        return Err(ByteStreamError::Length {
            expected,
            found: bytes.len(),
        }
        .into());
    }

    let mut decoded = Vec::with_capacity(cells.len());
    for (cell, word) in bytes.chunks_exact(WIDTH).enumerate() {
        let value = u32::read_from(word).unwrap_or_default();
        let ch = char::from_u32(value).ok_or(ByteStreamError::InvalidChar { cell, value })?;
        decoded.push(ch);
    }
    cells.copy_from_slice(&decoded);
    Ok(())
}

pub(crate) fn encode_strings(cells: &[String], out: &mut Vec<u8>) {
    out.reserve(cells.iter().map(|s| s.len() + 1).sum());
    for cell in cells {
        if cell.as_bytes().contains(&0) {
            crate::trace::trace_event!(
                warn,
                len = cell.len(),
                "string cell contains an embedded NUL; the byte stream will not decode to the same shape"
            );
        }
        out.extend_from_slice(cell.as_bytes());
        out.push(0);
    }
}

pub(crate) fn decode_strings(bytes: &[u8], cells: &mut [String]) -> Result<()> {
    let terminators = bytes.iter().filter(|&&b| b == 0).count();
    if terminators != cells.len() {
        return Err(ByteStreamError::CellCount {
            expected: cells.len(),
            found: terminators,
        }
        .into());
    }
    if bytes.last().is_some_and(|&b| b != 0) {
        return Err(ByteStreamError::MissingTerminator.into());
    }

    let mut decoded = Vec::with_capacity(cells.len());
    let segments = bytes.split_inclusive(|&b| b == 0).map(|s| &s[..s.len() - 1]);
    for (cell, segment) in segments.enumerate() {
        let text = core::str::from_utf8(segment).map_err(|_| ByteStreamError::InvalidUtf8 { cell })?;
        decoded.push(text.to_owned());
    }
    debug_assert_eq!(decoded.len(), cells.len());

    for (cell, text) in cells.iter_mut().zip(decoded) {
        *cell = text;
    }
    Ok(())
}
