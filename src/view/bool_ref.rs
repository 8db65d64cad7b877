//! `BoolRef`: a writable handle to one byte-backed boolean.
//!
//! A `Matrix<bool>` stores each element in a full `u8`, so there is no `bool` in
//! memory to hand out a `&mut bool` to. `BoolRef` stands in for it: reads treat any
//! non-zero byte as `true`, writes store exactly 0 or 1.

use core::fmt;
use core::ops::{BitAndAssign, BitOrAssign, BitXorAssign, Not};

/// Exclusive proxy reference to a byte-backed boolean.
pub struct BoolRef<'a> {
    cell: &'a mut u8,
}

impl<'a> BoolRef<'a> {
    /// Wraps a storage byte.
    #[inline(always)]
    pub fn new(cell: &'a mut u8) -> Self {
        Self { cell }
    }

    /// Reads the value.
    #[inline(always)]
    pub fn get(&self) -> bool {
        *self.cell != 0
    }

    /// Writes the value.
    #[inline(always)]
    pub fn set(&mut self, value: bool) {
        *self.cell = u8::from(value);
    }

    /// Writes `value` and returns the previous value.
    #[inline]
    pub fn replace(&mut self, value: bool) -> bool {
        let old = self.get();
        self.set(value);
        old
    }

    /// Flips the value.
    #[inline]
    pub fn toggle(&mut self) {
        let v = self.get();
        self.set(!v);
    }

    /// Reborrows the proxy for a shorter lifetime.
    #[inline(always)]
    pub fn reborrow(&mut self) -> BoolRef<'_> {
        BoolRef { cell: &mut *self.cell }
    }

    /// The raw storage byte (always 0 or 1 when written through this crate).
    #[inline(always)]
    pub fn raw(&self) -> u8 {
        *self.cell
    }
}

impl BitAndAssign<bool> for BoolRef<'_> {
    #[inline]
    fn bitand_assign(&mut self, rhs: bool) {
        let v = self.get() & rhs;
        self.set(v);
    }
}

impl BitOrAssign<bool> for BoolRef<'_> {
    #[inline]
    fn bitor_assign(&mut self, rhs: bool) {
        let v = self.get() | rhs;
        self.set(v);
    }
}

impl BitXorAssign<bool> for BoolRef<'_> {
    #[inline]
    fn bitxor_assign(&mut self, rhs: bool) {
        let v = self.get() ^ rhs;
        self.set(v);
    }
}

impl Not for &BoolRef<'_> {
    type Output = bool;

    #[inline]
    fn not(self) -> bool {
        !self.get()
    }
}

impl Not for BoolRef<'_> {
    type Output = bool;

    #[inline]
    fn not(self) -> bool {
        !self.get()
    }
}

impl PartialEq<bool> for BoolRef<'_> {
    #[inline]
    fn eq(&self, other: &bool) -> bool {
        self.get() == *other
    }
}

impl PartialEq<BoolRef<'_>> for bool {
    #[inline]
    fn eq(&self, other: &BoolRef<'_>) -> bool {
        *self == other.get()
    }
}

impl<'b> PartialEq<BoolRef<'b>> for BoolRef<'_> {
    /// Compares the values, not the referenced bytes.
    #[inline]
    fn eq(&self, other: &BoolRef<'b>) -> bool {
        self.get() == other.get()
    }
}

impl From<BoolRef<'_>> for bool {
    #[inline]
    fn from(r: BoolRef<'_>) -> bool {
        r.get()
    }
}

impl From<&BoolRef<'_>> for bool {
    #[inline]
    fn from(r: &BoolRef<'_>) -> bool {
        r.get()
    }
}

impl fmt::Debug for BoolRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("BoolRef").field(&self.get()).finish()
    }
}

impl fmt::Display for BoolRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.get(), f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bool_ref_read_write() {
        let mut byte = 0u8;
        let mut r = BoolRef::new(&mut byte);
        assert!(!r.get());
        r.set(true);
        assert!(r == true);
        assert_eq!(r.raw(), 1);
        r.set(false);
        assert_eq!(r.raw(), 0);
        assert_eq!(byte, 0);
    }

    #[test]
    fn test_any_nonzero_reads_true() {
        let mut byte = 0x7Fu8;
        let mut r = BoolRef::new(&mut byte);
        assert!(r.get());
        // Writing normalises the byte.
        r |= true;
        assert_eq!(r.raw(), 1);
    }

    #[test]
    fn test_compound_assign() {
        let mut byte = 1u8;
        let mut r = BoolRef::new(&mut byte);
        r &= false;
        assert!(!r.get());
        r ^= true;
        assert!(r.get());
        r |= false;
        assert!(r.get());
        assert!(r.replace(false));
        r.toggle();
        assert_eq!(byte, 1);
    }

    #[test]
    fn test_equality_is_by_value() {
        let mut a = 1u8;
        let mut b = 9u8;
        let ra = BoolRef::new(&mut a);
        let rb = BoolRef::new(&mut b);
        assert!(ra == rb);
        assert!(true == ra);
        assert!(!(&ra) == false);
        assert_eq!(format!("{ra}"), "true");
        assert_eq!(format!("{rb:?}"), "BoolRef(true)");
    }
}
