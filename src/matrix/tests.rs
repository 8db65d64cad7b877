//! Tests for matrix construction, access, slicing and operators.

use super::*;
use crate::error::ErrorKind;
use std::collections::hash_map::DefaultHasher;

fn m2(rows: &[&[i32]]) -> Matrix<i32> {
    Matrix::from_rows(&rows.iter().map(|r| r.to_vec()).collect::<Vec<_>>()).unwrap()
}

fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut h = DefaultHasher::new();
    value.hash(&mut h);
    h.finish()
}

#[test]
fn test_new_is_default_filled() {
    let m = Matrix::<f32>::new(2, 3);
    assert_eq!(m.shape(), (2, 3));
    assert_eq!(m.size(), 6);
    assert!(!m.is_empty());
    assert!(m.all(|&v| v == 0.0));

    let s = Matrix::<String>::new(1, 2);
    assert!(s.all(String::is_empty));

    for (rows, cols) in [(0, 0), (0, 5), (5, 0)] {
        let e = Matrix::<u8>::new(rows, cols);
        assert!(e.is_empty());
        assert_eq!(e.size(), 0);
    }
}

#[test]
fn test_try_new_and_from_fn() {
    let m = Matrix::<u64>::try_new(3, 3).unwrap();
    assert_eq!(m, Matrix::new(3, 3));

    let f = Matrix::from_fn(2, 3, |r, c| r * 3 + c);
    assert_eq!(f.into_vec(), vec![0, 1, 2, 3, 4, 5]);
}

#[test]
fn test_from_vec_and_rows_validate() {
    let err = Matrix::from_vec(2, 2, vec![1, 2, 3]).unwrap_err();
    assert_eq!(err, MatrixError::LengthMismatch { expected: 4, found: 3 });

    let err = Matrix::from_rows(&[vec![1, 2], vec![3]]).unwrap_err();
    assert_eq!(err, MatrixError::RaggedRows { row: 1, expected: 2, found: 1 });
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);

    let empty = Matrix::<i32>::from_rows(&[]).unwrap();
    assert_eq!(empty.shape(), (0, 0));
}

#[test]
fn test_element_access() {
    let mut m = m2(&[&[1, 2], &[3, 4]]);
    assert_eq!(*m.get(1, 0).unwrap(), 3);
    *m.get_mut(1, 0).unwrap() = 30;
    m.set(0, 1, 20).unwrap();
    assert_eq!(m.value(0, 1).unwrap(), 20);
    assert_eq!(m[(1, 0)], 30);
    m[(1, 1)] += 1;
    assert_eq!(m.as_slice(), &[1, 20, 30, 5]);

    assert_eq!(m.get(2, 0).unwrap_err().kind(), ErrorKind::OutOfRange);
    assert_eq!(m.set(0, 2, 0).unwrap_err().kind(), ErrorKind::OutOfRange);
    assert_eq!(m.row(2).unwrap_err().kind(), ErrorKind::OutOfRange);
}

#[test]
#[should_panic(expected = "out of range")]
fn test_index_panics_out_of_range() {
    let m = Matrix::<i32>::new(2, 2);
    let _value = m[(0, 2)];
}

#[test]
fn test_rows_views() {
    let mut m = m2(&[&[1, 2, 3], &[4, 5, 6]]);
    assert_eq!(m.row(1).unwrap().as_slice(), &[4, 5, 6]);
    {
        let mut row = m.row_mut(0).unwrap();
        *row.get_mut(2).unwrap() = 9;
        assert!(row.get(3).is_err());
    }
    assert_eq!(m.row_values(0).unwrap(), vec![1, 2, 9]);
}

#[test]
fn test_bool_access_through_proxy() {
    let mut m = Matrix::<bool>::new(2, 2);
    {
        let mut cell = m.get_mut(0, 1).unwrap();
        cell.set(true);
        cell ^= true;
        cell |= true;
    }
    assert!(m.get(0, 1).unwrap());
    assert!(!m.get(1, 1).unwrap());
    let mut row = m.row_mut(1).unwrap();
    row.get_mut(0).unwrap().set(true);
    assert_eq!(m.storage(), &[0, 1, 1, 0]);
    m.fill(true);
    assert_eq!(m.count_true(), 4);
    assert!(m.storage().iter().all(|&b| b == 1));
}

#[test]
fn test_copy_block() {
    let m = m2(&[&[1, 2, 3], &[4, 5, 6], &[7, 8, 9]]);
    assert_eq!(m.copy(1, 1, -1, -1).unwrap(), m2(&[&[5, 6], &[8, 9]]));
    assert_eq!(m.copy(0, 1, 2, 2).unwrap(), m2(&[&[2], &[5]]));
    assert_eq!(m.copy(0, 0, -1, -1).unwrap(), m.copy_all());

    // Degenerate but valid: empty blocks.
    assert!(m.copy(3, 0, -1, -1).unwrap().is_empty());
    assert_eq!(m.copy(1, 1, 1, 3).unwrap().shape(), (0, 2));

    for (sr, sc, er, ec) in [(0, 0, 4, -1), (0, 0, -2, -1), (2, 0, 1, -1), (0, 4, -1, -1), (0, 2, -1, 1)] {
        assert_eq!(m.copy(sr, sc, er, ec).unwrap_err().kind(), ErrorKind::OutOfRange);
    }
}

#[test]
fn test_paste_block() {
    let mut m = Matrix::<i32>::new(3, 3);
    m.paste(&m2(&[&[1, 2], &[3, 4]]), 1, 1).unwrap();
    assert_eq!(m, m2(&[&[0, 0, 0], &[0, 1, 2], &[0, 3, 4]]));

    let before = m.clone();
    assert!(m.paste(&m2(&[&[1, 2], &[3, 4]]), 2, 2).is_err());
    assert!(m.paste(&Matrix::new(1, 1), 4, 0).is_err());
    assert_eq!(m, before);

    // An empty source never fails, even at an out-of-range offset.
    m.paste(&Matrix::new(0, 0), 10, 10).unwrap();
    assert_eq!(m, before);
}

#[test]
fn test_paste_within_overlapping() {
    let mut m = m2(&[&[1, 2, 3], &[4, 5, 6], &[7, 8, 9]]);
    m.paste_within(0, 0, 2, 2, 1, 1).unwrap();
    assert_eq!(m, m2(&[&[1, 2, 3], &[4, 1, 2], &[7, 4, 5]]));

    let mut n = m2(&[&[1, 2], &[3, 4]]);
    n.paste_self(0, 0).unwrap();
    assert_eq!(n, m2(&[&[1, 2], &[3, 4]]));
    assert!(n.paste_self(0, 1).is_err());
}

#[test]
fn test_line_extraction() {
    let m = m2(&[&[1, 2, 3, 4], &[5, 6, 7, 8], &[9, 10, 11, 12]]);
    assert_eq!(m.get_row(1, 1, 3).unwrap(), vec![6, 7]);
    assert_eq!(m.get_row(2, 0, -1).unwrap(), vec![9, 10, 11, 12]);
    assert_eq!(m.get_column(3, 0, -1).unwrap(), vec![4, 8, 12]);
    assert_eq!(m.get_column(0, 1, 2).unwrap(), vec![5]);
    assert_eq!(m.get_diagonal(0, -1).unwrap(), vec![1, 6, 11]);
    assert_eq!(m.get_diagonal(-5, 2).unwrap(), vec![1, 6]);
    assert_eq!(m.get_anti_diagonal(0, -1).unwrap(), vec![4, 7, 10]);
    assert_eq!(m.get_anti_diagonal(1, -1).unwrap(), vec![7, 10]);
    assert_eq!(m.diagonal(), vec![1, 6, 11]);
    assert_eq!(m.anti_diagonal(), vec![4, 7, 10]);
    assert_eq!(m.column_values(1).unwrap(), vec![2, 6, 10]);

    assert!(m.get_row(3, 0, -1).is_err());
    assert!(m.get_row(0, -1, -1).is_err());
    assert!(m.get_row(0, 3, 2).is_err());
    assert!(m.get_row(0, 0, 5).is_err());
    assert!(m.get_column(4, 0, -1).is_err());
    assert!(m.get_column(0, 0, -3).is_err());
    assert!(m.get_diagonal(0, 4).is_err());
    assert!(m.get_anti_diagonal(2, 1).is_err());
}

#[test]
fn test_anti_diagonal_2x2() {
    let m = m2(&[&[1, 2], &[3, 4]]);
    assert_eq!(m.get_anti_diagonal(0, -1).unwrap(), vec![2, 3]);
    assert!(Matrix::<i32>::new(0, 3).get_anti_diagonal(0, -1).unwrap().is_empty());
}

#[test]
fn test_predicates() {
    let m = m2(&[&[1, 2], &[3, 4]]);
    assert!(m.all(|&v| v > 0));
    assert!(m.any_of(|&v| v == 4));
    assert!(m.none_of(|&v| v > 4));

    let mut calls = 0;
    assert!(!m.all(|&v| {
        calls += 1;
        v < 2
    }));
    assert_eq!(calls, 2);

    let e = Matrix::<i32>::new(0, 0);
    assert!(e.all(|_| false));
    assert!(!e.any_of(|_| true));
    assert!(e.none_of(|_| true));
}

#[test]
fn test_select_and_map() {
    let m = m2(&[&[1, -2], &[-3, 4]]);
    assert_eq!(m.select(|&v| v < 0, 0, 1).unwrap(), m2(&[&[1, 0], &[0, 1]]));

    let mask = m.map(|&v| v > 0);
    assert_eq!(mask.count_true(), 2);
    assert_eq!(mask.select(|&b| b, false, true).unwrap(), mask.logical_not().unwrap());

    let labels = m.map(|v| v.to_string());
    assert_eq!(labels.value(1, 0).unwrap(), "-3");
}

#[test]
fn test_matrix_addition_scenario() {
    let a = m2(&[&[1, 2], &[3, 4]]);
    let b = m2(&[&[5, 6], &[7, 8]]);
    assert_eq!(&a + &b, m2(&[&[6, 8], &[10, 12]]));
    assert_eq!(a.try_add(&b).unwrap(), m2(&[&[6, 8], &[10, 12]]));
}

#[test]
fn test_arithmetic_forms() {
    let a = m2(&[&[6, 8], &[10, 12]]);
    let b = m2(&[&[1, 2], &[3, 4]]);
    assert_eq!(&a - &b, m2(&[&[5, 6], &[7, 8]]));
    assert_eq!(&a * &b, m2(&[&[6, 16], &[30, 48]]));
    assert_eq!(&a / &b, m2(&[&[6, 4], &[3, 3]]));
    assert_eq!(&a % &b, m2(&[&[0, 0], &[1, 0]]));
    assert_eq!(&a + 1, m2(&[&[7, 9], &[11, 13]]));
    assert_eq!(a.clone() * 2, m2(&[&[12, 16], &[20, 24]]));
    assert_eq!(a.clone() - b.clone(), m2(&[&[5, 6], &[7, 8]]));

    let mut c = a.clone();
    c += &b;
    c -= 1;
    assert_eq!(c, m2(&[&[6, 9], &[12, 15]]));
    c.try_div_assign_scalar(3).unwrap().try_mul_assign(&b).unwrap();
    assert_eq!(c, m2(&[&[2, 6], &[12, 20]]));
}

#[test]
fn test_division_by_zero_has_no_result() {
    let a = Matrix::filled(3, 3, 9);
    let mut b = Matrix::filled(3, 3, 3);
    b.set(2, 1, 0).unwrap();
    let err = a.try_div(&b).unwrap_err();
    assert_eq!(err, MatrixError::DivisionByZero);
    assert_eq!(err.kind(), ErrorKind::Arithmetic);

    let mut c = a.clone();
    assert!(c.try_div_assign(&b).is_err());
    assert!(c.try_rem_assign_scalar(0).is_err());
    assert_eq!(c.try_rem(&b).unwrap_err(), MatrixError::ModulusByZero);
    assert_eq!(c, a);

    let f = Matrix::filled(1, 2, 1.0f64);
    assert_eq!(f.try_div_scalar(0.0).unwrap_err(), MatrixError::DivisionByZero);
}

#[test]
#[should_panic(expected = "division by zero")]
fn test_div_operator_panics_on_zero() {
    let a = Matrix::filled(1, 1, 1u8);
    let _ = &a / 0;
}

#[test]
fn test_shape_mismatch() {
    let a = Matrix::<i64>::new(2, 2);
    let b = Matrix::<i64>::new(3, 2);
    let err = a.try_add(&b).unwrap_err();
    assert_eq!(
        err,
        MatrixError::DimensionMismatch { op: "addition", lhs: (2, 2), rhs: (3, 2) }
    );
    assert!(a.try_bitand(&b).is_err());
}

#[test]
#[should_panic(expected = "matrix dimensions must match for multiplication")]
fn test_mul_operator_panics_on_mismatch() {
    let a = Matrix::<f32>::new(2, 2);
    let b = Matrix::<f32>::new(2, 1);
    let _ = &a * &b;
}

#[test]
fn test_integer_arithmetic_wraps() {
    let a = Matrix::filled(1, 2, u8::MAX);
    assert_eq!((&a + 1).into_vec(), vec![0, 0]);
    let b = Matrix::filled(1, 1, i16::MIN);
    assert_eq!((&b * -1).into_vec(), vec![i16::MIN]);
}

#[test]
fn test_bitwise_forms() {
    let a = Matrix::from_vec(1, 3, vec![0b1100u8, 0b1010, 0xFF]).unwrap();
    let b = Matrix::from_vec(1, 3, vec![0b1010u8, 0b0110, 0x0F]).unwrap();
    assert_eq!((&a & &b).into_vec(), vec![0b1000, 0b0010, 0x0F]);
    assert_eq!((&a | &b).into_vec(), vec![0b1110, 0b1110, 0xFF]);
    assert_eq!((&a ^ &b).into_vec(), vec![0b0110, 0b1100, 0xF0]);
    assert_eq!((&a ^ 0xFF).into_vec(), vec![0b1111_0011, 0b1111_0101, 0]);
    assert_eq!((!&a).into_vec(), vec![!0b1100u8, !0b1010, 0]);

    let mut c = a.clone();
    c &= 0x0F;
    c |= &b;
    assert_eq!(c.into_vec(), vec![0b1110, 0b1110, 0x0F]);
    assert_eq!(a.bit_not().unwrap(), !a.clone());
}

#[test]
fn test_shift_forms() {
    let m = Matrix::from_vec(1, 3, vec![1i8, -8, 64]).unwrap();
    assert_eq!((&m << 1).into_vec(), vec![2, -16, -128]);
    assert_eq!((&m >> 2).into_vec(), vec![0, -2, 16]);
    assert_eq!((&m << 9).into_vec(), vec![2, -16, -128]); // 9 mod 8
    assert_eq!((&m >> -1).into_vec(), vec![2, -16, -128]);
    // Reversed left shift is logical: -8 = 0xF8 -> 0x7C.
    assert_eq!(m.shift_left(-1).unwrap().into_vec(), vec![0, 0x7C, 32]);

    let mut u = Matrix::filled(1, 1, 0x80u16);
    u <<= 4;
    assert_eq!(u.value(0, 0).unwrap(), 0x0800);
    u >>= 11;
    assert_eq!(u.value(0, 0).unwrap(), 1);
    u.shift_left_assign(-1).shift_right_assign(-3);
    assert_eq!(u.value(0, 0).unwrap(), 0);
}

#[test]
fn test_comparisons() {
    let a = m2(&[&[1, 2], &[3, 4]]);
    let b = m2(&[&[1, 2], &[3, 5]]);
    assert!(a < b);
    assert!(Matrix::<i32>::new(1, 5) < Matrix::<i32>::new(2, 1));
    assert!(Matrix::<i32>::new(2, 1) < Matrix::<i32>::new(2, 2));
    assert_ne!(Matrix::<i32>::new(1, 4), Matrix::<i32>::new(4, 1));
    assert_eq!(hash_of(&a), hash_of(&a.clone()));
    assert_ne!(hash_of(&Matrix::<u8>::new(1, 4)), hash_of(&Matrix::<u8>::new(4, 1)));
}

#[test]
fn test_display_and_debug() {
    let m = m2(&[&[1, 2], &[3, 4]]);
    assert_eq!(m.to_string(), "1 2\n3 4");
    assert_eq!(
        format!("{m:?}"),
        "Matrix { rows: 2, cols: 2, data: [[1, 2], [3, 4]] }"
    );
    let mut b = Matrix::<bool>::new(1, 2);
    b.set(0, 0, true).unwrap();
    assert_eq!(b.to_string(), "true false");
    assert_eq!(Matrix::<i32>::new(0, 3).to_string(), "");
}

#[test]
fn test_to_coords_on_matrix() {
    let m = Matrix::<u8>::new(3, 4);
    assert_eq!(m.to_index(2, 3), 11);
    assert_eq!(m.to_coords(11).unwrap(), (2, 3));
    assert!(m.to_coords(12).is_err());
}
