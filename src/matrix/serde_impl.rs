//! `serde` support: a matrix serializes as `{ rows, cols, data }` with `data` in
//! row-major order. Deserializing checks `data.len() == rows * cols`.

use super::Matrix;
use crate::storage::Element;
use serde::de::Error as _;
use serde::ser::{SerializeSeq, SerializeStruct};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

struct Cells<'a, T: Element>(&'a Matrix<T>);

impl<T: Element + Serialize> Serialize for Cells<'_, T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.0.data.len()))?;
        for cell in &self.0.data {
            T::with_value(cell, |v| seq.serialize_element(v))?;
        }
        seq.end()
    }
}

impl<T: Element + Serialize> Serialize for Matrix<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Matrix", 3)?;
        state.serialize_field("rows", &self.rows)?;
        state.serialize_field("cols", &self.cols)?;
        state.serialize_field("data", &Cells(self))?;
        state.end()
    }
}

#[derive(Deserialize)]
#[serde(rename = "Matrix")]
struct RawMatrix<T> {
    rows: u32,
    cols: u32,
    data: Vec<T>,
}

impl<'de, T: Element + Deserialize<'de>> Deserialize<'de> for Matrix<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = RawMatrix::<T>::deserialize(deserializer)?;
        Matrix::from_vec(raw.rows, raw.cols, raw.data).map_err(D::Error::custom)
    }
}
