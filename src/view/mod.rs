//! Borrowed accessors into a matrix buffer.

mod bool_ref;
mod row;

pub use bool_ref::BoolRef;
pub use row::{RowView, RowViewMut};
