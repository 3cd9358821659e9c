//! Row data model: scalar cell values, rendered rows, and raw-row transforms.

mod row;
mod transform;
mod value;

pub use row::Row;
pub use transform::{Identity, RowTransform, SerdeTransform};
pub use value::{Value, cmp_int_float};
