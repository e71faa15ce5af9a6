//! Line-protocol output: value coercion and line assembly.

pub mod line;
pub mod value;

pub use line::{ResultBatch, format_line};
pub use value::WireValue;
