//! Storage for the n×n×n scalar fields and the rules for reading
//! past their edges.
//! A field is one contiguous buffer indexed `(z * n + y) * n + x`,
//! so every z-layer is a contiguous run of `n * n` cells.

mod bc;
mod field;
mod field_pair;
mod gather_args;

pub use bc::*;
pub use field::*;
pub use field_pair::*;
pub use gather_args::*;
