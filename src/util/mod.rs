pub use nalgebra::{matrix, vector};
pub use num_traits::{Float, One, Zero};

mod aabb;
pub mod indexing;
pub use aabb::*;

pub type Coord<const GRID_DIMENSION: usize> =
    nalgebra::SVector<i32, { GRID_DIMENSION }>;

/// Per axis (min, max) pairs, one row per dimension.
pub type Bounds<const GRID_DIMENSION: usize> =
    nalgebra::SMatrix<i32, { GRID_DIMENSION }, 2>;

/// Scalar type for fields.
/// Implemented for `f32` and `f64`; the solver is agnostic otherwise.
pub trait FloatTrait:
    Float + Send + Sync + std::fmt::Debug + std::fmt::Display + 'static
{
    /// Lossy conversion for literals and configuration values.
    fn from_literal(value: f64) -> Self;
}

impl FloatTrait for f32 {
    #[inline]
    fn from_literal(value: f64) -> Self {
        value as f32
    }
}

impl FloatTrait for f64 {
    #[inline]
    fn from_literal(value: f64) -> Self {
        value
    }
}

/// Sum of six ones, exact for every float width.
#[inline]
pub fn six<F: FloatTrait>() -> F {
    let two = F::one() + F::one();
    two + two + two
}
