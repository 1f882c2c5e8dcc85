mod fixed;
mod reflective;

pub use fixed::*;
pub use reflective::*;

use crate::util::*;

/// Boundary policy for neighbours that fall outside the grid.
/// Only one is active per solve.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum BoundaryCondition<F> {
    /// Neumann: a missing neighbour reads the opposite neighbour
    /// along the same axis.
    Reflective,

    /// Dirichlet: a missing neighbour reads the given value.
    Fixed(F),
}

impl<F: FloatTrait> Default for BoundaryCondition<F> {
    fn default() -> Self {
        BoundaryCondition::Reflective
    }
}

impl<F: FloatTrait> BoundaryCondition<F> {
    /// True when boundary reads can never introduce a non-zero value
    /// into an all zero neighbourhood.
    pub fn contributes_zero(&self) -> bool {
        match self {
            BoundaryCondition::Reflective => true,
            BoundaryCondition::Fixed(v) => v.is_zero(),
        }
    }

    /// Resolve a missing neighbour, given the value that reflection
    /// would read.
    #[inline(always)]
    pub fn substitute(&self, mirrored: F) -> F {
        match self {
            BoundaryCondition::Reflective => mirrored,
            BoundaryCondition::Fixed(v) => *v,
        }
    }
}

/// Out-of-grid lookups for the general, unoptimized update.
/// Returns `None` for in-grid coordinates, which are read directly.
pub trait BCCheck<F>: Sync {
    fn check(&self, coord: &Coord<3>) -> Option<F>;
}
