use crate::grid::{BCCheck, Field};
use crate::util::*;

/// In-grid stand-in for the lower neighbour of index 0.
#[inline(always)]
pub fn reflect_low(n: usize) -> usize {
    if n > 1 {
        1
    } else {
        0
    }
}

/// In-grid stand-in for the upper neighbour of index `n - 1`.
#[inline(always)]
pub fn reflect_high(n: usize) -> usize {
    n.saturating_sub(2)
}

/// Mirror one coordinate at most one step outside `[0, n)`.
/// `-1` maps to `1` and `n` maps to `n - 2`, clamped into the grid.
pub fn reflect_coord(c: i32, n: i32) -> i32 {
    if c < 0 {
        (-c).min(n - 1)
    } else if c >= n {
        (2 * (n - 1) - c).max(0)
    } else {
        c
    }
}

/// Reflective lookups into a field.
/// Each axis is mirrored independently, so a corner neighbour is
/// resolved on every axis it leaves the grid.
pub struct ReflectiveCheck<'a, F> {
    field: &'a Field<F>,
}

impl<'a, F: FloatTrait> ReflectiveCheck<'a, F> {
    pub fn new(field: &'a Field<F>) -> Self {
        ReflectiveCheck { field }
    }
}

impl<F: FloatTrait> BCCheck<F> for ReflectiveCheck<'_, F> {
    fn check(&self, coord: &Coord<3>) -> Option<F> {
        let n = self.field.n() as i32;
        let r_coord = coord.map(|c| reflect_coord(c, n));
        if r_coord != *coord {
            return Some(self.field.view(&r_coord));
        }
        None
    }
}
