use crate::grid::BCCheck;
use crate::util::*;

pub struct FixedCheck<F> {
    value: F,
    aabb: AABB<3>,
}

impl<F: FloatTrait> FixedCheck<F> {
    pub fn new(value: F, n: usize) -> Self {
        FixedCheck {
            value,
            aabb: AABB::cube(n),
        }
    }
}

impl<F: FloatTrait> BCCheck<F> for FixedCheck<F> {
    fn check(&self, coord: &Coord<3>) -> Option<F> {
        if self.aabb.contains(coord) {
            None
        } else {
            Some(self.value)
        }
    }
}
