use crate::util::*;
use std::ops::Range;

/// Axis Aligned Bounding Box (AABB) for coordinate types.
/// Each instance is inclusive of both corners.
/// The solver uses these to describe which part of the grid
/// can hold non-zero values, and which rows of a layer to sweep.
#[derive(Hash, Debug, Copy, Clone, Eq, PartialEq)]
pub struct AABB<const DIMENSION: usize> {
    pub bounds: Bounds<DIMENSION>,
}

impl<const GRID_DIMENSION: usize> std::fmt::Display for AABB<GRID_DIMENSION> {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> Result<(), std::fmt::Error> {
        write!(f, "{:?}", self.bounds)
    }
}

impl<const DIMENSION: usize> AABB<DIMENSION> {
    /// Create AABB from raw bounds.
    #[inline]
    pub fn new(bounds: Bounds<DIMENSION>) -> Self {
        AABB { bounds }
    }

    /// Create AABB from corners.
    pub fn from_mm(min: Coord<DIMENSION>, max: Coord<DIMENSION>) -> Self {
        let result = AABB {
            bounds: Bounds::from_columns(&[min, max]),
        };
        debug_assert!(result.check_validity());
        result
    }

    /// The box `[0, n - 1]` along every axis.
    pub fn cube(n: usize) -> Self {
        debug_assert!(n > 0);
        let inclusive = n as i32 - 1;
        let mut bounds = Bounds::zeros();
        for d in 0..DIMENSION {
            bounds[(d, 1)] = inclusive;
        }
        AABB { bounds }
    }

    /// Check whether the instance contains a coordinate.
    pub fn contains(&self, coord: &Coord<DIMENSION>) -> bool {
        for d in 0..DIMENSION {
            if coord[d] < self.bounds[(d, 0)] || coord[d] > self.bounds[(d, 1)]
            {
                return false;
            }
        }
        true
    }

    /// Clamp the instance to `other`.
    /// The result may be invalid when the two do not overlap.
    pub fn trim_to_aabb(&mut self, other: &Self) {
        for d in 0..DIMENSION {
            self.bounds[(d, 0)] = self.bounds[(d, 0)].max(other.bounds[(d, 0)]);
            self.bounds[(d, 1)] = self.bounds[(d, 1)].min(other.bounds[(d, 1)]);
        }
    }

    /// Overlap of two boxes, `None` if they are disjoint.
    pub fn intersection(&self, other: &Self) -> Option<Self> {
        let mut result = *self;
        result.trim_to_aabb(other);
        if result.check_validity() {
            Some(result)
        } else {
            None
        }
    }

    /// Grow the box by `steps` applications of a stencil with
    /// the given slopes, (d, 0) extending min and (d, 1) extending max.
    pub fn dilate(&self, slopes: &Bounds<DIMENSION>, steps: i32) -> Self {
        let mut result = *self;
        for d in 0..DIMENSION {
            result.bounds[(d, 0)] = result.bounds[(d, 0)]
                .saturating_sub(slopes[(d, 0)].saturating_mul(steps));
            result.bounds[(d, 1)] = result.bounds[(d, 1)]
                .saturating_add(slopes[(d, 1)].saturating_mul(steps));
        }
        result
    }

    /// Smallest box containing both.
    pub fn union(&self, other: &Self) -> Self {
        let mut result = *self;
        for d in 0..DIMENSION {
            result.bounds[(d, 0)] =
                result.bounds[(d, 0)].min(other.bounds[(d, 0)]);
            result.bounds[(d, 1)] =
                result.bounds[(d, 1)].max(other.bounds[(d, 1)]);
        }
        result
    }

    /// Return min corner.
    pub fn min(&self) -> Coord<DIMENSION> {
        self.bounds.column(0).into()
    }

    /// Return max corner
    pub fn max(&self) -> Coord<DIMENSION> {
        self.bounds.column(1).into()
    }

    /// Half open index range along axis `d`, for boxes with non-negative min.
    pub fn axis_range(&self, d: usize) -> Range<usize> {
        debug_assert!(self.bounds[(d, 0)] >= 0);
        self.bounds[(d, 0)] as usize..(self.bounds[(d, 1)] + 1) as usize
    }

    /// Check that max >= min
    pub fn check_validity(&self) -> bool {
        for d in 0..DIMENSION {
            if self.bounds[(d, 0)] > self.bounds[(d, 1)] {
                return false;
            }
        }
        true
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[test]
    fn cube_test() {
        let a = AABB::<3>::cube(5);
        assert_eq!(a.bounds, matrix![0, 4; 0, 4; 0, 4]);
        assert!(a.check_validity());

        let b = AABB::<2>::cube(1);
        assert_eq!(b.bounds, matrix![0, 0; 0, 0]);
    }

    #[test]
    fn contains_test() {
        let a = AABB::new(matrix![0, 9; 2, 4]);
        assert!(a.contains(&vector![0, 2]));
        assert!(a.contains(&vector![9, 4]));
        assert!(!a.contains(&vector![-1, 3]));
        assert!(!a.contains(&vector![3, 5]));
    }

    #[test]
    fn dilate_test() {
        let slopes = matrix![1, 1; 1, 1; 1, 1];
        let a = AABB::from_mm(vector![2, 2, 2], vector![2, 2, 2]);
        assert_eq!(a.dilate(&slopes, 0), a);
        assert_eq!(
            a.dilate(&slopes, 2).bounds,
            matrix![0, 4; 0, 4; 0, 4]
        );

        let lopsided = matrix![0, 2; 1, 0];
        let b = AABB::new(matrix![3, 3; 3, 3]);
        assert_eq!(b.dilate(&lopsided, 1).bounds, matrix![3, 5; 2, 3]);

        // No overflow for huge step counts
        let c = a.dilate(&slopes, i32::MAX);
        assert_eq!(c.bounds[(0, 0)], 2 - i32::MAX);
        assert_eq!(c.bounds[(0, 1)], i32::MAX);
    }

    #[test]
    fn intersection_test() {
        let grid = AABB::<3>::cube(5);
        let region = AABB::new(matrix![-3, 1; 2, 7; 1, 1]);
        assert_eq!(
            region.intersection(&grid),
            Some(AABB::new(matrix![0, 1; 2, 4; 1, 1]))
        );

        let outside = AABB::new(matrix![6, 7; 0, 1; 0, 1]);
        assert_eq!(outside.intersection(&grid), None);
    }

    #[test]
    fn union_test() {
        let a = AABB::new(matrix![0, 1; 5, 5]);
        let b = AABB::new(matrix![3, 4; 2, 2]);
        assert_eq!(a.union(&b).bounds, matrix![0, 4; 2, 5]);
    }

    #[test]
    fn axis_range_test() {
        let a = AABB::new(matrix![0, 4; 2, 3; 7, 7]);
        assert_eq!(a.axis_range(0), 0..5);
        assert_eq!(a.axis_range(1), 2..4);
        assert_eq!(a.axis_range(2), 7..8);
        assert_eq!(a.min(), vector![0, 2, 7]);
        assert_eq!(a.max(), vector![4, 3, 7]);
    }
}
