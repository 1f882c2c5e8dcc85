use crate::util::*;

/// Bound on where values can be non-zero when relaxing from a zero
/// field under a boundary that contributes zero.
/// After `k` iterations only cells within the source support dilated
/// `k - 1` times by the stencil slopes can be non-zero.
#[derive(Clone, Debug, PartialEq)]
pub struct Wavefront {
    support: Option<AABB<3>>,
    slopes: Bounds<3>,
    grid: AABB<3>,
}

impl Wavefront {
    pub fn new(support: Option<AABB<3>>, slopes: Bounds<3>, n: usize) -> Self {
        Wavefront {
            support,
            slopes,
            grid: AABB::cube(n),
        }
    }

    /// Cells written by iteration `iteration` (zero based),
    /// `None` when no cell can change.
    pub fn region(&self, iteration: usize) -> Option<AABB<3>> {
        let support = self.support?;
        let steps = i32::try_from(iteration).unwrap_or(i32::MAX);
        support.dilate(&self.slopes, steps).intersection(&self.grid)
    }

    /// First iteration whose region is the whole grid.
    pub fn saturation(&self) -> Option<usize> {
        let support = self.support?;
        let mut result = 0;
        for d in 0..3 {
            let low = support.bounds[(d, 0)] - self.grid.bounds[(d, 0)];
            let high = self.grid.bounds[(d, 1)] - support.bounds[(d, 1)];
            for (gap, slope) in
                [(low, self.slopes[(d, 0)]), (high, self.slopes[(d, 1)])]
            {
                if gap > 0 {
                    if slope == 0 {
                        return None;
                    }
                    let steps = (gap + slope - 1) / slope;
                    result = result.max(steps as usize);
                }
            }
        }
        Some(result)
    }
}
