use crate::error::*;
use crate::util::indexing::*;
use crate::util::*;
use rayon::prelude::*;

/// Owned cubic field of `n³` cells.
#[derive(Clone, Debug, PartialEq)]
pub struct Field<F> {
    n: usize,
    buffer: Vec<F>,
}

/// Reserve and fill `cells` values, reporting failure instead of aborting.
pub(crate) fn try_allocate<F: Clone>(
    cells: usize,
    value: F,
    what: &'static str,
) -> SolverResult<Vec<F>> {
    let mut buffer = Vec::new();
    buffer
        .try_reserve_exact(cells)
        .map_err(|_| SolverError::Allocation { what, cells })?;
    buffer.resize(cells, value);
    Ok(buffer)
}

pub(crate) fn checked_cells(n: usize) -> SolverResult<usize> {
    if n == 0 {
        return Err(SolverError::InvalidGridSize { n });
    }
    cube_buffer_size(n).ok_or(SolverError::GridTooLarge { n })
}

impl<F: FloatTrait> Field<F> {
    /// Allocate a field where every cell holds `value`.
    pub fn try_constant(
        n: usize,
        value: F,
        what: &'static str,
    ) -> SolverResult<Self> {
        let cells = checked_cells(n)?;
        let buffer = try_allocate(cells, value, what)?;
        Ok(Field { n, buffer })
    }

    /// Allocate a zero field.
    pub fn zeroed(n: usize) -> SolverResult<Self> {
        Self::try_constant(n, F::zero(), "field")
    }

    /// Wrap an existing buffer, which must hold exactly `n³` values.
    pub fn from_vec(n: usize, buffer: Vec<F>) -> SolverResult<Self> {
        let expected = checked_cells(n)?;
        if buffer.len() != expected {
            return Err(SolverError::FieldSizeMismatch {
                what: "buffer",
                expected,
                actual: buffer.len(),
            });
        }
        Ok(Field { n, buffer })
    }

    /// Allocate a field and set every cell from its `[x, y, z]` coordinate.
    pub fn from_fn<G>(n: usize, f: G) -> SolverResult<Self>
    where
        G: Fn(Coord<3>) -> F + Send + Sync,
    {
        let mut result = Self::zeroed(n)?;
        result.par_set_values(f);
        Ok(result)
    }

    /// Grid edge length.
    #[inline]
    pub fn n(&self) -> usize {
        self.n
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Bounds of the whole grid.
    pub fn aabb(&self) -> AABB<3> {
        AABB::cube(self.n)
    }

    #[inline]
    pub fn buffer(&self) -> &[F] {
        &self.buffer
    }

    #[inline]
    pub fn buffer_mut(&mut self) -> &mut [F] {
        &mut self.buffer
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize, z: usize) -> F {
        self.buffer[coord_to_linear(x, y, z, self.n)]
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, z: usize, value: F) {
        let index = coord_to_linear(x, y, z, self.n);
        self.buffer[index] = value;
    }

    /// Value at an in-grid `[x, y, z]` coordinate.
    #[track_caller]
    pub fn view(&self, coord: &Coord<3>) -> F {
        debug_assert!(
            self.aabb().contains(coord),
            "{:?} does not contain {:?}",
            self.aabb(),
            coord
        );
        self.get(coord[0] as usize, coord[1] as usize, coord[2] as usize)
    }

    /// Set every cell in parallel, one rayon task per z-layer.
    pub fn par_set_values<G>(&mut self, f: G)
    where
        G: Fn(Coord<3>) -> F + Send + Sync,
    {
        let n = self.n;
        self.buffer
            .par_chunks_mut(n * n)
            .enumerate()
            .for_each(|(z, layer): (usize, &mut [F])| {
                for (i, value_mut) in layer.iter_mut().enumerate() {
                    let coord =
                        vector![(i % n) as i32, (i / n) as i32, z as i32];
                    *value_mut = f(coord);
                }
            });
    }

    /// Copy of the field with every cell multiplied by `factor`.
    pub fn scaled(&self, factor: F, what: &'static str) -> SolverResult<Self> {
        let mut buffer = try_allocate(self.buffer.len(), F::zero(), what)?;
        buffer
            .par_iter_mut()
            .zip(self.buffer.par_iter())
            .for_each(|(out, value)| *out = *value * factor);
        Ok(Field { n: self.n, buffer })
    }

    /// Bounding box of every non-zero cell, `None` for an all zero field.
    pub fn support(&self) -> Option<AABB<3>> {
        self.buffer
            .iter()
            .enumerate()
            .filter(|(_, v)| !v.is_zero())
            .map(|(i, _)| {
                let c = linear_to_coord(i, self.n);
                AABB::from_mm(c, c)
            })
            .reduce(|a, b| a.union(&b))
    }

    /// (min, max) over all cells.
    pub fn min_max(&self) -> (F, F) {
        self.buffer.iter().fold(
            (F::infinity(), F::neg_infinity()),
            |(lo, hi), v| (lo.min(*v), hi.max(*v)),
        )
    }
}
