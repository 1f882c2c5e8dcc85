use crate::grid::*;
use crate::slice::*;
use crate::util::*;
use std::ops::Range;

/// Cells of a layer to update, as half open x and y ranges.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Window {
    pub x: Range<usize>,
    pub y: Range<usize>,
}

impl Window {
    /// Every cell of an `n * n` layer.
    pub fn full(n: usize) -> Self {
        Window { x: 0..n, y: 0..n }
    }

    /// The x and y extent of a box with non-negative corners.
    pub fn from_aabb(aabb: &AABB<3>) -> Self {
        Window {
            x: aabb.axis_range(0),
            y: aabb.axis_range(1),
        }
    }

    #[inline]
    pub fn contains(&self, x: usize, y: usize) -> bool {
        self.x.contains(&x) && self.y.contains(&y)
    }
}

/// Restrict `r` to `[lo, hi)`, possibly leaving it empty.
#[inline]
fn clip(r: &Range<usize>, lo: usize, hi: usize) -> Range<usize> {
    r.start.max(lo)..r.end.min(hi)
}

/// Read access to a z-neighbour layer.
/// Monomorphized per neighbour kind so the interior loop has no
/// per-cell branch on the boundary policy.
trait LayerRead<F> {
    fn at(&self, i: usize) -> F;
}

impl<F: Copy> LayerRead<F> for &[F] {
    #[inline(always)]
    fn at(&self, i: usize) -> F {
        self[i]
    }
}

struct Constant<F>(F);

impl<F: Copy> LayerRead<F> for Constant<F> {
    #[inline(always)]
    fn at(&self, _: usize) -> F {
        self.0
    }
}

/// The 6-point Jacobi update for one z-layer.
///
/// `next = (west + east + south + north + below + above - source) / 6`,
/// summed in exactly that order on every path, with `source` already
/// scaled by `delta²`.
/// Corners and edges resolve missing in-layer neighbours through the
/// boundary policy, the interior reads its neighbours directly.
#[derive(Copy, Clone, Debug)]
pub struct Kernel<F> {
    n: usize,
    bc: BoundaryCondition<F>,
    six: F,
}

impl<F: FloatTrait> Kernel<F> {
    pub fn new(n: usize, bc: BoundaryCondition<F>) -> Self {
        debug_assert!(n > 0);
        Kernel {
            n,
            bc,
            six: six(),
        }
    }

    pub fn n(&self) -> usize {
        self.n
    }

    pub fn boundary(&self) -> &BoundaryCondition<F> {
        &self.bc
    }

    /// Write the cells of `window` for layer `slice.z` into `out`,
    /// which is that layer of the next buffer.
    /// Cells outside the window are left untouched.
    pub fn process_slice(
        &self,
        slice: &Slice<F>,
        window: &Window,
        out: &mut [F],
    ) {
        debug_assert_eq!(out.len(), self.n * self.n);
        debug_assert_eq!(slice.layer.len(), self.n * self.n);
        debug_assert_eq!(slice.source.len(), self.n * self.n);
        match (slice.below, slice.above) {
            (Layer::Cells(b), Layer::Cells(a)) => {
                self.sweep(slice.layer, slice.source, b, a, window, out)
            }
            (Layer::Cells(b), Layer::Fixed(a)) => self.sweep(
                slice.layer,
                slice.source,
                b,
                Constant(a),
                window,
                out,
            ),
            (Layer::Fixed(b), Layer::Cells(a)) => self.sweep(
                slice.layer,
                slice.source,
                Constant(b),
                a,
                window,
                out,
            ),
            (Layer::Fixed(b), Layer::Fixed(a)) => self.sweep(
                slice.layer,
                slice.source,
                Constant(b),
                Constant(a),
                window,
                out,
            ),
        }
    }

    #[inline(always)]
    #[allow(clippy::too_many_arguments)]
    fn update(
        &self,
        west: F,
        east: F,
        south: F,
        north: F,
        below: F,
        above: F,
        source: F,
    ) -> F {
        (west + east + south + north + below + above - source) / self.six
    }

    /// One cell with at least one missing in-layer neighbour.
    #[inline]
    fn boundary_cell<B: LayerRead<F>, A: LayerRead<F>>(
        &self,
        layer: &[F],
        source: &[F],
        below: &B,
        above: &A,
        x: usize,
        y: usize,
    ) -> F {
        let n = self.n;
        let i = y * n + x;
        let west = if x > 0 {
            layer[i - 1]
        } else {
            self.bc.substitute(layer[y * n + reflect_low(n)])
        };
        let east = if x + 1 < n {
            layer[i + 1]
        } else {
            self.bc.substitute(layer[y * n + reflect_high(n)])
        };
        let south = if y > 0 {
            layer[i - n]
        } else {
            self.bc.substitute(layer[reflect_low(n) * n + x])
        };
        let north = if y + 1 < n {
            layer[i + n]
        } else {
            self.bc.substitute(layer[reflect_high(n) * n + x])
        };
        self.update(
            west,
            east,
            south,
            north,
            below.at(i),
            above.at(i),
            source[i],
        )
    }

    fn sweep<B: LayerRead<F>, A: LayerRead<F>>(
        &self,
        layer: &[F],
        source: &[F],
        below: B,
        above: A,
        window: &Window,
        out: &mut [F],
    ) {
        let n = self.n;
        let last = n - 1;

        // Corners
        let corners: &[(usize, usize)] = if n == 1 {
            &[(0, 0)]
        } else {
            &[(0, 0), (last, 0), (0, last), (last, last)]
        };
        for &(x, y) in corners {
            if window.contains(x, y) {
                out[y * n + x] =
                    self.boundary_cell(layer, source, &below, &above, x, y);
            }
        }

        // Edges, without their corners
        let inner_x = clip(&window.x, 1, last);
        let inner_y = clip(&window.y, 1, last);
        for y in [0, last] {
            if n > 2 && window.y.contains(&y) {
                for x in inner_x.clone() {
                    out[y * n + x] =
                        self.boundary_cell(layer, source, &below, &above, x, y);
                }
            }
        }
        for x in [0, last] {
            if n > 2 && window.x.contains(&x) {
                for y in inner_y.clone() {
                    out[y * n + x] =
                        self.boundary_cell(layer, source, &below, &above, x, y);
                }
            }
        }

        // Interior
        for y in inner_y {
            let row = y * n;
            for x in inner_x.clone() {
                let i = row + x;
                out[i] = self.update(
                    layer[i - 1],
                    layer[i + 1],
                    layer[i - n],
                    layer[i + n],
                    below.at(i),
                    above.at(i),
                    source[i],
                );
            }
        }
    }
}
