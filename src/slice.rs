//! Per-layer descriptors.
//! A `Slice` borrows from the current buffer and is derived again for
//! every iteration, so it can never outlive a buffer swap.

use crate::grid::*;
use crate::util::indexing::*;
use crate::util::*;

/// A z-neighbour of a slice: a real layer of the current buffer, or
/// a constant substitute when the neighbour lies outside the grid.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Layer<'a, F> {
    Cells(&'a [F]),
    Fixed(F),
}


/// Everything the kernel reads to update layer `z`.
#[derive(Copy, Clone, Debug)]
pub struct Slice<'a, F> {
    pub z: usize,
    pub below: Layer<'a, F>,
    pub layer: &'a [F],
    pub above: Layer<'a, F>,
    pub source: &'a [F],
}

impl<'a, F: FloatTrait> Slice<'a, F> {
    /// Describe layer `z` of the `n` cube held in `current`,
    /// with `source` the scaled source of the same shape.
    pub fn derive(
        current: &'a [F],
        source: &'a [F],
        n: usize,
        z: usize,
        bc: &BoundaryCondition<F>,
    ) -> Self {
        debug_assert!(z < n);
        debug_assert_eq!(current.len(), n * n * n);
        debug_assert_eq!(source.len(), current.len());

        let layer_len = n * n;
        let layer_at = move |z: usize| {
            let offset = layer_offset(z, n);
            &current[offset..offset + layer_len]
        };
        let neighbour = move |z_in: Option<usize>, mirrored: usize| {
            match (z_in, bc) {
                (Some(z_in), _) => Layer::Cells(layer_at(z_in)),
                (None, BoundaryCondition::Reflective) => {
                    Layer::Cells(layer_at(mirrored))
                }
                (None, BoundaryCondition::Fixed(v)) => Layer::Fixed(*v),
            }
        };

        let below = neighbour(z.checked_sub(1), reflect_low(n));
        let above = neighbour(
            if z + 1 < n { Some(z + 1) } else { None },
            reflect_high(n),
        );
        let offset = layer_offset(z, n);
        Slice {
            z,
            below,
            layer: layer_at(z),
            above,
            source: &source[offset..offset + layer_len],
        }
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;

    fn cell(layer: Layer<f64>, i: usize) -> f64 {
        match layer {
            Layer::Cells(cells) => cells[i],
            Layer::Fixed(value) => value,
        }
    }

    fn layered(n: usize) -> Field<f64> {
        Field::from_fn(n, |c| c[2] as f64).unwrap()
    }

    #[test]
    fn interior_slice_test() {
        let current = layered(4);
        let source = Field::try_constant(4, 7.0, "source").unwrap();
        let s = Slice::derive(
            current.buffer(),
            source.buffer(),
            4,
            2,
            &BoundaryCondition::Fixed(-1.0),
        );
        assert_eq!(s.z, 2);
        assert_eq!(s.layer.len(), 16);
        assert!(s.layer.iter().all(|v| *v == 2.0));
        assert_eq!(cell(s.below, 5), 1.0);
        assert_eq!(cell(s.above, 5), 3.0);
        assert!(s.source.iter().all(|v| *v == 7.0));
    }

    #[test]
    fn reflective_slice_test() {
        let current = layered(4);
        let source = Field::zeroed(4).unwrap();
        let bc = BoundaryCondition::Reflective;

        let layer = |z: usize| &current.buffer()[z * 16..(z + 1) * 16];

        let first = Slice::derive(current.buffer(), source.buffer(), 4, 0, &bc);
        assert_eq!(first.below, Layer::Cells(layer(1)));
        assert_eq!(first.above, Layer::Cells(layer(1)));

        let last = Slice::derive(current.buffer(), source.buffer(), 4, 3, &bc);
        assert_eq!(last.below, Layer::Cells(layer(2)));
        assert_eq!(last.above, Layer::Cells(layer(2)));
    }

    #[test]
    fn fixed_slice_test() {
        let current = layered(3);
        let source = Field::zeroed(3).unwrap();
        let bc = BoundaryCondition::Fixed(0.5);

        let first = Slice::derive(current.buffer(), source.buffer(), 3, 0, &bc);
        assert_eq!(first.below, Layer::Fixed(0.5));
        assert_eq!(cell(first.above, 0), 1.0);

        let last = Slice::derive(current.buffer(), source.buffer(), 3, 2, &bc);
        assert_eq!(cell(last.below, 0), 1.0);
        assert_eq!(last.above, Layer::Fixed(0.5));
    }

    #[test]
    fn single_layer_test() {
        let current = Field::try_constant(1, 3.0, "current").unwrap();
        let source = Field::zeroed(1).unwrap();
        let s = Slice::derive(
            current.buffer(),
            source.buffer(),
            1,
            0,
            &BoundaryCondition::Reflective,
        );
        assert_eq!(cell(s.below, 0), 3.0);
        assert_eq!(cell(s.above, 0), 3.0);
    }
}
