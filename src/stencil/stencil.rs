use crate::util::*;

/// For linear stencils, we can extract the weight for a neighbor
/// by passing in 1.0 for that neighbor and 0.0 for the others.
pub fn extract_weights<
    F: FloatTrait,
    const NEIGHBORHOOD_SIZE: usize,
    Operation: Fn(&[F; NEIGHBORHOOD_SIZE]) -> F,
>(
    operation: Operation,
) -> [F; NEIGHBORHOOD_SIZE] {
    let mut weights = [F::zero(); NEIGHBORHOOD_SIZE];
    let mut arg_buffer = [F::zero(); NEIGHBORHOOD_SIZE];
    for n in 0..NEIGHBORHOOD_SIZE {
        arg_buffer[n] = F::one();
        weights[n] = operation(&arg_buffer);
        arg_buffer[n] = F::zero();
    }
    weights
}

/// A linear stencil, viewed as neighbor offsets and their weights.
pub struct Stencil<
    F,
    const GRID_DIMENSION: usize,
    const NEIGHBORHOOD_SIZE: usize,
> {
    pub weights: [F; NEIGHBORHOOD_SIZE],
    pub offsets: [Coord<GRID_DIMENSION>; NEIGHBORHOOD_SIZE],
}

impl<F: FloatTrait, const GRID_DIMENSION: usize, const NEIGHBORHOOD_SIZE: usize>
    Stencil<F, GRID_DIMENSION, NEIGHBORHOOD_SIZE>
{
    pub fn new<Operation: Fn(&[F; NEIGHBORHOOD_SIZE]) -> F>(
        offsets: [[i32; GRID_DIMENSION]; NEIGHBORHOOD_SIZE],
        operation: Operation,
    ) -> Self {
        let weights = extract_weights(operation);
        Stencil {
            offsets: std::array::from_fn(|i| {
                Coord::from_column_slice(&offsets[i])
            }),
            weights,
        }
    }

    pub fn weights(&self) -> &[F; NEIGHBORHOOD_SIZE] {
        &self.weights
    }

    pub fn offsets(&self) -> &[Coord<GRID_DIMENSION>; NEIGHBORHOOD_SIZE] {
        &self.offsets
    }

    /// How far one application reaches along each axis,
    /// (d, 0) towards negative and (d, 1) towards positive.
    pub fn slopes(&self) -> Bounds<GRID_DIMENSION> {
        let mut result = Bounds::zeros();
        for neighbor in self.offsets {
            for d in 0..GRID_DIMENSION {
                let neighbor_d = neighbor[d];
                if neighbor_d > 0 {
                    result[(d, 1)] = result[(d, 1)].max(neighbor_d);
                } else {
                    result[(d, 0)] = result[(d, 0)].max(-neighbor_d);
                }
            }
        }
        result
    }

    /// Weighted sum, accumulated left to right in offset order.
    pub fn apply(&self, args: &[F; NEIGHBORHOOD_SIZE]) -> F {
        args.iter()
            .zip(self.weights.iter())
            .map(|(a, w)| *a * *w)
            .reduce(|acc, v| acc + v)
            .unwrap_or_else(F::zero)
    }
}
