use crate::stencil::*;
use crate::util::*;

/// Sum of the six axis neighbours, in the order
/// west, east, south, north, below, above.
/// The Jacobi update is `(sum - delta² * source) / 6`.
pub fn poisson_3d<F: FloatTrait>() -> Stencil<F, 3, 6> {
    Stencil::new(
        [
            [-1, 0, 0],
            [1, 0, 0],
            [0, -1, 0],
            [0, 1, 0],
            [0, 0, -1],
            [0, 0, 1],
        ],
        |args: &[F; 6]| {
            let west = args[0];
            let east = args[1];
            let south = args[2];
            let north = args[3];
            let below = args[4];
            let above = args[5];
            west + east + south + north + below + above
        },
    )
}
