use crate::util::*;

/// Number of cells in an `n` cube, `None` on overflow.
pub fn cube_buffer_size(n: usize) -> Option<usize> {
    n.checked_mul(n)?.checked_mul(n)
}

/// Linear offset of `(x, y, z)` in an `n` cube.
/// x varies fastest, then y, then z, so one z-layer is contiguous.
#[inline]
pub fn coord_to_linear(x: usize, y: usize, z: usize, n: usize) -> usize {
    debug_assert!(x < n && y < n && z < n);
    (z * n + y) * n + x
}

/// Inverse of `coord_to_linear`, returned as `[x, y, z]`.
pub fn linear_to_coord(linear_index: usize, n: usize) -> Coord<3> {
    let layer_len = n * n;
    let z = linear_index / layer_len;
    let in_layer = linear_index % layer_len;
    vector![(in_layer % n) as i32, (in_layer / n) as i32, z as i32]
}

/// Offset of the first cell of layer `z`.
#[inline]
pub fn layer_offset(z: usize, n: usize) -> usize {
    z * n * n
}
