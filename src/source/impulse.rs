use crate::grid::*;
use crate::util::*;

/// Zero everywhere except `magnitude` at `(n/2, n/2, n/2)`.
/// For odd `n` this is the cell at linear index `n³ / 2`.
pub fn unit_impulse<F: FloatTrait>(field: &mut Field<F>, magnitude: F) {
    let c = field.n() / 2;
    field.buffer_mut().fill(F::zero());
    field.set(c, c, c, magnitude);
}

/// Normal like distribution with its peak in the middle,
/// all values are in [0, 1].
pub fn normal_source<F: FloatTrait>(field: &mut Field<F>, variance: f64) {
    let n_f = field.n() as f64;
    let sigma_sq: f64 = (n_f / variance) * (n_f / variance);
    let center = (field.n() / 2) as f64;
    let source_gen = |coord: Coord<3>| {
        let x = coord[0] as f64 - center;
        let y = coord[1] as f64 - center;
        let z = coord[2] as f64 - center;
        let r_sq = x * x + y * y + z * z;
        F::from_literal((-r_sq / (2.0 * sigma_sq)).exp())
    };
    field.par_set_values(source_gen);
}
