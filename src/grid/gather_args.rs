use crate::grid::*;
use crate::stencil::*;
use crate::util::*;

/// Collect the stencil's neighbour values around `coord`,
/// resolving out-of-grid neighbours through `bc`.
pub fn gather_args<BC, F, const NEIGHBORHOOD_SIZE: usize>(
    stencil: &Stencil<F, 3, NEIGHBORHOOD_SIZE>,
    bc: &BC,
    input: &Field<F>,
    coord: &Coord<3>,
) -> [F; NEIGHBORHOOD_SIZE]
where
    F: FloatTrait,
    BC: BCCheck<F>,
{
    let mut result = [F::zero(); NEIGHBORHOOD_SIZE];
    for (i, n_i) in stencil.offsets().iter().enumerate() {
        let n_coord = coord + n_i;
        result[i] = bc.check(&n_coord).unwrap_or_else(|| input.view(&n_coord));
    }
    result
}

#[cfg(test)]
mod unit_tests {
    use super::*;

    fn ramp() -> Field<f64> {
        Field::from_fn(4, |c| (c[0] + 3 * c[1] + 9 * c[2]) as f64).unwrap()
    }

    #[test]
    fn gather_args_test_fixed() {
        let field = ramp();
        let bc = FixedCheck::new(-4.0, 4);
        let stencil = standard_stencils::poisson_3d::<f64>();
        let r = gather_args(&stencil, &bc, &field, &vector![3, 3, 0]);
        let e = [
            (2 + 3 * 3) as f64,
            -4.0,
            (3 + 3 * 2) as f64,
            -4.0,
            -4.0,
            (3 + 3 * 3 + 9) as f64,
        ];
        assert_eq!(r, e);
    }

    #[test]
    fn gather_args_test_reflective() {
        let field = ramp();
        let bc = ReflectiveCheck::new(&field);
        let stencil = standard_stencils::poisson_3d::<f64>();
        let r = gather_args(&stencil, &bc, &field, &vector![3, 3, 0]);
        let e = [
            (2 + 3 * 3) as f64,
            (2 + 3 * 3) as f64,
            (3 + 3 * 2) as f64,
            (3 + 3 * 2) as f64,
            (3 + 3 * 3 + 9) as f64,
            (3 + 3 * 3 + 9) as f64,
        ];
        assert_eq!(r, e);
    }
}
