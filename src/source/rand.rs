use crate::grid::*;
use crate::util::*;
use rand::prelude::*;
use rayon::prelude::*;

/// Uniform values in `[-max_val, max_val]`.
/// Each z-layer draws from its own generator seeded from `seed`,
/// so the result does not depend on how rayon schedules the layers.
pub fn rand_source<F: FloatTrait>(
    field: &mut Field<F>,
    max_val: f64,
    seed: u64,
) {
    let n = field.n();
    field
        .buffer_mut()
        .par_chunks_mut(n * n)
        .enumerate()
        .for_each(|(z, layer): (usize, &mut [F])| {
            let mut rng = StdRng::seed_from_u64(seed.wrapping_add(z as u64));
            for value_mut in layer.iter_mut() {
                let unit: f64 = rng.gen_range(-1.0..=1.0);
                *value_mut = F::from_literal(unit * max_val);
            }
        });
}

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[test]
    fn rand_test() {
        let mut a = Field::<f64>::zeroed(6).unwrap();
        let mut b = Field::<f64>::zeroed(6).unwrap();
        rand_source(&mut a, 2.5, 42);
        rand_source(&mut b, 2.5, 42);
        assert_eq!(a, b);

        let (lo, hi) = a.min_max();
        assert!(lo >= -2.5);
        assert!(hi <= 2.5);
        assert!(hi > lo);

        rand_source(&mut b, 2.5, 43);
        assert_ne!(a, b);
    }
}
