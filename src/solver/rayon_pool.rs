use crate::grid::*;
use crate::solver::sweep::*;
use crate::util::*;
use log::trace;
use rayon::prelude::*;

/// Safe executor: one rayon task per z-layer of the next field,
/// inside the solver's own pool.
pub fn run<F: FloatTrait>(
    sweep: &Sweep<F>,
    fields: &mut FieldPair<F>,
    pool: &rayon::ThreadPool,
    iterations: usize,
) {
    profiling::scope!("rayon");
    let n = fields.n();
    pool.install(|| {
        for iteration in 0..iterations {
            let (current, next) = fields.split_mut();
            let current = current.buffer();
            next.buffer_mut()
                .par_chunks_mut(n * n)
                .enumerate()
                .for_each(|(z, out): (usize, &mut [F])| {
                    sweep.layers(current, z..z + 1, out, iteration);
                });
            fields.swap();
            trace!("iteration {} done", iteration);
        }
    });
}
