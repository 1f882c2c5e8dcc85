use crate::grid::*;
use crate::solver::shared::*;
use crate::solver::sweep::*;
use crate::util::*;
use log::trace;
use std::ops::Range;
use std::sync::Barrier;

fn process<F: FloatTrait>(
    sweep: &Sweep<F>,
    shared: &SharedFields<F>,
    zs: Range<usize>,
    iteration: usize,
) {
    // Safety: ranges are disjoint and the swap happens between the two
    // waits, when every other thread is parked.
    unsafe {
        let current = shared.current();
        let out = shared.next_layers(zs.clone());
        sweep.layers(current, zs, out, iteration);
    }
}

/// Same thread layout as the handshake, synchronized by one shared
/// barrier. The first wait ends the writes of an iteration, the
/// coordinator swaps, the second wait releases everyone.
pub fn run<F: FloatTrait>(
    sweep: &Sweep<F>,
    fields: &mut FieldPair<F>,
    ranges: &[Range<usize>],
    iterations: usize,
) {
    profiling::scope!("barrier");
    let Some((own, worker_ranges)) = ranges.split_last() else {
        return;
    };
    let barrier = Barrier::new(ranges.len());

    let current = {
        let shared = SharedFields::new(fields);
        std::thread::scope(|s| {
            for range in worker_ranges.iter() {
                let shared = &shared;
                let barrier = &barrier;
                s.spawn(move || {
                    profiling::scope!("barrier: worker");
                    for iteration in 0..iterations {
                        process(sweep, shared, range.clone(), iteration);
                        barrier.wait();
                        barrier.wait();
                    }
                });
            }

            for iteration in 0..iterations {
                process(sweep, &shared, own.clone(), iteration);
                barrier.wait();
                shared.swap();
                barrier.wait();
                trace!("iteration {} done", iteration);
            }
        });
        shared.current_index()
    };
    fields.set_current_index(current);
}
