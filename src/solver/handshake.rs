use crate::grid::*;
use crate::solver::shared::*;
use crate::solver::sweep::*;
use crate::sync::*;
use crate::util::*;
use log::trace;
use std::ops::Range;
use std::sync::atomic::{AtomicBool, Ordering};

/// One worker's assignment and its private handshake.
struct WorkBlock {
    range: Range<usize>,

    /// Released by the worker after writing its layers.
    done: Semaphore,

    /// Released by the coordinator after the swap.
    proceed: Semaphore,
}

/// On unwind, flag the solve as aborted and wake whoever waits on
/// `wake`, so no thread stays parked behind a panicked one.
struct AbortOnPanic<'a> {
    aborted: &'a AtomicBool,
    wake: Vec<&'a Semaphore>,
}

impl Drop for AbortOnPanic<'_> {
    fn drop(&mut self) {
        if std::thread::panicking() {
            self.aborted.store(true, Ordering::Release);
            for s in self.wake.iter() {
                s.release();
            }
        }
    }
}

fn worker<F: FloatTrait, P>(
    process: &P,
    shared: &SharedFields<F>,
    block: &WorkBlock,
    aborted: &AtomicBool,
    iterations: usize,
) where
    P: Fn(&SharedFields<F>, Range<usize>, usize) + Sync,
{
    profiling::scope!("handshake: worker");
    let _guard = AbortOnPanic {
        aborted,
        wake: vec![&block.done],
    };
    for iteration in 0..iterations {
        if iteration > 0 {
            block.proceed.acquire();
            if aborted.load(Ordering::Acquire) {
                return;
            }
        }
        process(shared, block.range.clone(), iteration);
        block.done.release();
    }
}

/// Run `iterations` steps with `T - 1` worker threads, the coordinator
/// processing the last range itself.
///
/// Per iteration the coordinator releases every worker's `proceed`
/// (except before the first), sweeps its own layers, collects every
/// `done` and swaps. Workers are never released after the final
/// iteration, they simply return.
pub fn run<F: FloatTrait>(
    sweep: &Sweep<F>,
    fields: &mut FieldPair<F>,
    ranges: &[Range<usize>],
    iterations: usize,
) {
    run_with(
        |shared, zs, iteration| {
            // Safety: every thread writes its own range, and swaps only
            // happen while all threads are parked.
            unsafe {
                let current = shared.current();
                let out = shared.next_layers(zs.clone());
                sweep.layers(current, zs, out, iteration);
            }
        },
        fields,
        ranges,
        iterations,
    );
}

/// The handshake itself, `process` updating one range of the next
/// buffer for one iteration.
fn run_with<F: FloatTrait, P>(
    process: P,
    fields: &mut FieldPair<F>,
    ranges: &[Range<usize>],
    iterations: usize,
) where
    P: Fn(&SharedFields<F>, Range<usize>, usize) + Sync,
{
    profiling::scope!("handshake");
    let Some((own, worker_ranges)) = ranges.split_last() else {
        return;
    };
    let blocks: Vec<WorkBlock> = worker_ranges
        .iter()
        .map(|range| WorkBlock {
            range: range.clone(),
            done: Semaphore::new(0),
            proceed: Semaphore::new(0),
        })
        .collect();
    let aborted = AtomicBool::new(false);
    let process = &process;

    let current = {
        let shared = SharedFields::new(fields);
        std::thread::scope(|s| {
            for block in blocks.iter() {
                let shared = &shared;
                let aborted = &aborted;
                s.spawn(move || {
                    worker(process, shared, block, aborted, iterations)
                });
            }

            let _guard = AbortOnPanic {
                aborted: &aborted,
                wake: blocks.iter().map(|b| &b.proceed).collect(),
            };
            for iteration in 0..iterations {
                if iteration > 0 {
                    for block in blocks.iter() {
                        block.proceed.release();
                    }
                }
                process(&shared, own.clone(), iteration);
                for block in blocks.iter() {
                    block.done.acquire();
                }
                if aborted.load(Ordering::Acquire) {
                    // Let the survivors return, the scope re-raises the panic
                    for block in blocks.iter() {
                        block.proceed.release();
                    }
                    break;
                }
                shared.swap();
                trace!("iteration {} done", iteration);
            }
        });
        shared.current_index()
    };
    fields.set_current_index(current);
}
