mod barrier;
mod config;
mod handshake;
mod rayon_pool;
pub mod reference;
mod shared;
mod sweep;
mod wavefront;

pub use config::*;
pub use wavefront::*;

use crate::error::*;
use crate::grid::*;
use crate::partition::*;
use crate::stencil::*;
use crate::util::*;
use log::debug;
use sweep::Sweep;

/// A validated, fully allocated Jacobi solve.
///
/// `new` does every fallible step (validation, allocation, pool
/// creation), `run` only iterates.
pub struct Solver<F> {
    config: SolverConfig<F>,
    kernel: Kernel<F>,

    /// `delta² * source`, never written after construction.
    source: Field<F>,
    fields: FieldPair<F>,
    wavefront: Option<Wavefront>,
    pool: Option<rayon::ThreadPool>,
}

impl<F: FloatTrait> Solver<F> {
    pub fn new(
        config: SolverConfig<F>,
        source: &Field<F>,
    ) -> SolverResult<Self> {
        config.validate()?;
        if source.n() != config.n {
            return Err(SolverError::FieldSizeMismatch {
                what: "source",
                expected: config.cells(),
                actual: source.len(),
            });
        }

        let source =
            source.scaled(config.delta * config.delta, "scaled source")?;
        let current =
            Field::try_constant(config.n, F::zero(), "current field")?;
        let next = Field::try_constant(config.n, F::zero(), "next field")?;

        let wavefront = if !config.wavefront {
            None
        } else if !config.boundary.contributes_zero() {
            debug!(
                "wavefront disabled, boundary {:?} is non-zero",
                config.boundary
            );
            None
        } else {
            let slopes = standard_stencils::poisson_3d::<F>().slopes();
            let support = source.support();
            let wavefront = Wavefront::new(support, slopes, config.n);
            debug!(
                "wavefront from support {:?}, full grid after {:?} iterations",
                support,
                wavefront.saturation()
            );
            Some(wavefront)
        };

        let pool = match config.schedule {
            Schedule::Rayon => Some(
                rayon::ThreadPoolBuilder::new()
                    .num_threads(config.threads)
                    .build()?,
            ),
            _ => None,
        };

        Ok(Solver {
            kernel: Kernel::new(config.n, config.boundary),
            config,
            source,
            fields: FieldPair::new(current, next),
            wavefront,
            pool,
        })
    }

    /// Start from `initial` instead of the zero field.
    /// This disables the wavefront region.
    pub fn with_initial_field(
        mut self,
        initial: Field<F>,
    ) -> SolverResult<Self> {
        if initial.n() != self.config.n {
            return Err(SolverError::FieldSizeMismatch {
                what: "initial field",
                expected: self.config.cells(),
                actual: initial.len(),
            });
        }
        if self.wavefront.take().is_some() {
            debug!("wavefront disabled by an initial field");
        }
        let spare = self.fields.into_current();
        self.fields = FieldPair::new(initial, spare);
        Ok(self)
    }

    pub fn config(&self) -> &SolverConfig<F> {
        &self.config
    }

    pub fn wavefront(&self) -> Option<&Wavefront> {
        self.wavefront.as_ref()
    }

    /// Run the configured number of iterations and return the final field.
    pub fn run(mut self) -> Field<F> {
        profiling::scope!("solver: run");
        let config = self.config;
        let sweep = Sweep {
            kernel: &self.kernel,
            source: self.source.buffer(),
            wavefront: self.wavefront.as_ref(),
        };

        match config.schedule {
            Schedule::Handshake | Schedule::Barrier => {
                let ranges = partition(config.n, config.threads);
                debug!("{:?} over z ranges {:?}", config.schedule, ranges);
                let fields = &mut self.fields;
                if config.schedule == Schedule::Handshake {
                    let iterations = config.iterations;
                    handshake::run(&sweep, fields, &ranges, iterations);
                } else {
                    barrier::run(&sweep, fields, &ranges, config.iterations);
                }
            }
            Schedule::Rayon => {
                debug!("rayon pool of {} threads", config.threads);
                if let Some(pool) = self.pool.as_ref() {
                    let fields = &mut self.fields;
                    rayon_pool::run(&sweep, fields, pool, config.iterations);
                }
            }
        }
        self.fields.into_current()
    }
}

/// Validate, allocate and run in one call.
pub fn solve<F: FloatTrait>(
    config: SolverConfig<F>,
    source: &Field<F>,
) -> SolverResult<Field<F>> {
    Ok(Solver::new(config, source)?.run())
}

/// As `solve`, continuing from `initial`.
pub fn solve_from<F: FloatTrait>(
    config: SolverConfig<F>,
    source: &Field<F>,
    initial: Field<F>,
) -> SolverResult<Field<F>> {
    Ok(Solver::new(config, source)?
        .with_initial_field(initial)?
        .run())
}
