use crate::error::*;
use crate::grid::*;
use crate::util::indexing::*;
use crate::util::*;
use clap::ValueEnum;

/// How threads are coordinated between iterations.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum Schedule {
    /// Two private semaphores per worker, the coordinator swaps.
    #[default]
    Handshake,

    /// One shared `std::sync::Barrier`, waited on twice per iteration.
    Barrier,

    /// A dedicated rayon pool, one task per z-layer.
    Rayon,
}

/// Solver configuration.
/// These are all the parameters.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SolverConfig<F> {
    /// Grid edge length, the grid holds `n³` cells.
    pub n: usize,

    /// Number of Jacobi iterations, there is no convergence test.
    pub iterations: usize,

    /// Grid spacing, the source is scaled by `delta²`.
    pub delta: F,

    pub boundary: BoundaryCondition<F>,

    /// Total threads, including the coordinator.
    pub threads: usize,

    pub schedule: Schedule,

    /// Restrict each iteration to the cells that can be non-zero.
    /// Only takes effect from a zero initial field under a boundary
    /// that contributes zero.
    pub wavefront: bool,
}

impl<F: FloatTrait> std::default::Default for SolverConfig<F> {
    fn default() -> Self {
        SolverConfig {
            n: 64,
            iterations: 100,
            delta: F::one(),
            boundary: BoundaryCondition::Reflective,
            threads: 1,
            schedule: Schedule::Handshake,
            wavefront: true,
        }
    }
}

impl<F: FloatTrait> SolverConfig<F> {
    pub fn new(n: usize, iterations: usize) -> Self {
        SolverConfig {
            n,
            iterations,
            ..Default::default()
        }
    }

    /// Reject configurations the solver cannot run.
    pub fn validate(&self) -> SolverResult<()> {
        if self.n == 0 {
            return Err(SolverError::InvalidGridSize { n: self.n });
        }
        if self.threads == 0 {
            return Err(SolverError::InvalidThreadCount {
                threads: self.threads,
            });
        }
        if self.threads > self.n {
            return Err(SolverError::ThreadsExceedGrid {
                threads: self.threads,
                n: self.n,
            });
        }
        if !self.delta.is_finite() || self.delta <= F::zero() {
            return Err(SolverError::InvalidDelta {
                delta: self.delta.to_f64().unwrap_or(f64::NAN),
            });
        }
        if let BoundaryCondition::Fixed(value) = self.boundary {
            if !value.is_finite() {
                return Err(SolverError::NonFiniteBoundary {
                    value: value.to_f64().unwrap_or(f64::NAN),
                });
            }
        }
        if cube_buffer_size(self.n).is_none() {
            return Err(SolverError::GridTooLarge { n: self.n });
        }
        Ok(())
    }

    /// `n³`, for a validated configuration.
    pub fn cells(&self) -> usize {
        self.n * self.n * self.n
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[test]
    fn default_test() {
        let c = SolverConfig::<f64>::new(9, 20);
        assert_eq!(c.n, 9);
        assert_eq!(c.iterations, 20);
        assert_eq!(c.delta, 1.0);
        assert_eq!(c.threads, 1);
        assert_eq!(c.schedule, Schedule::Handshake);
        assert_eq!(c.validate(), Ok(()));
        assert_eq!(c.cells(), 729);
    }

    #[test]
    fn validate_test() {
        let ok = SolverConfig::<f64>::new(4, 1);

        let c = SolverConfig { n: 0, ..ok };
        assert_eq!(c.validate(), Err(SolverError::InvalidGridSize { n: 0 }));

        let c = SolverConfig { threads: 0, ..ok };
        assert_eq!(
            c.validate(),
            Err(SolverError::InvalidThreadCount { threads: 0 })
        );

        let c = SolverConfig { threads: 5, ..ok };
        assert_eq!(
            c.validate(),
            Err(SolverError::ThreadsExceedGrid { threads: 5, n: 4 })
        );

        let c = SolverConfig { threads: 4, ..ok };
        assert_eq!(c.validate(), Ok(()));

        let c = SolverConfig { delta: 0.0, ..ok };
        assert_eq!(c.validate(), Err(SolverError::InvalidDelta { delta: 0.0 }));

        let c = SolverConfig {
            delta: f64::INFINITY,
            ..ok
        };
        assert!(matches!(c.validate(), Err(SolverError::InvalidDelta { .. })));

        let c = SolverConfig {
            boundary: BoundaryCondition::Fixed(f64::NAN),
            ..ok
        };
        assert!(matches!(
            c.validate(),
            Err(SolverError::NonFiniteBoundary { .. })
        ));

        let c = SolverConfig {
            n: usize::MAX / 2,
            threads: 1,
            ..ok
        };
        assert_eq!(
            c.validate(),
            Err(SolverError::GridTooLarge { n: usize::MAX / 2 })
        );

        // Zero iterations is a valid request
        let c = SolverConfig { iterations: 0, ..ok };
        assert_eq!(c.validate(), Ok(()));
    }
}
