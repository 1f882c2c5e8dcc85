//! Single threaded solver built from the general formula.
//! Every neighbour goes through a boundary check, there are no special
//! cases, which makes this the yardstick for the optimized kernel and
//! all executors.

use crate::error::*;
use crate::grid::*;
use crate::solver::SolverConfig;
use crate::stencil::*;
use crate::util::indexing::*;
use crate::util::*;

/// One Jacobi step from `current` into `next`.
pub fn step<BC, F>(
    bc: &BC,
    stencil: &Stencil<F, 3, 6>,
    current: &Field<F>,
    scaled_source: &Field<F>,
    next: &mut Field<F>,
) where
    BC: BCCheck<F>,
    F: FloatTrait,
{
    let n = current.n();
    let six = six::<F>();
    for (i, value_mut) in next.buffer_mut().iter_mut().enumerate() {
        let coord = linear_to_coord(i, n);
        let args = gather_args(stencil, bc, current, &coord);
        *value_mut = (stencil.apply(&args) - scaled_source.view(&coord)) / six;
    }
}

/// Solve from a zero initial field.
pub fn solve<F: FloatTrait>(
    config: &SolverConfig<F>,
    source: &Field<F>,
) -> SolverResult<Field<F>> {
    config.validate()?;
    let initial = Field::zeroed(config.n)?;
    solve_from(config, source, initial)
}

/// Solve from `initial`, ignoring the threading parameters of `config`.
pub fn solve_from<F: FloatTrait>(
    config: &SolverConfig<F>,
    source: &Field<F>,
    initial: Field<F>,
) -> SolverResult<Field<F>> {
    profiling::scope!("reference: solve");
    config.validate()?;
    for (what, field) in [("source", source), ("initial field", &initial)] {
        if field.n() != config.n {
            return Err(SolverError::FieldSizeMismatch {
                what,
                expected: config.cells(),
                actual: field.len(),
            });
        }
    }

    let stencil = standard_stencils::poisson_3d::<F>();
    let scaled_source =
        source.scaled(config.delta * config.delta, "scaled source")?;
    let next = Field::zeroed(config.n)?;
    let mut fields = FieldPair::new(initial, next);
    for _ in 0..config.iterations {
        let (current, next) = fields.split_mut();
        match config.boundary {
            BoundaryCondition::Reflective => {
                let bc = ReflectiveCheck::new(current);
                step(&bc, &stencil, current, &scaled_source, next);
            }
            BoundaryCondition::Fixed(value) => {
                let bc = FixedCheck::new(value, config.n);
                step(&bc, &stencil, current, &scaled_source, next);
            }
        }
        fields.swap();
    }
    Ok(fields.into_current())
}
