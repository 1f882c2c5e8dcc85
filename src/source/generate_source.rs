use crate::error::*;
use crate::grid::*;
use crate::source::impulse::*;
use crate::source::rand::*;
use crate::source::*;
use crate::util::*;

pub fn generate_source<F: FloatTrait>(
    n: usize,
    source_type: SourceType,
) -> SolverResult<Field<F>> {
    let mut field = Field::try_constant(n, F::zero(), "source")?;
    match source_type {
        // Special case, fields are allocated zeroed
        SourceType::Zero => {}
        SourceType::Impulse { magnitude } => {
            unit_impulse(&mut field, F::from_literal(magnitude));
        }
        SourceType::Normal { variance } => {
            normal_source(&mut field, variance);
        }
        SourceType::Rand { max_val, seed } => {
            rand_source(&mut field, max_val, seed);
        }
    }
    Ok(field)
}
