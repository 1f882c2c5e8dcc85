//! Source fields for the binary and tests.

mod generate_source;
pub mod impulse;
pub mod rand;
use clap::ValueEnum;
pub use generate_source::*;

#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub enum SourceType {
    #[default]
    Zero,

    /// One cell at `(n/2, n/2, n/2)`.
    Impulse { magnitude: f64 },

    /// Smooth bump centred in the grid, peak 1.
    Normal { variance: f64 },

    /// Uniform in `[-max_val, max_val]`, reproducible from `seed`.
    Rand { max_val: f64, seed: u64 },
}

#[derive(Copy, Clone, Debug, ValueEnum, Default)]
pub enum ClapSourceType {
    Zero,
    #[default]
    Impulse,
    Normal,
    Rand,
}

impl ClapSourceType {
    pub fn to_source_type(&self, dial: f64, seed: u64) -> SourceType {
        match self {
            ClapSourceType::Zero => SourceType::Zero,
            ClapSourceType::Impulse => SourceType::Impulse { magnitude: dial },
            ClapSourceType::Normal => SourceType::Normal { variance: dial },
            ClapSourceType::Rand => SourceType::Rand {
                max_val: dial,
                seed,
            },
        }
    }
}
