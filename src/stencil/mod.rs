#![allow(clippy::module_inception)]
mod stencil;

mod kernel;

pub mod standard_stencils;

pub use kernel::*;
pub use stencil::*;
