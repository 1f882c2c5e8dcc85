pub mod build_info;
pub mod cli;
pub mod error;
pub mod grid;
pub mod partition;
pub mod slice;
pub mod solver;
pub mod source;
pub mod stencil;
pub mod sync;
pub mod util;
