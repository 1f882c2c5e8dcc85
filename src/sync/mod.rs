//! Synchronization primitives for the worker handshake.

mod semaphore;

pub use semaphore::*;
