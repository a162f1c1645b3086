//! Support library for the kruskal CLI binary.
//!
//! Exposes the command pipeline and logging set-up so doctests and unit tests
//! can drive them without forking a subprocess.

pub mod cli;
pub mod logging;
