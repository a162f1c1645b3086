//! Command-line interface orchestration for the kruskal binary.
//!
//! `solve` reads an edge list in text or JSON form and prints its minimum
//! spanning forest; `generate` prints a seeded random complete graph in the
//! text form that `solve` accepts.

mod commands;

pub use commands::{
    Cli, CliError, Command, ExecutionSummary, GenerateCommand, GeneratedGraph, InputFormat,
    SolveCommand, WeightKind, render_summary, run_cli,
};
