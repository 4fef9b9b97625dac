//! Command-line interface for the Boruvka contraction engine.
//!
//! The `run` command loads a graph from a DIMACS shortest-path file or a plain
//! edge list, contracts it into its minimum spanning forest and reports the
//! result in human-readable or JSON form.

mod commands;

pub use commands::{
    Cli, CliError, Command, ExecutionSummary, OutputFormat, RunCommand, RunSource, SourceArgs,
    render_summary, run_cli,
};
