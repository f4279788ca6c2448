//! Command-line interface for running the graph generators.
//!
//! `complexnets generate <model>` builds one graph with the chosen model and
//! prints its size, component count and edge list.

mod commands;

pub use commands::{
    BarabasiAlbertArgs, Cli, CliError, Command, DegreeSequenceArgs, ErdosRenyiArgs,
    GenerateCommand, GraphSummary, HotExtendedArgs, Model, render_summary, run_cli,
};
