//! Command-line application: argument parsing, configuration and output

pub mod cli;
pub mod startup;
