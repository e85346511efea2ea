mod cli_args;
mod stdio_calculator;
mod stdio_console;
mod stdio_printer;

use std::io::{stderr, IsTerminal};

use clap::Parser;
use cli_args::CliArgs;
use stdio_calculator::StdioCalculator;
use tracing_subscriber::EnvFilter;

fn main() {
    // Logs go to stderr so they never interleave with the transcript.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(stderr)
        .with_ansi(stderr().is_terminal())
        .init();

    // Diagnostics are the only coloured output, and they go to stderr.
    colored::control::set_override(stderr().is_terminal());

    let args = CliArgs::parse();
    let mut calculator = StdioCalculator::new(args);
    let exit_code = calculator.run();
    std::process::exit(exit_code);
}
