use calculator_core::{CalculatorError, InputError, TracedCalculatorError};
use colored::*;
use tracing::debug;

use crate::cli_args::CliArgs;
use crate::stdio_console::StdioConsole;

pub struct StdioCalculator {
    args: CliArgs,
}

impl StdioCalculator {
    pub fn new(args: CliArgs) -> Self {
        StdioCalculator { args }
    }

    fn show_error(console: &mut StdioConsole, err: &TracedCalculatorError) {
        console.printer().eprintln(err.to_string().red().to_string());
    }

    /// Runs one calculation against the standard streams, returning the
    /// process exit code.
    pub fn run(&mut self) -> i32 {
        let mut console = match StdioConsole::new() {
            Ok(console) => console,
            Err(err) => {
                let err = CalculatorError::from(InputError::Read(err));
                eprintln!("Initializing line editor failed!");
                eprintln!("{}", err.to_string().red());
                return err.exit_code();
            }
        };

        let calculator = self.args.create_calculator();
        match calculator.run(&mut console) {
            Ok(result) => {
                debug!(a = result.a, b = result.b, sum = result.sum, "calculation finished");
                0
            }
            Err(err) => {
                StdioCalculator::show_error(&mut console, &err);
                err.exit_code()
            }
        }
    }
}
