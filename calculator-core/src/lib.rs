mod adder;
mod calculator;
mod calculator_error;
mod console;
mod entry_cruncher;
mod input_reader;
mod number_parser;
mod output_formatter;

pub use adder::add;
pub use calculator::{CalculationResult, Calculator, CalculatorState};
pub use calculator_error::{
    CalculatorError, InputError, OverflowError, TracedCalculatorError, ValidationError,
};
pub use console::Console;
pub use input_reader::{InputReader, NumberToken, PendingEntry, RawInputChunk, ReadLimits};
pub use number_parser::parse_number;
pub use output_formatter::{format_integer, render_result_line};
