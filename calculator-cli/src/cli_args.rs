use calculator_core::{Calculator, ReadLimits};
use clap::Parser;

/// Prompts for two integers on standard input and prints their sum.
///
/// Exits with 1 on invalid input, 2 on I/O failure and 3 on overflow.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct CliArgs {}

impl CliArgs {
    pub fn create_calculator(&self) -> Calculator {
        Calculator::new(ReadLimits::default())
    }
}

#[cfg(test)]
mod tests {
    use calculator_core::CalculatorState;
    use clap::{CommandFactory, Parser};

    use super::CliArgs;

    #[test]
    fn command_definition_is_valid() {
        CliArgs::command().debug_assert();
    }

    #[test]
    fn positional_arguments_are_rejected() {
        assert!(CliArgs::try_parse_from(["calculator", "5"]).is_err());
        assert!(CliArgs::try_parse_from(["calculator"]).is_ok());
    }

    #[test]
    fn calculators_start_out_awaiting_the_first_number() {
        let args = CliArgs::try_parse_from(["calculator"]).unwrap();
        assert_eq!(
            args.create_calculator().get_state(),
            CalculatorState::AwaitingFirst
        );
    }
}
