use std::fmt::Display;

use tracing::debug;

use crate::{
    adder::add,
    calculator_error::{CalculatorError, InputError, OverflowError, TracedCalculatorError},
    console::Console,
    input_reader::{InputReader, PendingEntry, ReadLimits},
    number_parser::parse_number,
    output_formatter::render_result_line,
};

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum CalculatorState {
    AwaitingFirst,
    AwaitingSecond,
    Computing,
    Emitting,
    Done,
    Failed,
}

impl Display for CalculatorState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CalculatorState::AwaitingFirst => write!(f, "reading first number"),
            CalculatorState::AwaitingSecond => write!(f, "reading second number"),
            CalculatorState::Computing => write!(f, "adding"),
            CalculatorState::Emitting => write!(f, "printing result"),
            CalculatorState::Done => write!(f, "done"),
            CalculatorState::Failed => write!(f, "stopped after a failure"),
        }
    }
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub struct CalculationResult {
    pub a: i64,
    pub b: i64,
    pub sum: i64,
}

impl CalculationResult {
    pub fn compute(a: i64, b: i64) -> Result<Self, OverflowError> {
        Ok(CalculationResult {
            a,
            b,
            sum: add(a, b)?,
        })
    }

    pub fn result_line(&self) -> String {
        render_result_line(self.a, self.b, self.sum)
    }
}

#[derive(Debug)]
enum Stage {
    AwaitingFirst,
    AwaitingSecond {
        a: i64,
        pending: Option<PendingEntry>,
    },
    Computing {
        a: i64,
        b: i64,
    },
    Emitting(CalculationResult),
    Done(CalculationResult),
    Failed,
}

/// Reads two numbers from a console and prints their sum, one state at
/// a time.
pub struct Calculator {
    reader: InputReader,
    stage: Stage,
}

impl Default for Calculator {
    fn default() -> Self {
        Calculator::new(ReadLimits::default())
    }
}

impl Calculator {
    pub fn new(limits: ReadLimits) -> Self {
        Calculator {
            reader: InputReader::new(limits),
            stage: Stage::AwaitingFirst,
        }
    }

    pub fn get_state(&self) -> CalculatorState {
        match self.stage {
            Stage::AwaitingFirst => CalculatorState::AwaitingFirst,
            Stage::AwaitingSecond { .. } => CalculatorState::AwaitingSecond,
            Stage::Computing { .. } => CalculatorState::Computing,
            Stage::Emitting(_) => CalculatorState::Emitting,
            Stage::Done(_) => CalculatorState::Done,
            Stage::Failed => CalculatorState::Failed,
        }
    }

    /// Performs the work of the current state and moves to the next one.
    /// Once `Done`, further steps do nothing; once `Failed`, they report
    /// `CannotContinue`.
    pub fn step<C: Console + ?Sized>(
        &mut self,
        console: &mut C,
    ) -> Result<(), TracedCalculatorError> {
        let state = self.get_state();
        let stage = std::mem::replace(&mut self.stage, Stage::Failed);
        match self.advance(stage, console) {
            Ok(next) => {
                self.stage = next;
                debug!(from = %state, to = %self.get_state(), "calculator advanced");
                Ok(())
            }
            Err(err) => {
                debug!(%state, "calculation failed");
                Err(TracedCalculatorError::with_state(err, state))
            }
        }
    }

    fn advance<C: Console + ?Sized>(
        &self,
        stage: Stage,
        console: &mut C,
    ) -> Result<Stage, CalculatorError> {
        let next = match stage {
            Stage::AwaitingFirst => {
                let (token, pending) = self.reader.read_first_entry(console)?;
                Stage::AwaitingSecond {
                    a: parse_number(token)?,
                    pending,
                }
            }
            Stage::AwaitingSecond { a, pending } => {
                let token = self.reader.read_second_entry(console, pending)?;
                Stage::Computing {
                    a,
                    b: parse_number(token)?,
                }
            }
            Stage::Computing { a, b } => Stage::Emitting(CalculationResult::compute(a, b)?),
            Stage::Emitting(result) => {
                console
                    .print(&result.result_line())
                    .map_err(InputError::Write)?;
                Stage::Done(result)
            }
            done @ Stage::Done(_) => done,
            Stage::Failed => return Err(CalculatorError::CannotContinue),
        };
        Ok(next)
    }

    /// Steps until the result has been printed or something fails.
    pub fn run<C: Console + ?Sized>(
        mut self,
        console: &mut C,
    ) -> Result<CalculationResult, TracedCalculatorError> {
        loop {
            self.step(console)?;
            if let Stage::Done(result) = self.stage {
                return Ok(result);
            }
        }
    }
}
