use std::fmt;

use colored::Colorize;
use rustyline::error::ReadlineError;
use rustyline::Editor;

use roman_calc::calculate;

use crate::display::{ColoredAnswer, ColoredError};

#[derive(Debug)]
pub enum REPLError {
    ReadlineError(String),
    CalculationError(String),
}

impl std::error::Error for REPLError {}

impl fmt::Display for REPLError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            REPLError::ReadlineError(s) => write!(f, "{}", s),
            REPLError::CalculationError(s) => write!(f, "{} {}", "Error:".red(), s),
        }
    }
}

fn to_readline_error(e: ReadlineError) -> REPLError {
    match e {
        ReadlineError::Interrupted => REPLError::ReadlineError("CTRL-C".to_string()),
        ReadlineError::Eof => REPLError::ReadlineError("CTRL-D".to_string()),
        err => REPLError::ReadlineError(format!("Error: {:?}", err)),
    }
}

pub fn read(rl: &mut Editor<()>) -> Result<String, REPLError> {
    let prompt = format!("{} ", ">".bright_blue().bold());
    let input = rl.readline(&prompt).map_err(to_readline_error)?;

    Ok(input)
}

pub fn evaluate(input: &str) -> Result<ColoredAnswer, REPLError> {
    calculate(input)
        .map(ColoredAnswer::new)
        .map_err(|e| {
            log::info!("rejected `{input}`: {e:?}");
            ColoredError::new(e)
        })
        .map_err(|e| REPLError::CalculationError(e.to_string()))
}

pub fn print_result(result: &ColoredAnswer) {
    println!("{} {}", "Result:".bold(), result);
}
