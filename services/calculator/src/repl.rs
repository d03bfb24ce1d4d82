use std::io::{BufRead, Write};

use log::debug;

use postfix::{evaluate, parse};
use telemetry::{IsErr, Measure};

use crate::config::Config;
use crate::error::CalculatorError;

// serde serialization recurses once per level
const MAX_AST_DEPTH: usize = 1024;

lazy_static! {
    static ref PARSE_MEASURE: Measure = Measure::new("repl", "parse");
    static ref EVALUATE_MEASURE: Measure = Measure::new("repl", "evaluate");
}

/// Prompts for postfix expressions and prints their values until the user
/// declines to continue or input runs out
pub struct Repl<'a, R, W> {
    input: R,
    output: W,
    config: &'a Config,
}

impl<'a, R: BufRead, W: Write> Repl<'a, R, W> {
    pub fn new(input: R, output: W, config: &'a Config) -> Self {
        Repl {
            input,
            output,
            config,
        }
    }

    pub fn run(&mut self) -> Result<(), CalculatorError> {
        loop {
            let expr = match self.prompt("Enter a postfix expression with $ at the end: ")? {
                Some(line) => line,
                None => break,
            };

            self.expression(&expr)?;

            match self.prompt("Continue(Y/n)? ")? {
                Some(answer) if answer.trim() != "n" => {}
                _ => break,
            }
        }
        Ok(())
    }

    fn prompt(&mut self, message: &str) -> Result<Option<String>, CalculatorError> {
        write!(self.output, "{}", message)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        let len = line.trim_end_matches(&['\r', '\n'][..]).len();
        line.truncate(len);
        Ok(Some(line))
    }

    fn expression(&mut self, text: &str) -> Result<(), CalculatorError> {
        match self.compute(text) {
            Ok(value) => writeln!(self.output, "\tValue = {}", value)?,
            Err(e) if !e.is_err() => writeln!(self.output, "\tError: {}", e)?,
            Err(e) => return Err(e),
        }
        Ok(())
    }

    fn compute(&mut self, text: &str) -> Result<i64, CalculatorError> {
        let tree = PARSE_MEASURE.stats(|| parse(text).map_err(CalculatorError::from))?;
        debug!("parsed {:?} as {} ({} operands)", text, tree, tree.leaf_count());

        if self.config.show_ast {
            let depth = tree.depth();
            if depth > MAX_AST_DEPTH {
                writeln!(self.output, "\tAST = <{} levels deep, not shown>", depth)?;
            } else {
                writeln!(self.output, "\tAST = {}", serde_json::to_string(&tree)?)?;
            }
        }

        let bindings = &self.config.bindings;
        let value =
            EVALUATE_MEASURE.stats(|| evaluate(&tree, bindings).map_err(CalculatorError::from))?;
        debug!("{} = {}", tree, value);
        Ok(value)
    }
}
