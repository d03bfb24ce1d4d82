use derive_more::Display;

use postfix::{EvalError, ParseError};
use telemetry::IsErr;

#[derive(Debug, Display)]
pub enum CalculatorError {
    #[display(fmt = "parse: {}", _0)]
    Parse(ParseError),

    #[display(fmt = "evaluate: {}", _0)]
    Eval(EvalError),

    #[display(fmt = "Config Error: {}", _0)]
    ConfigError(String),

    #[display(fmt = "IO Error: {}", _0)]
    IOError(String),

    #[display(fmt = "Serialization Error: {}", _0)]
    SerializeError(String),

    #[display(fmt = "Internal Error: {}", _0)]
    InternalError(String),
}

impl std::error::Error for CalculatorError {}

impl From<ParseError> for CalculatorError {
    fn from(e: ParseError) -> Self {
        Self::Parse(e)
    }
}

impl From<EvalError> for CalculatorError {
    fn from(e: EvalError) -> Self {
        Self::Eval(e)
    }
}

impl From<figment::Error> for CalculatorError {
    fn from(e: figment::Error) -> Self {
        Self::ConfigError(e.to_string())
    }
}

impl From<std::io::Error> for CalculatorError {
    fn from(e: std::io::Error) -> Self {
        Self::IOError(e.to_string())
    }
}

impl From<serde_json::Error> for CalculatorError {
    fn from(e: serde_json::Error) -> Self {
        Self::SerializeError(e.to_string())
    }
}

// Bad input is reported to the user, not counted as a failure
impl IsErr for CalculatorError {
    fn is_err(&self) -> bool {
        !matches!(self, CalculatorError::Parse(_) | CalculatorError::Eval(_))
    }
}
