//! Calculator engine core
//!
//! A pure state machine: every input event maps the previous
//! [`CalculatorState`] to the next one. No arithmetic errors are modeled,
//! non-finite results pass through to the display as text.

mod calculator;
pub mod event;
pub mod number;
mod operations;
pub mod state;

pub use calculator::Calculator;
pub use event::{Digit, InputEvent};
pub use number::{format_number, parse_number};
pub use operations::Operator;
pub use state::CalculatorState;

use thiserror::Error;

/// Result type for calculator input and configuration handling
pub type CalcResult<T> = Result<T, CalcError>;

/// Errors raised at the input and configuration boundary.
///
/// The arithmetic itself never fails; these only describe input that
/// cannot be turned into an [`InputEvent`] or a config that cannot be read.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    /// Digit value outside 0-9
    #[error("Invalid digit: {0} (expected 0-9)")]
    InvalidDigit(u8),

    /// Operator text that is not one of the four keypad operators
    #[error("Unknown operator: {0:?}")]
    UnknownOperator(String),

    /// Typed key that maps to no keypad event
    #[error("Unknown key {key:?} at offset {offset}")]
    UnknownKey {
        /// The offending key text
        key: String,
        /// Character offset in the typed sequence
        offset: usize,
    },

    /// Tap on an element id the keypad does not own
    #[error("Unknown button: {0:?}")]
    UnknownButton(String),

    /// Text that is not a display literal
    #[error("Invalid number: {0:?}")]
    InvalidNumber(String),

    /// Engine configuration could not be read
    #[error("Configuration error: {0}")]
    Config(String),
}
