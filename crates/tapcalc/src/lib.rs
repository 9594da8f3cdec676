//! tapcalc - tap-driven calculator engine
//!
//! A four-function calculator modeled as a pure state machine. Digit,
//! decimal point, operator, equals and clear events each map the previous
//! [`CalculatorState`](core::CalculatorState) to the next one. Operators
//! chain strictly left to right, with no precedence.
//!
//! # Example
//!
//! ```rust
//! use tapcalc::prelude::*;
//!
//! let mut session = CalculatorSession::default();
//! assert_eq!(session.enter("2 + 3 × 4 =").unwrap(), "20");
//!
//! // Division by zero passes through as text
//! session.reset();
//! assert_eq!(session.enter("1 ÷ 0 =").unwrap(), "Infinity");
//! ```

#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod config;
pub mod core;
pub mod keypad;
pub mod session;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::config::EngineConfig;
    pub use crate::core::{
        format_number, parse_number, CalcError, CalcResult, Calculator, CalculatorState, Digit,
        InputEvent, Operator,
    };
    pub use crate::keypad::{parse_sequence, Keypad, KeypadButton};
    pub use crate::session::CalculatorSession;
}
