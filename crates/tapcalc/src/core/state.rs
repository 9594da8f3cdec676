//! Calculator state and its transitions
//!
//! Every transition consumes the current state and returns the next one.
//! Operators chain strictly left to right: `2 + 3 × 4 =` shows `20`.

use serde::{Deserialize, Serialize};

use crate::core::number::{format_number, is_typed_literal, parse_number};
use crate::core::{CalcError, Digit, InputEvent, Operator};

/// Left-hand operand captured with the operator that will consume it
#[derive(Debug, Clone, Copy, PartialEq)]
struct Pending {
    operand: f64,
    operator: Operator,
}

/// The whole calculator state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "StateSnapshot", into = "StateSnapshot")]
pub struct CalculatorState {
    display: String,
    pending: Option<Pending>,
    awaiting_fresh_input: bool,
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorState {
    /// Creates the initial state: display `"0"`, nothing pending
    #[must_use]
    pub fn new() -> Self {
        Self {
            display: "0".to_string(),
            pending: None,
            awaiting_fresh_input: false,
        }
    }

    /// Current display text
    #[must_use]
    pub fn display(&self) -> &str {
        &self.display
    }

    /// Left-hand operand waiting for the next operand
    #[must_use]
    pub fn pending_operand(&self) -> Option<f64> {
        self.pending.map(|p| p.operand)
    }

    /// Operator waiting to be applied
    #[must_use]
    pub fn pending_operator(&self) -> Option<Operator> {
        self.pending.map(|p| p.operator)
    }

    /// Whether the next digit starts a new number
    #[must_use]
    pub fn awaiting_fresh_input(&self) -> bool {
        self.awaiting_fresh_input
    }

    /// Numeric value of the display
    #[must_use]
    pub fn value(&self) -> f64 {
        // Construction and deserialization both keep the display parseable.
        parse_number(&self.display).unwrap_or(f64::NAN)
    }

    /// Digit press
    #[must_use]
    pub fn digit(mut self, digit: Digit) -> Self {
        if self.awaiting_fresh_input {
            self.display = digit.to_string();
            self.awaiting_fresh_input = false;
        } else if self.display == "0" {
            self.display = digit.to_string();
        } else {
            self.display.push(digit.as_char());
        }
        self
    }

    /// Decimal point press; a second point in the same number is ignored
    #[must_use]
    pub fn decimal_point(mut self) -> Self {
        if self.awaiting_fresh_input {
            self.display = "0.".to_string();
            self.awaiting_fresh_input = false;
        } else if !self.display.contains('.') {
            self.display.push('.');
        }
        self
    }

    /// Operator press
    ///
    /// With an operator already pending, the pending operation is applied
    /// first and its result shown before the next operand is typed.
    #[must_use]
    pub fn operator(mut self, op: Operator) -> Self {
        let x = self.value();
        let operand = match self.pending {
            None => x,
            Some(Pending { operand, operator }) => {
                let result = operator.apply(operand, x);
                self.display = format_number(result);
                result
            }
        };
        self.pending = Some(Pending {
            operand,
            operator: op,
        });
        self.awaiting_fresh_input = true;
        self
    }

    /// Equals press; a no-op when no operator is pending
    #[must_use]
    pub fn equals(mut self) -> Self {
        if let Some(Pending { operand, operator }) = self.pending.take() {
            let result = operator.apply(operand, self.value());
            self.display = format_number(result);
            self.awaiting_fresh_input = true;
        }
        self
    }

    /// AC press
    #[must_use]
    pub fn clear(self) -> Self {
        Self::new()
    }

    /// Dispatches an event to its transition
    #[must_use]
    pub fn apply(self, event: InputEvent) -> Self {
        match event {
            InputEvent::Digit(d) => self.digit(d),
            InputEvent::DecimalPoint => self.decimal_point(),
            InputEvent::Operator(op) => self.operator(op),
            InputEvent::Equals => self.equals(),
            InputEvent::Clear => self.clear(),
        }
    }
}

/// Flat serialized form of [`CalculatorState`]
#[derive(Debug, Clone, Serialize, Deserialize)]
struct StateSnapshot {
    display: String,
    #[serde(default)]
    pending_operand: Option<f64>,
    #[serde(default)]
    pending_operator: Option<Operator>,
    #[serde(default)]
    awaiting_fresh_input: bool,
}

impl From<CalculatorState> for StateSnapshot {
    fn from(state: CalculatorState) -> Self {
        Self {
            pending_operand: state.pending_operand(),
            pending_operator: state.pending_operator(),
            display: state.display,
            awaiting_fresh_input: state.awaiting_fresh_input,
        }
    }
}

impl TryFrom<StateSnapshot> for CalculatorState {
    type Error = CalcError;

    fn try_from(snapshot: StateSnapshot) -> Result<Self, Self::Error> {
        parse_number(&snapshot.display)?;
        // Digits and points are only appended to a number still being typed
        if !snapshot.awaiting_fresh_input && !is_typed_literal(&snapshot.display) {
            return Err(CalcError::InvalidNumber(format!(
                "{} cannot be extended by typing",
                snapshot.display
            )));
        }

        let pending = match (snapshot.pending_operand, snapshot.pending_operator) {
            (Some(operand), Some(operator)) => Some(Pending { operand, operator }),
            (None, None) => None,
            _ => {
                return Err(CalcError::InvalidNumber(
                    "pending operand and operator must be set together".to_string(),
                ))
            }
        };

        Ok(Self {
            display: snapshot.display,
            pending,
            awaiting_fresh_input: snapshot.awaiting_fresh_input,
        })
    }
}
