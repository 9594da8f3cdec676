//! Configured engine
//!
//! Applies [`EngineConfig`] limits on top of the pure transitions in
//! [`CalculatorState`].

use crate::config::EngineConfig;
use crate::core::number::digit_count;
use crate::core::{CalcResult, CalculatorState, InputEvent};

/// Calculator engine with its configuration
#[derive(Debug, Clone, Default)]
pub struct Calculator {
    config: EngineConfig,
}

impl Calculator {
    /// Creates an engine with the default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an engine with a custom configuration
    ///
    /// Fails with [`CalcError::Config`](crate::core::CalcError::Config) when
    /// the configuration does not validate.
    pub fn with_config(config: EngineConfig) -> CalcResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Returns the active configuration
    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Computes the state that follows `event`
    #[must_use]
    pub fn step(&self, state: CalculatorState, event: InputEvent) -> CalculatorState {
        if let InputEvent::Digit(_) = event {
            if self.digit_limit_reached(&state) {
                return state;
            }
        }
        state.apply(event)
    }

    /// Runs a sequence of events from the initial state
    #[must_use]
    pub fn run<I>(&self, events: I) -> CalculatorState
    where
        I: IntoIterator<Item = InputEvent>,
    {
        events
            .into_iter()
            .fold(CalculatorState::new(), |state, event| self.step(state, event))
    }

    fn digit_limit_reached(&self, state: &CalculatorState) -> bool {
        let Some(max) = self.config.max_input_digits else {
            return false;
        };
        // A fresh number always fits, and a lone "0" is replaced, not extended
        if state.awaiting_fresh_input() || state.display() == "0" {
            return false;
        }
        digit_count(state.display()) >= max
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{CalcError, Operator};

    fn digits(text: &str) -> Vec<InputEvent> {
        text.chars()
            .map(|c| InputEvent::digit(c.to_digit(10).unwrap() as u8).unwrap())
            .collect()
    }

    #[test]
    fn test_unbounded_by_default() {
        let calc = Calculator::new();
        let state = calc.run(digits("12345678901234567890"));
        assert_eq!(state.display(), "12345678901234567890");
    }

    #[test]
    fn test_cap_keeps_first_digits() {
        let calc =
            Calculator::with_config(EngineConfig::new().with_max_input_digits(Some(3))).unwrap();
        let state = calc.run(digits("98765"));
        assert_eq!(state.display(), "987");
    }

    #[test]
    fn test_cap_ignores_decimal_point_in_count() {
        let calc =
            Calculator::with_config(EngineConfig::new().with_max_input_digits(Some(3))).unwrap();
        let mut events = digits("1");
        events.push(InputEvent::DecimalPoint);
        events.extend(digits("2345"));
        let state = calc.run(events);
        assert_eq!(state.display(), "1.23");
    }

    #[test]
    fn test_cap_skips_zero_before_leading_point() {
        let calc =
            Calculator::with_config(EngineConfig::new().with_max_input_digits(Some(1))).unwrap();
        let mut events = vec![InputEvent::DecimalPoint];
        events.extend(digits("56"));
        let state = calc.run(events);
        assert_eq!(state.display(), "0.5");
    }

    #[test]
    fn test_cap_resets_for_fresh_number() {
        let calc =
            Calculator::with_config(EngineConfig::new().with_max_input_digits(Some(2))).unwrap();
        let mut events = digits("999");
        events.push(InputEvent::Operator(Operator::Add));
        events.extend(digits("111"));
        events.push(InputEvent::Equals);
        let state = calc.run(events);
        assert_eq!(state.display(), "110");
    }

    #[test]
    fn test_cap_of_one_replaces_leading_zero() {
        let calc =
            Calculator::with_config(EngineConfig::new().with_max_input_digits(Some(1))).unwrap();
        let state = calc.run(digits("05"));
        assert_eq!(state.display(), "5");
    }

    #[test]
    fn test_cap_does_not_block_other_events() {
        let calc =
            Calculator::with_config(EngineConfig::new().with_max_input_digits(Some(1))).unwrap();
        let state = calc.step(calc.run(digits("4")), InputEvent::Operator(Operator::Multiply));
        assert_eq!(state.pending_operand(), Some(4.0));
    }

    #[test]
    fn test_with_config_rejects_zero_cap() {
        let err = Calculator::with_config(EngineConfig::new().with_max_input_digits(Some(0)))
            .unwrap_err();
        assert!(matches!(err, CalcError::Config(_)));
    }

    #[test]
    fn test_config_accessor() {
        let config = EngineConfig::new().with_max_input_digits(Some(9));
        let calc = Calculator::with_config(config.clone()).unwrap();
        assert_eq!(calc.config(), &config);
    }
}
