//! Calculator session
//!
//! The host side of the engine: owns the single mutable slot holding the
//! current [`CalculatorState`] and resolves taps, keys and typed sequences
//! through the [`Keypad`].

use crate::config::EngineConfig;
use crate::core::{CalcError, CalcResult, Calculator, CalculatorState, InputEvent};
use crate::keypad::{parse_sequence, Keypad};

/// Interactive calculator session
#[derive(Debug, Default)]
pub struct CalculatorSession {
    calculator: Calculator,
    keypad: Keypad,
    state: CalculatorState,
}

impl CalculatorSession {
    /// Creates a session with the given engine configuration
    pub fn new(config: EngineConfig) -> CalcResult<Self> {
        Ok(Self {
            calculator: Calculator::with_config(config)?,
            keypad: Keypad::new(),
            state: CalculatorState::new(),
        })
    }

    /// Returns the current state
    #[must_use]
    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    /// Returns the current display text
    #[must_use]
    pub fn display(&self) -> &str {
        self.state.display()
    }

    /// Returns the keypad this session resolves taps against
    #[must_use]
    pub fn keypad(&self) -> &Keypad {
        &self.keypad
    }

    /// Applies one event and returns the new display
    pub fn dispatch(&mut self, event: InputEvent) -> &str {
        let state = std::mem::take(&mut self.state);
        self.state = self.calculator.step(state, event);

        tracing::debug!(
            event = %event,
            display = self.state.display(),
            pending = ?self.state.pending_operator(),
            "dispatched"
        );
        if !self.state.value().is_finite() {
            tracing::warn!(display = self.state.display(), "non-finite result");
        }

        self.state.display()
    }

    /// Applies a tap on a keypad element id
    pub fn tap(&mut self, button_id: &str) -> CalcResult<&str> {
        let event = self.keypad.handle_tap(button_id)?;
        Ok(self.dispatch(event))
    }

    /// Applies a single keyboard key
    pub fn press_key(&mut self, key: &str) -> CalcResult<&str> {
        let event = Keypad::key_to_event(key).ok_or_else(|| CalcError::UnknownKey {
            key: key.to_string(),
            offset: 0,
        })?;
        Ok(self.dispatch(event))
    }

    /// Applies a typed key sequence
    ///
    /// The whole sequence is tokenized before anything is applied, so a bad
    /// key leaves the state untouched.
    pub fn enter(&mut self, sequence: &str) -> CalcResult<&str> {
        let events = parse_sequence(sequence)?;
        for event in events {
            self.dispatch(event);
        }
        Ok(self.display())
    }

    /// AC: back to the initial state
    pub fn reset(&mut self) {
        self.dispatch(InputEvent::Clear);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_new() {
        let session = CalculatorSession::new(EngineConfig::default()).unwrap();
        assert_eq!(session.display(), "0");
        assert_eq!(session.state(), &CalculatorState::new());
        assert_eq!(session.keypad().button_count(), 17);
    }

    #[test]
    fn test_dispatch_returns_display() {
        let mut session = CalculatorSession::default();
        assert_eq!(session.dispatch(InputEvent::digit(4).unwrap()), "4");
        assert_eq!(session.dispatch(InputEvent::digit(2).unwrap()), "42");
    }

    #[test]
    fn test_tap_sequence() {
        let mut session = CalculatorSession::default();
        for id in ["btn-2", "btn-plus", "btn-3", "btn-times", "btn-4", "btn-equals"] {
            session.tap(id).unwrap();
        }
        assert_eq!(session.display(), "20");
    }

    #[test]
    fn test_tap_unknown_button_keeps_state() {
        let mut session = CalculatorSession::default();
        session.tap("btn-9").unwrap();
        assert!(session.tap("btn-sqrt").is_err());
        assert_eq!(session.display(), "9");
    }

    #[test]
    fn test_press_key() {
        let mut session = CalculatorSession::default();
        session.press_key("1").unwrap();
        session.press_key("/").unwrap();
        session.press_key("0").unwrap();
        assert_eq!(session.press_key("Enter").unwrap(), "Infinity");
    }

    #[test]
    fn test_press_unknown_key() {
        let mut session = CalculatorSession::default();
        let err = session.press_key("Tab").unwrap_err();
        assert!(matches!(err, CalcError::UnknownKey { .. }));
    }

    #[test]
    fn test_enter_sequence() {
        let mut session = CalculatorSession::default();
        assert_eq!(session.enter("2 + 3 × 4 =").unwrap(), "20");
    }

    #[test]
    fn test_enter_accumulates_across_calls() {
        let mut session = CalculatorSession::default();
        session.enter("12 +").unwrap();
        assert_eq!(session.enter("8 =").unwrap(), "20");
    }

    #[test]
    fn test_enter_bad_sequence_is_atomic() {
        let mut session = CalculatorSession::default();
        session.enter("5").unwrap();
        assert!(session.enter("+ 3 ? =").is_err());
        assert_eq!(session.display(), "5");
        assert_eq!(session.state().pending_operator(), None);
    }

    #[test]
    fn test_reset() {
        let mut session = CalculatorSession::default();
        session.enter("7 × 6").unwrap();
        session.reset();
        assert_eq!(session.state(), &CalculatorState::new());
    }

    #[test]
    fn test_session_applies_input_cap() {
        let mut session =
            CalculatorSession::new(EngineConfig::new().with_max_input_digits(Some(4))).unwrap();
        assert_eq!(session.enter("123456").unwrap(), "1234");
    }

    #[test]
    fn test_session_rejects_zero_cap() {
        let result = CalculatorSession::new(EngineConfig::new().with_max_input_digits(Some(0)));
        assert!(matches!(result, Err(CalcError::Config(_))));
    }
}
