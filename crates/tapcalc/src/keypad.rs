//! Calculator keypad
//!
//! Labelled buttons, their grid positions and element ids, plus the
//! keyboard and typed-sequence mappings onto [`InputEvent`]s.

use serde::{Deserialize, Serialize};

use crate::core::{CalcError, CalcResult, Digit, InputEvent, Operator};

/// A single keypad button definition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeypadButton {
    /// The event this button produces
    pub event: InputEvent,
    /// Label printed on the button
    pub label: String,
    /// Stable element id (`btn-7`, `btn-plus`, ...)
    pub id: String,
    /// Grid row (0-indexed)
    pub row: usize,
    /// Grid column (0-indexed)
    pub col: usize,
}

impl KeypadButton {
    /// Creates a button for `event` at the given grid position
    #[must_use]
    pub fn new(event: InputEvent, row: usize, col: usize) -> Self {
        let id = match event {
            InputEvent::Digit(d) => format!("btn-{d}"),
            InputEvent::DecimalPoint => "btn-decimal".to_string(),
            InputEvent::Operator(op) => format!("btn-{}", op.name()),
            InputEvent::Equals => "btn-equals".to_string(),
            InputEvent::Clear => "btn-clear".to_string(),
        };
        Self {
            label: event.label(),
            event,
            id,
            row,
            col,
        }
    }
}

/// Keypad layout
///
/// ```text
/// [AC ]
/// [ 7 ] [ 8 ] [ 9 ] [ ÷ ]
/// [ 4 ] [ 5 ] [ 6 ] [ × ]
/// [ 1 ] [ 2 ] [ 3 ] [ − ]
/// [ 0 ] [ . ] [ = ] [ + ]
/// ```
#[derive(Debug, Clone)]
pub struct Keypad {
    buttons: Vec<KeypadButton>,
    rows: usize,
    cols: usize,
}

impl Default for Keypad {
    fn default() -> Self {
        Self::new()
    }
}

impl Keypad {
    /// Creates the standard keypad
    #[must_use]
    pub fn new() -> Self {
        let mut buttons = vec![KeypadButton::new(InputEvent::Clear, 0, 0)];

        let digit_rows: [[u8; 3]; 3] = [[7, 8, 9], [4, 5, 6], [1, 2, 3]];
        for (row, (digits, op)) in digit_rows.iter().zip(Operator::ALL).enumerate() {
            for (col, &n) in digits.iter().enumerate() {
                buttons.push(KeypadButton::new(InputEvent::Digit(digit(n)), row + 1, col));
            }
            buttons.push(KeypadButton::new(InputEvent::Operator(op), row + 1, 3));
        }

        buttons.extend([
            KeypadButton::new(InputEvent::Digit(digit(0)), 4, 0),
            KeypadButton::new(InputEvent::DecimalPoint, 4, 1),
            KeypadButton::new(InputEvent::Equals, 4, 2),
            KeypadButton::new(InputEvent::Operator(Operator::Add), 4, 3),
        ]);

        Self {
            buttons,
            rows: 5,
            cols: 4,
        }
    }

    /// Returns the number of buttons
    #[must_use]
    pub fn button_count(&self) -> usize {
        self.buttons.len()
    }

    /// Returns the grid dimensions (rows, cols)
    #[must_use]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Gets all button definitions, row by row
    #[must_use]
    pub fn buttons(&self) -> &[KeypadButton] {
        &self.buttons
    }

    /// Gets a button by index
    #[must_use]
    pub fn get_button(&self, index: usize) -> Option<&KeypadButton> {
        self.buttons.get(index)
    }

    /// Gets a button by row and column
    #[must_use]
    pub fn get_button_at(&self, row: usize, col: usize) -> Option<&KeypadButton> {
        self.buttons.iter().find(|b| b.row == row && b.col == col)
    }

    /// Finds a button by element id
    #[must_use]
    pub fn find_button_by_id(&self, id: &str) -> Option<&KeypadButton> {
        self.buttons.iter().find(|b| b.id == id)
    }

    /// Finds a button by its label
    #[must_use]
    pub fn find_button_by_label(&self, label: &str) -> Option<&KeypadButton> {
        self.buttons.iter().find(|b| b.label == label)
    }

    /// Resolves a tap on an element id
    pub fn handle_tap(&self, element_id: &str) -> CalcResult<InputEvent> {
        self.find_button_by_id(element_id)
            .map(|btn| btn.event)
            .ok_or_else(|| CalcError::UnknownButton(element_id.to_string()))
    }

    /// Maps a keyboard key to an event
    #[must_use]
    pub fn key_to_event(key: &str) -> Option<InputEvent> {
        match key {
            "." | "," => Some(InputEvent::DecimalPoint),
            "=" | "Enter" => Some(InputEvent::Equals),
            "Escape" | "AC" | "c" | "C" => Some(InputEvent::Clear),
            _ => {
                let mut chars = key.chars();
                let c = chars.next()?;
                if chars.next().is_some() {
                    return None;
                }
                Digit::from_char(c)
                    .map(InputEvent::Digit)
                    .or_else(|| Operator::from_char(c).map(InputEvent::Operator))
            }
        }
    }

    /// Renders the grid as plain text, one line per row
    #[must_use]
    pub fn render_grid(&self) -> String {
        (0..self.rows)
            .map(|row| {
                self.buttons
                    .iter()
                    .filter(|b| b.row == row)
                    .map(|b| format!("[{:^3}]", b.label))
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Tokenizes a typed key sequence such as `"2 + 3 × 4 ="`.
///
/// Whitespace separates nothing and is skipped; `AC` is the only
/// two-character key. Offsets in errors count characters, not bytes.
pub fn parse_sequence(text: &str) -> CalcResult<Vec<InputEvent>> {
    let mut events = Vec::new();
    let mut chars = text.chars().enumerate().peekable();

    while let Some((offset, c)) = chars.next() {
        if c.is_whitespace() {
            continue;
        }
        if c == 'A' && chars.next_if(|&(_, next)| next == 'C').is_some() {
            events.push(InputEvent::Clear);
            continue;
        }
        let event = Keypad::key_to_event(c.encode_utf8(&mut [0; 4])).ok_or_else(|| {
            CalcError::UnknownKey {
                key: c.to_string(),
                offset,
            }
        })?;
        events.push(event);
    }

    Ok(events)
}

fn digit(n: u8) -> Digit {
    // Layout literals are all 0-9.
    Digit::new(n).unwrap_or_default()
}
