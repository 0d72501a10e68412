//! Stateful input fields.
//!
//! A [`Field`] owns the current display state of one input, applies edits to
//! it and notifies listeners when the field's value changes. The host
//! widget forwards its events with [`Field::apply`] (offset-based edits) or
//! [`Field::press`] (keystrokes relative to the cursor) and copies
//! [`Field::state`] back into the widget.
//!
//! # Example
//!
//! ```
//! use std::sync::{Arc, Mutex};
//! use cc_input::field::CardNumberField;
//! use cc_input::CardBrand;
//!
//! let seen = Arc::new(Mutex::new(Vec::new()));
//! let mut field = CardNumberField::number();
//!
//! let sink = Arc::clone(&seen);
//! field.add_listener(move |card| sink.lock().unwrap().push(card.brand));
//!
//! field.set_text("3782822463");
//! assert_eq!(field.text(), "3782 822463");
//! assert_eq!(field.brand(), CardBrand::AmericanExpress);
//! assert_eq!(*seen.lock().unwrap(), vec![CardBrand::AmericanExpress]);
//! ```

use std::fmt;

use crate::card::CardBrand;
use crate::cursor::{apply_edit, FieldFormat};
use crate::digits::LogicalValue;
use crate::edit::{DisplayState, Edit, Keystroke};
use crate::expiry::DateFormat;
use crate::mask::mask_display;
use crate::notify::{ListenerId, Listeners};
use crate::number::NumberFormat;

/// An input field: format rules, current display state and listeners.
pub struct Field<F: FieldFormat> {
    format: F,
    state: DisplayState,
    digits: LogicalValue,
    value: F::Value,
    listeners: Listeners<F::Value>,
}

/// The card number field.
pub type CardNumberField = Field<NumberFormat>;

/// The expiry date field.
pub type CardDateField = Field<DateFormat>;

impl<F: FieldFormat> Field<F> {
    /// Creates an empty field with the given rules.
    pub fn new(format: F) -> Self {
        let digits = LogicalValue::empty();
        let value = format.value(&digits);
        Self {
            format,
            state: DisplayState::empty(),
            digits,
            value,
            listeners: Listeners::new(),
        }
    }

    /// Applies `edit` and returns the new display state.
    ///
    /// Listeners run before this returns, and only if the value differs
    /// from the value before the edit.
    pub fn apply(&mut self, edit: &Edit) -> &DisplayState {
        let outcome = apply_edit(&self.format, &self.state, edit);
        let changed = outcome.value != self.value;

        self.state = outcome.state;
        self.digits = outcome.digits;
        self.value = outcome.value;

        if changed {
            tracing::debug!(
                digits = self.digits.len(),
                listeners = self.listeners.len(),
                "field value changed"
            );
            self.listeners.notify(&self.value);
        }

        &self.state
    }

    /// Applies one keystroke at the current cursor.
    pub fn press(&mut self, key: &Keystroke) -> &DisplayState {
        let cursor = self.state.cursor();
        match key {
            Keystroke::Char(ch) => {
                self.apply(&Edit::insert(cursor, *ch));
            }
            Keystroke::Text(text) => {
                for ch in text.chars() {
                    let edit = Edit::insert(self.state.cursor(), ch);
                    self.apply(&edit);
                }
            }
            Keystroke::Backspace => {
                self.apply(&Edit::delete_backward(cursor));
            }
            Keystroke::Delete => {
                self.apply(&Edit::delete_forward(cursor));
            }
            Keystroke::Left => self.set_cursor(cursor.saturating_sub(1)),
            Keystroke::Right => self.set_cursor(cursor + 1),
            Keystroke::Home => self.set_cursor(0),
            Keystroke::End => self.set_cursor(self.state.len()),
            Keystroke::Paste(text) => {
                self.apply(&Edit::paste(cursor, text.as_str()));
            }
            Keystroke::SetText(text) => {
                self.apply(&Edit::replace_all(text.as_str()));
            }
            Keystroke::Cursor(offset) => self.set_cursor(*offset),
        }
        &self.state
    }

    /// Replaces the whole content, as a programmatic `setText` would.
    pub fn set_text(&mut self, text: &str) -> &DisplayState {
        self.apply(&Edit::replace_all(text))
    }

    /// Moves the cursor, clamped to the text.
    pub fn set_cursor(&mut self, offset: usize) {
        self.state = self.state.with_cursor(offset);
    }

    /// Returns the current display state.
    #[inline]
    pub fn state(&self) -> &DisplayState {
        &self.state
    }

    /// Returns the current display text.
    #[inline]
    pub fn text(&self) -> &str {
        self.state.text()
    }

    /// Returns the current cursor offset.
    #[inline]
    pub fn cursor(&self) -> usize {
        self.state.cursor()
    }

    /// Returns the current logical value.
    #[inline]
    pub fn digits(&self) -> &LogicalValue {
        &self.digits
    }

    /// Returns the value listeners last saw (or would see).
    #[inline]
    pub fn value(&self) -> &F::Value {
        &self.value
    }

    /// Returns the display text with all but the last four digits masked.
    pub fn masked_text(&self) -> String {
        mask_display(self.state.text())
    }

    /// Returns the field's rules.
    #[inline]
    pub fn format(&self) -> &F {
        &self.format
    }

    /// Registers a listener called with the new value after each change.
    pub fn add_listener<L>(&mut self, listener: L) -> ListenerId
    where
        L: FnMut(&F::Value) + Send + 'static,
    {
        self.listeners.add(listener)
    }

    /// Unregisters a listener. Returns false if it was not registered.
    pub fn remove_listener(&mut self, id: ListenerId) -> bool {
        self.listeners.remove(id)
    }
}

impl<F: FieldFormat + Default> Default for Field<F> {
    fn default() -> Self {
        Self::new(F::default())
    }
}

impl<F: FieldFormat + fmt::Debug> fmt::Debug for Field<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Field")
            .field("format", &self.format)
            .field("state", &self.state)
            .field("listeners", &self.listeners)
            .finish()
    }
}

impl Field<NumberFormat> {
    /// Creates an empty card number field.
    pub fn number() -> Self {
        Self::new(NumberFormat::new())
    }

    /// Returns the brand of the current number.
    #[inline]
    pub fn brand(&self) -> CardBrand {
        self.value.brand
    }
}

impl Field<DateFormat> {
    /// Creates an empty expiry date field.
    pub fn date() -> Self {
        Self::new(DateFormat::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expiry::CreditCardDate;
    use crate::number::CardNumber;
    use std::sync::{Arc, Mutex};

    fn recording<T: Clone + Send + 'static>() -> (Arc<Mutex<Vec<T>>>, impl FnMut(&T) + Send + 'static) {
        let log = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&log);
        (log, move |value: &T| sink.lock().unwrap().push(value.clone()))
    }

    #[test]
    fn test_keystrokes_type_and_move() {
        let mut field = CardNumberField::number();
        field.press(&Keystroke::Text("4242".into()));
        field.press(&Keystroke::Char('1'));
        assert_eq!(field.text(), "4242 1");
        assert_eq!(field.cursor(), 6);

        field.press(&Keystroke::Left);
        field.press(&Keystroke::Left);
        assert_eq!(field.cursor(), 4);
        field.press(&Keystroke::Home);
        assert_eq!(field.cursor(), 0);
        field.press(&Keystroke::End);
        assert_eq!(field.cursor(), 6);
        field.press(&Keystroke::Right);
        assert_eq!(field.cursor(), 6);
    }

    #[test]
    fn test_listener_sees_every_change() {
        let (log, listener) = recording::<CardNumber>();
        let mut field = CardNumberField::number();
        field.add_listener(listener);

        field.press(&Keystroke::Text("42".into()));
        let values = log.lock().unwrap();
        assert_eq!(values.len(), 2);
        assert_eq!(values[1].number.as_str(), "42");
        assert_eq!(values[1].brand, CardBrand::Visa);
    }

    #[test]
    fn test_no_notification_without_change() {
        let (log, listener) = recording::<CardNumber>();
        let mut field = CardNumberField::number();
        field.set_text("4242");
        field.add_listener(listener);

        field.press(&Keystroke::Char('x'));
        field.press(&Keystroke::Left);
        field.set_text("4242");
        assert!(log.lock().unwrap().is_empty());
    }

    #[test]
    fn test_removed_listener_does_not_fire() {
        let (log, listener) = recording::<CreditCardDate>();
        let mut field = CardDateField::date();
        let id = field.add_listener(listener);
        assert!(field.remove_listener(id));

        field.set_text("0123");
        assert!(log.lock().unwrap().is_empty());
        assert_eq!(field.value(), &CreditCardDate::new("01", "23"));
    }

    #[test]
    fn test_date_listener_value() {
        let (log, listener) = recording::<CreditCardDate>();
        let mut field = CardDateField::date();
        field.add_listener(listener);

        field.set_text("0123");
        assert_eq!(*log.lock().unwrap(), vec![CreditCardDate::new("01", "23")]);
    }

    #[test]
    fn test_masked_text_and_debug() {
        let mut field = CardNumberField::number();
        field.set_text("4242424242424242");
        assert_eq!(field.masked_text(), "**** **** **** 4242");
        assert!(!format!("{:?}", field).contains("4242 4242"));
    }

    #[test]
    fn test_press_paste_and_set_text() {
        let mut field = CardNumberField::number();
        field.press(&Keystroke::Char('4'));
        field.press(&Keystroke::Paste("2421110222255549".into()));
        assert_eq!(field.text(), "4242 1110 2222 5554");
        assert_eq!(field.cursor(), 19);

        field.press(&Keystroke::SetText(String::new()));
        assert_eq!(field.text(), "");
        assert!(field.digits().is_empty());
    }

    #[test]
    fn test_field_is_send() {
        fn assert_send<T: Send>() {}
        assert_send::<CardNumberField>();
        assert_send::<CardDateField>();
    }
}
