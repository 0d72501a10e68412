//! Digit extraction.
//!
//! A field's display text mixes the digits the user typed with synthetic
//! separators. The logical value of the field is the digit sequence alone;
//! everything else in the text is dropped without complaint.
//!
//! # Example
//!
//! ```
//! use cc_input::digits::extract_digits;
//!
//! assert_eq!(extract_digits("4242 4242-4242/4242").as_str(), "4242424242424242");
//! assert_eq!(extract_digits("no digits here").as_str(), "");
//! ```

use std::fmt;
use zeroize::Zeroize;

use crate::mask::{constant_time_eq_str, mask_string};

/// The digits of a field with every separator removed.
///
/// Only ASCII digits are ever stored. The buffer is wiped when the value is
/// dropped, equality is checked in constant time, and `Debug` output is
/// masked so that a logged value never shows more than the last four digits.
#[derive(Clone, Default)]
pub struct LogicalValue {
    digits: String,
}

impl LogicalValue {
    /// Creates an empty value.
    #[inline]
    pub const fn empty() -> Self {
        Self {
            digits: String::new(),
        }
    }

    /// Returns the digits as a string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.digits
    }

    /// Returns the number of digits.
    #[inline]
    pub fn len(&self) -> usize {
        self.digits.len()
    }

    /// Returns true if there are no digits.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }

    /// Returns the first `count` digits as numeric values (0-9).
    ///
    /// Brand classification only ever looks at a short prefix, so this
    /// avoids converting the whole sequence.
    pub fn prefix_values(&self, count: usize) -> Vec<u8> {
        self.digits
            .bytes()
            .take(count)
            .map(|b| b - b'0')
            .collect()
    }

    /// Drops every digit past `max`.
    #[inline]
    pub(crate) fn truncate(&mut self, max: usize) {
        self.digits.truncate(max);
    }

    /// Removes the digit at `index`, if there is one.
    pub(crate) fn remove(&mut self, index: usize) -> bool {
        if index < self.digits.len() {
            self.digits.remove(index);
            true
        } else {
            false
        }
    }

    /// Removes the digits in `start..end`, clamped to the current length.
    pub(crate) fn remove_range(&mut self, start: usize, end: usize) {
        let end = end.min(self.digits.len());
        if start < end {
            self.digits.replace_range(start..end, "");
        }
    }

    /// Returns a copy with `inserted` spliced in at `index`.
    ///
    /// `inserted` must already be digits only.
    pub(crate) fn spliced(&self, index: usize, inserted: &str) -> Self {
        let index = index.min(self.digits.len());
        let mut digits = String::with_capacity(self.digits.len() + inserted.len());
        digits.push_str(&self.digits[..index]);
        digits.push_str(inserted);
        digits.push_str(&self.digits[index..]);
        Self { digits }
    }
}

impl PartialEq for LogicalValue {
    fn eq(&self, other: &Self) -> bool {
        constant_time_eq_str(&self.digits, &other.digits)
    }
}

impl Eq for LogicalValue {}

impl fmt::Debug for LogicalValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("LogicalValue")
            .field(&mask_string(&self.digits))
            .finish()
    }
}

impl Drop for LogicalValue {
    fn drop(&mut self) {
        self.digits.zeroize();
    }
}

/// Extracts every ASCII digit from `input`, in order.
///
/// Whitespace, separators and any other characters are silently dropped.
#[inline]
pub fn extract_digits(input: &str) -> LogicalValue {
    LogicalValue {
        digits: input.chars().filter(char::is_ascii_digit).collect(),
    }
}

/// Extracts digits from `input`, keeping at most `max` of them.
#[inline]
pub fn extract_digits_max(input: &str, max: usize) -> LogicalValue {
    LogicalValue {
        digits: input.chars().filter(char::is_ascii_digit).take(max).collect(),
    }
}

/// Counts the digits that appear strictly before the char offset `offset`.
///
/// Offsets past the end of `input` are clamped.
#[inline]
pub fn digits_before(input: &str, offset: usize) -> usize {
    input
        .chars()
        .take(offset)
        .filter(char::is_ascii_digit)
        .count()
}
