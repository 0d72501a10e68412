//! The expiry date engine.
//!
//! The date field holds at most four digits rendered as `MM/YY`. Month
//! rules are enforced while typing:
//!
//! - the first digit must be `0` or `1`;
//! - once two digits are present they must form a month `01`-`12`.
//!
//! An insertion that would break either rule is dropped, except that a digit
//! typed at the very start is still accepted on its own when the remaining
//! digits cannot follow it (`"13"` keeps `"1"`). Deletions are never
//! filtered.
//!
//! # Example
//!
//! ```
//! use cc_input::expiry::CreditCardDate;
//! use cc_input::field::CardDateField;
//!
//! let mut field = CardDateField::date();
//! field.set_text("0199");
//! assert_eq!(field.text(), "01/99");
//! assert_eq!(field.value(), &CreditCardDate::new("01", "99"));
//! ```

use std::fmt;

use crate::cursor::FieldFormat;
use crate::digits::{extract_digits_max, LogicalValue};
use crate::error::ConfigError;
use crate::format::{DATE_GROUPING, DATE_MAX_DIGITS, DATE_SEPARATOR};

/// Month and year as entered, each zero to two digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CreditCardDate {
    month: String,
    year: String,
}

impl CreditCardDate {
    /// Creates a date from its month and year parts.
    pub fn new(month: impl Into<String>, year: impl Into<String>) -> Self {
        Self {
            month: month.into(),
            year: year.into(),
        }
    }

    /// Returns the month digits entered so far.
    #[inline]
    pub fn month(&self) -> &str {
        &self.month
    }

    /// Returns the year digits entered so far.
    #[inline]
    pub fn year(&self) -> &str {
        &self.year
    }

    /// Returns true if both month and year have two digits.
    pub fn is_complete(&self) -> bool {
        self.month.len() == 2 && self.year.len() == 2
    }

    /// Returns true if nothing has been entered.
    pub fn is_empty(&self) -> bool {
        self.month.is_empty() && self.year.is_empty()
    }

    /// Returns the month as a number, once both month digits are present.
    pub fn month_number(&self) -> Option<u8> {
        two_digits(&self.month)
    }

    /// Returns the two-digit year as a number, once both year digits are
    /// present.
    pub fn year_number(&self) -> Option<u8> {
        two_digits(&self.year)
    }
}

impl fmt::Display for CreditCardDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", blank(&self.month), blank(&self.year))
    }
}

fn blank(part: &str) -> &str {
    if part.is_empty() {
        "  "
    } else {
        part
    }
}

fn two_digits(part: &str) -> Option<u8> {
    if part.len() == 2 {
        part.parse().ok()
    } else {
        None
    }
}

/// Reads a date from raw or displayed text.
///
/// Anything but ASCII digits is dropped, then the first two digits become
/// the month and the next two the year.
///
/// ```
/// use cc_input::expiry::{parse_date, CreditCardDate};
///
/// assert_eq!(parse_date("01/23"), CreditCardDate::new("01", "23"));
/// assert_eq!(parse_date("1"), CreditCardDate::new("1", ""));
/// ```
pub fn parse_date(input: &str) -> CreditCardDate {
    let digits = extract_digits_max(input, DATE_MAX_DIGITS);
    split_date(digits.as_str())
}

fn split_date(digits: &str) -> CreditCardDate {
    let month_end = digits.len().min(2);
    CreditCardDate::new(&digits[..month_end], &digits[month_end..])
}

/// Returns true if `digits` can still be the start of a valid `MM` month.
fn month_prefix_ok(digits: &str) -> bool {
    match digits.as_bytes() {
        [] => true,
        [first] => matches!(first, b'0' | b'1'),
        [b'0', b'1'..=b'9', ..] | [b'1', b'0'..=b'2', ..] => true,
        _ => false,
    }
}

/// Rules of the expiry date field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateFormat {
    separator: char,
}

impl DateFormat {
    /// Creates the format with the default `'/'` separator.
    pub const fn new() -> Self {
        Self {
            separator: DATE_SEPARATOR,
        }
    }

    /// Creates the format with a custom separator glyph.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::DigitSeparator`] if `separator` is an ASCII digit.
    pub fn with_separator(separator: char) -> Result<Self, ConfigError> {
        if separator.is_ascii_digit() {
            return Err(ConfigError::DigitSeparator(separator));
        }
        Ok(Self { separator })
    }
}

impl Default for DateFormat {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldFormat for DateFormat {
    type Value = CreditCardDate;

    fn separator(&self) -> char {
        self.separator
    }

    fn grouping(&self, _digits: &LogicalValue) -> &'static [usize] {
        DATE_GROUPING
    }

    fn max_length(&self, _digits: &LogicalValue) -> usize {
        DATE_MAX_DIGITS
    }

    fn admit(&self, current: &LogicalValue, at: usize, inserted: &str) -> usize {
        let room = DATE_MAX_DIGITS.saturating_sub(current.len());
        let keep = inserted.len().min(room);
        if keep == 0 {
            return 0;
        }

        if month_prefix_ok(current.spliced(at, &inserted[..keep]).as_str()) {
            return keep;
        }

        // Only the digit typed in front survives, and only if it still
        // reads as the start of a month.
        if at == 0 && month_prefix_ok(current.spliced(0, &inserted[..1]).as_str()) {
            return 1;
        }

        0
    }

    fn value(&self, digits: &LogicalValue) -> CreditCardDate {
        let end = digits.len().min(DATE_MAX_DIGITS);
        split_date(&digits.as_str()[..end])
    }
}
