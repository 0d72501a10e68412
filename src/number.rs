//! The card number engine.
//!
//! Grouping and maximum length follow the brand the current digits classify
//! as, so the display regroups as soon as the prefix identifies a brand.

use crate::card::CardBrand;
use crate::cursor::FieldFormat;
use crate::detect;
use crate::digits::{extract_digits, LogicalValue};
use crate::error::ConfigError;
use crate::format::NUMBER_SEPARATOR;

/// Number value reported to listeners: the digits and their brand.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CardNumber {
    /// The digits of the number.
    pub number: LogicalValue,
    /// Brand the digits classify as.
    pub brand: CardBrand,
}

impl CardNumber {
    /// Builds the value for `number`, classifying its brand.
    pub fn new(number: LogicalValue) -> Self {
        let brand = detect::classify_brand(&number);
        Self { number, brand }
    }

    /// Returns true if the number has a complete length for its brand.
    ///
    /// This is a length check only; no checksum is computed.
    pub fn is_complete(&self) -> bool {
        self.brand.is_complete_length(self.number.len())
    }
}

/// Rules of the card number field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberFormat {
    separator: char,
}

impl NumberFormat {
    /// Creates the format with the default `' '` separator.
    pub const fn new() -> Self {
        Self {
            separator: NUMBER_SEPARATOR,
        }
    }

    /// Creates the format with a custom separator glyph.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::DigitSeparator`] if `separator` is an ASCII digit.
    ///
    /// # Example
    ///
    /// ```
    /// use cc_input::number::NumberFormat;
    ///
    /// assert!(NumberFormat::with_separator('-').is_ok());
    /// assert!(NumberFormat::with_separator('7').is_err());
    /// ```
    pub fn with_separator(separator: char) -> Result<Self, ConfigError> {
        if separator.is_ascii_digit() {
            return Err(ConfigError::DigitSeparator(separator));
        }
        Ok(Self { separator })
    }
}

impl Default for NumberFormat {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldFormat for NumberFormat {
    type Value = CardNumber;

    fn separator(&self) -> char {
        self.separator
    }

    fn grouping(&self, digits: &LogicalValue) -> &'static [usize] {
        detect::classify_brand(digits).grouping()
    }

    fn max_length(&self, digits: &LogicalValue) -> usize {
        detect::classify_brand(digits).max_length()
    }

    fn value(&self, digits: &LogicalValue) -> CardNumber {
        CardNumber::new(digits.clone())
    }
}

/// Returns the card digits shown in `display_text`, cut to the brand's
/// maximum length.
///
/// # Example
///
/// ```
/// use cc_input::number::extract_logical;
///
/// assert_eq!(extract_logical("4242 4242 4242 4242 9").as_str(), "4242424242424242");
/// ```
pub fn extract_logical(display_text: &str) -> LogicalValue {
    let mut digits = extract_digits(display_text);
    let brand = detect::classify_brand(&digits);
    digits.truncate(brand.max_length());
    digits
}

/// Classifies the brand of a logical value.
pub fn classify_brand(value: &LogicalValue) -> CardBrand {
    detect::classify_brand(value)
}
