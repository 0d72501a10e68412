//! # cc_input
//!
//! Formatting engine for credit card number and expiry date input fields.
//!
//! As the user types, pastes or deletes, the engine regroups the digits
//! (`4242 4242 4242 4242`, `3782 822463 10005`, `01/23`), moves the cursor
//! to where the user expects it and reports the card brand. Separators are
//! synthetic: they are never part of the value and deleting one deletes the
//! digit that produced it.
//!
//! ## Features
//!
//! - Digit extraction and prefix-based brand detection
//! - Brand-dependent grouping with separator-aware cursor remapping
//! - Month-checked expiry date entry
//! - Change listeners fired only when the value actually changes
//! - Zeroized, masked digit buffers
//!
//! ## Quick Start
//!
//! ```rust
//! use cc_input::{CardBrand, CardNumberField, Keystroke};
//!
//! let mut field = CardNumberField::number();
//! field.press(&Keystroke::Text("4242".into()));
//! field.press(&Keystroke::Char('1'));
//!
//! assert_eq!(field.text(), "4242 1");
//! assert_eq!(field.cursor(), 6);
//! assert_eq!(field.brand(), CardBrand::Visa);
//! ```
//!
//! ## Stateless Edits
//!
//! ```rust
//! use cc_input::{apply_edit, DisplayState, Edit, NumberFormat};
//!
//! let before = DisplayState::new("4242 1110 2", 10);
//! let after = apply_edit(&NumberFormat::new(), &before, &Edit::delete_backward(10));
//!
//! // Backspace right after a separator removes the digit in front of it
//! assert_eq!(after.state.text(), "4242 1112");
//! assert_eq!(after.state.cursor(), 8);
//! ```
//!
//! ## Expiry Dates
//!
//! ```rust
//! use cc_input::{CardDateField, CreditCardDate};
//!
//! let mut field = CardDateField::date();
//! field.set_text("13");
//! assert_eq!(field.text(), "1");
//!
//! field.set_text("0123");
//! assert_eq!(field.text(), "01/23");
//! assert_eq!(field.value(), &CreditCardDate::new("01", "23"));
//! ```
//!
//! ## Card Formatting
//!
//! ```rust
//! use cc_input::format;
//!
//! assert_eq!(format::format_card_number("4111111111111111"), "4111 1111 1111 1111");
//! assert_eq!(format::format_card_number("378282246310005"), "3782 822463 10005");
//! assert_eq!(format::format_expiry("1225"), "12/25");
//! ```
//!
//! ## Supported Card Brands
//!
//! | Brand | Prefix | Length | Grouping |
//! |-------|--------|--------|----------|
//! | American Express | 34, 37 | 15 | 4-6-5 |
//! | Diners Club | 30, 36, 38, 39 | 14 | 4-6-4 |
//! | JCB | 35 | 16 | 4-4-4-4 |
//! | Visa | 4 | 13-16 | 4-4-4-4 |
//! | Mastercard | 51-55, 2221-2720 | 16 | 4-4-4-4 |
//! | Discover | 6011, 644-649, 65 | 16 | 4-4-4-4 |
//! | UnionPay | 62 | 16-19 | 4-4-4-4-3 |
//! | Unknown | anything else | up to 19 | ungrouped |
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `serde` | Serialize/Deserialize for brands, dates, edits and display states |
//! | `cli` | `ccinput` command-line tool |
//!
//! ## Security
//!
//! - Digit buffers and display text are zeroized on drop
//! - `Debug` output of values, edits and fields is masked
//! - Logical values are compared in constant time
//! - Log events carry lengths and offsets, never digits
//! - No unsafe code (`#![deny(unsafe_code)]`)

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod card;
pub mod cursor;
pub mod detect;
pub mod digits;
pub mod edit;
pub mod error;
pub mod expiry;
pub mod field;
pub mod format;
pub mod mask;
pub mod notify;
pub mod number;

// Re-export main types at crate root
pub use card::{CardBrand, MAX_CARD_DIGITS, MIN_CARD_DIGITS};
pub use cursor::{apply_edit, EditOutcome, FieldFormat};
pub use detect::classify_brand;
pub use digits::{extract_digits, LogicalValue};
pub use edit::{DisplayState, Edit, Keystroke};
pub use error::{ConfigError, KeystrokeParseError};
pub use expiry::{CreditCardDate, DateFormat};
pub use field::{CardDateField, CardNumberField, Field};
pub use notify::{ListenerId, Listeners};
pub use number::{extract_logical, CardNumber, NumberFormat};

// Re-export mask utilities
pub use mask::{constant_time_eq, constant_time_eq_str, mask_display, mask_string};
