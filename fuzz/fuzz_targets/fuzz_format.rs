//! Fuzz target for the formatting helpers.
//!
//! Tests that formatting never panics and always round-trips the digits.

#![no_main]

use libfuzzer_sys::fuzz_target;
use cc_input::{detect, expiry, extract_digits, extract_logical, format, mask};

fuzz_target!(|data: &str| {
    // These should never panic
    let _ = detect::classify_str(data);
    let _ = format::format_card_number_with_separator(data, '-');
    let digits = extract_digits(data);
    let _ = format::split_into_groups(digits.as_str(), &[4, 6, 5]);
    let _ = format::format_groups(data, &[1, 4], ' ');
    let _ = mask::mask_string(data);
    let _ = mask::mask_display(data);

    // Formatting keeps exactly the digits the field would hold
    let formatted = format::format_card_number(data);
    assert_eq!(extract_digits(&formatted), extract_logical(data));
    assert!(!formatted.starts_with(' ') && !formatted.ends_with(' '));

    let expiry = format::format_expiry(data);
    assert!(extract_digits(&expiry).len() <= format::DATE_MAX_DIGITS);
    assert_eq!(expiry::parse_date(data), expiry::parse_date(&expiry));
});
