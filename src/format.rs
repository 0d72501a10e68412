//! Grouped rendering of digit sequences.
//!
//! A grouping is an ordered list of group lengths, e.g. `[4, 4, 4, 4]` for a
//! Visa number or `[2, 2]` for an expiry date. Rendering splits the digits
//! into consecutive runs of those lengths and joins the non-empty runs with a
//! separator, so a partially entered value never shows a leading, trailing or
//! doubled separator.
//!
//! # Example
//!
//! ```
//! use cc_input::format::{format_card_number, format_expiry, format_groups};
//!
//! assert_eq!(format_card_number("4242424242424242"), "4242 4242 4242 4242");
//! assert_eq!(format_card_number("378282246310005"), "3782 822463 10005");
//! assert_eq!(format_expiry("0123"), "01/23");
//! assert_eq!(format_groups("42421", &[4, 4, 4, 4], '-'), "4242-1");
//! ```

use crate::detect::classify_brand;
use crate::digits::{extract_digits, extract_digits_max};

/// Separator used between the groups of a card number.
pub const NUMBER_SEPARATOR: char = ' ';

/// Separator used between month and year of an expiry date.
pub const DATE_SEPARATOR: char = '/';

/// Grouping of an expiry date: two month digits, two year digits.
pub const DATE_GROUPING: &[usize] = &[2, 2];

/// Number of digits in an expiry date.
pub const DATE_MAX_DIGITS: usize = 4;

/// Splits `digits` into consecutive runs following `grouping`.
///
/// The last run may be shorter when the value is incomplete. Digits beyond
/// the grouping's total end up in one extra trailing run. Group lengths
/// count chars, so any input splits without panicking.
///
/// # Example
///
/// ```
/// use cc_input::format::split_into_groups;
///
/// assert_eq!(split_into_groups("378282246310005", &[4, 6, 5]), vec!["3782", "822463", "10005"]);
/// assert_eq!(split_into_groups("42421", &[4, 4, 4, 4]), vec!["4242", "1"]);
/// assert!(split_into_groups("", &[4, 4, 4, 4]).is_empty());
/// ```
pub fn split_into_groups<'a>(digits: &'a str, grouping: &[usize]) -> Vec<&'a str> {
    let mut groups = Vec::with_capacity(grouping.len() + 1);
    let mut rest = digits;

    for &size in grouping {
        if rest.is_empty() {
            break;
        }
        let end = rest.char_indices().nth(size).map_or(rest.len(), |(i, _)| i);
        let (group, tail) = rest.split_at(end);
        groups.push(group);
        rest = tail;
    }

    if !rest.is_empty() {
        groups.push(rest);
    }

    groups
}

/// Renders `digits` with `separator` between consecutive non-empty groups.
///
/// Input is grouped as given; use
/// [`extract_digits`](crate::digits::extract_digits) first on raw text.
pub fn format_groups(digits: &str, grouping: &[usize], separator: char) -> String {
    let groups = split_into_groups(digits, grouping);
    let mut result = String::with_capacity(digits.len() + groups.len());

    for (i, group) in groups.iter().enumerate() {
        if i > 0 {
            result.push(separator);
        }
        result.push_str(group);
    }

    result
}

/// Maps a logical offset (digits before the cursor) to a char offset in the
/// rendered string.
///
/// One position is added for every separator that precedes the `logical`-th
/// digit. A cursor sitting exactly on a group boundary stays in front of the
/// separator.
///
/// # Example
///
/// ```
/// use cc_input::format::display_offset;
///
/// let visa = &[4, 4, 4, 4];
/// assert_eq!(display_offset(visa, 4), 4);
/// assert_eq!(display_offset(visa, 5), 6);
/// assert_eq!(display_offset(visa, 16), 19);
/// ```
pub fn display_offset(grouping: &[usize], logical: usize) -> usize {
    let mut offset = logical;
    let mut boundary = 0;

    for &size in grouping {
        boundary += size;
        if boundary >= logical {
            break;
        }
        offset += 1;
    }

    offset
}

/// Formats raw card number text as the number field would display it.
///
/// Digits are extracted, the brand is classified and the value is cut to
/// the brand's maximum length before grouping.
pub fn format_card_number(input: &str) -> String {
    format_card_number_with_separator(input, NUMBER_SEPARATOR)
}

/// Formats raw card number text with a custom separator.
///
/// # Example
///
/// ```
/// use cc_input::format::format_card_number_with_separator;
///
/// assert_eq!(format_card_number_with_separator("4242424242424242", '-'), "4242-4242-4242-4242");
/// ```
pub fn format_card_number_with_separator(input: &str, separator: char) -> String {
    let mut digits = extract_digits(input);
    let brand = classify_brand(&digits);
    digits.truncate(brand.max_length());
    format_groups(digits.as_str(), brand.grouping(), separator)
}

/// Formats raw expiry text as `MM/YY`, keeping at most four digits.
///
/// Month validity is not checked here; the date field enforces it while
/// the user types.
pub fn format_expiry(input: &str) -> String {
    let digits = extract_digits_max(input, DATE_MAX_DIGITS);
    format_groups(digits.as_str(), DATE_GROUPING, DATE_SEPARATOR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_visa_16() {
        assert_eq!(format_card_number("4242424242424242"), "4242 4242 4242 4242");
    }

    #[test]
    fn test_format_amex() {
        assert_eq!(format_card_number("378282246310005"), "3782 822463 10005");
    }

    #[test]
    fn test_format_diners_14() {
        assert_eq!(format_card_number("30569309025904"), "3056 930902 5904");
    }

    #[test]
    fn test_format_unionpay_19() {
        assert_eq!(format_card_number("6212345678901234567"), "6212 3456 7890 1234 567");
    }

    #[test]
    fn test_format_unknown_is_ungrouped() {
        assert_eq!(format_card_number("3"), "3");
        assert_eq!(format_card_number("12345678"), "12345678");
    }

    #[test]
    fn test_format_truncates_to_brand_max() {
        assert_eq!(format_card_number("42424242424242429999"), "4242 4242 4242 4242");
        assert_eq!(format_card_number("3782822463100059"), "3782 822463 10005");
    }

    #[test]
    fn test_format_already_formatted() {
        assert_eq!(format_card_number("4242-4242-4242-4242"), "4242 4242 4242 4242");
    }

    #[test]
    fn test_format_empty() {
        assert_eq!(format_card_number(""), "");
        assert_eq!(format_card_number("   "), "");
        assert_eq!(format_expiry(""), "");
    }

    #[test]
    fn test_format_partial_has_no_trailing_separator() {
        assert_eq!(format_groups("4242", &[4, 4, 4, 4], ' '), "4242");
        assert_eq!(format_groups("42421", &[4, 4, 4, 4], ' '), "4242 1");
        assert_eq!(format_groups("01", DATE_GROUPING, '/'), "01");
        assert_eq!(format_groups("012", DATE_GROUPING, '/'), "01/2");
    }

    #[test]
    fn test_format_expiry() {
        assert_eq!(format_expiry("0199"), "01/99");
        assert_eq!(format_expiry("01/2345"), "01/23");
        assert_eq!(format_expiry("1"), "1");
    }

    #[test]
    fn test_split_overflow_goes_to_trailing_group() {
        assert_eq!(split_into_groups("012345", DATE_GROUPING), vec!["01", "23", "45"]);
    }

    #[test]
    fn test_grouping_counts_chars() {
        assert_eq!(format_groups("é1234", &[1, 4], ' '), "é 1234");
        assert_eq!(split_into_groups("12é4ü", &[2, 2]), vec!["12", "é4", "ü"]);
        assert_eq!(format_groups("ééé", &[2], '/'), "éé/é");
    }

    #[test]
    fn test_display_offset_amex() {
        let amex = &[4, 6, 5];
        assert_eq!(display_offset(amex, 0), 0);
        assert_eq!(display_offset(amex, 4), 4);
        assert_eq!(display_offset(amex, 5), 6);
        assert_eq!(display_offset(amex, 10), 11);
        assert_eq!(display_offset(amex, 11), 13);
        assert_eq!(display_offset(amex, 15), 17);
    }

    #[test]
    fn test_display_offset_date() {
        assert_eq!(display_offset(DATE_GROUPING, 2), 2);
        assert_eq!(display_offset(DATE_GROUPING, 3), 4);
        assert_eq!(display_offset(DATE_GROUPING, 4), 5);
    }

    #[test]
    fn test_display_offset_matches_rendering() {
        let grouping = &[4, 4, 4, 4];
        let digits = "4242424242424242";
        for len in 1..=digits.len() {
            let rendered = format_groups(&digits[..len], grouping, ' ');
            assert_eq!(display_offset(grouping, len), rendered.chars().count());
        }
    }
}
