//! Card brand classification from the leading digits.
//!
//! Classification is a lookup in a table of prefix rules tried in order.
//! A rule only matches once enough digits are present to satisfy its whole
//! pattern, so a short prefix that could still become several brands stays
//! [`CardBrand::Unknown`]. Because every rule ends in `..`, appending digits
//! to a number never changes a brand once one has been assigned.

use crate::digits::LogicalValue;
use crate::CardBrand;

/// Longest prefix any rule inspects.
const PREFIX_LEN: usize = 4;

/// One row of the classification table.
#[derive(Debug, Clone, Copy)]
pub struct BrandRule {
    /// Brand assigned when the rule matches.
    pub brand: CardBrand,
    matches: fn(&[u8]) -> bool,
}

impl BrandRule {
    /// Returns true if `digits` (numeric values, 0-9) start with this rule's prefix.
    #[inline]
    pub fn matches(&self, digits: &[u8]) -> bool {
        (self.matches)(digits)
    }
}

/// Prefix rules in precedence order. The first match wins.
pub const BRAND_RULES: &[BrandRule] = &[
    // American Express: 34, 37
    BrandRule {
        brand: CardBrand::AmericanExpress,
        matches: |d| matches!(d, [3, 4 | 7, ..]),
    },
    // Diners Club: 30, 36, 38, 39
    BrandRule {
        brand: CardBrand::DinersClub,
        matches: |d| matches!(d, [3, 0 | 6 | 8 | 9, ..]),
    },
    // JCB: 35
    BrandRule {
        brand: CardBrand::Jcb,
        matches: |d| matches!(d, [3, 5, ..]),
    },
    // Visa: 4
    BrandRule {
        brand: CardBrand::Visa,
        matches: |d| matches!(d, [4, ..]),
    },
    // Mastercard: 51-55 or 2221-2720
    BrandRule {
        brand: CardBrand::Mastercard,
        matches: |d| {
            matches!(
                d,
                [5, 1..=5, ..]
                    | [2, 2, 2, 1..=9, ..]
                    | [2, 2, 3..=9, _, ..]
                    | [2, 3..=6, _, _, ..]
                    | [2, 7, 0..=1, _, ..]
                    | [2, 7, 2, 0, ..]
            )
        },
    },
    // Discover: 6011, 644-649, 65
    BrandRule {
        brand: CardBrand::Discover,
        matches: |d| matches!(d, [6, 0, 1, 1, ..] | [6, 4, 4..=9, ..] | [6, 5, ..]),
    },
    // UnionPay: 62
    BrandRule {
        brand: CardBrand::UnionPay,
        matches: |d| matches!(d, [6, 2, ..]),
    },
];

/// Classifies a sequence of digit values (0-9).
///
/// # Example
///
/// ```
/// use cc_input::detect::classify_digits;
/// use cc_input::CardBrand;
///
/// assert_eq!(classify_digits(&[4, 2, 4, 2]), CardBrand::Visa);
/// assert_eq!(classify_digits(&[3, 7]), CardBrand::AmericanExpress);
/// assert_eq!(classify_digits(&[3]), CardBrand::Unknown);
/// ```
#[inline]
pub fn classify_digits(digits: &[u8]) -> CardBrand {
    let prefix = &digits[..digits.len().min(PREFIX_LEN)];
    BRAND_RULES
        .iter()
        .find(|rule| rule.matches(prefix))
        .map_or(CardBrand::Unknown, |rule| rule.brand)
}

/// Classifies a logical value.
#[inline]
pub fn classify_brand(value: &LogicalValue) -> CardBrand {
    classify_digits(&value.prefix_values(PREFIX_LEN))
}

/// Classifies the digits found in arbitrary text.
///
/// # Example
///
/// ```
/// use cc_input::detect::classify_str;
/// use cc_input::CardBrand;
///
/// assert_eq!(classify_str("3782 822463 10005"), CardBrand::AmericanExpress);
/// assert_eq!(classify_str("2221 00"), CardBrand::Mastercard);
/// ```
#[inline]
pub fn classify_str(input: &str) -> CardBrand {
    let prefix: Vec<u8> = input
        .chars()
        .filter(char::is_ascii_digit)
        .take(PREFIX_LEN)
        .map(|c| c as u8 - b'0')
        .collect();
    classify_digits(&prefix)
}
