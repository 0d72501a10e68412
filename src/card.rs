//! Card brands and their display conventions.
//!
//! Every brand carries the grouping its number is displayed with and the
//! number of digits an input field accepts for it. The prefix rules that
//! decide the brand live in [`crate::detect`].

use std::fmt;

/// Maximum number of digits any card number field accepts (ISO/IEC 7812).
pub const MAX_CARD_DIGITS: usize = 19;

/// Minimum number of digits of an ISO/IEC 7812 card number.
pub const MIN_CARD_DIGITS: usize = 8;

/// Card networks recognised while the user types.
///
/// `Unknown` covers both numbers with an unrecognised prefix and prefixes
/// that are still too short to tell brands apart (a lone `3` could become
/// Amex, JCB or Diners Club).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum CardBrand {
    /// No brand matched (yet). Shown as a single ungrouped run of digits.
    #[default]
    Unknown,
    /// Visa - Prefix 4, 13 to 16 digits, 4-4-4-4
    Visa,
    /// Mastercard - Prefix 51-55, 2221-2720, 16 digits, 4-4-4-4
    Mastercard,
    /// American Express - Prefix 34, 37, 15 digits, 4-6-5
    AmericanExpress,
    /// JCB - Prefix 35, 16 digits, 4-4-4-4
    Jcb,
    /// Diners Club - Prefix 30, 36, 38, 39, 14 digits, 4-6-4
    DinersClub,
    /// Discover - Prefix 6011, 644-649, 65, 16 digits, 4-4-4-4
    Discover,
    /// UnionPay - Prefix 62, 16 to 19 digits, 4-4-4-4-3
    UnionPay,
}

impl CardBrand {
    /// Returns every brand, `Unknown` first.
    pub const fn all() -> &'static [CardBrand] {
        &[
            Self::Unknown,
            Self::Visa,
            Self::Mastercard,
            Self::AmericanExpress,
            Self::Jcb,
            Self::DinersClub,
            Self::Discover,
            Self::UnionPay,
        ]
    }

    /// Returns the group lengths used to display a number of this brand.
    ///
    /// The lengths always add up to [`max_length`](Self::max_length).
    #[inline]
    pub const fn grouping(&self) -> &'static [usize] {
        match self {
            Self::Unknown => &[MAX_CARD_DIGITS],
            Self::Visa | Self::Mastercard | Self::Jcb | Self::Discover => &[4, 4, 4, 4],
            Self::AmericanExpress => &[4, 6, 5],
            Self::DinersClub => &[4, 6, 4],
            Self::UnionPay => &[4, 4, 4, 4, 3],
        }
    }

    /// Returns the shortest complete number of this brand.
    #[inline]
    pub const fn min_length(&self) -> usize {
        match self {
            Self::Unknown => MIN_CARD_DIGITS,
            Self::Visa => 13,
            Self::Mastercard | Self::Jcb | Self::Discover | Self::UnionPay => 16,
            Self::AmericanExpress => 15,
            Self::DinersClub => 14,
        }
    }

    /// Returns how many digits a field accepts for this brand.
    #[inline]
    pub const fn max_length(&self) -> usize {
        let groups = self.grouping();
        let mut total = 0;
        let mut i = 0;
        while i < groups.len() {
            total += groups[i];
            i += 1;
        }
        total
    }

    /// Returns the number of separators in a fully entered number.
    #[inline]
    pub const fn separator_count(&self) -> usize {
        self.grouping().len() - 1
    }

    /// Returns true if `length` digits form a complete number of this brand.
    #[inline]
    pub const fn is_complete_length(&self, length: usize) -> bool {
        length >= self.min_length() && length <= self.max_length()
    }

    /// Returns a human-readable name for the card brand.
    #[inline]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Unknown => "Unknown",
            Self::Visa => "Visa",
            Self::Mastercard => "Mastercard",
            Self::AmericanExpress => "American Express",
            Self::Jcb => "JCB",
            Self::DinersClub => "Diners Club",
            Self::Discover => "Discover",
            Self::UnionPay => "UnionPay",
        }
    }
}

impl fmt::Display for CardBrand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
