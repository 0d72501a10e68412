//! Masking for card digits that end up in logs or on screen.
//!
//! PCI-DSS allows showing at most the last four digits of a card number in
//! customer-facing output. Everything in this crate that prints digits
//! (`Debug` impls, tracing events) goes through these helpers.

/// Masks every digit of `input` except the last four.
///
/// Non-digit characters are dropped. Inputs with four digits or fewer are
/// masked entirely, since the "last four" would be the whole value.
///
/// # Example
///
/// ```
/// use cc_input::mask::mask_string;
///
/// assert_eq!(mask_string("4242 4242 4242 4242"), "************4242");
/// assert_eq!(mask_string("0123"), "****");
/// ```
pub fn mask_string(input: &str) -> String {
    let digits: Vec<char> = input.chars().filter(char::is_ascii_digit).collect();
    let len = digits.len();

    if len <= 4 {
        return "*".repeat(len);
    }

    let mut result = "*".repeat(len - 4);
    result.extend(&digits[len - 4..]);
    result
}

/// Masks the digits of a display string in place, keeping its separators.
///
/// The last four digits stay visible once more than four have been entered.
///
/// # Example
///
/// ```
/// use cc_input::mask::mask_display;
///
/// assert_eq!(mask_display("4242 4242 4242 4242"), "**** **** **** 4242");
/// assert_eq!(mask_display("3782 822463 10005"), "**** ****** *0005");
/// assert_eq!(mask_display("4242"), "****");
/// ```
pub fn mask_display(text: &str) -> String {
    let total = text.chars().filter(char::is_ascii_digit).count();
    let visible_from = if total <= 4 { total } else { total - 4 };

    let mut seen = 0;
    text.chars()
        .map(|c| {
            if !c.is_ascii_digit() {
                return c;
            }
            let index = seen;
            seen += 1;
            if index < visible_from {
                '*'
            } else {
                c
            }
        })
        .collect()
}

/// Constant-time comparison of two byte slices.
///
/// Runs in time that depends only on the lengths, not on where the slices
/// first differ.
///
/// # Example
///
/// ```
/// use cc_input::mask::constant_time_eq;
///
/// assert!(constant_time_eq(b"4242", b"4242"));
/// assert!(!constant_time_eq(b"4242", b"4243"));
/// ```
#[inline]
pub fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }

    let mut diff: u8 = 0;
    for (x, y) in a.iter().zip(b.iter()) {
        diff |= x ^ y;
    }

    diff == 0
}

/// Constant-time comparison of two strings.
#[inline]
pub fn constant_time_eq_str(a: &str, b: &str) -> bool {
    constant_time_eq(a.as_bytes(), b.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_string() {
        assert_eq!(mask_string("4242424242424242"), "************4242");
        assert_eq!(mask_string("4242 4242 4242 4242"), "************4242");
        assert_eq!(mask_string("42421"), "*2421");
        assert_eq!(mask_string("424"), "***");
        assert_eq!(mask_string(""), "");
    }

    #[test]
    fn test_mask_display_keeps_separators() {
        assert_eq!(mask_display("4242 1110 2"), "**** *110 2");
        assert_eq!(mask_display("01/23"), "**/**");
        assert_eq!(mask_display(""), "");
    }

    #[test]
    fn test_constant_time_eq() {
        assert!(constant_time_eq(b"", b""));
        assert!(constant_time_eq(b"378282246310005", b"378282246310005"));
        assert!(!constant_time_eq(b"378282246310005", b"37828224631000"));
        assert!(constant_time_eq_str("0123", "0123"));
        assert!(!constant_time_eq_str("0123", "0124"));
    }
}
