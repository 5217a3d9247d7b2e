//! Numeric helpers: digit-group separator removal and digit-run padding.

use std::sync::LazyLock;

use regex::Regex;

use crate::locate::find_subsequence;

static GROUPED_DIGITS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([0-9０-９])[,，]([0-9０-９])").expect("valid digit grouping pattern"));

/// Remove digit-grouping commas (ASCII `,` or full-width `，`) between digits.
///
/// `"1,234,567"` becomes `"1234567"`. A comma is only removed when both of
/// its neighbours are digits, so `"a,b"` and `"5,是"` are left alone.
pub fn normalize_numbers(text: &str) -> String {
    let mut result = text.to_string();

    // Matches cannot overlap, so "1,2,3" needs a second scan
    while GROUPED_DIGITS.is_match(&result) {
        result = GROUPED_DIGITS.replace_all(&result, "$1$2").into_owned();
    }

    result
}

/// Extend `part` with the digits immediately around its first occurrence in `s`.
///
/// Numeric extraction sometimes under-captures a number at its edges (for
/// example only `"00"` out of `"1000"`). This repairs the truncation by
/// absorbing adjacent digits on both sides until a non-digit or the end of `s`.
/// If `part` is empty or does not occur in `s`, it is returned unchanged.
pub fn pad_digits(part: &str, s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    let needle: Vec<char> = part.chars().collect();

    if needle.is_empty() {
        return part.to_string();
    }
    let Some(start) = find_subsequence(&chars, &needle) else {
        return part.to_string();
    };

    let mut left = start;
    while left > 0 && is_digit(chars[left - 1]) {
        left -= 1;
    }

    let mut right = start + needle.len();
    while right < chars.len() && is_digit(chars[right]) {
        right += 1;
    }

    chars[left..right].iter().collect()
}

/// Decimal digit check shared by the numeric helpers (ASCII and full-width).
///
/// Matches the digit class of the grouping pattern.
pub(crate) fn is_digit(c: char) -> bool {
    c.is_ascii_digit() || ('０'..='９').contains(&c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_thousands() {
        assert_eq!(normalize_numbers("1,234,567"), "1234567");
        assert_eq!(normalize_numbers("价格为1，000元"), "价格为1000元");
    }

    #[test]
    fn test_normalize_full_width_digits() {
        assert_eq!(normalize_numbers("１，０００"), "１０００");
        // Other scripts' digits are not grouping candidates
        assert_eq!(normalize_numbers("١,٢"), "١,٢");
        assert!(!is_digit('١'));
    }

    #[test]
    fn test_normalize_adjacent_groups() {
        // Second scan catches the window left behind by the first
        assert_eq!(normalize_numbers("1,2,3"), "123");
    }

    #[test]
    fn test_normalize_leaves_non_numeric_commas() {
        assert_eq!(normalize_numbers("a,b"), "a,b");
        assert_eq!(normalize_numbers("共5,是否"), "共5,是否");
        assert_eq!(normalize_numbers("第1, 2项"), "第1, 2项");
        assert_eq!(normalize_numbers(""), "");
    }

    #[test]
    fn test_pad_digits_left() {
        assert_eq!(pad_digits("00元", "合计1000元整"), "1000元");
    }

    #[test]
    fn test_pad_digits_right() {
        assert_eq!(pad_digits("约1", "约123人"), "约123");
    }

    #[test]
    fn test_pad_digits_both_sides() {
        assert_eq!(pad_digits("3", "编号12345结束"), "12345");
    }

    #[test]
    fn test_pad_digits_stops_at_edges() {
        assert_eq!(pad_digits("23", "123"), "123");
        assert_eq!(pad_digits("abc", "abc"), "abc");
    }

    #[test]
    fn test_pad_digits_missing_part() {
        assert_eq!(pad_digits("xyz", "123"), "xyz");
        assert_eq!(pad_digits("", "123"), "");
    }

    #[test]
    fn test_is_digit() {
        assert!(is_digit('7'));
        assert!(is_digit('８'));
        assert!(!is_digit('七'));
        assert!(!is_digit(','));
    }
}
