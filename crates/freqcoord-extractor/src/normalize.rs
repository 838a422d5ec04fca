//! Coordinate, date and antenna value normalization

use crate::config::CoordinateStyle;
use chrono::NaiveDate;
use std::collections::HashSet;

/// Reformat a `±DDMMSSS` / `±DDMMSS` coordinate.
///
/// One leading sign is stripped. Seven characters split as (2,2,3), six as
/// (2,2,2); anything else is returned as is.
pub fn normalize_coordinate(raw: &str, style: CoordinateStyle) -> String {
    let unsigned = raw
        .strip_prefix(|c: char| c == '+' || c == '-')
        .unwrap_or(raw);
    let chars: Vec<char> = unsigned.chars().collect();

    let widths: [usize; 3] = match chars.len() {
        7 => [2, 2, 3],
        6 => [2, 2, 2],
        _ => return unsigned.to_string(),
    };

    let separator = match style {
        CoordinateStyle::Separated => "-",
        CoordinateStyle::Compact => "",
    };

    let mut start = 0;
    let parts: Vec<String> = widths
        .iter()
        .map(|width| {
            let part: String = chars[start..start + width].iter().collect();
            start += width;
            part
        })
        .collect();
    parts.join(separator)
}

/// Reformat `YYYY-MM-DD` as `DD.MM.YYYY`; anything unparsable passes through
pub fn normalize_date(raw: &str) -> String {
    if raw.is_empty() {
        return String::new();
    }
    match NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d") {
        Ok(date) => date.format("%d.%m.%Y").to_string(),
        Err(_) => raw.to_string(),
    }
}

/// Join per-antenna values with `.`.
///
/// With `distinct`, repeated values are dropped. Callers must not depend on
/// the order of the distinct values.
pub fn aggregate_antenna_field(values: &[String], distinct: bool) -> String {
    if !distinct {
        return values.join(".");
    }
    let mut seen = HashSet::new();
    values
        .iter()
        .map(String::as_str)
        .filter(|value| seen.insert(*value))
        .collect::<Vec<_>>()
        .join(".")
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: seven digits split as 2-2-3 with the sign removed
        #[test]
        fn test_seven_digit_split(sign in "[+-]?", digits in "[0-9]{7}") {
            let raw = format!("{}{}", sign, digits);
            let expected = format!("{}-{}-{}", &digits[0..2], &digits[2..4], &digits[4..7]);
            prop_assert_eq!(normalize_coordinate(&raw, CoordinateStyle::Separated), expected);
        }

        /// Property: six digits split as 2-2-2 with the sign removed
        #[test]
        fn test_six_digit_split(sign in "[+-]?", digits in "[0-9]{6}") {
            let raw = format!("{}{}", sign, digits);
            let expected = format!("{}-{}-{}", &digits[0..2], &digits[2..4], &digits[4..6]);
            prop_assert_eq!(normalize_coordinate(&raw, CoordinateStyle::Separated), expected);
        }

        /// Property: compact output is the unsigned input for six or seven digits
        #[test]
        fn test_compact_is_unsigned_input(sign in "[+-]?", digits in "[0-9]{6,7}") {
            let raw = format!("{}{}", sign, digits);
            prop_assert_eq!(normalize_coordinate(&raw, CoordinateStyle::Compact), digits);
        }

        /// Property: other lengths come back unchanged apart from the sign
        #[test]
        fn test_other_lengths_unchanged(sign in "[+-]?", digits in "([0-9]{0,5}|[0-9]{8,12})") {
            let raw = format!("{}{}", sign, digits);
            prop_assert_eq!(normalize_coordinate(&raw, CoordinateStyle::Separated), digits);
        }

        /// Property: a normalized date is left alone by a second pass
        #[test]
        fn test_date_second_pass_is_noop(y in 1900i32..2100, m in 1u32..=12, d in 1u32..=28) {
            let raw = format!("{:04}-{:02}-{:02}", y, m, d);
            let once = normalize_date(&raw);
            prop_assert_eq!(&once, &format!("{:02}.{:02}.{:04}", d, m, y));
            prop_assert_eq!(normalize_date(&once), once);
        }
    }
}
