/// Common calendar and token helpers.
use chrono::{Datelike, NaiveDate};

/// Converts string into unsigned number with bounds validation.
pub(crate) fn parse_digital_value(input: &str, min: u8, max: u8) -> Option<u8> {
    match input.parse::<u8>() {
        Ok(value) if value >= min && value <= max => Some(value),
        _ => None,
    }
}

/// Converts string with mnemonic value representation into unsigned number.
pub(crate) fn parse_string_value(input: &str, values: &[&str]) -> Option<u8> {
    if input.is_empty() {
        None
    } else {
        values
            .iter()
            .position(|&x| x.eq_ignore_ascii_case(input))
            .map(|i| i as u8)
    }
}

/// Returns `true` if provided year is leap.
#[inline]
pub(crate) fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Returns number of days in specified month.
pub(crate) fn days_in_month(year: i32, month: u8) -> u8 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => panic!("invalid month: {month}"),
    }
}

/// Day of the week for the specified date, `0` is Sunday.
pub(crate) fn day_of_week(year: i32, month: u8, day: u8) -> u8 {
    match NaiveDate::from_ymd_opt(year, u32::from(month), u32::from(day)) {
        Some(date) => date.weekday().num_days_from_sunday() as u8,
        None => panic!("invalid date: {year:04}-{month:02}-{day:02}"),
    }
}

/// Day in the month of the last occurrence of the specified day of the week.
pub(crate) fn last_dow(year: i32, month: u8, dow: u8) -> u8 {
    if dow > 6 {
        panic!("invalid day of week: {dow}");
    }

    let last_day = days_in_month(year, month);
    let last_day_dow = day_of_week(year, month, last_day);

    last_day - (last_day_dow + 7 - dow) % 7
}

/// Day in the month of the N-th occurrence of the specified day of the week,
/// or `None` if the month has fewer than N occurrences.
pub(crate) fn nth_dow(year: i32, month: u8, dow: u8, n: u8) -> Option<u8> {
    if dow > 6 || n == 0 || n > 5 {
        panic!("invalid day of week or occurrence number: {dow}#{n}");
    }

    let first_dow = day_of_week(year, month, 1);
    let day = 1 + (dow + 7 - first_dow) % 7 + (n - 1) * 7;

    (day <= days_in_month(year, month)).then_some(day)
}

/// Day in the month of the last weekday (not Saturday or Sunday).
pub(crate) fn last_weekday(year: i32, month: u8) -> u8 {
    let last_day = days_in_month(year, month);

    match day_of_week(year, month, last_day) {
        0 => last_day - 2,
        6 => last_day - 1,
        _ => last_day,
    }
}

/// Day in the month of the weekday (not Saturday or Sunday) nearest to the
/// specified day, never leaving the month: a month-end Sunday backs up to
/// Friday and a day-1 Saturday jumps forward to Monday.
pub(crate) fn nearest_weekday(year: i32, month: u8, day: u8) -> u8 {
    let dow = day_of_week(year, month, day);
    let days_in_month = days_in_month(year, month);

    if dow > 0 && dow < 6 {
        day
    } else if dow == 0 {
        // sunday
        if day == days_in_month {
            day - 2
        } else {
            day + 1
        }
    } else {
        // saturday
        if day > 1 {
            day - 1
        } else {
            day + 2
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn parse_digital_value_within_range() {
        assert_eq!(parse_digital_value("5", 0, 10), Some(5));
        assert_eq!(parse_digital_value("0", 0, 10), Some(0));
        assert_eq!(parse_digital_value("10", 0, 10), Some(10));
        assert_eq!(parse_digital_value("07", 0, 10), Some(7));
    }

    #[test]
    fn parse_digital_value_out_of_range() {
        assert_eq!(parse_digital_value("5", 10, 20), None);
        assert_eq!(parse_digital_value("25", 0, 20), None);
    }

    #[test]
    fn parse_digital_value_invalid_input() {
        assert_eq!(parse_digital_value("abc", 0, 10), None);
        assert_eq!(parse_digital_value("", 0, 10), None);
        assert_eq!(parse_digital_value("-1", 0, 10), None);
        assert_eq!(parse_digital_value("1.5", 0, 10), None);
        assert_eq!(parse_digital_value("256", 0, 255), None);
    }

    #[test]
    fn parse_string_value_regular() {
        let days = &["SUN", "MON", "TUE", "WED", "THU", "FRI", "SAT"];

        assert_eq!(parse_string_value("mon", days), Some(1));
        assert_eq!(parse_string_value("FRI", days), Some(5));
        assert_eq!(parse_string_value("SuN", days), Some(0));
        assert_eq!(parse_string_value("sat", days), Some(6));

        assert_eq!(parse_string_value("", days), None);
        assert_eq!(parse_string_value("monday", days), None);
        assert_eq!(parse_string_value(" mon", days), None);
    }

    #[rstest]
    #[case(2024, true)]
    #[case(1996, true)]
    #[case(2000, true)]
    #[case(2023, false)]
    #[case(1900, false)]
    #[case(2100, false)]
    fn test_is_leap_year(#[case] year: i32, #[case] expected: bool) {
        assert_eq!(is_leap_year(year), expected);
    }

    #[rstest]
    #[case(2023, 1, 31)]
    #[case(2023, 4, 30)]
    #[case(2023, 2, 28)]
    #[case(2024, 2, 29)]
    #[case(2000, 2, 29)]
    #[case(1900, 2, 28)]
    #[case(2023, 12, 31)]
    fn test_days_in_month(#[case] y: i32, #[case] m: u8, #[case] expected: u8) {
        assert_eq!(days_in_month(y, m), expected, "{y:04}-{m:02} has {expected} days");
    }

    #[rstest]
    #[case(2023, 0)]
    #[case(2023, 13)]
    #[should_panic(expected = "invalid month")]
    fn test_days_in_month_invalid(#[case] y: i32, #[case] m: u8) {
        days_in_month(y, m);
    }

    #[rstest]
    #[case(2024, 1, 1, 1)] // Monday
    #[case(2025, 1, 1, 3)] // Wednesday
    #[case(2024, 2, 29, 4)] // Thursday (leap year)
    #[case(2023, 1, 1, 0)] // Sunday
    #[case(2000, 1, 1, 6)] // Saturday (century leap year)
    #[case(1900, 1, 1, 1)] // Monday (non-leap century year)
    #[case(2022, 12, 12, 1)] // Monday
    #[case(2024, 6, 1, 6)] // Saturday
    #[case(1971, 8, 21, 6)]
    #[case(1945, 6, 22, 5)]
    fn test_day_of_week(#[case] y: i32, #[case] m: u8, #[case] d: u8, #[case] expected: u8) {
        assert_eq!(day_of_week(y, m, d), expected, "date {y}-{m:02}-{d:02}");
    }

    #[rstest]
    #[case(2023, 2, 29)]
    #[case(2024, 0, 1)]
    #[case(2023, 13, 22)]
    #[case(2025, 1, 0)]
    #[case(2024, 1, 32)]
    #[case(2023, 4, 31)]
    #[should_panic(expected = "invalid date")]
    fn test_day_of_week_invalid_date(#[case] y: i32, #[case] m: u8, #[case] d: u8) {
        day_of_week(y, m, d);
    }

    #[rstest]
    #[case(2023, 12, 0, 31)] // last Sunday of December 2023
    #[case(2023, 11, 0, 26)]
    #[case(2024, 2, 0, 25)] // leap February
    #[case(2023, 2, 0, 26)]
    #[case(2023, 12, 1, 25)]
    #[case(2023, 12, 5, 29)]
    #[case(2023, 12, 6, 30)]
    #[case(1999, 2, 4, 25)] // last Thursday of February 1999
    #[case(2024, 1, 5, 26)] // last Friday of January 2024
    fn test_last_dow(#[case] y: i32, #[case] m: u8, #[case] dow: u8, #[case] expected: u8) {
        assert_eq!(last_dow(y, m, dow), expected);
    }

    #[test]
    #[should_panic(expected = "invalid day of week")]
    fn test_last_dow_invalid() {
        last_dow(2023, 1, 7);
    }

    #[rstest]
    #[case(2023, 12, 5, 1, Some(1))] // first Friday of December 2023
    #[case(2023, 12, 0, 1, Some(3))]
    #[case(2023, 12, 0, 2, Some(10))]
    #[case(2023, 12, 0, 4, Some(24))]
    #[case(2023, 12, 0, 5, Some(31))] // December 2023 has five Sundays
    #[case(2023, 12, 1, 5, None)] // but only four Mondays
    #[case(2024, 1, 1, 1, Some(1))]
    #[case(2024, 1, 1, 5, Some(29))] // five Mondays in January 2024
    #[case(2024, 2, 1, 5, None)] // four in February
    #[case(2024, 4, 1, 5, Some(29))]
    #[case(2024, 3, 1, 1, Some(4))]
    #[case(2000, 2, 1, 4, Some(28))]
    fn test_nth_dow(#[case] y: i32, #[case] m: u8, #[case] dow: u8, #[case] n: u8, #[case] expected: Option<u8>) {
        assert_eq!(nth_dow(y, m, dow, n), expected);
    }

    #[rstest]
    #[case(7, 1)]
    #[case(0, 0)]
    #[case(0, 6)]
    #[should_panic(expected = "invalid day of week or occurrence number")]
    fn test_nth_dow_invalid(#[case] dow: u8, #[case] n: u8) {
        nth_dow(2023, 1, dow, n);
    }

    #[rstest]
    #[case(2024, 1, 31)] // January 2024 ends on Wednesday
    #[case(2024, 3, 29)] // March 2024 ends on Sunday
    #[case(2024, 8, 30)] // August 2024 ends on Saturday
    #[case(2024, 11, 29)] // November 2024 ends on Saturday
    #[case(2024, 2, 29)] // leap February ends on Thursday
    fn test_last_weekday(#[case] y: i32, #[case] m: u8, #[case] expected: u8) {
        assert_eq!(last_weekday(y, m), expected);
    }

    #[rstest]
    // regular weekdays stay put
    #[case(2024, 1, 1, 1)] // Monday
    #[case(2024, 1, 5, 5)] // Friday
    // weekends shift
    #[case(2024, 1, 6, 5)] // Saturday -> Friday
    #[case(2024, 1, 7, 8)] // Sunday -> Monday
    // month boundaries
    #[case(2024, 6, 1, 3)] // the first day is Saturday -> following Monday
    #[case(2024, 9, 1, 2)] // the first day is Sunday -> Monday
    #[case(2024, 3, 31, 29)] // last day is Sunday -> preceding Friday
    #[case(2024, 8, 31, 30)] // last day is Saturday -> Friday
    #[case(2024, 6, 29, 28)] // Saturday -> Friday
    #[case(2024, 6, 30, 28)] // month-end Sunday -> Friday
    #[case(2024, 2, 29, 29)] // Thursday stays
    fn test_nearest_weekday(#[case] y: i32, #[case] m: u8, #[case] d: u8, #[case] expected: u8) {
        assert_eq!(nearest_weekday(y, m, d), expected);
    }
}
