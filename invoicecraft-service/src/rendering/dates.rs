//! Long-form date display, e.g. "April 29th, 2023".

use chrono::{Datelike, NaiveDate};

/// Format a date in the long human-readable form; absent dates become the
/// empty string rather than any error text.
pub fn format_long_date(date: Option<NaiveDate>) -> String {
    match date {
        Some(d) => format!(
            "{} {}{}, {}",
            month_name(d.month()),
            d.day(),
            ordinal_suffix(d.day()),
            d.year()
        ),
        None => String::new(),
    }
}

fn month_name(month: u32) -> &'static str {
    match month {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        _ => "December",
    }
}

fn ordinal_suffix(day: u32) -> &'static str {
    match day {
        11..=13 => "th",
        _ => match day % 10 {
            1 => "st",
            2 => "nd",
            3 => "rd",
            _ => "th",
        },
    }
}
