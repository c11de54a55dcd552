//! Delivery date extraction from free-form shipping text.
//!
//! Shipping lines read like "Order within 6 hours and have it Tuesday 5th
//! Jul 2022". The date is found by ranking keyphrases (RAKE) and trying each
//! as a date, best first; if none parses, each token is tried left to right.

use chrono::{Datelike, Days, Local, NaiveDate, Weekday};

use crate::patterns::ORDINAL_SUFFIX;
use crate::text::{rake, tokenize};

/// Output format of parsed dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Formats tried against a phrase that carries a year.
const FULL_DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%Y.%m.%d",
    "%m/%d/%Y",
    "%d-%m-%Y",
    "%d.%m.%Y",
    "%d %b %Y",
    "%d %B %Y",
    "%b %d %Y",
    "%B %d %Y",
];

/// Formats tried after appending the reference year to a year-less phrase.
const YEARLESS_FORMATS: &[&str] = &["%d %b %Y", "%d %B %Y", "%b %d %Y", "%B %d %Y"];

/// Extract the delivery date from shipping text, relative to today's local date.
///
/// Returns `YYYY-MM-DD`, or an empty string when nothing parses.
#[must_use]
pub fn format_delivery_date(text: Option<&str>) -> String {
    format_delivery_date_on(text, Local::now().date_naive())
}

/// [`format_delivery_date`] with an explicit reference date for relative
/// phrases such as "tomorrow" or a bare weekday.
#[must_use]
pub fn format_delivery_date_on(text: Option<&str>, today: NaiveDate) -> String {
    let Some(text) = text.map(str::trim).filter(|t| !t.is_empty()) else {
        return String::new();
    };

    let tokens = tokenize(text);

    let from_phrases = rake::phrases(&tokens)
        .iter()
        .find_map(|phrase| parse_date_phrase(phrase, today));

    from_phrases
        .or_else(|| tokens.iter().find_map(|token| parse_date_phrase(token, today)))
        .map(|date| date.format(DATE_FORMAT).to_string())
        .unwrap_or_default()
}

/// Permissive parse of a short phrase as a calendar date.
///
/// Accepts ISO dates, slash dates (month first), dash and dot dates (day
/// first), day-month and month-day forms with optional ordinals and weekday
/// names, `today`, `tomorrow`, and a bare weekday (its next occurrence,
/// today included). The whole phrase must be a date: "delivers 2022-07-03"
/// does not parse, "2022-07-03" does.
#[must_use]
pub fn parse_date_phrase(phrase: &str, today: NaiveDate) -> Option<NaiveDate> {
    let cleaned = ORDINAL_SUFFIX
        .replace_all(&phrase.to_lowercase(), "$1")
        .replace(',', " ");
    let words: Vec<&str> = cleaned.split_whitespace().collect();

    match words.as_slice() {
        [] => return None,
        ["today"] => return Some(today),
        ["tomorrow"] => return today.checked_add_days(Days::new(1)),
        [word] => {
            if let Some(weekday) = parse_weekday(word) {
                return Some(next_weekday(today, weekday));
            }
        }
        _ => {}
    }

    let remaining: Vec<&str> = words
        .iter()
        .copied()
        .filter(|w| parse_weekday(w).is_none())
        .collect();
    if remaining.is_empty() {
        return None;
    }
    let candidate = remaining.join(" ");

    if let Some(date) = FULL_DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(&candidate, fmt).ok())
    {
        return Some(date);
    }

    // "5 jul" style: assume the reference year
    if remaining.len() == 2 && remaining.iter().any(|w| w.chars().all(char::is_alphabetic)) {
        let with_year = format!("{candidate} {}", today.year());
        return YEARLESS_FORMATS
            .iter()
            .find_map(|fmt| NaiveDate::parse_from_str(&with_year, fmt).ok());
    }

    None
}

fn parse_weekday(word: &str) -> Option<Weekday> {
    let weekday = match word.trim_end_matches('.') {
        "monday" | "mon" => Weekday::Mon,
        "tuesday" | "tue" | "tues" => Weekday::Tue,
        "wednesday" | "wed" => Weekday::Wed,
        "thursday" | "thu" | "thur" | "thurs" => Weekday::Thu,
        "friday" | "fri" => Weekday::Fri,
        "saturday" | "sat" => Weekday::Sat,
        "sunday" | "sun" => Weekday::Sun,
        _ => return None,
    };
    Some(weekday)
}

fn next_weekday(today: NaiveDate, weekday: Weekday) -> NaiveDate {
    let ahead = (7 + weekday.num_days_from_monday() - today.weekday().num_days_from_monday()) % 7;
    today + Days::new(u64::from(ahead))
}
