//! Field rules shared by the animal and car validators.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

pub const MAX_TEXT_LEN: usize = 50;
pub const MIN_CAR_YEAR: i32 = 1886;
pub const MAX_CAR_YEAR: i32 = 2023;

static LETTERS: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z ]+$").expect("static regex"));
static ALNUM: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z0-9 ]+$").expect("static regex"));

fn within_len(value: &str) -> bool {
    !value.trim().is_empty() && value.chars().count() <= MAX_TEXT_LEN
}

/// Letters and spaces, not blank.
pub fn is_letters(value: &str) -> bool {
    within_len(value) && LETTERS.is_match(value)
}

/// Letters, digits and spaces, not blank.
pub fn is_alphanumeric(value: &str) -> bool {
    within_len(value) && ALNUM.is_match(value)
}

pub fn is_car_year(year: i32) -> bool {
    (MIN_CAR_YEAR..=MAX_CAR_YEAR).contains(&year)
}

/// JSON string accepted by `check`.
pub fn checked_text(value: Option<Value>, check: fn(&str) -> bool) -> Option<String> {
    match value {
        Some(Value::String(s)) if check(&s) => Some(s),
        _ => None,
    }
}

/// JSON integer that fits in an `i64`; floats, strings and booleans are not integers.
pub fn json_integer(value: Option<&Value>) -> Option<i64> {
    value.and_then(Value::as_i64)
}
