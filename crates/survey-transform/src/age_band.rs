//! Decade-bucket derivation from a birth-date string.

use chrono::{Datelike, NaiveDate};

/// Accepted birth-date layouts, tried in order. chrono's numeric fields
/// accept unpadded months and days, so `1990/3/5` parses under the first
/// layout.
const DATE_LAYOUTS: [&str; 2] = ["%Y/%m/%d", "%Y-%m-%d"];

/// Convert a birth-date string into a decade-bucket label relative to
/// `as_of`.
///
/// Inputs that cannot be read as a date, including the empty string, yield an
/// empty label; the absence of a computable age band is a valid outcome, not
/// an error, so this function never fails.
pub fn age_band(birth_date: &str, as_of: NaiveDate) -> String {
    let Some(birth) = parse_birth_date(birth_date) else {
        return String::new();
    };
    let mut age = as_of.year() - birth.year();
    // Birthday not yet reached this year.
    if (as_of.month(), as_of.day()) < (birth.month(), birth.day()) {
        age -= 1;
    }
    if age < 20 {
        "10s".to_string()
    } else if age >= 70 {
        "70+".to_string()
    } else {
        format!("{}s", age / 10 * 10)
    }
}

fn parse_birth_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    for layout in DATE_LAYOUTS {
        if let Ok(date) = NaiveDate::parse_from_str(value, layout) {
            return Some(date);
        }
    }
    // Last resort: exactly three numeric components in any `/`/`-` mix.
    let parts: Vec<&str> = value.split(['/', '-']).collect();
    if parts.len() != 3 {
        return None;
    }
    let year = parts[0].trim().parse().ok()?;
    let month = parts[1].trim().parse().ok()?;
    let day = parts[2].trim().parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}
