//! Display formatting.
//!
//! Total functions: every formatter tolerates `None` (rendering `"-"`) and
//! never panics. The universe is NSE-listed, so currency renders in rupees
//! with Indian digit grouping and symbols carry a `.NS` exchange suffix
//! that is stripped for display.

use time::format_description;
use time::{Date, Month};

const PLACEHOLDER: &str = "-";

/// Exchange suffix on every symbol in the universe.
pub const EXCHANGE_SUFFIX: &str = ".NS";

/// Fixed-precision number with Indian thousand separators.
pub fn format_number(value: Option<f64>, decimals: usize) -> String {
    let Some(value) = value.filter(|v| v.is_finite()) else {
        return String::from(PLACEHOLDER);
    };

    let rendered = format!("{:.decimals$}", value.abs());
    let (int_part, frac_part) = match rendered.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (rendered.as_str(), None),
    };

    let mut out = String::new();
    if value.is_sign_negative() && value != 0.0 {
        out.push('-');
    }
    out.push_str(&group_indian(int_part));
    if let Some(frac_part) = frac_part {
        out.push('.');
        out.push_str(frac_part);
    }
    out
}

/// Rupee amount, two decimals.
pub fn format_currency(value: Option<f64>) -> String {
    match value {
        Some(_) => format!("\u{20b9}{}", format_number(value, 2)),
        None => String::from(PLACEHOLDER),
    }
}

/// Percentage with an explicit `+` for positive values. The negative sign
/// comes from the numeric literal itself.
pub fn format_percent(value: Option<f64>, decimals: usize) -> String {
    let Some(value) = value.filter(|v| v.is_finite()) else {
        return String::from(PLACEHOLDER);
    };
    let sign = if value > 0.0 { "+" } else { "" };
    format!("{sign}{value:.decimals$}%")
}

/// Volume scaled to B/M/K at 1e9/1e6/1e3, one decimal place. Zero or
/// missing renders the placeholder.
pub fn format_volume(value: Option<f64>) -> String {
    let Some(value) = value.filter(|v| v.is_finite() && *v != 0.0) else {
        return String::from(PLACEHOLDER);
    };

    if value >= 1e9 {
        format!("{:.1}B", value / 1e9)
    } else if value >= 1e6 {
        format!("{:.1}M", value / 1e6)
    } else if value >= 1e3 {
        format!("{:.1}K", value / 1e3)
    } else {
        format!("{value:.0}")
    }
}

/// Render an ISO `YYYY-MM-DD` date as `5 Jan 2024`. Unparseable input is
/// passed through unchanged.
pub fn format_date(iso: &str) -> String {
    let Ok(items) = format_description::parse("[year]-[month]-[day]") else {
        return iso.to_owned();
    };
    let Ok(date) = Date::parse(iso, &items) else {
        return iso.to_owned();
    };
    format!(
        "{} {} {}",
        date.day(),
        short_month(date.month()),
        date.year()
    )
}

/// Styling category for a signed change value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeDirection {
    Positive,
    Negative,
    Neutral,
}

impl ChangeDirection {
    pub fn classify(value: Option<f64>) -> Self {
        match value {
            Some(v) if v > 0.0 => Self::Positive,
            Some(v) if v < 0.0 => Self::Negative,
            _ => Self::Neutral,
        }
    }
}

/// Strip the exchange suffix for display: `TCS.NS` → `TCS`.
pub fn display_symbol(symbol: &str) -> &str {
    symbol.strip_suffix(EXCHANGE_SUFFIX).unwrap_or(symbol)
}

fn short_month(month: Month) -> &'static str {
    match month {
        Month::January => "Jan",
        Month::February => "Feb",
        Month::March => "Mar",
        Month::April => "Apr",
        Month::May => "May",
        Month::June => "Jun",
        Month::July => "Jul",
        Month::August => "Aug",
        Month::September => "Sep",
        Month::October => "Oct",
        Month::November => "Nov",
        Month::December => "Dec",
    }
}

/// Indian digit grouping: last three digits, then groups of two.
fn group_indian(digits: &str) -> String {
    let len = digits.len();
    if len <= 3 {
        return digits.to_owned();
    }

    let (head, tail) = digits.split_at(len - 3);
    let chars: Vec<char> = head.chars().collect();
    let mut groups: Vec<String> = Vec::new();
    let mut end = chars.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(chars[start..end].iter().collect());
        end = start;
    }
    groups.reverse();
    format!("{},{}", groups.join(","), tail)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_group_indian_style() {
        assert_eq!(format_number(Some(1234567.891), 2), "12,34,567.89");
        assert_eq!(format_number(Some(999.0), 0), "999");
        assert_eq!(format_number(Some(-45678.5), 1), "-45,678.5");
        assert_eq!(format_number(None, 2), "-");
    }

    #[test]
    fn currency_prefixes_rupee() {
        assert_eq!(format_currency(Some(2500.0)), "\u{20b9}2,500.00");
        assert_eq!(format_currency(None), "-");
    }

    #[test]
    fn percent_signs_positives_only() {
        assert_eq!(format_percent(Some(2.345), 2), "+2.35%");
        assert_eq!(format_percent(Some(-3.456), 2), "-3.46%");
        assert_eq!(format_percent(Some(0.0), 2), "0.00%");
        assert_eq!(format_percent(None, 2), "-");
    }

    #[test]
    fn volume_scales_by_suffix() {
        assert_eq!(format_volume(Some(2_500_000.0)), "2.5M");
        assert_eq!(format_volume(Some(1_200_000_000.0)), "1.2B");
        assert_eq!(format_volume(Some(8_400.0)), "8.4K");
        assert_eq!(format_volume(Some(512.0)), "512");
        assert_eq!(format_volume(Some(0.0)), "-");
        assert_eq!(format_volume(None), "-");
    }

    #[test]
    fn dates_render_day_month_year() {
        assert_eq!(format_date("2024-01-05"), "5 Jan 2024");
        assert_eq!(format_date("2023-12-31"), "31 Dec 2023");
        assert_eq!(format_date("not-a-date"), "not-a-date");
    }

    #[test]
    fn change_direction_classifies_sign() {
        assert_eq!(
            ChangeDirection::classify(Some(0.01)),
            ChangeDirection::Positive
        );
        assert_eq!(
            ChangeDirection::classify(Some(-0.01)),
            ChangeDirection::Negative
        );
        assert_eq!(ChangeDirection::classify(Some(0.0)), ChangeDirection::Neutral);
        assert_eq!(ChangeDirection::classify(None), ChangeDirection::Neutral);
    }

    #[test]
    fn symbol_suffix_is_stripped() {
        assert_eq!(display_symbol("TCS.NS"), "TCS");
        assert_eq!(display_symbol("AAPL"), "AAPL");
    }
}
