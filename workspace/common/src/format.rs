//! Display formatting for amounts, dates and status tokens.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use rusty_money::{Money, iso};

/// Currency used when settings do not override it.
pub const DEFAULT_CURRENCY: &str = "PHP";

const MINUTE: i64 = 60;
const HOUR: i64 = 60 * MINUTE;
const DAY: i64 = 24 * HOUR;
const MONTH: i64 = 30 * DAY;
const YEAR: i64 = 365 * DAY;

/// Formats `amount` in the given ISO 4217 currency, e.g. `₱1,250.50`.
/// The amount is shown with the currency's minor-unit digits regardless of
/// the scale it arrived with. Unknown codes fall back to `1250.50 XYZ`.
pub fn format_price(amount: Decimal, currency_code: &str) -> String {
    match iso::find(currency_code) {
        Some(currency) => {
            let mut amount = amount.round_dp(currency.exponent);
            amount.rescale(currency.exponent);
            Money::from_decimal(amount, currency).to_string()
        }
        None => {
            tracing::warn!(currency_code, "Unknown currency code, using plain formatting");
            format!("{:.2} {}", amount.round_dp(2), currency_code)
        }
    }
}

/// Human-readable distance between `ts` and `now`.
pub fn relative_time(ts: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let delta = now.signed_duration_since(ts).num_seconds();
    let future = delta < 0;
    let secs = delta.abs();

    let (count, unit) = match secs {
        s if s < MINUTE => return "just now".to_string(),
        s if s < HOUR => (s / MINUTE, "minute"),
        s if s < DAY => (s / HOUR, "hour"),
        s if s < MONTH => (s / DAY, "day"),
        s if s < YEAR => (s / MONTH, "month"),
        s => (s / YEAR, "year"),
    };

    match (unit, count, future) {
        ("day", 1, false) => "yesterday".to_string(),
        ("day", 1, true) => "tomorrow".to_string(),
        _ => {
            let plural = if count == 1 { "" } else { "s" };
            if future {
                format!("in {} {}{}", count, unit, plural)
            } else {
                format!("{} {}{} ago", count, unit, plural)
            }
        }
    }
}

/// Calendar date such as `Mon Jan 01 2024`.
pub fn absolute_date(ts: DateTime<Utc>) -> String {
    ts.format("%a %b %d %Y").to_string()
}

/// `ready_to_pickup` -> `Ready to pickup`.
pub fn sentence_case(token: &str) -> String {
    let words = token
        .split(|c: char| c == '_' || c == '-' || c.is_whitespace())
        .filter(|word| !word.is_empty())
        .map(|word| word.to_lowercase())
        .collect::<Vec<_>>()
        .join(" ");

    let mut chars = words.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    #[test]
    fn test_format_price_default_currency() {
        assert_eq!(format_price(Decimal::new(1505, 1), DEFAULT_CURRENCY), "₱150.50");
        assert_eq!(format_price(Decimal::new(7525, 2), DEFAULT_CURRENCY), "₱75.25");
        assert_eq!(format_price(Decimal::from(120000), DEFAULT_CURRENCY), "₱120,000.00");
    }

    #[test]
    fn test_format_price_pads_to_minor_unit() {
        assert_eq!(format_price(Decimal::from(150), DEFAULT_CURRENCY), "₱150.00");
        assert_eq!(format_price(Decimal::new(755, 1), DEFAULT_CURRENCY), "₱75.50");
        assert_eq!(format_price(Decimal::new(199999, 4), DEFAULT_CURRENCY), "₱20.00");
    }

    #[test]
    fn test_format_price_other_currency() {
        assert_eq!(format_price(Decimal::new(1999, 2), "USD"), "$19.99");
    }

    #[test]
    fn test_format_price_unknown_currency() {
        assert_eq!(format_price(Decimal::new(15, 1), "XYZ"), "1.50 XYZ");
    }

    #[test]
    fn test_relative_time_past() {
        let now = Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap();
        assert_eq!(relative_time(now - Duration::seconds(30), now), "just now");
        assert_eq!(relative_time(now - Duration::minutes(1), now), "1 minute ago");
        assert_eq!(relative_time(now - Duration::minutes(45), now), "45 minutes ago");
        assert_eq!(relative_time(now - Duration::hours(5), now), "5 hours ago");
        assert_eq!(relative_time(now - Duration::days(1), now), "yesterday");
        assert_eq!(relative_time(now - Duration::days(3), now), "3 days ago");
        assert_eq!(relative_time(now - Duration::days(65), now), "2 months ago");
        assert_eq!(relative_time(now - Duration::days(400), now), "1 year ago");
    }

    #[test]
    fn test_relative_time_future() {
        let now = Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap();
        assert_eq!(relative_time(now + Duration::days(1), now), "tomorrow");
        assert_eq!(relative_time(now + Duration::days(2), now), "in 2 days");
        assert_eq!(relative_time(now + Duration::hours(3), now), "in 3 hours");
    }

    #[test]
    fn test_absolute_date() {
        let ts = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(absolute_date(ts), "Mon Jan 01 2024");
    }

    #[test]
    fn test_sentence_case() {
        assert_eq!(sentence_case("completed"), "Completed");
        assert_eq!(sentence_case("CANCELED"), "Canceled");
        assert_eq!(sentence_case("ready_to_pickup"), "Ready to pickup");
        assert_eq!(sentence_case("Return & Refund"), "Return & refund");
        assert_eq!(sentence_case(""), "");
    }
}
