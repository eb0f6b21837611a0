//! Display formatting helpers for prices and dates.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use time::macros::format_description;

/// Format a price with a dollar sign and two decimal places.
#[must_use]
pub fn price(value: f64) -> String {
    format!("${value:.2}")
}

/// Percentage saved by the yearly price over twelve monthly payments,
/// rounded to whole percent. `None` when twelve monthly payments are not a
/// positive finite amount, in which case the badge is suppressed.
#[must_use]
pub fn savings_percent(price_monthly: f64, price_yearly: f64) -> Option<i64> {
    let annual_at_monthly = price_monthly * 12.0;
    if !annual_at_monthly.is_finite() || annual_at_monthly <= 0.0 || !price_yearly.is_finite() {
        return None;
    }
    let percent = (annual_at_monthly - price_yearly) / annual_at_monthly * 100.0;
    #[allow(clippy::cast_possible_truncation)]
    Some(percent.round() as i64)
}

/// Render an ISO 8601 timestamp's date part as `"Month D, YYYY"`.
/// Input that does not start with a `YYYY-MM-DD` date is echoed back
/// unchanged so a surprising backend value still renders something.
#[must_use]
pub fn member_since(iso: &str) -> String {
    let date_part = iso.get(..10).unwrap_or(iso);
    let format = format_description!("[year]-[month]-[day]");
    time::Date::parse(date_part, format).map_or_else(
        |_| iso.to_owned(),
        |date| format!("{} {}, {}", date.month(), date.day(), date.year()),
    )
}
