use super::*;

#[test]
fn price_renders_two_decimal_places() {
    assert_eq!(price(10.0), "$10.00");
    assert_eq!(price(4.5), "$4.50");
    assert_eq!(price(0.0), "$0.00");
}

#[test]
fn savings_percent_matches_catalog_example() {
    // 12 * 10.00 = 120.00 against 90.00 yearly saves 25%.
    assert_eq!(savings_percent(10.0, 90.0), Some(25));
}

#[test]
fn savings_percent_rounds_to_whole_percent() {
    assert_eq!(savings_percent(9.99, 95.0), Some(21));
    assert_eq!(savings_percent(3.0, 36.0), Some(0));
}

#[test]
fn savings_percent_can_be_negative() {
    // A yearly price above twelve monthly payments is a markup, not a saving.
    assert_eq!(savings_percent(5.0, 72.0), Some(-20));
}

#[test]
fn savings_percent_suppressed_without_positive_monthly_price() {
    assert_eq!(savings_percent(0.0, 90.0), None);
    assert_eq!(savings_percent(-1.0, 90.0), None);
    assert_eq!(savings_percent(f64::NAN, 90.0), None);
    assert_eq!(savings_percent(10.0, f64::INFINITY), None);
}

#[test]
fn member_since_formats_date_part() {
    assert_eq!(member_since("2024-03-05T09:00:00Z"), "March 5, 2024");
    assert_eq!(member_since("2023-12-31"), "December 31, 2023");
}

#[test]
fn member_since_echoes_unparseable_input() {
    assert_eq!(member_since("yesterday"), "yesterday");
    assert_eq!(member_since("2024-13-01T00:00:00Z"), "2024-13-01T00:00:00Z");
    assert_eq!(member_since(""), "");
}

#[test]
fn member_since_spells_out_every_month() {
    assert_eq!(member_since("2024-01-15"), "January 15, 2024");
    assert_eq!(member_since("2024-09-01T00:00:00Z"), "September 1, 2024");
}
