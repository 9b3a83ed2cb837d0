use super::*;

#[test]
fn formats_rfc3339_dates() {
    assert_eq!(format_date("2024-05-01T10:20:30Z"), "01.05.2024");
    assert_eq!(format_datetime("2024-05-01T10:20:30+00:00"), "01.05.2024 10:20");
}

#[test]
fn formats_naive_timestamps_with_fractions() {
    assert_eq!(format_date("2024-12-31T23:59:59.1234567"), "31.12.2024");
    assert_eq!(format_datetime("2024-12-31T08:05:00"), "31.12.2024 08:05");
    assert_eq!(format_date("2024-02-29"), "29.02.2024");
}

#[test]
fn unparseable_dates_pass_through() {
    assert_eq!(format_date("yesterday"), "yesterday");
    assert_eq!(format_datetime(""), "");
}

#[test]
fn prices_drop_zero_decimals() {
    assert_eq!(format_price(50.0), "50 AZN");
    assert_eq!(format_price(49.9), "49.90 AZN");
    assert_eq!(format_price(0.0), "0 AZN");
}

#[test]
fn clock_formats_minutes_and_seconds() {
    assert_eq!(format_clock(0.0), "0:00");
    assert_eq!(format_clock(65.7), "1:05");
    assert_eq!(format_clock(f64::NAN), "0:00");
}
