use super::*;

#[test]
fn accepts_complete_positive_details() {
    let details = PaymentDetails::from_params(Some("p-1"), Some("Starter"), Some("49.5")).unwrap();
    assert_eq!(details.package_id, "p-1");
    assert_eq!(details.package_name, "Starter");
    assert!((details.amount - 49.5).abs() < f64::EPSILON);
}

#[test]
fn missing_or_blank_params_are_reported() {
    assert_eq!(
        PaymentDetails::from_params(None, Some("Starter"), Some("10")),
        Err("paymentDetailsMissing")
    );
    assert_eq!(
        PaymentDetails::from_params(Some("p-1"), Some("  "), Some("10")),
        Err("paymentDetailsMissing")
    );
}

#[test]
fn amount_must_be_a_positive_number() {
    assert_eq!(
        PaymentDetails::from_params(Some("p-1"), Some("Starter"), Some("0")),
        Err("paymentDetailsInvalid")
    );
    assert_eq!(
        PaymentDetails::from_params(Some("p-1"), Some("Starter"), Some("-3")),
        Err("paymentDetailsInvalid")
    );
    assert_eq!(
        PaymentDetails::from_params(Some("p-1"), Some("Starter"), Some("ten")),
        Err("paymentDetailsInvalid")
    );
}
