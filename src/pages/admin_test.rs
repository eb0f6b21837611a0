use super::*;

#[test]
fn validate_new_publication_accepts_complete_input() {
    let publication =
        validate_new_publication(" Daily Ledger ", "newspaper", " Ledger Co ", "5", "50.00")
            .unwrap();
    assert_eq!(publication.title, "Daily Ledger");
    assert_eq!(publication.kind, "newspaper");
    assert_eq!(publication.publisher.as_deref(), Some("Ledger Co"));
    assert!((publication.price_monthly - 5.0).abs() < f64::EPSILON);
    assert!((publication.price_yearly - 50.0).abs() < f64::EPSILON);
}

#[test]
fn validate_new_publication_requires_title_and_kind() {
    assert_eq!(
        validate_new_publication("  ", "magazine", "", "5", "50"),
        Err("Title and type are required.")
    );
    assert_eq!(
        validate_new_publication("Daily Ledger", "", "", "5", "50"),
        Err("Title and type are required.")
    );
}

#[test]
fn validate_new_publication_rejects_bad_prices() {
    for (monthly, yearly) in [("", "50"), ("5", "abc"), ("-1", "50"), ("5", "-0.5")] {
        assert_eq!(
            validate_new_publication("Daily Ledger", "newspaper", "", monthly, yearly),
            Err("Enter valid prices.")
        );
    }
}

#[test]
fn validate_new_publication_drops_blank_publisher() {
    let publication =
        validate_new_publication("Daily Ledger", "newspaper", "   ", "5", "50").unwrap();
    assert_eq!(publication.publisher, None);
}
