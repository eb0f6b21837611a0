use super::*;

fn sample_publication() -> PublicationRecord {
    PublicationRecord {
        id: 7,
        title: "Harbor Quarterly".to_owned(),
        kind: "magazine".to_owned(),
        publisher: Some("Harbor Press".to_owned()),
        frequency: Some("Quarterly".to_owned()),
        description: None,
        cover_image_url: None,
        price_monthly: 10.0,
        price_yearly: 90.0,
        is_available: true,
    }
}

#[test]
fn selected_price_picks_monthly_for_one_month() {
    let publication = sample_publication();
    let price = selected_price(publication.price_monthly, publication.price_yearly, 1);
    assert!((price - 10.0).abs() < f64::EPSILON);
}

#[test]
fn selected_price_picks_yearly_for_twelve_months() {
    let publication = sample_publication();
    let price = selected_price(publication.price_monthly, publication.price_yearly, 12);
    assert!((price - 90.0).abs() < f64::EPSILON);
}

#[test]
fn build_subscription_request_carries_all_fields() {
    let request = build_subscription_request(7, 12, true);
    assert_eq!(
        request,
        SubscriptionRequest {
            publication_id: 7,
            duration_months: 12,
            auto_renew: true,
        }
    );
}

#[test]
fn structured_failure_surfaces_server_message() {
    let error = ApiError::Api {
        status: 400,
        message: "Already subscribed to this publication".to_owned(),
    };
    assert_eq!(
        subscribe_error_message(&error),
        "Already subscribed to this publication"
    );
}

#[test]
fn transport_failure_gets_generic_message() {
    let error = ApiError::Http("connection refused".to_owned());
    assert_eq!(subscribe_error_message(&error), "Failed to create subscription");

    let error = ApiError::Decode("expected value".to_owned());
    assert_eq!(subscribe_error_message(&error), "Failed to create subscription");
}

#[test]
fn login_required_message_matches_contract() {
    assert_eq!(LOGIN_REQUIRED_MESSAGE, "Please login to subscribe");
}
