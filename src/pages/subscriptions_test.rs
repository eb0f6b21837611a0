use super::*;
use crate::net::types::PublicationRecord;

fn subscription(publication: Option<PublicationRecord>) -> SubscriptionRecord {
    SubscriptionRecord {
        id: 3,
        publication_id: 7,
        user_id: 1,
        start_date: "2024-03-05".to_owned(),
        end_date: "2025-03-05".to_owned(),
        status: "active".to_owned(),
        auto_renew: false,
        publication,
    }
}

#[test]
fn title_uses_expanded_publication_when_present() {
    let record = subscription(Some(PublicationRecord {
        id: 7,
        title: "Harbor Quarterly".to_owned(),
        kind: "magazine".to_owned(),
        publisher: None,
        frequency: None,
        description: None,
        cover_image_url: None,
        price_monthly: 10.0,
        price_yearly: 90.0,
        is_available: true,
    }));
    assert_eq!(subscription_title(&record), "Harbor Quarterly");
}

#[test]
fn title_falls_back_to_publication_id() {
    assert_eq!(subscription_title(&subscription(None)), "Publication #7");
}

#[test]
fn period_formats_both_dates() {
    assert_eq!(
        subscription_period(&subscription(None)),
        "March 5, 2024 – March 5, 2025"
    );
}
