use super::*;

fn publication(id: i64, kind: &str) -> PublicationRecord {
    PublicationRecord {
        id,
        title: format!("Publication {id}"),
        kind: kind.to_owned(),
        publisher: None,
        frequency: None,
        description: None,
        cover_image_url: None,
        price_monthly: 5.0,
        price_yearly: 50.0,
        is_available: true,
    }
}

#[test]
fn filter_kinds_deduplicates_in_first_seen_order() {
    let list = vec![
        publication(1, "magazine"),
        publication(2, "newspaper"),
        publication(3, "magazine"),
        publication(4, "newspaper"),
    ];
    assert_eq!(filter_kinds(&list), vec!["magazine", "newspaper"]);
}

#[test]
fn filter_kinds_of_empty_list_is_empty() {
    assert!(filter_kinds(&[]).is_empty());
}

#[test]
fn filter_kinds_preserves_single_kind() {
    let list = vec![publication(1, "newspaper")];
    assert_eq!(filter_kinds(&list), vec!["newspaper"]);
}

#[test]
fn load_failed_message_matches_contract() {
    assert_eq!(
        LOAD_FAILED_MESSAGE,
        "Failed to load publications, you may have to register or sign in"
    );
}
