use super::*;

#[test]
fn publications_url_without_filter_has_no_query() {
    assert_eq!(publications_url(None), "/api/publications");
    assert_eq!(publications_url(Some("")), "/api/publications");
}

#[test]
fn publications_url_with_filter_sets_type_param() {
    assert_eq!(
        publications_url(Some("magazine")),
        "/api/publications?type=magazine"
    );
}

#[test]
fn admin_publications_url_includes_unavailable() {
    assert_eq!(
        admin_publications_url(),
        "/api/publications?include_unavailable=true"
    );
}

#[test]
fn record_urls_embed_ids() {
    assert_eq!(publication_url(42), "/api/publications/42");
    assert_eq!(subscription_url(7), "/api/subscriptions/7");
}

#[test]
fn bearer_prefixes_token() {
    assert_eq!(bearer("tok-123"), "Bearer tok-123");
}
