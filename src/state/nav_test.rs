use super::*;

#[test]
fn default_page_is_home() {
    assert_eq!(Page::default(), Page::Home);
}

#[test]
fn all_lists_each_page_exactly_once() {
    let pages = Page::ALL;
    assert_eq!(pages.len(), 5);
    for page in [
        Page::Home,
        Page::Auth,
        Page::Subscriptions,
        Page::Admin,
        Page::Profile,
    ] {
        assert_eq!(pages.iter().filter(|p| **p == page).count(), 1);
    }
}

#[test]
fn signed_out_viewer_sees_home_and_auth_only() {
    let visible: Vec<Page> = Page::ALL
        .into_iter()
        .filter(|p| p.visible_to(false, false))
        .collect();
    assert_eq!(visible, vec![Page::Home, Page::Auth]);
}

#[test]
fn signed_in_viewer_sees_account_pages_but_not_auth() {
    let visible: Vec<Page> = Page::ALL
        .into_iter()
        .filter(|p| p.visible_to(true, false))
        .collect();
    assert_eq!(visible, vec![Page::Home, Page::Subscriptions, Page::Profile]);
}

#[test]
fn admin_viewer_sees_admin_page() {
    assert!(Page::Admin.visible_to(true, true));
    assert!(!Page::Admin.visible_to(true, false));
}

#[test]
fn labels_are_nonempty_and_distinct() {
    let labels: Vec<&str> = Page::ALL.iter().map(|p| p.label()).collect();
    for label in &labels {
        assert!(!label.is_empty());
    }
    let mut dedup = labels.clone();
    dedup.sort_unstable();
    dedup.dedup();
    assert_eq!(dedup.len(), labels.len());
}
