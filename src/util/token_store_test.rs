use super::*;

// Without a browser there is no localStorage, so persistence degrades to
// no-ops and nothing panics.

#[test]
fn load_is_empty_outside_the_browser() {
    assert_eq!(load(), None);
}

#[test]
fn save_and_clear_are_no_ops_outside_the_browser() {
    save("tok-1");
    assert_eq!(load(), None);
    clear();
    assert_eq!(load(), None);
}
