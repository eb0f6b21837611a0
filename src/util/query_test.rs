use super::*;

#[test]
fn type_param_reads_value_with_or_without_question_mark() {
    assert_eq!(type_param("?type=magazine"), Some("magazine".to_owned()));
    assert_eq!(type_param("type=magazine"), Some("magazine".to_owned()));
}

#[test]
fn type_param_ignores_other_parameters() {
    assert_eq!(
        type_param("?page=2&type=newspaper&sort=title"),
        Some("newspaper".to_owned())
    );
}

#[test]
fn type_param_absent_or_empty_is_none() {
    assert_eq!(type_param(""), None);
    assert_eq!(type_param("?page=2"), None);
    assert_eq!(type_param("?type="), None);
}

#[test]
fn type_param_decodes_percent_escapes_and_plus() {
    assert_eq!(
        type_param("?type=trade%20journal"),
        Some("trade journal".to_owned())
    );
    assert_eq!(
        type_param("?type=trade+journal"),
        Some("trade journal".to_owned())
    );
}

#[test]
fn type_param_passes_malformed_escapes_through() {
    assert_eq!(type_param("?type=100%zz"), Some("100%zz".to_owned()));
    assert_eq!(type_param("?type=100%"), Some("100%".to_owned()));
}

#[test]
fn search_for_filter_is_empty_for_all() {
    assert_eq!(search_for_filter(None), "");
    assert_eq!(search_for_filter(Some("")), "");
}

#[test]
fn search_for_filter_encodes_value() {
    assert_eq!(search_for_filter(Some("magazine")), "?type=magazine");
    assert_eq!(
        search_for_filter(Some("trade journal")),
        "?type=trade%20journal"
    );
}

#[test]
fn filter_round_trips_through_search_string() {
    let search = search_for_filter(Some("trade journal"));
    assert_eq!(type_param(&search), Some("trade journal".to_owned()));
}

#[test]
fn filter_round_trips_reserved_characters() {
    let search = search_for_filter(Some("arts/culture & more"));
    assert_eq!(search, "?type=arts%2Fculture%20%26%20more");
    assert_eq!(type_param(&search), Some("arts/culture & more".to_owned()));
}
