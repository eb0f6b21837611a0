//! URL query-string mirror for the publication-type filter.
//!
//! DESIGN
//! ======
//! The in-memory filter is the source of truth. Changing it rewrites the
//! `type` query parameter through `history.replaceState` so filtered views
//! are shareable; on first mount the filter is seeded from the URL once, and
//! the URL is never read again after that.

#[cfg(test)]
#[path = "query_test.rs"]
mod query_test;

/// Extract the `type` parameter from a `location.search` string.
///
/// Accepts the string with or without the leading `?`. Returns `None` when
/// the parameter is absent or empty.
#[must_use]
pub fn type_param(search: &str) -> Option<String> {
    let search = search.strip_prefix('?').unwrap_or(search);
    for pair in search.split('&') {
        let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
        if key == "type" && !value.is_empty() {
            return Some(decode_component(value));
        }
    }
    None
}

/// Build the search string for a filter value: empty for "All", else
/// `?type=<encoded>`.
#[must_use]
pub fn search_for_filter(kind: Option<&str>) -> String {
    match kind {
        Some(kind) if !kind.is_empty() => format!("?type={}", urlencoding::encode(kind)),
        _ => String::new(),
    }
}

/// Decode one query-string value. Query strings encode spaces as `+`, which
/// `urlencoding` leaves alone, so those are mapped first; a value that is
/// not valid UTF-8 after decoding is kept as typed.
fn decode_component(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    match urlencoding::decode(&spaced) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => spaced,
    }
}

/// Read the initial filter from the current URL. Browser-only; returns
/// `None` on the server.
#[must_use]
pub fn initial_filter() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let search = web_sys::window()?.location().search().ok()?;
        type_param(&search)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Rewrite the URL's query string for the given filter without adding a
/// history entry. Browser-only no-op on the server.
pub fn sync_filter_to_url(kind: Option<&str>) {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return;
        };
        let Ok(path) = window.location().pathname() else {
            return;
        };
        let url = format!("{path}{}", search_for_filter(kind));
        if let Ok(history) = window.history() {
            let _ = history.replace_state_with_url(
                &wasm_bindgen::JsValue::NULL,
                "",
                Some(&url),
            );
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = kind;
    }
}
