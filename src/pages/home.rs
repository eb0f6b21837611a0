//! Home page: the publication catalog plus the detail modal.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owns the type filter so it can mirror the value into the URL query
//! string. The filter is seeded from the URL once on mount; after that the
//! in-memory value is the single source of truth and every change is
//! written back out through `history.replaceState`.

use leptos::prelude::*;

use crate::components::publication_detail::PublicationDetail;
use crate::components::publications_list::PublicationsList;
use crate::net::types::PublicationRecord;
use crate::util::query;

#[component]
pub fn HomePage() -> impl IntoView {
    let filter = RwSignal::new(query::initial_filter());
    let selected = RwSignal::new(None::<PublicationRecord>);

    Effect::new(move || {
        let kind = filter.get();
        query::sync_filter_to_url(kind.as_deref());
    });

    let on_select = Callback::new(move |publication: PublicationRecord| {
        selected.set(Some(publication));
    });
    let on_close = Callback::new(move |()| selected.set(None));
    let on_subscribed = Callback::new(move |()| selected.set(None));

    view! {
        <div class="home-page">
            <div class="home-page__intro">
                <h1 class="home-page__title">"Discover Publications"</h1>
                <p class="home-page__subtitle">
                    "Browse and subscribe to your favorite magazines and newspapers"
                </p>
            </div>

            <PublicationsList filter on_select/>

            {move || {
                selected.get().map(|publication| {
                    view! {
                        <PublicationDetail publication on_close on_subscribed/>
                    }
                })
            }}
        </div>
    }
}
