//! Publication catalog list with type filtering.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reloads on mount and on every filter change, replacing the list
//! wholesale. The filter button set is derived from the loaded page of
//! results, not a taxonomy endpoint, so it can change as data reloads.

#[cfg(test)]
#[path = "publications_list_test.rs"]
mod publications_list_test;

use leptos::prelude::*;

use crate::components::publication_card::PublicationCard;
use crate::net::types::PublicationRecord;

/// Message shown when the list request fails for any reason.
pub const LOAD_FAILED_MESSAGE: &str =
    "Failed to load publications, you may have to register or sign in";

/// Distinct publication kinds in first-seen order, for the filter row.
/// "All" is rendered separately and always first.
fn filter_kinds(publications: &[PublicationRecord]) -> Vec<String> {
    let mut kinds: Vec<String> = Vec::new();
    for publication in publications {
        if !kinds.iter().any(|k| *k == publication.kind) {
            kinds.push(publication.kind.clone());
        }
    }
    kinds
}

/// Publication list: filter row, card grid, loading/error/empty states.
///
/// `filter` is owned by the parent so it can mirror the value into the URL;
/// `None` means "All". Selecting a card reports the publication upward.
#[component]
pub fn PublicationsList(
    filter: RwSignal<Option<String>>,
    on_select: Callback<PublicationRecord>,
) -> impl IntoView {
    let publications = RwSignal::new(Vec::<PublicationRecord>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(String::new());
    // Bumped by the Retry button to re-issue the identical request.
    let load_seq = RwSignal::new(0u32);

    Effect::new(move || {
        let kind = filter.get();
        load_seq.track();
        loading.set(true);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::list_publications(kind.as_deref()).await {
                Ok(list) => {
                    publications.set(list);
                    error.set(String::new());
                }
                Err(e) => {
                    log::error!("publication list load failed: {e}");
                    error.set(LOAD_FAILED_MESSAGE.to_owned());
                }
            }
            loading.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = kind;
        }
    });

    let kinds = move || filter_kinds(&publications.get());
    let on_retry = move |_| load_seq.update(|n| *n += 1);

    view! {
        <Show
            when=move || !loading.get()
            fallback=|| {
                view! {
                    <div class="publications__loading">
                        <div class="spinner"></div>
                    </div>
                }
            }
        >
            <Show
                when=move || error.get().is_empty()
                fallback=move || {
                    view! {
                        <div class="publications__error">
                            <p class="publications__error-text">{move || error.get()}</p>
                            <button class="btn btn--primary" on:click=on_retry>"Retry"</button>
                        </div>
                    }
                }
            >
                <div class="publications">
                    <div class="publications__filters">
                        <span class="publications__filters-label">"Filter by type:"</span>
                        <button
                            class="filter-chip"
                            class:filter-chip--active=move || filter.get().is_none()
                            on:click=move |_| filter.set(None)
                        >
                            "All"
                        </button>
                        {move || {
                            kinds()
                                .into_iter()
                                .map(|kind| {
                                    let value = kind.clone();
                                    view! {
                                        <button
                                            class="filter-chip"
                                            class:filter-chip--active=move || {
                                                filter.get().as_deref() == Some(value.as_str())
                                            }
                                            on:click={
                                                let value = kind.clone();
                                                move |_| filter.set(Some(value.clone()))
                                            }
                                        >
                                            {kind.clone()}
                                        </button>
                                    }
                                })
                                .collect_view()
                        }}
                    </div>

                    <Show
                        when=move || !publications.get().is_empty()
                        fallback=|| {
                            view! {
                                <p class="publications__empty">"No publications found"</p>
                            }
                        }
                    >
                        <div class="publications__grid">
                            {move || {
                                publications
                                    .get()
                                    .into_iter()
                                    .map(|publication| {
                                        view! {
                                            <PublicationCard publication on_select/>
                                        }
                                    })
                                    .collect_view()
                            }}
                        </div>
                    </Show>
                </div>
            </Show>
        </Show>
    }
}
