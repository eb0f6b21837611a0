//! Admin page: publication management for the admin role.
//!
//! SYSTEM CONTEXT
//! ==============
//! Lists every publication including unavailable ones, flips availability,
//! and creates new entries. Role enforcement here is cosmetic; the backend
//! checks the token on every call.

#[cfg(test)]
#[path = "admin_test.rs"]
mod admin_test;

use leptos::prelude::*;

use crate::net::types::{NewPublication, PublicationRecord};
use crate::state::session::SessionState;
use crate::util::format;

#[cfg(feature = "hydrate")]
const LOAD_FAILED_MESSAGE: &str = "Failed to load publications";

/// Validate the create-publication form. Prices must parse as non-negative
/// numbers; optional fields are dropped when blank.
fn validate_new_publication(
    title: &str,
    kind: &str,
    publisher: &str,
    price_monthly: &str,
    price_yearly: &str,
) -> Result<NewPublication, &'static str> {
    let title = title.trim();
    let kind = kind.trim();
    if title.is_empty() || kind.is_empty() {
        return Err("Title and type are required.");
    }
    let parse = |raw: &str| -> Option<f64> {
        let value: f64 = raw.trim().parse().ok()?;
        (value.is_finite() && value >= 0.0).then_some(value)
    };
    let (Some(price_monthly), Some(price_yearly)) = (parse(price_monthly), parse(price_yearly))
    else {
        return Err("Enter valid prices.");
    };
    let publisher = publisher.trim();
    Ok(NewPublication {
        title: title.to_owned(),
        kind: kind.to_owned(),
        publisher: (!publisher.is_empty()).then(|| publisher.to_owned()),
        frequency: None,
        description: None,
        price_monthly,
        price_yearly,
    })
}

#[component]
pub fn AdminPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    let publications = RwSignal::new(Vec::<PublicationRecord>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(String::new());
    let load_seq = RwSignal::new(0u32);

    // Create form fields.
    let title = RwSignal::new(String::new());
    let kind = RwSignal::new("magazine".to_owned());
    let publisher = RwSignal::new(String::new());
    let price_monthly = RwSignal::new(String::new());
    let price_yearly = RwSignal::new(String::new());
    let form_error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    Effect::new(move || {
        load_seq.track();
        let state = session.get();
        let Some(token) = state.token.clone() else {
            loading.set(false);
            return;
        };
        if !state.is_admin() {
            loading.set(false);
            return;
        }
        loading.set(true);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::list_all_publications(&token).await {
                Ok(list) => {
                    publications.set(list);
                    error.set(String::new());
                }
                Err(e) => {
                    log::error!("admin publication load failed: {e}");
                    error.set(LOAD_FAILED_MESSAGE.to_owned());
                }
            }
            loading.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = token;
        }
    });

    let on_retry = move |_| load_seq.update(|n| *n += 1);

    let on_toggle = move |id: i64, next: bool| {
        let Some(token) = session.get_untracked().token else {
            return;
        };
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::set_publication_availability(&token, id, next).await {
                Ok(updated) => publications.update(|list| {
                    if let Some(slot) = list.iter_mut().find(|p| p.id == id) {
                        *slot = updated;
                    }
                }),
                Err(e) => error.set(e.to_string()),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (token, id, next);
        }
    };

    let on_create = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let Some(token) = session.get_untracked().token else {
            return;
        };
        let publication = match validate_new_publication(
            &title.get(),
            &kind.get(),
            &publisher.get(),
            &price_monthly.get(),
            &price_yearly.get(),
        ) {
            Ok(publication) => publication,
            Err(message) => {
                form_error.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        form_error.set(String::new());
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::create_publication(&token, &publication).await {
                Ok(_) => {
                    title.set(String::new());
                    publisher.set(String::new());
                    price_monthly.set(String::new());
                    price_yearly.set(String::new());
                    load_seq.update(|n| *n += 1);
                }
                Err(e) => form_error.set(e.to_string()),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (token, publication);
        }
    };

    view! {
        <div class="admin-page">
            <h1 class="admin-page__title">"Publication Management"</h1>

            <Show
                when=move || session.get().is_admin()
                fallback=|| view! { <p class="admin-page__hint">"Admins only"</p> }
            >
                <form class="admin-form" on:submit=on_create>
                    <h2 class="admin-form__heading">"New publication"</h2>
                    <Show when=move || !form_error.get().is_empty()>
                        <div class="message message--error">{move || form_error.get()}</div>
                    </Show>
                    <input
                        class="admin-form__input"
                        type="text"
                        placeholder="Title"
                        prop:value=move || title.get()
                        on:input=move |ev| title.set(event_target_value(&ev))
                    />
                    <select
                        class="admin-form__input"
                        prop:value=move || kind.get()
                        on:change=move |ev| kind.set(event_target_value(&ev))
                    >
                        <option value="magazine">"magazine"</option>
                        <option value="newspaper">"newspaper"</option>
                    </select>
                    <input
                        class="admin-form__input"
                        type="text"
                        placeholder="Publisher (optional)"
                        prop:value=move || publisher.get()
                        on:input=move |ev| publisher.set(event_target_value(&ev))
                    />
                    <input
                        class="admin-form__input"
                        type="text"
                        placeholder="Monthly price"
                        prop:value=move || price_monthly.get()
                        on:input=move |ev| price_monthly.set(event_target_value(&ev))
                    />
                    <input
                        class="admin-form__input"
                        type="text"
                        placeholder="Yearly price"
                        prop:value=move || price_yearly.get()
                        on:input=move |ev| price_yearly.set(event_target_value(&ev))
                    />
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Creating..." } else { "Create" }}
                    </button>
                </form>

                <Show
                    when=move || !loading.get()
                    fallback=|| view! { <div class="spinner"></div> }
                >
                    <Show
                        when=move || error.get().is_empty()
                        fallback=move || {
                            view! {
                                <div class="message message--error">
                                    <p>{move || error.get()}</p>
                                    <button class="btn btn--primary" on:click=on_retry>
                                        "Retry"
                                    </button>
                                </div>
                            }
                        }
                    >
                        <table class="admin-table">
                            <thead>
                                <tr>
                                    <th>"Title"</th>
                                    <th>"Type"</th>
                                    <th>"Monthly"</th>
                                    <th>"Yearly"</th>
                                    <th>"Available"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {move || {
                                    publications
                                        .get()
                                        .into_iter()
                                        .map(|publication| {
                                            let id = publication.id;
                                            let next = !publication.is_available;
                                            view! {
                                                <tr class="admin-table__row">
                                                    <td>{publication.title.clone()}</td>
                                                    <td>{publication.kind.clone()}</td>
                                                    <td>{format::price(publication.price_monthly)}</td>
                                                    <td>{format::price(publication.price_yearly)}</td>
                                                    <td>
                                                        <button
                                                            class="btn"
                                                            class:btn--danger=!publication.is_available
                                                            on:click=move |_| on_toggle(id, next)
                                                        >
                                                            {if publication.is_available {
                                                                "Available"
                                                            } else {
                                                                "Unavailable"
                                                            }}
                                                        </button>
                                                    </td>
                                                </tr>
                                            }
                                        })
                                        .collect_view()
                                }}
                            </tbody>
                        </table>
                    </Show>
                </Show>
            </Show>
        </div>
    }
}
