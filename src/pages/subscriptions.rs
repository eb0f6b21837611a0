//! Subscriptions page: the signed-in user's subscriptions with cancel.

#[cfg(test)]
#[path = "subscriptions_test.rs"]
mod subscriptions_test;

use leptos::prelude::*;

use crate::net::types::SubscriptionRecord;
use crate::state::session::SessionState;
use crate::util::format;

#[cfg(feature = "hydrate")]
const LOAD_FAILED_MESSAGE: &str = "Failed to load subscriptions";

/// Title line for a subscription row: the expanded publication title when
/// the endpoint includes it, else the bare publication id.
fn subscription_title(subscription: &SubscriptionRecord) -> String {
    subscription.publication.as_ref().map_or_else(
        || format!("Publication #{}", subscription.publication_id),
        |p| p.title.clone(),
    )
}

/// Period line: `"March 5, 2024 – March 5, 2025"`.
fn subscription_period(subscription: &SubscriptionRecord) -> String {
    format!(
        "{} – {}",
        format::member_since(&subscription.start_date),
        format::member_since(&subscription.end_date)
    )
}

#[component]
pub fn SubscriptionsPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    let subscriptions = RwSignal::new(Vec::<SubscriptionRecord>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(String::new());
    let load_seq = RwSignal::new(0u32);

    Effect::new(move || {
        load_seq.track();
        let Some(token) = session.get().token else {
            loading.set(false);
            return;
        };
        loading.set(true);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::list_subscriptions(&token).await {
                Ok(list) => {
                    subscriptions.set(list);
                    error.set(String::new());
                }
                Err(e) => {
                    log::error!("subscription list load failed: {e}");
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

    let on_cancel = move |id: i64| {
        let Some(token) = session.get_untracked().token else {
            return;
        };
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::cancel_subscription(&token, id).await {
                Ok(()) => load_seq.update(|n| *n += 1),
                Err(e) => error.set(e.to_string()),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (token, id);
        }
    };

    view! {
        <div class="subscriptions-page">
            <h1 class="subscriptions-page__title">"My Subscriptions"</h1>

            <Show
                when=move || session.get().is_authenticated()
                fallback=|| {
                    view! {
                        <p class="subscriptions-page__hint">
                            "Please login to view your subscriptions"
                        </p>
                    }
                }
            >
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
                        <Show
                            when=move || !subscriptions.get().is_empty()
                            fallback=|| {
                                view! {
                                    <p class="subscriptions-page__hint">"No subscriptions yet"</p>
                                }
                            }
                        >
                            <ul class="subscription-list">
                                {move || {
                                    subscriptions
                                        .get()
                                        .into_iter()
                                        .map(|subscription| {
                                            let id = subscription.id;
                                            let active = subscription.status == "active";
                                            view! {
                                                <li class="subscription-list__row">
                                                    <div class="subscription-list__info">
                                                        <span class="subscription-list__name">
                                                            {subscription_title(&subscription)}
                                                        </span>
                                                        <span class="subscription-list__period">
                                                            {subscription_period(&subscription)}
                                                        </span>
                                                        <span class="subscription-list__status">
                                                            {subscription.status.clone()}
                                                            {subscription
                                                                .auto_renew
                                                                .then_some(" · auto-renew")}
                                                        </span>
                                                    </div>
                                                    {active
                                                        .then(|| {
                                                            view! {
                                                                <button
                                                                    class="btn btn--danger"
                                                                    on:click=move |_| on_cancel(id)
                                                                >
                                                                    "Cancel"
                                                                </button>
                                                            }
                                                        })}
                                                </li>
                                            }
                                        })
                                        .collect_view()
                                }}
                            </ul>
                        </Show>
                    </Show>
                </Show>
            </Show>
        </div>
    }
}
