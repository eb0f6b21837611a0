//! Publication detail modal with the subscribe form.
//!
//! SYSTEM CONTEXT
//! ==============
//! Overlays the catalog. Holds the duration/auto-renew selection locally and
//! submits one create-subscription request; on success it waits a short
//! grace period before notifying the parent, so the confirmation is visible.

#[cfg(test)]
#[path = "publication_detail_test.rs"]
mod publication_detail_test;

use leptos::prelude::*;

#[cfg(any(test, feature = "hydrate"))]
use crate::net::error::ApiError;
use crate::net::types::PublicationRecord;
#[cfg(any(test, feature = "hydrate"))]
use crate::net::types::SubscriptionRequest;
use crate::state::session::SessionState;
use crate::util::format;

/// Shown when submit is attempted without a session token.
pub const LOGIN_REQUIRED_MESSAGE: &str = "Please login to subscribe";

/// Fallback for failures that carry no server message.
#[cfg(any(test, feature = "hydrate"))]
const CREATE_FAILED_MESSAGE: &str = "Failed to create subscription";

/// UX grace period between the success confirmation and closing the modal.
#[cfg(feature = "hydrate")]
const SUCCESS_CLOSE_DELAY_MS: u64 = 1500;

/// Price charged for the selected duration.
fn selected_price(price_monthly: f64, price_yearly: f64, duration_months: u32) -> f64 {
    if duration_months == 1 {
        price_monthly
    } else {
        price_yearly
    }
}

/// Error text for a failed create: the server's message when the failure is
/// the structured kind, else a generic line.
#[cfg(any(test, feature = "hydrate"))]
fn subscribe_error_message(error: &ApiError) -> String {
    if error.is_structured() {
        error.to_string()
    } else {
        CREATE_FAILED_MESSAGE.to_owned()
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn build_subscription_request(
    publication_id: i64,
    duration_months: u32,
    auto_renew: bool,
) -> SubscriptionRequest {
    SubscriptionRequest {
        publication_id,
        duration_months,
        auto_renew,
    }
}

/// Detail modal. `on_subscribed` then `on_close` run once each after a
/// successful subscribe; `on_close` alone runs for dismissal.
#[component]
pub fn PublicationDetail(
    publication: PublicationRecord,
    on_close: Callback<()>,
    on_subscribed: Callback<()>,
) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    let duration = RwSignal::new(12u32);
    let auto_renew = RwSignal::new(false);
    let busy = RwSignal::new(false);
    let error = RwSignal::new(String::new());
    let success = RwSignal::new(false);

    let on_backdrop = move |_| on_close.run(());
    let on_close_click = move |_| on_close.run(());
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            on_close.run(());
        }
    };

    let publication_id = publication.id;
    let on_subscribe = move |_| {
        if busy.get() || success.get() {
            return;
        }
        let token = session.get_untracked().token;
        let Some(token) = token else {
            error.set(LOGIN_REQUIRED_MESSAGE.to_owned());
            return;
        };
        busy.set(true);
        error.set(String::new());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let request =
                build_subscription_request(publication_id, duration.get_untracked(), auto_renew.get_untracked());
            match crate::net::api::create_subscription(&token, &request).await {
                Ok(_) => {
                    success.set(true);
                    busy.set(false);
                    gloo_timers::future::sleep(std::time::Duration::from_millis(
                        SUCCESS_CLOSE_DELAY_MS,
                    ))
                    .await;
                    on_subscribed.run(());
                    on_close.run(());
                }
                Err(e) => {
                    error.set(subscribe_error_message(&e));
                    busy.set(false);
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (token, publication_id);
        }
    };

    let price_monthly = publication.price_monthly;
    let price_yearly = publication.price_yearly;
    let savings = format::savings_percent(price_monthly, price_yearly);
    let submit_label = move || {
        if busy.get() {
            "Processing...".to_owned()
        } else {
            let price = selected_price(price_monthly, price_yearly, duration.get());
            format!("Subscribe for {}", format::price(price))
        }
    };

    view! {
        <div class="modal-backdrop" on:click=on_backdrop>
            <div
                class="modal modal--publication"
                on:click=move |ev| ev.stop_propagation()
                on:keydown=on_keydown
                tabindex="0"
            >
                <div class="modal__header">
                    <h2 class="modal__title">{publication.title.clone()}</h2>
                    <button class="modal__close" on:click=on_close_click>"×"</button>
                </div>

                <div class="modal__body">
                    <div class="publication-detail__meta">
                        <span class="tag tag--kind">{publication.kind.clone()}</span>
                        {(!publication.is_available)
                            .then(|| view! { <span class="tag tag--unavailable">"Unavailable"</span> })}
                        {publication
                            .publisher
                            .as_ref()
                            .map(|p| view! { <p class="publication-detail__publisher">{p.clone()}</p> })}
                        {publication
                            .frequency
                            .as_ref()
                            .map(|f| view! { <p class="publication-detail__frequency">{f.clone()}</p> })}
                        {publication
                            .description
                            .as_ref()
                            .map(|d| view! { <p class="publication-detail__description">{d.clone()}</p> })}
                    </div>

                    <Show when={
                        let available = publication.is_available;
                        move || available
                    }>
                        <div class="subscribe-form">
                            <h3 class="subscribe-form__heading">"Subscribe"</h3>

                            <Show when=move || !error.get().is_empty()>
                                <div class="message message--error">{move || error.get()}</div>
                            </Show>
                            <Show when=move || success.get()>
                                <div class="message message--success">
                                    "Subscription created successfully!"
                                </div>
                            </Show>

                            <div class="subscribe-form__durations">
                                <button
                                    class="duration-option"
                                    class:duration-option--active=move || duration.get() == 1
                                    on:click=move |_| duration.set(1)
                                >
                                    <span class="duration-option__price">
                                        {format::price(price_monthly)}
                                    </span>
                                    <span class="duration-option__term">"per month"</span>
                                </button>
                                <button
                                    class="duration-option"
                                    class:duration-option--active=move || duration.get() == 12
                                    on:click=move |_| duration.set(12)
                                >
                                    <span class="duration-option__price">
                                        {format::price(price_yearly)}
                                    </span>
                                    <span class="duration-option__term">"per year"</span>
                                    {savings.map(|percent| {
                                        view! {
                                            <span class="duration-option__savings">
                                                {format!("Save {percent}%")}
                                            </span>
                                        }
                                    })}
                                </button>
                            </div>

                            <label class="subscribe-form__renew">
                                <input
                                    type="checkbox"
                                    prop:checked=move || auto_renew.get()
                                    on:change=move |ev| auto_renew.set(event_target_checked(&ev))
                                />
                                "Auto-renew subscription"
                            </label>

                            <button
                                class="btn btn--primary subscribe-form__submit"
                                disabled=move || busy.get()
                                on:click=on_subscribe
                            >
                                {submit_label}
                            </button>

                            <Show when=move || !session.get().is_authenticated()>
                                <p class="subscribe-form__hint">"Please login to subscribe"</p>
                            </Show>
                        </div>
                    </Show>
                </div>
            </div>
        </div>
    }
}
