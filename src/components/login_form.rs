//! Login form: credentials in, bearer token into the session.

#[cfg(test)]
#[path = "login_form_test.rs"]
mod login_form_test;

use leptos::prelude::*;

use crate::net::types::LoginRequest;
use crate::state::session::SessionState;

/// Trim and require both fields before any network call.
fn validate_login(username: &str, password: &str) -> Result<LoginRequest, &'static str> {
    let username = username.trim();
    if username.is_empty() || password.is_empty() {
        return Err("Enter username and password.");
    }
    Ok(LoginRequest {
        username: username.to_owned(),
        password: password.to_owned(),
    })
}

/// Login form. On success the session token is installed (and persisted)
/// and `on_success` runs; the user snapshot arrives via the background
/// refresh in `app`.
#[component]
pub fn LoginForm(on_success: Callback<()>, on_switch: Callback<()>) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let request = match validate_login(&username.get(), &password.get()) {
            Ok(request) => request,
            Err(message) => {
                error.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        error.set(String::new());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::login(&request).await {
                Ok(token) => {
                    crate::util::token_store::save(&token.access_token);
                    session.update(|s| s.begin(token.access_token));
                    on_success.run(());
                }
                Err(e) => error.set(e.to_string()),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
        }
    };

    view! {
        <div class="auth-card">
            <h2 class="auth-card__title">"Sign In"</h2>
            <Show when=move || !error.get().is_empty()>
                <div class="message message--error">{move || error.get()}</div>
            </Show>
            <form class="auth-form" on:submit=on_submit>
                <input
                    class="auth-form__input"
                    type="text"
                    placeholder="Username"
                    prop:value=move || username.get()
                    on:input=move |ev| username.set(event_target_value(&ev))
                />
                <input
                    class="auth-form__input"
                    type="password"
                    placeholder="Password"
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                />
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Signing in..." } else { "Sign In" }}
                </button>
            </form>
            <button class="auth-card__switch" on:click=move |_| on_switch.run(())>
                "Need an account? Register"
            </button>
        </div>
    }
}
