//! Registration form; creates the account and signs straight in.

#[cfg(test)]
#[path = "register_form_test.rs"]
mod register_form_test;

use leptos::prelude::*;

use crate::net::types::{LoginRequest, RegisterRequest};
use crate::state::session::SessionState;

/// Trim and require everything except the full name; the confirmation must
/// match the password exactly.
fn validate_register(
    username: &str,
    email: &str,
    password: &str,
    confirm: &str,
    full_name: &str,
) -> Result<RegisterRequest, &'static str> {
    let username = username.trim();
    let email = email.trim();
    if username.is_empty() || email.is_empty() || password.is_empty() {
        return Err("All fields except full name are required.");
    }
    if password != confirm {
        return Err("Passwords do not match");
    }
    let full_name = full_name.trim();
    Ok(RegisterRequest {
        username: username.to_owned(),
        email: email.to_owned(),
        password: password.to_owned(),
        full_name: (!full_name.is_empty()).then(|| full_name.to_owned()),
    })
}

/// Register form. On success the new credentials are exchanged for a token
/// immediately, so the user lands signed in.
#[component]
pub fn RegisterForm(on_success: Callback<()>, on_switch: Callback<()>) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    let username = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let full_name = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let request = match validate_register(
            &username.get(),
            &email.get(),
            &password.get(),
            &confirm.get(),
            &full_name.get(),
        ) {
            Ok(request) => request,
            Err(message) => {
                error.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        error.set(String::new());
        let login_request = LoginRequest {
            username: request.username.clone(),
            password: request.password.clone(),
        };

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = async {
                crate::net::api::register(&request).await?;
                crate::net::api::login(&login_request).await
            }
            .await;
            match result {
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
            let _ = (request, login_request);
        }
    };

    view! {
        <div class="auth-card">
            <h2 class="auth-card__title">"Create Account"</h2>
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
                    type="email"
                    placeholder="Email"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
                <input
                    class="auth-form__input"
                    type="text"
                    placeholder="Full name (optional)"
                    prop:value=move || full_name.get()
                    on:input=move |ev| full_name.set(event_target_value(&ev))
                />
                <input
                    class="auth-form__input"
                    type="password"
                    placeholder="Password"
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                />
                <input
                    class="auth-form__input"
                    type="password"
                    placeholder="Confirm password"
                    prop:value=move || confirm.get()
                    on:input=move |ev| confirm.set(event_target_value(&ev))
                />
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Creating account..." } else { "Register" }}
                </button>
            </form>
            <button class="auth-card__switch" on:click=move |_| on_switch.run(())>
                "Have an account? Sign in"
            </button>
        </div>
    }
}
