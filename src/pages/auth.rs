//! Auth page: toggles between the login and register forms.

use leptos::prelude::*;

use crate::components::login_form::LoginForm;
use crate::components::register_form::RegisterForm;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Mode {
    Login,
    Register,
}

/// Auth page. `on_success` fires after either form installs a session and
/// navigates the app back home.
#[component]
pub fn AuthPage(on_success: Callback<()>) -> impl IntoView {
    let mode = RwSignal::new(Mode::Login);

    let to_register = Callback::new(move |()| mode.set(Mode::Register));
    let to_login = Callback::new(move |()| mode.set(Mode::Login));

    view! {
        <div class="auth-page">
            {move || match mode.get() {
                Mode::Login => view! {
                    <LoginForm on_success on_switch=to_register/>
                }
                .into_any(),
                Mode::Register => view! {
                    <RegisterForm on_success on_switch=to_login/>
                }
                .into_any(),
            }}
        </div>
    }
}
